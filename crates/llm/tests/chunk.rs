//! Tests for generateContent response parsing and SSE framing.

use waypoint_llm::{FinishReason, GenerateChunk, sse_payloads};

#[test]
fn parse_text_chunk() {
    let data = r#"{"candidates":[{"content":{"parts":[{"text":"Hi!"}],"role":"model"},"finishReason":"STOP"}],"usageMetadata":{"promptTokenCount":5,"candidatesTokenCount":3,"totalTokenCount":8}}"#;
    let chunk: GenerateChunk = serde_json::from_str(data).unwrap();

    assert_eq!(chunk.text().as_deref(), Some("Hi!"));
    assert_eq!(chunk.reason(), Some(FinishReason::Stop));
    assert_eq!(chunk.usage.unwrap().total_tokens, 8);
}

#[test]
fn parse_chunk_without_finish_reason() {
    let data = r#"{"candidates":[{"content":{"parts":[{"text":"World"}],"role":"model"}}]}"#;
    let chunk: GenerateChunk = serde_json::from_str(data).unwrap();

    assert_eq!(chunk.text().as_deref(), Some("World"));
    assert!(chunk.reason().is_none());
}

#[test]
fn multiple_parts_join_in_order() {
    let data = r#"{"candidates":[{"content":{"parts":[{"text":"foo"},{"text":"bar"}],"role":"model"}}]}"#;
    let chunk: GenerateChunk = serde_json::from_str(data).unwrap();
    assert_eq!(chunk.text().as_deref(), Some("foobar"));
}

#[test]
fn no_candidates_has_no_text() {
    let chunk: GenerateChunk = serde_json::from_str("{}").unwrap();
    assert!(chunk.text().is_none());
    assert!(chunk.reason().is_none());
}

#[test]
fn non_text_parts_are_ignored() {
    // A functionCall part carries no text field.
    let data = r#"{"candidates":[{"content":{"parts":[{"functionCall":{"name":"f"}}],"role":"model"}}]}"#;
    let chunk: GenerateChunk = serde_json::from_str(data).unwrap();
    assert!(chunk.text().is_none());
}

#[test]
fn unknown_finish_reason_maps_to_other() {
    let data = r#"{"candidates":[{"finishReason":"BLOCKLIST"}]}"#;
    let chunk: GenerateChunk = serde_json::from_str(data).unwrap();
    assert_eq!(chunk.reason(), Some(FinishReason::Other));
}

#[test]
fn safety_finish_reason() {
    let data = r#"{"candidates":[{"content":{"parts":[{"text":""}],"role":"model"},"finishReason":"SAFETY"}]}"#;
    let chunk: GenerateChunk = serde_json::from_str(data).unwrap();
    assert_eq!(chunk.reason(), Some(FinishReason::Safety));
    // The empty text part carries no usable text.
    assert!(chunk.text().is_none());
}

#[test]
fn sse_payloads_extracts_data_lines() {
    let body = "data: {\"a\":1}\n\ndata: {\"b\":2}\n\n";
    let payloads: Vec<&str> = sse_payloads(body).collect();
    assert_eq!(payloads, vec!["{\"a\":1}", "{\"b\":2}"]);
}

#[test]
fn sse_payloads_skips_blank_frames() {
    let body = "data: \n\ndata: {\"a\":1}\n\n";
    let payloads: Vec<&str> = sse_payloads(body).collect();
    assert_eq!(payloads, vec!["{\"a\":1}"]);
}

#[test]
fn sse_payloads_ignores_non_data_noise() {
    let payloads: Vec<&str> = sse_payloads(": keepalive\n\n").collect();
    assert!(payloads.is_empty());
}

#[test]
fn constructed_chunks_round_through_accessors() {
    let chunk = GenerateChunk::of_text("hello");
    assert_eq!(chunk.text().as_deref(), Some("hello"));
    assert!(chunk.reason().is_none());

    let finish = GenerateChunk::finish(FinishReason::Stop);
    assert!(finish.text().is_none());
    assert_eq!(finish.reason(), Some(FinishReason::Stop));
}
