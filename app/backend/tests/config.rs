//! Configuration resolution tests.

use waypoint_backend::BackendConfig;

#[test]
fn defaults_when_nothing_is_set() {
    let config = BackendConfig::from_lookup(|_| None);
    assert!(config.use_vertex);
    assert_eq!(config.project, "");
    assert_eq!(config.region, "us-central1");
    assert_eq!(config.api_key, "");
    assert_eq!(config.bind, "0.0.0.0:8080");
}

#[test]
fn vertex_flag_parses_boolean_spellings() {
    for value in ["false", "0", "no", "off", "nonsense"] {
        let config = BackendConfig::from_lookup(|key| {
            (key == "GOOGLE_GENAI_USE_VERTEXAI").then(|| value.to_owned())
        });
        assert!(!config.use_vertex, "{value} should disable vertex mode");
    }

    for value in ["true", "1", "yes", "TRUE"] {
        let config = BackendConfig::from_lookup(|key| {
            (key == "GOOGLE_GENAI_USE_VERTEXAI").then(|| value.to_owned())
        });
        assert!(config.use_vertex, "{value} should enable vertex mode");
    }
}

#[test]
fn project_falls_back_to_project_id() {
    let config = BackendConfig::from_lookup(|key| {
        (key == "PROJECT_ID").then(|| "demo-project".to_owned())
    });
    assert_eq!(config.project, "demo-project");
}

#[test]
fn cloud_project_wins_over_project_id() {
    let config = BackendConfig::from_lookup(|key| match key {
        "GOOGLE_CLOUD_PROJECT" => Some("primary".to_owned()),
        "PROJECT_ID" => Some("fallback".to_owned()),
        _ => None,
    });
    assert_eq!(config.project, "primary");
}

#[test]
fn explicit_values_override_defaults() {
    let config = BackendConfig::from_lookup(|key| match key {
        "GOOGLE_CLOUD_LOCATION" => Some("europe-west1".to_owned()),
        "GOOGLE_API_KEY" => Some("sk-test".to_owned()),
        "WAYPOINT_BIND" => Some("127.0.0.1:9999".to_owned()),
        _ => None,
    });
    assert_eq!(config.region, "europe-west1");
    assert_eq!(config.api_key, "sk-test");
    assert_eq!(config.bind, "127.0.0.1:9999");
}
