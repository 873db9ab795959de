//! Agent definition — name, model, instruction.

use compact_str::CompactString;

/// Static definition of a conversational agent.
#[derive(Debug, Clone)]
pub struct Agent {
    /// The agent name.
    pub name: CompactString,
    /// The model id the agent runs on.
    pub model: CompactString,
    /// The system instruction.
    pub instruction: String,
}

impl Agent {
    /// Create a new agent with an empty instruction and a default model.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            model: "gemini-2.5-pro".into(),
            instruction: String::new(),
        }
    }

    /// Set the model id.
    pub fn model(mut self, model: impl Into<CompactString>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the system instruction.
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }
}
