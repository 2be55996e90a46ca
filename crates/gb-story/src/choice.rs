//! Choice options offered at the selection beats.

use serde::{Deserialize, Serialize};

use crate::attributes::Attribute;

/// A single selectable option at a story beat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// The display name shown to the player.
    pub name: String,
    /// Short flavor description.
    pub description: String,
    /// Fixed attribute deltas applied when this option is accepted.
    pub deltas: Vec<(Attribute, i32)>,
    /// Story flag recorded when this option is accepted.
    pub flag: Option<String>,
}

impl ChoiceOption {
    /// Create a new option with the given name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            deltas: Vec::new(),
            flag: None,
        }
    }

    /// Add an attribute delta.
    pub fn with_delta(mut self, attribute: Attribute, delta: i32) -> Self {
        self.deltas.push((attribute, delta));
        self
    }

    /// Set the story flag.
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// Format the option as a menu line: name, description, and deltas.
    pub fn present(&self) -> String {
        let deltas = self
            .deltas
            .iter()
            .map(|(attribute, delta)| format!("{attribute} {delta:+}"))
            .collect::<Vec<_>>()
            .join(", ");

        if deltas.is_empty() {
            format!("{} - {}", self.name, self.description)
        } else {
            format!("{} - {} ({deltas})", self.name, self.description)
        }
    }
}
