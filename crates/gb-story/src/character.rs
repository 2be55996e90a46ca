//! The reborn character's accumulated state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSet;
use crate::choice::ChoiceOption;

/// The player's character: chosen options, attributes, flags, and tallies.
///
/// Flags are grow-only within a session; there is no removal API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Name carried over from the old world.
    pub name: String,
    /// Chosen world, once selected.
    pub world: Option<String>,
    /// Chosen origin, once selected.
    pub origin: Option<String>,
    /// Chosen blessing, once selected.
    pub power: Option<String>,
    /// Chosen legacy, once selected.
    pub legacy: Option<String>,
    /// Numeric attributes, clamped to 0-100.
    pub attributes: AttributeSet,
    flags: BTreeSet<String>,
    /// Glorious deeds accumulated from events.
    pub glory: u32,
    /// Scars accumulated from events.
    pub scars: u32,
}

impl Character {
    /// Create a new character with baseline attributes and no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an option's fixed attribute deltas and flag.
    pub fn apply(&mut self, option: &ChoiceOption) {
        for (attribute, delta) in &option.deltas {
            self.attributes.adjust(*attribute, *delta);
        }
        if let Some(flag) = &option.flag {
            self.flags.insert(flag.clone());
        }
    }

    /// Record a story flag.
    pub fn add_flag(&mut self, flag: impl Into<String>) {
        self.flags.insert(flag.into());
    }

    /// Whether a story flag has been recorded.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// All recorded flags in sorted order.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;

    #[test]
    fn apply_option_deltas_and_flag() {
        let mut character = Character::new();
        let option = ChoiceOption::new("Emberhold Empire", "Steel and steam")
            .with_delta(Attribute::Vigor, 6)
            .with_flag("world_chosen");

        character.apply(&option);

        assert_eq!(character.attributes.get(Attribute::Vigor), 56);
        assert!(character.has_flag("world_chosen"));
    }

    #[test]
    fn flags_only_grow() {
        let mut character = Character::new();
        character.add_flag("world_chosen");
        character.add_flag("power_chosen");
        character.add_flag("world_chosen"); // duplicate, no effect

        let flags: Vec<&str> = character.flags().collect();
        assert_eq!(flags, vec!["power_chosen", "world_chosen"]);
    }

    #[test]
    fn round_trip_serde() {
        let mut character = Character::new();
        character.name = "Aldric".to_string();
        character.world = Some("Lumen Isles".to_string());
        character.add_flag("world_chosen");
        character.glory = 2;

        let json = serde_json::to_string(&character).unwrap();
        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back, character);
    }
}
