//! Character attributes with clamped adjustment.
//!
//! Four attributes describe the reborn character. Each starts at a
//! neutral baseline and every adjustment is clamped to 0-100, so the
//! narration never has to cope with nonsensical values.

use serde::{Deserialize, Serialize};

/// Lowest possible attribute value.
pub const ATTRIBUTE_MIN: i32 = 0;
/// Highest possible attribute value.
pub const ATTRIBUTE_MAX: i32 = 100;
/// Value every attribute starts at.
pub const ATTRIBUTE_BASELINE: i32 = 50;

/// One of the four character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Physical endurance and raw strength.
    Vigor,
    /// Arcane reserves.
    Mana,
    /// The favor of chance.
    Luck,
    /// Presence and persuasion.
    Charisma,
}

impl Attribute {
    /// All attributes in display order.
    pub fn all() -> &'static [Self] {
        &[Self::Vigor, Self::Mana, Self::Luck, Self::Charisma]
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vigor => write!(f, "Vigor"),
            Self::Mana => write!(f, "Mana"),
            Self::Luck => write!(f, "Luck"),
            Self::Charisma => write!(f, "Charisma"),
        }
    }
}

/// The character's attribute record, clamped to 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    vigor: i32,
    mana: i32,
    luck: i32,
    charisma: i32,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            vigor: ATTRIBUTE_BASELINE,
            mana: ATTRIBUTE_BASELINE,
            luck: ATTRIBUTE_BASELINE,
            charisma: ATTRIBUTE_BASELINE,
        }
    }
}

impl AttributeSet {
    /// Create a new attribute set at the neutral baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value of an attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Vigor => self.vigor,
            Attribute::Mana => self.mana,
            Attribute::Luck => self.luck,
            Attribute::Charisma => self.charisma,
        }
    }

    /// Adjust an attribute by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, attribute: Attribute, delta: i32) -> i32 {
        let slot = match attribute {
            Attribute::Vigor => &mut self.vigor,
            Attribute::Mana => &mut self.mana,
            Attribute::Luck => &mut self.luck,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = (*slot + delta).clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX);
        *slot
    }

    /// One-line synthesis in display order, e.g. `Vigor 57, Mana 63, ...`.
    pub fn summary(&self) -> String {
        Attribute::all()
            .iter()
            .map(|attribute| format!("{attribute} {}", self.get(*attribute)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
