//! Authored narrative content: worlds, origins, blessings, legacies, events.
//!
//! All content is fixed at compile time. Three options per selection beat,
//! three events with three responses each.

use crate::attributes::Attribute;
use crate::choice::ChoiceOption;
use crate::event::{Outcome, StoryEvent};

/// Opening narration shown before the first prompt.
pub const INTRO: &str = "An improbable accident cuts your old life short. In the void \
between realities you meet Gem, the god who manages reincarnations. He smiles and \
offers a second chance at living, in a fantastic realm of his keeping.";

/// Gem's greeting, shown with the intro.
pub const GREETING: &str = "Greetings, stray traveler. I am Gem, weaver of destinies. \
Choose with care where to be reborn, which blessing to carry, and what legacy to \
build. Every decision shapes the story we will tell.";

/// Menu title for the name beat.
pub const NAME_PROMPT: &str = "What were you called in your old world?";
/// Menu title for the world beat.
pub const WORLD_PROMPT: &str = "Choose your new world";
/// Menu title for the origin beat.
pub const ORIGIN_PROMPT: &str = "What will your new origin be?";
/// Menu title for the blessing beat.
pub const POWER_PROMPT: &str = "Which blessing do you wish to receive?";
/// Menu title for the legacy beat.
pub const LEGACY_PROMPT: &str = "What legacy do you mean to build?";

/// The three worlds open to a reborn soul.
pub fn worlds() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new(
            "Skyreach Dominion",
            "Cities drift between cloudbanks and magic feeds the trade winds",
        )
        .with_delta(Attribute::Mana, 5)
        .with_delta(Attribute::Charisma, 2)
        .with_flag("world_chosen"),
        ChoiceOption::new(
            "Emberhold Empire",
            "Lands forged in steel and steam, where discipline speaks loudest",
        )
        .with_delta(Attribute::Vigor, 6)
        .with_flag("world_chosen"),
        ChoiceOption::new(
            "Lumen Isles",
            "Scattered isles warded by ancestral spirits",
        )
        .with_delta(Attribute::Luck, 5)
        .with_delta(Attribute::Mana, 2)
        .with_flag("world_chosen"),
    ]
}

/// The three origins a reborn soul may wake into.
pub fn origins() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new(
            "Artificer's Heir",
            "Reborn to a family that masters arcane machinery",
        )
        .with_delta(Attribute::Mana, 3)
        .with_delta(Attribute::Vigor, 2)
        .with_flag("origin_chosen"),
        ChoiceOption::new(
            "Guild Ward",
            "An influential guild adopts you as a protege of Gem",
        )
        .with_delta(Attribute::Charisma, 5)
        .with_flag("origin_chosen"),
        ChoiceOption::new(
            "Wandering Hunter",
            "You wake in a caravan crossing untamed territory",
        )
        .with_delta(Attribute::Vigor, 3)
        .with_delta(Attribute::Luck, 2)
        .with_flag("origin_chosen"),
    ]
}

/// The three blessings Gem offers.
pub fn powers() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new(
            "Starforge",
            "Conjure weapons shaped from celestial light",
        )
        .with_delta(Attribute::Vigor, 3)
        .with_delta(Attribute::Mana, 5)
        .with_flag("power_chosen"),
        ChoiceOption::new(
            "Echo of Hours",
            "Glimpse moments shortly before they happen",
        )
        .with_delta(Attribute::Luck, 6)
        .with_flag("power_chosen"),
        ChoiceOption::new(
            "Heartstring Lyre",
            "Enchanted music that rallies allies and confounds foes",
        )
        .with_delta(Attribute::Charisma, 5)
        .with_delta(Attribute::Mana, 2)
        .with_flag("power_chosen"),
    ]
}

/// The three legacies a reborn soul may pursue.
pub fn legacies() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new(
            "Celestial Warden",
            "A promise to shield the defenseless in Gem's name",
        )
        .with_delta(Attribute::Charisma, 2)
        .with_delta(Attribute::Vigor, 2)
        .with_flag("legacy_chosen"),
        ChoiceOption::new(
            "Errant Sage",
            "A hunger for knowledge that leads through living libraries",
        )
        .with_delta(Attribute::Mana, 2)
        .with_delta(Attribute::Luck, 2)
        .with_flag("legacy_chosen"),
        ChoiceOption::new(
            "Defier of Fate",
            "A vow to confront the gears of the world and win",
        )
        .with_delta(Attribute::Vigor, 2)
        .with_delta(Attribute::Luck, 2)
        .with_flag("legacy_chosen"),
    ]
}

/// The fixed chain of story events, in play order.
pub fn events() -> Vec<StoryEvent> {
    vec![
        StoryEvent::new(
            "Festival of Rebirth",
            "The town celebrates your arrival, and Gem proposes a surprise challenge.",
        )
        .with_option(
            "Display your blessing in a friendly duel",
            Outcome::Glory,
            "festival_duel",
        )
        .with_option(
            "Walk the market stalls handing out small blessings",
            Outcome::Mystic,
            "festival_blessings",
        )
        .with_option(
            "Help quietly behind the communal kitchens",
            Outcome::Scar,
            "festival_toil",
        ),
        StoryEvent::new(
            "The Serpentine Library",
            "A maze of living scrolls promises secrets older than the realm.",
        )
        .with_option(
            "Dive into the glowing manuscripts",
            Outcome::Mystic,
            "library_study",
        )
        .with_option(
            "Follow a spirit guide into a sealed hall",
            Outcome::Glory,
            "library_sealed_hall",
        )
        .with_option(
            "Withdraw at the touch of a hostile presence",
            Outcome::Scar,
            "library_retreat",
        ),
        StoryEvent::new(
            "Trial at Dusk",
            "An elemental titan stirs, menacing the town that took you in.",
        )
        .with_option("Meet the titan head-on", Outcome::Glory, "dusk_charge")
        .with_option("Marshal an orderly retreat", Outcome::Scar, "dusk_retreat")
        .with_option(
            "Channel your mana to seal the creature",
            Outcome::Mystic,
            "dusk_seal",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_options_per_stage() {
        assert_eq!(worlds().len(), 3);
        assert_eq!(origins().len(), 3);
        assert_eq!(powers().len(), 3);
        assert_eq!(legacies().len(), 3);
    }

    #[test]
    fn stage_options_carry_stage_flags() {
        for option in worlds() {
            assert_eq!(option.flag.as_deref(), Some("world_chosen"));
        }
        for option in origins() {
            assert_eq!(option.flag.as_deref(), Some("origin_chosen"));
        }
        for option in powers() {
            assert_eq!(option.flag.as_deref(), Some("power_chosen"));
        }
        for option in legacies() {
            assert_eq!(option.flag.as_deref(), Some("legacy_chosen"));
        }
    }

    #[test]
    fn deltas_stay_small() {
        let all_options = [worlds(), origins(), powers(), legacies()].concat();
        for option in all_options {
            for (_, delta) in &option.deltas {
                assert!(delta.abs() <= 8, "{}: delta {delta} out of range", option.name);
            }
        }
    }

    #[test]
    fn three_events_with_three_responses() {
        let events = events();
        assert_eq!(events.len(), 3);
        for event in &events {
            assert_eq!(event.options.len(), 3, "{}", event.title);
        }
    }

    #[test]
    fn event_flags_are_unique() {
        let mut flags: Vec<String> = events()
            .iter()
            .flat_map(|event| event.options.iter().map(|option| option.flag.clone()))
            .collect();
        let total = flags.len();
        flags.sort();
        flags.dedup();
        assert_eq!(flags.len(), total);
    }
}
