//! Epilogue rendering.

use crate::character::Character;

/// Render the closing narrative for a finished story.
///
/// References the chosen world and blessing verbatim, tallies glory and
/// scars, picks a destiny line from their difference, and closes with the
/// attribute synthesis.
pub fn render_epilogue(character: &Character) -> String {
    let world = character.world.as_deref().unwrap_or("an unnamed world");
    let power = character.power.as_deref().unwrap_or("an unnamed blessing");
    let destiny = destiny_line(i64::from(character.glory) - i64::from(character.scars));

    format!(
        "At the end of the road, {name} of {world}, bearer of {power}, counts \
         {glory} glorious deeds and {scars} memorable scars. {destiny} The \
         synthesis of your potential: {summary}.",
        name = character.name,
        glory = character.glory,
        scars = character.scars,
        summary = character.attributes.summary(),
    )
}

fn destiny_line(difference: i64) -> &'static str {
    if difference >= 3 {
        "You become a living legend, sung in every hall and invoked as patron \
         by heroes yet unborn."
    } else if difference >= 1 {
        "Your road was marked by victories and true friendships; the guild \
         halls keep your name in warm memory."
    } else if difference == 0 {
        "You struck a delicate balance between trial and triumph, a quiet life \
         rich in stories worth telling."
    } else {
        "The scars exact their price, yet you stand; courage, you prove, is \
         also the art of enduring."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_character() -> Character {
        let mut character = Character::new();
        character.name = "Aldric".to_string();
        character.world = Some("Skyreach Dominion".to_string());
        character.power = Some("Starforge".to_string());
        character
    }

    #[test]
    fn references_world_and_power_verbatim() {
        let character = finished_character();
        let epilogue = render_epilogue(&character);

        assert!(epilogue.contains("Aldric"));
        assert!(epilogue.contains("Skyreach Dominion"));
        assert!(epilogue.contains("Starforge"));
    }

    #[test]
    fn legend_tier() {
        let mut character = finished_character();
        character.glory = 3;
        assert!(render_epilogue(&character).contains("living legend"));
    }

    #[test]
    fn renown_tier() {
        let mut character = finished_character();
        character.glory = 2;
        character.scars = 1;
        assert!(render_epilogue(&character).contains("warm memory"));
    }

    #[test]
    fn balance_tier() {
        let character = finished_character();
        assert!(render_epilogue(&character).contains("delicate balance"));
    }

    #[test]
    fn endurance_tier() {
        let mut character = finished_character();
        character.scars = 2;
        assert!(render_epilogue(&character).contains("art of enduring"));
    }

    #[test]
    fn includes_attribute_synthesis() {
        let character = finished_character();
        assert!(render_epilogue(&character).contains("Vigor 50, Mana 50, Luck 50, Charisma 50"));
    }
}
