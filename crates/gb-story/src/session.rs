//! Narrative session: the linear walk from rebirth to epilogue.
//!
//! `StorySession` owns the character, the authored content, and a seeded
//! RNG. Input handling is pure: the caller reads lines, the session
//! validates and narrates. Invalid input leaves every part of the state
//! untouched, so the caller can simply show the same prompt again.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::beat::Beat;
use crate::character::Character;
use crate::choice::ChoiceOption;
use crate::chronicle::Chronicle;
use crate::content;
use crate::epilogue::render_epilogue;
use crate::error::{StoryError, StoryResult};
use crate::event::{StoryEvent, resolve_option};

/// Configuration for a story session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible narration flavor.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// The current prompt: what to show before reading the next line.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Heading for the prompt block.
    pub title: String,
    /// Scene or question text, possibly empty.
    pub body: String,
    /// Enumerated options; empty for free-text prompts.
    pub options: Vec<String>,
}

/// An interactive narrative session.
pub struct StorySession {
    beat: Beat,
    character: Character,
    chronicle: Chronicle,
    worlds: Vec<ChoiceOption>,
    origins: Vec<ChoiceOption>,
    powers: Vec<ChoiceOption>,
    legacies: Vec<ChoiceOption>,
    events: Vec<StoryEvent>,
    rng: StdRng,
}

impl StorySession {
    /// Create a new session over the authored story content.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            beat: Beat::Name,
            character: Character::new(),
            chronicle: Chronicle::new(),
            worlds: content::worlds(),
            origins: content::origins(),
            powers: content::powers(),
            legacies: content::legacies(),
            events: content::events(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The current beat.
    pub fn beat(&self) -> Beat {
        self.beat
    }

    /// The character as accumulated so far.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// The chronicle of accepted steps.
    pub fn chronicle(&self) -> &Chronicle {
        &self.chronicle
    }

    /// Whether the terminal beat has been reached.
    pub fn is_finished(&self) -> bool {
        self.beat.is_terminal()
    }

    /// The prompt for the current beat.
    pub fn prompt(&self) -> Prompt {
        match self.beat {
            Beat::Name => Prompt {
                title: "Your Old Name".to_string(),
                body: content::NAME_PROMPT.to_string(),
                options: Vec::new(),
            },
            Beat::World => menu_prompt(content::WORLD_PROMPT, &self.worlds),
            Beat::Origin => menu_prompt(content::ORIGIN_PROMPT, &self.origins),
            Beat::Power => menu_prompt(content::POWER_PROMPT, &self.powers),
            Beat::Legacy => menu_prompt(content::LEGACY_PROMPT, &self.legacies),
            Beat::Event(index) => {
                let event = &self.events[index];
                Prompt {
                    title: event.title.clone(),
                    body: event.description.clone(),
                    options: event.options.iter().map(|option| option.text.clone()).collect(),
                }
            }
            Beat::Epilogue => Prompt {
                title: "Epilogue".to_string(),
                body: String::new(),
                options: Vec::new(),
            },
        }
    }

    /// Submit one line of player input for the current beat.
    ///
    /// On success the session advances to the successor beat and the
    /// narration for the accepted step is returned. On failure the state
    /// is unchanged and the same prompt should be shown again.
    pub fn submit(&mut self, input: &str) -> StoryResult<String> {
        let trimmed = input.trim();
        match self.beat {
            Beat::Name => self.submit_name(trimmed),
            Beat::World | Beat::Origin | Beat::Power | Beat::Legacy => self.submit_choice(trimmed),
            Beat::Event(index) => self.submit_event(trimmed, index),
            Beat::Epilogue => Err(StoryError::SessionFinished),
        }
    }

    /// Render the epilogue for a finished session.
    pub fn epilogue(&self) -> StoryResult<String> {
        if !self.is_finished() {
            return Err(StoryError::EpiloguePending);
        }
        Ok(render_epilogue(&self.character))
    }

    fn submit_name(&mut self, input: &str) -> StoryResult<String> {
        if input.is_empty() {
            return Err(StoryError::NameRequired);
        }

        self.character.name = input.to_string();
        self.chronicle
            .record(self.beat.to_string(), format!("Answered to the name {input}"));
        self.advance();

        Ok(format!(
            "Gem nods. \"{input}. A fine name to carve into a new world.\""
        ))
    }

    fn submit_choice(&mut self, input: &str) -> StoryResult<String> {
        let options = self.stage_options();
        let index = parse_selection(input, options.len())?;
        let option = options[index].clone();

        self.character.apply(&option);
        match self.beat {
            Beat::World => self.character.world = Some(option.name.clone()),
            Beat::Origin => self.character.origin = Some(option.name.clone()),
            Beat::Power => self.character.power = Some(option.name.clone()),
            Beat::Legacy => self.character.legacy = Some(option.name.clone()),
            _ => {}
        }
        self.chronicle
            .record(self.beat.to_string(), format!("Chose {}", option.name));
        self.advance();

        Ok(format!("You choose {}. {}.", option.name, option.description))
    }

    fn submit_event(&mut self, input: &str, index: usize) -> StoryResult<String> {
        let event = &self.events[index];
        let selected = parse_selection(input, event.options.len())?;
        let option = event.options[selected].clone();
        let title = event.title.clone();

        let narration = resolve_option(&option, &mut self.character, &mut self.rng);
        self.chronicle.record(
            self.beat.to_string(),
            format!("{title}: {} ({})", option.text, option.outcome),
        );
        self.advance();

        Ok(narration)
    }

    fn stage_options(&self) -> &[ChoiceOption] {
        match self.beat {
            Beat::World => &self.worlds,
            Beat::Origin => &self.origins,
            Beat::Power => &self.powers,
            Beat::Legacy => &self.legacies,
            _ => &[],
        }
    }

    fn advance(&mut self) {
        self.beat = self.beat.next(self.events.len());
    }
}

/// Build a menu prompt from a title and option list.
fn menu_prompt(title: &str, options: &[ChoiceOption]) -> Prompt {
    Prompt {
        title: title.to_string(),
        body: String::new(),
        options: options.iter().map(ChoiceOption::present).collect(),
    }
}

/// Parse a 1-based menu selection against the number of options.
fn parse_selection(input: &str, count: usize) -> StoryResult<usize> {
    let invalid = || StoryError::InvalidSelection {
        input: input.to_string(),
        count,
    };

    let number: usize = input.parse().map_err(|_| invalid())?;
    if (1..=count).contains(&number) {
        Ok(number - 1)
    } else {
        Err(invalid())
    }
}
