//! The interactive story loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gb_story::{Attribute, Beat, Prompt, SessionConfig, StoryError, StorySession, content};

/// Run one full session from intro to epilogue.
///
/// Returns an error if stdin closes before the story ends or the
/// terminal cannot be written to.
pub fn run(seed: u64) -> Result<(), String> {
    let config = SessionConfig::default().with_seed(seed);
    let mut session = StorySession::new(config);

    print_banner();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    play_loop(&mut session, &mut reader)?;

    let epilogue = session.epilogue().map_err(|e| e.to_string())?;
    println!("\n{epilogue}\n");
    print_attribute_table(&session);
    print_recap(&session);
    println!("\nThank you for sharing your journey with Gem. Until the next reincarnation!");

    Ok(())
}

fn play_loop(session: &mut StorySession, reader: &mut impl BufRead) -> Result<(), String> {
    let mut line = String::new();

    while !session.is_finished() {
        print_prompt(&session.prompt());

        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Err("session interrupted before the epilogue".to_string()),
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() && !matches!(session.beat(), Beat::Name) {
            continue;
        }

        match session.submit(input) {
            Ok(output) => println!("\n{output}\n"),
            Err(e @ (StoryError::InvalidSelection { .. } | StoryError::NameRequired)) => {
                println!("{}\n", e.to_string().yellow());
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(())
}

fn print_banner() {
    println!("{}", "=".repeat(72));
    println!("{}", "  GEMBORN: AN ISEKAI REINCARNATION SIMULATOR".bold());
    println!("{}", "=".repeat(72));
    println!("{}\n", content::INTRO);
    println!("{}\n", content::GREETING);
}

fn print_prompt(prompt: &Prompt) {
    println!("--- {} ---", prompt.title.bold());
    if !prompt.body.is_empty() {
        println!("{}", prompt.body);
    }
    for (index, option) in prompt.options.iter().enumerate() {
        println!("  {}. {option}", index + 1);
    }
}

fn print_attribute_table(session: &StorySession) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Value"]);

    for attribute in Attribute::all() {
        table.add_row(vec![
            attribute.to_string(),
            session.character().attributes.get(*attribute).to_string(),
        ]);
    }

    println!("{table}");
}

fn print_recap(session: &StorySession) {
    let chronicle = session.chronicle();
    if chronicle.is_empty() {
        return;
    }

    println!("\n  {} ({} steps)", "Chronicle".bold(), chronicle.len());
    for (index, entry) in chronicle.entries().iter().enumerate() {
        println!("  {}. {}: {}", index + 1, entry.beat, entry.text);
    }
}
