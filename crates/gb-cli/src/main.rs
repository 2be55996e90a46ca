//! CLI front end for the Gemborn isekai simulator.

mod play;

use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gemborn",
    about = "Gemborn, a choice-driven isekai reincarnation simulator",
    version
)]
struct Cli {
    /// RNG seed for the narration's flavor rolls
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = play::run(cli.seed) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
