//! Command-line argument surface for the `persona` binary.

use std::path::PathBuf;

use clap::Parser;

/// Generate a Reddit user persona with citations.
#[derive(Debug, Parser)]
#[command(name = "persona", version, about)]
pub struct Cli {
    /// Reddit user profile URL (e.g. https://www.reddit.com/user/<name>/).
    pub profile_url: String,

    /// Output filename (defaults to <username>_persona.txt).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print verbose progress with timestamps.
    #[arg(short, long)]
    pub verbose: bool,
}
