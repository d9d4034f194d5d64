//! Reddit persona generator CLI.
//!
//! Fetches a user's public posts and comments, derives a heuristic persona,
//! and writes it as a text report with citations.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` — log filter for fetch diagnostics (default: off)
//!
//! # Usage
//!
//! ```bash
//! persona https://www.reddit.com/user/<name>/
//! persona https://www.reddit.com/u/<name> -o report.txt --verbose
//! ```

use std::path::PathBuf;

use clap::Parser;

use reddit_persona::cli::Cli;
use reddit_persona::report;
use reddit_persona::utilities::logger::Logger;
use reddit_persona::utilities::printer::{Printer, PrinterColor};
use reddit_persona::{extract_username, PersonaAnalyzer, PersonaError, RedditScraper, DEFAULT_LIMIT};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let printer = Printer::new();
    let logger = Logger::new(cli.verbose);

    // Invalid URLs abort here, before any network call.
    let username = extract_username(&cli.profile_url)?;
    printer.print(&format!("Analyzing user: {}", username), PrinterColor::Cyan);

    let scraper = RedditScraper::new()?;
    printer.print_plain(&format!("Scraping data for user: {}", username));
    logger.log("info", "fetching posts and comments", None);

    let items = scraper.fetch_user_content(&username, DEFAULT_LIMIT).await;
    if items.is_empty() {
        return Err(PersonaError::NoContent { username }.into());
    }
    printer.print_plain(&format!("Found {} posts/comments", items.len()));

    printer.print_plain("Generating persona...");
    let persona = PersonaAnalyzer::new().analyze(&username, &items);
    logger.log(
        "info",
        &format!("persona built with {} interests", persona.interests.len()),
        None,
    );

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}_persona.txt", username)));
    report::save_to_file(&persona, &output)?;

    printer.print(
        &format!("Analysis complete! Check the file: {}", output.display()),
        PrinterColor::BoldGreen,
    );
    Ok(())
}
