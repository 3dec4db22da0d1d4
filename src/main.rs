//! # Bender Slack - mrkdwn formatting CLI
//!
//! Command-line front end for the `bender_slack` library: converts Markdown
//! replies to Slack mrkdwn and splits them into message-sized chunks.

mod cli;
mod run;

use clap::Parser;
use dotenv::dotenv;

use crate::cli::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    let config = bender_slack::core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = run::run(args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
