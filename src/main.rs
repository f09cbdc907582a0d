//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `profile_extract` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the result JSON to stdout, or the error to stderr
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use profile_extract::initialization::init_logger_with;
use profile_extract::{scrape, Config, ScrapeOutput};

fn render(output: &ScrapeOutput, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };
    json.context("Failed to serialize result")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting PROFILE_EXTRACT_URL in .env instead of passing it
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match scrape(&config).await {
        Ok(output) => {
            println!("{}", render(&output, config.pretty)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("profile_extract error: {:#}", anyhow::Error::new(e));
            process::exit(1);
        }
    }
}
