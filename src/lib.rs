//! profile_extract library: page metadata extraction
//!
//! This library fetches a web page and extracts profile and company metadata
//! from it: titles, descriptions, JSON-LD facts, meta tags, social account links,
//! and the handles and hashtags mentioned in free text.
//!
//! The fetch is the only asynchronous step. Everything after it is a pure,
//! synchronous pass over the parsed document, available on its own through
//! [`analyze_social`] and [`analyze_company`].
//!
//! # Example
//!
//! ```no_run
//! use profile_extract::{scrape, Config, ExtractionMode, ScrapeOutput};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: Some("https://acme.example".to_string()),
//!     mode: ExtractionMode::Company,
//!     ..Default::default()
//! };
//!
//! if let ScrapeOutput::Company(company) = scrape(&config).await? {
//!     println!("Names: {:?}", company.names);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! [`scrape`] requires a Tokio runtime. The `analyze_*` functions do not.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod jsonld;
pub mod parse;
mod utils;

// Re-export public API
pub use aggregate::{
    analyze, analyze_company, analyze_social, CompanyResult, ProfileResult, ScrapeOutput,
};
pub use config::{Config, ExtractionMode, LogFormat, LogLevel};
pub use error_handling::{ErrorType, InputError, ScrapeError};
pub use run::scrape;

// Internal run module (validate, fetch, analyze)
mod run {
    use log::info;

    use crate::aggregate::{analyze, ScrapeOutput};
    use crate::config::Config;
    use crate::error_handling::ScrapeError;
    use crate::fetch::{fetch_page, validate_target_url};
    use crate::initialization::init_client;

    /// Fetches the configured URL and analyzes it in the configured mode.
    ///
    /// The URL is validated before anything touches the network, so a missing
    /// or scheme-less URL fails without a request being made.
    ///
    /// # Errors
    ///
    /// - `ScrapeError::Input` if the URL is missing or invalid
    /// - `ScrapeError::Initialization` if the HTTP client cannot be built
    /// - `ScrapeError::Fetch` if the page cannot be retrieved
    pub async fn scrape(config: &Config) -> Result<ScrapeOutput, ScrapeError> {
        let url = validate_target_url(config.url.as_deref())?;
        let client = init_client(config)?;

        let body = fetch_page(&client, &url).await?;

        let start = std::time::Instant::now();
        let output = analyze(&body, config.mode);
        info!(
            "Analyzed {url} ({:?} mode) in {:.1}ms",
            config.mode,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(output)
    }
}
