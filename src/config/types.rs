//! Command-line configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// `--log-level` values.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// `--log-format` values. Either way, logs go to stderr.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Colored single-line records
    Plain,
    /// One JSON object per line
    Json,
}

/// Which aggregate to build from the fetched page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExtractionMode {
    /// Social profile page: profile fields plus accounts, websites and
    /// entities found in the bio
    Social,
    /// Company site: names, contact details, address, logos and sameAs profiles
    Company,
}

/// Command-line options and configuration.
///
/// This struct is generated by `clap` from the field attributes and can also be
/// constructed programmatically through `Default`.
///
/// # Examples
///
/// ```bash
/// # Social profile (default mode)
/// profile_extract https://twitter.com/zach
///
/// # Company site with pretty output
/// profile_extract https://acme.example --mode company --pretty
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "profile_extract",
    about = "Fetches a page and extracts profile and company metadata as JSON."
)]
pub struct Config {
    /// Fully-qualified URL of the page to analyze (must include http:// or https://)
    #[arg(env = "PROFILE_EXTRACT_URL")]
    pub url: Option<String>,

    /// Extraction mode: social|company
    #[arg(long, value_enum, default_value_t = ExtractionMode::Social)]
    pub mode: ExtractionMode,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Pretty-print the result JSON
    #[arg(long)]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            mode: ExtractionMode::Social,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            pretty: false,
        }
    }
}
