//! Error type definitions.
//!
//! This module defines the error and warning types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Rejections of the target URL. Raised before any request is made.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// No URL was given.
    #[error("Must specify url")]
    MissingUrl,

    /// The URL has no `scheme://` prefix.
    #[error("Must use fully-qualified url with protocol (https://url.com): {0}")]
    MissingScheme(String),

    /// The URL carries a scheme other than http or https.
    #[error("Unsupported url scheme '{scheme}' in {url}")]
    UnsupportedScheme { url: String, scheme: String },

    /// The URL does not parse.
    #[error("Invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The URL exceeds `MAX_URL_LENGTH`.
    #[error("Url exceeds maximum length ({0} > {max})", max = crate::config::MAX_URL_LENGTH)]
    TooLong(usize),
}

/// Terminal failures of a scrape call.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The target URL was rejected.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Shared resources could not be set up.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// The page could not be retrieved.
    #[error("Failed to fetch {url} ({kind}): {source}")]
    Fetch {
        url: String,
        kind: ErrorType,
        #[source]
        source: ReqwestError,
    },
}

/// Categories of fetch failures.
///
/// Derived from a `reqwest::Error` by `categorize_reqwest_error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    // Specific HTTP status code errors
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestForbidden,           // 403 Forbidden
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
}

/// Types of warnings raised while extracting from a document.
///
/// Warnings indicate missing or malformed optional data that doesn't prevent a
/// result from being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    MissingTitle,        // No <title> element, or an empty one
    MalformedJsonLd,     // A ld+json block that is not valid JSON
    MissingProfileField, // A profile-page element or counter was not found
    InvalidLogoUrl,      // A logo/og:image candidate failed URL validation
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MalformedJsonLd => "Malformed JSON-LD block",
            WarningType::MissingProfileField => "Missing profile field",
            WarningType::InvalidLogoUrl => "Invalid logo URL",
        }
    }
}
