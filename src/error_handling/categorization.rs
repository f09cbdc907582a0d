//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize fetch errors and configure the
//! retry strategy.

use std::time::Duration;
use tokio_retry::strategy::FixedInterval;

use super::types::ErrorType;

/// Creates the fetch retry strategy.
///
/// A single retry (`RETRY_MAX_RETRIES`) after a fixed `RETRY_DELAY_MS` delay.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    FixedInterval::from_millis(crate::config::RETRY_DELAY_MS).take(crate::config::RETRY_MAX_RETRIES)
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    // Check HTTP status codes first
    if let Some(status) = error.status() {
        match status.as_u16() {
            400 => return ErrorType::HttpRequestBadRequest,
            401 => return ErrorType::HttpRequestUnauthorized,
            403 => return ErrorType::HttpRequestForbidden,
            404 => return ErrorType::HttpRequestNotFound,
            429 => return ErrorType::HttpRequestTooManyRequests,
            500 => return ErrorType::HttpRequestInternalServerError,
            502 => return ErrorType::HttpRequestBadGateway,
            503 => return ErrorType::HttpRequestServiceUnavailable,
            504 => return ErrorType::HttpRequestGatewayTimeout,
            _ if status.is_client_error() || status.is_server_error() => {
                return ErrorType::HttpRequestOtherError;
            }
            _ => {
                // Non-standard status codes - fall through to check error type
            }
        }
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        // Connect failures also report is_request(); check them first
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Determines if a fetch error is transient and worth the single retry.
///
/// Retriable: timeouts, connect and request errors, 429 and 5xx responses.
/// Everything else (other 4xx, redirect loops, decode errors) is permanent.
pub fn is_retriable_error(error: &reqwest::Error) -> bool {
    if let Some(status) = error.status() {
        let status_code = status.as_u16();
        if status_code == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS {
            return true;
        }
        return status.is_server_error();
    }

    if error.is_redirect() || error.is_decode() || error.is_builder() {
        return false;
    }

    error.is_timeout() || error.is_connect() || error.is_request()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_retry_strategy_single_retry() {
        let delays: Vec<Duration> = get_retry_strategy().collect();
        assert_eq!(delays.len(), crate::config::RETRY_MAX_RETRIES);
    }

    #[test]
    fn test_get_retry_strategy_fixed_delay() {
        for delay in get_retry_strategy() {
            assert_eq!(
                delay,
                Duration::from_millis(crate::config::RETRY_DELAY_MS)
            );
        }
    }

    #[test]
    fn test_builder_error_is_not_retriable() {
        // An unparseable URL fails in the request builder
        let error = reqwest::Client::new()
            .get("http://")
            .build()
            .expect_err("empty host should not build");
        assert_eq!(
            categorize_reqwest_error(&error),
            ErrorType::HttpRequestBuilderError
        );
        assert!(!is_retriable_error(&error));
    }

    // Status-code categorization needs real responses; see tests/fetch_mock_server.rs.
}
