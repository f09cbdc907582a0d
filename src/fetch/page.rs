//! Page fetching with a single retry.

use log::{debug, info, warn};
use tokio_retry::RetryIf;
use url::Url;

use crate::error_handling::{
    categorize_reqwest_error, get_retry_strategy, is_retriable_error, ScrapeError,
};

/// Fetches the body of `url`.
///
/// Non-success statuses are failures. A transient failure (timeout, connect or
/// request error, 429, 5xx) is retried once after a fixed delay; permanent
/// failures are returned immediately.
///
/// # Errors
///
/// Returns `ScrapeError::Fetch` carrying the categorized last failure.
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Result<String, ScrapeError> {
    info!("Fetching {url}");
    let start = std::time::Instant::now();

    let result = RetryIf::spawn(
        get_retry_strategy(),
        || async move {
            let response = client.get(url.as_str()).send().await?;
            debug!("{url} responded with status {}", response.status());
            response.error_for_status()?.text().await
        },
        |error: &reqwest::Error| {
            let retriable = is_retriable_error(error);
            if retriable {
                warn!("Retrying {url} after transient failure: {error}");
            }
            retriable
        },
    )
    .await;

    match result {
        Ok(body) => {
            debug!(
                "Fetched {} bytes from {url} in {:.2}s",
                body.len(),
                start.elapsed().as_secs_f64()
            );
            Ok(body)
        }
        Err(source) => {
            let kind = categorize_reqwest_error(&source);
            warn!("Failed to fetch {url}: {kind}");
            Err(ScrapeError::Fetch {
                url: url.to_string(),
                kind,
                source,
            })
        }
    }
}
