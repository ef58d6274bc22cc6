//! Plaintext HTTP fetch probe.
//!
//! Issues `GET http://<domain>/` and returns the response body as text. Any
//! network, protocol, or timeout failure yields `FetchOutcome::Failed`; the
//! status code is ignored because parking pages are often served with error
//! statuses. Bodies are capped at `MAX_RESPONSE_BODY_SIZE`.

use log::debug;

use crate::classify::FetchOutcome;
use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{categorize_reqwest_error, ProbeFailure, ProcessingStats};

/// Fetches the root page of `domain` over plaintext HTTP.
///
/// The client's configured timeouts bound the whole exchange.
pub async fn fetch_http(
    domain: &str,
    client: &reqwest::Client,
    stats: &ProcessingStats,
) -> FetchOutcome {
    let url = format!("http://{domain}/");

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            debug!("HTTP fetch failed for {url}: {e}");
            stats.increment(categorize_reqwest_error(&e));
            return FetchOutcome::Failed;
        }
    };

    let status = response.status();
    match read_body_capped(response, MAX_RESPONSE_BODY_SIZE).await {
        Ok((bytes, truncated)) => {
            if truncated {
                debug!("Body of {url} exceeded {MAX_RESPONSE_BODY_SIZE} bytes, truncated");
                stats.increment(ProbeFailure::HttpBodyTruncated);
            }
            debug!("Fetched {} bytes from {url} (status {status})", bytes.len());
            FetchOutcome::Fetched(String::from_utf8_lossy(&bytes).into_owned())
        }
        Err(e) => {
            debug!("Failed to read body of {url}: {e}");
            stats.increment(categorize_reqwest_error(&e));
            FetchOutcome::Failed
        }
    }
}

/// Reads at most `max` bytes of the body; the flag reports truncation.
async fn read_body_capped(
    mut response: reqwest::Response,
    max: usize,
) -> Result<(Vec<u8>, bool), reqwest::Error> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let remaining = max - body.len();
        if chunk.len() > remaining {
            body.extend_from_slice(&chunk[..remaining]);
            return Ok((body, true));
        }
        body.extend_from_slice(&chunk);
    }
    Ok((body, false))
}
