//! Shared HTTP client and upload primitives.

use std::time::Duration;

use reqwest::Client;

use crate::auth;
use crate::repository::DeployRepository;

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Build a shared reqwest client for portal traffic.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent("porter/0.2")
        .build()
        .map_err(|e| {
            porter_util::errors::PorterError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// PUT raw bytes to a URL, with authentication and retries.
///
/// Server errors and connection-level failures are retried; any other
/// non-success status is an error.
pub async fn put_bytes(
    client: &Client,
    repo: &DeployRepository,
    url: &str,
    data: &[u8],
    content_type: &str,
) -> miette::Result<()> {
    let mut last_err = String::new();

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            tracing::debug!("Retrying {url}: {last_err}");
            tokio::time::sleep(RETRY_DELAY * attempt).await;
        }

        let mut req = client
            .put(url)
            .header("Content-Type", content_type)
            .body(data.to_vec());
        req = auth::apply_auth(req, repo);

        match req.send().await {
            Ok(resp) => {
                let status = resp.status();
                if status.is_server_error() {
                    last_err = format!("HTTP {status} from {url}");
                    continue;
                }
                if !status.is_success() {
                    return Err(porter_util::errors::PorterError::Network {
                        message: format!("HTTP {status} uploading {url}"),
                    }
                    .into());
                }
                return Ok(());
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                last_err = format!("{e}");
                continue;
            }
            Err(e) => {
                return Err(porter_util::errors::PorterError::Network {
                    message: format!("Request to {url} failed: {e}"),
                }
                .into());
            }
        }
    }

    Err(porter_util::errors::PorterError::Network {
        message: format!("Failed after {MAX_RETRIES} retries for {url}: {last_err}"),
    }
    .into())
}
