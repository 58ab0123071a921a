//! Staging repository promotion.
//!
//! After a release deploy the portal holds the uploaded artifacts in an open
//! staging repository. This module finds every open repository belonging to
//! the caller and asks the portal to publish each one in user-managed mode,
//! where the artifacts still require an explicit release from the portal UI.
//!
//! The promotion pass is a linear pipeline: authenticate, discover, promote.
//! Calls are issued sequentially; the repository count is small (typically
//! one).

use regex::Regex;
use reqwest::{Client, StatusCode};

use porter_core::credentials::Credentials;
use porter_util::errors::PorterError;
use porter_util::progress::{status, status_warn};

use crate::{auth, http, repository};

/// Outcome of one promotion attempt.
#[derive(Debug)]
pub struct PromotionOutcome {
    pub key: String,
    /// HTTP status of the promotion request, when it was sent.
    pub status: Option<StatusCode>,
    /// Error message when the request could not be sent.
    pub error: Option<String>,
}

/// Result of a full promotion pass.
#[derive(Debug)]
pub struct PromotionSummary {
    pub search_status: StatusCode,
    pub outcomes: Vec<PromotionOutcome>,
}

/// Client for the portal's manual staging API.
pub struct StagingClient {
    client: Client,
    base_url: String,
    token: String,
}

impl StagingClient {
    pub fn new(base_url: &str, username: &str, password: &str) -> miette::Result<Self> {
        Ok(Self {
            client: http::build_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: auth::bearer_token(username, password),
        })
    }

    /// One promotion pass: search for open staging repositories and request
    /// that each one be published.
    ///
    /// A non-200 search response ends the pass with zero promotions and no
    /// error; a failed promotion request is recorded and does not stop the
    /// remaining repositories.
    pub async fn promote_open_repositories(&self) -> miette::Result<PromotionSummary> {
        let url = repository::search_url(&self.base_url);
        let resp = auth::apply_bearer(self.client.get(&url), &self.token)
            .send()
            .await
            .map_err(|e| PorterError::Network {
                message: format!("Failed to search staging repositories: {e}"),
            })?;

        let search_status = resp.status();
        if search_status != StatusCode::OK {
            status_warn(
                "Promote",
                &format!("repository search returned HTTP {search_status}, skipping promotion"),
            );
            return Ok(PromotionSummary {
                search_status,
                outcomes: Vec::new(),
            });
        }

        let body = resp.text().await.map_err(|e| PorterError::Network {
            message: format!("Failed to read search response: {e}"),
        })?;

        let mut outcomes = Vec::new();
        for key in extract_repository_keys(&body) {
            match self.promote_repository(&key).await {
                Ok(code) => {
                    status("Promoted", &format!("staging repository {key} (HTTP {code})"));
                    outcomes.push(PromotionOutcome {
                        key,
                        status: Some(code),
                        error: None,
                    });
                }
                Err(e) => {
                    status_warn("Promote", &format!("staging repository {key} failed: {e}"));
                    outcomes.push(PromotionOutcome {
                        key,
                        status: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(PromotionSummary {
            search_status,
            outcomes,
        })
    }

    /// Ask the portal to publish one staging repository.
    ///
    /// The response status is reported, not validated; the portal keeps
    /// ownership of the repository state.
    pub async fn promote_repository(&self, repo_key: &str) -> miette::Result<StatusCode> {
        let url = repository::promote_url(&self.base_url, repo_key);
        let resp = auth::apply_bearer(self.client.post(&url), &self.token)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| PorterError::Network {
                message: format!("Promotion request for {repo_key} failed: {e}"),
            })?;
        Ok(resp.status())
    }
}

/// Fire-and-forget promotion entry point.
///
/// Missing credentials skip the pass; any failure in the sequence is logged
/// and swallowed, so a partially failed promotion never changes the caller's
/// exit status.
pub async fn promote_all(base_url: &str, credentials: &Credentials) {
    let Some((username, password)) = credentials.pair() else {
        status_warn("Promote", "portal credentials missing, skipping promotion");
        return;
    };

    let result = match StagingClient::new(base_url, username, password) {
        Ok(client) => client.promote_open_repositories().await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        status_warn(
            "Promote",
            &format!("failed to promote staging repositories: {e}"),
        );
    }
}

/// Extract every `"key": "<value>"` occurrence from a search response body.
///
/// The search response shape is not parsed structurally; keys are scanned
/// as text, in order of appearance, tolerating any surrounding structure.
pub fn extract_repository_keys(body: &str) -> Vec<String> {
    let pattern = Regex::new(r#""key"\s*:\s*"([^"]+)""#).expect("valid pattern");
    pattern
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect()
}
