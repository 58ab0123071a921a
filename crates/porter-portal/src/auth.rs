//! Request authentication for portal and deploy endpoints.
//!
//! The staging portal's manual API expects `Authorization: Bearer <token>`
//! where the token is the base64 encoding of `username:password` (the
//! vendor's convention, not an OAuth token). Deploy uploads use plain HTTP
//! basic auth.

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::RequestBuilder;

use crate::repository::DeployRepository;

/// Encode `username:password` as the portal's bearer token.
pub fn bearer_token(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{username}:{password}"))
}

/// Apply the portal bearer token and JSON content type to a request.
pub fn apply_bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
    request
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
}

/// Apply authentication to a deploy request if the repository has credentials.
pub fn apply_auth(request: RequestBuilder, repo: &DeployRepository) -> RequestBuilder {
    match (&repo.username, &repo.password) {
        (Some(user), Some(pass)) => request.basic_auth(user, Some(pass)),
        (Some(user), None) => request.basic_auth(user, None::<&str>),
        (None, Some(token)) => request.bearer_auth(token),
        (None, None) => request,
    }
}
