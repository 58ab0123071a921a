//! Publishing endpoints: portal base URL, snapshot repository, deploy layout.

use porter_core::coordinate::Coordinate;
use porter_core::credentials::Credentials;

/// Base URL of the staging portal API.
pub const PORTAL_BASE_URL: &str = "https://ossrh-staging-api.central.sonatype.com";

/// Repository accepting snapshot uploads.
pub const SNAPSHOT_REPO_URL: &str = "https://central.sonatype.com/repository/maven-snapshots";

/// Deploy root for release artifacts under the portal base URL.
pub fn staging_deploy_url(base_url: &str) -> String {
    format!(
        "{}/service/local/staging/deploy/maven2",
        base_url.trim_end_matches('/')
    )
}

/// Search endpoint listing the caller's open staging repositories.
pub fn search_url(base_url: &str) -> String {
    format!(
        "{}/manual/search/repositories?state=open&ip=client",
        base_url.trim_end_matches('/')
    )
}

/// Promotion endpoint for one staging repository, user-managed publishing.
pub fn promote_url(base_url: &str, repo_key: &str) -> String {
    format!(
        "{}/manual/upload/repository/{repo_key}?publishing_type=user_managed",
        base_url.trim_end_matches('/')
    )
}

/// A deploy target with optional credentials.
#[derive(Debug, Clone)]
pub struct DeployRepository {
    pub name: String,
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl DeployRepository {
    /// The release staging repository under the given portal base URL.
    pub fn staging(base_url: &str, credentials: &Credentials) -> Self {
        Self {
            name: "sonatype-staging".to_string(),
            url: staging_deploy_url(base_url),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }

    /// A snapshot repository at the given URL.
    pub fn snapshots(url: &str, credentials: &Credentials) -> Self {
        Self {
            name: "sonatype-snapshots".to_string(),
            url: url.trim_end_matches('/').to_string(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }

    /// Standard Maven layout path for a coordinate.
    ///
    /// `io.github.example:my-lib:1.0.0` becomes
    /// `io/github/example/my-lib/1.0.0`
    pub fn coordinate_path(coord: &Coordinate) -> String {
        format!(
            "{}/{}/{}",
            coord.group_id.replace('.', "/"),
            coord.artifact_id,
            coord.version
        )
    }

    /// Full URL to a specific file within the repository.
    pub fn file_url(&self, coord: &Coordinate, filename: &str) -> String {
        format!("{}/{}/{}", self.url, Self::coordinate_path(coord), filename)
    }

    /// Whether this repository has authentication configured.
    pub fn has_auth(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}
