use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::coordinate::Coordinate;

/// The parsed representation of a `Porter.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageMetadata,

    #[serde(default)]
    pub scm: Option<ScmConfig>,

    #[serde(default)]
    pub publish: PublishConfig,
}

/// Package identity and POM metadata from the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub group: String,
    pub artifact: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_packaging")]
    pub packaging: String,
    #[serde(default)]
    pub license: Option<LicenseInfo>,
    #[serde(default)]
    pub developers: Vec<Developer>,
}

fn default_packaging() -> String {
    "jar".to_string()
}

/// A license declared for the published POM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseInfo {
    pub name: String,
    pub url: String,
}

/// A developer entry for the published POM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Developer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Explicit SCM overrides from the `[scm]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScmConfig {
    #[serde(default)]
    pub connection: Option<String>,
    #[serde(default, rename = "developer-connection")]
    pub developer_connection: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Publish settings from the `[publish]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Directory scanned for artifact files, relative to the project root.
    #[serde(default = "default_artifact_dir")]
    pub dir: String,

    /// Glob patterns selecting artifact files within `dir`.
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Override for the staging portal base URL.
    #[serde(default, rename = "portal-url")]
    pub portal_url: Option<String>,

    /// Override for the snapshot repository URL.
    #[serde(default, rename = "snapshot-url")]
    pub snapshot_url: Option<String>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            dir: default_artifact_dir(),
            include: default_include(),
            portal_url: None,
            snapshot_url: None,
        }
    }
}

fn default_artifact_dir() -> String {
    "build/libs".to_string()
}

fn default_include() -> Vec<String> {
    vec!["*.jar".to_string(), "*.asc".to_string()]
}

/// SCM connection strings resolved for the POM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScm {
    pub connection: String,
    pub developer_connection: String,
    pub url: String,
}

impl Manifest {
    /// Load and parse a `Porter.toml` file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            porter_util::errors::PorterError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::from_str(&content)
    }

    /// Parse a `Porter.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        let manifest: Manifest = toml::from_str(content).map_err(|e| {
            porter_util::errors::PorterError::Manifest {
                message: format!("Failed to parse Porter.toml: {e}"),
            }
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// The coordinate of the published artifact.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            group_id: self.package.group.clone(),
            artifact_id: self.package.artifact.clone(),
            version: self.package.version.clone(),
        }
    }

    /// SCM strings for the POM: explicit `[scm]` values win, otherwise they
    /// are derived from the project URL (`https://github.com/me/lib` becomes
    /// `scm:git:git://github.com/me/lib.git`).
    pub fn resolved_scm(&self) -> Option<ResolvedScm> {
        let derived_base = self.package.url.as_deref().map(strip_scheme);
        let derive = |prefix: &str| {
            derived_base
                .as_deref()
                .map(|base| format!("scm:git:{prefix}{base}.git"))
        };

        let scm = self.scm.clone().unwrap_or(ScmConfig {
            connection: None,
            developer_connection: None,
            url: None,
        });

        let connection = scm.connection.or_else(|| derive("git://"))?;
        let developer_connection = scm.developer_connection.or_else(|| derive("ssh://"))?;
        let url = scm.url.or_else(|| self.package.url.clone())?;

        Some(ResolvedScm {
            connection,
            developer_connection,
            url,
        })
    }

    fn validate(&self) -> miette::Result<()> {
        for (field, value) in [
            ("package.group", &self.package.group),
            ("package.artifact", &self.package.artifact),
            ("package.version", &self.package.version),
        ] {
            if value.trim().is_empty() {
                return Err(porter_util::errors::PorterError::Manifest {
                    message: format!("`{field}` must not be empty"),
                }
                .into());
            }
        }
        Ok(())
    }
}

fn strip_scheme(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}
