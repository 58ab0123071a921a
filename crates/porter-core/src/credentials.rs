//! Portal credential resolution.
//!
//! Credentials come from `MAVEN_CENTRAL_USERNAME` / `MAVEN_CENTRAL_PASSWORD`.
//! A `.porter.env` file in the project root (shell-style `KEY=value`) takes
//! precedence over the process environment, so CI secrets and local
//! overrides can live next to the project without being exported.
//!
//! Both fields are optional: the publish pipeline uses their absence to
//! decide whether the promotion step runs at all.

use std::collections::BTreeMap;
use std::path::Path;

/// Environment variable holding the portal username.
pub const USERNAME_VAR: &str = "MAVEN_CENTRAL_USERNAME";

/// Environment variable holding the portal password.
pub const PASSWORD_VAR: &str = "MAVEN_CENTRAL_PASSWORD";

/// Name of the per-project credentials file.
pub const ENV_FILE: &str = ".porter.env";

/// Portal credentials, possibly incomplete.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Resolve credentials from an override map, falling back to the
    /// process environment for keys not present in the map.
    pub fn resolve(overrides: &BTreeMap<String, String>) -> Self {
        let lookup = |key: &str| {
            overrides
                .get(key)
                .cloned()
                .or_else(|| std::env::var(key).ok())
                .filter(|v| !v.is_empty())
        };
        Self {
            username: lookup(USERNAME_VAR),
            password: lookup(PASSWORD_VAR),
        }
    }

    /// Resolve credentials for a project: `.porter.env` entries first,
    /// then the process environment.
    pub fn from_project(project_root: &Path) -> miette::Result<Self> {
        let overrides = load_env_file(&project_root.join(ENV_FILE))?;
        Ok(Self::resolve(&overrides))
    }

    /// Whether both username and password are present.
    pub fn is_complete(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Both values, when complete.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }
}

/// Load a `.porter.env` file (shell-style `KEY=value` format).
///
/// Missing file yields an empty map. Blank lines and `#` comments are
/// skipped; whitespace around keys and values is trimmed.
pub fn load_env_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content = std::fs::read_to_string(path).map_err(porter_util::errors::PorterError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(map)
}
