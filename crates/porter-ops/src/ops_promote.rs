//! Operation: promote open staging repositories.

use std::path::Path;

use porter_core::credentials::{Credentials, ENV_FILE, PASSWORD_VAR, USERNAME_VAR};
use porter_core::manifest::Manifest;
use porter_portal::{repository, staging};
use porter_util::errors::PorterError;

/// Run one promotion pass against the portal.
///
/// Missing credentials are a configuration error; a failed or partial
/// promotion is not. The promotion routine itself logs its outcome and
/// this operation returns `Ok` afterwards regardless, so a half-promoted
/// release never fails the calling process.
pub async fn promote(project_root: &Path) -> miette::Result<()> {
    let manifest = Manifest::from_path(&project_root.join("Porter.toml"))?;
    let credentials = Credentials::from_project(project_root)?;

    if !credentials.is_complete() {
        return Err(PorterError::Generic {
            message: format!(
                "Portal credentials missing: set {USERNAME_VAR} and {PASSWORD_VAR} \
                 or add them to {ENV_FILE}"
            ),
        }
        .into());
    }

    let portal_url = manifest
        .publish
        .portal_url
        .clone()
        .unwrap_or_else(|| repository::PORTAL_BASE_URL.to_string());

    let sp = porter_util::progress::spinner("Promoting staging repositories...");
    staging::promote_all(&portal_url, &credentials).await;
    sp.finish_and_clear();
    Ok(())
}
