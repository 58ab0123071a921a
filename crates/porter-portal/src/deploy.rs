//! Artifact upload to a Maven deploy repository.
//!
//! Uploads are sequential: each file is PUT to its layout path, followed by
//! its checksum sidecars. Failures propagate; a broken deploy should stop
//! the publish, unlike the fire-and-forget promotion step.

use reqwest::Client;

use porter_core::coordinate::Coordinate;

use crate::checksum;
use crate::http;
use crate::repository::DeployRepository;

/// Upload one file plus its checksum sidecars.
///
/// Signature and checksum files are uploaded as-is; Maven repositories do
/// not checksum `.asc`, `.md5`, or `.sha*` files.
pub async fn deploy_file(
    client: &Client,
    repo: &DeployRepository,
    coord: &Coordinate,
    filename: &str,
    data: &[u8],
) -> miette::Result<()> {
    let url = repo.file_url(coord, filename);
    http::put_bytes(client, repo, &url, data, "application/octet-stream").await?;

    if !wants_sidecars(filename) {
        return Ok(());
    }

    for (ext, hash) in checksum::sidecars(data) {
        let sidecar_url = format!("{url}.{ext}");
        http::put_bytes(client, repo, &sidecar_url, hash.as_bytes(), "text/plain").await?;
    }

    Ok(())
}

fn wants_sidecars(filename: &str) -> bool {
    !(filename.ends_with(".asc")
        || filename.ends_with(".md5")
        || filename.ends_with(".sha1")
        || filename.ends_with(".sha256")
        || filename.ends_with(".sha512"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecars_for_primary_artifacts_only() {
        assert!(wants_sidecars("my-lib-1.0.0.jar"));
        assert!(wants_sidecars("my-lib-1.0.0.pom"));
        assert!(!wants_sidecars("my-lib-1.0.0.jar.asc"));
        assert!(!wants_sidecars("my-lib-1.0.0.jar.sha1"));
        assert!(!wants_sidecars("my-lib-1.0.0.jar.md5"));
    }
}
