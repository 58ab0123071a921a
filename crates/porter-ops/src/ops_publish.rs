//! Operation: deploy built artifacts, then promote the staging repository.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSetBuilder};

use porter_core::credentials::{Credentials, ENV_FILE, PASSWORD_VAR, USERNAME_VAR};
use porter_core::manifest::Manifest;
use porter_portal::repository::{self, DeployRepository};
use porter_portal::{deploy, http, pom, staging};
use porter_util::errors::PorterError;
use porter_util::progress::{progress_bar, status, status_info};

/// Publish the project: upload the POM and all matched artifact files to the
/// snapshot or staging repository, then promote when the version is a
/// release and credentials are present.
pub async fn publish(project_root: &Path, dry_run: bool, verbose: bool) -> miette::Result<()> {
    let manifest = Manifest::from_path(&project_root.join("Porter.toml"))?;
    let coord = manifest.coordinate();
    let credentials = Credentials::from_project(project_root)?;

    let artifacts = collect_artifacts(project_root, &manifest)?;
    if artifacts.is_empty() {
        return Err(PorterError::Generic {
            message: format!(
                "No artifact files matched {:?} under {}",
                manifest.publish.include, manifest.publish.dir
            ),
        }
        .into());
    }

    let portal_url = manifest
        .publish
        .portal_url
        .clone()
        .unwrap_or_else(|| repository::PORTAL_BASE_URL.to_string());
    let snapshot_url = manifest
        .publish
        .snapshot_url
        .clone()
        .unwrap_or_else(|| repository::SNAPSHOT_REPO_URL.to_string());

    let repo = if coord.is_snapshot() {
        DeployRepository::snapshots(&snapshot_url, &credentials)
    } else {
        DeployRepository::staging(&portal_url, &credentials)
    };

    let pom_name = pom::pom_filename(&coord);

    if dry_run {
        status_info("Publish", &format!("{coord} -> {} (dry run)", repo.name));
        println!("  would upload {pom_name}");
        for path in &artifacts {
            println!("  would upload {}", file_name(path));
        }
        return Ok(());
    }

    if !credentials.is_complete() {
        return Err(PorterError::Generic {
            message: format!(
                "Portal credentials missing: set {USERNAME_VAR} and {PASSWORD_VAR} \
                 or add them to {ENV_FILE}"
            ),
        }
        .into());
    }

    let client = http::build_client()?;
    let pom_xml = pom::generate_pom(&manifest)?;

    let pb = progress_bar((artifacts.len() + 1) as u64, "Uploading");
    deploy::deploy_file(&client, &repo, &coord, &pom_name, pom_xml.as_bytes()).await?;
    pb.inc(1);

    for path in &artifacts {
        let filename = file_name(path);
        if verbose {
            status("Uploading", &filename);
        }
        let data = std::fs::read(path).map_err(PorterError::Io)?;
        deploy::deploy_file(&client, &repo, &coord, &filename, &data).await?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    status(
        "Published",
        &format!("{} files for {coord} to {}", artifacts.len() + 1, repo.name),
    );

    if !coord.is_snapshot() && credentials.is_complete() {
        staging::promote_all(&portal_url, &credentials).await;
    }

    Ok(())
}

/// Files under `[publish] dir` matching the `include` globs, sorted by name.
fn collect_artifacts(project_root: &Path, manifest: &Manifest) -> miette::Result<Vec<PathBuf>> {
    let mut builder = GlobSetBuilder::new();
    for pattern in &manifest.publish.include {
        let glob = Glob::new(pattern).map_err(|e| PorterError::Manifest {
            message: format!("Invalid publish glob '{pattern}': {e}"),
        })?;
        builder.add(glob);
    }
    let globs = builder.build().map_err(|e| PorterError::Manifest {
        message: format!("Invalid publish globs: {e}"),
    })?;

    let dir = project_root.join(&manifest.publish.dir);
    let mut files = Vec::new();
    if !dir.is_dir() {
        return Ok(files);
    }

    let mut entries: Vec<_> = std::fs::read_dir(&dir)
        .map_err(PorterError::Io)?
        .filter_map(|e| e.ok())
        .collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if globs.is_match(name) {
                files.push(path);
            }
        }
    }
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
