//! Operation: scaffold a starter `Porter.toml`.

use std::path::Path;

use porter_util::errors::PorterError;

const MANIFEST_TEMPLATE: &str = r#"[package]
group = "io.github.example"
artifact = "{name}"
version = "0.1.0-SNAPSHOT"
# description = "A short description for the published POM"
# url = "https://github.com/example/{name}"

[publish]
dir = "build/libs"
include = ["*.jar", "*.asc"]
"#;

/// Write a starter `Porter.toml` into `dir`, refusing to overwrite one.
pub fn init(dir: &Path) -> miette::Result<()> {
    let manifest_path = dir.join("Porter.toml");

    if manifest_path.exists() {
        return Err(PorterError::Generic {
            message: "Porter.toml already exists in this directory".to_string(),
        }
        .into());
    }

    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("my-lib");

    std::fs::write(&manifest_path, MANIFEST_TEMPLATE.replace("{name}", name))
        .map_err(PorterError::Io)?;

    println!("Initialized Porter project in {}", dir.display());
    Ok(())
}
