//! Operation: show resolved portal credential entries.

use std::path::Path;

use porter_core::credentials::{load_env_file, ENV_FILE, PASSWORD_VAR, USERNAME_VAR};

const MASK: &str = "********";

/// Print `.porter.env` entries and recognized process env vars.
///
/// Values are masked unless `reveal` is set.
pub fn env(project_root: &Path, reveal: bool) -> miette::Result<()> {
    let entries = load_env_file(&project_root.join(ENV_FILE))?;

    let mut from_process: Vec<(&str, String)> = Vec::new();
    for var in [USERNAME_VAR, PASSWORD_VAR] {
        if entries.contains_key(var) {
            continue;
        }
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                from_process.push((var, value));
            }
        }
    }

    if entries.is_empty() && from_process.is_empty() {
        println!("No portal credentials configured.");
        return Ok(());
    }

    if !entries.is_empty() {
        println!("{ENV_FILE} ({} entries)", entries.len());
        for (key, value) in &entries {
            println!("  {key} = {}", display_value(value, reveal));
        }
    }

    if !from_process.is_empty() {
        println!("process environment");
        for (key, value) in &from_process {
            println!("  {key} = {}", display_value(value, reveal));
        }
    }

    Ok(())
}

fn display_value(value: &str, reveal: bool) -> String {
    if reveal {
        value.to_string()
    } else {
        MASK.to_string()
    }
}
