use porter_core::manifest::Manifest;

fn minimal() -> &'static str {
    r#"
[package]
group = "io.github.example"
artifact = "my-lib"
version = "1.0.0"
"#
}

#[test]
fn parse_minimal_manifest() {
    let manifest = Manifest::from_str(minimal()).unwrap();
    assert_eq!(manifest.package.group, "io.github.example");
    assert_eq!(manifest.package.artifact, "my-lib");
    assert_eq!(manifest.package.version, "1.0.0");
    assert_eq!(manifest.package.packaging, "jar");
    assert!(manifest.package.developers.is_empty());
}

#[test]
fn publish_defaults() {
    let manifest = Manifest::from_str(minimal()).unwrap();
    assert_eq!(manifest.publish.dir, "build/libs");
    assert_eq!(manifest.publish.include, vec!["*.jar", "*.asc"]);
    assert!(manifest.publish.portal_url.is_none());
    assert!(manifest.publish.snapshot_url.is_none());
}

#[test]
fn parse_full_manifest() {
    let manifest = Manifest::from_str(
        r#"
[package]
group = "io.github.example"
artifact = "my-lib"
version = "2.1.0"
description = "A small library"
url = "https://github.com/example/my-lib"

[package.license]
name = "The Apache License, Version 2.0"
url = "http://www.apache.org/licenses/LICENSE-2.0.txt"

[[package.developers]]
id = "example"
name = "Ex Ample"
email = "ex@example.com"

[publish]
dir = "out/artifacts"
include = ["*.jar", "*.module"]
portal-url = "http://localhost:8080"
"#,
    )
    .unwrap();

    let license = manifest.package.license.as_ref().unwrap();
    assert_eq!(license.name, "The Apache License, Version 2.0");
    assert_eq!(manifest.package.developers.len(), 1);
    assert_eq!(manifest.package.developers[0].id, "example");
    assert_eq!(manifest.publish.dir, "out/artifacts");
    assert_eq!(
        manifest.publish.portal_url.as_deref(),
        Some("http://localhost:8080")
    );
}

#[test]
fn missing_package_section_fails() {
    let err = Manifest::from_str("[publish]\ndir = \"x\"\n").unwrap_err();
    assert!(err.to_string().contains("Failed to parse Porter.toml"));
}

#[test]
fn empty_version_fails_validation() {
    let err = Manifest::from_str(
        r#"
[package]
group = "io.github.example"
artifact = "my-lib"
version = ""
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("package.version"));
}

#[test]
fn coordinate_and_snapshot_detection() {
    let manifest = Manifest::from_str(
        r#"
[package]
group = "io.github.example"
artifact = "my-lib"
version = "1.0.0-SNAPSHOT"
"#,
    )
    .unwrap();
    let coord = manifest.coordinate();
    assert_eq!(coord.to_string(), "io.github.example:my-lib:1.0.0-SNAPSHOT");
    assert!(coord.is_snapshot());
}

#[test]
fn scm_derived_from_project_url() {
    let manifest = Manifest::from_str(
        r#"
[package]
group = "io.github.example"
artifact = "my-lib"
version = "1.0.0"
url = "https://github.com/example/my-lib"
"#,
    )
    .unwrap();

    let scm = manifest.resolved_scm().unwrap();
    assert_eq!(scm.connection, "scm:git:git://github.com/example/my-lib.git");
    assert_eq!(
        scm.developer_connection,
        "scm:git:ssh://github.com/example/my-lib.git"
    );
    assert_eq!(scm.url, "https://github.com/example/my-lib");
}

#[test]
fn scm_overrides_win_over_derivation() {
    let manifest = Manifest::from_str(
        r#"
[package]
group = "io.github.example"
artifact = "my-lib"
version = "1.0.0"
url = "https://github.com/example/my-lib"

[scm]
connection = "scm:git:git://example.org/custom.git"
"#,
    )
    .unwrap();

    let scm = manifest.resolved_scm().unwrap();
    assert_eq!(scm.connection, "scm:git:git://example.org/custom.git");
    assert_eq!(
        scm.developer_connection,
        "scm:git:ssh://github.com/example/my-lib.git"
    );
}

#[test]
fn scm_absent_when_no_url() {
    let manifest = Manifest::from_str(minimal()).unwrap();
    assert!(manifest.resolved_scm().is_none());
}
