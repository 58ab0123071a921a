//! POM generation for published artifacts.
//!
//! Builds the `pom.xml` uploaded alongside the primary artifact: coordinates,
//! descriptive metadata, license, developers, and SCM connection strings.

use quick_xml::se::to_string as xml_to_string;
use serde::Serialize;

use porter_core::coordinate::Coordinate;
use porter_core::manifest::Manifest;

const POM_XMLNS: &str = "http://maven.apache.org/POM/4.0.0";
const POM_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd";

#[derive(Serialize)]
#[serde(rename = "project")]
struct PomProject {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "@xmlns:xsi")]
    xmlns_xsi: &'static str,
    #[serde(rename = "@xsi:schemaLocation")]
    schema_location: &'static str,

    #[serde(rename = "modelVersion")]
    model_version: &'static str,
    #[serde(rename = "groupId")]
    group_id: String,
    #[serde(rename = "artifactId")]
    artifact_id: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    packaging: Option<String>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<PomLicenses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    developers: Option<PomDevelopers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scm: Option<PomScm>,
}

#[derive(Serialize)]
struct PomLicenses {
    license: Vec<PomLicense>,
}

#[derive(Serialize)]
struct PomLicense {
    name: String,
    url: String,
}

#[derive(Serialize)]
struct PomDevelopers {
    developer: Vec<PomDeveloper>,
}

#[derive(Serialize)]
struct PomDeveloper {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

#[derive(Serialize)]
struct PomScm {
    connection: String,
    #[serde(rename = "developerConnection")]
    developer_connection: String,
    url: String,
}

/// Filename of the POM for a coordinate: `my-lib-1.0.0.pom`.
pub fn pom_filename(coord: &Coordinate) -> String {
    format!("{}-{}.pom", coord.artifact_id, coord.version)
}

/// Generate the `pom.xml` content for a manifest.
pub fn generate_pom(manifest: &Manifest) -> miette::Result<String> {
    let pkg = &manifest.package;

    // Maven's default packaging is jar; only non-default values are written.
    let packaging = if pkg.packaging == "jar" {
        None
    } else {
        Some(pkg.packaging.clone())
    };

    let project = PomProject {
        xmlns: POM_XMLNS,
        xmlns_xsi: POM_XSI,
        schema_location: POM_SCHEMA_LOCATION,
        model_version: "4.0.0",
        group_id: pkg.group.clone(),
        artifact_id: pkg.artifact.clone(),
        version: pkg.version.clone(),
        packaging,
        name: pkg.artifact.clone(),
        description: pkg.description.clone(),
        url: pkg.url.clone(),
        licenses: pkg.license.as_ref().map(|l| PomLicenses {
            license: vec![PomLicense {
                name: l.name.clone(),
                url: l.url.clone(),
            }],
        }),
        developers: if pkg.developers.is_empty() {
            None
        } else {
            Some(PomDevelopers {
                developer: pkg
                    .developers
                    .iter()
                    .map(|d| PomDeveloper {
                        id: d.id.clone(),
                        name: d.name.clone(),
                        email: d.email.clone(),
                    })
                    .collect(),
            })
        },
        scm: manifest.resolved_scm().map(|scm| PomScm {
            connection: scm.connection,
            developer_connection: scm.developer_connection,
            url: scm.url,
        }),
    };

    let body = xml_to_string(&project).map_err(|e| {
        porter_util::errors::PorterError::Generic {
            message: format!("Failed to generate pom.xml: {e}"),
        }
    })?;

    Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{body}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
        Manifest::from_str(
            r#"
[package]
group = "io.github.example"
artifact = "my-lib"
version = "1.0.0"
description = "A small library"
url = "https://github.com/example/my-lib"

[package.license]
name = "The Apache License, Version 2.0"
url = "http://www.apache.org/licenses/LICENSE-2.0.txt"

[[package.developers]]
id = "example"
name = "Ex Ample"
email = "ex@example.com"
"#,
        )
        .unwrap()
    }

    #[test]
    fn pom_filename_format() {
        let coord = Coordinate::parse("io.github.example:my-lib:1.0.0").unwrap();
        assert_eq!(pom_filename(&coord), "my-lib-1.0.0.pom");
    }

    #[test]
    fn generated_pom_has_coordinates() {
        let pom = generate_pom(&manifest()).unwrap();
        assert!(pom.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(pom.contains("<modelVersion>4.0.0</modelVersion>"));
        assert!(pom.contains("<groupId>io.github.example</groupId>"));
        assert!(pom.contains("<artifactId>my-lib</artifactId>"));
        assert!(pom.contains("<version>1.0.0</version>"));
    }

    #[test]
    fn generated_pom_omits_jar_packaging() {
        let pom = generate_pom(&manifest()).unwrap();
        assert!(!pom.contains("<packaging>"));
    }

    #[test]
    fn generated_pom_has_license_and_developer() {
        let pom = generate_pom(&manifest()).unwrap();
        assert!(pom.contains("<license><name>The Apache License, Version 2.0</name>"));
        assert!(pom.contains("<developer><id>example</id>"));
        assert!(pom.contains("<email>ex@example.com</email>"));
    }

    #[test]
    fn generated_pom_derives_scm_from_url() {
        let pom = generate_pom(&manifest()).unwrap();
        assert!(pom.contains("<connection>scm:git:git://github.com/example/my-lib.git</connection>"));
        assert!(pom.contains(
            "<developerConnection>scm:git:ssh://github.com/example/my-lib.git</developerConnection>"
        ));
    }
}
