use httpmock::prelude::*;

use porter_core::coordinate::Coordinate;
use porter_portal::deploy::deploy_file;
use porter_portal::http::build_client;
use porter_portal::repository::DeployRepository;

fn coord() -> Coordinate {
    Coordinate::parse("io.github.example:my-lib:1.0.0").unwrap()
}

fn repo_for(server: &MockServer) -> DeployRepository {
    DeployRepository {
        name: "test".to_string(),
        url: server.url("/repo"),
        username: Some("user".to_string()),
        password: Some("pass".to_string()),
    }
}

#[tokio::test]
async fn uploads_file_and_checksum_sidecars() {
    let server = MockServer::start_async().await;
    let layout = "/repo/io/github/example/my-lib/1.0.0/my-lib-1.0.0.jar";

    let jar = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path(layout)
                .header("authorization", "Basic dXNlcjpwYXNz")
                .body("jar bytes");
            then.status(201);
        })
        .await;

    // Digests of "jar bytes".
    let sha1 = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path(format!("{layout}.sha1"))
                .body("01c56e3ae46c962debe4976038d5ba38d1e61ef7");
            then.status(201);
        })
        .await;

    let md5 = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path(format!("{layout}.md5"))
                .body("b0136f9ebbab9987c4580ebb0e34bb64");
            then.status(201);
        })
        .await;

    let sha256 = server
        .mock_async(|when, then| {
            when.method(PUT).path(format!("{layout}.sha256"));
            then.status(201);
        })
        .await;

    let client = build_client().unwrap();
    deploy_file(
        &client,
        &repo_for(&server),
        &coord(),
        "my-lib-1.0.0.jar",
        b"jar bytes",
    )
    .await
    .unwrap();

    jar.assert_async().await;
    sha1.assert_async().await;
    md5.assert_async().await;
    sha256.assert_async().await;
}

#[tokio::test]
async fn signature_files_upload_without_sidecars() {
    let server = MockServer::start_async().await;

    let asc = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/repo/io/github/example/my-lib/1.0.0/my-lib-1.0.0.jar.asc");
            then.status(201);
        })
        .await;

    let sidecars = server
        .mock_async(|when, then| {
            when.method(PUT).path_contains(".asc.");
            then.status(201);
        })
        .await;

    let client = build_client().unwrap();
    deploy_file(
        &client,
        &repo_for(&server),
        &coord(),
        "my-lib-1.0.0.jar.asc",
        b"signature",
    )
    .await
    .unwrap();

    asc.assert_async().await;
    assert_eq!(sidecars.hits_async().await, 0);
}

#[tokio::test]
async fn unauthorized_upload_is_an_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(PUT).path_contains("/repo/");
            then.status(401);
        })
        .await;

    let client = build_client().unwrap();
    let err = deploy_file(
        &client,
        &repo_for(&server),
        &coord(),
        "my-lib-1.0.0.jar",
        b"jar bytes",
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("401"), "got: {err}");
}
