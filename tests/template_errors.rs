//! Rendering-failure behavior of `/hello` under both diagnostic modes.
//!
//! The template directory is pointed at a tempdir holding a broken
//! `hello.html` override, which shadows the bundled copy.

use reqwest::StatusCode;
use webdemo::config::ServerConfig;

mod common;

fn broken_template_config(debug: bool) -> (tempfile::TempDir, ServerConfig) {
    let dir = tempfile::tempdir().unwrap();
    // References a key the handler never supplies
    std::fs::write(dir.path().join("hello.html"), "<p>{{ nonexistent }}</p>").unwrap();

    let mut config = ServerConfig::default();
    config.templates.dir = dir.path().display().to_string();
    config.templates.debug = debug;
    (dir, config)
}

#[tokio::test]
async fn debug_mode_embeds_diagnostics() {
    let (_dir, config) = broken_template_config(true);
    let base = common::start_server(config).await;

    let response = reqwest::get(format!("{base}/hello")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.text().await.unwrap();
    assert!(body.contains("nonexistent"));
    assert!(body.contains("hello"));
}

#[tokio::test]
async fn default_mode_is_opaque() {
    let (_dir, config) = broken_template_config(false);
    let base = common::start_server(config).await;

    let response = reqwest::get(format!("{base}/hello")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.text().await.unwrap();
    assert_eq!(body, "internal server error");
    assert!(!body.contains("nonexistent"));
}

#[tokio::test]
async fn filesystem_override_shadows_bundled_template() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hello.html"), "custom: {{ name }}").unwrap();

    let mut config = ServerConfig::default();
    config.templates.dir = dir.path().display().to_string();
    let base = common::start_server(config).await;

    let response = reqwest::get(format!("{base}/hello")).await.unwrap();
    assert_eq!(response.text().await.unwrap(), "custom: anonymous");
}
