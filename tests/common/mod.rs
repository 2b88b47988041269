//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod gated_service;
pub mod mock_backend;

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Config pointing at `base_url` with short timeouts.
pub fn config_for(base_url: &str) -> String {
    format!(
        r#"[api]
base_url = "{}"
timeout_seconds = 5
connect_timeout_seconds = 2
"#,
        base_url
    )
}
