//! Shared test helpers for runner integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use rehearse_cli::config::{AutoMode, LogFormat, RunConfig};
use rehearse_player::PlayerOptions;
use tempfile::TempDir;

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// A play configuration with default player options.
pub fn config(scene_file: PathBuf, auto: AutoMode) -> RunConfig {
    RunConfig {
        scene_file,
        auto,
        options: PlayerOptions::default(),
        check_only: false,
        log_format: LogFormat::Text,
    }
}
