//! Scene loading.
//!
//! Documents are deserialized into a private wire schema first; every
//! missing or malformed field surfaces here as one `SceneFormat` error
//! instead of failing later during playback. No semantic validation is
//! done at load time (see `check_scene` for that).

use std::path::Path;

use rehearse_core::error::RehearsalError;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::schema::RawScene;
use crate::domain::model::Scene;

/// Serialization format of a scene or mapping document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON (the default).
    Json,
    /// YAML, selected by a `.yaml` or `.yml` extension.
    Yaml,
}

impl SourceFormat {
    /// Picks the format from a file extension, defaulting to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parses a typed document from text.
///
/// # Errors
///
/// Returns `RehearsalError::SceneFormat` if the text is not valid for `T`.
pub fn parse_document<T: DeserializeOwned>(
    text: &str,
    format: SourceFormat,
) -> Result<T, RehearsalError> {
    match format {
        SourceFormat::Json => {
            serde_json::from_str(text).map_err(|e| RehearsalError::SceneFormat(e.to_string()))
        }
        SourceFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|e| RehearsalError::SceneFormat(e.to_string()))
        }
    }
}

/// Reads and parses a typed document, choosing the format from the path.
///
/// # Errors
///
/// Returns `RehearsalError::Load` if the file cannot be read and
/// `RehearsalError::SceneFormat` if its contents do not fit `T`.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, RehearsalError> {
    let text = std::fs::read_to_string(path).map_err(|source| RehearsalError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let format = SourceFormat::from_path(path);
    debug!(path = %path.display(), ?format, bytes = text.len(), "read document");
    parse_document(&text, format)
}

/// Parses a scene from text.
///
/// # Errors
///
/// Returns `RehearsalError::SceneFormat` if a required field is missing or
/// malformed, or a line is neither dialogue nor a cut-in trigger.
pub fn parse_scene(text: &str, format: SourceFormat) -> Result<Scene, RehearsalError> {
    let raw: RawScene = parse_document(text, format)?;
    raw.into_scene()
}

/// Loads a scene from a JSON or YAML file.
///
/// # Errors
///
/// Returns `RehearsalError::Load` if the file cannot be read and
/// `RehearsalError::SceneFormat` if it is not a structurally valid scene.
pub fn load_scene(path: &Path) -> Result<Scene, RehearsalError> {
    let raw: RawScene = load_document(path)?;
    let scene = raw.into_scene()?;
    info!(
        scene_id = %scene.scene_id,
        lines = scene.lines.len(),
        cutins = scene.cutins.len(),
        "scene loaded"
    );
    Ok(scene)
}
