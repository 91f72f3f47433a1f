//! Rehearse — Scene Loader.
//!
//! Responsible for reading scene descriptions from JSON or YAML, turning
//! them into the typed `Scene` model with upfront structural validation,
//! and optionally linting them for semantic problems.

pub mod application;
pub mod domain;

pub use application::loader::{SourceFormat, load_document, load_scene, parse_document, parse_scene};
pub use domain::check::{SceneIssue, check_scene};
pub use domain::model::{Choice, Cutin, FollowUp, Line, Scene, Speaker};
