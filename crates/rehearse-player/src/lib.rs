//! Rehearse — Scene Player.
//!
//! Responsible for replaying a scene line by line, presenting cut-ins,
//! capturing the learner's (or an automatic player's) selection with its
//! reaction time, classifying it, and printing the session summary.

pub mod application;
pub mod domain;

pub use application::player::{DEFAULT_AUTO_DELAY, PlayerOptions, ScenePlayer};
pub use domain::auto_choices::AutoChoices;
pub use domain::selection::{Correctness, SelectionResult};
