//! Playback orchestration.

pub mod player;
mod report;
