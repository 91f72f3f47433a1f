//! Rehearse Core — shared abstractions.
//!
//! This crate defines the seams every other crate depends on: time,
//! learner input, randomness and the error taxonomy. It contains no
//! scene or playback logic.

pub mod clock;
pub mod error;
pub mod input;
pub mod rng;
