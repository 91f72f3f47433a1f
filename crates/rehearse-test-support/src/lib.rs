//! Shared test mocks, fixtures and utilities for the Rehearse scene runner.

mod clock;
pub mod fixtures;
mod input;
mod rng;

pub use clock::{ManualClock, test_epoch};
pub use input::ScriptedInput;
pub use rng::SequenceRng;
