//! Rehearse command-line runner.
//!
//! Wires configuration, logging and console input around the scene loader
//! and player. `main.rs` is a thin shell over `app::execute`.

pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
