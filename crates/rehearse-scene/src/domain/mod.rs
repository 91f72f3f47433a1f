//! Scene domain model and semantic checks.

pub mod check;
pub mod model;
