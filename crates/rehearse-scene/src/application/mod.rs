//! Loading scene documents from disk or memory.

pub mod loader;
pub(crate) mod schema;
