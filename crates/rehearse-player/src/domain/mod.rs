//! Selection outcomes and automatic choice mappings.

pub mod auto_choices;
pub mod selection;
