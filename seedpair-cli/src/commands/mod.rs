//! CLI command implementations

pub mod find;
pub mod pairs;
pub mod split;
