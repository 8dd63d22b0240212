//! Shared wire types and process utilities for the catalog workspace.

pub mod types;
pub mod utils;
