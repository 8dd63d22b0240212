//! Storage helpers shared by the repository test doubles.

pub mod memory;
