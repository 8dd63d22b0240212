//! Persistence building blocks: the pooled connection gateway and the
//! sea-orm entities for `categories` and `services`.

pub mod errors;
pub mod db;
pub mod category;
pub mod service;

#[cfg(test)]
mod tests;
