//! # Integration Tests
//!
//! Registry flows driven through `NameRegistryApi` with in-memory adapters.

pub mod fixtures;

mod batch;
mod flows;
