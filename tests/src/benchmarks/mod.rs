//! # Name Registry Benchmarks
//!
//! Hot paths of the registry: fee arithmetic, name parsing, consent
//! verification and end-to-end registration.

pub mod qc_18_name_registry;
