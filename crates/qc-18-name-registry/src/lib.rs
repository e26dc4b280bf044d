//! # QC-18 Name Registry - Namespaced Naming Subsystem
//!
//! **Subsystem ID:** 18
//!
//! ## Purpose
//!
//! Maps human-readable names (`label.namespace`) to account addresses and
//! back. Anyone may create a namespace for a fee; namespace creators price
//! the names in it and sponsor names for recipients who sign their consent.
//! Every retained payment is split between a burn sink, the namespace
//! creator and the registry owner.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | One name per address, one owner per name | `domain/state.rs` - `Journal::has_name()`, `Journal::is_name_taken()` |
//! | Fee split reconciles exactly | `domain/fees.rs` - `split_fee()` |
//! | Namespace fields immutable | `domain/state.rs` - no update path |
//! | Failed calls leave no trace | `service.rs` - `commit()` |
//! | Custody equals pending fees | `domain/invariants.rs` - `check_custody()` |
//!
//! ## Components
//!
//! | Component | Location | Purpose |
//! |-----------|----------|---------|
//! | Validation | `domain/validation.rs` | Label/key syntax, price rules |
//! | Fees | `domain/fees.rs` | Burn / creator / owner split |
//! | Names | `domain/names.rs` | Full-name parsing and rendering |
//! | Authorization | `domain/authorization.rs` | Typed-data digest, ECDSA or contract-wallet consent |
//! | Store | `domain/state.rs` | Namespace and name tables, staged journal |
//! | Service | `service.rs` | `NameRegistryApi` implementation |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `TimeSource` | Exclusivity and onboarding windows |
//! | `ValueLedger` | Refunds, fee claims, burn forwarding |
//! | `ContractWallets` | Delegated signature validation |
//! | `EventSink` | Committed events |
//!
//! ## Usage Example
//!
//! ```ignore
//! use qc_18_name_registry::prelude::*;
//!
//! registry.create_namespace(CallContext::new(alice, fee), "abc", price, false)?;
//! registry.register_name(CallContext::new(alice, price), "alice", "abc")?;
//! assert_eq!(registry.get_address_by_full_name("alice.abc"), alice);
//! assert_eq!(registry.get_name(alice), "alice.abc");
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{
        BatchOutcome, EntryOutcome, NameKey, Namespace, Payout, RegistryChange, SkipReason,
        TransferReason,
    };

    // Value objects
    pub use crate::domain::value_objects::{milli_units, Address, CallContext, Hash, Timestamp, U256};

    // Domain services
    pub use crate::domain::authorization::{AuthorizationPath, SigningDomain, CONTRACT_WALLET_MAGIC};
    pub use crate::domain::fees::{split_fee, FeeContext, FeeSplit};
    pub use crate::domain::names::{parse_full_name, render_name};
    pub use crate::domain::validation::{
        check_price, is_price_valid, is_valid_label_or_namespace, PriceRule,
    };

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::NameRegistryApi;
    pub use crate::ports::outbound::{
        ContractWallets, EventSink, NoopEventSink, SystemTimeSource, TimeSource, ValueLedger,
    };

    // Events
    pub use crate::events::{topics, RegistryEvent};

    // Errors
    pub use crate::errors::{ConfigError, ErrorClass, RegistryError, SignatureError, TransferError};

    // Config
    pub use crate::config::RegistryConfig;

    // Adapters
    pub use crate::adapters::{EventLog, InMemoryContractWallets, InMemoryLedger, ManualTimeSource};

    // Service
    pub use crate::service::{InMemoryRegistry, NameRegistryService, RegistryStats};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 18;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Name Registry";

// =============================================================================
// TESTS
// =============================================================================
