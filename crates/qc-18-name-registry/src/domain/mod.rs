//! # Domain Layer (Inner Hexagon)
//!
//! Pure registry logic: validation, fee splitting, name parsing, signature
//! checks and the staged store. No I/O and no clocks; time and value
//! movements arrive through the ports.

pub mod authorization;
pub mod ecdsa;
pub mod entities;
pub mod fees;
pub mod invariants;
pub mod names;
pub mod state;
pub mod validation;
pub mod value_objects;

pub use authorization::{authorize, AuthorizationPath, SigningDomain, CONTRACT_WALLET_MAGIC};
pub use entities::*;
pub use fees::{settle, split_fee, FeeContext, FeeSplit, Settlement};
pub use invariants::{check_all_invariants, InvariantCheckResult, InvariantViolation};
pub use names::{parse_full_name, render_name};
pub use state::{Journal, Ownership, RegistryState};
pub use validation::{check_price, is_price_valid, is_valid_label_or_namespace, PriceRule};
pub use value_objects::*;
