//! # Adapters Layer (Outer Hexagon)
//!
//! In-memory implementations of the outbound ports.

pub mod clock;
pub mod contract_wallets;
pub mod event_log;
pub mod ledger;

pub use clock::ManualTimeSource;
pub use contract_wallets::InMemoryContractWallets;
pub use event_log::EventLog;
pub use ledger::InMemoryLedger;
