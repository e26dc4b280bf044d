//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Port (Inbound)**: `NameRegistryApi`
//! - **Driven Ports (Outbound)**: `TimeSource`, `ValueLedger`, `ContractWallets`, `EventSink`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
