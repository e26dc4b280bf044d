//! # Driven Ports (SPI - Outbound Dependencies)
//!
//! Collaborators the registry calls out to: a clock, the native-value
//! ledger (transfers and the burn sink), contract-wallet signature
//! validation and an event sink.

use crate::domain::entities::Payout;
use crate::domain::value_objects::{Address, Hash, Timestamp};
use crate::errors::TransferError;
use crate::events::RegistryEvent;

// =============================================================================
// TIME
// =============================================================================

/// Time source.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in seconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

// =============================================================================
// VALUE LEDGER
// =============================================================================

/// Native-value movements out of the registry.
///
/// `execute` is all-or-nothing: if any payout fails, none take effect.
pub trait ValueLedger: Send + Sync {
    /// Executes payouts in order.
    ///
    /// # Errors
    /// The first failing payout's error; no payout has taken effect.
    fn execute(&self, payouts: &[Payout]) -> Result<(), TransferError>;
}

// =============================================================================
// CONTRACT WALLETS
// =============================================================================

/// Contract accounts and their signature-validation entry point.
pub trait ContractWallets: Send + Sync {
    /// Returns true if `account` has code.
    fn is_contract(&self, account: Address) -> bool;

    /// Calls the account's validation entry point.
    ///
    /// `None` means the call reverted or the account has no such entry point.
    fn is_valid_signature(&self, account: Address, hash: &Hash, signature: &[u8])
        -> Option<[u8; 4]>;
}

// =============================================================================
// EVENTS
// =============================================================================

/// Receives committed events.
pub trait EventSink: Send + Sync {
    /// Publishes one event.
    fn publish(&self, event: RegistryEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn publish(&self, _event: RegistryEvent) {}
}
