//! # Test Fixtures
//!
//! A registry wired to in-memory adapters, plus deterministic signers.

use k256::ecdsa::SigningKey;
use qc_18_name_registry::domain::ecdsa::test_helpers::{address_of, sign, signing_key};
use qc_18_name_registry::prelude::*;
use std::sync::Arc;

/// Deployment time used by every fixture.
pub const GENESIS: Timestamp = 1_700_000_000;

/// One day in seconds.
pub const DAY: u64 = 24 * 60 * 60;

/// Registry owner.
pub const OWNER: Address = Address::new([0x0A; 20]);

/// A namespace creator.
pub const ALICE: Address = Address::new([0xA1; 20]);

/// An unrelated caller.
pub const BOB: Address = Address::new([0xB0; 20]);

/// Registry plus handles to its collaborators.
pub struct Fixture {
    /// The registry under test.
    pub registry: Arc<InMemoryRegistry>,
    /// Value ledger.
    pub ledger: Arc<InMemoryLedger>,
    /// Contract wallets.
    pub wallets: Arc<InMemoryContractWallets>,
    /// Clock.
    pub clock: Arc<ManualTimeSource>,
    /// Published events.
    pub events: Arc<EventLog>,
}

impl Fixture {
    /// Fresh registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Fresh registry with `config`.
    pub fn with_config(config: RegistryConfig) -> Self {
        init_tracing();

        let ledger = Arc::new(InMemoryLedger::new());
        let wallets = Arc::new(InMemoryContractWallets::new());
        let clock = Arc::new(ManualTimeSource::new(GENESIS));
        let events = Arc::new(EventLog::new());
        let registry = NameRegistryService::new(
            config,
            OWNER,
            Arc::clone(&ledger),
            Arc::clone(&wallets),
            Arc::clone(&clock),
            Arc::clone(&events),
        )
        .expect("default config is valid");

        Self {
            registry: Arc::new(registry),
            ledger,
            wallets,
            clock,
            events,
        }
    }

    /// Recipient consent for `label.namespace` at the signer's current nonce.
    pub fn consent(&self, key: &SigningKey, label: &str, namespace: &str) -> Vec<u8> {
        let digest = self
            .registry
            .registration_digest(label, namespace, address_of(key));
        sign(&digest, key)
    }

    /// `n` prices of `price`.
    pub fn times(price: U256, n: u64) -> U256 {
        price.saturating_mul(U256::from(n))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A deterministic user key and its address.
pub fn user(seed: u8) -> (SigningKey, Address) {
    let key = signing_key(seed);
    let address = address_of(&key);
    (key, address)
}

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
