//! # In-Memory Contract Wallets
//!
//! Contract accounts that validate signatures by looking up an approved set
//! of message hashes, the way a multisig marks a message as signed.

use crate::domain::authorization::CONTRACT_WALLET_MAGIC;
use crate::domain::value_objects::{Address, Hash};
use crate::ports::outbound::ContractWallets;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

/// In-memory contract wallets for testing.
#[derive(Debug, Default)]
pub struct InMemoryContractWallets {
    approved: RwLock<HashMap<Address, HashSet<Hash>>>,
}

impl InMemoryContractWallets {
    /// No contract accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives `account` code.
    pub fn register_contract(&self, account: Address) {
        self.approved.write().entry(account).or_default();
    }

    /// Marks `hash` as signed by the contract at `account`.
    pub fn approve(&self, account: Address, hash: Hash) {
        self.approved.write().entry(account).or_default().insert(hash);
    }

    /// Withdraws an approval.
    pub fn revoke(&self, account: Address, hash: &Hash) {
        if let Some(set) = self.approved.write().get_mut(&account) {
            set.remove(hash);
        }
    }
}

impl ContractWallets for InMemoryContractWallets {
    fn is_contract(&self, account: Address) -> bool {
        self.approved.read().contains_key(&account)
    }

    fn is_valid_signature(
        &self,
        account: Address,
        hash: &Hash,
        _signature: &[u8],
    ) -> Option<[u8; 4]> {
        let approved = self.approved.read();
        let set = approved.get(&account)?;
        Some(if set.contains(hash) {
            CONTRACT_WALLET_MAGIC
        } else {
            [0u8; 4]
        })
    }
}
