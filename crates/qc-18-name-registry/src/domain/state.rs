//! # Registry State
//!
//! The registry store and the journal that stages changes against it.
//!
//! A mutating call never writes to [`RegistryState`] directly. It stages
//! [`RegistryChange`]s and [`Payout`]s in a [`Journal`]; the service executes
//! the payouts and commits the journal only if they all succeeded.

use crate::domain::entities::{NameKey, Namespace, Payout, RegistryChange};
use crate::domain::value_objects::{Address, Timestamp, U256};
use crate::errors::RegistryError;
use std::collections::HashMap;

// =============================================================================
// OWNERSHIP
// =============================================================================

/// Two-step ownership record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ownership {
    /// Current owner.
    pub owner: Address,
    /// Proposed owner awaiting acceptance.
    pub pending_owner: Option<Address>,
}

impl Ownership {
    /// Ownership held by `owner` with nothing pending.
    #[must_use]
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            pending_owner: None,
        }
    }
}

// =============================================================================
// STORE
// =============================================================================

/// The registry store.
#[derive(Clone, Debug)]
pub struct RegistryState {
    namespaces: HashMap<String, Namespace>,
    names: HashMap<NameKey, Address>,
    reverse: HashMap<Address, NameKey>,
    pending_fees: HashMap<Address, U256>,
    nonces: HashMap<Address, u64>,
    /// Value held for pending-fee balances.
    custody: U256,
    /// Owner and pending owner.
    pub ownership: Ownership,
    deployed_at: Timestamp,
}

impl RegistryState {
    /// An empty store deployed at `deployed_at` and owned by `owner`.
    #[must_use]
    pub fn new(owner: Address, deployed_at: Timestamp) -> Self {
        Self {
            namespaces: HashMap::new(),
            names: HashMap::new(),
            reverse: HashMap::new(),
            pending_fees: HashMap::new(),
            nonces: HashMap::new(),
            custody: U256::zero(),
            ownership: Ownership::new(owner),
            deployed_at,
        }
    }

    /// Deployment timestamp.
    #[must_use]
    pub fn deployed_at(&self) -> Timestamp {
        self.deployed_at
    }

    /// Namespace record by key.
    #[must_use]
    pub fn namespace(&self, key: &str) -> Option<&Namespace> {
        self.namespaces.get(key)
    }

    /// Owner of a name.
    #[must_use]
    pub fn owner_of(&self, name: &NameKey) -> Option<Address> {
        self.names.get(name).copied()
    }

    /// Name owned by an address.
    #[must_use]
    pub fn name_of(&self, owner: Address) -> Option<&NameKey> {
        self.reverse.get(&owner)
    }

    /// Pending fee balance.
    #[must_use]
    pub fn pending_fees(&self, account: Address) -> U256 {
        self.pending_fees.get(&account).copied().unwrap_or_default()
    }

    /// Registration nonce.
    #[must_use]
    pub fn nonce(&self, account: Address) -> u64 {
        self.nonces.get(&account).copied().unwrap_or(0)
    }

    /// Value held for pending-fee balances.
    #[must_use]
    pub fn custody(&self) -> U256 {
        self.custody
    }

    /// Number of namespaces.
    #[must_use]
    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    /// Number of names.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Forward name table.
    pub fn names(&self) -> impl Iterator<Item = (&NameKey, &Address)> {
        self.names.iter()
    }

    /// Reverse name table.
    pub fn reverse_names(&self) -> impl Iterator<Item = (&Address, &NameKey)> {
        self.reverse.iter()
    }

    /// All non-zero pending balances.
    pub fn pending_balances(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.pending_fees.iter()
    }

    /// Applies a journal. Overflow was ruled out while staging.
    pub fn commit(&mut self, journal: Journal) -> Vec<RegistryChange> {
        for change in &journal.changes {
            match change {
                RegistryChange::NamespaceCreated(ns) => {
                    self.namespaces.insert(ns.key.clone(), ns.clone());
                }
                RegistryChange::NameRegistered { name, owner } => {
                    self.names.insert(name.clone(), *owner);
                    self.reverse.insert(*owner, name.clone());
                }
                RegistryChange::FeeCredited { account, amount } => {
                    let balance = self.pending_fees.entry(*account).or_default();
                    *balance = balance.saturating_add(*amount);
                    self.custody = self.custody.saturating_add(*amount);
                }
                RegistryChange::NonceIncrement { account } => {
                    let nonce = self.nonces.entry(*account).or_insert(0);
                    *nonce = nonce.saturating_add(1);
                }
            }
        }
        journal.changes
    }

    /// Zeroes a pending balance after its payout succeeded.
    pub fn clear_pending_fees(&mut self, account: Address) -> U256 {
        let amount = self.pending_fees.remove(&account).unwrap_or_default();
        self.custody = self.custody.saturating_sub(amount);
        amount
    }
}

// =============================================================================
// JOURNAL
// =============================================================================

/// Changes and payouts staged by one call.
///
/// Lookups through the journal see the store plus everything staged so far,
/// so later batch entries observe earlier ones.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    changes: Vec<RegistryChange>,
    payouts: Vec<Payout>,
    staged_names: HashMap<NameKey, Address>,
    staged_owners: HashMap<Address, NameKey>,
    staged_credits: HashMap<Address, U256>,
}

impl Journal {
    /// An empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` is registered or staged.
    #[must_use]
    pub fn is_name_taken(&self, state: &RegistryState, name: &NameKey) -> bool {
        self.staged_names.contains_key(name) || state.owner_of(name).is_some()
    }

    /// Returns true if `account` owns a name or has one staged.
    #[must_use]
    pub fn has_name(&self, state: &RegistryState, account: Address) -> bool {
        self.staged_owners.contains_key(&account) || state.name_of(account).is_some()
    }

    /// Stages a namespace record.
    pub fn stage_namespace(&mut self, namespace: Namespace) {
        self.changes.push(RegistryChange::NamespaceCreated(namespace));
    }

    /// Stages a name and advances the owner's nonce.
    pub fn stage_name(&mut self, name: NameKey, owner: Address) {
        self.staged_names.insert(name.clone(), owner);
        self.staged_owners.insert(owner, name.clone());
        self.changes
            .push(RegistryChange::NameRegistered { name, owner });
        self.changes
            .push(RegistryChange::NonceIncrement { account: owner });
    }

    /// Stages a pending-fee credit.
    ///
    /// # Errors
    /// `ArithmeticOverflow` if the balance or the registry custody would overflow.
    pub fn stage_credit(
        &mut self,
        state: &RegistryState,
        account: Address,
        amount: U256,
    ) -> Result<(), RegistryError> {
        let staged = self.staged_credits.get(&account).copied().unwrap_or_default();
        let new_staged = staged
            .checked_add(amount)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        state
            .pending_fees(account)
            .checked_add(new_staged)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        state
            .custody()
            .checked_add(self.staged_credit_total()?)
            .and_then(|c| c.checked_add(amount))
            .ok_or(RegistryError::ArithmeticOverflow)?;

        self.staged_credits.insert(account, new_staged);
        self.changes
            .push(RegistryChange::FeeCredited { account, amount });
        Ok(())
    }

    fn staged_credit_total(&self) -> Result<U256, RegistryError> {
        self.staged_credits
            .values()
            .try_fold(U256::zero(), |acc, v| acc.checked_add(*v))
            .ok_or(RegistryError::ArithmeticOverflow)
    }

    /// Queues a value movement.
    pub fn push_payout(&mut self, payout: Payout) {
        if !payout.amount().is_zero() {
            self.payouts.push(payout);
        }
    }

    /// Staged changes.
    #[must_use]
    pub fn changes(&self) -> &[RegistryChange] {
        &self.changes
    }

    /// Queued payouts.
    #[must_use]
    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }
}
