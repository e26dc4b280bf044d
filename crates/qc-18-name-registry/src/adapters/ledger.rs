//! # In-Memory Value Ledger
//!
//! Records native-value movements out of the registry. Accounts can be
//! marked as rejecting (a recipient whose receive hook reverts) and the burn
//! sink can be taken offline to exercise failure paths.

use crate::domain::entities::{Payout, TransferReason};
use crate::domain::value_objects::{Address, U256};
use crate::errors::TransferError;
use crate::ports::outbound::ValueLedger;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use tracing::warn;

#[derive(Debug, Default, Clone)]
struct LedgerBook {
    received: HashMap<Address, U256>,
    burn_credits: HashMap<Address, U256>,
    total_burnt: U256,
    history: Vec<Payout>,
}

impl LedgerBook {
    fn apply(&mut self, payout: &Payout) -> Result<(), TransferError> {
        match payout {
            Payout::Burn { payer, amount } => {
                let credit = self.burn_credits.entry(*payer).or_default();
                *credit = credit.checked_add(*amount).ok_or(TransferError::Overflow)?;
                self.total_burnt = self
                    .total_burnt
                    .checked_add(*amount)
                    .ok_or(TransferError::Overflow)?;
            }
            Payout::Transfer { to, amount, .. } => {
                let balance = self.received.entry(*to).or_default();
                *balance = balance.checked_add(*amount).ok_or(TransferError::Overflow)?;
            }
        }
        self.history.push(payout.clone());
        Ok(())
    }
}

/// In-memory ledger for testing.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    book: RwLock<LedgerBook>,
    rejecting: RwLock<HashSet<Address>>,
    burn_outage: RwLock<Option<String>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `account` reject (or accept again) incoming transfers.
    pub fn set_rejecting(&self, account: Address, rejecting: bool) {
        let mut set = self.rejecting.write();
        if rejecting {
            set.insert(account);
        } else {
            set.remove(&account);
        }
    }

    /// Takes the burn sink offline with `reason`, or back online with `None`.
    pub fn set_burn_outage(&self, reason: Option<&str>) {
        *self.burn_outage.write() = reason.map(str::to_string);
    }

    /// Total value received by `account` from the registry.
    #[must_use]
    pub fn received(&self, account: Address) -> U256 {
        self.book
            .read()
            .received
            .get(&account)
            .copied()
            .unwrap_or_default()
    }

    /// Burn credits minted to `payer`.
    #[must_use]
    pub fn burn_credits(&self, payer: Address) -> U256 {
        self.book
            .read()
            .burn_credits
            .get(&payer)
            .copied()
            .unwrap_or_default()
    }

    /// Total value forwarded to the burn sink.
    #[must_use]
    pub fn total_burnt(&self) -> U256 {
        self.book.read().total_burnt
    }

    /// Total refunded to `account`.
    #[must_use]
    pub fn refunded(&self, account: Address) -> U256 {
        self.sum_transfers(account, TransferReason::Refund)
    }

    /// Total fee claims paid to `account`.
    #[must_use]
    pub fn fee_claims(&self, account: Address) -> U256 {
        self.sum_transfers(account, TransferReason::FeeClaim)
    }

    fn sum_transfers(&self, account: Address, wanted: TransferReason) -> U256 {
        self.book
            .read()
            .history
            .iter()
            .filter_map(|p| match p {
                Payout::Transfer { to, amount, reason } if *to == account && *reason == wanted => {
                    Some(*amount)
                }
                _ => None,
            })
            .fold(U256::zero(), |acc, v| acc.saturating_add(v))
    }

    /// Every executed payout, in order.
    #[must_use]
    pub fn history(&self) -> Vec<Payout> {
        self.book.read().history.clone()
    }
}

impl ValueLedger for InMemoryLedger {
    fn execute(&self, payouts: &[Payout]) -> Result<(), TransferError> {
        let rejecting = self.rejecting.read();
        let outage = self.burn_outage.read();
        let mut book = self.book.write();

        let mut staged = book.clone();
        for payout in payouts {
            match payout {
                Payout::Burn { amount, .. } => {
                    if let Some(reason) = outage.as_ref() {
                        warn!(amount = %amount, reason = %reason, "Burn sink unavailable");
                        return Err(TransferError::BurnUnavailable(reason.clone()));
                    }
                }
                Payout::Transfer { to, amount, .. } => {
                    if rejecting.contains(to) {
                        warn!(to = ?to, amount = %amount, "Recipient rejected transfer");
                        return Err(TransferError::Rejected {
                            to: *to,
                            amount: *amount,
                        });
                    }
                }
            }
            staged.apply(payout)?;
        }

        *book = staged;
        Ok(())
    }
}
