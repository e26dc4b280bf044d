//! # Domain Entities
//!
//! Records held by the registry and the staged changes that mutate them.

use crate::domain::value_objects::{Address, Timestamp, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NAMESPACE
// =============================================================================

/// A pricing and ownership domain for names.
///
/// `creator` and `is_private` never change after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Namespace key.
    pub key: String,
    /// Price per name registered in this namespace.
    pub price_per_name: U256,
    /// Account that created the namespace.
    pub creator: Address,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Private namespaces only accept creator-sponsored names.
    pub is_private: bool,
}

impl Namespace {
    /// End of the creator-only window (exclusive).
    #[must_use]
    pub fn exclusivity_ends_at(&self, period_secs: u64) -> Timestamp {
        self.created_at.saturating_add(period_secs)
    }

    /// Returns true while only the creator may register names.
    #[must_use]
    pub fn in_exclusivity_period(&self, now: Timestamp, period_secs: u64) -> bool {
        now < self.exclusivity_ends_at(period_secs)
    }
}

// =============================================================================
// NAME
// =============================================================================

/// Identity of a name: `(label, namespace)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NameKey {
    /// The label part.
    pub label: String,
    /// The namespace key.
    pub namespace: String,
}

impl NameKey {
    /// Creates a name key.
    #[must_use]
    pub fn new(label: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            namespace: namespace.into(),
        }
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label, self.namespace)
    }
}

// =============================================================================
// VALUE MOVEMENTS
// =============================================================================

/// Why native value leaves the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferReason {
    /// Returning overpayment to the caller.
    Refund,
    /// Paying out accumulated fees.
    FeeClaim,
}

/// A native-value movement requested by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payout {
    /// Forward value to the burn collaborator, crediting `payer` 1:1.
    Burn {
        /// Account credited by the burn collaborator.
        payer: Address,
        /// Value burnt.
        amount: U256,
    },
    /// Send value to an account.
    Transfer {
        /// Receiving account.
        to: Address,
        /// Value sent.
        amount: U256,
        /// Why the value moves.
        reason: TransferReason,
    },
}

impl Payout {
    /// Value moved by this payout.
    #[must_use]
    pub fn amount(&self) -> U256 {
        match self {
            Self::Burn { amount, .. } | Self::Transfer { amount, .. } => *amount,
        }
    }
}

// =============================================================================
// STATE CHANGES
// =============================================================================

/// A staged mutation of registry state, applied only on commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryChange {
    /// A namespace record was created.
    NamespaceCreated(Namespace),
    /// A name was assigned to an owner.
    NameRegistered {
        /// The name.
        name: NameKey,
        /// Its owner.
        owner: Address,
    },
    /// A pending-fee balance was credited.
    FeeCredited {
        /// Credited account.
        account: Address,
        /// Credit amount.
        amount: U256,
    },
    /// A recipient's registration nonce advanced.
    NonceIncrement {
        /// Account whose nonce advanced.
        account: Address,
    },
}

// =============================================================================
// BATCH ENTRIES
// =============================================================================

/// Why a batch entry was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Recipient already owns a name.
    RecipientHasName,
    /// The (label, namespace) pair is taken.
    NameTaken,
}

/// Outcome of one batch entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Entry committed.
    Committed(NameKey),
    /// Entry skipped; consumes no payment.
    Skipped(SkipReason),
}

/// Result of a batch registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Per-entry outcomes, in input order.
    pub entries: Vec<EntryOutcome>,
    /// Total charged (`price * success_count`).
    pub charged: U256,
    /// Amount returned to the caller.
    pub refunded: U256,
}

impl BatchOutcome {
    /// Number of committed entries.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, EntryOutcome::Committed(_)))
            .count()
    }

    /// Number of skipped entries.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.entries.len() - self.success_count()
    }
}
