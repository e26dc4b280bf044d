//! # Domain Invariants
//!
//! Properties that must hold between any two registry calls.
//!
//! - Each address owns at most one name, each name has at most one owner
//!   (forward and reverse tables mirror each other).
//! - Every name lives in an existing namespace.
//! - The value held for pending fees equals the sum of pending balances.

use crate::domain::state::RegistryState;
use crate::domain::value_objects::U256;
use std::fmt;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Forward and reverse name tables are mirror images.
#[must_use]
pub fn check_name_bijection(state: &RegistryState) -> bool {
    if state.name_count() != state.reverse_names().count() {
        return false;
    }
    state
        .names()
        .all(|(name, owner)| state.name_of(*owner) == Some(name))
}

/// Every name refers to an existing namespace.
#[must_use]
pub fn check_names_have_namespace(state: &RegistryState) -> bool {
    state
        .names()
        .all(|(name, _)| state.namespace(&name.namespace).is_some())
}

/// Sum of pending balances, or `None` on overflow.
#[must_use]
pub fn pending_total(state: &RegistryState) -> Option<U256> {
    state
        .pending_balances()
        .try_fold(U256::zero(), |acc, (_, v)| acc.checked_add(*v))
}

/// Custody equals the sum of pending balances.
#[must_use]
pub fn check_custody(state: &RegistryState) -> bool {
    pending_total(state) == Some(state.custody())
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(state: &RegistryState) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_name_bijection(state) {
        violations.push(InvariantViolation::NameTablesDiverged {
            forward: state.name_count(),
            reverse: state.reverse_names().count(),
        });
    }

    if !check_names_have_namespace(state) {
        violations.push(InvariantViolation::OrphanedName);
    }

    if !check_custody(state) {
        violations.push(InvariantViolation::CustodyMismatch {
            custody: state.custody(),
            pending: pending_total(state),
        });
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Forward and reverse name tables disagree.
    NameTablesDiverged {
        /// Entries in the forward table.
        forward: usize,
        /// Entries in the reverse table.
        reverse: usize,
    },
    /// A name points at a missing namespace.
    OrphanedName,
    /// Custody differs from the pending total.
    CustodyMismatch {
        /// Value held by the registry.
        custody: U256,
        /// Sum of pending balances, `None` on overflow.
        pending: Option<U256>,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTablesDiverged { forward, reverse } => {
                write!(f, "name tables diverged: {forward} forward, {reverse} reverse")
            }
            Self::OrphanedName => write!(f, "name registered in a missing namespace"),
            Self::CustodyMismatch { custody, pending } => match pending {
                Some(p) => write!(f, "custody {custody} != pending total {p}"),
                None => write!(f, "pending total overflows (custody {custody})"),
            },
        }
    }
}
