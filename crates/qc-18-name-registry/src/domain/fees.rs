//! # Fee Engine
//!
//! Splits every retained payment into a burn portion, a namespace-creator
//! portion and a registry-owner portion.
//!
//! | Context | Burn | Creator | Owner |
//! |---------|------|---------|-------|
//! | Namespace creation | 80% | 0% | 20% |
//! | Name in public namespace | 80% | 10% | 10% |
//! | Name in private namespace | 80% | 0% | 20% |
//!
//! Creator and owner shares truncate; the burn portion takes the remainder,
//! so `burn + creator + owner == total` for every input.

use crate::domain::entities::Payout;
use crate::domain::value_objects::{Address, U256};
use serde::{Deserialize, Serialize};

/// Basis-point denominator.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// What a payment is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeContext {
    /// Namespace creation fee.
    NamespaceCreation,
    /// Name registration in a public namespace.
    PublicName,
    /// Name registration in a private namespace.
    PrivateName,
}

impl FeeContext {
    /// Fee context for a name registered in a namespace of the given kind.
    #[must_use]
    pub fn for_name(is_private: bool) -> Self {
        if is_private {
            Self::PrivateName
        } else {
            Self::PublicName
        }
    }

    /// Creator share in basis points.
    #[must_use]
    pub const fn creator_bps(self) -> u64 {
        match self {
            Self::PublicName => 1_000,
            Self::NamespaceCreation | Self::PrivateName => 0,
        }
    }

    /// Owner share in basis points.
    #[must_use]
    pub const fn owner_bps(self) -> u64 {
        match self {
            Self::PublicName => 1_000,
            Self::NamespaceCreation | Self::PrivateName => 2_000,
        }
    }
}

/// Three-way split of a payment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeeSplit {
    /// Forwarded to the burn collaborator.
    pub burn: U256,
    /// Credited to the namespace creator.
    pub creator: U256,
    /// Credited to the registry owner.
    pub owner: U256,
}

impl FeeSplit {
    /// Sum of the three portions.
    #[must_use]
    pub fn total(&self) -> U256 {
        self.burn + self.creator + self.owner
    }
}

/// `floor(amount * bps / 10_000)` without intermediate overflow.
#[must_use]
pub fn bps_share(amount: U256, bps: u64) -> U256 {
    let denom = U256::from(BPS_DENOMINATOR);
    let bps = U256::from(bps);
    let quotient = amount / denom;
    let remainder = amount % denom;
    quotient * bps + remainder * bps / denom
}

/// Splits `total` for `context`.
#[must_use]
pub fn split_fee(total: U256, context: FeeContext) -> FeeSplit {
    let creator = bps_share(total, context.creator_bps());
    let owner = bps_share(total, context.owner_bps());
    FeeSplit {
        burn: total - creator - owner,
        creator,
        owner,
    }
}

/// The effects of settling one payment: a burn payout and pending-fee credits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// The split that produced this settlement.
    pub split: FeeSplit,
    /// Burn forwarded on behalf of the payer (absent when the burn portion is zero).
    pub burn: Option<Payout>,
    /// Pending-fee credits (zero credits omitted).
    pub credits: Vec<(Address, U256)>,
}

/// Settles `total` paid by `payer`.
///
/// The burn credits the payer, never a sponsored recipient. When creator and
/// owner are the same account their credits are both listed.
#[must_use]
pub fn settle(
    total: U256,
    context: FeeContext,
    payer: Address,
    creator: Address,
    owner: Address,
) -> Settlement {
    let split = split_fee(total, context);

    let burn = (!split.burn.is_zero()).then_some(Payout::Burn {
        payer,
        amount: split.burn,
    });

    let credits = [(creator, split.creator), (owner, split.owner)]
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .collect();

    Settlement {
        split,
        burn,
        credits,
    }
}
