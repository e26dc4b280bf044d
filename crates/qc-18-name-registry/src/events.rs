//! # Event Schema
//!
//! Events published for observers and indexers after a call commits.
//! A failed call publishes nothing.
//!
//! | Event | Emitted by |
//! |-------|-----------|
//! | `NamespaceRegistered` | `create_namespace`, `create_namespace_for` |
//! | `NameRegistered` | every registration path, once per committed name |
//! | `FeesClaimed` | `claim_fees`, `claim_fees_to_self` |
//! | `OwnershipTransferStarted` | `transfer_ownership` |
//! | `OwnershipTransferred` | `accept_ownership` |

use crate::domain::entities::RegistryChange;
use crate::domain::value_objects::{Address, Timestamp, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// PAYLOADS
// =============================================================================

/// A namespace was created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRegisteredPayload {
    /// Namespace key.
    pub key: String,
    /// Creator.
    pub creator: Address,
    /// Price per name.
    pub price: U256,
    /// Private flag.
    pub is_private: bool,
    /// Creation timestamp.
    pub created_at: Timestamp,
}

/// A name was assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRegisteredPayload {
    /// Label.
    pub label: String,
    /// Namespace key.
    pub namespace: String,
    /// New owner.
    pub owner: Address,
}

/// Pending fees were paid out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeesClaimedPayload {
    /// Account whose balance was claimed.
    pub claimant: Address,
    /// Account that received the value.
    pub recipient: Address,
    /// Amount paid out.
    pub amount: U256,
}

/// Ownership change event payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipPayload {
    /// Owner at the time of the event.
    pub previous_owner: Address,
    /// Proposed or new owner.
    pub new_owner: Address,
}

// =============================================================================
// EVENTS
// =============================================================================

/// Registry events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum RegistryEvent {
    /// A namespace was created.
    NamespaceRegistered(NamespaceRegisteredPayload),
    /// A name was assigned.
    NameRegistered(NameRegisteredPayload),
    /// Pending fees were claimed.
    FeesClaimed(FeesClaimedPayload),
    /// An ownership transfer was proposed (or cancelled, with a zero new owner).
    OwnershipTransferStarted(OwnershipPayload),
    /// Ownership changed hands.
    OwnershipTransferred(OwnershipPayload),
}

impl RegistryEvent {
    /// Topic this event is published on.
    #[must_use]
    pub fn topic(&self) -> &'static str {
        match self {
            Self::NamespaceRegistered(_) => topics::NAMESPACE_REGISTERED,
            Self::NameRegistered(_) => topics::NAME_REGISTERED,
            Self::FeesClaimed(_) => topics::FEES_CLAIMED,
            Self::OwnershipTransferStarted(_) => topics::OWNERSHIP_TRANSFER_STARTED,
            Self::OwnershipTransferred(_) => topics::OWNERSHIP_TRANSFERRED,
        }
    }

    /// The observable event for a committed change, if any.
    #[must_use]
    pub fn from_change(change: &RegistryChange) -> Option<Self> {
        match change {
            RegistryChange::NamespaceCreated(ns) => {
                Some(Self::NamespaceRegistered(NamespaceRegisteredPayload {
                    key: ns.key.clone(),
                    creator: ns.creator,
                    price: ns.price_per_name,
                    is_private: ns.is_private,
                    created_at: ns.created_at,
                }))
            }
            RegistryChange::NameRegistered { name, owner } => {
                Some(Self::NameRegistered(NameRegisteredPayload {
                    label: name.label.clone(),
                    namespace: name.namespace.clone(),
                    owner: *owner,
                }))
            }
            RegistryChange::FeeCredited { .. } | RegistryChange::NonceIncrement { .. } => None,
        }
    }
}

/// Event topics.
pub mod topics {
    /// Namespace created.
    pub const NAMESPACE_REGISTERED: &str = "name_registry.namespace.registered";

    /// Name assigned.
    pub const NAME_REGISTERED: &str = "name_registry.name.registered";

    /// Fees claimed.
    pub const FEES_CLAIMED: &str = "name_registry.fees.claimed";

    /// Ownership transfer proposed.
    pub const OWNERSHIP_TRANSFER_STARTED: &str = "name_registry.ownership.transfer_started";

    /// Ownership transferred.
    pub const OWNERSHIP_TRANSFERRED: &str = "name_registry.ownership.transferred";
}
