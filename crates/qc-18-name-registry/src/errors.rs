//! # Error Types
//!
//! All error types for registry operations.
//!
//! Registry errors fall into four classes:
//!
//! | Class | Meaning | Caller action |
//! |-------|---------|---------------|
//! | Input validation | Malformed key, label or price | Fix the input |
//! | State conflict | Record already exists / address already named | Retry with other parameters |
//! | Authorization | Wrong caller, closed window, bad signature | Wait or obtain rights |
//! | Payment | Underpayment or a failed value movement | Call reverted, nothing moved |

use crate::domain::value_objects::{Address, U256};
use thiserror::Error;

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors returned by registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    // --- input validation ---
    /// Namespace key fails the character-class rule.
    #[error("invalid namespace key: {0:?}")]
    InvalidKey(String),

    /// Namespace key is reserved.
    #[error("reserved namespace key: {0:?}")]
    ReservedKey(String),

    /// Price per name is below the minimum for the namespace kind.
    #[error("price too low: {price} < minimum {minimum}")]
    PriceTooLow {
        /// Requested price per name.
        price: U256,
        /// Minimum for the namespace kind.
        minimum: U256,
    },

    /// Price per name is not a multiple of the price step.
    #[error("price {price} is not a multiple of step {step}")]
    PriceNotStepMultiple {
        /// Requested price per name.
        price: U256,
        /// Configured price step.
        step: U256,
    },

    /// Label fails the character-class rule.
    #[error("invalid label: {0:?}")]
    InvalidLabel(String),

    /// Batch arrays have different lengths.
    #[error("batch length mismatch: {labels} labels, {recipients} recipients, {signatures} signatures")]
    LengthMismatch {
        /// Number of labels.
        labels: usize,
        /// Number of recipients.
        recipients: usize,
        /// Number of signatures.
        signatures: usize,
    },

    /// Batch contains no entries.
    #[error("batch is empty")]
    EmptyArray,

    /// Batch exceeds the configured maximum size.
    #[error("batch too large: {size} > {max}")]
    BatchTooLarge {
        /// Entries in the batch.
        size: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Namespace creator is the zero address.
    #[error("namespace creator is the zero address")]
    ZeroCreator,

    /// Fee recipient is the zero address.
    #[error("recipient is the zero address")]
    ZeroRecipient,

    // --- state conflicts ---
    /// Namespace key is already registered.
    #[error("namespace already exists: {0:?}")]
    AlreadyExists(String),

    /// Namespace key is not registered (namespace queries).
    #[error("namespace not found: {0:?}")]
    NotFound(String),

    /// Namespace key is not registered (name registration).
    #[error("namespace not found: {0:?}")]
    NamespaceNotFound(String),

    /// The would-be owner already owns a name.
    #[error("address {0:?} already owns a name")]
    AlreadyHasName(Address),

    /// The (label, namespace) pair is taken.
    #[error("name already registered: {label}.{namespace}")]
    NameAlreadyRegistered {
        /// Requested label.
        label: String,
        /// Namespace key.
        namespace: String,
    },

    /// Caller has no pending fees.
    #[error("no fees to claim")]
    NoFeesToClaim,

    // --- authorization ---
    /// Caller is not the registry owner.
    #[error("caller {0:?} is not the registry owner")]
    NotOwner(Address),

    /// Caller is not the pending owner.
    #[error("caller {0:?} is not the pending owner")]
    NotPendingOwner(Address),

    /// The owner onboarding period has ended.
    #[error("onboarding period is over")]
    OnboardingOver,

    /// Self-service registration into a private namespace.
    #[error("namespace {0:?} is private")]
    PrivateNamespace(String),

    /// Public namespace still reserved for its creator.
    #[error("namespace {0:?} is in its exclusivity period")]
    InExclusivityPeriod(String),

    /// Sponsored registration in a public namespace during exclusivity by a non-creator.
    #[error("only the creator of {0:?} may sponsor names during exclusivity")]
    NotNamespaceCreatorExclusivity(String),

    /// Sponsored registration in a private namespace by a non-creator.
    #[error("only the creator of private namespace {0:?} may sponsor names")]
    NotNamespaceCreatorPrivate(String),

    /// Neither signature path authorized the recipient.
    #[error("recipient {0:?} did not authorize this registration")]
    BadAuthorization(Address),

    // --- payment ---
    /// Namespace creation fee underpaid.
    #[error("insufficient fee: required {required}, sent {sent}")]
    InsufficientFee {
        /// Fee for the namespace kind.
        required: U256,
        /// Value attached to the call.
        sent: U256,
    },

    /// Name registration underpaid.
    #[error("insufficient payment: required {required}, sent {sent}")]
    InsufficientPayment {
        /// Price owed.
        required: U256,
        /// Value attached to the call.
        sent: U256,
    },

    /// Refund to the caller could not be delivered.
    #[error("refund of {amount} to {to:?} failed")]
    RefundFailed {
        /// Caller owed the refund.
        to: Address,
        /// Refund amount.
        amount: U256,
    },

    /// A transfer other than a refund could not be delivered.
    #[error("transfer of {amount} to {to:?} failed")]
    TransferFailed {
        /// Intended recipient.
        to: Address,
        /// Transfer amount.
        amount: U256,
    },

    /// The burn collaborator refused the burn portion.
    #[error("burn of {amount} failed: {reason}")]
    BurnFailed {
        /// Total burn portion of the call.
        amount: U256,
        /// Reason reported by the burn collaborator.
        reason: String,
    },

    /// Amount arithmetic overflowed.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}

/// Error taxonomy for registry failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Caller-fixable input errors.
    InputValidation,
    /// Lost races against existing state.
    StateConflict,
    /// Wrong caller, closed window or missing consent.
    Authorization,
    /// Underpayment or failed value movement.
    Payment,
}

impl RegistryError {
    /// Classifies this error.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidKey(_)
            | Self::ReservedKey(_)
            | Self::PriceTooLow { .. }
            | Self::PriceNotStepMultiple { .. }
            | Self::InvalidLabel(_)
            | Self::LengthMismatch { .. }
            | Self::EmptyArray
            | Self::BatchTooLarge { .. }
            | Self::ZeroCreator
            | Self::ZeroRecipient => ErrorClass::InputValidation,

            Self::AlreadyExists(_)
            | Self::NotFound(_)
            | Self::NamespaceNotFound(_)
            | Self::AlreadyHasName(_)
            | Self::NameAlreadyRegistered { .. }
            | Self::NoFeesToClaim => ErrorClass::StateConflict,

            Self::NotOwner(_)
            | Self::NotPendingOwner(_)
            | Self::OnboardingOver
            | Self::PrivateNamespace(_)
            | Self::InExclusivityPeriod(_)
            | Self::NotNamespaceCreatorExclusivity(_)
            | Self::NotNamespaceCreatorPrivate(_)
            | Self::BadAuthorization(_) => ErrorClass::Authorization,

            Self::InsufficientFee { .. }
            | Self::InsufficientPayment { .. }
            | Self::RefundFailed { .. }
            | Self::TransferFailed { .. }
            | Self::BurnFailed { .. }
            | Self::ArithmeticOverflow => ErrorClass::Payment,
        }
    }

    /// Returns true if retrying with different parameters may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.class() == ErrorClass::StateConflict
    }
}

// =============================================================================
// TRANSFER ERRORS
// =============================================================================

/// Errors from the value ledger collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Recipient rejected the transfer.
    #[error("recipient {to:?} rejected {amount}")]
    Rejected {
        /// Rejecting recipient.
        to: Address,
        /// Amount refused.
        amount: U256,
    },

    /// Burn collaborator refused the value.
    #[error("burn sink unavailable: {0}")]
    BurnUnavailable(String),

    /// Ledger arithmetic overflow.
    #[error("ledger overflow")]
    Overflow,
}

// =============================================================================
// SIGNATURE ERRORS
// =============================================================================

/// Errors from registration authorization checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// Signature blob is not 65 bytes or a scalar is out of range.
    #[error("invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (EIP-2 malleability protection).
    #[error("malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28).
    #[error("invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover a public key from the signature.
    #[error("failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer does not match the recipient.
    #[error("signer mismatch: expected {expected:?}, got {actual:?}")]
    SignerMismatch {
        /// The recipient.
        expected: Address,
        /// The recovered signer.
        actual: Address,
    },

    /// Contract wallet did not return the magic value.
    #[error("contract wallet {0:?} rejected the signature")]
    ContractRejected(Address),
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Errors from configuration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Price step is zero.
    #[error("price step must be non-zero")]
    ZeroPriceStep,

    /// A configured price is not a step multiple.
    #[error("{field} ({value}) is not a multiple of the price step")]
    NotStepMultiple {
        /// Offending field name.
        field: &'static str,
        /// Its value.
        value: U256,
    },

    /// Private minimum is below the public minimum.
    #[error("private minimum price must be at least the public minimum")]
    PrivateMinimumTooLow,

    /// Public namespace fee must exceed the private fee.
    #[error("public namespace fee must exceed the private namespace fee")]
    FeeOrdering,

    /// Bare namespace key is not a valid key.
    #[error("invalid bare namespace key: {0:?}")]
    InvalidBareKey(String),

    /// Maximum batch size is zero.
    #[error("max batch size must be non-zero")]
    ZeroBatchSize,
}

// =============================================================================
// TESTS
// =============================================================================
