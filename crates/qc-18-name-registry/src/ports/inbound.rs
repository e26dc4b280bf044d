//! # Driving Ports (API - Inbound)
//!
//! The public surface of the name registry. Mutating calls take the
//! authenticated caller (and, for paying calls, the attached value) as a
//! [`CallContext`]; reads take no caller.

use crate::domain::authorization::AuthorizationPath;
use crate::domain::entities::{BatchOutcome, NameKey, Namespace};
use crate::domain::value_objects::{Address, CallContext, Hash, U256};
use crate::errors::RegistryError;

/// Name registry API.
pub trait NameRegistryApi: Send + Sync {
    // --- namespaces ---

    /// Creates a namespace owned by the caller, paying the creation fee
    /// from `ctx.value`.
    fn create_namespace(
        &self,
        ctx: CallContext,
        key: &str,
        price_per_name: U256,
        is_private: bool,
    ) -> Result<(), RegistryError>;

    /// Owner-only, onboarding-only creation on behalf of `creator`.
    fn create_namespace_for(
        &self,
        caller: Address,
        key: &str,
        price_per_name: U256,
        creator: Address,
        is_private: bool,
    ) -> Result<(), RegistryError>;

    /// Namespace record.
    fn get_namespace(&self, key: &str) -> Result<Namespace, RegistryError>;

    /// Price per name in a namespace.
    fn get_namespace_price(&self, key: &str) -> Result<U256, RegistryError>;

    /// Whether the namespace is still creator-only.
    fn is_in_exclusivity_period(&self, key: &str) -> Result<bool, RegistryError>;

    // --- names ---

    /// Registers `label.namespace` to the caller.
    fn register_name(
        &self,
        ctx: CallContext,
        label: &str,
        namespace: &str,
    ) -> Result<NameKey, RegistryError>;

    /// Registers `label.namespace` to `recipient`, paid by the caller.
    fn register_name_with_authorization(
        &self,
        ctx: CallContext,
        label: &str,
        namespace: &str,
        recipient: Address,
        signature: &[u8],
    ) -> Result<AuthorizationPath, RegistryError>;

    /// Sponsored registration of many names in one namespace.
    fn batch_register_name_with_authorization(
        &self,
        ctx: CallContext,
        labels: &[String],
        namespace: &str,
        recipients: &[Address],
        signatures: &[Vec<u8>],
    ) -> Result<BatchOutcome, RegistryError>;

    /// Owner of `label.namespace`, or the zero address.
    fn get_address(&self, label: &str, namespace: &str) -> Address;

    /// Owner of a full name, or the zero address.
    fn get_address_by_full_name(&self, full_name: &str) -> Address;

    /// Rendered name owned by `owner`, or the empty string.
    fn get_name(&self, owner: Address) -> String;

    /// Read-only authorization check against the recipient's current nonce.
    fn is_valid_signature(
        &self,
        label: &str,
        namespace: &str,
        recipient: Address,
        signature: &[u8],
    ) -> bool;

    /// Digest `recipient` must sign to consent to `label.namespace`.
    fn registration_digest(&self, label: &str, namespace: &str, recipient: Address) -> Hash;

    /// Recipient's registration nonce.
    fn get_nonce(&self, account: Address) -> u64;

    /// Syntax check shared by labels and namespace keys.
    fn is_valid_label_or_namespace(&self, s: &str) -> bool;

    // --- fees ---

    /// Pending fee balance.
    fn get_pending_fees(&self, account: Address) -> U256;

    /// Pays the caller's pending balance to `recipient`.
    fn claim_fees(&self, caller: Address, recipient: Address) -> Result<U256, RegistryError>;

    /// Pays the caller's pending balance to the caller.
    fn claim_fees_to_self(&self, caller: Address) -> Result<U256, RegistryError>;

    // --- ownership ---

    /// Current owner.
    fn owner(&self) -> Address;

    /// Proposed owner, if any.
    fn pending_owner(&self) -> Option<Address>;

    /// Proposes a new owner. The zero address cancels.
    fn transfer_ownership(&self, caller: Address, new_owner: Address)
        -> Result<(), RegistryError>;

    /// Completes a proposed transfer.
    fn accept_ownership(&self, caller: Address) -> Result<(), RegistryError>;
}
