//! # Signature Authorizer
//!
//! Decides whether a recipient consented to being registered under a name.
//!
//! The signed message is domain-separated structured data:
//!
//! ```text
//! domainSeparator = keccak256(DOMAIN_TYPEHASH ‖ keccak(name) ‖ keccak(version) ‖ chainId ‖ registry)
//! structHash      = keccak256(REGISTER_TYPEHASH ‖ keccak(label) ‖ keccak(namespace) ‖ recipient ‖ nonce)
//! digest          = keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)
//! ```
//!
//! Verification tries standard ECDSA recovery first. If recovery does not
//! yield the recipient, or the recipient is a contract account, the digest
//! and signature are handed to the recipient's own validation entry point.

use crate::config::RegistryConfig;
use crate::domain::ecdsa::{keccak256, recover_address};
use crate::domain::value_objects::{Address, Hash, U256};
use crate::errors::SignatureError;
use crate::ports::outbound::ContractWallets;

/// Magic value a contract wallet returns for a valid signature.
pub const CONTRACT_WALLET_MAGIC: [u8; 4] = [0x16, 0x26, 0xba, 0x7e];

/// Domain type string.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Registration message type string.
pub const REGISTER_NAME_TYPE: &str =
    "RegisterName(string label,string namespace,address recipient,uint256 nonce)";

/// How a registration was authorized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorizationPath {
    /// Recovered ECDSA signer equals the recipient.
    Signature,
    /// The recipient contract returned the magic value.
    ContractWallet,
}

/// The signing domain a registry instance binds signatures to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningDomain {
    separator: Hash,
}

impl SigningDomain {
    /// Builds the domain separator from configuration.
    #[must_use]
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut encoded = Vec::with_capacity(32 * 5);
        encoded.extend_from_slice(keccak256(DOMAIN_TYPE.as_bytes()).as_bytes());
        encoded.extend_from_slice(keccak256(config.domain_name.as_bytes()).as_bytes());
        encoded.extend_from_slice(keccak256(config.domain_version.as_bytes()).as_bytes());
        encoded.extend_from_slice(&u256_word(U256::from(config.chain_id)));
        encoded.extend_from_slice(&config.registry_address.to_word());

        Self {
            separator: keccak256(&encoded),
        }
    }

    /// The domain separator.
    #[must_use]
    pub fn separator(&self) -> Hash {
        self.separator
    }

    /// Digest a recipient signs to consent to `label.namespace`.
    #[must_use]
    pub fn registration_digest(
        &self,
        label: &str,
        namespace: &str,
        recipient: Address,
        nonce: u64,
    ) -> Hash {
        let mut encoded = Vec::with_capacity(32 * 5);
        encoded.extend_from_slice(keccak256(REGISTER_NAME_TYPE.as_bytes()).as_bytes());
        encoded.extend_from_slice(keccak256(label.as_bytes()).as_bytes());
        encoded.extend_from_slice(keccak256(namespace.as_bytes()).as_bytes());
        encoded.extend_from_slice(&recipient.to_word());
        encoded.extend_from_slice(&u256_word(U256::from(nonce)));
        let struct_hash = keccak256(&encoded);

        let mut message = Vec::with_capacity(66);
        message.extend_from_slice(&[0x19, 0x01]);
        message.extend_from_slice(self.separator.as_bytes());
        message.extend_from_slice(struct_hash.as_bytes());
        keccak256(&message)
    }
}

fn u256_word(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// Verifies recipient consent for a digest.
pub fn authorize(
    wallets: &dyn ContractWallets,
    digest: &Hash,
    recipient: Address,
    signature: &[u8],
) -> Result<AuthorizationPath, SignatureError> {
    let recovered = recover_address(digest, signature);
    if matches!(recovered, Ok(signer) if signer == recipient) {
        return Ok(AuthorizationPath::Signature);
    }

    match wallets.is_valid_signature(recipient, digest, signature) {
        Some(magic) if magic == CONTRACT_WALLET_MAGIC => Ok(AuthorizationPath::ContractWallet),
        _ if wallets.is_contract(recipient) => Err(SignatureError::ContractRejected(recipient)),
        _ => Err(match recovered {
            Ok(actual) => SignatureError::SignerMismatch {
                expected: recipient,
                actual,
            },
            Err(e) => e,
        }),
    }
}
