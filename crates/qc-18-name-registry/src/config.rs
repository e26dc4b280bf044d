//! Registry configuration.
//!
//! Every economic and timing constant lives here so deployments can tune
//! them without touching the registry logic.

use crate::domain::validation::is_valid_label_or_namespace;
use crate::domain::value_objects::{milli_units, Address, U256};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

/// Seconds in one day.
pub const DAY_SECS: u64 = 24 * 60 * 60;

/// Namespace key that can never be registered.
pub const RESERVED_KEY: &str = "eth";

/// Maximum length of labels and namespace keys.
pub const MAX_LABEL_LEN: usize = 20;

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Every price per name must be a multiple of this step.
    pub price_step: U256,

    /// Minimum price per name for public namespaces.
    pub min_public_price: U256,

    /// Minimum price per name for private namespaces.
    pub min_private_price: U256,

    /// Fee to create a public namespace.
    pub public_namespace_fee: U256,

    /// Fee to create a private namespace.
    pub private_namespace_fee: U256,

    /// Key of the reserved namespace backing bare names.
    pub bare_namespace_key: String,

    /// Price per bare name.
    pub bare_name_price: U256,

    /// Creator-only window after namespace creation.
    pub exclusivity_period_secs: u64,

    /// Fee-free window for the owner after deployment.
    pub onboarding_period_secs: u64,

    /// Maximum entries in one batch registration.
    pub max_batch_size: usize,

    /// Chain identifier bound into registration signatures.
    pub chain_id: u64,

    /// Registry address bound into registration signatures.
    pub registry_address: Address,

    /// Signing domain name.
    pub domain_name: String,

    /// Signing domain version.
    pub domain_version: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            price_step: milli_units(1),
            min_public_price: milli_units(1),
            min_private_price: milli_units(5),
            public_namespace_fee: milli_units(1_000),
            private_namespace_fee: milli_units(500),
            bare_namespace_key: "x".to_string(),
            bare_name_price: milli_units(1),
            exclusivity_period_secs: 30 * DAY_SECS,
            onboarding_period_secs: 365 * DAY_SECS,
            max_batch_size: 100,
            chain_id: 1,
            registry_address: Address::ZERO,
            domain_name: "NameRegistry".to_string(),
            domain_version: "1".to_string(),
        }
    }
}

impl RegistryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_REGISTRY_CHAIN_ID`: Chain ID for signatures (default: 1)
    /// - `QC_REGISTRY_ADDRESS`: Registry address for signatures (default: zero)
    /// - `QC_REGISTRY_EXCLUSIVITY_SECS`: Exclusivity period (default: 30 days)
    /// - `QC_REGISTRY_ONBOARDING_SECS`: Onboarding period (default: 365 days)
    /// - `QC_REGISTRY_MAX_BATCH`: Maximum batch size (default: 100)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            chain_id: env_parse("QC_REGISTRY_CHAIN_ID").unwrap_or(defaults.chain_id),
            registry_address: env_parse("QC_REGISTRY_ADDRESS")
                .unwrap_or(defaults.registry_address),
            exclusivity_period_secs: env_parse("QC_REGISTRY_EXCLUSIVITY_SECS")
                .unwrap_or(defaults.exclusivity_period_secs),
            onboarding_period_secs: env_parse("QC_REGISTRY_ONBOARDING_SECS")
                .unwrap_or(defaults.onboarding_period_secs),
            max_batch_size: env_parse("QC_REGISTRY_MAX_BATCH").unwrap_or(defaults.max_batch_size),
            ..defaults
        }
    }

    /// Minimum price per name for a namespace kind.
    #[must_use]
    pub fn min_price(&self, is_private: bool) -> U256 {
        if is_private {
            self.min_private_price
        } else {
            self.min_public_price
        }
    }

    /// Namespace creation fee for a namespace kind.
    #[must_use]
    pub fn namespace_fee(&self, is_private: bool) -> U256 {
        if is_private {
            self.private_namespace_fee
        } else {
            self.public_namespace_fee
        }
    }

    /// Checks internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first broken rule: a zero price step,
    /// a minimum or bare name price off the step, a private minimum below the
    /// public one, a public fee not above the private fee, an invalid or
    /// reserved bare key, or a zero batch limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.price_step.is_zero() {
            return Err(ConfigError::ZeroPriceStep);
        }

        for (field, value) in [
            ("min_public_price", self.min_public_price),
            ("min_private_price", self.min_private_price),
            ("bare_name_price", self.bare_name_price),
        ] {
            if value % self.price_step != U256::zero() {
                return Err(ConfigError::NotStepMultiple { field, value });
            }
        }

        if self.min_private_price < self.min_public_price {
            return Err(ConfigError::PrivateMinimumTooLow);
        }
        if self.public_namespace_fee <= self.private_namespace_fee {
            return Err(ConfigError::FeeOrdering);
        }
        if !is_valid_label_or_namespace(&self.bare_namespace_key)
            || self.bare_namespace_key == RESERVED_KEY
        {
            return Err(ConfigError::InvalidBareKey(self.bare_namespace_key.clone()));
        }
        if self.max_batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }

        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
