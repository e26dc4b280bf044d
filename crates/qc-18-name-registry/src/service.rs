//! # Name Registry Service
//!
//! Wires the domain engines to the outbound ports and implements
//! [`NameRegistryApi`].
//!
//! ## Call Lifecycle
//!
//! ```text
//! lock ─► checks ─► stage changes + payouts ─► ledger.execute(payouts)
//!                                                 │ ok            │ err
//!                                                 ▼               ▼
//!                                     commit journal, publish   drop journal
//! ```
//!
//! Every mutating call holds the registry lock from its first check to its
//! commit, so cross-cutting checks (one name per owner, unique names) are
//! never checked-then-acted on separately.

use crate::config::{RegistryConfig, RESERVED_KEY};
use crate::domain::authorization::{authorize, AuthorizationPath, SigningDomain};
use crate::domain::entities::{
    BatchOutcome, EntryOutcome, NameKey, Namespace, Payout, SkipReason, TransferReason,
};
use crate::domain::fees::{settle, FeeContext};
use crate::domain::invariants::{check_all_invariants, InvariantCheckResult};
use crate::domain::names::{parse_full_name, render_name};
use crate::domain::state::{Journal, RegistryState};
use crate::domain::validation::{check_price, is_valid_label_or_namespace, PriceRule};
use crate::domain::value_objects::{Address, CallContext, Hash, Timestamp, U256};
use crate::errors::{ConfigError, RegistryError, TransferError};
use crate::events::{FeesClaimedPayload, OwnershipPayload, RegistryEvent};
use crate::ports::inbound::NameRegistryApi;
use crate::ports::outbound::{ContractWallets, EventSink, TimeSource, ValueLedger};

use crate::adapters::{EventLog, InMemoryContractWallets, InMemoryLedger, ManualTimeSource};

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Registry wired to the in-memory adapters.
pub type InMemoryRegistry =
    NameRegistryService<InMemoryLedger, InMemoryContractWallets, ManualTimeSource, EventLog>;

/// Registry statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    /// Namespaces in the store (including the bare namespace).
    pub namespaces: usize,
    /// Names in the store.
    pub names: usize,
    /// Batch calls that committed.
    pub batches_processed: u64,
    /// Entries skipped by committed batches.
    pub batch_entries_skipped: u64,
    /// Value forwarded to the burn sink.
    pub total_burnt: U256,
    /// Value refunded to callers.
    pub total_refunded: U256,
    /// Value paid out by fee claims.
    pub total_fees_claimed: U256,
}

struct Inner {
    state: RegistryState,
    stats: RegistryStats,
}

/// How a rejected transfer is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RejectedAs {
    Refund,
    Transfer,
}

/// The name registry.
pub struct NameRegistryService<L, W, T, E>
where
    L: ValueLedger,
    W: ContractWallets,
    T: TimeSource,
    E: EventSink,
{
    config: RegistryConfig,
    signing_domain: SigningDomain,
    ledger: Arc<L>,
    wallets: Arc<W>,
    clock: Arc<T>,
    events: Arc<E>,
    inner: Mutex<Inner>,
}

impl<L, W, T, E> NameRegistryService<L, W, T, E>
where
    L: ValueLedger,
    W: ContractWallets,
    T: TimeSource,
    E: EventSink,
{
    /// Deploys a registry owned by `owner` at the clock's current time and
    /// creates the bare-name namespace.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is inconsistent.
    pub fn new(
        config: RegistryConfig,
        owner: Address,
        ledger: Arc<L>,
        wallets: Arc<W>,
        clock: Arc<T>,
        events: Arc<E>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let deployed_at = clock.now();
        let mut state = RegistryState::new(owner, deployed_at);

        let bare = Namespace {
            key: config.bare_namespace_key.clone(),
            price_per_name: config.bare_name_price,
            creator: owner,
            created_at: deployed_at,
            is_private: false,
        };
        let mut journal = Journal::new();
        journal.stage_namespace(bare);
        for change in state.commit(journal) {
            if let Some(event) = RegistryEvent::from_change(&change) {
                events.publish(event);
            }
        }

        info!(
            owner = %owner,
            deployed_at,
            bare_namespace = %config.bare_namespace_key,
            "Name registry deployed"
        );

        Ok(Self {
            signing_domain: SigningDomain::from_config(&config),
            config,
            ledger,
            wallets,
            clock,
            events,
            inner: Mutex::new(Inner {
                state,
                stats: RegistryStats::default(),
            }),
        })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Deployment timestamp.
    #[must_use]
    pub fn deployed_at(&self) -> Timestamp {
        self.inner.lock().state.deployed_at()
    }

    /// Signing-domain separator.
    #[must_use]
    pub fn domain_separator(&self) -> Hash {
        self.signing_domain.separator()
    }

    /// Current statistics.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let inner = self.inner.lock();
        RegistryStats {
            namespaces: inner.state.namespace_count(),
            names: inner.state.name_count(),
            ..inner.stats.clone()
        }
    }

    /// Checks store invariants.
    #[must_use]
    pub fn check_invariants(&self) -> InvariantCheckResult {
        check_all_invariants(&self.inner.lock().state)
    }

    // =========================================================================
    // INTERNAL HELPERS
    // =========================================================================

    fn in_onboarding(&self, state: &RegistryState, now: Timestamp) -> bool {
        now < state
            .deployed_at()
            .saturating_add(self.config.onboarding_period_secs)
    }

    fn check_namespace_params(
        &self,
        state: &RegistryState,
        key: &str,
        price_per_name: U256,
        is_private: bool,
    ) -> Result<(), RegistryError> {
        if !is_valid_label_or_namespace(key) {
            return Err(RegistryError::InvalidKey(key.to_string()));
        }
        if key == RESERVED_KEY {
            return Err(RegistryError::ReservedKey(key.to_string()));
        }
        let minimum = self.config.min_price(is_private);
        let step = self.config.price_step;
        check_price(price_per_name, minimum, step).map_err(|rule| match rule {
            PriceRule::BelowMinimum => RegistryError::PriceTooLow {
                price: price_per_name,
                minimum,
            },
            PriceRule::NotStepMultiple => RegistryError::PriceNotStepMultiple {
                price: price_per_name,
                step,
            },
        })?;
        if state.namespace(key).is_some() {
            return Err(RegistryError::AlreadyExists(key.to_string()));
        }
        Ok(())
    }

    /// Who may sponsor names in `namespace` right now.
    fn check_sponsor_access(
        &self,
        namespace: &Namespace,
        caller: Address,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        if caller == namespace.creator {
            return Ok(());
        }
        if namespace.is_private {
            return Err(RegistryError::NotNamespaceCreatorPrivate(
                namespace.key.clone(),
            ));
        }
        if namespace.in_exclusivity_period(now, self.config.exclusivity_period_secs) {
            return Err(RegistryError::NotNamespaceCreatorExclusivity(
                namespace.key.clone(),
            ));
        }
        Ok(())
    }

    fn digest_for(&self, state: &RegistryState, name: &NameKey, recipient: Address) -> Hash {
        self.signing_domain.registration_digest(
            &name.label,
            &name.namespace,
            recipient,
            state.nonce(recipient),
        )
    }

    fn authorize_recipient(
        &self,
        state: &RegistryState,
        name: &NameKey,
        recipient: Address,
        signature: &[u8],
    ) -> Result<AuthorizationPath, RegistryError> {
        let digest = self.digest_for(state, name, recipient);
        authorize(self.wallets.as_ref(), &digest, recipient, signature).map_err(|e| {
            debug!(recipient = %recipient, error = %e, "Authorization rejected");
            RegistryError::BadAuthorization(recipient)
        })
    }

    /// Executes the journal's payouts and commits it if they all succeed.
    fn commit(
        &self,
        inner: &mut Inner,
        journal: Journal,
        rejected_as: RejectedAs,
    ) -> Result<(), RegistryError> {
        if let Err(err) = self.ledger.execute(journal.payouts()) {
            let mapped = map_transfer_error(err, journal.payouts(), rejected_as);
            warn!(error = %mapped, "Payouts failed, call reverted");
            return Err(mapped);
        }

        for payout in journal.payouts() {
            let stats = &mut inner.stats;
            match payout {
                Payout::Burn { amount, .. } => {
                    stats.total_burnt = stats.total_burnt.saturating_add(*amount);
                }
                Payout::Transfer {
                    amount,
                    reason: TransferReason::Refund,
                    ..
                } => {
                    stats.total_refunded = stats.total_refunded.saturating_add(*amount);
                }
                Payout::Transfer {
                    amount,
                    reason: TransferReason::FeeClaim,
                    ..
                } => {
                    stats.total_fees_claimed = stats.total_fees_claimed.saturating_add(*amount);
                }
            }
        }

        for change in inner.state.commit(journal) {
            if let Some(event) = RegistryEvent::from_change(&change) {
                self.events.publish(event);
            }
        }
        Ok(())
    }

    fn do_claim(&self, caller: Address, recipient: Address) -> Result<U256, RegistryError> {
        let mut inner = self.inner.lock();

        let amount = inner.state.pending_fees(caller);
        if amount.is_zero() {
            return Err(RegistryError::NoFeesToClaim);
        }
        if recipient.is_zero() {
            return Err(RegistryError::ZeroRecipient);
        }

        let mut journal = Journal::new();
        journal.push_payout(Payout::Transfer {
            to: recipient,
            amount,
            reason: TransferReason::FeeClaim,
        });
        self.commit(&mut inner, journal, RejectedAs::Transfer)?;
        inner.state.clear_pending_fees(caller);

        info!(claimant = %caller, recipient = %recipient, amount = %amount, "Fees claimed");
        self.events
            .publish(RegistryEvent::FeesClaimed(FeesClaimedPayload {
                claimant: caller,
                recipient,
                amount,
            }));
        Ok(amount)
    }
}

/// Stages one payment's burn payout and pending-fee credits.
fn stage_settlement(
    state: &RegistryState,
    journal: &mut Journal,
    total: U256,
    context: FeeContext,
    payer: Address,
    creator: Address,
) -> Result<(), RegistryError> {
    let settlement = settle(total, context, payer, creator, state.ownership.owner);
    debug!(
        ?context,
        total = %total,
        burn = %settlement.split.burn,
        creator_share = %settlement.split.creator,
        owner_share = %settlement.split.owner,
        "Fee settled"
    );

    if let Some(burn) = settlement.burn {
        journal.push_payout(burn);
    }
    for (account, amount) in settlement.credits {
        journal.stage_credit(state, account, amount)?;
    }
    Ok(())
}

fn map_transfer_error(err: TransferError, payouts: &[Payout], rejected_as: RejectedAs) -> RegistryError {
    match err {
        TransferError::Rejected { to, amount } => match rejected_as {
            RejectedAs::Refund => RegistryError::RefundFailed { to, amount },
            RejectedAs::Transfer => RegistryError::TransferFailed { to, amount },
        },
        TransferError::BurnUnavailable(reason) => RegistryError::BurnFailed {
            amount: payouts
                .iter()
                .filter(|p| matches!(p, Payout::Burn { .. }))
                .fold(U256::zero(), |acc, p| acc.saturating_add(p.amount())),
            reason,
        },
        TransferError::Overflow => RegistryError::ArithmeticOverflow,
    }
}

impl<L, W, T, E> NameRegistryApi for NameRegistryService<L, W, T, E>
where
    L: ValueLedger,
    W: ContractWallets,
    T: TimeSource,
    E: EventSink,
{
    // =========================================================================
    // NAMESPACES
    // =========================================================================

    #[instrument(skip(self, ctx), fields(caller = %ctx.caller, value = %ctx.value))]
    fn create_namespace(
        &self,
        ctx: CallContext,
        key: &str,
        price_per_name: U256,
        is_private: bool,
    ) -> Result<(), RegistryError> {
        let mut inner = self.inner.lock();
        let now = self.clock.now();
        self.check_namespace_params(&inner.state, key, price_per_name, is_private)?;

        let mut journal = Journal::new();
        let fee_waived =
            ctx.caller == inner.state.ownership.owner && self.in_onboarding(&inner.state, now);

        let retained = if fee_waived {
            journal.push_payout(Payout::Transfer {
                to: ctx.caller,
                amount: ctx.value,
                reason: TransferReason::Refund,
            });
            U256::zero()
        } else {
            let fee = self.config.namespace_fee(is_private);
            if ctx.value < fee {
                return Err(RegistryError::InsufficientFee {
                    required: fee,
                    sent: ctx.value,
                });
            }
            stage_settlement(
                &inner.state,
                &mut journal,
                fee,
                FeeContext::NamespaceCreation,
                ctx.caller,
                ctx.caller,
            )?;
            journal.push_payout(Payout::Transfer {
                to: ctx.caller,
                amount: ctx.value - fee,
                reason: TransferReason::Refund,
            });
            fee
        };

        journal.stage_namespace(Namespace {
            key: key.to_string(),
            price_per_name,
            creator: ctx.caller,
            created_at: now,
            is_private,
        });
        self.commit(&mut inner, journal, RejectedAs::Refund)?;

        info!(
            key,
            creator = %ctx.caller,
            price = %price_per_name,
            is_private,
            fee = %retained,
            "Namespace created"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    fn create_namespace_for(
        &self,
        caller: Address,
        key: &str,
        price_per_name: U256,
        creator: Address,
        is_private: bool,
    ) -> Result<(), RegistryError> {
        let mut inner = self.inner.lock();
        let now = self.clock.now();

        if caller != inner.state.ownership.owner {
            return Err(RegistryError::NotOwner(caller));
        }
        if !self.in_onboarding(&inner.state, now) {
            return Err(RegistryError::OnboardingOver);
        }
        if creator.is_zero() {
            return Err(RegistryError::ZeroCreator);
        }
        self.check_namespace_params(&inner.state, key, price_per_name, is_private)?;

        let mut journal = Journal::new();
        journal.stage_namespace(Namespace {
            key: key.to_string(),
            price_per_name,
            creator,
            created_at: now,
            is_private,
        });
        self.commit(&mut inner, journal, RejectedAs::Transfer)?;

        info!(key, creator = %creator, is_private, "Namespace created on behalf of creator");
        Ok(())
    }

    fn get_namespace(&self, key: &str) -> Result<Namespace, RegistryError> {
        self.inner
            .lock()
            .state
            .namespace(key)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(key.to_string()))
    }

    fn get_namespace_price(&self, key: &str) -> Result<U256, RegistryError> {
        self.get_namespace(key).map(|ns| ns.price_per_name)
    }

    fn is_in_exclusivity_period(&self, key: &str) -> Result<bool, RegistryError> {
        let namespace = self.get_namespace(key)?;
        Ok(namespace.in_exclusivity_period(self.clock.now(), self.config.exclusivity_period_secs))
    }

    // =========================================================================
    // NAMES
    // =========================================================================

    #[instrument(skip(self, ctx), fields(caller = %ctx.caller, value = %ctx.value))]
    fn register_name(
        &self,
        ctx: CallContext,
        label: &str,
        namespace: &str,
    ) -> Result<NameKey, RegistryError> {
        let mut inner = self.inner.lock();
        let now = self.clock.now();

        if !is_valid_label_or_namespace(label) {
            return Err(RegistryError::InvalidLabel(label.to_string()));
        }
        let ns = inner
            .state
            .namespace(namespace)
            .cloned()
            .ok_or_else(|| RegistryError::NamespaceNotFound(namespace.to_string()))?;
        if ns.is_private {
            return Err(RegistryError::PrivateNamespace(ns.key));
        }
        if ctx.value < ns.price_per_name {
            return Err(RegistryError::InsufficientPayment {
                required: ns.price_per_name,
                sent: ctx.value,
            });
        }
        if ctx.caller != ns.creator
            && ns.in_exclusivity_period(now, self.config.exclusivity_period_secs)
        {
            return Err(RegistryError::InExclusivityPeriod(ns.key));
        }

        let name = NameKey::new(label, namespace);
        let mut journal = Journal::new();
        if journal.has_name(&inner.state, ctx.caller) {
            return Err(RegistryError::AlreadyHasName(ctx.caller));
        }
        if journal.is_name_taken(&inner.state, &name) {
            return Err(RegistryError::NameAlreadyRegistered {
                label: name.label,
                namespace: name.namespace,
            });
        }

        stage_settlement(
            &inner.state,
            &mut journal,
            ns.price_per_name,
            FeeContext::for_name(ns.is_private),
            ctx.caller,
            ns.creator,
        )?;
        journal.push_payout(Payout::Transfer {
            to: ctx.caller,
            amount: ctx.value - ns.price_per_name,
            reason: TransferReason::Refund,
        });
        journal.stage_name(name.clone(), ctx.caller);
        self.commit(&mut inner, journal, RejectedAs::Refund)?;

        info!(name = %name, owner = %ctx.caller, "Name registered");
        Ok(name)
    }

    #[instrument(skip(self, ctx, signature), fields(caller = %ctx.caller, value = %ctx.value))]
    fn register_name_with_authorization(
        &self,
        ctx: CallContext,
        label: &str,
        namespace: &str,
        recipient: Address,
        signature: &[u8],
    ) -> Result<AuthorizationPath, RegistryError> {
        let mut inner = self.inner.lock();
        let now = self.clock.now();

        if !is_valid_label_or_namespace(label) {
            return Err(RegistryError::InvalidLabel(label.to_string()));
        }
        let ns = inner
            .state
            .namespace(namespace)
            .cloned()
            .ok_or_else(|| RegistryError::NamespaceNotFound(namespace.to_string()))?;
        self.check_sponsor_access(&ns, ctx.caller, now)?;
        if ctx.value < ns.price_per_name {
            return Err(RegistryError::InsufficientPayment {
                required: ns.price_per_name,
                sent: ctx.value,
            });
        }

        let name = NameKey::new(label, namespace);
        let mut journal = Journal::new();
        if journal.has_name(&inner.state, recipient) {
            return Err(RegistryError::AlreadyHasName(recipient));
        }
        if journal.is_name_taken(&inner.state, &name) {
            return Err(RegistryError::NameAlreadyRegistered {
                label: name.label,
                namespace: name.namespace,
            });
        }
        let path = self.authorize_recipient(&inner.state, &name, recipient, signature)?;

        stage_settlement(
            &inner.state,
            &mut journal,
            ns.price_per_name,
            FeeContext::for_name(ns.is_private),
            ctx.caller,
            ns.creator,
        )?;
        journal.push_payout(Payout::Transfer {
            to: ctx.caller,
            amount: ctx.value - ns.price_per_name,
            reason: TransferReason::Refund,
        });
        journal.stage_name(name.clone(), recipient);
        self.commit(&mut inner, journal, RejectedAs::Refund)?;

        info!(name = %name, owner = %recipient, sponsor = %ctx.caller, ?path, "Name registered");
        Ok(path)
    }

    #[instrument(
        skip(self, ctx, labels, recipients, signatures),
        fields(caller = %ctx.caller, value = %ctx.value, entries = labels.len())
    )]
    fn batch_register_name_with_authorization(
        &self,
        ctx: CallContext,
        labels: &[String],
        namespace: &str,
        recipients: &[Address],
        signatures: &[Vec<u8>],
    ) -> Result<BatchOutcome, RegistryError> {
        if labels.len() != recipients.len() || labels.len() != signatures.len() {
            return Err(RegistryError::LengthMismatch {
                labels: labels.len(),
                recipients: recipients.len(),
                signatures: signatures.len(),
            });
        }
        if labels.is_empty() {
            return Err(RegistryError::EmptyArray);
        }
        if labels.len() > self.config.max_batch_size {
            return Err(RegistryError::BatchTooLarge {
                size: labels.len(),
                max: self.config.max_batch_size,
            });
        }

        let mut inner = self.inner.lock();
        let now = self.clock.now();

        let ns = inner
            .state
            .namespace(namespace)
            .cloned()
            .ok_or_else(|| RegistryError::NamespaceNotFound(namespace.to_string()))?;
        self.check_sponsor_access(&ns, ctx.caller, now)?;

        let context = FeeContext::for_name(ns.is_private);
        let mut journal = Journal::new();
        let mut entries = Vec::with_capacity(labels.len());

        for ((label, recipient), signature) in labels.iter().zip(recipients).zip(signatures) {
            let name = NameKey::new(label.as_str(), namespace);

            if journal.has_name(&inner.state, *recipient) {
                debug!(recipient = %recipient, "Batch entry skipped: recipient already named");
                entries.push(EntryOutcome::Skipped(SkipReason::RecipientHasName));
                continue;
            }
            if journal.is_name_taken(&inner.state, &name) {
                debug!(name = %name, "Batch entry skipped: name taken");
                entries.push(EntryOutcome::Skipped(SkipReason::NameTaken));
                continue;
            }

            if !is_valid_label_or_namespace(label) {
                return Err(RegistryError::InvalidLabel(label.clone()));
            }
            self.authorize_recipient(&inner.state, &name, *recipient, signature)?;

            stage_settlement(
                &inner.state,
                &mut journal,
                ns.price_per_name,
                context,
                ctx.caller,
                ns.creator,
            )?;
            journal.stage_name(name.clone(), *recipient);
            entries.push(EntryOutcome::Committed(name));
        }

        let outcome_counts = BatchOutcome {
            entries,
            charged: U256::zero(),
            refunded: U256::zero(),
        };
        let success_count = outcome_counts.success_count();
        let charged = ns
            .price_per_name
            .checked_mul(U256::from(success_count))
            .ok_or(RegistryError::ArithmeticOverflow)?;
        if ctx.value < charged {
            return Err(RegistryError::InsufficientPayment {
                required: charged,
                sent: ctx.value,
            });
        }
        let refunded = ctx.value - charged;
        journal.push_payout(Payout::Transfer {
            to: ctx.caller,
            amount: refunded,
            reason: TransferReason::Refund,
        });

        let rejected_as = if success_count == 0 {
            RejectedAs::Refund
        } else {
            RejectedAs::Transfer
        };
        self.commit(&mut inner, journal, rejected_as)?;

        let outcome = BatchOutcome {
            charged,
            refunded,
            ..outcome_counts
        };
        inner.stats.batches_processed += 1;
        inner.stats.batch_entries_skipped += outcome.skipped_count() as u64;

        info!(
            namespace,
            committed = success_count,
            skipped = outcome.skipped_count(),
            charged = %charged,
            "Batch registration committed"
        );
        Ok(outcome)
    }

    fn get_address(&self, label: &str, namespace: &str) -> Address {
        self.inner
            .lock()
            .state
            .owner_of(&NameKey::new(label, namespace))
            .unwrap_or(Address::ZERO)
    }

    fn get_address_by_full_name(&self, full_name: &str) -> Address {
        match parse_full_name(full_name, &self.config.bare_namespace_key) {
            Some((label, namespace)) => self.get_address(label, namespace),
            None => Address::ZERO,
        }
    }

    fn get_name(&self, owner: Address) -> String {
        self.inner
            .lock()
            .state
            .name_of(owner)
            .map(|name| render_name(name, &self.config.bare_namespace_key))
            .unwrap_or_default()
    }

    fn is_valid_signature(
        &self,
        label: &str,
        namespace: &str,
        recipient: Address,
        signature: &[u8],
    ) -> bool {
        let inner = self.inner.lock();
        let digest = self.digest_for(&inner.state, &NameKey::new(label, namespace), recipient);
        authorize(self.wallets.as_ref(), &digest, recipient, signature).is_ok()
    }

    fn registration_digest(&self, label: &str, namespace: &str, recipient: Address) -> Hash {
        let inner = self.inner.lock();
        self.digest_for(&inner.state, &NameKey::new(label, namespace), recipient)
    }

    fn get_nonce(&self, account: Address) -> u64 {
        self.inner.lock().state.nonce(account)
    }

    fn is_valid_label_or_namespace(&self, s: &str) -> bool {
        is_valid_label_or_namespace(s)
    }

    // =========================================================================
    // FEES
    // =========================================================================

    fn get_pending_fees(&self, account: Address) -> U256 {
        self.inner.lock().state.pending_fees(account)
    }

    #[instrument(skip(self))]
    fn claim_fees(&self, caller: Address, recipient: Address) -> Result<U256, RegistryError> {
        self.do_claim(caller, recipient)
    }

    #[instrument(skip(self))]
    fn claim_fees_to_self(&self, caller: Address) -> Result<U256, RegistryError> {
        self.do_claim(caller, caller)
    }

    // =========================================================================
    // OWNERSHIP
    // =========================================================================

    fn owner(&self) -> Address {
        self.inner.lock().state.ownership.owner
    }

    fn pending_owner(&self) -> Option<Address> {
        self.inner.lock().state.ownership.pending_owner
    }

    #[instrument(skip(self))]
    fn transfer_ownership(&self, caller: Address, new_owner: Address) -> Result<(), RegistryError> {
        let mut inner = self.inner.lock();
        let ownership = &mut inner.state.ownership;
        if caller != ownership.owner {
            return Err(RegistryError::NotOwner(caller));
        }

        ownership.pending_owner = (!new_owner.is_zero()).then_some(new_owner);
        info!(owner = %caller, pending = %new_owner, "Ownership transfer started");
        self.events
            .publish(RegistryEvent::OwnershipTransferStarted(OwnershipPayload {
                previous_owner: caller,
                new_owner,
            }));
        Ok(())
    }

    #[instrument(skip(self))]
    fn accept_ownership(&self, caller: Address) -> Result<(), RegistryError> {
        let mut inner = self.inner.lock();
        let ownership = &mut inner.state.ownership;
        if ownership.pending_owner != Some(caller) {
            return Err(RegistryError::NotPendingOwner(caller));
        }

        let previous_owner = ownership.owner;
        ownership.owner = caller;
        ownership.pending_owner = None;
        info!(previous = %previous_owner, owner = %caller, "Ownership transferred");
        self.events
            .publish(RegistryEvent::OwnershipTransferred(OwnershipPayload {
                previous_owner,
                new_owner: caller,
            }));
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
