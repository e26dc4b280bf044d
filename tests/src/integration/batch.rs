//! # Batch Registration
//!
//! Sponsored registration of many names in one call. Entries whose recipient
//! is already named, or whose name is taken, are skipped; any other failure
//! reverts the whole batch.

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use qc_18_name_registry::prelude::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn price() -> U256 {
        milli_units(10)
    }

    /// Namespace "crew" created by ALICE, plus three signers.
    struct Crew {
        f: Fixture,
        members: Vec<(k256::ecdsa::SigningKey, Address)>,
    }

    fn crew(is_private: bool) -> Crew {
        let f = Fixture::new();
        let fee = if is_private {
            milli_units(500)
        } else {
            milli_units(1000)
        };
        f.registry
            .create_namespace(CallContext::new(ALICE, fee), "crew", price(), is_private)
            .unwrap();
        Crew {
            f,
            members: (60..63).map(user).collect(),
        }
    }

    impl Crew {
        fn address(&self, i: usize) -> Address {
            self.members[i].1
        }

        /// Labels, recipients and fresh consents for `(label, member)` pairs.
        fn inputs(&self, entries: &[(&str, usize)]) -> (Vec<String>, Vec<Address>, Vec<Vec<u8>>) {
            let labels = entries.iter().map(|(l, _)| (*l).to_string()).collect();
            let recipients = entries.iter().map(|(_, i)| self.address(*i)).collect();
            let signatures = entries
                .iter()
                .map(|(l, i)| self.f.consent(&self.members[*i].0, l, "crew"))
                .collect();
            (labels, recipients, signatures)
        }

        fn batch(
            &self,
            ctx: CallContext,
            entries: &[(&str, usize)],
        ) -> Result<BatchOutcome, RegistryError> {
            let (labels, recipients, signatures) = self.inputs(entries);
            self.f.registry.batch_register_name_with_authorization(
                ctx,
                &labels,
                "crew",
                &recipients,
                &signatures,
            )
        }
    }

    // =============================================================================
    // PARTIAL SUCCESS
    // =============================================================================

    #[test]
    fn test_named_recipient_is_skipped_and_not_charged() {
        let c = crew(false);
        let sig = c.f.consent(&c.members[1].0, "early", "crew");
        c.f.registry
            .register_name_with_authorization(
                CallContext::new(ALICE, price()),
                "early",
                "crew",
                c.address(1),
                &sig,
            )
            .unwrap();
        let owner_before = c.f.registry.get_pending_fees(OWNER);

        let outcome = c
            .batch(
                CallContext::new(ALICE, Fixture::times(price(), 3)),
                &[("ann", 0), ("ben", 1), ("cat", 2)],
            )
            .unwrap();

        assert_eq!(outcome.success_count(), 2);
        assert_eq!(outcome.skipped_count(), 1);
        assert_eq!(outcome.charged, Fixture::times(price(), 2));
        assert_eq!(outcome.refunded, price());

        assert_eq!(c.f.registry.get_name(c.address(0)), "ann.crew");
        assert_eq!(c.f.registry.get_name(c.address(1)), "early.crew");
        assert_eq!(c.f.registry.get_name(c.address(2)), "cat.crew");

        // two 10% owner shares
        assert_eq!(
            c.f.registry.get_pending_fees(OWNER),
            owner_before + milli_units(2)
        );
        assert_eq!(c.f.events.by_topic(topics::NAME_REGISTERED).len(), 3);
        assert!(c.f.registry.check_invariants().is_valid());
    }

    #[test]
    fn test_private_batch_by_creator() {
        let c = crew(true);
        let outcome = c
            .batch(
                CallContext::new(ALICE, Fixture::times(price(), 3)),
                &[("ann", 0), ("ben", 1), ("cat", 2)],
            )
            .unwrap();

        assert_eq!(outcome.success_count(), 3);
        assert_eq!(outcome.refunded, U256::zero());
        // private split has no creator share
        assert_eq!(c.f.registry.get_pending_fees(ALICE), U256::zero());
        for i in 0..3 {
            assert_eq!(c.f.registry.get_nonce(c.address(i)), 1);
        }
    }

    #[test]
    fn test_non_creator_batch_after_window() {
        let c = crew(false);
        assert_eq!(
            c.batch(CallContext::new(BOB, price()), &[("ann", 0)]),
            Err(RegistryError::NotNamespaceCreatorExclusivity("crew".into()))
        );

        c.f.clock.advance(30 * DAY);
        let outcome = c
            .batch(CallContext::new(BOB, price()), &[("ann", 0)])
            .unwrap();
        assert_eq!(outcome.success_count(), 1);
        assert_eq!(c.f.ledger.burn_credits(BOB), milli_units(8));
    }

    #[test]
    fn test_mixed_signers_and_contract_wallets() {
        let c = crew(false);
        let vault = Address::new([0xCC; 20]);
        c.f.wallets.register_contract(vault);
        c.f.wallets
            .approve(vault, c.f.registry.registration_digest("vault", "crew", vault));

        let (mut labels, mut recipients, mut signatures) = c.inputs(&[("ann", 0)]);
        labels.push("vault".to_string());
        recipients.push(vault);
        signatures.push(b"approved".to_vec());

        let outcome = c
            .f
            .registry
            .batch_register_name_with_authorization(
                CallContext::new(ALICE, Fixture::times(price(), 2)),
                &labels,
                "crew",
                &recipients,
                &signatures,
            )
            .unwrap();
        assert_eq!(outcome.success_count(), 2);
        assert_eq!(c.f.registry.get_address_by_full_name("vault.crew"), vault);
    }

    // =============================================================================
    // FATAL FAILURES
    // =============================================================================

    #[test]
    fn test_burn_outage_reverts_batch() {
        let c = crew(false);
        c.f.ledger.set_burn_outage(Some("sink offline"));
        let events_before = c.f.events.len();

        let err = c
            .batch(
                CallContext::new(ALICE, Fixture::times(price(), 2)),
                &[("ann", 0), ("ben", 1)],
            )
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::BurnFailed {
                amount: milli_units(16),
                reason: "sink offline".into()
            }
        );
        assert_eq!(c.f.registry.get_name(c.address(0)), "");
        assert_eq!(c.f.events.len(), events_before);
        assert_eq!(c.f.registry.stats().batches_processed, 0);
    }

    #[test]
    fn test_reused_consent_reverts_batch() {
        let c = crew(false);
        let (labels, recipients, mut signatures) = c.inputs(&[("ann", 0), ("ben", 1)]);
        signatures.swap(0, 1);

        assert_eq!(
            c.f.registry.batch_register_name_with_authorization(
                CallContext::new(ALICE, Fixture::times(price(), 2)),
                &labels,
                "crew",
                &recipients,
                &signatures,
            ),
            Err(RegistryError::BadAuthorization(c.address(0)))
        );
        assert_eq!(c.f.registry.get_nonce(c.address(0)), 0);
    }

    #[test]
    fn test_partial_batch_refund_rejection() {
        let c = crew(false);
        c.f.ledger.set_rejecting(ALICE, true);

        assert_eq!(
            c.batch(
                CallContext::new(ALICE, Fixture::times(price(), 2)),
                &[("ann", 0)]
            ),
            Err(RegistryError::TransferFailed {
                to: ALICE,
                amount: price()
            })
        );

        // exact payment leaves nothing to refund
        c.batch(CallContext::new(ALICE, price()), &[("ann", 0)])
            .unwrap();
        assert_eq!(c.f.registry.get_name(c.address(0)), "ann.crew");
    }

    #[test]
    fn test_custom_batch_limit() {
        let f = Fixture::with_config(RegistryConfig {
            max_batch_size: 2,
            ..RegistryConfig::default()
        });
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(
            f.registry.batch_register_name_with_authorization(
                CallContext::new(OWNER, milli_units(3)),
                &labels,
                "x",
                &[ALICE, BOB, OWNER],
                &[vec![], vec![], vec![]],
            ),
            Err(RegistryError::BatchTooLarge { size: 3, max: 2 })
        );
    }
}
