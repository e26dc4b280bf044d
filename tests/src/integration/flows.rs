//! # Registry Flows
//!
//! End-to-end scenarios across namespace creation, registration, lookup and
//! fee claims.
//!
//! ```text
//! create_namespace ──► register_name / register_name_with_authorization
//!        │                           │
//!        ▼                           ▼
//!  burn + owner share       burn + creator share + owner share
//!        └──────────► pending fees ──► claim_fees
//! ```

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use qc_18_name_registry::prelude::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn public_fee() -> U256 {
        milli_units(1000)
    }

    fn name_price() -> U256 {
        milli_units(20)
    }

    /// ALICE creates public namespace "abc" by paying the fee.
    fn with_abc() -> Fixture {
        let f = Fixture::new();
        f.registry
            .create_namespace(CallContext::new(ALICE, public_fee()), "abc", name_price(), false)
            .unwrap();
        f
    }

    // =============================================================================
    // NAMESPACE SCENARIOS
    // =============================================================================

    #[test]
    fn test_owner_onboarding_creation_is_free() {
        let f = Fixture::new();
        f.registry
            .create_namespace(CallContext::unpaid(OWNER), "abc", milli_units(1), false)
            .unwrap();

        let ns = f.registry.get_namespace("abc").unwrap();
        assert_eq!(ns.creator, OWNER);
        assert!(!ns.is_private);
        assert!(f.ledger.history().is_empty());
    }

    #[test]
    fn test_paid_creation_splits_fee() {
        let f = with_abc();

        // 80% burnt with the payer credited, 20% to the owner, nothing to the creator
        assert_eq!(f.ledger.total_burnt(), milli_units(800));
        assert_eq!(f.ledger.burn_credits(ALICE), milli_units(800));
        assert_eq!(f.registry.get_pending_fees(OWNER), milli_units(200));
        assert_eq!(f.registry.get_pending_fees(ALICE), U256::zero());
    }

    #[test]
    fn test_second_creation_always_fails() {
        let f = with_abc();
        for ctx in [
            CallContext::unpaid(OWNER),
            CallContext::new(BOB, public_fee()),
            CallContext::new(ALICE, Fixture::times(public_fee(), 5)),
        ] {
            assert_eq!(
                f.registry.create_namespace(ctx, "abc", name_price(), false),
                Err(RegistryError::AlreadyExists("abc".into()))
            );
        }
        assert_eq!(
            f.registry.create_namespace_for(OWNER, "abc", name_price(), BOB, false),
            Err(RegistryError::AlreadyExists("abc".into()))
        );
    }

    #[test]
    fn test_namespace_event_payload() {
        let f = with_abc();
        let events = f.events.by_topic(topics::NAMESPACE_REGISTERED);
        // bare namespace at deploy, then "abc"
        assert_eq!(events.len(), 2);
        match &events[1] {
            RegistryEvent::NamespaceRegistered(p) => {
                assert_eq!(p.key, "abc");
                assert_eq!(p.creator, ALICE);
                assert_eq!(p.price, name_price());
                assert!(!p.is_private);
                assert_eq!(p.created_at, GENESIS);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    // =============================================================================
    // NAME SCENARIOS
    // =============================================================================

    #[test]
    fn test_forward_and_reverse_lookup_roundtrip() {
        let f = with_abc();
        f.registry
            .register_name(CallContext::new(ALICE, name_price()), "alice", "abc")
            .unwrap();

        assert_eq!(f.registry.get_address("alice", "abc"), ALICE);
        let rendered = f.registry.get_name(ALICE);
        assert_eq!(rendered, "alice.abc");
        assert_eq!(f.registry.get_address_by_full_name(&rendered), ALICE);
    }

    #[test]
    fn test_last_dot_wins() {
        let f = with_abc();
        assert_eq!(f.registry.get_address_by_full_name("foo.bar.baz"), Address::ZERO);
        assert_eq!(parse_full_name("foo.bar.baz", "x"), Some(("foo.bar", "baz")));
    }

    #[test]
    fn test_public_window_then_open_registration() {
        let f = with_abc();
        assert_eq!(
            f.registry
                .register_name(CallContext::new(BOB, name_price()), "bob", "abc"),
            Err(RegistryError::InExclusivityPeriod("abc".into()))
        );

        f.clock.advance(30 * DAY - 1);
        assert!(f.registry.is_in_exclusivity_period("abc").unwrap());
        f.clock.advance(1);
        assert!(!f.registry.is_in_exclusivity_period("abc").unwrap());

        f.registry
            .register_name(CallContext::new(BOB, name_price()), "bob", "abc")
            .unwrap();

        // 10% creator, 10% owner (on top of the owner's creation share)
        assert_eq!(f.registry.get_pending_fees(ALICE), milli_units(2));
        assert_eq!(f.registry.get_pending_fees(OWNER), milli_units(202));
        assert_eq!(f.ledger.burn_credits(BOB), milli_units(16));
    }

    #[test]
    fn test_private_namespace_sponsorship() {
        let f = Fixture::new();
        f.registry
            .create_namespace(CallContext::new(ALICE, milli_units(500)), "team", name_price(), true)
            .unwrap();
        let (key, member) = user(50);
        let sig = f.consent(&key, "member", "team");

        // non-creator rejected inside and long after any window
        for _ in 0..2 {
            assert_eq!(
                f.registry.register_name_with_authorization(
                    CallContext::new(BOB, name_price()),
                    "member",
                    "team",
                    member,
                    &sig
                ),
                Err(RegistryError::NotNamespaceCreatorPrivate("team".into()))
            );
            f.clock.advance(400 * DAY);
        }

        // self-service is never allowed
        assert_eq!(
            f.registry
                .register_name(CallContext::new(ALICE, name_price()), "alice", "team"),
            Err(RegistryError::PrivateNamespace("team".into()))
        );

        f.registry
            .register_name_with_authorization(
                CallContext::new(ALICE, name_price()),
                "member",
                "team",
                member,
                &sig,
            )
            .unwrap();
        assert_eq!(f.registry.get_name(member), "member.team");
        // sponsor, not recipient, receives the burn credit
        assert_eq!(f.ledger.burn_credits(member), U256::zero());
    }

    #[test]
    fn test_contract_wallet_consent() {
        let f = with_abc();
        let vault = Address::new([0xCC; 20]);
        f.wallets.register_contract(vault);

        assert!(!f.registry.is_valid_signature("vault", "abc", vault, b"sig"));
        let digest = f.registry.registration_digest("vault", "abc", vault);
        f.wallets.approve(vault, digest);
        assert!(f.registry.is_valid_signature("vault", "abc", vault, b"sig"));

        let path = f
            .registry
            .register_name_with_authorization(
                CallContext::new(ALICE, name_price()),
                "vault",
                "abc",
                vault,
                b"sig",
            )
            .unwrap();
        assert_eq!(path, AuthorizationPath::ContractWallet);
    }

    #[test]
    fn test_signatures_bound_to_registry_domain() {
        let f = with_abc();
        let other = Fixture::with_config(RegistryConfig {
            chain_id: 10,
            ..RegistryConfig::default()
        });
        let (key, carol) = user(51);
        let foreign = other.consent(&key, "carol", "abc");

        assert_eq!(
            f.registry.register_name_with_authorization(
                CallContext::new(ALICE, name_price()),
                "carol",
                "abc",
                carol,
                &foreign
            ),
            Err(RegistryError::BadAuthorization(carol))
        );
    }

    // =============================================================================
    // FEE CLAIMS
    // =============================================================================

    #[test]
    fn test_claim_after_rejected_transfer() {
        let f = with_abc();
        f.ledger.set_rejecting(OWNER, true);
        assert!(matches!(
            f.registry.claim_fees_to_self(OWNER),
            Err(RegistryError::TransferFailed { .. })
        ));
        assert_eq!(f.registry.get_pending_fees(OWNER), milli_units(200));

        f.ledger.set_rejecting(OWNER, false);
        assert_eq!(f.registry.claim_fees_to_self(OWNER), Ok(milli_units(200)));
        assert_eq!(f.ledger.fee_claims(OWNER), milli_units(200));
        assert_eq!(f.registry.stats().total_fees_claimed, milli_units(200));
    }

    #[test]
    fn test_new_owner_collects_owner_share() {
        let f = Fixture::new();
        f.registry.transfer_ownership(OWNER, BOB).unwrap();
        f.registry.accept_ownership(BOB).unwrap();

        f.registry
            .create_namespace(CallContext::new(ALICE, public_fee()), "abc", name_price(), false)
            .unwrap();
        assert_eq!(f.registry.claim_fees(BOB, BOB), Ok(milli_units(200)));

        // onboarding waiver follows the owner role too
        f.registry
            .create_namespace(CallContext::unpaid(BOB), "def", name_price(), false)
            .unwrap();
        assert_eq!(
            f.registry
                .create_namespace(CallContext::unpaid(OWNER), "ghi", name_price(), false),
            Err(RegistryError::InsufficientFee {
                required: public_fee(),
                sent: U256::zero()
            })
        );
    }

    #[test]
    fn test_invariants_hold_through_a_session() {
        let f = with_abc();
        f.registry
            .register_name(CallContext::new(ALICE, name_price()), "alice", "abc")
            .unwrap();
        f.clock.advance(31 * DAY);
        f.registry
            .register_name(CallContext::new(BOB, milli_units(25)), "bob", "abc")
            .unwrap();
        f.registry.claim_fees_to_self(ALICE).unwrap();

        assert!(f.registry.check_invariants().is_valid());
        let stats = f.registry.stats();
        assert_eq!(stats.names, 2);
        assert_eq!(stats.total_refunded, milli_units(5));
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    mod properties {
        use super::super::super::fixtures::*;
        use proptest::prelude::*;
        use qc_18_name_registry::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn prop_registered_name_resolves_both_ways(
                label in "[a-z0-9]{1,8}(-[a-z0-9]{1,8})?",
                seed in 1u8..200,
            ) {
                let f = Fixture::new();
                let (_, account) = user(seed);
                f.clock.advance(30 * DAY);
                f.registry
                    .register_name(CallContext::new(account, milli_units(1)), &label, "x")
                    .unwrap();

                let rendered = f.registry.get_name(account);
                prop_assert_eq!(&rendered, &label);
                prop_assert_eq!(f.registry.get_address_by_full_name(&rendered), account);
                prop_assert_eq!(
                    f.registry.get_address_by_full_name(&format!("{label}.x")),
                    account
                );
                prop_assert!(f.registry.check_invariants().is_valid());
            }
        }
    }
}
