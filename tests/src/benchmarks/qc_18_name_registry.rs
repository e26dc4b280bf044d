//! # QC-18 Name Registry Benchmarks
//!
//! Measured paths:
//! - Fee split for every fee context
//! - Full-name parsing, including multi-dot names
//! - Typed-data digest plus signature recovery
//! - Self-service and batch registration through the service lock

use crate::integration::fixtures::{user, Fixture, ALICE, DAY};
use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use qc_18_name_registry::domain::ecdsa::recover_address;
use qc_18_name_registry::prelude::*;
use std::time::Duration;

pub fn bench_fee_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18/fees/split");

    for (label, context) in [
        ("namespace_creation", FeeContext::NamespaceCreation),
        ("public_name", FeeContext::for_name(false)),
        ("private_name", FeeContext::for_name(true)),
    ] {
        group.bench_with_input(BenchmarkId::new("split", label), &context, |b, ctx| {
            b.iter(|| black_box(split_fee(black_box(milli_units(1_234)), *ctx)));
        });
    }

    group.bench_function("split_u256_max", |b| {
        b.iter(|| black_box(split_fee(black_box(U256::MAX), FeeContext::for_name(false))));
    });

    group.finish();
}

pub fn bench_parse_full_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18/names/parse");

    for name in ["alice.abc", "boss", "foo.bar.baz", "a-very-long-label.ns"] {
        group.bench_with_input(BenchmarkId::new("parse", name), name, |b, n| {
            b.iter(|| black_box(parse_full_name(black_box(n), "x")));
        });
    }

    group.finish();
}

pub fn bench_consent_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18/authorization/consent");
    group.measurement_time(Duration::from_secs(10));

    let f = Fixture::new();
    let (key, recipient) = user(90);
    let signature = f.consent(&key, "alice", "x");

    group.bench_function("registration_digest", |b| {
        b.iter(|| black_box(f.registry.registration_digest("alice", "x", recipient)));
    });

    group.bench_function("digest_and_recover", |b| {
        b.iter(|| {
            let digest = f.registry.registration_digest("alice", "x", recipient);
            black_box(recover_address(&digest, &signature))
        });
    });

    group.bench_function("is_valid_signature", |b| {
        b.iter(|| black_box(f.registry.is_valid_signature("alice", "x", recipient, &signature)));
    });

    group.finish();
}

pub fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18/service/register");

    group.bench_function("register_name_bare", |b| {
        b.iter_batched(
            || {
                let f = Fixture::new();
                f.clock.advance(30 * DAY);
                f
            },
            |f| {
                black_box(
                    f.registry
                        .register_name(CallContext::new(ALICE, milli_units(1)), "alice", "x"),
                )
            },
            BatchSize::SmallInput,
        );
    });

    for size in [10u64, 50, 100] {
        let members: Vec<_> = (0..size).map(|i| user(100 + i as u8)).collect();
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("batch", size), &members, |b, members| {
            b.iter_batched(
                || {
                    let f = Fixture::new();
                    let labels: Vec<String> = (0..members.len()).map(|i| format!("m{i}")).collect();
                    let recipients: Vec<Address> = members.iter().map(|(_, a)| *a).collect();
                    let signatures: Vec<Vec<u8>> = members
                        .iter()
                        .zip(&labels)
                        .map(|((k, _), l)| f.consent(k, l, "x"))
                        .collect();
                    (f, labels, recipients, signatures)
                },
                |(f, labels, recipients, signatures)| {
                    black_box(f.registry.batch_register_name_with_authorization(
                        CallContext::new(f.registry.owner(), Fixture::times(milli_units(1), size)),
                        &labels,
                        "x",
                        &recipients,
                        &signatures,
                    ))
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}
