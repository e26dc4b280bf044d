//! # Name Registry Benchmarks
//!
//! | Group | Path |
//! |-------|------|
//! | `qc-18/fees/split` | Burn / creator / owner split |
//! | `qc-18/names/parse` | Last-dot full-name parsing |
//! | `qc-18/authorization/consent` | Typed-data digest and ECDSA recovery |
//! | `qc-18/service/register` | Single and batch registration |

use criterion::{criterion_group, criterion_main};
use qc_tests::benchmarks::qc_18_name_registry::{
    bench_consent_verification, bench_fee_split, bench_parse_full_name, bench_registration,
};

criterion_group!(
    registry,
    bench_fee_split,
    bench_parse_full_name,
    bench_consent_verification,
    bench_registration
);
criterion_main!(registry);
