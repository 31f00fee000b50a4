//! Coulomb Wave Function Benchmarks
//!
//! One group per evaluation regime, plus the Gamma family.

use coulomb_wave::{
    coulomb, coulomb_phase_shift, digamma_complex, gamma, ln_gamma, ln_gamma_complex,
};
use criterion::{Criterion, criterion_group, criterion_main};
use num_complex::Complex;
use std::hint::black_box;

// =============================================================================
// Coulomb Functions by Regime
// =============================================================================

fn bench_regimes(c: &mut Criterion) {
    let mut group = c.benchmark_group("coulomb");

    // (name, L, η, ρ)
    let cases: [(&str, i32, f64, f64); 6] = [
        ("series", 0, 1.0, 1.0),
        ("series_high_l", 10, 2.0, 1.0),
        ("steed", 5, 1.0, 20.0),
        ("steed_recursed", 10, 1.0, 6.0),
        ("asymptotic", 2, 3.0, 100.0),
        ("tunneling_integrate", 3, 10.0, 2.0),
    ];

    for (name, l, eta, rho) in cases {
        group.bench_function(name, |b| {
            b.iter(|| coulomb(black_box(l), black_box(eta), black_box(rho)))
        });
    }

    group.bench_function("phase_shift", |b| {
        b.iter(|| coulomb_phase_shift(black_box(20), black_box(7.5_f64)))
    });

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("coulomb_sweep");
    group.sample_size(20);

    group.bench_function("rho_0.1_to_50_l3_eta2", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 1..=500 {
                let rho = 0.1 * i as f64;
                if let Ok(pair) = coulomb(3, 2.0, black_box(rho)) {
                    acc += pair.f;
                }
            }
            acc
        })
    });

    group.finish();
}

// =============================================================================
// Gamma Family
// =============================================================================

fn bench_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma");

    group.bench_function("gamma_real", |b| b.iter(|| gamma(black_box(7.3_f64))));
    group.bench_function("gamma_reflected", |b| b.iter(|| gamma(black_box(-3.7_f64))));
    group.bench_function("ln_gamma_real", |b| b.iter(|| ln_gamma(black_box(123.4_f64))));

    let z = Complex::new(2.5_f64, 4.0);
    group.bench_function("ln_gamma_complex", |b| {
        b.iter(|| ln_gamma_complex(black_box(z)))
    });
    let far = Complex::new(30.0_f64, 40.0);
    group.bench_function("ln_gamma_complex_stirling", |b| {
        b.iter(|| ln_gamma_complex(black_box(far)))
    });
    group.bench_function("digamma_complex", |b| {
        b.iter(|| digamma_complex(black_box(z)))
    });

    group.finish();
}

criterion_group!(benches, bench_regimes, bench_sweep, bench_gamma);
criterion_main!(benches);
