use coulomb_wave::*;
use num_complex::Complex;

fn main() {
    // -- Single-value Coulomb functions --
    println!("=== Coulomb wave functions (f64) ===");
    let (l, eta, rho) = (2, 1.0_f64, 10.0);
    let f = coulomb_f(l, eta, rho).unwrap();
    println!("F_{l}({eta}, {rho}) = {f}");

    let g = coulomb_g(l, eta, rho).unwrap();
    println!("G_{l}({eta}, {rho}) = {g}");

    let pair = coulomb(l, eta, rho).unwrap();
    println!("F' = {}, G' = {}", pair.f_prime, pair.g_prime);
    println!("G F' - F G' = {}  (should be 1)", pair.wronskian());

    // -- Method selection across regimes --
    println!("\n=== Method per regime ===");
    for &(l, eta, rho) in &[
        (0, 1.0_f64, 1.0),
        (5, 1.0, 20.0),
        (2, 3.0, 100.0),
        (3, 10.0, 2.0),
        (10, 1.0, 6.0),
    ] {
        let raw = coulomb_raw(l, eta, rho, Tolerance::default()).unwrap();
        println!(
            "L={l:<2} eta={eta:<4} rho={rho:<5}  F by {:?}, G by {:?}",
            raw.regular, raw.irregular
        );
    }

    // -- Looser tolerance --
    println!("\n=== Explicit tolerance ===");
    let tol = Tolerance::new(1e-8).unwrap();
    let raw = coulomb_raw(3, 10.0, 2.0, tol).unwrap();
    println!("F_3(10, 2) = {:e} at tolerance {:e}", raw.pair.f, tol.value());

    // -- Turning point and phase shift --
    println!("\n=== Turning point and phase shift ===");
    println!("rho_t(L=2, eta=1) = {}", coulomb_turning_point(2, 1.0_f64).unwrap());
    println!("sigma_2(1) = {}", coulomb_phase_shift(2, 1.0_f64).unwrap());
    println!("C_2(1) = {}", coulomb_factor(2, 1.0_f64).unwrap());

    // -- Errors --
    println!("\n=== Errors ===");
    println!("F_-1(0, 1): {:?}", coulomb_f(-1, 0.0_f64, 1.0));
    println!("G_0(400, 0.001): {:?}", coulomb_g(0, 400.0_f64, 0.001));

    // -- Gamma family --
    println!("\n=== Gamma family ===");
    println!("Gamma(4.5) = {}", gamma(4.5_f64).unwrap());
    println!("ln Gamma(100) = {}", ln_gamma(100.0_f64).unwrap());
    println!("psi(1) = {}  (-Euler gamma)", digamma(1.0_f64).unwrap());
    println!("B(2, 3) = {}", beta(2.0_f64, 3.0).unwrap());
    let z = Complex::new(1.0_f64, 2.0);
    println!("ln Gamma({z}) = {}", ln_gamma_complex(z).unwrap());
    println!("psi({z}) = {}", digamma_complex(z).unwrap());

    // -- f32 support --
    println!("\n=== f32 support ===");
    let f32_pair = coulomb(1, 0.5_f32, 3.0).unwrap();
    println!("F_1(0.5, 3) = {} (f32)", f32_pair.f);
}
