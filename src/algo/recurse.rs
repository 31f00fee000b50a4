//! Upward recurrence in L.

use crate::machine::CoulombFloat;
use crate::types::Error;

/// Carry (u_{L1}, u′_{L1}) up to (u_{L2}, u′_{L2}).
///
/// ```text
/// R_k = √(k² + η²)/k,   S_k = η/k + k/ρ
/// u_k  = (S_k u_{k−1} − u′_{k−1}) / R_k
/// u′_k = R_k u_{k−1} − S_k u_k
/// ```
///
/// Stable for the irregular solution G, which grows with L. Applied to F
/// it loses digits once ρ is below the turning point of the target L.
///
/// Returns [`Error::Overflow`] as soon as u or u′ leaves the floating-point
/// range; later steps would only turn the infinity into NaN.
pub(crate) fn upward<T: CoulombFloat>(
    l1: u32,
    l2: u32,
    eta: T,
    rho: T,
    u: T,
    up: T,
) -> Result<(T, T), Error> {
    let mut u = u;
    let mut up = up;
    for k in l1 + 1..=l2 {
        let fk = T::from_f64(k as f64);
        let r = fk.hypot(eta) / fk;
        let s = eta / fk + fk / rho;
        let u_next = (s * u - up) / r;
        up = r * u - s * u_next;
        u = u_next;
        if u.is_infinite() || up.is_infinite() {
            return Err(Error::Overflow);
        }
    }
    Ok((u, up))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_steps_is_identity() {
        assert_eq!(upward(3, 3, 1.0_f64, 2.0, 0.5, -0.25), Ok((0.5, -0.25)));
    }

    #[test]
    fn free_particle_irregular() {
        // G_1(0, ρ) = cos ρ / ρ + sin ρ
        let rho = 2.0_f64;
        let (g1, g1p) = upward(0, 1, 0.0, rho, rho.cos(), -rho.sin()).unwrap();
        let expected = rho.cos() / rho + rho.sin();
        let expected_p = -rho.sin() / rho - rho.cos() / (rho * rho) + rho.cos();
        assert!((g1 - expected).abs() < 1e-15, "G_1 = {g1}");
        assert!((g1p - expected_p).abs() < 1e-15, "G'_1 = {g1p}");
    }

    #[test]
    fn irregular_reference_value() {
        // G_0(1, 2) → G_3(1, 2)
        let (g, gp) =
            upward(0, 3, 1.0_f64, 2.0, 1.2757787847682766, -0.58272881309718474).unwrap();
        assert!((g - 8.0029690597372917).abs() < 1e-12 * 8.0029690597372917, "G_3 = {g}");
        assert!((gp - (-11.380354342043538)).abs() < 1e-12 * 11.380354342043538, "G'_3 = {gp}");
    }

    #[test]
    fn overflow_stops_the_recursion() {
        // G_80(0, 10⁻³) ≈ 159!!·10²⁴⁰
        assert_eq!(upward(0, 80, 0.0_f64, 1.0e-3, 1.0, 0.0), Err(Error::Overflow));
        assert_eq!(upward(0, 30, 0.0_f32, 1.0e-2, 1.0, 0.0), Err(Error::Overflow));
    }
}
