/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Special functions for orbital calculations
//!
//! This module provides the classical special functions the hydrogen
//! wavefunction is built from: generalized Laguerre polynomials for the
//! radial part and associated Legendre polynomials / spherical harmonics
//! for the angular part.

use super::errors::{Result, UtilsError};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Calculate the factorial of n
///
/// # Arguments
///
/// * `n` - The non-negative integer for which to calculate the factorial
///
/// # Returns
///
/// The factorial of n or None if n is too large for u64
pub fn factorial(n: u32) -> Option<u64> {
    match n {
        0 | 1 => Some(1),
        n if n <= 20 => {
            let mut result = 1u64;
            for i in 2..=n {
                result = result.checked_mul(i as u64)?;
            }
            Some(result)
        }
        _ => None, // Avoid overflow for large n
    }
}

/// Calculate the factorial of n in floating point
///
/// Used where factorials appear inside ratios that stay well within f64
/// range even when the individual factorials would overflow u64. This is
/// the gamma function at positive integer arguments: Γ(n + 1) = n!.
pub fn factorial_f64(n: u32) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Generalized Laguerre polynomial L_n^α(x)
///
/// Uses the physicists' normalization, in which L_0^α = 1 and
/// L_1^α(x) = 1 + α − x, evaluated with the standard three-term recurrence
/// k·L_k = (2k − 1 + α − x)·L_{k−1} − (k − 1 + α)·L_{k−2}.
///
/// # Arguments
///
/// * `n` - The degree of the polynomial (n ≥ 0)
/// * `alpha` - The parameter of the polynomial (α ≥ 0)
/// * `x` - The input value
///
/// # Returns
///
/// The value of L_n^α(x) or an error if parameters are invalid
pub fn associated_laguerre(n: i32, alpha: i32, x: f64) -> Result<f64> {
    if n < 0 || alpha < 0 {
        return Err(UtilsError::Math(format!(
            "Invalid parameters for associated Laguerre polynomial: n={}, alpha={}",
            n, alpha
        )));
    }

    let alpha = alpha as f64;

    if n == 0 {
        return Ok(1.0);
    }

    let mut l_prev = 1.0; // L_0^α(x)
    let mut l_curr = 1.0 + alpha - x; // L_1^α(x)

    for k in 2..=n {
        let k = k as f64;
        let l_next = ((2.0 * k - 1.0 + alpha - x) * l_curr - (k - 1.0 + alpha) * l_prev) / k;
        l_prev = l_curr;
        l_curr = l_next;
    }

    Ok(l_curr)
}

/// Standard Legendre polynomial P_l(x)
///
/// # Arguments
///
/// * `l` - The degree of the polynomial (l ≥ 0)
/// * `x` - The input value (-1 ≤ x ≤ 1)
///
/// # Returns
///
/// The value of P_l(x) or an error if parameters are invalid
pub fn legendre_polynomial(l: i32, x: f64) -> Result<f64> {
    if l < 0 || !(-1.0..=1.0).contains(&x) {
        return Err(UtilsError::Math(format!(
            "Invalid parameters for Legendre polynomial: l={}, x={}",
            l, x
        )));
    }

    if l == 0 {
        return Ok(1.0); // P_0(x) = 1
    }

    let mut p_prev = 1.0; // P_0(x)
    let mut p_curr = x; // P_1(x)

    // Recurrence: n·P_n(x) = (2n − 1)·x·P_{n−1}(x) − (n − 1)·P_{n−2}(x)
    for n in 2..=l {
        let p_next = ((2 * n - 1) as f64 * x * p_curr - (n - 1) as f64 * p_prev) / n as f64;
        p_prev = p_curr;
        p_curr = p_next;
    }

    Ok(p_curr)
}

/// Associated Legendre polynomial P_l^m(x)
///
/// # Arguments
///
/// * `l` - The degree of the polynomial (l ≥ 0)
/// * `m` - The order of the polynomial (|m| ≤ l)
/// * `x` - The input value (-1 ≤ x ≤ 1)
///
/// # Returns
///
/// The value of P_l^m(x) or an error if parameters are invalid
pub fn associated_legendre(l: i32, m: i32, x: f64) -> Result<f64> {
    if l < 0 || m.abs() > l || !(-1.0..=1.0).contains(&x) {
        return Err(UtilsError::Math(format!(
            "Invalid parameters for associated Legendre polynomial: l={}, m={}, x={}",
            l, m, x
        )));
    }

    if m == 0 {
        return legendre_polynomial(l, x);
    }

    let abs_m = m.abs();

    // Negative orders reduce to positive ones:
    // P_l^(-m) = (-1)^m · (l-m)!/(l+m)! · P_l^m
    if m < 0 {
        let sign = if abs_m % 2 == 0 { 1.0 } else { -1.0 };
        let mut ratio = 1.0;
        for i in (l - abs_m + 1)..=(l + abs_m) {
            ratio /= i as f64;
        }
        return Ok(sign * ratio * associated_legendre(l, abs_m, x)?);
    }

    // Seed the recurrence with P_m^m(x) = (-1)^m (2m-1)!! (1-x²)^(m/2)
    let sin_theta = ((1.0 - x) * (1.0 + x)).sqrt();
    let mut p_mm = 1.0;
    for i in 1..=abs_m {
        p_mm *= -((2 * i - 1) as f64) * sin_theta;
    }

    if l == abs_m {
        return Ok(p_mm);
    }

    // P_{m+1}^m(x) = x (2m+1) P_m^m(x)
    let mut p_prev = p_mm;
    let mut p_curr = x * (2 * abs_m + 1) as f64 * p_mm;

    // Upward in degree: (l−m)·P_l^m = (2l−1)·x·P_{l−1}^m − (l+m−1)·P_{l−2}^m
    for ll in (abs_m + 2)..=l {
        let p_next =
            ((2 * ll - 1) as f64 * x * p_curr - (ll + abs_m - 1) as f64 * p_prev) / (ll - abs_m) as f64;
        p_prev = p_curr;
        p_curr = p_next;
    }

    Ok(p_curr)
}

/// Spherical harmonic Y_l^m(θ, φ)
///
/// Includes the Condon-Shortley phase. The squared modulus, which is all
/// the density evaluator consumes, is insensitive to that phase.
///
/// # Arguments
///
/// * `l` - The degree (l ≥ 0)
/// * `m` - The order (-l ≤ m ≤ l)
/// * `theta` - The polar angle in radians (0 ≤ θ ≤ π)
/// * `phi` - The azimuthal angle in radians
///
/// # Returns
///
/// The complex value of Y_l^m(θ, φ) or an error if parameters are invalid
pub fn spherical_harmonic(l: i32, m: i32, theta: f64, phi: f64) -> Result<Complex64> {
    if l < 0 || m.abs() > l {
        return Err(UtilsError::Math(format!(
            "Invalid parameters for spherical harmonic: l={}, m={}",
            l, m
        )));
    }

    // Clamp against floating-point drift at the poles before entering the
    // Legendre recurrence, whose domain is [-1, 1].
    let cos_theta = theta.cos().clamp(-1.0, 1.0);
    let p_lm = associated_legendre(l, m.abs(), cos_theta)?;

    // Normalization: √( (2l+1)·(l−|m|)! / (4π·(l+|m|)!) ), with the
    // factorial ratio in f64 so large degrees stay representable.
    let fact_ratio =
        factorial_f64((l - m.abs()) as u32) / factorial_f64((l + m.abs()) as u32);
    let norm = ((2 * l + 1) as f64 * fact_ratio / (4.0 * PI)).sqrt();

    // e^(i·m·φ) carries the whole φ dependence
    let exp_imp = Complex64::new(0.0, m as f64 * phi).exp();

    let phase = if m >= 0 || m % 2 == 0 { 1.0 } else { -1.0 };

    Ok(norm * phase * p_lm * exp_imp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(20), Some(2432902008176640000));
        assert_eq!(factorial(21), None); // Overflows u64
    }

    #[test]
    fn test_factorial_f64() {
        assert_relative_eq!(factorial_f64(0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(factorial_f64(1), 1.0, epsilon = 1e-12);
        assert_relative_eq!(factorial_f64(10), 3628800.0, epsilon = 1e-6);
        assert_relative_eq!(factorial_f64(20), 2432902008176640000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_associated_laguerre_low_degrees() {
        // L_0^α(x) = 1 for any α, x
        assert_relative_eq!(associated_laguerre(0, 0, 0.7).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(associated_laguerre(0, 3, 2.5).unwrap(), 1.0, epsilon = 1e-12);

        // L_1^α(x) = 1 + α − x
        assert_relative_eq!(associated_laguerre(1, 0, 0.5).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(associated_laguerre(1, 2, 1.5).unwrap(), 1.5, epsilon = 1e-12);

        // L_2^0(x) = (x² − 4x + 2)/2
        let x = 1.3;
        assert_relative_eq!(
            associated_laguerre(2, 0, x).unwrap(),
            (x * x - 4.0 * x + 2.0) / 2.0,
            epsilon = 1e-12
        );

        // L_2^1(x) = x²/2 − 3x + 3
        assert_relative_eq!(
            associated_laguerre(2, 1, x).unwrap(),
            x * x / 2.0 - 3.0 * x + 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_associated_laguerre_rejects_negative_parameters() {
        assert!(associated_laguerre(-1, 0, 1.0).is_err());
        assert!(associated_laguerre(2, -3, 1.0).is_err());
    }

    #[test]
    fn test_legendre_polynomial() {
        // P_0(x) = 1, P_1(x) = x, P_2(x) = (3x² − 1)/2
        assert_relative_eq!(legendre_polynomial(0, 0.5).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(legendre_polynomial(1, 0.5).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            legendre_polynomial(2, 0.5).unwrap(),
            (3.0 * 0.25 - 1.0) / 2.0,
            epsilon = 1e-12
        );

        // Endpoints: P_l(1) = 1, P_l(−1) = (−1)^l
        assert_relative_eq!(legendre_polynomial(4, 1.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(legendre_polynomial(3, -1.0).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_associated_legendre() {
        let x: f64 = 0.5;
        let sin = (1.0 - x * x).sqrt();

        // P_1^1(x) = −√(1−x²)
        assert_relative_eq!(associated_legendre(1, 1, x).unwrap(), -sin, epsilon = 1e-12);

        // P_2^1(x) = −3x√(1−x²)
        assert_relative_eq!(
            associated_legendre(2, 1, x).unwrap(),
            -3.0 * x * sin,
            epsilon = 1e-12
        );

        // P_2^2(x) = 3(1−x²)
        assert_relative_eq!(
            associated_legendre(2, 2, x).unwrap(),
            3.0 * (1.0 - x * x),
            epsilon = 1e-12
        );

        // m = 0 reduces to the plain Legendre polynomial
        assert_relative_eq!(
            associated_legendre(3, 0, x).unwrap(),
            legendre_polynomial(3, x).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_associated_legendre_negative_order() {
        // P_l^(-m) = (−1)^m (l−m)!/(l+m)! P_l^m
        let x = 0.3;
        let p21 = associated_legendre(2, 1, x).unwrap();
        let expected = -1.0 / 6.0 * p21; // (2-1)!/(2+1)! = 1/6
        assert_relative_eq!(associated_legendre(2, -1, x).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_associated_legendre_domain() {
        assert!(associated_legendre(2, 1, 1.5).is_err());
        assert!(associated_legendre(2, 3, 0.5).is_err());
        assert!(associated_legendre(-1, 0, 0.5).is_err());
    }

    #[test]
    fn test_spherical_harmonic_y00() {
        // Y_0^0 = 1/√(4π) regardless of direction
        let y = spherical_harmonic(0, 0, 1.234, -2.5).unwrap();
        assert_relative_eq!(y.re, 1.0 / (4.0 * PI).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(y.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spherical_harmonic_y10() {
        // Y_1^0 = √(3/4π)·cos θ
        let theta = 0.8;
        let y = spherical_harmonic(1, 0, theta, 0.3).unwrap();
        assert_relative_eq!(
            y.re,
            (3.0 / (4.0 * PI)).sqrt() * theta.cos(),
            epsilon = 1e-12
        );
        assert_relative_eq!(y.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spherical_harmonic_magnitude_is_phi_invariant_for_m_zero() {
        let a = spherical_harmonic(2, 0, 1.1, 0.0).unwrap();
        let b = spherical_harmonic(2, 0, 1.1, 2.9).unwrap();
        assert_relative_eq!(a.norm_sqr(), b.norm_sqr(), epsilon = 1e-12);
    }
}
