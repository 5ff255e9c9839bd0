/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Hydrogen-atom orbital evaluation
//!
//! This module evaluates the probability density |ψ_{n,l,m}(r,θ,φ)|² of a
//! hydrogen bound state: the squared radial amplitude built from a
//! generalized Laguerre polynomial times the squared modulus of the angular
//! part built from an associated Legendre polynomial. All lengths are in
//! units of the Bohr radius.

use crate::grid::SphericalPoint;
use crate::utils::constants::BOHR_RADIUS;
use crate::utils::math::{associated_laguerre, factorial_f64, spherical_harmonic};
use serde::{Deserialize, Serialize};

/// Quantum numbers (n, l, m) of a hydrogen eigenstate
///
/// Any integer triple is representable. States that violate n ≥ 1,
/// 0 ≤ l < n, or |m| ≤ l do not exist physically and evaluate to zero
/// density everywhere; they are not treated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumNumbers {
    /// Principal quantum number
    pub n: i32,
    /// Orbital angular-momentum quantum number
    pub l: i32,
    /// Magnetic quantum number
    pub m: i32,
}

impl QuantumNumbers {
    /// Create a quantum-number triple
    pub fn new(n: i32, l: i32, m: i32) -> Self {
        Self { n, l, m }
    }

    /// Whether the state exists: n ≥ 1, 0 ≤ l < n, |m| ≤ l
    pub fn is_valid(&self) -> bool {
        self.n >= 1 && self.l >= 0 && self.l < self.n && self.m.abs() <= self.l
    }
}

/// A hydrogen orbital with its radial normalization precomputed
///
/// The normalization constant depends only on (n, l), so it is computed
/// once at construction and reused for every grid point.
#[derive(Debug, Clone)]
pub struct HydrogenOrbital {
    state: QuantumNumbers,
    radial_norm: f64,
    valid: bool,
}

impl HydrogenOrbital {
    /// Create an orbital for the given quantum numbers
    pub fn new(state: QuantumNumbers) -> Self {
        let valid = state.is_valid();
        let radial_norm = if valid {
            Self::radial_normalization(state.n, state.l)
        } else {
            0.0
        };

        Self {
            state,
            radial_norm,
            valid,
        }
    }

    /// The quantum numbers this orbital was built for
    pub fn state(&self) -> QuantumNumbers {
        self.state
    }

    /// Radial normalization √( 2/(n³a₀³) · Γ(n−l) / (2n·Γ(n+l+1)) )
    ///
    /// Γ at positive integer arguments is a factorial, kept in f64 so the
    /// ratio stays representable for large n.
    fn radial_normalization(n: i32, l: i32) -> f64 {
        let n_f = n as f64;
        let a0_cubed = BOHR_RADIUS * BOHR_RADIUS * BOHR_RADIUS;
        let gamma_ratio = factorial_f64((n - l - 1) as u32) / factorial_f64((n + l) as u32);
        (2.0 / (n_f * n_f * n_f * a0_cubed) * gamma_ratio / (2.0 * n_f)).sqrt()
    }

    /// Probability density |ψ_{n,l,m}|² at a spherical point.
    ///
    /// Always finite and non-negative. Invalid quantum numbers yield 0
    /// everywhere. A special-function failure for a single point also
    /// falls back to 0 rather than aborting a sampling pass, though no
    /// such failure is reachable once the state has been validated.
    pub fn density(&self, point: &SphericalPoint) -> f64 {
        if !self.valid {
            return 0.0;
        }

        let QuantumNumbers { n, l, m } = self.state;

        let rho = 2.0 * point.r / (n as f64 * BOHR_RADIUS);
        let laguerre = associated_laguerre(n - l - 1, 2 * l + 1, rho).unwrap_or(0.0);
        let radial = rho.powi(l) * (-rho / 2.0).exp() * laguerre;

        let angular = spherical_harmonic(l, m, point.theta, point.phi)
            .map(|y| y.norm_sqr())
            .unwrap_or(0.0);

        let amplitude = self.radial_norm * radial;
        amplitude * amplitude * angular
    }
}

/// One-shot probability density for callers that do not reuse the state.
pub fn probability_density(state: QuantumNumbers, point: &SphericalPoint) -> f64 {
    HydrogenOrbital::new(state).density(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantum_number_validity() {
        assert!(QuantumNumbers::new(1, 0, 0).is_valid());
        assert!(QuantumNumbers::new(3, 2, -2).is_valid());

        assert!(!QuantumNumbers::new(0, 0, 0).is_valid()); // n too small
        assert!(!QuantumNumbers::new(2, 2, 0).is_valid()); // l = n
        assert!(!QuantumNumbers::new(2, -1, 0).is_valid()); // l negative
        assert!(!QuantumNumbers::new(2, 1, 2).is_valid()); // |m| > l
    }

    #[test]
    fn test_invalid_state_is_zero_without_touching_factorials() {
        // l > n would make n − l − 1 negative; construction must not reach
        // the factorial with a wrapped argument.
        let orbital = HydrogenOrbital::new(QuantumNumbers::new(1, 5, 0));
        assert!(!orbital.state().is_valid());

        let point = SphericalPoint::new(1.0, 1.0, 1.0);
        assert_eq!(orbital.density(&point), 0.0);
    }
}
