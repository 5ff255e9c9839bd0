/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # orbitals-rs
//!
//! Hydrogen-atom orbital probability densities sampled on regular grids.
//!
//! The crate evaluates |ψ_{n,l,m}(r,θ,φ)|² for the hydrogen Coulomb problem,
//! samples it — or any analytic scalar field — over a regular Cartesian
//! grid, and rescales the result to [0, 1] for color and size mapping in an
//! external renderer. The whole computation is synchronous and in-memory;
//! windowing, input handling, and drawing belong to the consumer.
//!
//! ```no_run
//! use orbitals_rs::{sample_and_normalize, GridSpec, QuantumNumbers};
//!
//! let spec = GridSpec::cube(20.0, 50).unwrap();
//! let field = sample_and_normalize(QuantumNumbers::new(2, 1, 0), &spec);
//! assert_eq!(field.len(), 50 * 50 * 50);
//! ```

pub mod cli;
pub mod field;
pub mod grid;
pub mod orbital;
pub mod render;
pub mod utils;

pub use field::{normalize, NormalizedField, NormalizedSample};
pub use grid::{
    AxisRange, CartesianPoint, GridSpec, Sample, SampledField, SphericalPoint, SurfaceSpec,
};
pub use orbital::{probability_density, HydrogenOrbital, QuantumNumbers};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Sample |ψ|² for `state` over `spec` and rescale the result to [0, 1].
///
/// Invalid quantum numbers produce an all-zero density, which normalizes
/// to an all-zero field rather than failing.
pub fn sample_and_normalize(state: QuantumNumbers, spec: &GridSpec) -> NormalizedField {
    let orbital = HydrogenOrbital::new(state);
    let sampled = grid::sample_density(spec, |point| orbital.density(point));
    field::normalize(&sampled)
}

/// Sample an analytic Cartesian scalar field over `spec` and rescale to [0, 1].
pub fn sample_and_normalize_with<F>(spec: &GridSpec, field_fn: F) -> NormalizedField
where
    F: Fn(&CartesianPoint) -> f64 + Sync,
{
    let sampled = grid::sample_volume(spec, field_fn);
    field::normalize(&sampled)
}

/// Sample a height field z = f(x, y) over `spec` and rescale to [0, 1].
pub fn sample_and_normalize_surface<F>(spec: &SurfaceSpec, field_fn: F) -> NormalizedField
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    let sampled = grid::sample_surface(spec, field_fn);
    field::normalize(&sampled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_produces_unit_interval_values() {
        let spec = GridSpec::cube(10.0, 8).unwrap();
        let field = sample_and_normalize(QuantumNumbers::new(2, 1, 0), &spec);

        assert_eq!(field.len(), spec.cell_count());
        assert!(field.max > field.min);
        for sample in &field.samples {
            assert!((0.0..=1.0).contains(&sample.value));
        }
    }

    #[test]
    fn test_pipeline_invalid_state_yields_flat_zero_field() {
        let spec = GridSpec::cube(10.0, 4).unwrap();
        let field = sample_and_normalize(QuantumNumbers::new(2, 2, 0), &spec);

        assert_eq!(field.min, 0.0);
        assert_eq!(field.max, 0.0);
        assert!(field.samples.iter().all(|s| s.value == 0.0));
    }
}
