/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Field normalization
//!
//! Rescales a sampled scalar field so its extrema map onto [0, 1]. The
//! mapping for any single cell depends on the global extrema of the whole
//! field, so normalization is a strict two-pass reduction: an exact min/max
//! scan first, then the affine rescale. The passes never overlap on the
//! same field; parallelism lives inside each pass.

pub mod presets;

use crate::grid::{CartesianPoint, SampledField};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One cell of a normalized field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSample {
    pub position: CartesianPoint,
    /// Normalized value in [0, 1]
    pub value: f64,
}

/// A sampled field rescaled to [0, 1], together with its raw extrema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedField {
    /// Smallest raw value of the sampling pass
    pub min: f64,
    /// Largest raw value of the sampling pass
    pub max: f64,
    pub samples: Vec<NormalizedSample>,
}

impl NormalizedField {
    /// Number of samples in the field
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the field holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Rescale a sampled field so its raw extrema map to 0 and 1.
///
/// Pass 1 finds the exact global minimum and maximum with an associative,
/// commutative reduction, so the combination order chosen by the scheduler
/// cannot change the result. Pass 2 applies (raw − min) / (max − min),
/// clamped to [0, 1] against floating-point rounding at the extrema.
///
/// A perfectly flat field (max == min, e.g. an all-zero density from an
/// invalid state) has no usable span and normalizes to 0 everywhere
/// instead of dividing by zero.
pub fn normalize(field: &SampledField) -> NormalizedField {
    if field.is_empty() {
        return NormalizedField {
            min: 0.0,
            max: 0.0,
            samples: Vec::new(),
        };
    }

    // Pass 1: exact extrema
    let (min, max) = field
        .samples
        .par_iter()
        .fold(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), sample| (lo.min(sample.value), hi.max(sample.value)),
        )
        .reduce(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)),
        );

    debug!(
        "normalizing {} samples, raw extrema [{:e}, {:e}]",
        field.len(),
        min,
        max
    );

    // Pass 2: affine rescale, only after the extrema are final
    let span = max - min;
    let samples = field
        .samples
        .par_iter()
        .map(|sample| {
            let value = if span > 0.0 {
                ((sample.value - min) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            NormalizedSample {
                position: sample.position,
                value,
            }
        })
        .collect();

    NormalizedField { min, max, samples }
}
