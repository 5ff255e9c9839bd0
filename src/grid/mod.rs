/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Regular-grid sampling of scalar fields
//!
//! This module enumerates regular Cartesian grids, converts grid points to
//! the coordinate system a field function expects, and evaluates the field
//! at every cell. Coverage is always complete: no cell is skipped even where
//! the field vanishes, since downstream color and size mapping needs a value
//! for every point.
//!
//! Cells are independent, so evaluation is scheduled across threads; the
//! recorded sample order stays the deterministic outer-x, then y, then z
//! enumeration regardless of scheduling.

pub mod errors;

use errors::{GridError, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A point in Cartesian space, in units of the Bohr radius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    /// Create a new Cartesian point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A point in spherical coordinates
///
/// `r` is the radius, `theta` the polar angle measured from the +z axis in
/// [0, π], and `phi` the azimuth from the +x axis in (−π, π].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SphericalPoint {
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
}

impl SphericalPoint {
    /// Create a new spherical point
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        Self { r, theta, phi }
    }

    /// Convert a Cartesian point to spherical coordinates.
    ///
    /// The origin does not determine the angles, so (θ, φ) = (0, 0) there;
    /// the conversion therefore never produces NaN for finite input. The
    /// acos argument is clamped because z/r can drift just past ±1 on the
    /// polar axis.
    pub fn from_cartesian(point: &CartesianPoint) -> Self {
        let r = (point.x * point.x + point.y * point.y + point.z * point.z).sqrt();
        if r == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }

        let theta = (point.z / r).clamp(-1.0, 1.0).acos();
        let phi = point.y.atan2(point.x);
        Self::new(r, theta, phi)
    }
}

/// Half-open bounds of one grid axis
///
/// `min` is sampled, `max` never is; see [`AxisRange::coordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Create an axis range, rejecting degenerate or non-finite bounds
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min < max) || !min.is_finite() || !max.is_finite() {
            return Err(GridError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range symmetric around zero: [−half_extent, half_extent)
    pub fn symmetric(half_extent: f64) -> Result<Self> {
        Self::new(-half_extent, half_extent)
    }

    /// Coordinate of step `index` out of `resolution`.
    ///
    /// Sampling is half-open: index 0 lands exactly on `min`, index
    /// `resolution − 1` lands one step short of `max`, and `max` itself is
    /// never produced. Callers rely on this exact formula, not just its
    /// limit behavior.
    pub fn coordinate(&self, index: usize, resolution: usize) -> f64 {
        self.min + (self.max - self.min) * index as f64 / resolution as f64
    }
}

/// A regular 3D sampling grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
    /// Number of steps per axis
    pub resolution: usize,
}

impl GridSpec {
    /// Create a grid over the given axis ranges
    pub fn new(x: AxisRange, y: AxisRange, z: AxisRange, resolution: usize) -> Result<Self> {
        if resolution == 0 {
            return Err(GridError::ZeroResolution);
        }
        Ok(Self { x, y, z, resolution })
    }

    /// Cube [−half_extent, half_extent)³ with `resolution` steps per axis
    pub fn cube(half_extent: f64, resolution: usize) -> Result<Self> {
        let axis = AxisRange::symmetric(half_extent)?;
        Self::new(axis, axis, axis, resolution)
    }

    /// Total number of grid cells
    pub fn cell_count(&self) -> usize {
        self.resolution * self.resolution * self.resolution
    }
}

/// A regular 2D sampling grid for height fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub x: AxisRange,
    pub y: AxisRange,
    /// Number of steps per axis
    pub resolution: usize,
}

impl SurfaceSpec {
    /// Create a surface grid over the given axis ranges
    pub fn new(x: AxisRange, y: AxisRange, resolution: usize) -> Result<Self> {
        if resolution == 0 {
            return Err(GridError::ZeroResolution);
        }
        Ok(Self { x, y, resolution })
    }

    /// Square [−half_extent, half_extent)² with `resolution` steps per axis
    pub fn square(half_extent: f64, resolution: usize) -> Result<Self> {
        let axis = AxisRange::symmetric(half_extent)?;
        Self::new(axis, axis, resolution)
    }

    /// Total number of grid cells
    pub fn cell_count(&self) -> usize {
        self.resolution * self.resolution
    }
}

/// One evaluated grid cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub position: CartesianPoint,
    pub value: f64,
}

/// Every evaluated cell of one sampling pass, in enumeration order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampledField {
    pub samples: Vec<Sample>,
}

impl SampledField {
    /// Number of samples in the field
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the field holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Evaluate a Cartesian scalar field at every cell of a 3D grid.
///
/// Cells are evaluated in parallel and collected back into the x-outer,
/// y-middle, z-inner enumeration order.
pub fn sample_volume<F>(spec: &GridSpec, field_fn: F) -> SampledField
where
    F: Fn(&CartesianPoint) -> f64 + Sync,
{
    let res = spec.resolution;
    let samples = (0..spec.cell_count())
        .into_par_iter()
        .map(|cell| {
            let i = cell / (res * res);
            let j = cell / res % res;
            let k = cell % res;
            let position = CartesianPoint::new(
                spec.x.coordinate(i, res),
                spec.y.coordinate(j, res),
                spec.z.coordinate(k, res),
            );
            let value = field_fn(&position);
            Sample { position, value }
        })
        .collect();

    SampledField { samples }
}

/// Evaluate a spherical-coordinate scalar field at every cell of a 3D grid.
///
/// Each Cartesian grid point is converted through
/// [`SphericalPoint::from_cartesian`] before evaluation, so the field
/// function never sees the origin singularity.
pub fn sample_density<F>(spec: &GridSpec, field_fn: F) -> SampledField
where
    F: Fn(&SphericalPoint) -> f64 + Sync,
{
    sample_volume(spec, |point| field_fn(&SphericalPoint::from_cartesian(point)))
}

/// Evaluate a height field z = f(x, y) at every cell of a 2D grid.
///
/// The sampled height is recorded both as the z coordinate of the position
/// and as the raw value, so the samples describe the surface geometry and
/// feed normalization with the same number.
pub fn sample_surface<F>(spec: &SurfaceSpec, field_fn: F) -> SampledField
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    let res = spec.resolution;
    let samples = (0..spec.cell_count())
        .into_par_iter()
        .map(|cell| {
            let i = cell / res;
            let j = cell % res;
            let x = spec.x.coordinate(i, res);
            let y = spec.y.coordinate(j, res);
            let value = field_fn(x, y);
            Sample {
                position: CartesianPoint::new(x, y, value),
                value,
            }
        })
        .collect();

    SampledField { samples }
}
