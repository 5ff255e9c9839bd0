/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the grid module

use thiserror::Error;

/// Errors that can occur when describing a sampling grid
#[derive(Error, Debug)]
pub enum GridError {
    /// Axis bounds that are degenerate, inverted, or non-finite
    #[error("Invalid axis range: min={min}, max={max}")]
    InvalidRange { min: f64, max: f64 },

    /// A grid with zero steps per axis samples nothing
    #[error("Grid resolution must be at least 1")]
    ZeroResolution,
}

/// A specialized Result type for grid operations
pub type Result<T> = std::result::Result<T, GridError>;
