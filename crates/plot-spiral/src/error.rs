//! Plot grid error types.

use thiserror::Error;

/// Plot grid error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    /// Coordinates are not multiples of the cell magnitude.
    #[error("({x}, {z}) is not aligned to a lattice of magnitude {magnitude}")]
    InvalidAlignment { x: i32, z: i32, magnitude: i32 },

    /// Cell magnitude must be positive and even.
    #[error("invalid plot size {0}: must be positive and even")]
    InvalidConfiguration(i32),

    /// Border strip must be non-negative and narrower than half a plot.
    #[error("invalid boundary width {width} for plot size {plot_size}")]
    InvalidBoundaryWidth { width: i32, plot_size: i32 },

    /// An environment override could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Result type for plot grid operations.
pub type PlotResult<T> = Result<T, PlotError>;
