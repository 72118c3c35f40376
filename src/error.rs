//! Error types for engine construction.
//!
//! Once a [`State`](crate::state::State) exists nothing it does can fail, so
//! every error here is raised while validating a [`Config`](crate::Config)
//! or building the worker pool.

use thiserror::Error;

/// Largest number of cells a grid may hold. Live indices cross the C ABI as `u32`.
pub const MAX_CELLS: u64 = u32::MAX as u64;

/// A configuration value that cannot produce a valid grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// At least one axis is zero or negative.
    #[error("invalid dimensions {width}x{height}x{depth}: every axis must be positive")]
    InvalidDimensions {
        /// Requested width.
        width: i16,
        /// Requested height.
        height: i16,
        /// Requested depth.
        depth: i16,
    },

    /// The grid would hold more cells than can be addressed.
    #[error("grid of {cells} cells exceeds the limit of {limit}")]
    TooManyCells {
        /// Requested cell count.
        cells: u64,
        /// Largest supported cell count.
        limit: u64,
    },

    /// Seeding must activate at least one draw.
    #[error("seed floor must be at least 1")]
    ZeroSeedFloor,

    /// Seeding density is `len / density_divisor`.
    #[error("density divisor must be at least 1")]
    ZeroDensityDivisor,
}

/// Errors raised while constructing a [`State`](crate::state::State).
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The rayon worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
