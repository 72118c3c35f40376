//! Voxel Life - bounded 3D Game of Life engine
//!
//! A fixed-size grid of binary cells stepped with the B3/S23 rule over the
//! 26-cell Moore neighborhood. Cells beyond the grid edges count as dead.
//!
//! [`State`] is the engine; `ffi` exposes it through a C ABI so a rendering
//! host can seed, step, and read back live cells each tick.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;

#[cfg(test)]
mod tests;

pub use automaton::{Dimensions, Grid, LiveIndices, RandomSource, SeedBounds, Vitality};
pub use config::Config;
pub use error::{ConfigError, EngineError};
pub use state::State;
