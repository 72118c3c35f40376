//! Construction-time engine configuration.

use serde::{Deserialize, Serialize};

use crate::automaton::index::Dimensions;
use crate::automaton::seeding::SeedBounds;
use crate::error::ConfigError;

/// Parameters fixed for the lifetime of a [`State`](crate::state::State).
///
/// Missing fields fall back to [`Config::default`] when deserialized, so a
/// host can ship a partial document such as `{"width": 64, "depth": 64}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: i16,
    pub height: i16,
    pub depth: i16,
    /// Minimum number of random draws per seeding.
    pub seed_floor: usize,
    /// Seeding draws at most `cells / density_divisor` positions.
    pub density_divisor: usize,
    /// Worker threads used by `step`. 0 and 1 both step on the calling thread.
    pub threads: usize,
    /// Seed the grid once right after construction.
    pub seed_on_create: bool,
    /// Fixed RNG seed; `None` draws one from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 300,
            height: 300,
            depth: 1,
            seed_floor: 20,
            density_divisor: 10,
            threads: 1,
            seed_on_create: false,
            rng_seed: None,
        }
    }
}

impl Config {
    /// Default configuration with the given dimensions.
    pub fn new(width: i16, height: i16, depth: i16) -> Self {
        Config {
            width,
            height,
            depth,
            ..Default::default()
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_seed_bounds(mut self, floor: usize, density_divisor: usize) -> Self {
        self.seed_floor = floor;
        self.density_divisor = density_divisor;
        self
    }

    pub fn with_seed_on_create(mut self, seed_on_create: bool) -> Self {
        self.seed_on_create = seed_on_create;
        self
    }

    /// Validated grid dimensions.
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Dimensions::new(self.width, self.height, self.depth)
    }

    /// Validated seeding bounds.
    pub fn seed_bounds(&self) -> Result<SeedBounds, ConfigError> {
        SeedBounds::new(self.seed_floor, self.density_divisor)
    }

    /// Check every field, returning the grid dimensions on success.
    pub fn validate(&self) -> Result<Dimensions, ConfigError> {
        self.seed_bounds()?;
        self.dimensions()
    }
}
