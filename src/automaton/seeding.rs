//! Random seeding through an injectable random source.

use rand::Rng;

use super::grid::Grid;
use crate::error::ConfigError;

/// A source of uniformly distributed integers.
///
/// Every [`rand::Rng`] is a `RandomSource`. Tests can implement it directly
/// to script an exact sequence of draws.
pub trait RandomSource {
    /// A uniform integer in `low..=high`. Callers guarantee `low <= high`.
    fn uniform(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }
}

/// Range from which the number of seeding draws is picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedBounds {
    floor: usize,
    density_divisor: usize,
}

impl Default for SeedBounds {
    fn default() -> Self {
        SeedBounds {
            floor: 20,
            density_divisor: 10,
        }
    }
}

impl SeedBounds {
    pub fn new(floor: usize, density_divisor: usize) -> Result<Self, ConfigError> {
        if floor == 0 {
            return Err(ConfigError::ZeroSeedFloor);
        }
        if density_divisor == 0 {
            return Err(ConfigError::ZeroDensityDivisor);
        }
        Ok(SeedBounds {
            floor,
            density_divisor,
        })
    }

    /// Inclusive `(low, high)` draw-count range for a grid of `len` cells.
    ///
    /// `high` is `len / density_divisor`, at least 1. `low` is the floor,
    /// lowered to `high` on grids too small to reach it.
    pub fn draw_range(&self, len: usize) -> (usize, usize) {
        let high = (len / self.density_divisor).max(1);
        (self.floor.min(high), high)
    }
}

/// Kill every cell, then activate a random number of random cells.
///
/// Positions are drawn with replacement, so duplicates collapse and the
/// returned live count can be lower than the number of draws.
pub fn seed_grid<R: RandomSource + ?Sized>(grid: &mut Grid, bounds: SeedBounds, rng: &mut R) -> usize {
    grid.clear();

    let len = grid.len();
    let (low, high) = bounds.draw_range(len);
    let draws = rng.uniform(low, high);

    for _ in 0..draws {
        let idx = rng.uniform(0, len - 1);
        grid.set(idx, true);
    }

    grid.count_alive()
}
