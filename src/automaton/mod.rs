//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for indexing, counting neighbors,
//! stepping and seeding the grid. [`State`](crate::state::State) ties these
//! together and the FFI layer in `ffi/` calls into it.

pub mod grid;
pub mod index;
pub mod neighbors;
pub mod seeding;
pub mod stepping;

pub use grid::{Grid, LiveIndices};
pub use index::Dimensions;
pub use neighbors::{count_live_neighbors, Vitality};
pub use seeding::{seed_grid, RandomSource, SeedBounds};
pub use stepping::{next_state, step_automaton};
