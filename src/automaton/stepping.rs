//! Generation stepping with the B3/S23 rule over the 3D Moore neighborhood.

use rayon::prelude::*;
use rayon::ThreadPool;

use super::grid::{Grid, ALIVE, DEAD};
use super::neighbors::count_live_neighbors;

/// Next state of a single cell.
///
/// - Birth: a dead cell with exactly 3 neighbors becomes alive
/// - Survival: a live cell with 2 or 3 neighbors stays alive
/// - Anything else is dead (underpopulation, overpopulation, or stays dead)
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Step the grid forward by one generation and return the new live count.
///
/// All neighbor counts read the current generation; results go to `scratch`,
/// which is then swapped in as the grid's storage. `scratch` is resized as
/// needed and holds the previous generation afterwards.
pub fn step_automaton(grid: &mut Grid, scratch: &mut Vec<u8>, pool: Option<&ThreadPool>) -> usize {
    scratch.clear();
    scratch.resize(grid.len(), DEAD);

    match pool {
        Some(pool) => fill_next_parallel(grid, scratch, pool),
        None => fill_next(grid, 0, scratch),
    }

    grid.swap_cells(scratch);
    grid.count_alive()
}

/// Compute next states for the run of cells starting at linear index `start`.
fn fill_next(grid: &Grid, start: usize, out: &mut [u8]) {
    for (offset, cell) in out.iter_mut().enumerate() {
        let idx = start + offset;
        let neighbors = count_live_neighbors(grid, idx);
        *cell = if next_state(grid.is_alive(idx as i64), neighbors) {
            ALIVE
        } else {
            DEAD
        };
    }
}

/// One row per task. Every task reads the shared current generation and
/// writes a disjoint slice of `out`.
fn fill_next_parallel(grid: &Grid, out: &mut [u8], pool: &ThreadPool) {
    let row = grid.dimensions().width() as usize;
    pool.install(|| {
        out.par_chunks_mut(row)
            .enumerate()
            .for_each(|(i, chunk)| fill_next(grid, i * row, chunk));
    });
}
