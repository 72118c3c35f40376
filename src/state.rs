//! The automaton engine: grid, counters, random source and worker pool.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::ThreadPool;
use tracing::{debug, info, warn};

use crate::automaton::{
    count_live_neighbors, seed_grid, step_automaton, Dimensions, Grid, LiveIndices,
    RandomSource, SeedBounds, Vitality,
};
use crate::config::Config;
use crate::error::EngineError;

/// The internal state of a cellular automaton.
pub struct State<R = ChaCha8Rng> {
    grid: Grid,
    /// Next-generation buffer, reused across steps.
    scratch: Vec<u8>,
    generation: u64,
    live_cells: usize,
    bounds: SeedBounds,
    rng: R,
    pool: Option<ThreadPool>,
}

impl State<ChaCha8Rng> {
    /// Build an engine with the default RNG, seeded from `config.rng_seed`
    /// or from the OS.
    pub fn new(config: &Config) -> Result<Self, EngineError> {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> State<R> {
    /// Build an engine drawing from the given random source.
    pub fn with_rng(config: &Config, rng: R) -> Result<Self, EngineError> {
        let dims = config.validate()?;
        let bounds = config.seed_bounds()?;
        let pool = build_pool(config.threads)?;

        info!(
            width = dims.width(),
            height = dims.height(),
            depth = dims.depth(),
            threads = config.threads.max(1),
            "created automaton"
        );

        let mut state = State {
            grid: Grid::new(dims),
            scratch: Vec::with_capacity(dims.len()),
            generation: 0,
            live_cells: 0,
            bounds,
            rng,
            pool,
        };

        if config.seed_on_create {
            state.seed();
        }

        Ok(state)
    }

    /// Reset the grid to a fresh random pattern. Returns the live count.
    pub fn seed(&mut self) -> usize {
        self.live_cells = seed_grid(&mut self.grid, self.bounds, &mut self.rng);
        info!(
            generation = self.generation,
            live = self.live_cells,
            "seeded automaton"
        );
        self.live_cells
    }

    /// Advance one generation. Returns the new live count.
    pub fn step(&mut self) -> usize {
        self.live_cells = step_automaton(&mut self.grid, &mut self.scratch, self.pool.as_ref());
        self.generation += 1;
        debug!(
            generation = self.generation,
            live = self.live_cells,
            "stepped automaton"
        );
        self.live_cells
    }

    /// Current live cells in ascending index order.
    pub fn live_indices(&self) -> LiveIndices<'_> {
        self.grid.live_indices()
    }

    /// Live neighbors of the cell at `index`, or `None` past the end of the grid.
    pub fn neighbor_count(&self, index: usize) -> Option<u8> {
        (index < self.grid.len()).then(|| count_live_neighbors(&self.grid, index))
    }

    pub fn vitality(&self, index: usize) -> Option<Vitality> {
        self.neighbor_count(index).map(Vitality::classify)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_cell_count(&self) -> usize {
        self.live_cells
    }

    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the cell at (x, y, z) is alive. Out of bounds is dead.
    pub fn get_cell(&self, x: i16, y: i16, z: i16) -> bool {
        let dims = self.grid.dimensions();
        dims.contains(x, y, z) && self.grid.is_alive(dims.index_of(x, y, z) as i64)
    }

    /// Place or remove a single cell between steps.
    /// Out-of-bounds coordinates are silently ignored.
    pub fn set_cell(&mut self, x: i16, y: i16, z: i16, alive: bool) {
        let dims = self.grid.dimensions();
        if !dims.contains(x, y, z) {
            return;
        }

        let was_alive = self.grid.set(dims.index_of(x, y, z), alive);
        match (was_alive, alive) {
            (false, true) => self.live_cells += 1,
            (true, false) => self.live_cells -= 1,
            _ => {}
        }
    }
}

fn build_pool(threads: usize) -> Result<Option<ThreadPool>, EngineError> {
    if threads == 0 {
        warn!("threads = 0, stepping on the calling thread");
    }
    if threads <= 1 {
        return Ok(None);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    Ok(Some(pool))
}
