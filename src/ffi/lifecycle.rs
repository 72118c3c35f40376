//! State creation, destruction, and counter queries.

use tracing::warn;

use crate::config::Config;
use crate::state::State;

fn create(config: Config) -> *mut State {
    match State::new(&config) {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(err) => {
            warn!(%err, "va_create failed");
            std::ptr::null_mut()
        }
    }
}

/// Creates a new automaton with an all-dead grid and returns an opaque pointer.
///
/// `num_threads` above 1 parallelizes `va_step` across a worker pool.
///
/// # Returns
/// A pointer to a new State, or null if the dimensions are invalid or the
/// worker pool cannot be built.
///
/// # Safety
/// The returned pointer must eventually be freed with `va_destroy()`.
#[no_mangle]
pub extern "C" fn va_create(width: i16, height: i16, depth: i16, num_threads: u8) -> *mut State {
    create(Config::new(width, height, depth).with_threads(num_threads as usize))
}

/// Like `va_create`, but seeding draws from an RNG seeded with `rng_seed`,
/// so the same seed replays the same patterns.
#[no_mangle]
pub extern "C" fn va_create_with_rng_seed(
    width: i16,
    height: i16,
    depth: i16,
    num_threads: u8,
    rng_seed: u64,
) -> *mut State {
    create(
        Config::new(width, height, depth)
            .with_threads(num_threads as usize)
            .with_rng_seed(rng_seed),
    )
}

/// Destroys an automaton and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `va_create*()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn va_destroy(ptr: *mut State) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn va_get_generation(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Gets the number of live cells.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The live-cell count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn va_live_cell_count(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).live_cell_count() as u64
}
