//! Cell access, seeding, stepping, and neighbor queries.

use crate::state::State;

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn va_set_cell(ptr: *mut State, x: i16, y: i16, z: i16, alive: u8) {
    if ptr.is_null() {
        return;
    }

    (*ptr).set_cell(x, y, z, alive != 0);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn va_get_cell(ptr: *const State, x: i16, y: i16, z: i16) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    u8::from((*ptr).get_cell(x, y, z))
}

/// Clears the grid and activates a fresh random pattern.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The live-cell count after seeding, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn va_seed(ptr: *mut State) -> u64 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).seed() as u64
}

/// Advances the automaton by one generation (B3/S23, 26-cell Moore
/// neighborhood, dead beyond the edges).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The new live-cell count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn va_step(ptr: *mut State) -> u64 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).step() as u64
}

/// Counts the live neighbors of the cell at linear `index`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0..=26, or -1 if ptr is null or the index is out of range.
#[no_mangle]
pub unsafe extern "C" fn va_neighbor_count(ptr: *const State, index: u32) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    (*ptr)
        .neighbor_count(index as usize)
        .map_or(-1, i32::from)
}

/// Classifies the cell at linear `index` by its neighbor count.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 = sparse (< 2), 1 = stable (2 or 3), 2 = crowded (> 3),
/// or -1 if ptr is null or the index is out of range.
#[no_mangle]
pub unsafe extern "C" fn va_cell_vitality(ptr: *const State, index: u32) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    (*ptr).vitality(index as usize).map_or(-1, |v| v.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_set_and_get_cell() {
        let state = lifecycle::va_create(8, 8, 8, 1);
        unsafe {
            va_set_cell(state, 0, 0, 0, 1);
            assert_eq!(va_get_cell(state, 0, 0, 0), 1);
            assert_eq!(lifecycle::va_live_cell_count(state), 1);

            va_set_cell(state, 0, 0, 0, 0);
            assert_eq!(va_get_cell(state, 0, 0, 0), 0);
            assert_eq!(lifecycle::va_live_cell_count(state), 0);

            // Any non-zero value means alive
            va_set_cell(state, 3, 4, 5, 200);
            assert_eq!(va_get_cell(state, 3, 4, 5), 1);

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_out_of_bounds_access() {
        let state = lifecycle::va_create(4, 4, 4, 1);
        unsafe {
            assert_eq!(va_get_cell(state, -1, 0, 0), 0);
            assert_eq!(va_get_cell(state, 4, 0, 0), 0);

            // Should not crash
            va_set_cell(state, -1, 0, 0, 1);
            va_set_cell(state, 4, 0, 0, 1);
            assert_eq!(lifecycle::va_live_cell_count(state), 0);

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_step() {
        let state = lifecycle::va_create(10, 10, 1, 1);
        unsafe {
            // Horizontal blinker
            va_set_cell(state, 4, 5, 0, 1);
            va_set_cell(state, 5, 5, 0, 1);
            va_set_cell(state, 6, 5, 0, 1);

            assert_eq!(va_step(state), 3);
            assert_eq!(lifecycle::va_get_generation(state), 1);
            assert_eq!(va_get_cell(state, 5, 4, 0), 1);
            assert_eq!(va_get_cell(state, 5, 6, 0), 1);
            assert_eq!(va_get_cell(state, 4, 5, 0), 0);

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_seed() {
        let state = lifecycle::va_create_with_rng_seed(20, 20, 5, 1, 7);
        unsafe {
            let live = va_seed(state);
            assert!(live >= 1);
            assert!(live <= 200);
            assert_eq!(live, lifecycle::va_live_cell_count(state));

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_neighbor_queries() {
        let state = lifecycle::va_create(3, 3, 3, 1);
        unsafe {
            for z in 0..3 {
                for y in 0..3 {
                    for x in 0..3 {
                        va_set_cell(state, x, y, z, 1);
                    }
                }
            }

            // Center of a full cube, then a corner
            assert_eq!(va_neighbor_count(state, 13), 26);
            assert_eq!(va_neighbor_count(state, 0), 7);
            assert_eq!(va_cell_vitality(state, 13), 2);

            // Past the end
            assert_eq!(va_neighbor_count(state, 27), -1);
            assert_eq!(va_cell_vitality(state, 27), -1);

            lifecycle::va_destroy(state);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            va_set_cell(ptr::null_mut(), 0, 0, 0, 1); // Should not crash
            assert_eq!(va_get_cell(ptr::null(), 0, 0, 0), 0);
            assert_eq!(va_seed(ptr::null_mut()), 0);
            assert_eq!(va_step(ptr::null_mut()), 0);
            assert_eq!(va_neighbor_count(ptr::null(), 0), -1);
            assert_eq!(va_cell_vitality(ptr::null(), 0), -1);
        }
    }
}
