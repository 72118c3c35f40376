//! Live-cell export for display reconstruction.

use crate::state::State;

/// Copies live cell indices, in ascending order, into `out_buf`.
///
/// At most `capacity` indices are written. Call `va_live_cell_count` first to
/// size the buffer; a short buffer receives the lowest indices.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to at least `capacity` writable `u32`s, or be null
///
/// # Returns
/// Number of indices written, or 0 if either pointer is null.
#[no_mangle]
pub unsafe extern "C" fn va_live_indices(
    ptr: *const State,
    out_buf: *mut u32,
    capacity: u64,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let state = &*ptr;
    let out = std::slice::from_raw_parts_mut(out_buf, capacity as usize);

    let mut written = 0;
    for (slot, idx) in out.iter_mut().zip(state.live_indices()) {
        // Grid size is capped at u32::MAX cells.
        *slot = idx as u32;
        written += 1;
    }

    written
}
