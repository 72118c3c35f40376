//! C FFI layer for the rendering host.
//!
//! This module exports C ABI functions for use from LuaJIT FFI or any other
//! host that loads the `cdylib`. All functions are marked with `#[no_mangle]`
//! and use `extern "C"`.
//!
//! The actual logic is in [`State`](crate::state::State). These functions are
//! thin wrappers that handle null checks, pointer safety, and C-to-Rust
//! conversions.

pub mod grid;
pub mod lifecycle;
pub mod live;

pub use grid::{
    va_cell_vitality, va_get_cell, va_neighbor_count, va_seed, va_set_cell, va_step,
};
pub use lifecycle::{
    va_create, va_create_with_rng_seed, va_destroy, va_get_generation, va_live_cell_count,
};
pub use live::va_live_indices;
