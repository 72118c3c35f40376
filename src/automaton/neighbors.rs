//! Live-neighbor counting over the 26-cell Moore neighborhood.
//!
//! The neighborhood is walked as three layers: the 8 same-plane neighbors,
//! then the 3x3 block one layer before (z - 1) and one layer behind (z + 1).
//! Every position is bounds-checked per axis before it becomes an index, so a
//! cell on the x = 0 edge never sees the last cell of the previous row.

use super::grid::Grid;

/// In-plane offsets (dx, dy): left, right, up, down, up-left, down-left,
/// up-right, down-right.
const PLANE_OFFSETS: [(i16, i16); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];

/// Count live neighbors of the cell at `index` (0..=26).
///
/// `index` must be in range for `grid`.
pub fn count_live_neighbors(grid: &Grid, index: usize) -> u8 {
    let (x, y, z) = grid.dimensions().coords_of(index);

    let mut count = count_in_plane(grid, x, y, z);
    for layer in [z - 1, z + 1] {
        count += count_in_plane(grid, x, y, layer);
        count += u8::from(probe(grid, x, y, layer));
    }

    count
}

/// The 8 ring neighbors of (x, y) in layer z; the center is not included.
fn count_in_plane(grid: &Grid, x: i16, y: i16, z: i16) -> u8 {
    PLANE_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| probe(grid, x + dx, y + dy, z))
        .count() as u8
}

#[inline]
fn probe(grid: &Grid, x: i16, y: i16, z: i16) -> bool {
    let dims = grid.dimensions();
    if !dims.contains(x, y, z) {
        return false;
    }
    grid.is_alive(dims.index_of(x, y, z) as i64)
}

/// How crowded a cell's neighborhood is, for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vitality {
    /// Fewer than 2 live neighbors.
    Sparse,
    /// 2 or 3 live neighbors.
    Stable,
    /// More than 3 live neighbors.
    Crowded,
}

impl Vitality {
    pub fn classify(neighbors: u8) -> Self {
        match neighbors {
            0 | 1 => Vitality::Sparse,
            2 | 3 => Vitality::Stable,
            _ => Vitality::Crowded,
        }
    }

    /// Stable integer code used across the C ABI.
    pub fn code(self) -> i32 {
        match self {
            Vitality::Sparse => 0,
            Vitality::Stable => 1,
            Vitality::Crowded => 2,
        }
    }
}
