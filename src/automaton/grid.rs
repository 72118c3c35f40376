//! Flat cell storage and live-cell enumeration.

use std::iter::FusedIterator;

use super::index::Dimensions;

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// A fixed-size 3D grid of binary cells.
#[derive(Clone, Debug)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<u8>, // 0 = dead, 1 = alive
}

impl Grid {
    /// Initialize an all-dead grid with the given dimensions.
    pub fn new(dims: Dimensions) -> Self {
        Grid {
            dims,
            cells: vec![DEAD; dims.len()],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell at `index` is alive. Negative and past-the-end
    /// indices are dead; the grid has hard edges.
    #[inline]
    pub fn is_alive(&self, index: i64) -> bool {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.cells.get(i))
            .is_some_and(|&c| c == ALIVE)
    }

    /// Write a cell, returning whether it was alive before.
    /// Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, alive: bool) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                let was_alive = *cell == ALIVE;
                *cell = if alive { ALIVE } else { DEAD };
                was_alive
            }
            None => false,
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    /// Ascending indices of every live cell. Clone the iterator (or call
    /// again) to restart the enumeration.
    pub fn live_indices(&self) -> LiveIndices<'_> {
        LiveIndices {
            cells: &self.cells,
            next: 0,
        }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Exchange the backing storage with `next`, which must be the same size.
    pub(crate) fn swap_cells(&mut self, next: &mut Vec<u8>) {
        debug_assert_eq!(next.len(), self.cells.len());
        std::mem::swap(&mut self.cells, next);
    }
}

/// Lazy ascending enumeration of live cell indices.
#[derive(Clone, Debug)]
pub struct LiveIndices<'a> {
    cells: &'a [u8],
    next: usize,
}

impl Iterator for LiveIndices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let offset = self.cells[self.next..].iter().position(|&c| c == ALIVE)?;
        let index = self.next + offset;
        self.next = index + 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cells.len() - self.next))
    }
}

impl FusedIterator for LiveIndices<'_> {}
