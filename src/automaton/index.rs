//! Grid dimensions and linear index mapping.
//!
//! Cells are stored x-fastest, then y, then z:
//! `index = x + y * width + z * width * height`.

use crate::error::{ConfigError, MAX_CELLS};

/// Fixed, validated grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: i16,
    height: i16,
    depth: i16,
}

impl Dimensions {
    /// Validate and build dimensions. Every axis must be positive and the
    /// total cell count must fit in [`MAX_CELLS`].
    pub fn new(width: i16, height: i16, depth: i16) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 || depth <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width,
                height,
                depth,
            });
        }

        let cells = width as u64 * height as u64 * depth as u64;
        if cells > MAX_CELLS {
            return Err(ConfigError::TooManyCells {
                cells,
                limit: MAX_CELLS,
            });
        }

        Ok(Dimensions {
            width,
            height,
            depth,
        })
    }

    #[inline]
    pub fn width(&self) -> i16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i16 {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> i16 {
        self.depth
    }

    /// Number of cells in one z layer.
    #[inline]
    pub fn plane(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.plane() * self.depth as usize
    }

    /// Always false: validated dimensions hold at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn contains(&self, x: i16, y: i16, z: i16) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height && z >= 0 && z < self.depth
    }

    /// Calculate the linear index for a 3D coordinate. Coordinates are not
    /// bounds-checked.
    #[inline]
    pub fn index_of(&self, x: i16, y: i16, z: i16) -> usize {
        z as usize * self.plane() + y as usize * self.width as usize + x as usize
    }

    /// Decompose a linear index into `(x, y, z)`. The index is not
    /// bounds-checked; an index past the end yields `z >= depth`.
    #[inline]
    pub fn coords_of(&self, index: usize) -> (i16, i16, i16) {
        let plane = self.plane();
        let z = index / plane;
        let rest = index % plane;
        let y = rest / self.width as usize;
        let x = rest % self.width as usize;
        (x as i16, y as i16, z as i16)
    }

    /// Display-space position of a cell with the grid centered on the origin.
    pub fn centered(&self, index: usize) -> (i32, i32, i32) {
        let (x, y, z) = self.coords_of(index);
        (
            x as i32 - self.width as i32 / 2,
            y as i32 - self.height as i32 / 2,
            z as i32 - self.depth as i32 / 2,
        )
    }
}
