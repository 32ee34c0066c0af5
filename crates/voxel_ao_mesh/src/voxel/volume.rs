//! Dense voxel volume.
//!
//! A volume is a fixed-size cuboid of colored cells. Reads are total: any
//! coordinate outside the volume resolves to [`Cell::EMPTY`], which is what
//! makes faces on the volume boundary visible.

use bytemuck::{Pod, Zeroable};

use crate::error::{VolumeError, VolumeResult};

/// Largest supported size along any axis.
///
/// Vertex positions are `u8` and run one past the last cell, so 255 cells
/// is the ceiling.
pub const MAX_DIMENSION: usize = u8::MAX as usize;

/// Edge length of the reference chunk.
pub const DEFAULT_DIMENSION: usize = 16;

/// Alpha value of an occupied cell.
const OPAQUE: u8 = u8::MAX;

/// A single cell - packed into 4 bytes (RGBA).
///
/// Alpha 0 means empty and 255 means opaque. Nothing in between is ever
/// produced, so occupancy and alpha are the same bit of information.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// 0 = empty, 255 = opaque.
    pub a: u8,
}

impl Cell {
    /// Empty cell. Also the sentinel returned for out-of-range reads.
    pub const EMPTY: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// Creates an opaque cell with the given color.
    #[inline]
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: OPAQUE }
    }

    /// Returns true if the cell blocks light and hides neighboring faces.
    #[inline]
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        self.a != 0
    }

    /// Returns the stored color.
    ///
    /// Meaningless for empty cells.
    #[inline]
    #[must_use]
    pub const fn color(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A dense `width x height x depth` grid of cells.
///
/// Cells are stored in Y-Z-X order so that the mesher's ascending
/// `(y, z, x)` sweep walks memory linearly:
/// `cells[(y * depth + z) * width + x]`.
#[derive(Clone, PartialEq, Eq)]
pub struct VoxelVolume {
    width: usize,
    height: usize,
    depth: usize,
    cells: Box<[Cell]>,
    /// Number of occupied cells (for quick empty/full checks).
    occupied_count: usize,
}

impl VoxelVolume {
    /// Creates an all-empty volume.
    ///
    /// # Errors
    /// Returns [`VolumeError::InvalidDimensions`] if any axis is zero or
    /// larger than [`MAX_DIMENSION`].
    pub fn new(width: usize, height: usize, depth: usize) -> VolumeResult<Self> {
        let valid = |n: usize| (1..=MAX_DIMENSION).contains(&n);
        if !(valid(width) && valid(height) && valid(depth)) {
            return Err(VolumeError::InvalidDimensions { width, height, depth });
        }
        Ok(Self {
            width,
            height,
            depth,
            cells: vec![Cell::EMPTY; width * height * depth].into_boxed_slice(),
            occupied_count: 0,
        })
    }

    /// Creates an empty `n x n x n` volume.
    ///
    /// # Errors
    /// See [`VoxelVolume::new`].
    pub fn cube(n: usize) -> VolumeResult<Self> {
        Self::new(n, n, n)
    }

    /// Size along X.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Size along Y.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Size along Z.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of cells, occupied or not.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell is occupied.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupied_count == 0
    }

    /// Returns true if every cell is occupied.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count == self.cells.len()
    }

    /// Number of occupied cells.
    #[inline]
    #[must_use]
    pub const fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    /// Linear index for an in-range coordinate, `None` otherwise.
    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        let z = usize::try_from(z).ok().filter(|&z| z < self.depth)?;
        Some((y * self.depth + z) * self.width + x)
    }

    /// Returns true if the coordinate lies inside the volume.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.index(x, y, z).is_some()
    }

    /// Reads a cell.
    ///
    /// Coordinates may be negative or past the far edge; those resolve to
    /// [`Cell::EMPTY`] instead of failing.
    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Cell {
        self.index(x, y, z).map_or(Cell::EMPTY, |idx| self.cells[idx])
    }

    /// Shorthand for `get(x, y, z).is_occupied()`.
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        self.get(x, y, z).is_occupied()
    }

    /// Writes an opaque cell with the given color.
    ///
    /// # Errors
    /// Returns [`VolumeError::OutOfBounds`] if the coordinate is outside the
    /// volume. Nothing is written in that case.
    pub fn set(&mut self, x: i32, y: i32, z: i32, color: [u8; 3]) -> VolumeResult<()> {
        let [r, g, b] = color;
        self.set_cell(x, y, z, Cell::opaque(r, g, b))
    }

    /// Clears a cell back to empty.
    ///
    /// # Errors
    /// Returns [`VolumeError::OutOfBounds`] if the coordinate is outside the
    /// volume.
    pub fn clear(&mut self, x: i32, y: i32, z: i32) -> VolumeResult<()> {
        self.set_cell(x, y, z, Cell::EMPTY)
    }

    /// Writes a raw cell.
    ///
    /// # Errors
    /// Returns [`VolumeError::OutOfBounds`] if the coordinate is outside the
    /// volume.
    pub fn set_cell(&mut self, x: i32, y: i32, z: i32, cell: Cell) -> VolumeResult<()> {
        let idx = self.index(x, y, z).ok_or(VolumeError::OutOfBounds {
            x,
            y,
            z,
            width: self.width,
            height: self.height,
            depth: self.depth,
        })?;
        let old = self.cells[idx];

        if old.is_occupied() && !cell.is_occupied() {
            self.occupied_count -= 1;
        } else if !old.is_occupied() && cell.is_occupied() {
            self.occupied_count += 1;
        }

        self.cells[idx] = cell;
        Ok(())
    }

    /// Resets every cell to empty.
    pub fn clear_all(&mut self) {
        self.cells.fill(Cell::EMPTY);
        self.occupied_count = 0;
    }

    /// Returns the cell data as bytes (RGBA per cell, Y-Z-X order).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}

impl std::fmt::Debug for VoxelVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoxelVolume")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("depth", &self.depth)
            .field("occupied_count", &self.occupied_count)
            .finish_non_exhaustive()
    }
}
