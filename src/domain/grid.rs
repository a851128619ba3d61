use std::sync::Arc;

use super::{Cell, GridError};

/// Immutable full copy of every cell, row-major.
/// Clones share storage, so history entries cost one allocation per capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    cells: Arc<[Cell]>,
}

impl Snapshot {
    /// A snapshot of `len` unset cells
    pub fn blank(len: usize) -> Self {
        Self::from_cells(vec![Cell::Unset; len])
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells: cells.into() }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

/// GridModel owns the authoritative cell colors and the grid dimensions.
/// Cells are addressed by linear index `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridModel {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridModel {
    /// Create a new grid with every cell unset
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Unset; width * height],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert 2D coordinates to a linear index
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Convert a linear index back to (x, y)
    pub fn coords_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells.len()).then(|| (index % self.width, index / self.width))
    }

    /// Discard all cell state and rebuild the grid at the new size
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::Unset; width * height];
        Ok(())
    }

    pub fn get_cell(&self, index: usize) -> Result<Cell, GridError> {
        self.cells.get(index).copied().ok_or(GridError::OutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    pub fn set_cell(&mut self, index: usize, cell: Cell) -> Result<(), GridError> {
        let len = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(GridError::OutOfRange { index, len })?;
        *slot = cell;
        Ok(())
    }

    /// Reset every cell to unset without changing the size
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Unset);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_cells(self.cells.clone())
    }

    /// Overwrite every cell from a snapshot of the same size
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), GridError> {
        if snapshot.len() != self.cells.len() {
            return Err(GridError::SizeMismatch {
                expected: self.cells.len(),
                actual: snapshot.len(),
            });
        }
        self.cells.copy_from_slice(snapshot.cells());
        Ok(())
    }

    /// Number of cells carrying a color
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_painted()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i % self.width, i / self.width, *cell))
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    match width.checked_mul(height) {
        Some(n) if n > 0 => Ok(()),
        _ => Err(GridError::InvalidDimensions { width, height }),
    }
}
