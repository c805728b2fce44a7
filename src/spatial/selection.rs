//! Ordered cell selection keyed by pixel coordinate
//!
//! Cells are kept in toggle order; raster ordering is applied only at export
//! time. Selections stay small (bounded by the visible grid), so membership is
//! a linear scan.

use crate::spatial::grid::Cell;

/// Ordered collection of unique selected cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    cells: Vec<Cell>,
}

impl SelectionSet {
    /// Create an empty selection
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Remove `(x, y)` if selected, otherwise append it
    ///
    /// Returns whether the cell is selected afterwards.
    pub fn toggle(&mut self, x: i64, y: i64) -> bool {
        let cell = Cell::new(x, y);
        if let Some(position) = self.position(cell) {
            self.cells.remove(position);
            false
        } else {
            self.cells.push(cell);
            true
        }
    }

    /// Deselect every cell
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Whether `(x, y)` is selected
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.position(Cell::new(x, y)).is_some()
    }

    /// Selected cells in toggle order
    pub fn snapshot(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of selected cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing is selected
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Move every selected cell by `(dx, dy)` pixels, keeping toggle order
    ///
    /// Used when the grid offset changes so the same logical tiles stay
    /// selected. Translation preserves uniqueness.
    pub fn translate(&mut self, dx: i64, dy: i64) {
        for cell in &mut self.cells {
            *cell = cell.translated(dx, dy);
        }
    }

    fn position(&self, cell: Cell) -> Option<usize> {
        self.cells.iter().position(|&selected| selected == cell)
    }
}
