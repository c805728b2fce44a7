//! Tile grid derived from image dimensions and tile geometry
//!
//! The grid is never stored: it is recomputed from [`ImageMetrics`] and
//! [`TileSpec`] whenever either changes. Cells are identified by the pixel
//! coordinate of their top-left corner, offset included, because that is the
//! position the export format encodes.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::io::configuration::{DEFAULT_TILE_SIZE, MIN_TILE_SIZE};
use crate::io::error::{Result, TilerError};

/// Natural pixel dimensions of a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageMetrics {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl ImageMetrics {
    /// Create metrics for an image of `width` x `height` pixels
    ///
    /// # Errors
    ///
    /// Returns [`TilerError::InvalidImage`] if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(TilerError::InvalidImage {
                reason: format!("image dimensions {width}x{height} must be non-zero"),
            }),
        }
    }

    /// Image width in pixels
    pub const fn width(&self) -> u32 {
        self.width.get()
    }

    /// Image height in pixels
    pub const fn height(&self) -> u32 {
        self.height.get()
    }
}

/// User-controlled tile geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSpec {
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Horizontal pixel shift applied to every cell
    pub offset_x: i32,
    /// Vertical pixel shift applied to every cell
    pub offset_y: i32,
}

impl Default for TileSpec {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE, DEFAULT_TILE_SIZE)
    }
}

impl TileSpec {
    /// Create a tile spec with no offset
    pub const fn new(tile_width: u32, tile_height: u32) -> Self {
        Self {
            tile_width,
            tile_height,
            offset_x: 0,
            offset_y: 0,
        }
    }

    /// Return a copy shifted by the given pixel offset
    #[must_use]
    pub const fn with_offset(mut self, offset_x: i32, offset_y: i32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Check the tile size against [`MIN_TILE_SIZE`]
    ///
    /// # Errors
    ///
    /// Returns [`TilerError::InvalidGeometry`] naming the first dimension
    /// below the floor
    pub fn validate(&self) -> Result<()> {
        if self.tile_width < MIN_TILE_SIZE {
            return Err(TilerError::InvalidGeometry {
                parameter: "tile_width",
                value: i64::from(self.tile_width),
                minimum: MIN_TILE_SIZE,
            });
        }
        if self.tile_height < MIN_TILE_SIZE {
            return Err(TilerError::InvalidGeometry {
                parameter: "tile_height",
                value: i64::from(self.tile_height),
                minimum: MIN_TILE_SIZE,
            });
        }
        Ok(())
    }

    /// Whether both specs cut tiles of the same size, ignoring offsets
    pub const fn same_tile_size(&self, other: &Self) -> bool {
        self.tile_width == other.tile_width && self.tile_height == other.tile_height
    }
}

/// A grid cell, identified by its top-left pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Left edge in image pixels
    pub x: i64,
    /// Top edge in image pixels
    pub y: i64,
}

impl Cell {
    /// Create a cell at pixel `(x, y)`
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Return this cell moved by `(dx, dy)` pixels
    #[must_use]
    pub const fn translated(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pixel coordinate of the cell at column `col`, row `row`
pub const fn cell_at(col: u32, row: u32, spec: &TileSpec) -> Cell {
    Cell {
        x: col as i64 * spec.tile_width as i64 + spec.offset_x as i64,
        y: row as i64 * spec.tile_height as i64 + spec.offset_y as i64,
    }
}

/// Rectangular tile grid covering an image
///
/// Column and row counts round up, so a trailing partial tile is still a full
/// cell whose rectangle may extend past the image edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    spec: TileSpec,
    cols: u32,
    rows: u32,
}

impl Grid {
    /// Derive the grid for `image` cut by `spec`
    ///
    /// # Errors
    ///
    /// Returns [`TilerError::InvalidGeometry`] if the tile size is below the
    /// floor
    pub fn compute(image: ImageMetrics, spec: TileSpec) -> Result<Self> {
        spec.validate()?;

        Ok(Self {
            spec,
            cols: image.width().div_ceil(spec.tile_width),
            rows: image.height().div_ceil(spec.tile_height),
        })
    }

    /// Number of columns
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Tile geometry the grid was cut with
    pub const fn spec(&self) -> &TileSpec {
        &self.spec
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Cell at the given column and row, if inside the grid
    pub const fn cell_at(&self, col: u32, row: u32) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(cell_at(col, row, &self.spec))
        } else {
            None
        }
    }

    /// All cells, left-to-right then top-to-bottom
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| cell_at(col, row, &self.spec)))
    }

    /// Column and row of `cell`, if it lies on the grid
    pub fn locate(&self, cell: Cell) -> Option<(u32, u32)> {
        let col = axis_index(cell.x, self.spec.offset_x, self.spec.tile_width)?;
        let row = axis_index(cell.y, self.spec.offset_y, self.spec.tile_height)?;
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    /// Whether `cell` is one of this grid's cells
    pub fn contains(&self, cell: Cell) -> bool {
        self.locate(cell).is_some()
    }
}

// Index along one axis when `position` sits exactly on a tile boundary
fn axis_index(position: i64, offset: i32, tile_size: u32) -> Option<u32> {
    let shifted = position - i64::from(offset);
    let size = i64::from(tile_size);
    if shifted < 0 || shifted % size != 0 {
        return None;
    }
    u32::try_from(shifted / size).ok()
}
