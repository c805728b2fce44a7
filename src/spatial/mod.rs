//! Tile grid model and cell selection
//!
//! This module contains the coordinate space shared by the UI and the exporter:
//! - Image metrics and tile geometry
//! - Grid derivation and cell addressing
//! - The ordered selection of cells

/// Grid derivation and cell addressing
pub mod grid;
/// Ordered, de-duplicated cell selection
pub mod selection;

pub use grid::{Cell, Grid, ImageMetrics, TileSpec};
pub use selection::SelectionSet;
