//! Sprite-sheet tiling and Grh resource export
//!
//! An image's pixel dimensions and a tile geometry define an addressable grid.
//! Cells picked from that grid are exported as `Grh` graphic records, one per
//! cell, followed by animation records grouping the cells of each row.

#![forbid(unsafe_code)]

/// Selection serialization into Grh resource text
pub mod export;
/// Image source, clipboard sink, configuration and error handling
pub mod io;
/// Tile grid model and cell selection
pub mod spatial;
/// Command-driven session state
pub mod workspace;

pub use export::{ExportConfig, Exporter};
pub use io::error::{Result, TilerError};
pub use spatial::{Cell, Grid, ImageMetrics, SelectionSet, TileSpec};
pub use workspace::TilerSession;
