//! Selection-to-text export
//!
//! Export runs in four passes over the selection:
//! 1. Sort cells into raster order (`x + y * image_width`)
//! 2. Number one graphic record per cell from `initial_index`
//! 3. Group graphic records sharing an exact pixel `y` into animations
//! 4. Number animations after the last graphic and join every line
//!
//! Numbering always restarts from `initial_index`, so re-exporting the same
//! selection yields byte-identical text.

use crate::export::config::ExportConfig;
use crate::export::records::{AnimationRecord, GraphicRecord, ResourceRecord};
use crate::io::configuration::RECORD_SEPARATOR;
use crate::io::error::{Result, TilerError, computation_error};
use crate::spatial::grid::{Cell, ImageMetrics, TileSpec};

/// Serializes selections cut from one image with fixed geometry and settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exporter {
    image: ImageMetrics,
    spec: TileSpec,
    config: ExportConfig,
}

impl Exporter {
    /// Create an exporter for tiles of `spec` cut from `image`
    pub const fn new(image: ImageMetrics, spec: TileSpec, config: ExportConfig) -> Self {
        Self {
            image,
            spec,
            config,
        }
    }

    /// Build graphic records followed by row animations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selection is empty
    /// - The tile spec or export config fails validation
    /// - Record numbering would exceed `u32::MAX`
    pub fn build(&self, selection: &[Cell]) -> Result<Vec<ResourceRecord>> {
        if selection.is_empty() {
            return Err(TilerError::EmptySelection);
        }
        self.spec.validate()?;
        self.config.validate()?;

        let ordered = raster_order(selection, self.image.width());

        let graphics = ordered
            .iter()
            .enumerate()
            .map(|(position, cell)| -> Result<GraphicRecord> {
                Ok(GraphicRecord {
                    index: record_index(self.config.initial_index, position)?,
                    x: cell.x,
                    y: cell.y,
                    width: self.spec.tile_width,
                    height: self.spec.tile_height,
                    sheet: self.config.graphic_index,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let animations = group_by_row(&graphics)
            .into_iter()
            .enumerate()
            .map(|(position, frame_indices)| -> Result<AnimationRecord> {
                Ok(AnimationRecord {
                    index: record_index(self.config.initial_index, graphics.len() + position)?,
                    frame_indices,
                    speed: self.config.animation_speed,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut records = Vec::with_capacity(graphics.len() + animations.len());
        records.extend(graphics.into_iter().map(ResourceRecord::from));
        records.extend(animations.into_iter().map(ResourceRecord::from));
        Ok(records)
    }

    /// Build and serialize the selection into newline-separated lines
    ///
    /// # Errors
    ///
    /// Propagates every error of [`Exporter::build`]
    pub fn export(&self, selection: &[Cell]) -> Result<String> {
        let records = self.build(selection)?;
        let text = serialize(&records);

        tracing::info!(
            cells = selection.len(),
            records = records.len(),
            sheet = self.config.graphic_index,
            "exported selection"
        );
        Ok(text)
    }
}

/// Export `selection` cut from `image` with `spec` and `config`
///
/// # Errors
///
/// Propagates every error of [`Exporter::build`]
pub fn export(
    selection: &[Cell],
    image: ImageMetrics,
    spec: TileSpec,
    config: ExportConfig,
) -> Result<String> {
    Exporter::new(image, spec, config).export(selection)
}

/// Raster position of `cell` in an image `image_width` pixels wide
pub fn raster_key(cell: Cell, image_width: u32) -> i128 {
    i128::from(cell.x) + i128::from(cell.y) * i128::from(image_width)
}

/// Sort cells left-to-right, top-to-bottom and drop duplicates
///
/// Offsets can push `x` outside `[0, image_width)`, letting two cells share a
/// raster key; such ties order by `y` then `x`.
pub fn raster_order(selection: &[Cell], image_width: u32) -> Vec<Cell> {
    let mut ordered = selection.to_vec();
    ordered.sort_by_key(|&cell| (raster_key(cell, image_width), cell.y, cell.x));
    ordered.dedup();
    ordered
}

/// Serialize records one per line, without a trailing separator
pub fn serialize(records: &[ResourceRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(RECORD_SEPARATOR)
}

// Frame lists keyed by exact `y`, in first-seen order
fn group_by_row(graphics: &[GraphicRecord]) -> Vec<Vec<u32>> {
    let mut groups: Vec<(i64, Vec<u32>)> = Vec::new();

    for graphic in graphics {
        match groups.iter_mut().find(|(y, _)| *y == graphic.y) {
            Some((_, frames)) => frames.push(graphic.index),
            None => groups.push((graphic.y, vec![graphic.index])),
        }
    }

    groups.into_iter().map(|(_, frames)| frames).collect()
}

fn record_index(initial_index: u32, position: usize) -> Result<u32> {
    u32::try_from(position)
        .ok()
        .and_then(|position| initial_index.checked_add(position))
        .ok_or_else(|| {
            computation_error(
                "record numbering",
                &format!("index {initial_index} + {position} exceeds u32::MAX"),
            )
        })
}
