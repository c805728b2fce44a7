//! Owned tiling state driven by explicit commands
//!
//! A rendering layer issues commands (`request_image`, `set_tile_spec`,
//! `toggle_cell`, ...) in response to user and I/O events and reads the
//! resulting grid and selection back. All mutation is exclusive through
//! `&mut self`; nothing here blocks or spawns.

use std::path::Path;

use crate::export::config::ExportConfig;
use crate::export::exporter::Exporter;
use crate::io::clipboard::ClipboardSink;
use crate::io::error::{Result, TilerError, invalid_parameter};
use crate::io::image::read_metrics;
use crate::spatial::grid::{Cell, Grid, ImageMetrics, TileSpec};
use crate::spatial::selection::SelectionSet;
use crate::workspace::loader::{LoadToken, LoadTracker};

/// Image, geometry, selection and export settings of one tiling session
///
/// Lifecycle rules:
/// - A new image request clears the metrics and the selection
/// - A tile size change clears the selection
/// - An offset-only change moves the selection with the grid
#[derive(Debug, Clone, Default)]
pub struct TilerSession {
    image: Option<ImageMetrics>,
    spec: TileSpec,
    config: ExportConfig,
    selection: SelectionSet,
    loads: LoadTracker,
}

impl TilerSession {
    /// Create a session with the given geometry and export settings
    ///
    /// # Errors
    ///
    /// Returns an error if either `spec` or `config` fails validation
    pub fn new(spec: TileSpec, config: ExportConfig) -> Result<Self> {
        spec.validate()?;
        config.validate()?;

        Ok(Self {
            spec,
            config,
            ..Self::default()
        })
    }

    /// Metrics of the current image, once loaded
    pub const fn image(&self) -> Option<ImageMetrics> {
        self.image
    }

    /// Whether an image is loaded and grid commands are live
    pub const fn is_ready(&self) -> bool {
        self.image.is_some()
    }

    /// Current tile geometry
    pub const fn tile_spec(&self) -> &TileSpec {
        &self.spec
    }

    /// Current export settings
    pub const fn export_config(&self) -> &ExportConfig {
        &self.config
    }

    /// Current selection
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Announce that a new image is being decoded
    ///
    /// The session is not ready until [`TilerSession::complete_image_load`]
    /// is called with the returned token.
    pub fn request_image(&mut self) -> LoadToken {
        let token = self.loads.begin();
        self.image = None;
        self.selection.clear();

        tracing::debug!(generation = token.generation(), "image load requested");
        token
    }

    /// Deliver the outcome of the load started with `token`
    ///
    /// Returns `Ok(false)` without touching state when `token` was superseded
    /// by a newer request.
    ///
    /// # Errors
    ///
    /// Returns the load error for the current request; the session then stays
    /// not ready
    pub fn complete_image_load(
        &mut self,
        token: LoadToken,
        result: Result<ImageMetrics>,
    ) -> Result<bool> {
        if !self.loads.finish(token) {
            tracing::warn!(
                generation = token.generation(),
                pending = ?self.loads.pending().map(LoadToken::generation),
                "ignoring stale image load"
            );
            return Ok(false);
        }

        let metrics = result?;
        self.image = Some(metrics);
        self.selection.clear();

        tracing::info!(
            width = metrics.width(),
            height = metrics.height(),
            "image ready"
        );
        Ok(true)
    }

    /// Read an image header from a file and make it the current image
    ///
    /// The header is read before any state changes, so an unreadable file
    /// leaves the current image and selection in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the image header cannot be read
    pub fn load_image_file(&mut self, path: &Path) -> Result<ImageMetrics> {
        let metrics = read_metrics(path)?;
        let token = self.request_image();
        self.complete_image_load(token, Ok(metrics))?;
        self.image.ok_or(TilerError::NotReady)
    }

    /// Replace the tile geometry
    ///
    /// An invalid spec is rejected and the previous one retained.
    ///
    /// # Errors
    ///
    /// Returns [`TilerError::InvalidGeometry`] if the tile size is below the
    /// floor
    pub fn set_tile_spec(&mut self, spec: TileSpec) -> Result<()> {
        spec.validate()?;

        if !spec.same_tile_size(&self.spec) {
            self.selection.clear();
        } else if spec != self.spec {
            let dx = i64::from(spec.offset_x) - i64::from(self.spec.offset_x);
            let dy = i64::from(spec.offset_y) - i64::from(self.spec.offset_y);
            self.selection.translate(dx, dy);
        }

        tracing::debug!(?spec, selected = self.selection.len(), "tile spec updated");
        self.spec = spec;
        Ok(())
    }

    /// Replace the export settings
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation; the previous settings
    /// are retained
    pub fn set_export_config(&mut self, config: ExportConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Grid of the current image
    ///
    /// # Errors
    ///
    /// Returns [`TilerError::NotReady`] before an image has loaded
    pub fn grid(&self) -> Result<Grid> {
        let image = self.image.ok_or(TilerError::NotReady)?;
        Grid::compute(image, self.spec)
    }

    /// Toggle the grid cell whose top-left corner is `cell`
    ///
    /// Returns whether the cell is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No image has loaded yet
    /// - `cell` is not a cell of the current grid
    pub fn toggle_cell(&mut self, cell: Cell) -> Result<bool> {
        let grid = self.grid()?;
        if !grid.contains(cell) {
            return Err(invalid_parameter(
                "cell",
                &cell,
                &"not a cell of the current grid",
            ));
        }

        let selected = self.selection.toggle(cell.x, cell.y);
        tracing::debug!(x = cell.x, y = cell.y, selected, "cell toggled");
        Ok(selected)
    }

    /// Toggle the cell at column `col`, row `row`
    ///
    /// # Errors
    ///
    /// Returns an error if no image has loaded yet or the position is outside
    /// the grid
    pub fn toggle_grid_cell(&mut self, col: u32, row: u32) -> Result<bool> {
        let grid = self.grid()?;
        let cell = grid.cell_at(col, row).ok_or_else(|| {
            invalid_parameter(
                "cell",
                &format!("column {col}, row {row}"),
                &format!("grid is {}x{}", grid.cols(), grid.rows()),
            )
        })?;
        self.toggle_cell(cell)
    }

    /// Whether `cell` is selected
    pub fn is_selected(&self, cell: Cell) -> bool {
        self.selection.contains(cell.x, cell.y)
    }

    /// Exporter bound to the current image, geometry and settings
    ///
    /// # Errors
    ///
    /// Returns [`TilerError::NotReady`] before an image has loaded
    pub fn exporter(&self) -> Result<Exporter> {
        let image = self.image.ok_or(TilerError::NotReady)?;
        Ok(Exporter::new(image, self.spec, self.config))
    }

    /// Serialize the current selection
    ///
    /// # Errors
    ///
    /// Returns [`TilerError::NotReady`] before an image has loaded and
    /// [`TilerError::EmptySelection`] when nothing is selected
    pub fn export_text(&self) -> Result<String> {
        self.exporter()?.export(self.selection.snapshot())
    }

    /// Serialize the current selection and hand it to `sink`
    ///
    /// The sink is not called when the export fails. The selection is left
    /// unchanged either way so a rejected write can be retried.
    ///
    /// # Errors
    ///
    /// Returns the export error, or [`TilerError::ClipboardUnavailable`] if
    /// the sink rejected the text
    pub fn copy_to_clipboard(&self, sink: &mut impl ClipboardSink) -> Result<()> {
        let text = self.export_text()?;
        sink.write_text(&text).inspect_err(|e| {
            tracing::warn!(error = %e, "clipboard write failed");
        })
    }
}
