//! Error taxonomy shared by the grid, selection, export and session layers
//!
//! Every variant is recoverable: the operation that reports it leaves prior
//! state untouched so the caller can correct its input and retry.

use std::path::PathBuf;

/// Main error type for all tiling and export operations
#[derive(Debug, thiserror::Error)]
pub enum TilerError {
    /// Image metrics have not arrived yet
    ///
    /// Grid and selection commands are inert until an image load completes.
    #[error("No image is ready yet")]
    NotReady,

    /// Tile geometry below the accepted floor
    #[error("Invalid geometry '{parameter}' = {value}: must be at least {minimum}")]
    InvalidGeometry {
        /// Name of the rejected dimension
        parameter: &'static str,
        /// Provided value
        value: i64,
        /// Smallest accepted value
        minimum: u32,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Image metrics cannot describe a grid
    #[error("Invalid image: {reason}")]
    InvalidImage {
        /// Description of what's wrong with the image
        reason: String,
    },

    /// Export requested with no selected cells
    #[error("Nothing selected: select at least one tile before exporting")]
    EmptySelection,

    /// Clipboard sink rejected the write
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable {
        /// Reason reported by the sink
        reason: String,
    },

    /// Failed to read an image from the filesystem
    #[error("Failed to load image '{}': {source}", .path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image error
        #[source]
        source: image::ImageError,
    },

    /// Failed to decode an in-memory image
    #[error("Failed to decode image: {source}")]
    ImageDecode {
        /// Underlying image error
        #[source]
        source: image::ImageError,
    },

    /// Numerical computation produced an unrepresentable result
    #[error("Computation error in {operation}: {reason}")]
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilerError>;

impl From<image::ImageError> for TilerError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilerError {
    TilerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> TilerError {
    TilerError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
