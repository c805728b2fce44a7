//! Serialization of a selection into Grh resource text

/// Numbering and playback settings
pub mod config;
/// Ordering, grouping and serialization of selected cells
pub mod exporter;
/// Record types and their line encoding
pub mod records;

pub use config::ExportConfig;
pub use exporter::{Exporter, export};
pub use records::{AnimationRecord, GraphicRecord, ResourceRecord};
