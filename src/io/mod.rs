//! Input/output collaborators, configuration and error handling

/// Clipboard sink abstraction
pub mod clipboard;
/// Geometry limits and export defaults
pub mod configuration;
/// Error types for all operations
pub mod error;
/// Image dimension reading
pub mod image;
