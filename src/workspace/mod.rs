//! Session state tying the image source, grid, selection and exporter together

/// Stale image load protection
pub mod loader;
/// Command-driven session state
pub mod session;

pub use loader::{LoadToken, LoadTracker};
pub use session::TilerSession;
