//! Per-export numbering and playback settings

use serde::{Deserialize, Serialize};

use crate::io::configuration::{
    DEFAULT_ANIMATION_SPEED, DEFAULT_GRAPHIC_INDEX, DEFAULT_INITIAL_INDEX, MAX_ANIMATION_SPEED,
    MIN_ANIMATION_SPEED,
};
use crate::io::error::{Result, invalid_parameter};

/// Settings applied to every record of one export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Graphic sheet referenced by every static record
    pub graphic_index: u32,
    /// Playback speed written at the end of every animation record
    pub animation_speed: u8,
    /// Index given to the first record
    pub initial_index: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            graphic_index: DEFAULT_GRAPHIC_INDEX,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            initial_index: DEFAULT_INITIAL_INDEX,
        }
    }
}

impl ExportConfig {
    /// Check speed and starting index bounds
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `animation_speed` is outside `MIN_ANIMATION_SPEED..=MAX_ANIMATION_SPEED`
    /// - `initial_index` is zero
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ANIMATION_SPEED..=MAX_ANIMATION_SPEED).contains(&self.animation_speed) {
            return Err(invalid_parameter(
                "animation_speed",
                &self.animation_speed,
                &format!("must be between {MIN_ANIMATION_SPEED} and {MAX_ANIMATION_SPEED}"),
            ));
        }

        if self.initial_index == 0 {
            return Err(invalid_parameter(
                "initial_index",
                &self.initial_index,
                &"must be at least 1",
            ));
        }

        Ok(())
    }
}
