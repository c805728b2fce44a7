//! Resource records and their line encoding
//!
//! Static graphic: `Grh<index>=1-<sheet>-<x>-<y>-<width>-<height>`
//!
//! Animation: `Grh<index>=<count>-<frame1>-...-<frameN>-<speed>`

use std::fmt;

use crate::io::configuration::{FIELD_SEPARATOR, GRAPHIC_FRAME_COUNT, RECORD_PREFIX};

/// One static tile of a graphic sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphicRecord {
    /// Record index
    pub index: u32,
    /// Left edge in sheet pixels
    pub x: i64,
    /// Top edge in sheet pixels
    pub y: i64,
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
    /// Graphic sheet the tile is cut from
    pub sheet: u32,
}

impl fmt::Display for GraphicRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = FIELD_SEPARATOR;
        write!(
            f,
            "{RECORD_PREFIX}{}={GRAPHIC_FRAME_COUNT}{s}{}{s}{}{s}{}{s}{}{s}{}",
            self.index, self.sheet, self.x, self.y, self.width, self.height
        )
    }
}

/// Frame sequence over previously exported graphic records
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnimationRecord {
    /// Record index
    pub index: u32,
    /// Graphic record indices in playback order
    pub frame_indices: Vec<u32>,
    /// Playback speed
    pub speed: u8,
}

impl fmt::Display for AnimationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = FIELD_SEPARATOR;
        write!(f, "{RECORD_PREFIX}{}={}", self.index, self.frame_indices.len())?;
        for frame in &self.frame_indices {
            write!(f, "{s}{frame}")?;
        }
        write!(f, "{s}{}", self.speed)
    }
}

/// Any exported record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceRecord {
    /// Static tile
    Graphic(GraphicRecord),
    /// Row animation
    Animation(AnimationRecord),
}

impl ResourceRecord {
    /// Record index, unique within one export
    pub const fn index(&self) -> u32 {
        match self {
            Self::Graphic(graphic) => graphic.index,
            Self::Animation(animation) => animation.index,
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graphic(graphic) => fmt::Display::fmt(graphic, f),
            Self::Animation(animation) => fmt::Display::fmt(animation, f),
        }
    }
}

impl From<GraphicRecord> for ResourceRecord {
    fn from(record: GraphicRecord) -> Self {
        Self::Graphic(record)
    }
}

impl From<AnimationRecord> for ResourceRecord {
    fn from(record: AnimationRecord) -> Self {
        Self::Animation(record)
    }
}
