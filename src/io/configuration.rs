//! Tile geometry limits and export defaults

// Geometry limits enforced at the input boundary and re-checked by the grid
/// Smallest accepted tile width or height in pixels
pub const MIN_TILE_SIZE: u32 = 4;

/// Tile width and height offered before the user edits them
pub const DEFAULT_TILE_SIZE: u32 = 32;

// Animation playback speed accepted by the engine
/// Slowest animation speed
pub const MIN_ANIMATION_SPEED: u8 = 1;
/// Fastest animation speed
pub const MAX_ANIMATION_SPEED: u8 = 4;
/// Animation speed used until configured
pub const DEFAULT_ANIMATION_SPEED: u8 = MIN_ANIMATION_SPEED;

// Record numbering
/// First record index handed out when none is configured
pub const DEFAULT_INITIAL_INDEX: u32 = 1;
/// Graphic sheet referenced by exported records when none is configured
pub const DEFAULT_GRAPHIC_INDEX: u32 = 1;

// Output grammar
/// Key prefix of every exported line
pub const RECORD_PREFIX: &str = "Grh";
/// Frame count written at the start of a static graphic line
pub const GRAPHIC_FRAME_COUNT: u32 = 1;
/// Separator between the fields of one record
pub const FIELD_SEPARATOR: char = '-';
/// Separator between exported records
pub const RECORD_SEPARATOR: &str = "\n";
