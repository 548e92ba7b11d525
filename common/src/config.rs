//! Canvas layout and cadence constants.
//!
//! The layout targets a 128x64 SSD1306-class monochrome panel. All face and
//! status-bar coordinates are expressed against this fixed frame and must
//! not be rescaled if the physical panel differs; the compositions are not
//! resolution-independent.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

// =============================================================================
// Status Bar Layout
// =============================================================================

/// Row of the divider line separating the status bar from the face area.
pub const DIVIDER_Y: i32 = 10;

/// Side length of the square box holding a status icon.
pub const ICON_SIZE: i32 = 10;

/// Battery outline top-left X (outline is 16x8 at the right edge).
pub const BATTERY_X: i32 = 110;

/// Battery outline top-left Y.
pub const BATTERY_Y: i32 = 1;

/// Maximum fill-bar width inside the battery outline, in pixels.
pub const BATTERY_BAR_MAX: i32 = 12;

/// Species labels longer than this are truncated (13 chars + marker).
pub const SPECIES_MAX_CHARS: usize = 14;

// =============================================================================
// Face Area Layout
// =============================================================================

/// First row of the face area (rows above belong to the status bar).
pub const FACE_TOP: i32 = 12;

/// Eye line Y shared by most faces.
pub const EYE_Y: i32 = 28;

/// Left eye center X.
pub const EYE_LEFT_X: i32 = 44;

/// Right eye center X.
pub const EYE_RIGHT_X: i32 = 84;

// =============================================================================
// Cadence Configuration
// =============================================================================

/// Telemetry tick period in milliseconds (acquire -> classify -> render -> upload).
pub const TICK_PERIOD_MS: u64 = 1_000;

/// Threshold re-sync interval, measured in ticks (30 s at the 1 s cadence).
pub const THRESHOLD_SYNC_TICKS: u32 = 30;
