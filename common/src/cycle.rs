//! Per-refresh frame composition.
//!
//! One display cycle combines the status bar strip with the face program
//! for the classified state. The result is a single ordered op list handed
//! to the display collaborator and dropped afterwards.

use crate::faces::face_ops;
use crate::render::FrameOps;
use crate::state::PlantState;
use crate::statusbar::compose_status_bar;

/// Compose the complete op list for one refresh.
///
/// Status bar first, face second; later ops paint over earlier ones, so
/// the face can never be occluded by the strip.
pub fn compose_frame(state: PlantState, link_up: bool, battery_percent: i32, species: &str) -> FrameOps {
    let mut frame = FrameOps::new();
    // Both sources fit the frame buffer by construction.
    let _ = frame.extend_from_slice(&compose_status_bar(link_up, battery_percent, species));
    let _ = frame.extend_from_slice(face_ops(state));
    frame
}

// =============================================================================
// Unit Tests
// =============================================================================
