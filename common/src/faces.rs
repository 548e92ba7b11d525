//! Constant face programs, one per plant state.
//!
//! Each state maps to a fixed, hand-composed drawing program in the face
//! area (rows 12-63); the status bar keeps the top strip. The programs are
//! pure data: no state carries numeric parameters into the drawing beyond
//! the constants baked in here.
//!
//! The mapping is an exhaustive `match`, so adding a state refuses to
//! compile until it gets a face.

use crate::config::{EYE_LEFT_X, EYE_RIGHT_X, EYE_Y};
use crate::render::RenderOp::{self, Circle, Glyph, Line, Rect, Triangle};
use crate::state::PlantState;

/// Big round filled eyes, double-stroke U smile.
static HAPPY: &[RenderOp] = &[
    Circle { cx: EYE_LEFT_X, cy: EYE_Y, r: 6, filled: true },
    Circle { cx: EYE_RIGHT_X, cy: EYE_Y, r: 6, filled: true },
    Line { x0: 38, y0: 48, x1: 44, y1: 54 },
    Line { x0: 44, y0: 54, x1: 84, y1: 54 },
    Line { x0: 84, y0: 54, x1: 90, y1: 48 },
    Line { x0: 38, y0: 49, x1: 44, y1: 55 },
    Line { x0: 44, y0: 55, x1: 84, y1: 55 },
    Line { x0: 84, y0: 55, x1: 90, y1: 49 },
];

/// X_X eyes (thick crossed lines), flat mouth, falling teardrop.
static THIRSTY: &[RenderOp] = &[
    // Left X
    Line { x0: 36, y0: 20, x1: 52, y1: 36 },
    Line { x0: 52, y0: 20, x1: 36, y1: 36 },
    Line { x0: 37, y0: 20, x1: 53, y1: 36 },
    Line { x0: 53, y0: 20, x1: 37, y1: 36 },
    Line { x0: 38, y0: 20, x1: 54, y1: 36 },
    Line { x0: 54, y0: 20, x1: 38, y1: 36 },
    // Right X
    Line { x0: 76, y0: 20, x1: 92, y1: 36 },
    Line { x0: 92, y0: 20, x1: 76, y1: 36 },
    Line { x0: 77, y0: 20, x1: 93, y1: 36 },
    Line { x0: 93, y0: 20, x1: 77, y1: 36 },
    Line { x0: 78, y0: 20, x1: 94, y1: 36 },
    Line { x0: 94, y0: 20, x1: 78, y1: 36 },
    // Flat line mouth
    Rect { x: 44, y: 50, w: 40, h: 3 },
    // Teardrop below the right eye
    Triangle { x0: 104, y0: 20, x1: 101, y1: 30, x2: 107, y2: 30 },
    Circle { cx: 104, cy: 32, r: 4, filled: true },
];

/// @_@ dizzy spiral eyes, queasy zigzag mouth, sweat on both sides.
static OVERWATERED: &[RenderOp] = &[
    Circle { cx: EYE_LEFT_X, cy: EYE_Y, r: 10, filled: false },
    Circle { cx: EYE_LEFT_X, cy: EYE_Y, r: 6, filled: false },
    Circle { cx: EYE_LEFT_X, cy: EYE_Y, r: 2, filled: true },
    Circle { cx: EYE_RIGHT_X, cy: EYE_Y, r: 10, filled: false },
    Circle { cx: EYE_RIGHT_X, cy: EYE_Y, r: 6, filled: false },
    Circle { cx: EYE_RIGHT_X, cy: EYE_Y, r: 2, filled: true },
    Line { x0: 36, y0: 50, x1: 44, y1: 46 },
    Line { x0: 44, y0: 46, x1: 52, y1: 54 },
    Line { x0: 52, y0: 54, x1: 60, y1: 46 },
    Line { x0: 60, y0: 46, x1: 68, y1: 54 },
    Line { x0: 68, y0: 54, x1: 76, y1: 46 },
    Line { x0: 76, y0: 46, x1: 84, y1: 50 },
    Circle { cx: 20, cy: 35, r: 2, filled: true },
    Circle { cx: 108, cy: 35, r: 2, filled: true },
];

/// >_< angry brows over dot eyes, inverted-U frown, heat waves above.
static HOT: &[RenderOp] = &[
    // Brows slanting inward
    Line { x0: 30, y0: 17, x1: 56, y1: 23 },
    Line { x0: 30, y0: 18, x1: 56, y1: 24 },
    Line { x0: 30, y0: 19, x1: 56, y1: 25 },
    Line { x0: 98, y0: 17, x1: 72, y1: 23 },
    Line { x0: 98, y0: 18, x1: 72, y1: 24 },
    Line { x0: 98, y0: 19, x1: 72, y1: 25 },
    Circle { cx: 44, cy: 31, r: 4, filled: true },
    Circle { cx: 84, cy: 31, r: 4, filled: true },
    // Frown
    Line { x0: 40, y0: 56, x1: 48, y1: 48 },
    Line { x0: 48, y0: 48, x1: 80, y1: 48 },
    Line { x0: 80, y0: 48, x1: 88, y1: 56 },
    Line { x0: 40, y0: 57, x1: 48, y1: 49 },
    Line { x0: 48, y0: 49, x1: 80, y1: 49 },
    Line { x0: 80, y0: 49, x1: 88, y1: 57 },
    // Heat waves
    Line { x0: 20, y0: 14, x1: 24, y1: 12 },
    Line { x0: 24, y0: 12, x1: 28, y1: 14 },
    Line { x0: 100, y0: 14, x1: 104, y1: 12 },
    Line { x0: 104, y0: 12, x1: 108, y1: 14 },
];

/// O_O wide shocked eyes with pupils, chattering-teeth mouth, shiver marks.
static COLD: &[RenderOp] = &[
    Circle { cx: EYE_LEFT_X, cy: EYE_Y, r: 10, filled: false },
    Circle { cx: EYE_LEFT_X, cy: EYE_Y, r: 11, filled: false },
    Circle { cx: EYE_LEFT_X, cy: EYE_Y, r: 4, filled: true },
    Circle { cx: EYE_RIGHT_X, cy: EYE_Y, r: 10, filled: false },
    Circle { cx: EYE_RIGHT_X, cy: EYE_Y, r: 11, filled: false },
    Circle { cx: EYE_RIGHT_X, cy: EYE_Y, r: 4, filled: true },
    // Zigzag teeth, two strokes thick
    Line { x0: 38, y0: 50, x1: 46, y1: 44 },
    Line { x0: 46, y0: 44, x1: 54, y1: 50 },
    Line { x0: 54, y0: 50, x1: 62, y1: 44 },
    Line { x0: 62, y0: 44, x1: 70, y1: 50 },
    Line { x0: 70, y0: 50, x1: 78, y1: 44 },
    Line { x0: 78, y0: 44, x1: 86, y1: 50 },
    Line { x0: 38, y0: 51, x1: 46, y1: 45 },
    Line { x0: 46, y0: 45, x1: 54, y1: 51 },
    Line { x0: 54, y0: 51, x1: 62, y1: 45 },
    Line { x0: 62, y0: 45, x1: 70, y1: 51 },
    Line { x0: 70, y0: 51, x1: 78, y1: 45 },
    Line { x0: 78, y0: 45, x1: 86, y1: 51 },
    // Shiver marks
    Line { x0: 8, y0: 30, x1: 16, y1: 26 },
    Line { x0: 16, y0: 26, x1: 8, y1: 22 },
    Line { x0: 120, y0: 30, x1: 112, y1: 26 },
    Line { x0: 112, y0: 26, x1: 120, y1: 22 },
];

/// -_- sleeping bar eyes, small mouth, Zzz drifting upper right.
static DARK: &[RenderOp] = &[
    Rect { x: 34, y: 26, w: 20, h: 4 },
    Rect { x: 74, y: 26, w: 20, h: 4 },
    Rect { x: 56, y: 50, w: 16, h: 2 },
    Glyph { x: 102, y: 13, ch: 'Z', large: true },
    Glyph { x: 110, y: 16, ch: 'z', large: false },
    Glyph { x: 116, y: 22, ch: 'z', large: false },
];

/// Squinting triple-slit eyes, wide cheery smile, sun rays in the corners.
static BRIGHT: &[RenderOp] = &[
    Rect { x: 34, y: 22, w: 20, h: 2 },
    Rect { x: 34, y: 27, w: 20, h: 2 },
    Rect { x: 34, y: 32, w: 20, h: 2 },
    Rect { x: 74, y: 22, w: 20, h: 2 },
    Rect { x: 74, y: 27, w: 20, h: 2 },
    Rect { x: 74, y: 32, w: 20, h: 2 },
    Line { x0: 34, y0: 48, x1: 40, y1: 56 },
    Line { x0: 40, y0: 56, x1: 88, y1: 56 },
    Line { x0: 88, y0: 56, x1: 94, y1: 48 },
    Line { x0: 34, y0: 49, x1: 40, y1: 57 },
    Line { x0: 40, y0: 57, x1: 88, y1: 57 },
    Line { x0: 88, y0: 57, x1: 94, y1: 49 },
    Line { x0: 6, y0: 14, x1: 14, y1: 14 },
    Line { x0: 10, y0: 12, x1: 10, y1: 16 },
    Line { x0: 114, y0: 14, x1: 122, y1: 14 },
    Line { x0: 118, y0: 12, x1: 118, y1: 16 },
];

/// Droopy lidded eyes, flat uneasy mouth, droplets around the face.
static HUMID: &[RenderOp] = &[
    Rect { x: 34, y: 28, w: 20, h: 4 },
    Line { x0: 34, y0: 28, x1: 34, y1: 22 },
    Line { x0: 54, y0: 28, x1: 54, y1: 22 },
    Line { x0: 34, y0: 22, x1: 54, y1: 22 },
    Rect { x: 74, y: 28, w: 20, h: 4 },
    Line { x0: 74, y0: 28, x1: 74, y1: 22 },
    Line { x0: 94, y0: 28, x1: 94, y1: 22 },
    Line { x0: 74, y0: 22, x1: 94, y1: 22 },
    Rect { x: 44, y: 50, w: 40, h: 3 },
    Circle { cx: 18, cy: 20, r: 2, filled: true },
    Circle { cx: 110, cy: 24, r: 2, filled: true },
    Circle { cx: 24, cy: 42, r: 2, filled: true },
    Circle { cx: 104, cy: 46, r: 2, filled: true },
];

/// Parched ringed eyes, gasping O mouth, crack lines on the cheeks.
static DRY_AIR: &[RenderOp] = &[
    Circle { cx: EYE_LEFT_X, cy: EYE_Y, r: 8, filled: false },
    Circle { cx: EYE_RIGHT_X, cy: EYE_Y, r: 8, filled: false },
    Circle { cx: EYE_LEFT_X, cy: EYE_Y, r: 3, filled: true },
    Circle { cx: EYE_RIGHT_X, cy: EYE_Y, r: 3, filled: true },
    Circle { cx: 64, cy: 52, r: 6, filled: false },
    Circle { cx: 64, cy: 52, r: 5, filled: false },
    Line { x0: 18, y0: 36, x1: 28, y1: 32 },
    Line { x0: 28, y0: 32, x1: 22, y1: 28 },
    Line { x0: 100, y0: 36, x1: 110, y1: 32 },
    Line { x0: 110, y0: 32, x1: 104, y1: 28 },
];

/// Constant drawing program for one state.
pub fn face_ops(state: PlantState) -> &'static [RenderOp] {
    match state {
        PlantState::Happy => HAPPY,
        PlantState::Thirsty => THIRSTY,
        PlantState::Overwatered => OVERWATERED,
        PlantState::Hot => HOT,
        PlantState::Cold => COLD,
        PlantState::Dark => DARK,
        PlantState::Bright => BRIGHT,
        PlantState::Humid => HUMID,
        PlantState::DryAir => DRY_AIR,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FACE_TOP, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::render::draw_ops;
    use crate::render::test_target::Frame;

    #[test]
    fn test_every_state_has_a_program() {
        for state in PlantState::ALL {
            assert!(!face_ops(state).is_empty(), "{} has no program", state.label());
        }
    }

    #[test]
    fn test_programs_are_distinct() {
        for a in PlantState::ALL {
            for b in PlantState::ALL {
                if a != b {
                    assert_ne!(face_ops(a), face_ops(b), "{} and {} share a program", a.label(), b.label());
                }
            }
        }
    }

    #[test]
    fn test_programs_stay_in_face_area() {
        for state in PlantState::ALL {
            for op in face_ops(state) {
                let (min_x, min_y, max_x, max_y) = op.extent();
                assert!(min_x >= 0 && max_x < SCREEN_WIDTH as i32, "{}: {op:?} exceeds width", state.label());
                assert!(min_y >= FACE_TOP, "{}: {op:?} intrudes on the status bar", state.label());
                assert!(max_y < SCREEN_HEIGHT as i32, "{}: {op:?} exceeds height", state.label());
            }
        }
    }

    #[test]
    fn test_programs_draw_without_error() {
        for state in PlantState::ALL {
            let mut frame = Frame::new();
            draw_ops(face_ops(state), &mut frame).unwrap();
            assert!(frame.lit_count() > 0, "{} drew nothing", state.label());
            assert!(!frame.out_of_bounds, "{} drew outside the canvas", state.label());
            assert_eq!(
                frame.lit_above_row(FACE_TOP as usize),
                0,
                "{} lit pixels in the status strip",
                state.label()
            );
        }
    }
}
