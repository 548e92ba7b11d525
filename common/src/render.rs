//! Drawing primitives and op buffers.
//!
//! A [`RenderOp`] is one abstract primitive on the fixed 128x64 canvas.
//! Face programs and the status bar composer emit ordered op lists into
//! `heapless::Vec` buffers each refresh; the display collaborator executes
//! them immediately and nothing is retained across cycles.
//!
//! Ops are generic over `DrawTarget<Color = BinaryColor>`, so the same
//! programs run against hardware framebuffers and the desktop simulator.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Baseline, Text};
use profont::{PROFONT_14_POINT, PROFONT_7_POINT};

/// Font for small glyphs (status bar label, small accents).
pub const FONT_SMALL: MonoFont<'static> = PROFONT_7_POINT;

/// Font for large glyphs (the big sleepy "Z").
pub const FONT_LARGE: MonoFont<'static> = PROFONT_14_POINT;

// =============================================================================
// Op Buffers
// =============================================================================

/// Op buffer for the status bar strip.
pub type StatusOps = heapless::Vec<RenderOp, 32>;

/// Op buffer for one full refresh (status bar + face).
pub type FrameOps = heapless::Vec<RenderOp, 64>;

// =============================================================================
// RenderOp
// =============================================================================

/// One abstract drawing primitive, produced fresh each cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOp {
    /// Circle centered on `(cx, cy)`; filled disc or 1px outline.
    Circle { cx: i32, cy: i32, r: u32, filled: bool },
    /// 1px line segment.
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    /// Filled axis-aligned rectangle, `(x, y)` top-left.
    Rect { x: i32, y: i32, w: u32, h: u32 },
    /// Filled triangle.
    Triangle { x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32 },
    /// Single text glyph, `(x, y)` top-left of the character box.
    Glyph { x: i32, y: i32, ch: char, large: bool },
}

impl RenderOp {
    /// Execute this op against a monochrome draw target.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let fill = PrimitiveStyle::with_fill(BinaryColor::On);
        let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        match *self {
            Self::Circle { cx, cy, r, filled } => {
                // Radius-style circle: diameter 2r+1 keeps the center pixel
                // centered, matching the hand-tuned face coordinates.
                let circle = Circle::with_center(Point::new(cx, cy), 2 * r + 1);
                circle.into_styled(if filled { fill } else { stroke }).draw(target)
            }
            Self::Line { x0, y0, x1, y1 } => Line::new(Point::new(x0, y0), Point::new(x1, y1))
                .into_styled(stroke)
                .draw(target),
            Self::Rect { x, y, w, h } => Rectangle::new(Point::new(x, y), Size::new(w, h))
                .into_styled(fill)
                .draw(target),
            Self::Triangle { x0, y0, x1, y1, x2, y2 } => {
                Triangle::new(Point::new(x0, y0), Point::new(x1, y1), Point::new(x2, y2))
                    .into_styled(fill)
                    .draw(target)
            }
            Self::Glyph { x, y, ch, large } => {
                let font = if large { &FONT_LARGE } else { &FONT_SMALL };
                let style = MonoTextStyle::new(font, BinaryColor::On);
                let mut buf = [0u8; 4];
                let s: &str = ch.encode_utf8(&mut buf);
                Text::with_baseline(s, Point::new(x, y), style, Baseline::Top)
                    .draw(target)
                    .map(|_| ())
            }
        }
    }

    /// Conservative bounding box of this op, `(min_x, min_y, max_x, max_y)`.
    pub fn extent(&self) -> (i32, i32, i32, i32) {
        match *self {
            Self::Circle { cx, cy, r, .. } => {
                let r = r as i32;
                (cx - r, cy - r, cx + r, cy + r)
            }
            Self::Line { x0, y0, x1, y1 } => (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)),
            Self::Rect { x, y, w, h } => (x, y, x + w as i32 - 1, y + h as i32 - 1),
            Self::Triangle { x0, y0, x1, y1, x2, y2 } => (
                x0.min(x1).min(x2),
                y0.min(y1).min(y2),
                x0.max(x1).max(x2),
                y0.max(y1).max(y2),
            ),
            Self::Glyph { x, y, large, .. } => {
                let font = if large { &FONT_LARGE } else { &FONT_SMALL };
                let size = font.character_size;
                (x, y, x + size.width as i32 - 1, y + size.height as i32 - 1)
            }
        }
    }
}

/// Execute a whole op list in order.
pub fn draw_ops<D>(ops: &[RenderOp], target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for op in ops {
        op.draw(target)?;
    }
    Ok(())
}

// =============================================================================
// Test Support
// =============================================================================


// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::test_target::Frame;
    use super::*;

    #[test]
    fn test_filled_circle_lights_disc() {
        let mut frame = Frame::new();
        RenderOp::Circle { cx: 20, cy: 20, r: 3, filled: true }
            .draw(&mut frame)
            .unwrap();
        // A filled radius-3 disc covers more than its outline would.
        assert!(frame.lit_count() > 20, "expected a solid disc, got {}", frame.lit_count());
        assert!(!frame.out_of_bounds);
    }

    #[test]
    fn test_outline_circle_is_hollow() {
        let mut outline = Frame::new();
        RenderOp::Circle { cx: 20, cy: 20, r: 5, filled: false }
            .draw(&mut outline)
            .unwrap();
        let mut filled = Frame::new();
        RenderOp::Circle { cx: 20, cy: 20, r: 5, filled: true }
            .draw(&mut filled)
            .unwrap();
        assert!(outline.lit_count() < filled.lit_count());
    }

    #[test]
    fn test_rect_pixel_count() {
        let mut frame = Frame::new();
        RenderOp::Rect { x: 10, y: 10, w: 8, h: 3 }.draw(&mut frame).unwrap();
        assert_eq!(frame.lit_count(), 24);
    }

    #[test]
    fn test_line_endpoints_lit() {
        let mut frame = Frame::new();
        RenderOp::Line { x0: 0, y0: 0, x1: 9, y1: 9 }.draw(&mut frame).unwrap();
        assert_eq!(frame.lit_count(), 10, "45-degree line lights one pixel per row");
    }

    #[test]
    fn test_glyph_draws_something() {
        let mut frame = Frame::new();
        RenderOp::Glyph { x: 40, y: 20, ch: 'Z', large: true }
            .draw(&mut frame)
            .unwrap();
        assert!(frame.lit_count() > 0, "glyph should light pixels");
        assert!(!frame.out_of_bounds);
    }

    #[test]
    fn test_extent_contains_drawing() {
        let ops = [
            RenderOp::Circle { cx: 30, cy: 30, r: 6, filled: true },
            RenderOp::Triangle { x0: 60, y0: 20, x1: 50, y1: 40, x2: 70, y2: 40 },
            RenderOp::Rect { x: 90, y: 10, w: 10, h: 10 },
        ];
        for op in ops {
            let (min_x, min_y, max_x, max_y) = op.extent();
            assert!(min_x <= max_x && min_y <= max_y, "degenerate extent for {op:?}");
        }
    }

    #[test]
    fn test_draw_ops_runs_whole_list() {
        let ops = [
            RenderOp::Rect { x: 0, y: 0, w: 2, h: 2 },
            RenderOp::Rect { x: 10, y: 0, w: 2, h: 2 },
        ];
        let mut frame = Frame::new();
        draw_ops(&ops, &mut frame).unwrap();
        assert_eq!(frame.lit_count(), 8);
    }
}
