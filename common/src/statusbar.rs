//! Status bar composition for the top strip (rows 0-9).
//!
//! Independent of plant state: one divider line, one of two connectivity
//! glyphs at the left edge, an optional centered species label, and a
//! battery gauge at the right edge. The connectivity glyphs are built from
//! primitives inside the same 10x10 box the icon bitmaps used to occupy.

use crate::config::{BATTERY_BAR_MAX, BATTERY_X, BATTERY_Y, DIVIDER_Y, SCREEN_WIDTH, SPECIES_MAX_CHARS};
use crate::render::RenderOp::{Circle, Glyph, Line, Rect};
use crate::render::{RenderOp, StatusOps, FONT_SMALL};
use crate::thresholds::SPECIES_UNKNOWN;

/// Horizontal advance of one small label glyph.
const GLYPH_ADVANCE: i32 = (FONT_SMALL.character_size.width + FONT_SMALL.character_spacing) as i32;

/// Connectivity up: two signal arcs over a dot.
static LINK_UP_ICON: &[RenderOp] = &[
    Line { x0: 0, y0: 4, x1: 4, y1: 0 },
    Line { x0: 4, y0: 0, x1: 5, y1: 0 },
    Line { x0: 5, y0: 0, x1: 9, y1: 4 },
    Line { x0: 2, y0: 6, x1: 4, y1: 4 },
    Line { x0: 4, y0: 4, x1: 5, y1: 4 },
    Line { x0: 5, y0: 4, x1: 7, y1: 6 },
    Circle { cx: 4, cy: 8, r: 1, filled: true },
];

/// Connectivity down: crossed-out box.
static LINK_DOWN_ICON: &[RenderOp] = &[
    Line { x0: 0, y0: 0, x1: 8, y1: 8 },
    Line { x0: 8, y0: 0, x1: 0, y1: 8 },
    Line { x0: 1, y0: 0, x1: 9, y1: 8 },
    Line { x0: 9, y0: 0, x1: 1, y1: 8 },
];

/// Width of the battery fill bar for a battery percentage.
///
/// Linear 0-100% onto 0-12 pixels, rounded to nearest, clamped at both
/// ends so inputs above 100 hit the same maximum.
pub fn battery_fill_width(percent: i32) -> u32 {
    let clamped = percent.clamp(0, 100);
    ((clamped * BATTERY_BAR_MAX + 50) / 100) as u32
}

/// Label actually shown for a species string, if any.
///
/// Empty and [`SPECIES_UNKNOWN`] labels are suppressed; labels longer than
/// 14 characters truncate to 13 plus a `.` marker.
fn visible_label(species: &str) -> Option<(Trunc<'_>, usize)> {
    if species.is_empty() || species == SPECIES_UNKNOWN {
        return None;
    }
    let len = species.chars().count();
    if len > SPECIES_MAX_CHARS {
        let truncated = species
            .chars()
            .take(SPECIES_MAX_CHARS - 1)
            .chain(core::iter::once('.'));
        Some((Trunc::Marked(truncated), SPECIES_MAX_CHARS))
    } else {
        Some((Trunc::Whole(species.chars()), len))
    }
}

/// Either iterator shape from [`visible_label`].
enum Trunc<'a> {
    Whole(core::str::Chars<'a>),
    Marked(core::iter::Chain<core::iter::Take<core::str::Chars<'a>>, core::iter::Once<char>>),
}

impl Iterator for Trunc<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            Self::Whole(it) => it.next(),
            Self::Marked(it) => it.next(),
        }
    }
}

/// Compose the top strip for one refresh.
pub fn compose_status_bar(link_up: bool, battery_percent: i32, species: &str) -> StatusOps {
    let mut ops = StatusOps::new();

    // Capacity is sized for the worst case (icon + max label + gauge), so
    // pushes cannot fail; drop the op on the floor rather than panic.
    let mut push = |op: RenderOp, ops: &mut StatusOps| {
        let _ = ops.push(op);
    };

    // 1. Divider line
    push(
        Line { x0: 0, y0: DIVIDER_Y, x1: SCREEN_WIDTH as i32 - 1, y1: DIVIDER_Y },
        &mut ops,
    );

    // 2. Connectivity glyph (left edge)
    let icon = if link_up { LINK_UP_ICON } else { LINK_DOWN_ICON };
    for op in icon {
        push(*op, &mut ops);
    }

    // 3. Species label (centered between the icons)
    if let Some((chars, len)) = visible_label(species) {
        let width = len as i32 * GLYPH_ADVANCE;
        let mut x = (SCREEN_WIDTH as i32 - width) / 2;
        for ch in chars {
            push(Glyph { x, y: 1, ch, large: false }, &mut ops);
            x += GLYPH_ADVANCE;
        }
    }

    // 4. Battery gauge (right edge): outline, terminal bump, fill bar
    push(Line { x0: BATTERY_X, y0: BATTERY_Y, x1: BATTERY_X + 15, y1: BATTERY_Y }, &mut ops);
    push(Line { x0: BATTERY_X, y0: BATTERY_Y + 7, x1: BATTERY_X + 15, y1: BATTERY_Y + 7 }, &mut ops);
    push(Line { x0: BATTERY_X, y0: BATTERY_Y, x1: BATTERY_X, y1: BATTERY_Y + 7 }, &mut ops);
    push(Line { x0: BATTERY_X + 15, y0: BATTERY_Y, x1: BATTERY_X + 15, y1: BATTERY_Y + 7 }, &mut ops);
    push(Line { x0: BATTERY_X + 16, y0: BATTERY_Y + 2, x1: BATTERY_X + 16, y1: BATTERY_Y + 5 }, &mut ops);

    if battery_percent > 0 {
        let bar = battery_fill_width(battery_percent);
        if bar > 0 {
            push(Rect { x: BATTERY_X + 2, y: BATTERY_Y + 2, w: bar, h: 4 }, &mut ops);
        }
    }

    ops
}

// =============================================================================
// Unit Tests
// =============================================================================
