//! Circular arc centred in its rectangle, with 0° pointing up.

use super::{degenerate, InsettableShape, Shape};
use crate::basics::{Angle, RectD};
use crate::path::Path;

/// Offset between caller angles (0° = up) and path angles (0° = +x).
pub const ROTATION_ADJUSTMENT_DEGREES: f64 = 90.0;

/// Arc parameters.
///
/// Angles are measured with 0° at the top. `clockwise` is inverted before it
/// reaches the path, so `clockwise: true` from 0° to 110° sweeps over the
/// right-hand side on a y-down canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub clockwise: bool,
    pub inset_amount: f64,
}

impl Arc {
    pub fn new(start_angle: Angle, end_angle: Angle, clockwise: bool) -> Self {
        Self {
            start_angle,
            end_angle,
            clockwise,
            inset_amount: 0.0,
        }
    }
}

impl Shape for Arc {
    fn path(&self, rect: &RectD) -> Path {
        arc_path(
            rect,
            self.start_angle,
            self.end_angle,
            self.clockwise,
            self.inset_amount,
        )
    }
}

impl InsettableShape for Arc {
    fn inset(&self, amount: f64) -> Self {
        let mut arc = *self;
        arc.inset_amount += amount;
        arc
    }
}

/// A single `AddArc` at the rect centre with radius `width / 2 - inset`.
/// Empty when that radius is not positive.
pub fn arc_path(
    rect: &RectD,
    start_angle: Angle,
    end_angle: Angle,
    clockwise: bool,
    inset_amount: f64,
) -> Path {
    let mut path = Path::new();
    if degenerate("arc", rect) {
        return path;
    }

    let radius = rect.width() / 2.0 - inset_amount;
    if !(radius > 0.0) {
        log::debug!("arc: radius {} after inset {}, emitting empty path", radius, inset_amount);
        return path;
    }

    let adjustment = Angle::degrees(ROTATION_ADJUSTMENT_DEGREES);
    path.add_arc(
        rect.center(),
        radius,
        start_angle - adjustment,
        end_angle - adjustment,
        !clockwise,
    );
    path
}

// ============================================================================
// Tests
// ============================================================================
