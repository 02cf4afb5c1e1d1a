//! Trapezoid: a rectangle whose top edge is pulled in from both sides.

use super::{degenerate, Shape};
use crate::basics::{PointD, RectD};
use crate::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    /// Horizontal distance the top corners move toward each other.
    pub inset_amount: f64,
}

impl Trapezoid {
    pub fn new(inset_amount: f64) -> Self {
        Self { inset_amount }
    }
}

impl Shape for Trapezoid {
    fn path(&self, rect: &RectD) -> Path {
        trapezoid_path(rect, self.inset_amount)
    }
}

/// Bottom-left, top-left (inset), top-right (inset), bottom-right, and back
/// to bottom-left. The inset is not clamped: past half the width the top
/// edge crosses over.
pub fn trapezoid_path(rect: &RectD, inset_amount: f64) -> Path {
    let mut path = Path::new();
    if degenerate("trapezoid", rect) {
        return path;
    }

    let start = PointD::new(rect.min_x(), rect.max_y());
    path.move_to(start);
    path.line_to(PointD::new(rect.min_x() + inset_amount, rect.min_y()));
    path.line_to(PointD::new(rect.max_x() - inset_amount, rect.min_y()));
    path.line_to(PointD::new(rect.max_x(), rect.max_y()));
    path.line_to(start);
    path.close_subpath();
    path
}

// ============================================================================
// Tests
// ============================================================================
