//! Triangle with its apex at the top middle and its base along the bottom edge.

use super::{degenerate, Shape};
use crate::basics::{PointD, RectD};
use crate::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triangle;

impl Shape for Triangle {
    fn path(&self, rect: &RectD) -> Path {
        triangle_path(rect)
    }
}

pub fn triangle_path(rect: &RectD) -> Path {
    let mut path = Path::new();
    if degenerate("triangle", rect) {
        return path;
    }

    let apex = PointD::new(rect.mid_x(), rect.min_y());
    path.move_to(apex);
    path.line_to(PointD::new(rect.min_x(), rect.max_y()));
    path.line_to(PointD::new(rect.max_x(), rect.max_y()));
    path.line_to(apex);
    path.close_subpath();
    path
}
