//! Flower of sixteen elliptical petals rotated around the rectangle centre.

use super::{degenerate, Shape};
use crate::basics::{RectD, PI};
use crate::ellipse::EllipseVertices;
use crate::path::Path;
use crate::trans_affine::TransAffine;

/// Number of petals; one every π/8.
pub const PETAL_COUNT: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flower {
    /// How far each petal sits from the centre along its own axis.
    pub petal_offset: f64,
    /// Petal thickness. Petal length is half the rect width.
    pub petal_width: f64,
    /// Flattening precision for the petal ellipses.
    pub approximation_scale: f64,
}

impl Flower {
    pub fn new(petal_offset: f64, petal_width: f64) -> Self {
        Self {
            petal_offset,
            petal_width,
            approximation_scale: 1.0,
        }
    }
}

impl Default for Flower {
    fn default() -> Self {
        Self::new(-20.0, 100.0)
    }
}

impl Shape for Flower {
    fn path(&self, rect: &RectD) -> Path {
        flower_path_with_scale(rect, self.petal_offset, self.petal_width, self.approximation_scale)
    }
}

/// Sixteen closed petal sub-paths at approximation scale 1.0.
pub fn flower_path(rect: &RectD, petal_offset: f64, petal_width: f64) -> Path {
    flower_path_with_scale(rect, petal_offset, petal_width, 1.0)
}

/// Petal `i` is the ellipse inscribed in
/// `(petal_offset, 0, petal_width, width / 2)`, rotated by `i * π / 8` about
/// the origin and then moved to the rect centre. Overlaps are left to the
/// renderer's fill rule.
pub fn flower_path_with_scale(
    rect: &RectD,
    petal_offset: f64,
    petal_width: f64,
    approximation_scale: f64,
) -> Path {
    let mut path = Path::new();
    if degenerate("flower", rect) {
        return path;
    }

    let petal = RectD::from_xywh(petal_offset, 0.0, petal_width, rect.width() / 2.0);
    let centre = rect.center();

    for i in 0..PETAL_COUNT {
        let mut position = TransAffine::new_rotation(i as f64 * PI / 8.0);
        position.multiply(&TransAffine::new_translation(centre.x, centre.y));

        let mut ellipse = EllipseVertices::in_rect(&petal, approximation_scale);
        path.concat_vertices(&mut ellipse, &position);
    }

    log::trace!(
        "flower: offset {} width {}, {} commands",
        petal_offset,
        petal_width,
        path.len()
    );
    path
}

// ============================================================================
// Tests
// ============================================================================
