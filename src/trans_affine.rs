//! Affine transformation matrix.
//!
//! Places shape parts on the canvas: petals are rotated about the origin,
//! then moved to their rectangle centre. `Path::transformed` maps whole
//! paths through the same type.

use crate::basics::PointD;

/// Epsilon for affine matrix comparisons.
pub const AFFINE_EPSILON: f64 = 1e-14;

/// 2D affine transformation matrix.
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// `a.multiply(&b)` applies `a` first, then `b`.
#[derive(Debug, Clone, Copy)]
pub struct TransAffine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl TransAffine {
    /// Identity matrix.
    pub fn new() -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn new_custom(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Rotation by `a` radians, from +x toward +y.
    pub fn new_rotation(a: f64) -> Self {
        let (sin, cos) = a.sin_cos();
        Self::new_custom(cos, sin, -sin, cos, 0.0, 0.0)
    }

    pub fn new_translation(x: f64, y: f64) -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Append `m`: the result maps a point through `self`, then `m`.
    pub fn multiply(&mut self, m: &TransAffine) -> &mut Self {
        let a = *self;
        self.sx = a.sx * m.sx + a.shy * m.shx;
        self.shx = a.shx * m.sx + a.sy * m.shx;
        self.tx = a.tx * m.sx + a.ty * m.shx + m.tx;
        self.shy = a.sx * m.shy + a.shy * m.sy;
        self.sy = a.shx * m.shy + a.sy * m.sy;
        self.ty = a.tx * m.shy + a.ty * m.sy + m.ty;
        self
    }

    #[inline]
    pub fn transform_point(&self, p: PointD) -> PointD {
        PointD::new(
            p.x * self.sx + p.y * self.shx + self.tx,
            p.x * self.shy + p.y * self.sy + self.ty,
        )
    }

    /// Average scale factor, used as the flattening scale for mapped arcs.
    pub fn get_scale(&self) -> f64 {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let x = s * self.sx + s * self.shx;
        let y = s * self.shy + s * self.sy;
        (x * x + y * y).sqrt()
    }

    /// Component-wise comparison within `epsilon`.
    pub fn is_equal(&self, m: &TransAffine, epsilon: f64) -> bool {
        [
            (self.sx, m.sx),
            (self.shy, m.shy),
            (self.shx, m.shx),
            (self.sy, m.sy),
            (self.tx, m.tx),
            (self.ty, m.ty),
        ]
        .iter()
        .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for TransAffine {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TransAffine {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other, AFFINE_EPSILON)
    }
}

// ============================================================================
// Tests
// ============================================================================
