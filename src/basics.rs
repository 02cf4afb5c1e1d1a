//! Foundation types, constants, and path command utilities.
//!
//! Everything else in the crate depends on these: rectangles, points,
//! angles, the `PATH_CMD_*` vertex protocol, and the `VertexSource` trait.

use core::ops::{Add, Neg, Sub};

// ============================================================================
// Rounding
// ============================================================================

/// Round a double to the nearest unsigned integer (round half up).
/// Negative and NaN inputs saturate to 0.
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

// ============================================================================
// Filling rule
// ============================================================================

/// Filling rule hint for whoever renders a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillingRule {
    #[default]
    NonZero,
    EvenOdd,
}

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad2deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

// ============================================================================
// Angle
// ============================================================================

/// A plane angle, stored in radians.
///
/// Angles are measured from the positive x axis toward the positive y axis.
/// With y growing downward that is visually clockwise.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub fn radians(r: f64) -> Self {
        Self(r)
    }

    pub fn degrees(d: f64) -> Self {
        Self(deg2rad(d))
    }

    pub fn to_radians(self) -> f64 {
        self.0
    }

    pub fn to_degrees(self) -> f64 {
        rad2deg(self.0)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }
}

/// Compute the union (bounding box) of two rectangles.
pub fn unite_rectangles<T: Copy + PartialOrd>(r1: &Rect<T>, r2: &Rect<T>) -> Rect<T> {
    let mut r = *r1;
    if r.x2 < r2.x2 {
        r.x2 = r2.x2;
    }
    if r.y2 < r2.y2 {
        r.y2 = r2.y2;
    }
    if r.x1 > r2.x1 {
        r.x1 = r2.x1;
    }
    if r.y1 > r2.y1 {
        r.y1 = r2.y1;
    }
    r
}

/// Rectangle with `f64` coordinates.
pub type RectD = Rect<f64>;

impl Rect<f64> {
    /// Build from an origin and a size. A negative size is normalized away.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut r = Self::new(x, y, x + width, y + height);
        r.normalize();
        r
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn min_x(&self) -> f64 {
        self.x1
    }

    pub fn min_y(&self) -> f64 {
        self.y1
    }

    pub fn max_x(&self) -> f64 {
        self.x2
    }

    pub fn max_y(&self) -> f64 {
        self.y2
    }

    pub fn mid_x(&self) -> f64 {
        (self.x1 + self.x2) / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        (self.y1 + self.y2) / 2.0
    }

    pub fn center(&self) -> PointD {
        PointD::new(self.mid_x(), self.mid_y())
    }

    /// A rectangle with no area, or with a NaN/infinite coordinate.
    /// Shape generators produce nothing for these.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.x1.is_finite()
            && self.y1.is_finite()
            && self.x2.is_finite()
            && self.y2.is_finite();
        !finite || self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Shrink every edge by `amount`. Insetting past the centre collapses
    /// the rectangle onto its centre.
    pub fn inset(&self, amount: f64) -> Self {
        let dx = amount.min(self.width() / 2.0);
        let dy = amount.min(self.height() / 2.0);
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 - dx, self.y2 - dy)
    }

    /// Returns `true` if `r` lies inside `self`, allowing `epsilon` slack
    /// on every edge.
    pub fn contains_rect(&self, r: &RectD, epsilon: f64) -> bool {
        r.x1 >= self.x1 - epsilon
            && r.y1 >= self.y1 - epsilon
            && r.x2 <= self.x2 + epsilon
            && r.y2 <= self.y2 + epsilon
    }
}

// ============================================================================
// Path commands
// ============================================================================

pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;
pub const PATH_CMD_END_POLY: u32 = 0x0F;

// ============================================================================
// Path flags
// ============================================================================

pub const PATH_FLAGS_CCW: u32 = 0x10;
pub const PATH_FLAGS_CW: u32 = 0x20;
pub const PATH_FLAGS_CLOSE: u32 = 0x40;

// ============================================================================
// Path command query functions
// ============================================================================

/// Returns `true` if `c` is a vertex command (move_to or line_to).
#[inline]
pub fn is_vertex(c: u32) -> bool {
    (PATH_CMD_MOVE_TO..PATH_CMD_END_POLY).contains(&c)
}

/// Returns `true` if `c` is the stop command.
#[inline]
pub fn is_stop(c: u32) -> bool {
    c == PATH_CMD_STOP
}

/// Returns `true` if `c` is a move_to command.
#[inline]
pub fn is_move_to(c: u32) -> bool {
    c == PATH_CMD_MOVE_TO
}

/// Returns `true` if `c` is a line_to command.
#[inline]
pub fn is_line_to(c: u32) -> bool {
    c == PATH_CMD_LINE_TO
}

/// Returns `true` if `c` is an end_poly command with the close flag set.
#[inline]
pub fn is_close(c: u32) -> bool {
    (c & !(PATH_FLAGS_CW | PATH_FLAGS_CCW)) == (PATH_CMD_END_POLY | PATH_FLAGS_CLOSE)
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

pub type PointD = PointBase<f64>;

// ============================================================================
// VertexSource trait
// ============================================================================

/// A stream of flattened vertices.
///
/// `rewind` resets the stream; `vertex` writes the next coordinate and
/// returns its `PATH_CMD_*` command, or `PATH_CMD_STOP` once exhausted.
/// Arc and ellipse flatteners and `PathVertices` all speak this protocol.
pub trait VertexSource {
    /// Reset the vertex source to the beginning of the given path.
    /// `path_id` selects which sub-path to iterate (0 for the first/only path).
    fn rewind(&mut self, path_id: u32);

    /// Return the next vertex. Writes coordinates to `x` and `y`, returns a
    /// path command. Returns `PATH_CMD_STOP` when iteration is complete.
    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32;
}

/// Blanket implementation so `&mut T` can be used as a VertexSource.
impl<T: VertexSource> VertexSource for &mut T {
    fn rewind(&mut self, path_id: u32) {
        (*self).rewind(path_id);
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        (*self).vertex(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uround() {
        assert_eq!(uround(0.5), 1);
        assert_eq!(uround(0.49), 0);
        assert_eq!(uround(1.5), 2);
        assert_eq!(uround(0.0), 0);
        assert_eq!(uround(f64::NAN), 0);
    }

    #[test]
    fn test_deg2rad_rad2deg() {
        let epsilon = 1e-10;
        assert!((deg2rad(180.0) - PI).abs() < epsilon);
        assert!((rad2deg(PI) - 180.0).abs() < epsilon);
        assert!((deg2rad(90.0) - PI / 2.0).abs() < epsilon);
        assert!((deg2rad(0.0)).abs() < epsilon);
    }

    #[test]
    fn test_angle_arithmetic() {
        let a = Angle::degrees(110.0) - Angle::degrees(90.0);
        assert!((a.to_degrees() - 20.0).abs() < 1e-10);
        assert!(((-a).to_radians() + deg2rad(20.0)).abs() < 1e-12);
        assert_eq!(Angle::ZERO + Angle::radians(PI), Angle::radians(PI));
    }

    #[test]
    fn test_rect_from_xywh() {
        let r = RectD::from_xywh(10.0, 20.0, 300.0, 150.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.max_x(), 310.0);
        assert_eq!(r.mid_y(), 95.0);
        assert_eq!(r.width(), 300.0);
        assert_eq!(r.height(), 150.0);

        // Negative sizes flip into a normal rectangle
        let f = RectD::from_xywh(10.0, 10.0, -10.0, -5.0);
        assert_eq!(f, RectD::new(0.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn test_rect_degenerate() {
        assert!(RectD::from_xywh(0.0, 0.0, 0.0, 10.0).is_degenerate());
        assert!(RectD::from_xywh(0.0, 0.0, 10.0, 0.0).is_degenerate());
        assert!(RectD::new(0.0, 0.0, f64::NAN, 10.0).is_degenerate());
        assert!(RectD::new(0.0, 0.0, f64::INFINITY, 10.0).is_degenerate());
        assert!(!RectD::from_xywh(0.0, 0.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_rect_inset() {
        let r = RectD::from_xywh(0.0, 0.0, 100.0, 40.0).inset(10.0);
        assert_eq!(r, RectD::new(10.0, 10.0, 90.0, 30.0));

        // Past the centre it collapses instead of inverting
        let c = RectD::from_xywh(0.0, 0.0, 100.0, 40.0).inset(30.0);
        assert_eq!(c.height(), 0.0);
        assert_eq!(c.mid_y(), 20.0);
    }

    #[test]
    fn test_contains_rect() {
        let outer = RectD::from_xywh(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&RectD::new(0.0, 0.0, 100.0, 100.0), 0.0));
        assert!(!outer.contains_rect(&RectD::new(-1.0, 0.0, 50.0, 50.0), 0.5));
        assert!(outer.contains_rect(&RectD::new(-1e-9, 0.0, 50.0, 50.0), 1e-6));
    }

    #[test]
    fn test_unite_rectangles() {
        let r = unite_rectangles(
            &RectD::new(0.0, 0.0, 10.0, 10.0),
            &RectD::new(5.0, -5.0, 20.0, 8.0),
        );
        assert_eq!(r, RectD::new(0.0, -5.0, 20.0, 10.0));
    }

    #[test]
    fn test_path_command_queries() {
        assert!(is_vertex(PATH_CMD_MOVE_TO));
        assert!(is_vertex(PATH_CMD_LINE_TO));
        assert!(!is_vertex(PATH_CMD_STOP));
        assert!(!is_vertex(PATH_CMD_END_POLY));
        assert!(is_move_to(PATH_CMD_MOVE_TO));
        assert!(is_line_to(PATH_CMD_LINE_TO));
        assert!(is_stop(PATH_CMD_STOP));
        assert!(is_close(PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | PATH_FLAGS_CCW));
        assert!(!is_close(PATH_CMD_END_POLY));
    }
}
