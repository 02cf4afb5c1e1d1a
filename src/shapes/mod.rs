//! Parametric shapes.
//!
//! Each shape is a small `Copy` parameter struct implementing [`Shape`]: give
//! it a bounding rectangle and it returns a fresh [`Path`]. Calls are pure and
//! idempotent. Every shape returns an empty path for a degenerate rectangle
//! (no area, or a non-finite coordinate).
//!
//! Animating a shape means calling it again with interpolated parameters;
//! nothing here keeps state between calls.

pub mod arc;
pub mod checkerboard;
pub mod circle;
pub mod color_cycling;
pub mod flower;
pub mod trapezoid;
pub mod triangle;

pub use arc::{arc_path, Arc};
pub use checkerboard::{checkerboard_path, Checkerboard};
pub use circle::{circle_path, Circle};
pub use color_cycling::{color_cycling_stops, ColorCyclingCircle, ColorStop};
pub use flower::{flower_path, Flower};
pub use trapezoid::{trapezoid_path, Trapezoid};
pub use triangle::{triangle_path, Triangle};

use crate::basics::RectD;
use crate::path::Path;

/// Anything that can lay itself out as a path inside a rectangle.
pub trait Shape {
    fn path(&self, rect: &RectD) -> Path;
}

/// A shape that can shrink its outline, for nested or concentric copies.
pub trait InsettableShape: Shape + Sized {
    /// A copy with its inset grown by `amount`; `self` is left unchanged.
    fn inset(&self, amount: f64) -> Self;
}

/// Shared guard: log and report a rectangle no shape can be drawn in.
pub(crate) fn degenerate(shape: &str, rect: &RectD) -> bool {
    let bad = rect.is_degenerate();
    if bad {
        log::debug!("{}: degenerate rect {:?}, emitting empty path", shape, rect);
    }
    bad
}
