//! # drawing-shapes
//!
//! Parametric 2D shape generators. Each shape takes a bounding rectangle and
//! a handful of numbers and returns a fresh vector [`Path`](path::Path):
//!
//! - [`Checkerboard`](shapes::Checkerboard) — alternating grid cells
//! - [`Trapezoid`](shapes::Trapezoid) — rectangle with an inset top edge
//! - [`Triangle`](shapes::Triangle) — apex top-middle, base along the bottom
//! - [`Arc`](shapes::Arc) — circular arc with 0° pointing up, insettable
//! - [`Flower`](shapes::Flower) — sixteen rotated elliptical petals
//! - [`Circle`](shapes::Circle) — centred circle, insettable
//! - [`ColorCyclingCircle`](shapes::ColorCyclingCircle) — concentric rings
//!   with a hue table
//!
//! Generators are pure: no state survives a call, and degenerate input (zero
//! counts, an empty rectangle) yields an empty path rather than an error.
//!
//! ## Architecture
//!
//! 1. **Foundation** — rectangles, points, angles, the vertex protocol
//! 2. **Flattening** — arc and ellipse vertex generators, affine transforms
//! 3. **Paths** — command lists that flatten on demand
//! 4. **Shapes** — the generators themselves
//! 5. **Scenes** — JSON configuration and SVG export

// Foundation
pub mod basics;
pub mod color;
pub mod error;

// Geometry primitives
pub mod arc;
pub mod bounding_rect;
pub mod ellipse;
pub mod trans_affine;

// Paths and shapes
pub mod path;
pub mod shapes;

// Configuration and export
pub mod scene;
pub mod svg;

pub use basics::{Angle, PointD, RectD};
pub use error::{ShapeError, ShapeResult};
pub use path::{Path, PathCommand};
pub use shapes::{InsettableShape, Shape};
