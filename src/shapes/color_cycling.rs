//! Colour-cycling circle: concentric rings whose hue steps around the
//! colour wheel.
//!
//! Ring `i` is a circle inset by `i` units. Its colour pair is the hue
//! `(i / steps + amount) mod 1` at full and at half brightness, meant to be
//! blended top to bottom along the ring.

use super::circle::circle_radius;
use super::{Circle, InsettableShape, Shape};
use crate::basics::RectD;
use crate::color::Rgba;
use crate::path::Path;

/// One ring of the colour table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub index: usize,
    /// Distance from the outer edge of the enclosing circle.
    pub inset: f64,
    pub hue: f64,
    pub bright: Rgba,
    pub dim: Rgba,
}

impl ColorStop {
    /// Ring radius inside `rect`, clamped at zero.
    pub fn radius_in(&self, rect: &RectD) -> f64 {
        circle_radius(rect, self.inset)
    }
}

/// The colour table for `steps` rings shifted by `amount`.
///
/// Empty for `steps <= 0` or a non-finite `amount`.
pub fn color_cycling_stops(amount: f64, steps: i32) -> Vec<ColorStop> {
    if steps <= 0 || !amount.is_finite() {
        log::debug!("color cycling: no stops for amount {} steps {}", amount, steps);
        return Vec::new();
    }

    (0..steps as usize)
        .map(|index| {
            let hue = (index as f64 / steps as f64 + amount).rem_euclid(1.0);
            ColorStop {
                index,
                inset: index as f64,
                hue,
                bright: Rgba::from_hsb(hue, 1.0, 1.0),
                dim: Rgba::from_hsb(hue, 1.0, 0.5),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCyclingCircle {
    pub amount: f64,
    pub steps: i32,
}

impl Default for ColorCyclingCircle {
    fn default() -> Self {
        Self {
            amount: 0.0,
            steps: 100,
        }
    }
}

impl ColorCyclingCircle {
    pub fn new(amount: f64, steps: i32) -> Self {
        Self { amount, steps }
    }

    pub fn stops(&self) -> Vec<ColorStop> {
        color_cycling_stops(self.amount, self.steps)
    }

    /// Each stop paired with its ring path, outermost first. Rings inset
    /// past the centre are dropped.
    pub fn rings(&self, rect: &RectD) -> Vec<(Path, ColorStop)> {
        let outer = Circle::default();
        self.stops()
            .into_iter()
            .map(|stop| (outer.inset(stop.inset).path(rect), stop))
            .filter(|(path, _)| !path.is_empty())
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
