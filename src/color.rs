//! Color types.
//!
//! `Rgba` holds f64 components in `[0, 1]`. Besides the usual constructors
//! it converts from hue/saturation/brightness (used by the colour-cycling
//! rings) and to and from `#rrggbb` hex strings (used by scene files).

use crate::error::{ShapeError, ShapeResult};

// ============================================================================
// Rgba (f64 precision color)
// ============================================================================

/// RGBA color with f64 components in range [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn new_rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn no_color() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn black() -> Self {
        Self::new_rgb(0.0, 0.0, 0.0)
    }

    /// Opaque color from hue, saturation and brightness (HSV).
    ///
    /// `hue` wraps into `[0, 1)`; saturation and brightness are clamped to
    /// `[0, 1]`.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = brightness.clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::new_rgb(r, g, b)
    }

    /// Interpolate between `self` and `c` by parameter `k`.
    pub fn gradient(&self, c: &Rgba, k: f64) -> Rgba {
        Rgba {
            r: self.r + (c.r - self.r) * k,
            g: self.g + (c.g - self.g) * k,
            b: self.b + (c.b - self.b) * k,
            a: self.a + (c.a - self.a) * k,
        }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(s: &str) -> ShapeResult<Rgba> {
        let digits = s.trim().trim_start_matches('#');
        let invalid = || ShapeError::InvalidColor(s.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize, len: usize| -> ShapeResult<f64> {
            let raw = u8::from_str_radix(&digits[i..i + len], 16).map_err(|_| invalid())?;
            // A single digit d stands for dd
            let v = if len == 1 { raw * 17 } else { raw };
            Ok(v as f64 / 255.0)
        };

        match digits.len() {
            3 => Ok(Rgba::new_rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Ok(Rgba::new_rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            8 => Ok(Rgba::new(
                channel(0, 2)?,
                channel(2, 2)?,
                channel(4, 2)?,
                channel(6, 2)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// `#rrggbb`; alpha is not included.
    pub fn to_hex(&self) -> String {
        let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b))
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::no_color()
    }
}

// ============================================================================
// Tests
// ============================================================================
