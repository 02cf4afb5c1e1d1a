//! Ellipse flattening.
//!
//! Generates a closed polygon approximating an axis-aligned ellipse. The
//! number of steps is either given explicitly or derived from the radii and
//! the approximation scale.

use crate::arc::step_angle;
use crate::basics::{
    uround, RectD, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO,
    PATH_CMD_STOP, PATH_FLAGS_CCW, PATH_FLAGS_CLOSE, PATH_FLAGS_CW, PI,
};

/// Fewest vertices an automatically stepped ellipse gets.
const MIN_STEPS: u32 = 4;

/// Ellipse vertex generator.
///
/// The first vertex sits at angle 0 (the rightmost point). With `cw == false`
/// angles increase, which in y-down coordinates runs clockwise on screen.
#[derive(Debug, Clone)]
pub struct EllipseVertices {
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    scale: f64,
    num: u32,
    step: u32,
    cw: bool,
}

impl EllipseVertices {
    /// Create a new ellipse. `num_steps == 0` picks the count automatically.
    pub fn new(x: f64, y: f64, rx: f64, ry: f64, num_steps: u32, cw: bool) -> Self {
        let mut e = Self {
            x,
            y,
            rx,
            ry,
            scale: 1.0,
            num: num_steps,
            step: 0,
            cw,
        };
        if e.num == 0 {
            e.calc_num_steps();
        }
        e
    }

    /// The ellipse inscribed in `rect`, with an automatic step count.
    pub fn in_rect(rect: &RectD, approximation_scale: f64) -> Self {
        let mut e = Self::new(
            rect.mid_x(),
            rect.mid_y(),
            rect.width() / 2.0,
            rect.height() / 2.0,
            0,
            false,
        );
        e.set_approximation_scale(approximation_scale);
        e
    }

    /// Set approximation scale (affects automatic step count).
    pub fn set_approximation_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.calc_num_steps();
    }

    pub fn num_steps(&self) -> u32 {
        self.num
    }

    fn calc_num_steps(&mut self) {
        let da = step_angle(self.rx, self.ry, self.scale);
        self.num = uround(2.0 * PI / da).max(MIN_STEPS);
    }
}

impl VertexSource for EllipseVertices {
    fn rewind(&mut self, _path_id: u32) {
        self.step = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.step == self.num {
            self.step += 1;
            let orientation = if self.cw { PATH_FLAGS_CW } else { PATH_FLAGS_CCW };
            return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | orientation;
        }
        if self.step > self.num {
            return PATH_CMD_STOP;
        }
        let mut angle = self.step as f64 / self.num as f64 * 2.0 * PI;
        if self.cw {
            angle = 2.0 * PI - angle;
        }
        *x = self.x + angle.cos() * self.rx;
        *y = self.y + angle.sin() * self.ry;
        self.step += 1;
        if self.step == 1 {
            PATH_CMD_MOVE_TO
        } else {
            PATH_CMD_LINE_TO
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
