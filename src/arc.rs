//! Arc flattening.
//!
//! Generates polyline vertices along a circular or elliptical arc. The step
//! angle is derived from the radius and the approximation scale so that the
//! chord error stays under about 1/8 of a unit at scale 1.0.

use crate::basics::{is_stop, VertexSource, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP, PI};

/// Finest subdivision: no arc or ellipse gets more steps than this per turn.
pub(crate) const MAX_STEPS_PER_TURN: f64 = 4096.0;

/// Step angle for radii `rx`, `ry` at approximation scale `scale`.
///
/// A bad scale counts as 1.0 and infinite radii step by a quarter turn.
/// Huge radii are held to `MAX_STEPS_PER_TURN`.
pub(crate) fn step_angle(rx: f64, ry: f64, scale: f64) -> f64 {
    let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    let ra = (rx.abs() + ry.abs()) / 2.0;
    let da = (ra / (ra + 0.125 / scale)).acos() * 2.0;
    if da.is_finite() {
        da.max(2.0 * PI / MAX_STEPS_PER_TURN)
    } else {
        PI / 2.0
    }
}

/// Arc vertex generator.
///
/// `ccw == true` sweeps toward increasing angles, `false` toward decreasing
/// ones. An end angle "behind" the start wraps around, and no sweep is
/// longer than one full turn.
#[derive(Debug, Clone)]
pub struct ArcVertices {
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    angle: f64,
    start: f64,
    end: f64,
    scale: f64,
    da: f64,
    ccw: bool,
    path_cmd: u32,
}

impl ArcVertices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(x: f64, y: f64, rx: f64, ry: f64, a1: f64, a2: f64, ccw: bool) -> Self {
        let mut arc = Self {
            x,
            y,
            rx,
            ry,
            angle: 0.0,
            start: 0.0,
            end: 0.0,
            scale: 1.0,
            da: 0.0,
            ccw,
            path_cmd: PATH_CMD_STOP,
        };
        arc.normalize(a1, a2, ccw);
        arc
    }

    /// Set approximation scale (affects step size).
    pub fn set_approximation_scale(&mut self, s: f64) {
        self.scale = s;
        self.da = self.direction() * step_angle(self.rx, self.ry, self.scale);
    }

    fn direction(&self) -> f64 {
        if self.ccw {
            1.0
        } else {
            -1.0
        }
    }

    fn normalize(&mut self, a1: f64, a2: f64, ccw: bool) {
        let turn = PI * 2.0;
        self.ccw = ccw;
        self.da = self.direction() * step_angle(self.rx, self.ry, self.scale);

        // Start inside [0, 2π] and sweep at most one turn. A sweep against
        // the direction wraps around to the remainder of a turn.
        let (a1, a2) = if a1.is_finite() && a2.is_finite() {
            let sweep = (a2 - a1).clamp(-f64::MAX, f64::MAX);
            let sweep = if ccw {
                if sweep >= 0.0 {
                    sweep.min(turn)
                } else {
                    sweep.rem_euclid(turn)
                }
            } else if sweep <= 0.0 {
                sweep.max(-turn)
            } else {
                -(-sweep).rem_euclid(turn)
            };
            let start = a1.rem_euclid(turn);
            (start, start + sweep)
        } else {
            (0.0, 0.0)
        };

        self.start = a1;
        self.end = a2;
    }
}

impl VertexSource for ArcVertices {
    fn rewind(&mut self, _path_id: u32) {
        self.path_cmd = PATH_CMD_MOVE_TO;
        self.angle = self.start;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if is_stop(self.path_cmd) {
            return PATH_CMD_STOP;
        }

        if (self.angle < self.end - self.da / 4.0) != self.ccw {
            *x = self.x + self.end.cos() * self.rx;
            *y = self.y + self.end.sin() * self.ry;
            self.path_cmd = PATH_CMD_STOP;
            return PATH_CMD_LINE_TO;
        }

        *x = self.x + self.angle.cos() * self.rx;
        *y = self.y + self.angle.sin() * self.ry;

        self.angle += self.da;

        let pf = self.path_cmd;
        self.path_cmd = PATH_CMD_LINE_TO;
        pf
    }
}

// ============================================================================
// Tests
// ============================================================================
