//! Vector paths, the output of every shape generator.
//!
//! A `Path` is an ordered list of drawing commands (move, line, arc, close).
//! Arcs are kept exact; `PathVertices` flattens them on demand into the
//! `VertexSource` protocol so paths can be measured, transformed or exported.
//!
//! After `ClosePath` there is no current point. A `LineTo` issued without a
//! current point starts a new sub-path there, as if it were a `MoveTo`.

use std::fmt;

use crate::arc::ArcVertices;
use crate::basics::{
    is_close, is_line_to, is_move_to, is_stop, Angle, PointD, RectD, VertexSource,
    PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP, PATH_FLAGS_CLOSE,
};
use crate::bounding_rect::bounding_rect_single;
use crate::ellipse::EllipseVertices;
use crate::trans_affine::TransAffine;

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(PointD),
    LineTo(PointD),
    /// Circular arc. With no current point the arc starts a new sub-path;
    /// otherwise a straight line joins the current point to the arc start.
    ///
    /// `clockwise == false` sweeps toward increasing angles.
    AddArc {
        center: PointD,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        clockwise: bool,
    },
    ClosePath,
}

/// Compact number formatting for dumps and SVG: integers print without a
/// fraction, everything else with at most three decimals.
pub(crate) fn format_coord(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{:.0}", v);
    }
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

impl fmt::Display for PathCommand {
    /// SVG-like mnemonics; arc angles in degrees.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", format_coord(p.x), format_coord(p.y)),
            PathCommand::LineTo(p) => write!(f, "L {} {}", format_coord(p.x), format_coord(p.y)),
            PathCommand::AddArc {
                center,
                radius,
                start_angle,
                end_angle,
                clockwise,
            } => write!(
                f,
                "ARC {} {} r={} {}..{} {}",
                format_coord(center.x),
                format_coord(center.y),
                format_coord(*radius),
                format_coord(start_angle.to_degrees()),
                format_coord(end_angle.to_degrees()),
                if *clockwise { "cw" } else { "ccw" }
            ),
            PathCommand::ClosePath => write!(f, "Z"),
        }
    }
}

/// Ordered sequence of drawing commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    // ---------------------------------------------------------------
    // Path construction
    // ---------------------------------------------------------------

    pub fn move_to(&mut self, p: PointD) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: PointD) {
        self.commands.push(PathCommand::LineTo(p));
    }

    /// Append a circular arc. The radius is used as given.
    pub fn add_arc(
        &mut self,
        center: PointD,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        clockwise: bool,
    ) {
        self.commands.push(PathCommand::AddArc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
    }

    pub fn close_subpath(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    /// Append a closed rectangle: top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn add_rect(&mut self, r: &RectD) {
        self.move_to(PointD::new(r.x1, r.y1));
        self.line_to(PointD::new(r.x2, r.y1));
        self.line_to(PointD::new(r.x2, r.y2));
        self.line_to(PointD::new(r.x1, r.y2));
        self.close_subpath();
    }

    /// Append the ellipse inscribed in `r`, flattened to a closed polygon
    /// that starts at the rightmost point.
    pub fn add_ellipse_in(&mut self, r: &RectD, approximation_scale: f64) {
        let mut e = EllipseVertices::in_rect(r, approximation_scale);
        self.concat_vertices(&mut e, &TransAffine::new());
    }

    /// Append all commands of another path.
    pub fn add_path(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    /// Append the vertices of a vertex source, mapped through `m`.
    pub fn concat_vertices(&mut self, vs: &mut dyn VertexSource, m: &TransAffine) {
        let mut x = 0.0;
        let mut y = 0.0;
        vs.rewind(0);
        loop {
            let cmd = vs.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            if is_move_to(cmd) {
                self.move_to(m.transform_point(PointD::new(x, y)));
            } else if is_line_to(cmd) {
                self.line_to(m.transform_point(PointD::new(x, y)));
            } else if is_close(cmd) {
                self.close_subpath();
            }
        }
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of sub-paths: every `MoveTo`, plus any arc or line that has to
    /// open a new sub-path because there is no current point.
    pub fn subpath_count(&self) -> usize {
        let mut open = false;
        let mut count = 0;
        for c in &self.commands {
            match c {
                PathCommand::MoveTo(_) => {
                    count += 1;
                    open = true;
                }
                PathCommand::LineTo(_) | PathCommand::AddArc { .. } => {
                    if !open {
                        count += 1;
                        open = true;
                    }
                }
                PathCommand::ClosePath => open = false,
            }
        }
        count
    }

    /// Number of explicit `LineTo` commands.
    pub fn line_segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    /// The point the next command would continue from, if any.
    pub fn current_point(&self) -> Option<PointD> {
        match self.commands.last()? {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::AddArc {
                center,
                radius,
                end_angle,
                ..
            } => {
                let (s, c) = end_angle.to_radians().sin_cos();
                Some(PointD::new(center.x + c * radius, center.y + s * radius))
            }
            PathCommand::ClosePath => None,
        }
    }

    /// Bounding box of the flattened path.
    pub fn bounding_rect(&self) -> Option<RectD> {
        bounding_rect_single(&mut self.vertices(), 0)
    }

    /// A copy mapped through `m`. Arcs are flattened first, so the result
    /// holds only moves, lines and closes, and is exact for any affine map.
    pub fn transformed(&self, m: &TransAffine) -> Path {
        let mut vs = self.vertices();
        vs.set_approximation_scale(m.get_scale());
        let mut out = Path::new();
        out.concat_vertices(&mut vs, m);
        out
    }

    /// Flattening vertex source over this path.
    pub fn vertices(&self) -> PathVertices<'_> {
        PathVertices::new(&self.commands)
    }
}

// ============================================================================
// PathVertices
// ============================================================================

/// Flattens a path into `PATH_CMD_*` vertices.
pub struct PathVertices<'a> {
    commands: &'a [PathCommand],
    index: usize,
    arc: Option<ArcVertices>,
    open: bool,
    scale: f64,
}

impl<'a> PathVertices<'a> {
    pub fn new(commands: &'a [PathCommand]) -> Self {
        Self {
            commands,
            index: 0,
            arc: None,
            open: false,
            scale: 1.0,
        }
    }

    /// Finer arcs for larger values; see `ArcVertices`.
    pub fn set_approximation_scale(&mut self, s: f64) {
        self.scale = s;
    }
}

impl VertexSource for PathVertices<'_> {
    fn rewind(&mut self, _path_id: u32) {
        self.index = 0;
        self.arc = None;
        self.open = false;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        loop {
            if let Some(arc) = self.arc.as_mut() {
                let cmd = arc.vertex(x, y);
                if !is_stop(cmd) {
                    let joined = is_move_to(cmd) && self.open;
                    self.open = true;
                    return if joined { PATH_CMD_LINE_TO } else { cmd };
                }
                self.arc = None;
            }

            let Some(c) = self.commands.get(self.index) else {
                return PATH_CMD_STOP;
            };
            self.index += 1;

            match *c {
                PathCommand::MoveTo(p) => {
                    *x = p.x;
                    *y = p.y;
                    self.open = true;
                    return PATH_CMD_MOVE_TO;
                }
                PathCommand::LineTo(p) => {
                    *x = p.x;
                    *y = p.y;
                    let cmd = if self.open {
                        PATH_CMD_LINE_TO
                    } else {
                        PATH_CMD_MOVE_TO
                    };
                    self.open = true;
                    return cmd;
                }
                PathCommand::AddArc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => {
                    let mut arc = ArcVertices::new(
                        center.x,
                        center.y,
                        radius,
                        radius,
                        start_angle.to_radians(),
                        end_angle.to_radians(),
                        !clockwise,
                    );
                    arc.set_approximation_scale(self.scale);
                    arc.rewind(0);
                    self.arc = Some(arc);
                }
                PathCommand::ClosePath => {
                    if self.open {
                        self.open = false;
                        return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE;
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
