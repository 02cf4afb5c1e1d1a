//! Scene files.
//!
//! A scene is a JSON description of a canvas and a list of styled shapes:
//!
//! ```json
//! {
//!   "width": 300, "height": 300,
//!   "items": [
//!     { "shape": "triangle", "stroke": "#ff0000", "line_width": 10 },
//!     { "shape": "arc", "start_degrees": 0, "end_degrees": 110, "clockwise": true,
//!       "frame": { "x": 0, "y": 0, "width": 300, "height": 300 } }
//!   ]
//! }
//! ```
//!
//! `Scene::layers` turns the items into paths plus resolved colours; the
//! SVG writer and the command dump both start from there.

use std::fmt::Write as _;
use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::basics::{Angle, FillingRule, RectD};
use crate::color::Rgba;
use crate::error::{ShapeError, ShapeResult};
use crate::path::Path;
use crate::shapes::checkerboard::MAX_CELLS;
use crate::shapes::{
    Arc, Checkerboard, Circle, ColorCyclingCircle, Flower, InsettableShape, Shape, Trapezoid,
    Triangle,
};

/// Shape names accepted in the `shape` field.
pub const SHAPE_NAMES: &[&str] = &[
    "checkerboard",
    "trapezoid",
    "triangle",
    "arc",
    "flower",
    "circle",
    "color_cycling_circle",
];

fn default_scale() -> f64 {
    1.0
}

fn default_line_width() -> f64 {
    1.0
}

fn default_rows() -> i32 {
    4
}

fn default_petal_offset() -> f64 {
    -20.0
}

fn default_petal_width() -> f64 {
    100.0
}

fn default_steps() -> i32 {
    100
}

/// Shape parameters as written in a scene file. Arc angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeSpec {
    Checkerboard {
        #[serde(default = "default_rows")]
        rows: i32,
        #[serde(default = "default_rows")]
        columns: i32,
    },
    Trapezoid {
        #[serde(default)]
        inset_amount: f64,
    },
    Triangle,
    Arc {
        start_degrees: f64,
        end_degrees: f64,
        #[serde(default)]
        clockwise: bool,
        #[serde(default)]
        inset_amount: f64,
    },
    Flower {
        #[serde(default = "default_petal_offset")]
        petal_offset: f64,
        #[serde(default = "default_petal_width")]
        petal_width: f64,
    },
    Circle {
        #[serde(default)]
        inset_amount: f64,
    },
    ColorCyclingCircle {
        #[serde(default)]
        amount: f64,
        #[serde(default = "default_steps")]
        steps: i32,
    },
}

impl ShapeSpec {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeSpec::Checkerboard { .. } => "checkerboard",
            ShapeSpec::Trapezoid { .. } => "trapezoid",
            ShapeSpec::Triangle => "triangle",
            ShapeSpec::Arc { .. } => "arc",
            ShapeSpec::Flower { .. } => "flower",
            ShapeSpec::Circle { .. } => "circle",
            ShapeSpec::ColorCyclingCircle { .. } => "color_cycling_circle",
        }
    }

    /// The single-path shape this entry describes. `None` for the
    /// colour-cycling circle, which draws many rings.
    pub fn shape(&self, approximation_scale: f64) -> Option<Box<dyn Shape>> {
        let shape: Box<dyn Shape> = match *self {
            ShapeSpec::Checkerboard { rows, columns } => Box::new(Checkerboard::new(rows, columns)),
            ShapeSpec::Trapezoid { inset_amount } => Box::new(Trapezoid::new(inset_amount)),
            ShapeSpec::Triangle => Box::new(Triangle),
            ShapeSpec::Arc {
                start_degrees,
                end_degrees,
                clockwise,
                inset_amount,
            } => Box::new(
                Arc::new(
                    Angle::degrees(start_degrees),
                    Angle::degrees(end_degrees),
                    clockwise,
                )
                .inset(inset_amount),
            ),
            ShapeSpec::Flower {
                petal_offset,
                petal_width,
            } => Box::new(Flower {
                approximation_scale,
                ..Flower::new(petal_offset, petal_width)
            }),
            ShapeSpec::Circle { inset_amount } => Box::new(Circle::default().inset(inset_amount)),
            ShapeSpec::ColorCyclingCircle { .. } => return None,
        };
        Some(shape)
    }
}

/// Placement of an item on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Frame> for RectD {
    fn from(f: Frame) -> RectD {
        RectD::from_xywh(f.x, f.y, f.width, f.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    #[serde(flatten)]
    pub shape: ShapeSpec,
    /// Defaults to the whole canvas.
    #[serde(default)]
    pub frame: Option<Frame>,
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default)]
    pub stroke: Option<String>,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Defaults to even-odd for flowers and non-zero otherwise.
    #[serde(default)]
    pub even_odd: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_scale")]
    pub approximation_scale: f64,
    #[serde(default)]
    pub items: Vec<SceneItem>,
}

/// A path ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Index of the scene item this layer came from.
    pub item: usize,
    pub path: Path,
    pub fill: Option<Rgba>,
    pub stroke: Option<Rgba>,
    /// When set, the stroke blends from `stroke` at the top to this colour
    /// at the bottom.
    pub stroke_end: Option<Rgba>,
    pub line_width: f64,
    pub filling_rule: FillingRule,
}

impl Scene {
    pub fn from_json(json: &str) -> ShapeResult<Scene> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        log::debug!(
            "scene: {}x{} canvas, {} items",
            scene.width,
            scene.height,
            scene.items.len()
        );
        Ok(scene)
    }

    pub fn load<P: AsRef<FsPath>>(path: P) -> ShapeResult<Scene> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> ShapeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> ShapeResult<()> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ShapeError::InvalidValue(
                    name.to_string(),
                    format!("{} (must be a positive number)", v),
                ))
            }
        };
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("approximation_scale", self.approximation_scale)?;
        for (i, item) in self.items.iter().enumerate() {
            if !(item.line_width.is_finite() && item.line_width >= 0.0) {
                return Err(ShapeError::InvalidValue(
                    format!("items[{}].line_width", i),
                    item.line_width.to_string(),
                ));
            }
            if let ShapeSpec::Checkerboard { rows, columns } = item.shape {
                let cells = rows.max(0) as i64 * columns.max(0) as i64;
                if cells > MAX_CELLS {
                    return Err(ShapeError::InvalidValue(
                        format!("items[{}].rows", i),
                        format!("{}x{} grid (at most {} cells)", rows, columns, MAX_CELLS),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn canvas(&self) -> RectD {
        RectD::from_xywh(0.0, 0.0, self.width, self.height)
    }

    /// Generate every item's paths and resolve its colours.
    ///
    /// Items without `fill` or `stroke` are filled black; colour-cycling
    /// circles default to stroking each ring with its own colour pair.
    pub fn layers(&self) -> ShapeResult<Vec<Layer>> {
        let mut layers = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            let rect = item.frame.map(RectD::from).unwrap_or_else(|| self.canvas());
            let fill = item.fill.as_deref().map(Rgba::from_hex).transpose()?;
            let stroke = item.stroke.as_deref().map(Rgba::from_hex).transpose()?;
            let even_odd = item
                .even_odd
                .unwrap_or(matches!(item.shape, ShapeSpec::Flower { .. }));
            let filling_rule = if even_odd {
                FillingRule::EvenOdd
            } else {
                FillingRule::NonZero
            };

            let before = layers.len();
            match (&item.shape, item.shape.shape(self.approximation_scale)) {
                (_, Some(shape)) => {
                    let path = shape.path(&rect);
                    if !path.is_empty() {
                        let fill = if fill.is_none() && stroke.is_none() {
                            Some(Rgba::black())
                        } else {
                            fill
                        };
                        layers.push(Layer {
                            item: index,
                            path,
                            fill,
                            stroke,
                            stroke_end: None,
                            line_width: item.line_width,
                            filling_rule,
                        });
                    }
                }
                (ShapeSpec::ColorCyclingCircle { amount, steps }, None) => {
                    for (path, stop) in ColorCyclingCircle::new(*amount, *steps).rings(&rect) {
                        let (stroke, stroke_end) = match stroke {
                            Some(s) => (Some(s), None),
                            None => (Some(stop.bright), Some(stop.dim)),
                        };
                        layers.push(Layer {
                            item: index,
                            path,
                            fill,
                            stroke,
                            stroke_end,
                            line_width: item.line_width,
                            filling_rule,
                        });
                    }
                }
                (other, None) => {
                    log::warn!("scene: item {} ({}) has no generator", index, other.name());
                }
            }
            if layers.len() == before {
                log::warn!(
                    "scene: item {} ({}) produced nothing in {:?}",
                    index,
                    item.shape.name(),
                    rect
                );
            }
        }
        Ok(layers)
    }

    /// Human-readable listing of every layer's path commands.
    pub fn dump_commands(&self) -> ShapeResult<String> {
        let mut out = String::new();
        for (n, layer) in self.layers()?.iter().enumerate() {
            let name = self.items[layer.item].shape.name();
            // Writing into a String cannot fail
            let _ = writeln!(
                out,
                "# layer {} (item {}, {}): {} commands, {} sub-paths",
                n,
                layer.item,
                name,
                layer.path.len(),
                layer.path.subpath_count()
            );
            for cmd in layer.path.commands() {
                let _ = writeln!(out, "{}", cmd);
            }
        }
        Ok(out)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "width": 300,
        "height": 300,
        "items": [
            { "shape": "triangle", "stroke": "#ff0000", "line_width": 10 },
            { "shape": "arc", "start_degrees": 0, "end_degrees": 110, "clockwise": true },
            { "shape": "flower", "fill": "#ffc0cb" },
            { "shape": "checkerboard", "rows": 8, "columns": 16 },
            { "shape": "trapezoid", "inset_amount": 50,
              "frame": { "x": 50, "y": 100, "width": 200, "height": 100 } },
            { "shape": "color_cycling_circle", "amount": 0.25, "steps": 10 }
        ]
    }"##;

    #[test]
    fn test_parse_sample() {
        let scene = Scene::from_json(SAMPLE).unwrap();
        assert_eq!(scene.items.len(), 6);
        assert_eq!(scene.approximation_scale, 1.0);
        assert_eq!(scene.items[0].shape, ShapeSpec::Triangle);
        assert_eq!(scene.items[0].line_width, 10.0);
        assert_eq!(
            scene.items[3].shape,
            ShapeSpec::Checkerboard {
                rows: 8,
                columns: 16
            }
        );
        assert_eq!(
            scene.items[4].frame,
            Some(Frame {
                x: 50.0,
                y: 100.0,
                width: 200.0,
                height: 100.0
            })
        );
    }

    #[test]
    fn test_defaults() {
        let scene = Scene::from_json(
            r#"{ "width": 10, "height": 10, "items": [ { "shape": "flower" } ] }"#,
        )
        .unwrap();
        assert_eq!(
            scene.items[0].shape,
            ShapeSpec::Flower {
                petal_offset: -20.0,
                petal_width: 100.0
            }
        );
        assert_eq!(scene.items[0].line_width, 1.0);
    }

    #[test]
    fn test_layers() {
        let scene = Scene::from_json(SAMPLE).unwrap();
        let layers = scene.layers().unwrap();
        // Five single-path items plus ten rings
        assert_eq!(layers.len(), 15);

        let triangle = &layers[0];
        assert_eq!(triangle.stroke, Some(Rgba::new_rgb(1.0, 0.0, 0.0)));
        assert_eq!(triangle.fill, None);

        let flower = &layers[2];
        assert_eq!(flower.filling_rule, FillingRule::EvenOdd);
        assert_eq!(flower.path.subpath_count(), 16);

        let board = &layers[3];
        assert_eq!(board.fill, Some(Rgba::black()));
        assert_eq!(board.filling_rule, FillingRule::NonZero);

        let trapezoid = &layers[4];
        let b = trapezoid.path.bounding_rect().unwrap();
        assert_eq!(b, RectD::from_xywh(50.0, 100.0, 200.0, 100.0));

        let ring = &layers[5];
        assert_eq!(ring.item, 5);
        assert!(ring.stroke.is_some() && ring.stroke_end.is_some());
    }

    #[test]
    fn test_empty_items_produce_no_layer() {
        let scene = Scene::from_json(
            r#"{ "width": 100, "height": 100, "items": [
                { "shape": "checkerboard", "rows": 0, "columns": 0 },
                { "shape": "arc", "start_degrees": 0, "end_degrees": 90, "inset_amount": 80 }
            ] }"#,
        )
        .unwrap();
        assert!(scene.layers().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_bad_canvas() {
        let err = Scene::from_json(r#"{ "width": 0, "height": 10 }"#).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidValue(ref f, _) if f == "width"));

        let err =
            Scene::from_json(r#"{ "width": 5, "height": 10, "approximation_scale": -1 }"#)
                .unwrap_err();
        assert!(matches!(err, ShapeError::InvalidValue(ref f, _) if f == "approximation_scale"));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let err = Scene::from_json(
            r#"{ "width": 5, "height": 5, "items": [
                { "shape": "checkerboard", "rows": 1000000000, "columns": 4 }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ShapeError::InvalidValue(ref f, _) if f == "items[0].rows"));

        // Negative counts draw nothing; exactly the limit is allowed
        let scene = Scene::from_json(
            r#"{ "width": 5, "height": 5, "items": [
                { "shape": "checkerboard", "rows": -100000, "columns": -100000 },
                { "shape": "checkerboard", "rows": 1024, "columns": 1024 }
            ] }"#,
        );
        assert!(scene.is_ok());
    }

    #[test]
    fn test_rejects_unknown_shape() {
        let err = Scene::from_json(
            r#"{ "width": 5, "height": 5, "items": [ { "shape": "hexagon" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ShapeError::Json(_)));
    }

    #[test]
    fn test_rejects_bad_color() {
        let scene = Scene::from_json(
            r#"{ "width": 5, "height": 5, "items": [ { "shape": "triangle", "fill": "red" } ] }"#,
        )
        .unwrap();
        assert!(matches!(scene.layers(), Err(ShapeError::InvalidColor(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let scene = Scene::from_json(SAMPLE).unwrap();
        let again = Scene::from_json(&scene.to_json().unwrap()).unwrap();
        assert_eq!(scene, again);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scene::load("/nonexistent/scene.json").unwrap_err();
        assert!(matches!(err, ShapeError::Io(_)));
    }

    #[test]
    fn test_dump_commands() {
        let scene = Scene::from_json(
            r#"{ "width": 100, "height": 100, "items": [ { "shape": "triangle" } ] }"#,
        )
        .unwrap();
        let dump = scene.dump_commands().unwrap();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("# layer 0 (item 0, triangle)"));
        assert_eq!(lines[1], "M 50 0");
        assert_eq!(lines[2], "L 0 100");
        assert_eq!(lines[5], "Z");
    }

    #[test]
    fn test_shape_names_cover_every_variant() {
        let entries = [
            ShapeSpec::Checkerboard { rows: 1, columns: 1 },
            ShapeSpec::Trapezoid { inset_amount: 0.0 },
            ShapeSpec::Triangle,
            ShapeSpec::Arc {
                start_degrees: 0.0,
                end_degrees: 1.0,
                clockwise: false,
                inset_amount: 0.0,
            },
            ShapeSpec::Flower {
                petal_offset: 0.0,
                petal_width: 1.0,
            },
            ShapeSpec::Circle { inset_amount: 0.0 },
            ShapeSpec::ColorCyclingCircle {
                amount: 0.0,
                steps: 1,
            },
        ];
        let names: Vec<&str> = entries.iter().map(|s| s.name()).collect();
        assert_eq!(names, SHAPE_NAMES);
    }
}
