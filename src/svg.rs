//! SVG export.
//!
//! Writes scene layers as `<path>` elements. Arcs are flattened through
//! `PathVertices`, so the output only uses `M`, `L` and `Z`.

use std::fmt::Write as _;

use crate::basics::{is_close, is_line_to, is_move_to, is_stop, FillingRule, VertexSource};
use crate::color::Rgba;
use crate::error::ShapeResult;
use crate::path::{format_coord, Path};
use crate::scene::{Layer, Scene};

/// SVG path data for `path`, flattened at `approximation_scale`.
pub fn svg_path_data(path: &Path, approximation_scale: f64) -> String {
    let mut vs = path.vertices();
    vs.set_approximation_scale(approximation_scale);
    vs.rewind(0);

    let mut parts: Vec<String> = Vec::with_capacity(path.len());
    let mut x = 0.0;
    let mut y = 0.0;
    loop {
        let cmd = vs.vertex(&mut x, &mut y);
        if is_stop(cmd) {
            break;
        }
        if is_move_to(cmd) {
            parts.push(format!("M{} {}", format_coord(x), format_coord(y)));
        } else if is_line_to(cmd) {
            parts.push(format!("L{} {}", format_coord(x), format_coord(y)));
        } else if is_close(cmd) {
            parts.push("Z".to_string());
        }
    }
    parts.join(" ")
}

fn paint(color: Option<Rgba>) -> (String, Option<f64>) {
    match color {
        Some(c) if c.a < 1.0 => (c.to_hex(), Some(c.a)),
        Some(c) => (c.to_hex(), None),
        None => ("none".to_string(), None),
    }
}

fn write_layer(out: &mut String, n: usize, layer: &Layer, approximation_scale: f64) {
    let (fill, fill_opacity) = paint(layer.fill);
    let stroke = match (layer.stroke, layer.stroke_end) {
        (Some(top), Some(bottom)) => {
            let _ = writeln!(
                out,
                "  <defs><linearGradient id=\"g{n}\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
                 <stop offset=\"0\" stop-color=\"{}\"/><stop offset=\"1\" stop-color=\"{}\"/>\
                 </linearGradient></defs>",
                top.to_hex(),
                bottom.to_hex()
            );
            format!("url(#g{n})")
        }
        (s, _) => paint(s).0,
    };

    let _ = write!(
        out,
        "  <path d=\"{}\" fill=\"{}\"",
        svg_path_data(&layer.path, approximation_scale),
        fill
    );
    if let Some(a) = fill_opacity {
        let _ = write!(out, " fill-opacity=\"{}\"", format_coord(a));
    }
    if layer.filling_rule == FillingRule::EvenOdd {
        out.push_str(" fill-rule=\"evenodd\"");
    }
    if stroke != "none" {
        let _ = write!(
            out,
            " stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"",
            stroke,
            format_coord(layer.line_width)
        );
    }
    out.push_str("/>\n");
}

/// A standalone SVG document for `scene`.
pub fn render_svg(scene: &Scene) -> ShapeResult<String> {
    let layers = scene.layers()?;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = format_coord(scene.width),
        h = format_coord(scene.height)
    );
    for (n, layer) in layers.iter().enumerate() {
        write_layer(&mut out, n, layer, scene.approximation_scale);
    }
    out.push_str("</svg>\n");
    log::debug!("svg: {} layers, {} bytes", layers.len(), out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::RectD;
    use crate::shapes::{triangle_path, Circle, Shape};

    #[test]
    fn test_path_data_polygon() {
        let p = triangle_path(&RectD::from_xywh(0.0, 0.0, 100.0, 50.0));
        assert_eq!(svg_path_data(&p, 1.0), "M50 0 L0 50 L100 50 L50 0 Z");
    }

    #[test]
    fn test_path_data_flattens_arcs() {
        let p = Circle::default().path(&RectD::from_xywh(0.0, 0.0, 20.0, 20.0));
        let d = svg_path_data(&p, 1.0);
        assert!(d.starts_with("M20 10 L"));
        assert!(d.ends_with(" Z"));
        assert!(!d.contains('A'));
    }

    #[test]
    fn test_render_svg() {
        let scene = Scene::from_json(
            r##"{ "width": 200, "height": 100, "items": [
                { "shape": "flower", "fill": "#ff69b4" },
                { "shape": "triangle", "stroke": "#0000ff", "line_width": 10 },
                { "shape": "color_cycling_circle", "steps": 2, "line_width": 2 }
            ] }"##,
        )
        .unwrap();
        let svg = render_svg(&scene).unwrap();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"100\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<path ").count(), 4);
        assert!(svg.contains("fill=\"#ff69b4\" fill-rule=\"evenodd\""));
        assert!(svg.contains("stroke=\"#0000ff\" stroke-width=\"10\""));
        assert_eq!(svg.matches("<linearGradient").count(), 2);
        assert!(svg.contains("stroke=\"url(#g2)\""));
    }

    #[test]
    fn test_huge_arc_angles_render() {
        let scene = Scene::from_json(
            r##"{ "width": 300, "height": 300, "items": [
                { "shape": "arc", "start_degrees": 1e20, "end_degrees": 1.0000000000000002e20,
                  "clockwise": true, "stroke": "#00c000" }
            ] }"##,
        )
        .unwrap();
        let svg = render_svg(&scene).unwrap();
        assert_eq!(svg.matches("<path ").count(), 1);
        // One turn at most, however far apart the angles are
        assert!(svg.matches(" L").count() <= 4096);
    }

    #[test]
    fn test_translucent_fill() {
        let scene = Scene::from_json(
            r##"{ "width": 10, "height": 10, "items": [ { "shape": "triangle", "fill": "#ff000080" } ] }"##,
        )
        .unwrap();
        let svg = render_svg(&scene).unwrap();
        assert!(svg.contains("fill-opacity=\"0.502\""));
    }
}
