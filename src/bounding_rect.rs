//! Bounding rectangle calculation.
//!
//! Computes the axis-aligned bounding box of a vertex source.

use crate::basics::{is_stop, is_vertex, unite_rectangles, RectD, VertexSource};

/// Compute the bounding rectangle of a single path from a vertex source.
///
/// Rewinds the vertex source to `path_id`, iterates all vertices, and
/// returns the axis-aligned bounding box. Returns `None` if no vertices
/// are found.
pub fn bounding_rect_single(vs: &mut dyn VertexSource, path_id: u32) -> Option<RectD> {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut bounds: Option<RectD> = None;

    vs.rewind(path_id);
    loop {
        let cmd = vs.vertex(&mut x, &mut y);
        if is_stop(cmd) {
            break;
        }
        if is_vertex(cmd) {
            let point = RectD::new(x, y, x, y);
            bounds = Some(match bounds {
                Some(b) => unite_rectangles(&b, &point),
                None => point,
            });
        }
    }
    bounds
}

// ============================================================================
// Tests
// ============================================================================
