//! Checkerboard of alternating filled grid cells.

use super::{degenerate, Shape};
use crate::basics::RectD;
use crate::path::Path;

/// Largest grid a scene file may ask for. Bigger grids still generate, with
/// a warning.
pub const MAX_CELLS: i64 = 1 << 20;

/// A `rows` × `columns` grid where cells with an even `row + column` are
/// filled. Negative counts behave like zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkerboard {
    pub rows: i32,
    pub columns: i32,
}

impl Checkerboard {
    pub fn new(rows: i32, columns: i32) -> Self {
        Self { rows, columns }
    }
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

impl Shape for Checkerboard {
    fn path(&self, rect: &RectD) -> Path {
        checkerboard_path(rect, self.rows, self.columns)
    }
}

/// One closed rectangle sub-path per filled cell, in row-major order.
pub fn checkerboard_path(rect: &RectD, rows: i32, columns: i32) -> Path {
    let mut path = Path::new();
    if rows <= 0 || columns <= 0 {
        log::debug!("checkerboard: empty grid {}x{}", rows, columns);
        return path;
    }
    if degenerate("checkerboard", rect) {
        return path;
    }
    let cells = rows as i64 * columns as i64;
    if cells > MAX_CELLS {
        log::warn!("checkerboard: {}x{} grid asks for {} cells", rows, columns, cells);
    }

    let row_size = rect.height() / rows as f64;
    let column_size = rect.width() / columns as f64;

    for row in 0..rows {
        for column in 0..columns {
            if (row + column) % 2 == 0 {
                let cell = RectD::from_xywh(
                    rect.x1 + column_size * column as f64,
                    rect.y1 + row_size * row as f64,
                    column_size,
                    row_size,
                );
                path.add_rect(&cell);
            }
        }
    }

    log::trace!(
        "checkerboard: {}x{} grid, {} cells",
        rows,
        columns,
        path.subpath_count()
    );
    path
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::PointD;
    use crate::path::PathCommand;

    fn square() -> RectD {
        RectD::from_xywh(0.0, 0.0, 300.0, 300.0)
    }

    #[test]
    fn test_zero_counts_empty() {
        assert!(checkerboard_path(&square(), 0, 0).is_empty());
        assert!(checkerboard_path(&square(), 0, 5).is_empty());
        assert!(checkerboard_path(&square(), 5, 0).is_empty());
        assert!(checkerboard_path(&RectD::from_xywh(0.0, 0.0, 0.0, 0.0), 0, 0).is_empty());
    }

    #[test]
    fn test_negative_counts_empty() {
        assert!(checkerboard_path(&square(), -3, 4).is_empty());
        assert!(checkerboard_path(&square(), 4, -1).is_empty());
    }

    #[test]
    fn test_degenerate_rect_empty() {
        assert!(checkerboard_path(&RectD::from_xywh(0.0, 0.0, 0.0, 100.0), 4, 4).is_empty());
        assert!(checkerboard_path(&RectD::new(0.0, 0.0, f64::NAN, 1.0), 4, 4).is_empty());
    }

    #[test]
    fn test_cell_counts() {
        for rows in 1..7 {
            for columns in 1..7 {
                let p = checkerboard_path(&square(), rows, columns);
                let cells = (rows * columns) as usize;
                // Cell (0, 0) is always filled, so odd grids round up
                assert_eq!(p.subpath_count(), (cells + 1) / 2, "{}x{}", rows, columns);
            }
        }
    }

    #[test]
    fn test_cells_within_rect() {
        let rect = RectD::from_xywh(17.0, -40.0, 210.0, 95.0);
        let p = checkerboard_path(&rect, 7, 5);
        for cmd in p.commands() {
            if let PathCommand::MoveTo(q) | PathCommand::LineTo(q) = cmd {
                assert!(q.x >= rect.x1 - 1e-9 && q.x <= rect.x2 + 1e-9);
                assert!(q.y >= rect.y1 - 1e-9 && q.y <= rect.y2 + 1e-9);
            }
        }
        let bounds = p.bounding_rect().unwrap();
        assert!(rect.contains_rect(&bounds, 1e-9));
    }

    #[test]
    fn test_first_cell_geometry() {
        let p = checkerboard_path(&square(), 4, 4);
        assert_eq!(
            &p.commands()[..5],
            &[
                PathCommand::MoveTo(PointD::new(0.0, 0.0)),
                PathCommand::LineTo(PointD::new(75.0, 0.0)),
                PathCommand::LineTo(PointD::new(75.0, 75.0)),
                PathCommand::LineTo(PointD::new(0.0, 75.0)),
                PathCommand::ClosePath,
            ]
        );
        // Second filled cell skips (0, 1)
        assert_eq!(p.commands()[5], PathCommand::MoveTo(PointD::new(150.0, 0.0)));
    }

    #[test]
    fn test_shape_trait_idempotent() {
        let board = Checkerboard::new(8, 16);
        assert_eq!(board.path(&square()), board.path(&square()));
        assert_eq!(board.path(&square()).subpath_count(), 64);
        assert_eq!(Checkerboard::default(), Checkerboard::new(4, 4));
    }
}
