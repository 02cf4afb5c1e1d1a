//! The largest circle centred in the rectangle, optionally inset.

use super::{degenerate, InsettableShape, Shape};
use crate::basics::{Angle, RectD, PI};
use crate::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub inset_amount: f64,
}

impl Shape for Circle {
    fn path(&self, rect: &RectD) -> Path {
        circle_path(rect, self.inset_amount)
    }
}

impl InsettableShape for Circle {
    fn inset(&self, amount: f64) -> Self {
        Self {
            inset_amount: self.inset_amount + amount,
        }
    }
}

/// Radius of the inset circle in `rect`, never below zero.
pub fn circle_radius(rect: &RectD, inset_amount: f64) -> f64 {
    (rect.width().min(rect.height()) / 2.0 - inset_amount).max(0.0)
}

/// A full arc starting at the rightmost point, then `ClosePath`.
pub fn circle_path(rect: &RectD, inset_amount: f64) -> Path {
    let mut path = Path::new();
    if degenerate("circle", rect) {
        return path;
    }

    let radius = circle_radius(rect, inset_amount);
    if !(radius > 0.0) {
        log::debug!("circle: inset {} leaves no radius", inset_amount);
        return path;
    }

    path.add_arc(
        rect.center(),
        radius,
        Angle::ZERO,
        Angle::radians(2.0 * PI),
        false,
    );
    path.close_subpath();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;

    #[test]
    fn test_circle_fits_shorter_side() {
        let rect = RectD::from_xywh(0.0, 0.0, 300.0, 200.0);
        let p = Circle::default().path(&rect);
        assert_eq!(p.len(), 2);
        match p.commands()[0] {
            PathCommand::AddArc { center, radius, .. } => {
                assert_eq!(center.x, 150.0);
                assert_eq!(center.y, 100.0);
                assert_eq!(radius, 100.0);
            }
            other => panic!("expected an arc, got {:?}", other),
        }
        let b = p.bounding_rect().unwrap();
        assert!(rect.contains_rect(&b, 1e-9));
        assert!((b.height() - 200.0).abs() < 0.5);
    }

    #[test]
    fn test_inset_circle() {
        let rect = RectD::from_xywh(0.0, 0.0, 100.0, 100.0);
        let c = Circle::default().inset(10.0).inset(5.0);
        assert_eq!(c.inset_amount, 15.0);
        assert_eq!(circle_radius(&rect, c.inset_amount), 35.0);
        assert!(c.inset(35.0).path(&rect).is_empty());
        assert!(c.inset(100.0).path(&rect).is_empty());
        assert_eq!(circle_radius(&rect, 100.0), 0.0);
    }

    #[test]
    fn test_circle_is_one_closed_subpath() {
        let rect = RectD::from_xywh(10.0, 10.0, 50.0, 50.0);
        let p = circle_path(&rect, 0.0);
        assert_eq!(p.subpath_count(), 1);
        assert_eq!(p.commands()[1], PathCommand::ClosePath);
    }
}
