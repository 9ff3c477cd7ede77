use std::f64::consts::TAU;

use crate::point::{Point, Rect};

/// A single vector path produced by the face geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Path {
    /// Full circle.
    Circle { center: Point, radius: f64 },
    /// Straight segment.
    Line { from: Point, to: Point },
    /// Cubic bézier from `from` to `to` with two control points.
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

impl Path {
    /// Approximate the path with a polyline.
    ///
    /// Circles and cubics are sampled at `segments` uniform steps (minimum 1);
    /// lines always yield their two endpoints. A circle's polyline is closed,
    /// so its first and last points coincide.
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        match *self {
            Path::Line { from, to } => vec![from, to],
            Path::Circle { center, radius } => (0..=segments)
                .map(|i| {
                    let angle = TAU * i as f64 / segments as f64;
                    center.offset(radius * angle.cos(), radius * angle.sin())
                })
                .collect(),
            Path::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => (0..=segments)
                .map(|i| cubic_point(from, ctrl1, ctrl2, to, i as f64 / segments as f64))
                .collect(),
        }
    }

    /// Axis-aligned box around the path.
    ///
    /// For cubics this is the box of the control polygon, which always
    /// contains the curve.
    pub fn bounding_box(&self) -> Rect {
        match *self {
            Path::Circle { center, radius } => Rect::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            ),
            Path::Line { from, to } => Rect::enclosing([from, to]).unwrap_or_default(),
            Path::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => Rect::enclosing([from, ctrl1, ctrl2, to]).unwrap_or_default(),
        }
    }
}

/// Evaluate a cubic bézier at `t` using de Casteljau's construction.
fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let a = p0.lerp(p1, t);
    let b = p1.lerp(p2, t);
    let c = p2.lerp(p3, t);
    let d = a.lerp(b, t);
    let e = b.lerp(c, t);
    d.lerp(e, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn line_flattens_to_endpoints() {
        let path = Path::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(4.0, 2.0),
        };
        assert_eq!(path.flatten(32), vec![Point::new(0.0, 0.0), Point::new(4.0, 2.0)]);
    }

    #[test]
    fn circle_polyline_is_closed_and_on_radius() {
        let center = Point::new(5.0, 5.0);
        let path = Path::Circle { center, radius: 2.0 };
        let pts = path.flatten(16);
        assert_eq!(pts.len(), 17);
        assert!(close(pts[0], pts[16]));
        for p in pts {
            let d = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!((d - 2.0).abs() < EPS, "distance was {d}");
        }
    }

    #[test]
    fn cubic_hits_both_endpoints() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(9.0, 0.0);
        let path = Path::Cubic {
            from,
            ctrl1: Point::new(3.0, 3.0),
            ctrl2: Point::new(6.0, 3.0),
            to,
        };
        let pts = path.flatten(8);
        assert!(close(pts[0], from));
        assert!(close(*pts.last().unwrap(), to));
        // Symmetric control points put the midpoint at 3/4 of the control depth.
        assert!(close(pts[4], Point::new(4.5, 2.25)));
    }

    #[test]
    fn zero_segments_still_flattens() {
        let path = Path::Circle {
            center: Point::default(),
            radius: 1.0,
        };
        assert_eq!(path.flatten(0).len(), 2);
    }

    #[test]
    fn circle_bounding_box() {
        let path = Path::Circle {
            center: Point::new(10.0, 10.0),
            radius: 3.0,
        };
        assert_eq!(path.bounding_box(), Rect::new(7.0, 7.0, 6.0, 6.0));
    }

    #[test]
    fn cubic_bounding_box_contains_curve() {
        let path = Path::Cubic {
            from: Point::new(0.0, 0.0),
            ctrl1: Point::new(1.0, -5.0),
            ctrl2: Point::new(2.0, -5.0),
            to: Point::new(3.0, 0.0),
        };
        let bb = path.bounding_box();
        for p in path.flatten(20) {
            assert!(p.x >= bb.min_x() - EPS && p.x <= bb.max_x() + EPS);
            assert!(p.y >= bb.min_y() - EPS && p.y <= bb.max_y() + EPS);
        }
    }
}
