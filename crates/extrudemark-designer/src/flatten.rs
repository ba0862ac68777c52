//! Curve flattening
//!
//! Turns a glyph's path commands into closed polylines. Quadratic and cubic
//! segments are sampled at a fixed number of evenly spaced parameter steps in
//! `(0, 1]` rather than adaptively, so the sample count (and therefore the
//! side-face count) depends only on the outline and the resolution.

use extrudemark_core::{Contour, Error, PathCommand, Point, Result};
use lyon::geom::{point, CubicBezierSegment, QuadraticBezierSegment};

/// Default number of samples per curve segment.
pub const DEFAULT_CURVE_RESOLUTION: u32 = 12;

/// A closing point is appended only when the contour ends farther than
/// this from its start.
pub const CLOSE_EPSILON: f64 = 0.25;

fn to_lyon(p: Point) -> lyon::geom::Point<f64> {
    point(p.x, p.y)
}

fn from_lyon(p: lyon::geom::Point<f64>) -> Point {
    Point::new(p.x, p.y)
}

/// Flattens `commands` into contours, sampling each curve `resolution` times.
///
/// Every `MoveTo` starts a new contour. `Close` snaps the contour shut and
/// seals it. A drawing command with no current point (nothing since the
/// last `Close`, or no `MoveTo` at all) is a malformed outline.
///
/// Contours that end up with fewer than two points are dropped.
pub fn flatten_outline(commands: &[PathCommand], resolution: u32) -> Result<Vec<Contour>> {
    let steps = resolution.max(1);
    let mut contours = Vec::new();
    let mut current: Option<Vec<Point>> = None;

    for (index, command) in commands.iter().enumerate() {
        match *command {
            PathCommand::MoveTo(p) => {
                if let Some(points) = current.take() {
                    push_contour(&mut contours, points, false);
                }
                current = Some(vec![p]);
            }
            PathCommand::LineTo(p) => {
                let points = open_contour(&mut current, index, "line_to")?;
                points.push(p);
            }
            PathCommand::QuadTo { ctrl, to } => {
                let points = open_contour(&mut current, index, "quad_to")?;
                let from = last_point(points, index)?;
                let segment = QuadraticBezierSegment {
                    from: to_lyon(from),
                    ctrl: to_lyon(ctrl),
                    to: to_lyon(to),
                };
                for i in 1..=steps {
                    let t = f64::from(i) / f64::from(steps);
                    points.push(from_lyon(segment.sample(t)));
                }
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                let points = open_contour(&mut current, index, "cubic_to")?;
                let from = last_point(points, index)?;
                let segment = CubicBezierSegment {
                    from: to_lyon(from),
                    ctrl1: to_lyon(ctrl1),
                    ctrl2: to_lyon(ctrl2),
                    to: to_lyon(to),
                };
                for i in 1..=steps {
                    let t = f64::from(i) / f64::from(steps);
                    points.push(from_lyon(segment.sample(t)));
                }
            }
            PathCommand::Close => {
                let mut points = current
                    .take()
                    .ok_or_else(|| Error::malformed(index, "close without an open subpath"))?;
                if let (Some(&start), Some(&end)) = (points.first(), points.last()) {
                    if start.distance_to(&end) > CLOSE_EPSILON {
                        points.push(start);
                    }
                }
                push_contour(&mut contours, points, true);
            }
        }
    }

    if let Some(points) = current.take() {
        push_contour(&mut contours, points, false);
    }

    Ok(contours)
}

fn open_contour<'a>(
    current: &'a mut Option<Vec<Point>>,
    index: usize,
    op: &str,
) -> Result<&'a mut Vec<Point>> {
    current
        .as_mut()
        .ok_or_else(|| Error::malformed(index, format!("{} without a current point", op)))
}

fn last_point(points: &[Point], index: usize) -> Result<Point> {
    points
        .last()
        .copied()
        .ok_or_else(|| Error::malformed(index, "curve without a start point"))
}

fn push_contour(contours: &mut Vec<Contour>, points: Vec<Point>, closed: bool) {
    let contour = Contour::new(points, closed);
    if !contour.is_degenerate() {
        contours.push(contour);
    }
}
