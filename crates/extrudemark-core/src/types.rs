//! Geometry value types shared by the outline providers and the layout engine.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at `magnitude` along `angle_deg`, measured from +X towards +Y.
    pub fn from_polar(magnitude: f64, angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self::new(magnitude * rad.cos(), magnitude * rad.sin())
    }

    /// Rotates this point about `center` by `angle_deg` degrees.
    pub fn rotate_about(&self, center: Point, angle_deg: f64) -> Point {
        if angle_deg == 0.0 {
            return *self;
        }
        let angle_rad = angle_deg.to_radians();
        let cos_a = angle_rad.cos();
        let sin_a = angle_rad.sin();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point {
            x: center.x + dx * cos_a - dy * sin_a,
            y: center.y + dx * sin_a + dy * cos_a,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// One drawing instruction of a glyph outline.
///
/// A glyph's outline is an ordered list of commands and may hold several
/// `MoveTo ... Close` subpaths (the outer and inner rings of an "o").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

impl PathCommand {
    /// Applies `f` to every point (end and control points) of the command.
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> PathCommand {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::QuadTo { ctrl, to } => PathCommand::QuadTo {
                ctrl: f(ctrl),
                to: f(to),
            },
            PathCommand::CubicTo { ctrl1, ctrl2, to } => PathCommand::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }

    pub fn translated(&self, offset: Point) -> PathCommand {
        self.map_points(|p| p + offset)
    }

    /// The on-curve end point, if the command has one.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuadTo { to, .. } | PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }
}

/// Translates a whole command list, keeping its structure.
pub fn translate_commands(commands: &[PathCommand], offset: Point) -> Vec<PathCommand> {
    commands.iter().map(|c| c.translated(offset)).collect()
}

/// A flattened subpath.
///
/// For a closed subpath the first and last points coincide (within the
/// flattener's closing tolerance).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Contour {
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Contours with fewer than two points carry no edges.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs. A closed contour whose last point is not
    /// exactly its first also yields the wrap-around pair.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let wrap = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.closed && self.points.len() > 2 && first != last => {
                Some((*last, *first))
            }
            _ => None,
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(wrap)
    }
}

/// Raw outline of one character as supplied by an outline provider,
/// in font units with the Y axis pointing up.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlyphOutline {
    pub commands: Vec<PathCommand>,
    pub advance_width: f64,
}

impl GlyphOutline {
    pub fn new(commands: Vec<PathCommand>, advance_width: f64) -> Self {
        Self {
            commands,
            advance_width,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }
}
