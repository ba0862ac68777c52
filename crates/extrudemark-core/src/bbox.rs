//! Axis-aligned bounding boxes over rotated glyph geometry.
//!
//! Bounds start out undefined: an accumulator is an `Option<BoundingBox>`
//! and the first merged point establishes the initial box. Callers that end
//! up with `None` (no glyph contributed a point) must handle that case
//! themselves rather than treating it as a zero-sized box.
//!
//! No margin is ever added here. Breathing room around the content is the
//! caller's business.

use serde::{Deserialize, Serialize};

use crate::types::{Contour, Point};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Zero-area box located at `p`.
    pub fn from_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    /// Widens the box to include `p`. Never narrows it.
    pub fn include(self, p: Point) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            min_y: self.min_y.min(p.y),
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(self, other: BoundingBox) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Translation that moves the minimum corner onto the origin.
    pub fn translation_to_origin(&self) -> Point {
        Point::new(-self.min_x, -self.min_y)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Merges `point` into a possibly undefined box.
pub fn merge(bounds: Option<BoundingBox>, point: Point) -> BoundingBox {
    match bounds {
        Some(b) => b.include(point),
        None => BoundingBox::from_point(point),
    }
}

/// Merges two possibly undefined boxes.
pub fn merge_bounds(a: Option<BoundingBox>, b: Option<BoundingBox>) -> Option<BoundingBox> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Bounds of an extruded glyph after rotation.
///
/// Every sampled point contributes twice: once at its front position and once
/// shifted by `offset` (the back copy). Both are rotated about `center` by
/// `rotation_deg` before being merged. Returns `None` if the contours hold no
/// points at all.
pub fn bounds_of_rotated_geometry(
    contours: &[Contour],
    center: Point,
    rotation_deg: f64,
    offset: Point,
) -> Option<BoundingBox> {
    let mut bounds = None;
    for contour in contours {
        for &p in &contour.points {
            let front = p.rotate_about(center, rotation_deg);
            let back = (p + offset).rotate_about(center, rotation_deg);
            bounds = Some(merge(Some(merge(bounds, front)), back));
        }
    }
    bounds
}

/// Bounds of the unrotated front and back copies of `contours`.
pub fn bounds_of_extrusion(contours: &[Contour], offset: Point) -> Option<BoundingBox> {
    bounds_of_rotated_geometry(contours, Point::ORIGIN, 0.0, offset)
}
