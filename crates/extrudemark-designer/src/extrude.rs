//! Extrusion face construction
//!
//! A glyph is extruded by drawing a copy of its outline shifted by the
//! glyph's offset vector (the back face) and joining every front edge to its
//! shifted twin with a quadrilateral side face. Rendering order is back face,
//! side faces, optional back outline, then the front face on top so its fill
//! hides the seams between faces.
//!
//! Faces use the vertex order `[a + offset, b + offset, b, a]`. For concave
//! contours with a large offset this polygon can self-intersect; at the
//! decorative depths used for brand marks that is not visible.

use extrudemark_core::{translate_commands, Contour, PathCommand, Point};
use serde::{Deserialize, Serialize};

/// Edges shorter than this produce no side face. Near-duplicate samples from
/// flattening would otherwise show up as thin bands. An offset shorter than
/// this produces no side faces at all.
pub const FACE_EPSILON: f64 = 0.45;

/// One quadrilateral joining a front edge to its back copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideFace {
    /// `[a + offset, b + offset, b, a]`
    pub corners: [Point; 4],
    pub color: String,
}

impl SideFace {
    pub fn new(a: Point, b: Point, offset: Point, color: String) -> Self {
        Self {
            corners: [a + offset, b + offset, b, a],
            color,
        }
    }
}

/// Renderable extrusion of one glyph, in canvas coordinates before the
/// glyph's rotation is applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtrusionGeometry {
    /// Positioned outline commands, curves preserved
    pub front: Vec<PathCommand>,
    /// `front` translated by `offset`
    pub back: Vec<PathCommand>,
    /// Flattened front contours used for faces and bounds
    pub contours: Vec<Contour>,
    pub faces: Vec<SideFace>,
    pub offset: Point,
}

impl ExtrusionGeometry {
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }
}

/// Appends the side faces of one contour to `out`.
///
/// `face_counter` is shared by all contours of a glyph so colour selection
/// continues across contours instead of restarting. It advances only for
/// faces that are actually emitted. A zero-length extrusion emits nothing.
pub fn push_side_faces<F>(
    contour: &Contour,
    offset: Point,
    glyph_index: usize,
    face_counter: &mut usize,
    select_color: &F,
    out: &mut Vec<SideFace>,
) where
    F: Fn(usize, usize) -> String,
{
    if contour.is_degenerate() || offset.distance_to(&Point::ORIGIN) < FACE_EPSILON {
        return;
    }
    for (a, b) in contour.edges() {
        if a.distance_to(&b) < FACE_EPSILON {
            continue;
        }
        let color = select_color(*face_counter, glyph_index);
        out.push(SideFace::new(a, b, offset, color));
        *face_counter += 1;
    }
}

/// Builds the full extrusion of a glyph from its positioned outline and the
/// contours flattened from it.
pub fn build_extrusion<F>(
    front: Vec<PathCommand>,
    contours: Vec<Contour>,
    offset: Point,
    glyph_index: usize,
    select_color: &F,
) -> ExtrusionGeometry
where
    F: Fn(usize, usize) -> String,
{
    let mut faces = Vec::new();
    let mut face_counter = 0;
    for contour in &contours {
        push_side_faces(
            contour,
            offset,
            glyph_index,
            &mut face_counter,
            select_color,
            &mut faces,
        );
    }

    ExtrusionGeometry {
        back: translate_commands(&front, offset),
        front,
        contours,
        faces,
        offset,
    }
}
