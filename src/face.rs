// Copyright 2025 Lars Brubaker
// License: MIT
//
// Per-face dispatch between passthrough, quad split and n-gon removal.

use crate::geom::Point;
use crate::ngon::NgonTriangulator;
use crate::quad::{split_quad, QuadSplitRule};

/// Triangles produced for one face, as local corner ids into the face.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceTriangulation {
    /// One entry per emitted polygon (3, except for passed-through faces).
    pub side_counts: Vec<u32>,
    /// Flattened corner ids, `side_counts[i]` of them per polygon.
    pub corner_ids: Vec<u32>,
}

/// Number of polygons emitted for a face with `sides` corners.
#[inline]
pub fn emitted_triangles(sides: usize) -> usize {
    if sides <= 3 {
        1
    } else {
        sides - 2
    }
}

/// Number of corner references emitted for a face with `sides` corners.
#[inline]
pub fn emitted_corners(sides: usize) -> usize {
    if sides <= 3 {
        sides
    } else {
        3 * (sides - 2)
    }
}

/// Triangulates one face given its points in winding order.
///
/// Faces with three or fewer points are passed through untouched.
pub fn triangulate_face(points: &[Point], quad_rule: QuadSplitRule) -> FaceTriangulation {
    match points.len() {
        n if n <= 3 => FaceTriangulation {
            side_counts: vec![n as u32],
            corner_ids: (0..n as u32).collect(),
        },
        4 => {
            let quad = [points[0], points[1], points[2], points[3]];
            let (side_counts, corner_ids) = split_quad(&quad, quad_rule);
            FaceTriangulation {
                side_counts: side_counts.to_vec(),
                corner_ids: corner_ids.to_vec(),
            }
        }
        _ => {
            let (side_counts, corner_ids) = NgonTriangulator::new(points).triangulate();
            FaceTriangulation { side_counts, corner_ids }
        }
    }
}
