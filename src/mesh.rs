// Copyright 2025 Lars Brubaker
// License: MIT
//
// Whole-mesh triangulation over flat topology arrays.
//
// Runs in two passes:
//   1. Validate the topology and lay out every face's output range with a
//      prefix sum over the number of polygons and corners it will emit.
//   2. Triangulate each face into its own disjoint slices of the pre-sized
//      output arrays. Faces share nothing mutable, so this pass can run on the
//      rayon pool. Output is identical whether it does or not.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::attribute::LookupTables;
use crate::error::{TriangulateError, TriangulateResult};
use crate::face::{emitted_corners, emitted_triangles, triangulate_face};
use crate::geom::Point;
use crate::quad::QuadSplitRule;

/// Tuning knobs for a mesh pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MeshOptions {
    pub quad_rule: QuadSplitRule,
    /// Allow the per-face pass to run on the rayon pool.
    pub parallel: bool,
    /// Minimum face count before the parallel path is taken.
    pub parallel_threshold: usize,
    /// Reject faces with more sides than this.
    pub max_face_sides: Option<usize>,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            quad_rule: QuadSplitRule::RawEdges,
            parallel: true,
            parallel_threshold: 1024,
            max_face_sides: None,
        }
    }
}

/// Where one face reads its input and writes its output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceLayout {
    pub face: usize,
    pub sides: usize,
    /// Position of the face's first index in the source index array.
    pub vertex_offset: usize,
    /// Position of the face's first polygon in the output count array.
    pub triangle_offset: usize,
    /// Position of the face's first corner in the output index array.
    pub corner_offset: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshLayout {
    pub faces: Vec<FaceLayout>,
    pub triangle_count: usize,
    pub corner_count: usize,
}

/// Triangulated topology plus the tables to carry attributes across.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshTriangulation {
    pub face_vertex_counts: Vec<u32>,
    pub face_vertex_indices: Vec<u32>,
    pub lookup: LookupTables,
}

impl MeshTriangulation {
    /// Number of output polygons.
    pub fn triangle_count(&self) -> usize {
        self.face_vertex_counts.len()
    }

    /// Empties every array, keeping their allocations.
    pub fn clear(&mut self) {
        self.face_vertex_counts.clear();
        self.face_vertex_indices.clear();
        self.lookup.clear();
    }
}

/// Validates the topology and computes every face's input and output ranges.
pub fn plan_layout(
    counts: &[u32],
    indices: &[u32],
    point_count: usize,
    max_face_sides: Option<usize>,
) -> TriangulateResult<MeshLayout> {
    let mut expected = 0usize;
    for (face, &count) in counts.iter().enumerate() {
        if count == 0 {
            return Err(TriangulateError::EmptyFace { face });
        }
        expected += count as usize;
    }
    if expected != indices.len() {
        return Err(TriangulateError::MalformedTopology {
            expected,
            actual: indices.len(),
        });
    }

    let mut layout = MeshLayout {
        faces: Vec::with_capacity(counts.len()),
        triangle_count: 0,
        corner_count: 0,
    };
    let mut vertex_offset = 0usize;
    for (face, &count) in counts.iter().enumerate() {
        let sides = count as usize;
        if let Some(limit) = max_face_sides {
            if sides > limit {
                return Err(TriangulateError::FaceTooLarge { face, sides, limit });
            }
        }
        let face_indices = &indices[vertex_offset..vertex_offset + sides];
        if let Some(&index) = face_indices.iter().find(|&&i| i as usize >= point_count) {
            return Err(TriangulateError::IndexOutOfRange { face, index, point_count });
        }

        layout.faces.push(FaceLayout {
            face,
            sides,
            vertex_offset,
            triangle_offset: layout.triangle_count,
            corner_offset: layout.corner_count,
        });
        layout.triangle_count += emitted_triangles(sides);
        layout.corner_count += emitted_corners(sides);
        vertex_offset += sides;
    }
    Ok(layout)
}

/// Output ranges owned by a single face.
struct FaceSlot<'a> {
    layout: &'a FaceLayout,
    counts: &'a mut [u32],
    indices: &'a mut [u32],
    uniform: &'a mut [u32],
    face_varying: &'a mut [u32],
}

/// Cuts `data` into consecutive mutable chunks of the given lengths.
fn split_by<'a>(
    mut data: &'a mut [u32],
    lens: impl Iterator<Item = usize>,
) -> Vec<&'a mut [u32]> {
    let mut chunks = Vec::new();
    for len in lens {
        let (head, tail) = std::mem::take(&mut data).split_at_mut(len);
        chunks.push(head);
        data = tail;
    }
    chunks
}

fn fill_face(slot: FaceSlot<'_>, indices: &[u32], points: &[Point], quad_rule: QuadSplitRule) {
    let FaceSlot {
        layout,
        counts,
        indices: out_indices,
        uniform,
        face_varying,
    } = slot;
    let face_indices = &indices[layout.vertex_offset..layout.vertex_offset + layout.sides];
    let face_points: Vec<Point> = face_indices.iter().map(|&i| points[i as usize]).collect();

    let tri = triangulate_face(&face_points, quad_rule);

    counts.copy_from_slice(&tri.side_counts);
    uniform.fill(layout.face as u32);
    for ((dst, lookup), &corner) in out_indices
        .iter_mut()
        .zip(face_varying.iter_mut())
        .zip(&tri.corner_ids)
    {
        let corner = corner as usize;
        *dst = face_indices[corner];
        *lookup = (layout.vertex_offset + corner) as u32;
    }
}

/// Triangulates every face of a mesh given as flat arrays.
///
/// `counts` holds the side count of each face, `indices` the flattened point
/// indices of all faces, `points` the point positions. Structural problems are
/// reported before anything is written.
pub fn triangulate_mesh(
    counts: &[u32],
    indices: &[u32],
    points: &[Point],
    options: &MeshOptions,
) -> TriangulateResult<MeshTriangulation> {
    info!(
        faces = counts.len(),
        indices = indices.len(),
        points = points.len(),
        "Starting mesh triangulation"
    );

    let layout = plan_layout(counts, indices, points.len(), options.max_face_sides)?;
    debug!(
        triangles = layout.triangle_count,
        corners = layout.corner_count,
        "Planned output layout"
    );

    let mut out_counts = vec![0u32; layout.triangle_count];
    let mut out_indices = vec![0u32; layout.corner_count];
    let mut uniform = vec![0u32; layout.triangle_count];
    let mut face_varying = vec![0u32; layout.corner_count];

    let tri_lens = || layout.faces.iter().map(|f| emitted_triangles(f.sides));
    let corner_lens = || layout.faces.iter().map(|f| emitted_corners(f.sides));

    let slots: Vec<FaceSlot<'_>> = layout
        .faces
        .iter()
        .zip(split_by(&mut out_counts, tri_lens()))
        .zip(split_by(&mut out_indices, corner_lens()))
        .zip(split_by(&mut uniform, tri_lens()))
        .zip(split_by(&mut face_varying, corner_lens()))
        .map(|((((layout, counts), indices), uniform), face_varying)| FaceSlot {
            layout,
            counts,
            indices,
            uniform,
            face_varying,
        })
        .collect();

    let parallel = options.parallel && slots.len() >= options.parallel_threshold;
    let quad_rule = options.quad_rule;
    if parallel {
        slots
            .into_par_iter()
            .for_each(|slot| fill_face(slot, indices, points, quad_rule));
    } else {
        slots
            .into_iter()
            .for_each(|slot| fill_face(slot, indices, points, quad_rule));
    }

    info!(
        faces = counts.len(),
        triangles = layout.triangle_count,
        parallel,
        "Mesh triangulation complete"
    );

    Ok(MeshTriangulation {
        face_vertex_counts: out_counts,
        face_vertex_indices: out_indices,
        lookup: LookupTables { uniform, face_varying },
    })
}
