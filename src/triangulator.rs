// Copyright 2025 Lars Brubaker
// License: MIT
//
// Stateful front end: configure once, triangulate meshes, read the results
// back and push attributes through the lookup tables.

use crate::attribute::{Attribute, LookupTables};
use crate::error::TriangulateResult;
use crate::geom::Point;
use crate::mesh::{triangulate_mesh, MeshOptions, MeshTriangulation};
use crate::quad::QuadSplitRule;


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangulateOption {
    /// Run the per-face pass on the rayon pool for large meshes.
    Parallel,
    /// Choose quad diagonals from unit edge directions instead of raw edges.
    UnitQuadEdges,
}

#[derive(Clone, Debug, Default)]
pub struct Triangulator {
    options: MeshOptions,
    output: MeshTriangulation,
}

impl Triangulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_option(&mut self, option: TriangulateOption, value: bool) {
        match option {
            TriangulateOption::Parallel => self.options.parallel = value,
            TriangulateOption::UnitQuadEdges => {
                self.options.quad_rule = if value {
                    QuadSplitRule::UnitEdges
                } else {
                    QuadSplitRule::RawEdges
                }
            }
        }
    }

    /// Minimum number of faces before the parallel path is used.
    pub fn set_parallel_threshold(&mut self, faces: usize) {
        self.options.parallel_threshold = faces;
    }

    /// Reject meshes containing a face with more than `limit` sides.
    pub fn set_max_face_sides(&mut self, limit: Option<usize>) {
        self.options.max_face_sides = limit;
    }

    pub fn options(&self) -> &MeshOptions {
        &self.options
    }

    /// Triangulates a mesh given as flat topology arrays.
    ///
    /// On error the previous output is discarded and nothing is published.
    pub fn triangulate(
        &mut self,
        counts: &[u32],
        indices: &[u32],
        points: &[Point],
    ) -> TriangulateResult<()> {
        self.output.clear();
        self.output = triangulate_mesh(counts, indices, points, &self.options)?;
        Ok(())
    }

    // ─────── Accessors ────────────────────────────────────────────────────────

    pub fn triangle_count(&self) -> usize { self.output.triangle_count() }
    pub fn face_vertex_counts(&self) -> &[u32] { &self.output.face_vertex_counts }
    pub fn face_vertex_indices(&self) -> &[u32] { &self.output.face_vertex_indices }
    pub fn lookup(&self) -> &LookupTables { &self.output.lookup }

    /// Moves the last result out, leaving the triangulator empty.
    pub fn take_output(&mut self) -> MeshTriangulation {
        std::mem::take(&mut self.output)
    }

    /// Rewrites `attribute` for the last triangulated mesh.
    ///
    /// Returns whether anything was rewritten.
    pub fn remap<T: Clone>(&self, attribute: &mut Attribute<T>) -> TriangulateResult<bool> {
        attribute.remap(&self.output.lookup)
    }
}
