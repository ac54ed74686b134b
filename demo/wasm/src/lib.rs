// Copyright 2025 Lars Brubaker
// WASM bindings for mesh-triangulate

use mesh_triangulate::{
    Attribute, AttributeValues, Interpolation, Point, TriangulateOption, Triangulator,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// A stateful triangulator: feed flat mesh arrays, read back the result.
#[wasm_bindgen]
pub struct TriangulatorJs {
    inner: Triangulator,
    last_error: Option<String>,
}

#[wasm_bindgen]
impl TriangulatorJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TriangulatorJs {
        TriangulatorJs {
            inner: Triangulator::new(),
            last_error: None,
        }
    }

    /// Set an option (0 = Parallel, 1 = UnitQuadEdges).
    pub fn set_option(&mut self, option: u32, value: bool) {
        let opt = match option {
            0 => TriangulateOption::Parallel,
            1 => TriangulateOption::UnitQuadEdges,
            _ => return,
        };
        self.inner.set_option(opt, value);
    }

    /// Limit the number of sides a face may have (0 = no limit).
    pub fn set_max_face_sides(&mut self, limit: u32) {
        self.inner
            .set_max_face_sides(if limit == 0 { None } else { Some(limit as usize) });
    }

    /// Triangulate from face counts, flat indices and flat [x0,y0,z0, x1,...] points.
    /// Returns false on error; see `last_error`.
    pub fn triangulate(&mut self, counts: &[u32], indices: &[u32], points: &[f32]) -> bool {
        let points: Vec<Point> = points
            .chunks_exact(3)
            .map(|p| [p[0], p[1], p[2]])
            .collect();
        match self.inner.triangulate(counts, indices, &points) {
            Ok(()) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                false
            }
        }
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.clone()
    }

    pub fn triangle_count(&self) -> u32 {
        self.inner.triangle_count() as u32
    }

    pub fn get_counts(&self) -> Vec<u32> {
        self.inner.face_vertex_counts().to_vec()
    }

    pub fn get_indices(&self) -> Vec<u32> {
        self.inner.face_vertex_indices().to_vec()
    }

    pub fn get_uniform_lookup(&self) -> Vec<u32> {
        self.inner.lookup().uniform.clone()
    }

    pub fn get_face_varying_lookup(&self) -> Vec<u32> {
        self.inner.lookup().face_varying.clone()
    }

    /// Remap a flat float attribute with `components` floats per element.
    /// interpolation: 0=Constant 1=Uniform 2=Vertex 3=Varying 4=FaceVarying
    /// Domains triangulation does not touch come back unchanged. Returns an
    /// empty array on error; see `last_error`.
    pub fn remap_f32(&mut self, values: &[f32], components: u32, interpolation: u32) -> Vec<f32> {
        let components = components.max(1) as usize;
        let elements: Vec<Vec<f32>> = values.chunks(components).map(<[f32]>::to_vec).collect();
        let mut attr = Attribute::new("js", interpolation_from(interpolation), elements);
        match self.inner.remap(&mut attr) {
            Ok(_) => {
                self.last_error = None;
                match attr.data {
                    Some(AttributeValues::Direct(v)) => v.into_iter().flatten().collect(),
                    _ => Vec::new(),
                }
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Vec::new()
            }
        }
    }
}

fn interpolation_from(tag: u32) -> Interpolation {
    match tag {
        1 => Interpolation::Uniform,
        2 => Interpolation::Vertex,
        3 => Interpolation::Varying,
        4 => Interpolation::FaceVarying,
        _ => Interpolation::Constant,
    }
}

/// Convenience: triangulate and return the new flat index array.
#[wasm_bindgen]
pub fn triangulate_mesh_indices(counts: &[u32], indices: &[u32], points: &[f32]) -> Vec<u32> {
    let mut t = TriangulatorJs::new();
    if !t.triangulate(counts, indices, points) {
        return Vec::new();
    }
    t.get_indices()
}
