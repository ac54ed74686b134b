// Copyright 2025 Lars Brubaker
// License: MIT
//
// mesh-triangulate: converts polygon meshes to triangles with greedy,
// quality-scored corner removal and builds the lookup tables needed to carry
// per-face and per-corner attributes onto the new triangles.

pub mod attribute;
pub mod corner;
pub mod error;
pub mod face;
pub mod geom;
pub mod mesh;
pub mod ngon;
pub mod quad;
pub mod triangulator;

pub use attribute::{remap_values, Attribute, AttributeValues, Interpolation, LookupTables};
pub use error::{TriangulateError, TriangulateResult};
pub use face::{triangulate_face, FaceTriangulation};
pub use geom::{Point, Real};
pub use mesh::{triangulate_mesh, MeshOptions, MeshTriangulation};
pub use quad::QuadSplitRule;
pub use triangulator::{TriangulateOption, Triangulator};
