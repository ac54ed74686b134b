// Copyright 2025 Lars Brubaker
// License: MIT
//
// Re-indexing of per-face and per-corner attribute data through the lookup
// tables produced by a triangulation pass.
//
// The remapper never interprets values. Output element `i` is input element
// `table[i]`, where the table is chosen by the attribute's interpolation.

use crate::error::{TriangulateError, TriangulateResult};

/// How an attribute's elements map onto the mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// One value for the whole mesh.
    Constant,
    /// One value per face.
    Uniform,
    /// One value per point.
    Vertex,
    /// One value per point, linearly interpolated.
    Varying,
    /// One value per face corner.
    FaceVarying,
}

/// Correspondence from triangulated elements back to original ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupTables {
    /// Original face index of every output polygon.
    pub uniform: Vec<u32>,
    /// Original flattened corner index of every output corner.
    pub face_varying: Vec<u32>,
}

impl LookupTables {
    /// The table that applies to `interpolation`, or `None` if that domain
    /// is unaffected by triangulation.
    pub fn table_for(&self, interpolation: Interpolation) -> Option<&[u32]> {
        match interpolation {
            Interpolation::Uniform => Some(&self.uniform),
            Interpolation::FaceVarying => Some(&self.face_varying),
            Interpolation::Constant | Interpolation::Vertex | Interpolation::Varying => None,
        }
    }

    pub fn clear(&mut self) {
        self.uniform.clear();
        self.face_varying.clear();
    }
}

/// Storage of an attribute's elements.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValues<T> {
    /// One value per element.
    Direct(Vec<T>),
    /// One index per element into a shared value pool.
    Indexed { indices: Vec<u32>, values: Vec<T> },
}

impl<T> AttributeValues<T> {
    /// Number of elements (not pool entries).
    pub fn len(&self) -> usize {
        match self {
            Self::Direct(values) => values.len(),
            Self::Indexed { indices, .. } => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named attribute with its interpolation and (possibly absent) data.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute<T> {
    pub name: String,
    pub interpolation: Interpolation,
    pub data: Option<AttributeValues<T>>,
}

impl<T: Clone> Attribute<T> {
    pub fn new(name: impl Into<String>, interpolation: Interpolation, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            interpolation,
            data: Some(AttributeValues::Direct(values)),
        }
    }

    pub fn indexed(
        name: impl Into<String>,
        interpolation: Interpolation,
        indices: Vec<u32>,
        values: Vec<T>,
    ) -> Self {
        Self {
            name: name.into(),
            interpolation,
            data: Some(AttributeValues::Indexed { indices, values }),
        }
    }

    /// Rewrites the attribute's elements for the triangulated topology.
    ///
    /// Returns `Ok(false)` when there was nothing to do: no data, or an
    /// interpolation that triangulation does not affect. For indexed storage
    /// only the indices are rewritten.
    pub fn remap(&mut self, lookup: &LookupTables) -> TriangulateResult<bool> {
        let Some(table) = lookup.table_for(self.interpolation) else {
            return Ok(false);
        };
        let Some(data) = self.data.as_mut() else {
            return Ok(false);
        };

        match data {
            AttributeValues::Direct(values) => {
                *values = remap_named(&self.name, values, table)?;
            }
            AttributeValues::Indexed { indices, .. } => {
                *indices = remap_named(&self.name, indices, table)?;
            }
        }
        Ok(true)
    }
}

/// Gathers `values[table[i]]` for every entry of `table`.
pub fn remap_values<T: Clone>(values: &[T], table: &[u32]) -> TriangulateResult<Vec<T>> {
    remap_named("", values, table)
}

fn remap_named<T: Clone>(name: &str, values: &[T], table: &[u32]) -> TriangulateResult<Vec<T>> {
    table
        .iter()
        .map(|&i| {
            values
                .get(i as usize)
                .cloned()
                .ok_or_else(|| TriangulateError::AttributeOutOfRange {
                    name: name.to_string(),
                    index: i,
                    len: values.len(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> LookupTables {
        // A quad split (face 0) followed by a triangle (face 1).
        LookupTables {
            uniform: vec![0, 0, 1],
            face_varying: vec![3, 0, 1, 1, 2, 3, 4, 5, 6],
        }
    }

    #[test]
    fn uniform_values_are_duplicated() {
        let mut attr = Attribute::new("displayColor", Interpolation::Uniform, vec!['a', 'b']);
        assert_eq!(attr.remap(&lookup()), Ok(true));
        assert_eq!(attr.data, Some(AttributeValues::Direct(vec!['a', 'a', 'b'])));
    }

    #[test]
    fn face_varying_indices_are_remapped_pool_untouched() {
        let pool = vec![10.0f32, 20.0];
        let mut attr = Attribute::indexed(
            "st",
            Interpolation::FaceVarying,
            vec![0, 1, 0, 1, 0, 1, 1],
            pool.clone(),
        );
        assert_eq!(attr.remap(&lookup()), Ok(true));
        match attr.data {
            Some(AttributeValues::Indexed { indices, values }) => {
                assert_eq!(indices, vec![1, 0, 1, 1, 0, 1, 0, 1, 1]);
                assert_eq!(values, pool);
            }
            other => panic!("unexpected data {:?}", other),
        }
    }

    #[test]
    fn other_domains_are_untouched() {
        for interp in [Interpolation::Constant, Interpolation::Vertex, Interpolation::Varying] {
            let mut attr = Attribute::new("points", interp, vec![1, 2, 3]);
            let before = attr.clone();
            assert_eq!(attr.remap(&lookup()), Ok(false));
            assert_eq!(attr, before);
        }
    }

    #[test]
    fn missing_data_is_not_an_error() {
        let mut attr: Attribute<u8> = Attribute {
            name: "empty".into(),
            interpolation: Interpolation::Uniform,
            data: None,
        };
        assert_eq!(attr.remap(&lookup()), Ok(false));
    }

    #[test]
    fn short_attribute_reports_name() {
        let mut attr = Attribute::new("normals", Interpolation::FaceVarying, vec![0u8; 4]);
        let err = attr.remap(&lookup()).unwrap_err();
        assert_eq!(
            err,
            TriangulateError::AttributeOutOfRange { name: "normals".into(), index: 4, len: 4 }
        );
    }

    #[test]
    fn element_count_ignores_pool_size() {
        let direct = AttributeValues::Direct(vec![1, 2, 3]);
        assert_eq!(direct.len(), 3);
        let indexed = AttributeValues::Indexed { indices: vec![0, 0, 0, 0, 0], values: vec![9] };
        assert_eq!(indexed.len(), 5);
        assert!(!indexed.is_empty());
        assert!(AttributeValues::<u8>::Direct(Vec::new()).is_empty());
    }

    #[test]
    fn cleared_tables_map_nothing() {
        let mut tables = lookup();
        tables.clear();
        assert_eq!(tables.table_for(Interpolation::Uniform), Some(&[][..]));
        assert_eq!(tables.table_for(Interpolation::FaceVarying), Some(&[][..]));
    }

    #[test]
    fn remap_values_gathers() {
        assert_eq!(remap_values(&[5, 6, 7], &[2, 2, 0]), Ok(vec![7, 7, 5]));
    }
}
