// Copyright 2025 Lars Brubaker
// License: MIT
//
// Error types for mesh triangulation and attribute remapping.

use thiserror::Error;

/// Structural problems in the input topology or attribute data.
///
/// Geometric degeneracies (zero-length edges, coincident points, flat corners)
/// are never errors; the scoring heuristic absorbs them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulateError {
    /// Face vertex counts do not add up to the length of the index array.
    #[error("face vertex counts sum to {expected} but {actual} vertex indices were given")]
    MalformedTopology { expected: usize, actual: usize },

    /// A face declares zero sides.
    #[error("face {face} declares no vertices")]
    EmptyFace { face: usize },

    /// A face references a point that does not exist.
    #[error("face {face} references point {index} but the mesh has {point_count} points")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        point_count: usize,
    },

    /// A face exceeds the configured side ceiling.
    #[error("face {face} has {sides} sides, more than the limit of {limit}")]
    FaceTooLarge {
        face: usize,
        sides: usize,
        limit: usize,
    },

    /// A lookup table entry points past the end of an attribute's data.
    #[error("attribute `{name}` has {len} elements but the lookup table references element {index}")]
    AttributeOutOfRange {
        name: String,
        index: u32,
        len: usize,
    },
}

impl TriangulateError {
    /// Index of the face that caused the error, if it is tied to one face.
    pub fn face(&self) -> Option<usize> {
        match self {
            Self::EmptyFace { face }
            | Self::IndexOutOfRange { face, .. }
            | Self::FaceTooLarge { face, .. } => Some(*face),
            Self::MalformedTopology { .. } | Self::AttributeOutOfRange { .. } => None,
        }
    }
}

/// Result type for triangulation operations.
pub type TriangulateResult<T> = std::result::Result<T, TriangulateError>;
