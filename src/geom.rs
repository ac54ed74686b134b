// Copyright 2025 Lars Brubaker
// License: MIT
//
// Small fixed-size vector helpers over `[Real; 3]`.
//
// Points and vectors are plain arrays so they can be read straight out of flat
// point attributes. Every function here is total: degenerate input (zero-length
// vectors, coincident points) produces finite output instead of NaN.

pub type Real = f32;

/// A 3D coordinate or displacement.
pub type Point = [Real; 3];

/// Vectors shorter than this are treated as zero-length by `normalize`.
pub const MIN_VECTOR_LENGTH: Real = 1e-10;

#[inline]
pub fn add(u: &Point, v: &Point) -> Point {
    [u[0] + v[0], u[1] + v[1], u[2] + v[2]]
}

/// Returns `u - v`.
#[inline]
pub fn sub(u: &Point, v: &Point) -> Point {
    [u[0] - v[0], u[1] - v[1], u[2] - v[2]]
}

#[inline]
pub fn dot(u: &Point, v: &Point) -> Real {
    u[0] * v[0] + u[1] * v[1] + u[2] * v[2]
}

#[inline]
pub fn cross(u: &Point, v: &Point) -> Point {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

#[inline]
pub fn length(v: &Point) -> Real {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// Below `MIN_VECTOR_LENGTH` the vector is divided by the epsilon rather than
/// its length, so a zero vector stays zero.
pub fn normalize(v: &Point) -> Point {
    let len = length(v);
    let d = if len < MIN_VECTOR_LENGTH { MIN_VECTOR_LENGTH } else { len };
    [v[0] / d, v[1] / d, v[2] / d]
}
