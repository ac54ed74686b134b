// Copyright 2025 Lars Brubaker
// Shared test utilities for mesh-triangulate tests.

#![allow(dead_code)]

use mesh_triangulate::geom::{cross, dot, length, sub};
use mesh_triangulate::{MeshTriangulation, Point};

/// Points of a regular polygon with `n` corners on the unit circle in the XY
/// plane, counter-clockwise.
pub fn regular_polygon(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * std::f32::consts::TAU;
            [a.cos(), a.sin(), 0.0]
        })
        .collect()
}

/// Unnormalized normal of the triangle (a, b, c).
pub fn triangle_normal(a: &Point, b: &Point, c: &Point) -> Point {
    cross(&sub(b, a), &sub(c, a))
}

/// Area of the triangle (a, b, c).
pub fn triangle_area(a: &Point, b: &Point, c: &Point) -> f32 {
    0.5 * length(&triangle_normal(a, b, c))
}

/// Sum of triangle areas for a face triangulated into local corner ids.
pub fn total_area(points: &[Point], corner_ids: &[u32]) -> f32 {
    corner_ids
        .chunks(3)
        .map(|t| {
            triangle_area(
                &points[t[0] as usize],
                &points[t[1] as usize],
                &points[t[2] as usize],
            )
        })
        .sum()
}

/// Asserts every triangle winds the same way as `normal`.
pub fn verify_winding(points: &[Point], corner_ids: &[u32], normal: &Point) {
    for (i, t) in corner_ids.chunks(3).enumerate() {
        let n = triangle_normal(
            &points[t[0] as usize],
            &points[t[1] as usize],
            &points[t[2] as usize],
        );
        assert!(
            dot(&n, normal) > 0.0,
            "triangle {} ({:?}) winds against the face",
            i,
            t
        );
    }
}

/// Asserts each triangle uses three distinct ids below `n`.
pub fn verify_triangles(corner_ids: &[u32], n: usize) {
    assert_eq!(corner_ids.len() % 3, 0);
    for t in corner_ids.chunks(3) {
        assert!(t.iter().all(|&id| (id as usize) < n), "id out of range in {:?}", t);
        assert!(t[0] != t[1] && t[1] != t[2] && t[0] != t[2], "repeated id in {:?}", t);
    }
}

/// Structural checks on a whole-mesh result against its source topology.
pub fn verify_mesh_output(out: &MeshTriangulation, counts: &[u32], indices: &[u32]) {
    let triangles = out.triangle_count();
    assert_eq!(out.lookup.uniform.len(), triangles);
    let corners: u32 = out.face_vertex_counts.iter().sum();
    assert_eq!(out.face_vertex_indices.len(), corners as usize);
    assert_eq!(out.lookup.face_varying.len(), corners as usize);

    for &face in &out.lookup.uniform {
        assert!((face as usize) < counts.len(), "face {} out of range", face);
    }
    for (i, &src) in out.lookup.face_varying.iter().enumerate() {
        assert!((src as usize) < indices.len());
        assert_eq!(out.face_vertex_indices[i], indices[src as usize]);
    }
    // Uniform lookup is non-decreasing and every face contributes.
    assert!(out.lookup.uniform.windows(2).all(|w| w[0] <= w[1]));
    let mut seen = vec![false; counts.len()];
    for &face in &out.lookup.uniform {
        seen[face as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

/// A grid of `w` x `h` quads in the XY plane.
pub fn quad_grid(w: usize, h: usize) -> (Vec<u32>, Vec<u32>, Vec<Point>) {
    let mut points = Vec::with_capacity((w + 1) * (h + 1));
    for y in 0..=h {
        for x in 0..=w {
            points.push([x as f32, y as f32, 0.0]);
        }
    }
    let row = (w + 1) as u32;
    let mut counts = Vec::with_capacity(w * h);
    let mut indices = Vec::with_capacity(w * h * 4);
    for y in 0..h as u32 {
        for x in 0..w as u32 {
            let a = y * row + x;
            counts.push(4);
            indices.extend_from_slice(&[a, a + 1, a + 1 + row, a + row]);
        }
    }
    (counts, indices, points)
}
