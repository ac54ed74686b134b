// Copyright 2025 Lars Brubaker
// License: MIT
//
// Greedy ear removal for faces with five or more corners.
//
// Each step scores the live corners of a CornerRing, clips the best one and
// emits the triangle (left, corner, right). A face of N corners always yields
// exactly N-2 triangles.

use tracing::debug;

use crate::corner::{CornerRing, ScoreContext};
use crate::geom::{add, cross, length, normalize, sub, Point, Real};

/// Approximate face normal: the normalized sum of the unit normals at every
/// original corner.
///
/// Every corner contributes equally regardless of the area around it, so
/// densely sampled regions pull the result towards themselves.
pub fn face_normal(points: &[Point]) -> Point {
    let n = points.len();
    if n == 0 {
        return [0.0; 3];
    }
    let edges: Vec<Point> = (0..n).map(|i| sub(&points[(i + 1) % n], &points[i])).collect();

    let mut sum = [0.0; 3];
    for i in 0..n {
        let prev = &edges[(i + n - 1) % n];
        let cur = &edges[i];
        sum = add(&sum, &normalize(&cross(prev, cur)));
    }
    normalize(&sum)
}

/// Length of the longest edge of the closed polygon.
pub fn longest_side(points: &[Point]) -> Real {
    let n = points.len();
    (0..n)
        .map(|i| length(&sub(&points[(i + 1) % n], &points[i])))
        .fold(0.0, Real::max)
}

pub struct NgonTriangulator {
    ring: CornerRing,
    ctx: ScoreContext,
}

impl NgonTriangulator {
    /// Sets up the ring and the face-level scoring terms for `points`.
    pub fn new(points: &[Point]) -> Self {
        let ctx = ScoreContext {
            face_normal: face_normal(points),
            longest_side: longest_side(points),
        };
        Self { ring: CornerRing::new(points), ctx }
    }

    pub fn face_normal(&self) -> Point {
        self.ctx.face_normal
    }

    pub fn longest_side(&self) -> Real {
        self.ctx.longest_side
    }

    pub fn ring(&self) -> &CornerRing {
        &self.ring
    }

    /// Picks the next corner to clip.
    ///
    /// With three corners left any choice gives the same triangle, so the
    /// first live corner is returned without scoring. Otherwise the corner with
    /// the strictly greatest score wins and ties go to the lower id.
    pub fn find_best(&mut self) -> Option<usize> {
        let n = self.ring.len();
        if self.ring.remaining() <= 3 {
            return (0..n).find(|&id| !self.ring.is_removed(id));
        }

        let mut best: Option<(usize, Real)> = None;
        for id in 0..n {
            let Some(score) = self.ring.score(id, &self.ctx) else {
                continue;
            };
            match best {
                Some((_, best_score)) if score <= best_score => {}
                // A NaN score never beats an earlier corner, but the first live
                // corner is always a candidate.
                Some(_) if score.is_nan() => {}
                _ => best = Some((id, score)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Clips the best corner and returns its triangle `[left, corner, right]`.
    ///
    /// Returns `None` once fewer than three corners remain.
    pub fn step(&mut self) -> Option<[usize; 3]> {
        if self.ring.remaining() < 3 {
            return None;
        }
        let id = self.find_best()?;
        let triangle = self.ring.remove(id)?;
        // Only the two relinked neighbors changed; rescore them now.
        if self.ring.remaining() > 3 {
            self.ring.score(triangle[0], &self.ctx);
            self.ring.score(triangle[2], &self.ctx);
        }
        Some(triangle)
    }

    /// Runs the removal loop to completion.
    ///
    /// Returns the side counts (all 3) and the flattened corner-id triples.
    pub fn triangulate(mut self) -> (Vec<u32>, Vec<u32>) {
        let triangles = self.ring.len().saturating_sub(2);
        let mut side_counts = Vec::with_capacity(triangles);
        let mut corner_ids = Vec::with_capacity(triangles * 3);

        while let Some(triangle) = self.step() {
            corner_ids.extend(triangle.iter().map(|&c| c as u32));
            side_counts.push(3);
        }

        debug!(
            corners = self.ring.len(),
            triangles = side_counts.len(),
            "Triangulated n-gon"
        );
        (side_counts, corner_ids)
    }
}
