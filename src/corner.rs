// Copyright 2025 Lars Brubaker
// License: MIT
//
// The corner ring: a circular doubly-linked list over the corners of one face
// that is being triangulated.
//
// Corners live in a fixed Vec indexed by their original position in the face.
// Links are plain indices into that Vec. Removed corners stay in place with
// `CornerStatus::Removed` so ids are stable for the whole triangulation.

use tracing::trace;

use crate::geom::{cross, dot, length, normalize, sub, Point, Real};

/// Weight of the sharpness term in a corner's score.
pub const SHARPNESS_WEIGHT: Real = 1.0;
/// Weight of the (shrinking) alignment term in a corner's score.
pub const ALIGNMENT_WEIGHT: Real = 1.0;
/// Weight of the diagonal-length term in a corner's score.
pub const DIAGONAL_WEIGHT: Real = 0.5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CornerStatus {
    /// Still part of the ring and the cached score is current.
    Valid,
    /// A neighbor changed; the score must be recomputed before use.
    Outdated,
    /// Already clipped off the ring.
    Removed,
}

/// Face-level inputs to corner scoring, fixed for the lifetime of a ring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoreContext {
    pub face_normal: Point,
    pub longest_side: Real,
}

/// One vertex of a face under triangulation.
#[derive(Clone, Debug)]
pub struct Corner {
    pub id: usize,
    pub point: Point,
    pub left: usize,
    pub right: usize,
    /// Displacement from this corner to its left neighbor.
    pub left_vector: Point,
    /// Displacement from this corner to its right neighbor.
    pub right_vector: Point,
    pub status: CornerStatus,

    pub sharpness: Real,
    pub normal: Point,
    pub alignment: Real,
    pub diagonal_length: Real,
    pub score: Real,
}

impl Corner {
    fn new(id: usize, point: Point) -> Self {
        Self {
            id,
            point,
            left: id,
            right: id,
            left_vector: [0.0; 3],
            right_vector: [0.0; 3],
            status: CornerStatus::Outdated,
            sharpness: 0.0,
            normal: [0.0; 3],
            alignment: 0.0,
            diagonal_length: 0.0,
            score: 0.0,
        }
    }

    fn link_left(&mut self, id: usize, point: &Point) {
        self.left = id;
        self.left_vector = sub(point, &self.point);
    }

    fn link_right(&mut self, id: usize, point: &Point) {
        self.right = id;
        self.right_vector = sub(point, &self.point);
    }

    /// Recomputes the cached geometric terms and score, then marks the corner valid.
    ///
    /// `remain` is the fraction of the original corners still in the ring.
    pub fn update_score(&mut self, ctx: &ScoreContext, remain: Real) -> Real {
        let diagonal = sub(&self.right_vector, &self.left_vector);
        self.diagonal_length = length(&diagonal);

        let left_unit = normalize(&self.left_vector);
        let right_unit = normalize(&self.right_vector);
        self.sharpness = dot(&left_unit, &right_unit);

        if self.sharpness == -1.0 {
            // Straight corner: no meaningful local normal.
            self.normal = [0.0; 3];
            self.alignment = -1.0;
        } else {
            self.normal = normalize(&cross(&right_unit, &left_unit));
            self.alignment = dot(&self.normal, &ctx.face_normal);
        }

        let alignment_score = self.alignment * remain * remain;
        let diagonal_score = if ctx.longest_side > 0.0 {
            1.0 - self.diagonal_length / ctx.longest_side
        } else {
            0.0
        };
        self.score = SHARPNESS_WEIGHT * self.sharpness
            + ALIGNMENT_WEIGHT * alignment_score
            + DIAGONAL_WEIGHT * diagonal_score;
        self.status = CornerStatus::Valid;

        trace!(
            corner = self.id,
            sharpness = self.sharpness,
            alignment = alignment_score,
            diagonal = diagonal_score,
            score = self.score,
            "Scored corner"
        );
        self.score
    }
}

/// All corners of one face plus the count of those not yet removed.
#[derive(Clone, Debug)]
pub struct CornerRing {
    corners: Vec<Corner>,
    remaining: usize,
}

impl CornerRing {
    /// Builds a ring over `points` in input order. Every corner starts outdated.
    pub fn new(points: &[Point]) -> Self {
        let n = points.len();
        let mut corners: Vec<Corner> = points
            .iter()
            .enumerate()
            .map(|(id, &p)| Corner::new(id, p))
            .collect();

        for (id, corner) in corners.iter_mut().enumerate() {
            let left = (id + n - 1) % n;
            let right = (id + 1) % n;
            corner.link_left(left, &points[left]);
            corner.link_right(right, &points[right]);
        }

        Self { corners, remaining: n }
    }

    /// Number of corners the ring was built with.
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Number of corners not yet removed.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Fraction of the original corners still present.
    pub fn remain(&self) -> Real {
        if self.corners.is_empty() {
            return 0.0;
        }
        self.remaining as Real / self.corners.len() as Real
    }

    pub fn corner(&self, id: usize) -> Option<&Corner> {
        self.corners.get(id)
    }

    pub fn is_removed(&self, id: usize) -> bool {
        self.corners
            .get(id)
            .map_or(true, |c| c.status == CornerStatus::Removed)
    }

    /// Live corners in id order, each paired with the current `remain`.
    pub fn iter(&self) -> impl Iterator<Item = (&Corner, Real)> + '_ {
        let remain = self.remain();
        self.corners
            .iter()
            .filter(|c| c.status != CornerStatus::Removed)
            .map(move |c| (c, remain))
    }

    /// Score of corner `id`, recomputed only if the corner is outdated.
    ///
    /// Returns `None` for removed or unknown corners.
    pub fn score(&mut self, id: usize, ctx: &ScoreContext) -> Option<Real> {
        let remain = self.remain();
        let corner = self.corners.get_mut(id)?;
        match corner.status {
            CornerStatus::Removed => None,
            CornerStatus::Valid => Some(corner.score),
            CornerStatus::Outdated => Some(corner.update_score(ctx, remain)),
        }
    }

    /// Clips corner `id` off the ring and links its neighbors to each other.
    ///
    /// Returns the triangle `[left, id, right]` in the face's winding order, or
    /// `None` if `id` is unknown or was already removed. Both neighbors become
    /// outdated.
    pub fn remove(&mut self, id: usize) -> Option<[usize; 3]> {
        if self.is_removed(id) {
            return None;
        }
        let (left, right) = {
            let corner = &mut self.corners[id];
            corner.status = CornerStatus::Removed;
            (corner.left, corner.right)
        };
        self.remaining -= 1;

        let left_point = self.corners[left].point;
        let right_point = self.corners[right].point;

        let l = &mut self.corners[left];
        l.link_right(right, &right_point);
        l.status = CornerStatus::Outdated;

        let r = &mut self.corners[right];
        r.link_left(left, &left_point);
        r.status = CornerStatus::Outdated;

        Some([left, id, right])
    }
}
