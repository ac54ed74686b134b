// Copyright 2025 Lars Brubaker
// License: MIT
//
// Diagonal selection for four-sided faces.

use crate::geom::{dot, normalize, sub, Point, Real};

/// How the four edge vectors are weighted when choosing a quad diagonal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum QuadSplitRule {
    /// Use the raw edge vectors. Longer edges dominate the decision.
    #[default]
    RawEdges,
    /// Normalize the edge vectors first so only edge directions matter.
    UnitEdges,
}

/// Corner ids of the B-D split: triangles (D,A,B) and (B,C,D).
pub const SPLIT_BD: [u32; 6] = [3, 0, 1, 1, 2, 3];
/// Corner ids of the A-C split: triangles (A,B,C) and (C,D,A).
pub const SPLIT_AC: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Returns the two diagonal scores `(score_bd, score_ac)` for quad A,B,C,D.
pub fn diagonal_scores(points: &[Point; 4], rule: QuadSplitRule) -> (Real, Real) {
    let mut e0 = sub(&points[1], &points[0]);
    let mut e1 = sub(&points[2], &points[1]);
    let mut e2 = sub(&points[3], &points[2]);
    let mut e3 = sub(&points[0], &points[3]);
    if rule == QuadSplitRule::UnitEdges {
        e0 = normalize(&e0);
        e1 = normalize(&e1);
        e2 = normalize(&e2);
        e3 = normalize(&e3);
    }

    let score_bd = dot(&sub(&e0, &e2), &sub(&e1, &e3));
    let score_ac = dot(&sub(&e1, &e3), &sub(&e2, &e0));
    (score_bd, score_ac)
}

/// Splits a quad into two triangles, preserving winding.
///
/// Returns the side counts (`[3, 3]`) and six corner ids into `0..4`.
/// Ties go to the B-D diagonal. Degenerate quads are not special-cased.
pub fn split_quad(points: &[Point; 4], rule: QuadSplitRule) -> ([u32; 2], [u32; 6]) {
    let (score_bd, score_ac) = diagonal_scores(points, rule);
    if score_bd >= score_ac {
        ([3, 3], SPLIT_BD)
    } else {
        ([3, 3], SPLIT_AC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [Point; 4] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ];

    #[test]
    fn square_tie_uses_bd() {
        let (bd, ac) = diagonal_scores(&SQUARE, QuadSplitRule::RawEdges);
        assert_eq!(bd, ac);
        for _ in 0..3 {
            assert_eq!(split_quad(&SQUARE, QuadSplitRule::RawEdges), ([3, 3], SPLIT_BD));
        }
    }

    #[test]
    fn parallelogram_takes_short_diagonal() {
        // B-D is the short diagonal here.
        let bd_short = [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [3.0, 1.0, 0.0], [1.0, 1.0, 0.0]];
        assert_eq!(split_quad(&bd_short, QuadSplitRule::RawEdges).1, SPLIT_BD);

        // Mirrored: A-C is the short diagonal.
        let ac_short = [[1.0, 0.0, 0.0], [3.0, 0.0, 0.0], [2.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
        assert_eq!(split_quad(&ac_short, QuadSplitRule::RawEdges).1, SPLIT_AC);
        assert_eq!(split_quad(&ac_short, QuadSplitRule::UnitEdges).1, SPLIT_AC);
    }

    #[test]
    fn rules_can_disagree() {
        let quad = [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [5.0, 9.0, 0.0], [5.0, 10.0, 0.0]];
        let (bd, ac) = diagonal_scores(&quad, QuadSplitRule::RawEdges);
        assert_eq!((bd, ac), (5.0, -5.0));
        assert_eq!(split_quad(&quad, QuadSplitRule::RawEdges).1, SPLIT_BD);
        assert_eq!(split_quad(&quad, QuadSplitRule::UnitEdges).1, SPLIT_AC);
    }

    #[test]
    fn collinear_quad_still_splits() {
        let flat = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [3.0, 0.0, 0.0]];
        let (counts, ids) = split_quad(&flat, QuadSplitRule::RawEdges);
        assert_eq!(counts, [3, 3]);
        assert!(ids.iter().all(|&id| id < 4));
    }
}
