// src/intersection.rs

use glam::DVec2;

use crate::geometry::{Edge, Point2, Viewport};

/// Slack on the segment parameters so hits on a shared corner are not lost
/// to floating-point noise.
const PARAM_EPSILON: f64 = 1e-9;

/// Hits this close to the ray origin are the origin itself, not an exit.
const ORIGIN_EPSILON: f64 = 1e-9;

pub struct BoundaryIntersector;

impl BoundaryIntersector {
    /// Solves for the parameters `(s, t)` of the crossing of `p0..p1` and
    /// `p2..p3`. `None` when parallel or when either parameter leaves `[0, 1]`.
    fn solve(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Option<(f64, DVec2)> {
        let r = p1 - p0;
        let q = p3 - p2;

        let denominator = r.perp_dot(q);
        if denominator.abs() < 1e-10 {
            return None;
        }

        let offset = p2 - p0;
        let s = offset.perp_dot(q) / denominator;
        let t = offset.perp_dot(r) / denominator;

        let in_span = |v: f64| (-PARAM_EPSILON..=1.0 + PARAM_EPSILON).contains(&v);
        if !in_span(s) || !in_span(t) {
            return None;
        }
        Some((s, p0 + r * s))
    }

    /// Crossing point of two finite segments, rounded to whole pixels.
    pub fn intersect_segments(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Option<Point2> {
        Self::solve(p0, p1, p2, p3).map(|(_, hit)| Point2::from_dvec2_rounded(hit))
    }

    /// Where the ray `origin -> far_point` leaves the viewport.
    ///
    /// Edges are tried left, top, right, bottom and the first hit wins, so a
    /// ray through a corner is assigned to the left or top edge. `far_point`
    /// must lie outside the viewport.
    pub fn find_boundary_exit(
        origin: DVec2,
        far_point: DVec2,
        viewport: &Viewport,
    ) -> Option<(Edge, Point2)> {
        viewport.edges().into_iter().find_map(|(edge, start, end)| {
            match Self::solve(origin, far_point, start.as_dvec2(), end.as_dvec2()) {
                Some((s, hit)) if s > ORIGIN_EPSILON => Some((edge, Point2::from_dvec2_rounded(hit))),
                _ => None,
            }
        })
    }
}
