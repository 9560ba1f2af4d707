// src/shadow.rs

use glam::DVec2;
use log::{trace, warn};

use crate::geometry::{Point2, ShadowPolygon, Viewport, MAX_SHADOW_VERTICES};
use crate::intersection::BoundaryIntersector;
use crate::occluders::Segment;

/// Wedges thinner than this (light collinear with the wall) cast nothing.
const WEDGE_EPSILON: f64 = 1e-9;

/// A point along `light -> endpoint` that is guaranteed to be outside the
/// viewport, assuming the light is inside it.
///
/// When the light sits on the endpoint there is no direction; the endpoint
/// itself is returned and the extension is degenerate.
pub fn far_point(light: DVec2, endpoint: DVec2, viewport: &Viewport) -> DVec2 {
    let direction = endpoint - light;
    let length = direction.length();
    if length == 0.0 {
        return endpoint;
    }
    let reach = viewport.diagonal() + 1.0;
    light + direction * (reach / length)
}

/// Viewport corners strictly inside the wedge spanned by `d1` and `d2`,
/// ordered by their angle away from `d1`.
fn wrapped_corners(light: DVec2, d1: DVec2, d2: DVec2, viewport: &Viewport) -> Vec<Point2> {
    let orientation = d1.perp_dot(d2).signum();
    let mut inside: Vec<(f64, Point2)> = viewport
        .corners()
        .into_iter()
        .filter_map(|corner| {
            let v = corner.as_dvec2() - light;
            let from_first = d1.perp_dot(v) * orientation;
            let to_second = v.perp_dot(d2) * orientation;
            if from_first > WEDGE_EPSILON && to_second > WEDGE_EPSILON {
                Some((d1.perp_dot(v).atan2(d1.dot(v)).abs(), corner))
            } else {
                None
            }
        })
        .collect();
    inside.sort_by(|a, b| a.0.total_cmp(&b.0));
    inside.into_iter().map(|(_, corner)| corner).collect()
}

/// The region `light` cannot see behind the wall `e1..e2`.
///
/// Returns `None` for walls that cast no fillable shadow: the light sits on
/// an endpoint, the light is collinear with the wall, or (which should not
/// happen for a light inside the viewport) a sight-line never exits.
pub fn shadow_for_segment(
    light: Point2,
    e1: Point2,
    e2: Point2,
    viewport: &Viewport,
) -> Option<ShadowPolygon> {
    if light == e1 || light == e2 {
        trace!("Light at {:?} sits on an occluder endpoint, no shadow", light);
        return None;
    }

    let l = light.as_dvec2();
    let d1 = e1.as_dvec2() - l;
    let d2 = e2.as_dvec2() - l;
    if d1.perp_dot(d2).abs() < WEDGE_EPSILON {
        trace!("Occluder {:?} - {:?} is edge-on to the light", e1, e2);
        return None;
    }

    let exit = |endpoint: Point2| {
        let far = far_point(l, endpoint.as_dvec2(), viewport);
        let found = BoundaryIntersector::find_boundary_exit(l, far, viewport);
        if found.is_none() {
            warn!(
                "Sight-line from {:?} through {:?} never left the viewport {:?}",
                light, endpoint, viewport
            );
        }
        found
    };
    let (_, exit1) = exit(e1)?;
    let (_, exit2) = exit(e2)?;

    let corners = wrapped_corners(l, d1, d2, viewport);
    debug_assert!(corners.len() <= MAX_SHADOW_VERTICES - 4);

    let polygon = ShadowPolygon::new(e1, exit1, &corners, exit2, e2);
    if polygon.area() <= f32::EPSILON {
        trace!("Dropping zero-area shadow for {:?} - {:?}", e1, e2);
        return None;
    }
    Some(polygon)
}

/// Every shadow cast by `occluders` for the current light. Walls that cast no
/// shadow are skipped; they never stop the rest from being built.
pub fn build_shadows<'a>(
    light: Point2,
    occluders: impl IntoIterator<Item = &'a Segment>,
    viewport: &Viewport,
    grid_size: u32,
) -> Vec<ShadowPolygon> {
    occluders
        .into_iter()
        .filter_map(|segment| {
            let (e1, e2) = segment.to_pixels(grid_size);
            shadow_for_segment(light, e1, e2, viewport)
        })
        .collect()
}
