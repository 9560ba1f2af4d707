// src/grid.rs

use crate::geometry::{GridPoint, Point2, Viewport};

/// Nearest grid multiplier for a pixel coordinate. Ties go to the upper line.
pub fn snap(n: i32, grid_size: u32) -> i32 {
    let n = n as i64;
    let g = grid_size.max(1) as i64;
    let q = n.div_euclid(g);
    let below = n - q * g;
    let above = (q + 1) * g - n;
    let nearest = if below < above { q } else { q + 1 };
    // `nearest * g` is within g/2 of an i32, so only g == 1 near i32::MAX can overflow.
    i32::try_from(nearest).unwrap_or(i32::MAX)
}

/// Snaps a continuous pointer position, rounding to whole pixels first.
pub fn snap_point(pixel: Point2, grid_size: u32) -> GridPoint {
    GridPoint::new(
        snap(pixel.x.round() as i32, grid_size),
        snap(pixel.y.round() as i32, grid_size),
    )
}

/// Grid multiplier range `(min, max)` lying inside `[lo, hi]`.
fn lattice_range(lo: f32, hi: f32, grid_size: u32) -> (i32, i32) {
    let g = grid_size.max(1) as f32;
    ((lo / g).ceil() as i32, (hi / g).floor() as i32)
}

/// The intersection under the pointer, if the pointer is in the play area.
///
/// Pointers over the reserved control strip select nothing; otherwise the
/// snapped point is clamped onto the grid lattice inside the viewport.
pub fn snap_in_viewport(pointer: Point2, viewport: &Viewport, grid_size: u32) -> Option<GridPoint> {
    if pointer.y <= viewport.top {
        return None;
    }
    let snapped = snap_point(pointer, grid_size);
    let (min_col, max_col) = lattice_range(viewport.left, viewport.right, grid_size);
    let (min_row, max_row) = lattice_range(viewport.top, viewport.bottom, grid_size);
    if min_col > max_col || min_row > max_row {
        return None;
    }
    Some(GridPoint::new(
        snapped.col.clamp(min_col, max_col),
        snapped.row.clamp(min_row, max_row),
    ))
}

/// Background grid: vertical then horizontal lines strictly inside the viewport.
pub fn grid_lines(viewport: &Viewport, grid_size: u32) -> Vec<(Point2, Point2)> {
    let g = grid_size.max(1) as f32;
    let mut lines = Vec::new();

    let mut x = ((viewport.left / g).floor() + 1.0) * g;
    while x < viewport.right {
        lines.push((Point2::new(x, viewport.top), Point2::new(x, viewport.bottom)));
        x += g;
    }

    let mut y = ((viewport.top / g).floor() + 1.0) * g;
    while y < viewport.bottom {
        lines.push((Point2::new(viewport.left, y), Point2::new(viewport.right, y)));
        y += g;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_goes_up() {
        assert_eq!(snap(10, 20), 1);
        assert_eq!(snap(9, 20), 0);
        assert_eq!(snap(-10, 20), 0);
        assert_eq!(snap(-11, 20), -1);
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert_eq!(snap(i32::MAX, 1), i32::MAX);
        assert_eq!(snap(i32::MIN, 1), i32::MIN);
        assert_eq!(snap(i32::MAX, 20), i32::MAX / 20);
    }
}
