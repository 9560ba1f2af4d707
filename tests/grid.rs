use shadow_caster::geometry::{GridPoint, Point2, Viewport};
use shadow_caster::grid::{grid_lines, snap, snap_in_viewport, snap_point};

#[test]
fn snapped_line_is_within_half_a_cell() {
    for grid_size in [1u32, 2, 3, 7, 20] {
        let g = grid_size as i64;
        for n in -500..500 {
            let k = snap(n, grid_size) as i64;
            let distance = (k * g - n as i64).abs();
            assert!(2 * distance <= g, "snap({n}, {grid_size}) = {k}");
        }
    }
}

#[test]
fn exact_multiples_are_fixed_points() {
    for k in -50..50 {
        assert_eq!(snap(k * 20, 20), k);
    }
}

#[test]
fn pointer_rounds_to_nearest_intersection() {
    assert_eq!(snap_point(Point2::new(209.4, 311.0), 20), GridPoint::new(10, 16));
    assert_eq!(snap_point(Point2::new(210.0, 309.4), 20), GridPoint::new(11, 15));
}

#[test]
fn control_strip_selects_nothing() {
    let viewport = Viewport::new(0.0, 100.0, 1280.0, 820.0);
    assert_eq!(snap_in_viewport(Point2::new(400.0, 50.0), &viewport, 20), None);
    assert_eq!(snap_in_viewport(Point2::new(400.0, 100.0), &viewport, 20), None);
    assert_eq!(
        snap_in_viewport(Point2::new(400.0, 101.0), &viewport, 20),
        Some(GridPoint::new(20, 5))
    );
}

#[test]
fn snapped_points_stay_on_the_play_area() {
    let viewport = Viewport::new(0.0, 100.0, 1270.0, 820.0);
    assert_eq!(
        snap_in_viewport(Point2::new(1269.0, 900.0), &viewport, 20),
        Some(GridPoint::new(63, 41))
    );
    assert_eq!(
        snap_in_viewport(Point2::new(-30.0, 400.0), &viewport, 20),
        Some(GridPoint::new(0, 20))
    );
}

#[test]
fn grid_lines_start_one_step_in() {
    let viewport = Viewport::new(0.0, 100.0, 1280.0, 820.0);
    let lines = grid_lines(&viewport, 20);
    let (vertical, horizontal): (Vec<&(Point2, Point2)>, Vec<&(Point2, Point2)>) = lines.iter().partition(|(a, b)| a.x == b.x);
    assert_eq!(vertical.len(), 63);
    assert_eq!(horizontal.len(), 35);
    assert_eq!(vertical[0].0, Point2::new(20.0, 100.0));
    assert_eq!(horizontal[0].0, Point2::new(0.0, 120.0));
    assert!(horizontal.iter().all(|(a, _)| a.y < 820.0));
}
