use shadow_caster::canvas::{palette, DrawCommand, RecordingCanvas};
use shadow_caster::config::SessionConfig;
use shadow_caster::geometry::{GridPoint, Point2};
use shadow_caster::scene::{FrameInput, InputEvent, Scene};
use shadow_caster::selection::Mode;

fn frame(scene: &mut Scene, pointer: Point2, events: &[InputEvent]) -> Vec<DrawCommand> {
    let mut canvas = RecordingCanvas::new();
    let input = FrameInput { pointer, events: events.to_vec() };
    scene.frame(&input, &mut canvas);
    canvas.commands
}

fn circles(commands: &[DrawCommand]) -> Vec<(Point2, [f32; 4])> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { center, color, .. } => Some((*center, *color)),
            _ => None,
        })
        .collect()
}

fn shadow_triangles(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillTriangle { color, .. } if *color == palette::SHADOW))
        .count()
}

/// Draws a vertical wall from (10, 10) to (10, 15).
fn scene_with_wall() -> Scene {
    let mut scene = Scene::new(SessionConfig::default());
    frame(&mut scene, Point2::new(203.0, 198.0), &[InputEvent::Confirm]);
    frame(&mut scene, Point2::new(199.0, 305.0), &[InputEvent::Confirm]);
    scene
}

#[test]
fn two_clicks_place_a_wall() {
    let scene = scene_with_wall();
    assert_eq!(scene.mode(), Mode::Select);
    assert!(scene.occluders().contains(GridPoint::new(10, 10), GridPoint::new(10, 15)));
}

#[test]
fn highlight_follows_the_snapped_pointer() {
    let mut scene = Scene::new(SessionConfig::default());
    let commands = frame(&mut scene, Point2::new(208.0, 391.0), &[]);
    assert_eq!(circles(&commands), vec![(Point2::new(200.0, 400.0), palette::HIGHLIGHT)]);

    let commands = frame(&mut scene, Point2::new(208.0, 40.0), &[]);
    assert!(circles(&commands).is_empty());
}

#[test]
fn clicks_in_the_control_strip_are_ignored() {
    let mut scene = Scene::new(SessionConfig::default());
    frame(&mut scene, Point2::new(300.0, 50.0), &[InputEvent::Confirm]);
    assert_eq!(scene.mode(), Mode::Select);
}

#[test]
fn pending_endpoint_gets_a_marker() {
    let mut scene = Scene::new(SessionConfig::default());
    let commands = frame(&mut scene, Point2::new(400.0, 400.0), &[InputEvent::Confirm]);
    assert_eq!(scene.mode(), Mode::Pending(GridPoint::new(20, 20)));
    assert!(circles(&commands).contains(&(Point2::new(400.0, 400.0), palette::PENDING)));
}

#[test]
fn shadows_only_while_casting() {
    let mut scene = scene_with_wall();
    let commands = frame(&mut scene, Point2::new(100.0, 250.0), &[]);
    assert_eq!(shadow_triangles(&commands), 0);
    assert!(scene.last_shadows().is_empty());

    let commands = frame(&mut scene, Point2::new(100.0, 250.0), &[InputEvent::ToggleForward]);
    assert_eq!(scene.mode(), Mode::Cast);
    assert_eq!(scene.last_shadows().len(), 1);
    assert!(shadow_triangles(&commands) >= 2);
    assert!(matches!(commands[0], DrawCommand::FillRect { color, .. } if color == palette::LIT));

    frame(&mut scene, Point2::new(100.0, 250.0), &[InputEvent::ToggleBackward]);
    assert_eq!(scene.mode(), Mode::Select);
    assert!(scene.last_shadows().is_empty());
}

#[test]
fn light_is_clamped_into_the_play_area() {
    let mut scene = scene_with_wall();
    frame(&mut scene, Point2::new(-40.0, 20.0), &[InputEvent::ToggleForward]);
    assert_eq!(scene.light(), Point2::new(0.0, 100.0));
    assert_eq!(scene.last_shadows().len(), 1);
}

#[test]
fn editing_is_locked_while_casting() {
    let mut scene = scene_with_wall();
    frame(&mut scene, Point2::new(200.0, 200.0), &[InputEvent::ToggleForward]);
    frame(&mut scene, Point2::new(200.0, 200.0), &[InputEvent::Cancel, InputEvent::ClearAll]);
    assert_eq!(scene.occluders().len(), 1);
}

#[test]
fn right_click_deletes_walls_at_the_cursor() {
    let mut scene = scene_with_wall();
    frame(&mut scene, Point2::new(201.0, 299.0), &[InputEvent::Cancel]);
    assert!(scene.occluders().is_empty());
}

#[test]
fn clear_all_removes_everything() {
    let mut scene = scene_with_wall();
    frame(&mut scene, Point2::new(500.0, 500.0), &[InputEvent::Confirm]);
    frame(&mut scene, Point2::new(500.0, 500.0), &[InputEvent::ClearAll]);
    assert_eq!(scene.mode(), Mode::Select);
    assert!(scene.occluders().is_empty());
}
