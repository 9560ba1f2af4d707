use shadow_caster::geometry::GridPoint;
use shadow_caster::occluders::OccluderSet;
use shadow_caster::selection::{Mode, SelectionEvent, StoreCommand};

const P1: GridPoint = GridPoint::new(3, 7);
const P2: GridPoint = GridPoint::new(8, 7);

/// Feeds events through the machine, applying store commands as they come.
fn run(mut mode: Mode, store: &mut OccluderSet, events: &[SelectionEvent]) -> Mode {
    for &event in events {
        let (next, command) = mode.step(event);
        if let Some(command) = command {
            command.apply(store);
        }
        mode = next;
    }
    mode
}

#[test]
fn starts_selecting() {
    assert_eq!(Mode::default(), Mode::Select);
}

#[test]
fn clicking_the_pending_point_again_is_ignored() {
    let mut store = OccluderSet::new();
    let mode = run(Mode::Select, &mut store, &[SelectionEvent::Confirm(P1), SelectionEvent::Confirm(P1)]);
    assert_eq!(mode, Mode::Pending(P1));
    assert!(store.is_empty());
}

#[test]
fn two_clicks_make_a_wall() {
    let mut store = OccluderSet::new();
    let mode = run(Mode::Select, &mut store, &[SelectionEvent::Confirm(P1), SelectionEvent::Confirm(P2)]);
    assert_eq!(mode, Mode::Select);
    assert!(store.contains(P1, P2));
}

#[test]
fn duplicate_wall_still_clears_the_pending_point() {
    let mut store = OccluderSet::new();
    store.try_insert(P2, P1);
    let mode = run(Mode::Select, &mut store, &[SelectionEvent::Confirm(P1), SelectionEvent::Confirm(P2)]);
    assert_eq!(mode, Mode::Select);
    assert_eq!(store.len(), 1);
}

#[test]
fn cancel_drops_the_pending_point_only() {
    let mut store = OccluderSet::new();
    store.try_insert(P1, P2);
    let mode = run(Mode::Pending(P1), &mut store, &[SelectionEvent::Cancel(Some(P1))]);
    assert_eq!(mode, Mode::Select);
    assert_eq!(store.len(), 1);
}

#[test]
fn cancel_while_selecting_deletes_walls_at_the_cursor() {
    let (mode, command) = Mode::Select.step(SelectionEvent::Cancel(Some(P1)));
    assert_eq!(mode, Mode::Select);
    assert_eq!(command, Some(StoreCommand::DeleteTouching(P1)));

    assert_eq!(Mode::Select.step(SelectionEvent::Cancel(None)), (Mode::Select, None));
}

#[test]
fn clear_all_resets_pending() {
    let (mode, command) = Mode::Pending(P1).step(SelectionEvent::ClearAll);
    assert_eq!(mode, Mode::Select);
    assert_eq!(command, Some(StoreCommand::Clear));
}

#[test]
fn casting_discards_pending_and_returns_to_select() {
    let mut store = OccluderSet::new();
    let mode = run(Mode::Pending(P1), &mut store, &[SelectionEvent::ToggleForward]);
    assert_eq!(mode, Mode::Cast);
    assert_eq!(mode.pending(), None);

    let mode = run(mode, &mut store, &[SelectionEvent::ToggleBackward]);
    assert_eq!(mode, Mode::Select);
}

#[test]
fn editing_is_disabled_while_casting() {
    let mut store = OccluderSet::new();
    store.try_insert(P1, P2);
    for event in [
        SelectionEvent::Confirm(P1),
        SelectionEvent::Cancel(Some(P1)),
        SelectionEvent::ClearAll,
        SelectionEvent::ToggleForward,
    ] {
        assert_eq!(Mode::Cast.step(event), (Mode::Cast, None));
    }
    assert_eq!(store.len(), 1);
}

#[test]
fn toggle_backward_outside_cast_does_nothing() {
    assert_eq!(Mode::Select.step(SelectionEvent::ToggleBackward), (Mode::Select, None));
    assert_eq!(
        Mode::Pending(P1).step(SelectionEvent::ToggleBackward),
        (Mode::Pending(P1), None)
    );
}
