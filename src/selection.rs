// src/selection.rs

use crate::geometry::GridPoint;
use crate::occluders::OccluderSet;

/// Editing mode of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Waiting for the first endpoint of a new occluder.
    #[default]
    Select,
    /// First endpoint chosen, waiting for the second.
    Pending(GridPoint),
    /// Light casting; occluders can't be edited.
    Cast,
}

/// Already debounced input, with any point already snapped to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    Confirm(GridPoint),
    /// Carries the intersection under the pointer, if any, for deletion.
    Cancel(Option<GridPoint>),
    ClearAll,
    ToggleForward,
    ToggleBackward,
}

/// A mutation the state machine asks of the occluder store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreCommand {
    Insert(GridPoint, GridPoint),
    DeleteTouching(GridPoint),
    Clear,
}

impl StoreCommand {
    pub fn apply(self, store: &mut OccluderSet) {
        match self {
            StoreCommand::Insert(a, b) => {
                store.try_insert(a, b);
            }
            StoreCommand::DeleteTouching(p) => {
                store.delete_touching(p);
            }
            StoreCommand::Clear => store.clear(),
        }
    }
}

impl Mode {
    pub fn pending(&self) -> Option<GridPoint> {
        match self {
            Mode::Pending(p) => Some(*p),
            _ => None,
        }
    }

    pub fn is_casting(&self) -> bool {
        matches!(self, Mode::Cast)
    }

    /// Transitions on one event, returning the next mode and the store
    /// mutation to perform, if any.
    pub fn step(self, event: SelectionEvent) -> (Mode, Option<StoreCommand>) {
        use SelectionEvent::*;

        match (self, event) {
            (Mode::Cast, ToggleBackward) => (Mode::Select, None),
            (Mode::Cast, _) => (Mode::Cast, None),

            (Mode::Select | Mode::Pending(_), ToggleForward) => (Mode::Cast, None),
            (Mode::Select | Mode::Pending(_), ClearAll) => (Mode::Select, Some(StoreCommand::Clear)),
            (mode, ToggleBackward) => (mode, None),

            (Mode::Select, Confirm(p)) => (Mode::Pending(p), None),
            (Mode::Select, Cancel(Some(p))) => (Mode::Select, Some(StoreCommand::DeleteTouching(p))),
            (Mode::Select, Cancel(None)) => (Mode::Select, None),

            // Clicking the pending point again is ignored: no zero-length walls.
            (Mode::Pending(first), Confirm(second)) if first == second => (self, None),
            (Mode::Pending(first), Confirm(second)) => {
                (Mode::Select, Some(StoreCommand::Insert(first, second)))
            }
            (Mode::Pending(_), Cancel(_)) => (Mode::Select, None),
        }
    }
}
