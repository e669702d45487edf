use crate::domain::Cell;
use crate::error::AutomatonError;

use super::automaton::{Automaton, PresentationSink};

/// Phase of a press-to-release pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Gesture {
    #[default]
    Idle,
    Dragging,
}

/// Applies pointer edits to the board, at most one toggle per cell per
/// gesture.
///
/// A continuous press produces repeated coordinate reports for the same
/// cell; the pre-gesture snapshot tells which cells this gesture already
/// flipped, so repeats are ignored. Toggle and population update are
/// O(1) — only the snapshot at gesture start walks the whole board.
#[derive(Debug, Default)]
pub struct InteractionController {
    gesture: Gesture,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture == Gesture::Dragging
    }

    /// Pointer pressed. Snapshots the board; a second press report while
    /// already dragging keeps the existing snapshot.
    pub fn begin_gesture(&mut self, automaton: &mut Automaton) {
        if self.gesture == Gesture::Dragging {
            return;
        }
        automaton.snapshot_committed();
        self.gesture = Gesture::Dragging;
    }

    /// A resolved coordinate arrived while the pointer is down. Returns
    /// the new state of the cell if this report flipped it, `None` if the
    /// report was ignored (not dragging, or already toggled this gesture).
    pub fn report_cell(
        &mut self,
        automaton: &mut Automaton,
        x: usize,
        y: usize,
        sink: &mut dyn PresentationSink,
    ) -> Result<Option<Cell>, AutomatonError> {
        if self.gesture != Gesture::Dragging {
            return Ok(None);
        }
        if automaton.changed_since_snapshot(x, y)? {
            return Ok(None);
        }
        let cell = automaton.toggle_cell(x, y, sink)?;
        Ok(Some(cell))
    }

    /// Pointer released. The snapshot is stale from here until the next
    /// gesture start.
    pub fn end_gesture(&mut self) {
        self.gesture = Gesture::Idle;
    }
}
