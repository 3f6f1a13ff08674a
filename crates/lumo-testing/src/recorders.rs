//! Test doubles for the host capabilities a component talks to.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lumo_foundation::{FocusDirection, FocusManager, SoftwareKeyboardController};

/// Focus manager that only records the directives it receives.
#[derive(Debug, Default)]
pub struct RecordingFocusManager {
    moves: RefCell<Vec<FocusDirection>>,
}

impl RecordingFocusManager {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn moves(&self) -> Vec<FocusDirection> {
        self.moves.borrow().clone()
    }

    pub fn count(&self, direction: FocusDirection) -> usize {
        self.moves.borrow().iter().filter(|d| **d == direction).count()
    }

    pub fn clear(&self) {
        self.moves.borrow_mut().clear();
    }
}

impl FocusManager for RecordingFocusManager {
    fn move_focus(&self, direction: FocusDirection) {
        self.moves.borrow_mut().push(direction);
    }
}

/// Focus manager that keeps a cursor over a row of `slot_count` elements,
/// the way a platform traverses a single row of text fields.
///
/// Moves past either end leave the cursor on the edge element.
#[derive(Debug)]
pub struct SimulatedFocusManager {
    slot_count: usize,
    focused: Cell<Option<usize>>,
    moves: RefCell<Vec<FocusDirection>>,
}

impl SimulatedFocusManager {
    pub fn new(slot_count: usize) -> Rc<Self> {
        Rc::new(Self {
            slot_count,
            focused: Cell::new(None),
            moves: RefCell::new(Vec::new()),
        })
    }

    pub fn focus(&self, index: usize) {
        if index < self.slot_count {
            self.focused.set(Some(index));
        }
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused.get()
    }

    pub fn moves(&self) -> Vec<FocusDirection> {
        self.moves.borrow().clone()
    }

    pub fn clear_moves(&self) {
        self.moves.borrow_mut().clear();
    }
}

impl FocusManager for SimulatedFocusManager {
    fn move_focus(&self, direction: FocusDirection) {
        self.moves.borrow_mut().push(direction);
        let Some(current) = self.focused.get() else {
            log::trace!("simulated focus: {direction:?} with nothing focused");
            return;
        };
        let next = match direction {
            FocusDirection::Next => (current + 1).min(self.slot_count.saturating_sub(1)),
            FocusDirection::Previous => current.saturating_sub(1),
        };
        self.focused.set(Some(next));
    }
}

#[derive(Debug, Default)]
pub struct RecordingKeyboardController {
    hides: Cell<usize>,
}

impl RecordingKeyboardController {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn hide_count(&self) -> usize {
        self.hides.get()
    }
}

impl SoftwareKeyboardController for RecordingKeyboardController {
    fn hide(&self) {
        self.hides.set(self.hides.get() + 1);
    }
}

/// Collects every value passed to a completion callback.
#[derive(Clone, Debug, Default)]
pub struct CompletionRecorder {
    values: Rc<RefCell<Vec<String>>>,
}

impl CompletionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback to hand to the component under test.
    pub fn sink(&self) -> impl FnMut(&str) + 'static {
        let values = Rc::clone(&self.values);
        move |code: &str| values.borrow_mut().push(code.to_owned())
    }

    pub fn values(&self) -> Vec<String> {
        self.values.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn last(&self) -> Option<String> {
        self.values.borrow().last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_focus_clamps_at_edges() {
        let focus = SimulatedFocusManager::new(3);
        focus.move_focus(FocusDirection::Next);
        assert_eq!(focus.focused(), None);

        focus.focus(0);
        focus.move_focus(FocusDirection::Previous);
        assert_eq!(focus.focused(), Some(0));
        focus.move_focus(FocusDirection::Next);
        focus.move_focus(FocusDirection::Next);
        focus.move_focus(FocusDirection::Next);
        assert_eq!(focus.focused(), Some(2));
        assert_eq!(focus.moves().len(), 5);
    }

    #[test]
    fn completion_recorder_shares_values_with_sink() {
        let recorder = CompletionRecorder::new();
        let mut sink = recorder.sink();
        sink("12");
        sink("34");
        assert_eq!(recorder.values(), vec!["12", "34"]);
        assert_eq!(recorder.last().as_deref(), Some("34"));
    }

    #[test]
    fn recording_focus_manager_counts_directions() {
        let focus = RecordingFocusManager::new();
        focus.move_focus(FocusDirection::Next);
        focus.move_focus(FocusDirection::Previous);
        focus.move_focus(FocusDirection::Next);
        assert_eq!(focus.count(FocusDirection::Next), 2);
        focus.clear();
        assert!(focus.moves().is_empty());
    }
}
