use std::fmt;
use std::rc::Rc;

use lumo_foundation::{
    FocusDirection, FocusManager, MutableInteractionSource, SoftwareKeyboardController,
};
use smallvec::SmallVec;

use super::{CompletionPolicy, CompletionTracker, OtpConfig};

/// Marker stored in a slot that holds no digit.
pub const EMPTY_SLOT: char = ' ';

/// Fixed-length one-time-passcode state.
///
/// The state only *requests* focus moves; which slot is focused is owned by
/// the injected [`FocusManager`]. Invalid events (index out of range, a
/// non-digit character) are ignored rather than reported, since the slots
/// already constrain their input.
pub struct OtpState {
    length: usize,
    code: SmallVec<[char; 8]>,
    focus_manager: Rc<dyn FocusManager>,
    keyboard_controller: Option<Rc<dyn SoftwareKeyboardController>>,
    interaction_sources: Vec<MutableInteractionSource>,
    revision: u64,
    completion: CompletionTracker,
    on_complete: Option<Box<dyn FnMut(&str)>>,
}

impl OtpState {
    pub fn new(
        config: OtpConfig,
        focus_manager: Rc<dyn FocusManager>,
        keyboard_controller: Option<Rc<dyn SoftwareKeyboardController>>,
    ) -> Self {
        let length = config.length();
        let mut code: SmallVec<[char; 8]> = config.initial_otp.chars().take(length).collect();
        code.resize(length, EMPTY_SLOT);

        Self {
            length,
            code,
            focus_manager,
            keyboard_controller,
            interaction_sources: (0..length).map(|_| MutableInteractionSource::new()).collect(),
            revision: 0,
            completion: CompletionTracker::new(config.completion_policy),
            on_complete: None,
        }
    }

    /// Installs the callback receiving the trimmed code on completion.
    pub fn with_on_complete(mut self, on_complete: impl FnMut(&str) + 'static) -> Self {
        self.set_on_complete(on_complete);
        self
    }

    pub fn set_on_complete(&mut self, on_complete: impl FnMut(&str) + 'static) {
        self.on_complete = Some(Box::new(on_complete));
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// The code with empty slots as [`EMPTY_SLOT`]; always `length` chars.
    pub fn code(&self) -> String {
        self.code.iter().collect()
    }

    pub fn slot(&self, index: usize) -> Option<char> {
        self.code.get(index).copied()
    }

    /// Incremented on every actual change to the code.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn completion_policy(&self) -> CompletionPolicy {
        self.completion.policy()
    }

    pub fn interaction_source(&self, index: usize) -> Option<&MutableInteractionSource> {
        self.interaction_sources.get(index)
    }

    pub fn interaction_sources(&self) -> &[MutableInteractionSource] {
        &self.interaction_sources
    }

    pub fn focus_manager(&self) -> &Rc<dyn FocusManager> {
        &self.focus_manager
    }

    /// Writes `digit` into slot `index` and advances focus, or hides the
    /// keyboard when the last slot was written.
    pub fn on_digit_entered(&mut self, index: usize, digit: char) {
        if index >= self.length || !digit.is_ascii_digit() {
            log::trace!("otp: ignoring entry {digit:?} at slot {index}");
            return;
        }
        self.write_slot(index, digit);

        if index < self.length - 1 {
            self.move_focus(FocusDirection::Next);
        } else if let Some(keyboard) = &self.keyboard_controller {
            log::trace!("otp: last slot filled, hiding keyboard");
            keyboard.hide();
        }
        self.observe_completion();
    }

    /// Empties slot `index` and retreats focus unless it is the first slot.
    pub fn on_digit_deleted(&mut self, index: usize) {
        if index >= self.length {
            log::trace!("otp: ignoring delete at slot {index}");
            return;
        }
        self.write_slot(index, EMPTY_SLOT);

        if index > 0 && self.is_field_empty(index) {
            self.move_focus(FocusDirection::Previous);
        }
        self.observe_completion();
    }

    /// Backspace on an already empty slot clears the previous slot and
    /// moves focus onto it. Focus retreats exactly one slot.
    pub fn on_backspace_pressed(&mut self, index: usize) {
        if index == 0 || index >= self.length || !self.is_field_empty(index) {
            return;
        }
        self.move_focus(FocusDirection::Previous);
        self.write_slot(index - 1, EMPTY_SLOT);
        self.observe_completion();
    }

    /// Out-of-range slots count as empty.
    pub fn is_field_empty(&self, index: usize) -> bool {
        self.code.get(index).map_or(true, |c| c.is_whitespace())
    }

    pub fn is_complete(&self) -> bool {
        self.code.iter().all(|c| !c.is_whitespace())
    }

    /// Feeds the current code to the completion tracker and fires the
    /// callback if due. Mutations call this themselves; hosts call it once
    /// when the field is first shown so a fully seeded code is reported.
    pub fn observe_completion(&mut self) {
        let code = self.code();
        let complete = self.is_complete();
        if let Some(value) = self.completion.observe(&code, complete) {
            log::debug!("otp: complete at revision {}", self.revision);
            if let Some(on_complete) = self.on_complete.as_mut() {
                on_complete(&value);
            }
        }
    }

    fn write_slot(&mut self, index: usize, value: char) {
        if self.code[index] != value {
            self.code[index] = value;
            self.revision += 1;
        }
    }

    fn move_focus(&self, direction: FocusDirection) {
        log::trace!("otp: move focus {direction:?}");
        self.focus_manager.move_focus(direction);
    }
}

impl fmt::Debug for OtpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpState")
            .field("length", &self.length)
            .field("code", &self.code())
            .field("revision", &self.revision)
            .field("has_keyboard", &self.keyboard_controller.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Moves(RefCell<Vec<FocusDirection>>);

    impl FocusManager for Moves {
        fn move_focus(&self, direction: FocusDirection) {
            self.0.borrow_mut().push(direction);
        }
    }

    #[derive(Default)]
    struct Hides(Cell<usize>);

    impl SoftwareKeyboardController for Hides {
        fn hide(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn state(length: usize, initial: &str) -> (OtpState, Rc<Moves>, Rc<Hides>) {
        let moves = Rc::new(Moves::default());
        let hides = Rc::new(Hides::default());
        let config = OtpConfig::new(length)
            .expect("positive length")
            .with_initial_otp(initial);
        let state = OtpState::new(config, moves.clone(), Some(hides.clone()));
        (state, moves, hides)
    }

    #[test]
    fn seed_is_padded_and_truncated() {
        let (padded, _, _) = state(4, "12");
        assert_eq!(padded.code(), "12  ");
        assert!(!padded.is_complete());

        let (truncated, _, _) = state(4, "123456");
        assert_eq!(truncated.code(), "1234");
        assert!(truncated.is_complete());
    }

    #[test]
    fn entry_overwrites_and_advances() {
        let (mut otp, moves, hides) = state(4, "5555");
        otp.on_digit_entered(1, '7');
        assert_eq!(otp.code(), "5755");
        assert_eq!(*moves.0.borrow(), vec![FocusDirection::Next]);
        assert_eq!(hides.0.get(), 0);
    }

    #[test]
    fn last_slot_hides_keyboard_without_moving_focus() {
        let (mut otp, moves, hides) = state(3, "");
        otp.on_digit_entered(2, '9');
        assert!(moves.0.borrow().is_empty());
        assert_eq!(hides.0.get(), 1);
    }

    #[test]
    fn missing_keyboard_is_skipped() {
        let moves = Rc::new(Moves::default());
        let config = OtpConfig::new(1).expect("positive length");
        let mut otp = OtpState::new(config, moves.clone(), None);
        otp.on_digit_entered(0, '1');
        assert_eq!(otp.code(), "1");
        assert!(moves.0.borrow().is_empty());
    }

    #[test]
    fn invalid_entries_are_ignored() {
        let (mut otp, moves, hides) = state(4, "");
        otp.on_digit_entered(4, '1');
        otp.on_digit_entered(0, 'a');
        otp.on_digit_entered(0, ' ');
        otp.on_digit_deleted(9);
        assert_eq!(otp.code(), "    ");
        assert_eq!(otp.revision(), 0);
        assert!(moves.0.borrow().is_empty());
        assert_eq!(hides.0.get(), 0);
    }

    #[test]
    fn deleting_first_slot_keeps_focus() {
        let (mut otp, moves, _) = state(4, "12");
        otp.on_digit_deleted(0);
        assert_eq!(otp.code(), " 2  ");
        assert!(moves.0.borrow().is_empty());

        otp.on_digit_deleted(1);
        assert_eq!(otp.code(), "    ");
        assert_eq!(*moves.0.borrow(), vec![FocusDirection::Previous]);
    }

    #[test]
    fn backspace_only_acts_on_empty_non_first_slot() {
        let (mut otp, moves, _) = state(4, "12");
        otp.on_backspace_pressed(1);
        otp.on_backspace_pressed(0);
        assert_eq!(otp.code(), "12  ");
        assert!(moves.0.borrow().is_empty());

        otp.on_backspace_pressed(2);
        assert_eq!(otp.code(), "1   ");
        assert_eq!(*moves.0.borrow(), vec![FocusDirection::Previous]);
    }

    #[test]
    fn backspace_past_the_last_slot_is_ignored() {
        let (mut otp, moves, _) = state(2, "1");
        otp.on_backspace_pressed(2);
        assert_eq!(otp.code(), "1 ");
        assert!(moves.0.borrow().is_empty());
    }

    #[test]
    fn backspace_into_first_slot_moves_once() {
        let (mut otp, moves, _) = state(4, "1");
        otp.on_backspace_pressed(1);
        assert_eq!(otp.code(), "    ");
        assert_eq!(*moves.0.borrow(), vec![FocusDirection::Previous]);
    }

    #[test]
    fn gap_in_the_middle_is_not_complete() {
        let (otp, _, _) = state(4, "1 34");
        assert!(!otp.is_complete());
        assert!(otp.is_field_empty(1));
        assert!(otp.is_field_empty(7));
    }

    #[test]
    fn completion_fires_once_per_value() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let (otp, _, _) = state(2, "");
        let sink = fired.clone();
        let mut otp = otp.with_on_complete(move |code| sink.borrow_mut().push(code.to_owned()));

        otp.on_digit_entered(0, '4');
        otp.on_digit_entered(1, '2');
        otp.on_digit_entered(1, '2');
        otp.observe_completion();
        assert_eq!(*fired.borrow(), vec!["42".to_owned()]);

        otp.on_digit_entered(0, '8');
        assert_eq!(*fired.borrow(), vec!["42".to_owned(), "82".to_owned()]);
    }

    #[test]
    fn revision_tracks_real_changes_only() {
        let (mut otp, _, _) = state(3, "");
        otp.on_digit_entered(0, '1');
        otp.on_digit_entered(0, '1');
        assert_eq!(otp.revision(), 1);
        otp.on_digit_deleted(2);
        assert_eq!(otp.revision(), 1);
        otp.on_digit_deleted(0);
        assert_eq!(otp.revision(), 2);
    }

    #[test]
    fn each_slot_has_its_own_interaction_source() {
        let (otp, _, _) = state(4, "");
        let sources = otp.interaction_sources();
        assert_eq!(sources.len(), 4);
        for (i, a) in sources.iter().enumerate() {
            for b in &sources[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
        assert!(otp.interaction_source(4).is_none());
    }
}
