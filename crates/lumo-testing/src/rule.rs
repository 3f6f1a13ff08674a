//! Headless harness that drives an [`OtpTextField`] the way a platform would:
//! keystrokes go to whichever slot currently holds focus.

use std::rc::Rc;

use lumo_foundation::{ImeAction, Interaction, Key, KeyEvent, SoftwareKeyboardController};
use lumo_ui::{OtpConfig, OtpSlot, OtpState, OtpTextField};

use crate::recorders::{CompletionRecorder, RecordingKeyboardController, SimulatedFocusManager};

pub struct OtpTestRule {
    field: OtpTextField,
    focus: Rc<SimulatedFocusManager>,
    keyboard: Rc<RecordingKeyboardController>,
    completions: CompletionRecorder,
}

impl OtpTestRule {
    pub fn new(config: OtpConfig) -> Self {
        Self::with_field(config, |field| field)
    }

    /// Builds the field, lets `configure` adjust it, then mounts it.
    pub fn with_field(
        config: OtpConfig,
        configure: impl FnOnce(OtpTextField) -> OtpTextField,
    ) -> Self {
        let focus = SimulatedFocusManager::new(config.length());
        let keyboard = RecordingKeyboardController::new();
        let completions = CompletionRecorder::new();
        let keyboard_handle: Rc<dyn SoftwareKeyboardController> = keyboard.clone();
        let state = OtpState::new(config, focus.clone(), Some(keyboard_handle))
            .with_on_complete(completions.sink());

        let mut rule = Self {
            field: configure(OtpTextField::new(state)),
            focus,
            keyboard,
            completions,
        };
        rule.mount();
        rule
    }

    fn mount(&mut self) {
        self.field.mount();
        if self.field.focus_requester().take_request() {
            self.focus.focus(0);
        }
        self.sync_focus();
    }

    /// Mirrors the simulated cursor onto the slots' interaction sources.
    fn sync_focus(&self) {
        let focused = self.focus.focused();
        for (index, source) in self.field.state().interaction_sources().iter().enumerate() {
            let interaction = if focused == Some(index) {
                Interaction::Focus
            } else {
                Interaction::Unfocus
            };
            source.emit(interaction);
        }
    }

    pub fn field(&self) -> &OtpTextField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut OtpTextField {
        &mut self.field
    }

    pub fn code(&self) -> String {
        self.field.state().code()
    }

    pub fn slots(&self) -> Vec<OtpSlot> {
        self.field.slots()
    }

    pub fn focused_slot(&self) -> Option<usize> {
        self.focus.focused()
    }

    pub fn focus_manager(&self) -> &SimulatedFocusManager {
        &self.focus
    }

    pub fn keyboard(&self) -> &RecordingKeyboardController {
        &self.keyboard
    }

    pub fn completions(&self) -> &CompletionRecorder {
        &self.completions
    }

    /// Moves focus to `index` as a tap on that slot would.
    pub fn tap_slot(&mut self, index: usize) {
        self.focus.focus(index);
        self.sync_focus();
    }

    /// Types `ch` into the focused slot. The slot's editor appends to what it
    /// already shows, so the field sees `old + ch`.
    pub fn type_char(&mut self, ch: char) {
        let Some(index) = self.focus.focused() else {
            return;
        };
        if self.field.on_preview_key_event(index, &KeyEvent::key_down(Key::Char(ch))) {
            return;
        }
        let mut value = self.slot_value(index);
        value.push(ch);
        self.field.on_value_change(index, &value);
        self.sync_focus();
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.type_char(ch);
        }
    }

    /// Presses backspace on the focused slot. If the key event is not
    /// consumed the slot's editor deletes its own char.
    pub fn press_backspace(&mut self) {
        let Some(index) = self.focus.focused() else {
            return;
        };
        let consumed = self
            .field
            .on_preview_key_event(index, &KeyEvent::key_down(Key::Backspace));
        if !consumed {
            let mut value = self.slot_value(index);
            if value.pop().is_some() {
                self.field.on_value_change(index, &value);
            }
        }
        self.sync_focus();
    }

    pub fn press_ime_next(&mut self) {
        if let Some(index) = self.focus.focused() {
            self.field.on_ime_action(index, ImeAction::Next);
        }
        self.sync_focus();
    }

    fn slot_value(&self, index: usize) -> String {
        self.field
            .slot(index)
            .map(|slot| slot.value)
            .unwrap_or_default()
    }
}
