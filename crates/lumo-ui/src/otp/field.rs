use lumo_foundation::{
    FocusDirection, FocusRequester, ImeAction, Key, KeyEvent, KeyboardOptions, KeyboardType,
};

use super::slot::{content_description, OtpSlot, VisualTransformation};
use super::OtpState;

/// Decoration variant; the renderer decides what each one looks like.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OtpFieldType {
    #[default]
    Filled,
    Outlined,
    Underlined,
}

/// Row of single-character slots bound to an [`OtpState`].
///
/// The renderer shows [`slots`](Self::slots) and forwards each slot's raw
/// text changes, key events, and IME actions here.
pub struct OtpTextField {
    state: OtpState,
    focus_requester: FocusRequester,
    enabled: bool,
    read_only: bool,
    is_error: bool,
    auto_focus: bool,
    field_type: OtpFieldType,
    visual_transformation: VisualTransformation,
    keyboard_options: KeyboardOptions,
}

impl OtpTextField {
    pub fn new(state: OtpState) -> Self {
        Self {
            state,
            focus_requester: FocusRequester::new(),
            enabled: true,
            read_only: false,
            is_error: false,
            auto_focus: true,
            field_type: OtpFieldType::default(),
            visual_transformation: VisualTransformation::default(),
            keyboard_options: KeyboardOptions::new(KeyboardType::NumberPassword, ImeAction::Next),
        }
    }

    pub fn outlined(state: OtpState) -> Self {
        Self::new(state).with_field_type(OtpFieldType::Outlined)
    }

    pub fn underlined(state: OtpState) -> Self {
        Self::new(state).with_field_type(OtpFieldType::Underlined)
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn with_field_type(mut self, field_type: OtpFieldType) -> Self {
        self.field_type = field_type;
        self
    }

    pub fn with_visual_transformation(mut self, transformation: VisualTransformation) -> Self {
        self.visual_transformation = transformation;
        self
    }

    pub fn state(&self) -> &OtpState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut OtpState {
        &mut self.state
    }

    pub fn into_state(self) -> OtpState {
        self.state
    }

    pub fn field_type(&self) -> OtpFieldType {
        self.field_type
    }

    pub fn keyboard_options(&self) -> KeyboardOptions {
        self.keyboard_options
    }

    /// Requester attached to the first slot.
    pub fn focus_requester(&self) -> &FocusRequester {
        &self.focus_requester
    }

    pub fn is_editable(&self) -> bool {
        self.enabled && !self.read_only
    }

    /// First-show hook: focuses the first slot when auto focus is on and
    /// reports a code that was seeded complete.
    pub fn mount(&mut self) {
        if self.auto_focus {
            self.focus_requester.request_focus();
        }
        self.state.observe_completion();
    }

    pub fn slots(&self) -> Vec<OtpSlot> {
        (0..self.state.length()).filter_map(|index| self.slot(index)).collect()
    }

    pub fn slot(&self, index: usize) -> Option<OtpSlot> {
        let raw = self.state.slot(index)?;
        let source = self.state.interaction_source(index)?;
        let digit = (!raw.is_whitespace()).then_some(raw);
        let value = digit.map(String::from).unwrap_or_default();

        Some(OtpSlot {
            index,
            digit,
            display: self.visual_transformation.apply(&value),
            value,
            content_description: content_description(index, self.state.length()),
            interaction_source: source.id(),
            focused: source.is_focused(),
            focus_target: index == 0,
            enabled: self.enabled,
            read_only: self.read_only,
            is_error: self.is_error,
        })
    }

    /// Text-change notification from slot `index`. The editor holds at most
    /// the old char plus the typed one, so only the last char counts.
    pub fn on_value_change(&mut self, index: usize, new_value: &str) {
        if !self.is_editable() {
            return;
        }
        match new_value.chars().last() {
            Some(last) if last.is_ascii_digit() => self.state.on_digit_entered(index, last),
            Some(_) => log::trace!("otp: slot {index} ignored non-digit input"),
            None => self.state.on_digit_deleted(index),
        }
    }

    /// Key event seen by slot `index` before text input. Returns `true` when
    /// the event was consumed: a backspace on an empty slot.
    pub fn on_preview_key_event(&mut self, index: usize, event: &KeyEvent) -> bool {
        if !self.is_editable() || index >= self.state.length() {
            return false;
        }
        if event.is_key_down(Key::Backspace) && self.state.is_field_empty(index) {
            self.state.on_backspace_pressed(index);
            true
        } else {
            false
        }
    }

    pub fn on_ime_action(&mut self, index: usize, action: ImeAction) {
        if !self.is_editable() || index >= self.state.length() {
            return;
        }
        if action == ImeAction::Next {
            log::trace!("otp: ime next from slot {index}");
            self.state.focus_manager().move_focus(FocusDirection::Next);
        }
    }
}
