//! Software keyboard contract and IME configuration.

use std::rc::Rc;

/// Host capability controlling the on-screen keyboard.
///
/// Platforms without a software keyboard simply do not provide one, so
/// components hold this as an `Option`.
pub trait SoftwareKeyboardController {
    fn hide(&self);

    fn show(&self) {}
}

impl<K: SoftwareKeyboardController + ?Sized> SoftwareKeyboardController for Rc<K> {
    fn hide(&self) {
        (**self).hide();
    }

    fn show(&self) {
        (**self).show();
    }
}

/// Which keyboard layout the platform should present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyboardType {
    #[default]
    Text,
    Number,
    NumberPassword,
}

/// Action key shown by the input method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImeAction {
    #[default]
    Default,
    None,
    Next,
    Done,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardOptions {
    pub keyboard_type: KeyboardType,
    pub ime_action: ImeAction,
}

impl KeyboardOptions {
    pub const fn new(keyboard_type: KeyboardType, ime_action: ImeAction) -> Self {
        Self {
            keyboard_type,
            ime_action,
        }
    }
}
