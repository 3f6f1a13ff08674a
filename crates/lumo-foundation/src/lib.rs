//! Foundation contracts for Lumo components: focus, software keyboard,
//! key events, and per-element interaction sources.
//!
//! Nothing here renders. The types describe what a component needs from
//! the host platform so component state can be driven and tested without
//! a real focus system or on-screen keyboard.

pub mod focus;
pub mod interaction;
pub mod key;
pub mod keyboard;

pub use focus::{FocusDirection, FocusManager, FocusRequester};
pub use interaction::{Interaction, InteractionSourceId, MutableInteractionSource};
pub use key::{Key, KeyEvent, KeyEventType};
pub use keyboard::{ImeAction, KeyboardOptions, KeyboardType, SoftwareKeyboardController};

pub mod prelude {
    pub use crate::focus::{FocusDirection, FocusManager, FocusRequester};
    pub use crate::interaction::{Interaction, MutableInteractionSource};
    pub use crate::key::{Key, KeyEvent, KeyEventType};
    pub use crate::keyboard::{ImeAction, KeyboardOptions, KeyboardType, SoftwareKeyboardController};
}
