//! Focus traversal contracts.
//!
//! Components never own the "current focus" truth. They issue directives to
//! a [`FocusManager`] supplied by the host, or park a request on a
//! [`FocusRequester`] the host drains on its next frame.

use std::cell::Cell;
use std::rc::Rc;

/// Direction of a relative focus move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusDirection {
    Next,
    Previous,
}

/// Host capability that moves input focus between focusable elements.
///
/// Moves are fire-and-forget: there is no error path at this boundary.
pub trait FocusManager {
    fn move_focus(&self, direction: FocusDirection);
}

impl<F: FocusManager + ?Sized> FocusManager for Rc<F> {
    fn move_focus(&self, direction: FocusDirection) {
        (**self).move_focus(direction);
    }
}

/// Handle attached to one focusable element so code can ask for focus on it
/// directly instead of traversing.
///
/// Clones share the same pending flag.
#[derive(Clone, Debug, Default)]
pub struct FocusRequester {
    pending: Rc<Cell<bool>>,
}

impl FocusRequester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_focus(&self) {
        log::trace!("focus requested");
        self.pending.set(true);
    }

    pub fn has_pending_request(&self) -> bool {
        self.pending.get()
    }

    /// Consumes the pending request. Returns `true` if one was outstanding.
    pub fn take_request(&self) -> bool {
        self.pending.replace(false)
    }
}
