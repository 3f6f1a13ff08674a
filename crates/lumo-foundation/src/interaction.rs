//! Per-element interaction sources.
//!
//! Every focusable element gets its own source so hosts (and tests) can tell
//! elements apart and target one of them.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractionSourceId(u64);

impl InteractionSourceId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Focus,
    Unfocus,
}

/// Interaction source whose clones observe the same state.
#[derive(Clone, Debug)]
pub struct MutableInteractionSource {
    id: InteractionSourceId,
    focused: Rc<Cell<bool>>,
}

impl Default for MutableInteractionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MutableInteractionSource {
    pub fn new() -> Self {
        Self {
            id: InteractionSourceId(NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed)),
            focused: Rc::new(Cell::new(false)),
        }
    }

    pub fn id(&self) -> InteractionSourceId {
        self.id
    }

    pub fn emit(&self, interaction: Interaction) {
        self.focused.set(interaction == Interaction::Focus);
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }
}

impl PartialEq for MutableInteractionSource {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MutableInteractionSource {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_are_distinct() {
        let a = MutableInteractionSource::new();
        let b = MutableInteractionSource::new();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn focus_interactions_toggle_state() {
        let source = MutableInteractionSource::new();
        let observer = source.clone();
        assert!(!observer.is_focused());
        source.emit(Interaction::Focus);
        assert!(observer.is_focused());
        source.emit(Interaction::Unfocus);
        assert!(!observer.is_focused());
    }
}
