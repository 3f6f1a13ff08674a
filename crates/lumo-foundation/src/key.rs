//! Hardware key events delivered to focused elements before text input.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Backspace,
    Delete,
    Enter,
    Tab,
    Char(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyEventType {
    KeyDown,
    KeyUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub event_type: KeyEventType,
}

impl KeyEvent {
    pub const fn new(key: Key, event_type: KeyEventType) -> Self {
        Self { key, event_type }
    }

    pub const fn key_down(key: Key) -> Self {
        Self::new(key, KeyEventType::KeyDown)
    }

    pub const fn key_up(key: Key) -> Self {
        Self::new(key, KeyEventType::KeyUp)
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.event_type == KeyEventType::KeyDown && self.key == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_matches_only_same_key_and_phase() {
        let event = KeyEvent::key_down(Key::Backspace);
        assert!(event.is_key_down(Key::Backspace));
        assert!(!event.is_key_down(Key::Delete));
        assert!(!KeyEvent::key_up(Key::Backspace).is_key_down(Key::Backspace));
    }
}
