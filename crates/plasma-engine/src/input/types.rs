/// Keyboard key identifier.
///
/// Covers the keys the viewer binds commands to. Everything else maps to
/// `Key::Unknown(u32)` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,
    R,
    S,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// Auto-repeat from a held key.
        repeat: bool,
    },
}

impl InputEvent {
    /// The key, if this is a fresh (non-repeat) press.
    pub fn pressed_key(&self) -> Option<Key> {
        match *self {
            InputEvent::Key { key, state: KeyState::Pressed, repeat: false } => Some(key),
            _ => None,
        }
    }
}
