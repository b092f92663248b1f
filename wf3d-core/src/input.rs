/// Per-frame snapshot of the camera control keys
use std::collections::HashSet;

/// Keys the camera responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    S,
    Q,
    E,
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Priority order used when several keys are held in the same frame
    pub const PRIORITY: [Key; 10] = [
        Key::A,
        Key::D,
        Key::W,
        Key::S,
        Key::Q,
        Key::E,
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
    ];
}

/// Keys held during one frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// The single key acted on this frame, if any
    pub fn first_held(&self) -> Option<Key> {
        Key::PRIORITY.into_iter().find(|&key| self.is_held(key))
    }
}

impl FromIterator<Key> for InputState {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_held_follows_priority() {
        let input: InputState = [Key::Down, Key::W, Key::Left].into_iter().collect();
        assert_eq!(input.first_held(), Some(Key::W));

        let input: InputState = [Key::Right, Key::Up].into_iter().collect();
        assert_eq!(input.first_held(), Some(Key::Right));
    }

    #[test]
    fn test_press_release() {
        let mut input = InputState::new();
        assert_eq!(input.first_held(), None);

        input.press(Key::Q);
        assert!(input.is_held(Key::Q));
        input.release(Key::Q);
        assert!(!input.is_held(Key::Q));

        input.press(Key::E);
        input.clear();
        assert_eq!(input.first_held(), None);
    }
}
