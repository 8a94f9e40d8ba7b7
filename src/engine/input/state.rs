// Per-frame keyboard snapshot consumed by the action system

use std::collections::HashMap;

/// Snapshot of the keyboard for a single frame.
///
/// Keys are addressed by lowercase name (`"a"`, `"shift"`, `" "` for space).
/// The press order lists currently held keys from oldest to newest press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    keys: HashMap<String, bool>,
    press_order: Vec<String>,
}

impl InputState {
    /// Build a snapshot from the raw key map and press order supplied by the keyboard
    pub fn from_parts(keys: HashMap<String, bool>, press_order: Vec<String>) -> Self {
        Self { keys, press_order }
    }

    /// Build a snapshot where the given keys were pressed in order
    #[cfg(test)]
    pub fn with_pressed<I, S>(pressed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = Self::default();
        for key in pressed {
            state.press(key.as_ref());
        }
        state
    }

    /// Check if a key is pressed (name is matched case-insensitively)
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys
            .get(&key.to_lowercase())
            .copied()
            .unwrap_or(false)
    }

    /// Return whichever candidate was pressed most recently, if any is held
    pub fn last_pressed_among(&self, candidates: &[&str]) -> Option<&str> {
        self.press_order
            .iter()
            .rev()
            .find(|key| candidates.iter().any(|c| c.eq_ignore_ascii_case(key)))
            .map(String::as_str)
    }

    #[cfg(test)]
    fn press(&mut self, key: &str) {
        let key = key.to_lowercase();
        self.press_order.retain(|k| *k != key);
        self.press_order.push(key.clone());
        self.keys.insert(key, true);
    }
}
