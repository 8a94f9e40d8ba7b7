// Keyboard tracker - turns window key events into per-frame input snapshots

use super::state::InputState;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, NamedKey};

/// Tracks which keys are held and in what order they were pressed
#[derive(Debug, Default)]
pub struct KeyboardState {
    /// Pressed flag per lowercase key name (released keys stay as `false`)
    keys: HashMap<String, bool>,
    /// Held keys, oldest press first
    press_order: Vec<String>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let Some(name) = key_name(&event.logical_key) else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                // Auto-repeat must not reorder presses
                if !event.repeat {
                    self.press(&name);
                }
            }
            ElementState::Released => self.release(&name),
        }
    }

    /// Register a key press by name
    pub fn press(&mut self, key: &str) {
        let key = key.to_lowercase();
        if self.is_pressed(&key) {
            return;
        }
        self.press_order.retain(|k| *k != key);
        self.press_order.push(key.clone());
        self.keys.insert(key, true);
    }

    /// Register a key release by name
    pub fn release(&mut self, key: &str) {
        let key = key.to_lowercase();
        self.keys.insert(key.clone(), false);
        self.press_order.retain(|k| *k != key);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys
            .get(&key.to_lowercase())
            .copied()
            .unwrap_or(false)
    }

    /// Snapshot the keyboard for this frame
    pub fn snapshot(&self) -> InputState {
        InputState::from_parts(self.keys.clone(), self.press_order.clone())
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.keys.clear();
        self.press_order.clear();
    }
}

/// Lowercase name for a logical key, matching browser-style key names
/// (`" "` for space, `"shift"`, `"arrowleft"`, single characters).
fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.to_lowercase()),
        Key::Named(NamedKey::Space) => Some(" ".to_string()),
        Key::Named(named) => Some(format!("{named:?}").to_lowercase()),
        _ => None,
    }
}
