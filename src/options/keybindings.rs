use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::MoveDirection;
use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings.
///
/// Movement bindings are held-key directions sampled every frame;
/// action bindings fire once on key press. Key strings use the
/// `winit::keyboard::KeyCode` debug format (`"KeyW"`, `"Escape"`).
pub struct KeybindingOptions {
    /// Maps movement direction → key string.
    pub movement: HashMap<MoveDirection, String>,
    /// Maps action → key string.
    pub actions: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → direction). Rebuilt on load.
    #[serde(skip)]
    key_to_movement: HashMap<String, MoveDirection>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let movement = HashMap::from([
            (MoveDirection::Forward, "KeyW".into()),
            (MoveDirection::Backward, "KeyS".into()),
            (MoveDirection::Left, "KeyA".into()),
            (MoveDirection::Right, "KeyD".into()),
        ]);
        let actions = HashMap::from([
            (KeyAction::ResetView, "KeyR".into()),
            (KeyAction::Quit, "Escape".into()),
        ]);

        let mut opts = Self {
            movement,
            actions,
            key_to_movement: HashMap::new(),
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup maps (key string → binding).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_movement.clear();
        for (direction, key) in &self.movement {
            let _ = self.key_to_movement.insert(key.clone(), *direction);
        }
        self.key_to_action.clear();
        for (action, key) in &self.actions {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the movement direction for a key string.
    #[must_use]
    pub fn lookup_movement(&self, key: &str) -> Option<MoveDirection> {
        self.key_to_movement.get(key).copied()
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup_action(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
