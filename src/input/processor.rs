//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (the last
//! cursor sample, held movement keys, mouse button state) and the
//! key-binding map. It is the only thing that sits between raw window
//! events and the camera controller's
//! [`apply`](crate::camera::CameraController::apply).

use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::camera::MoveDirection;
use crate::command::FlycamCommand;
use crate::options::KeybindingOptions;

/// Iteration order for the per-frame movement step.
const ALL_DIRECTIONS: [MoveDirection; 4] = [
    MoveDirection::Forward,
    MoveDirection::Backward,
    MoveDirection::Left,
    MoveDirection::Right,
];

/// Converts raw window events into [`FlycamCommand`]s.
///
/// Cursor movement always produces look commands (the deltas are what
/// matter; the viewer keeps the cursor inside the window). The first
/// cursor sample after construction only anchors the tracking
/// position, so entering the window never causes a view jump.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = processor.handle_event(event) {
///     controller.apply(cmd);
/// }
///
/// // Once per frame:
/// for direction in processor.held_directions() {
///     controller.move_along(direction, dt);
/// }
/// ```
pub struct InputProcessor {
    /// Last sampled cursor position; `None` until the first event.
    last_cursor: Option<Vec2>,
    /// Movement keys currently held down.
    held: HashSet<MoveDirection>,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Key string → direction/action mapping.
    bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_cursor: None,
            held: HashSet::new(),
            mouse_pressed: false,
            bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_bindings(bindings: KeybindingOptions) -> Self {
        Self {
            bindings,
            ..Self::new()
        }
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub const fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub const fn bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Movement directions currently held, in fixed order.
    pub fn held_directions(
        &self,
    ) -> impl Iterator<Item = MoveDirection> + '_ {
        ALL_DIRECTIONS
            .into_iter()
            .filter(|direction| self.held.contains(direction))
    }

    /// Drop all held keys and the pressed mouse button.
    ///
    /// Call when the window loses focus — the matching release events
    /// will never arrive.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.mouse_pressed = false;
    }

    /// Process a key press or release.
    ///
    /// `key` uses the `winit::keyboard::KeyCode` debug format
    /// (`"KeyW"`, `"Escape"`, ...). Movement keys update the held set
    /// and return `None`; bound actions fire on press only.
    pub fn handle_key(
        &mut self,
        key: &str,
        pressed: bool,
    ) -> Option<FlycamCommand> {
        if let Some(direction) = self.bindings.lookup_movement(key) {
            if pressed {
                let _ = self.held.insert(direction);
            } else {
                let _ = self.held.remove(&direction);
            }
            return None;
        }

        if !pressed {
            return None;
        }
        self.bindings.lookup_action(key).map(action_command)
    }

    /// Process a raw pointer event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<FlycamCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => {
                Some(FlycamCommand::Zoom { delta })
            }
        }
    }

    /// Cursor moved — compute a look offset from the previous sample.
    ///
    /// Screen y grows downward, so the vertical delta is flipped:
    /// moving the mouse up pitches the view up.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<FlycamCommand> {
        let current = Vec2::new(x, y);
        let Some(last) = self.last_cursor.replace(current) else {
            return None;
        };

        let delta = Vec2::new(current.x - last.x, last.y - current.y);
        if delta == Vec2::ZERO {
            return None;
        }
        Some(FlycamCommand::Look { delta })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a bound action into its parameterless command.
const fn action_command(action: KeyAction) -> FlycamCommand {
    match action {
        KeyAction::ResetView => FlycamCommand::ResetView,
        KeyAction::Quit => FlycamCommand::Quit,
    }
}
