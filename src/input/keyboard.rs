use serde::{Deserialize, Serialize};

/// Discrete actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay
/// readable:
/// ```toml
/// [keybindings.actions]
/// reset_view = "KeyR"
/// quit = "Escape"
/// ```
///
/// Continuous movement is not an action — held movement keys map to
/// [`MoveDirection`](crate::camera::MoveDirection) values that the
/// processor accumulates per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Restore the camera's initial pose and field of view.
    ResetView,
    /// Close the viewer.
    Quit,
}
