//! The crate's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a mouse gesture,
//! a key press, or a programmatic call — is represented as a
//! `FlycamCommand`. Consumers construct commands and pass them to
//! [`CameraController::apply`](crate::camera::CameraController::apply).
//!
//! Continuous movement is the one exception: held keys accumulate in
//! the [`InputProcessor`](crate::input::InputProcessor) and are
//! advanced once per frame with the frame's elapsed time, so no
//! per-event command is emitted for them.

use glam::Vec2;

/// A discrete viewer operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlycamCommand {
    /// Rotate the view by a look offset.
    ///
    /// `delta.x` turns right for positive values, `delta.y` pitches up
    /// for positive values. Unscaled: the controller applies mouse
    /// sensitivity.
    Look {
        /// Look offset in input units (pixels of cursor travel).
        delta: Vec2,
    },
    /// Change the field of view (positive = zoom in).
    Zoom {
        /// Scroll amount in wheel lines.
        delta: f32,
    },
    /// Restore the camera's initial pose and field of view.
    ResetView,
    /// Close the viewer.
    Quit,
}
