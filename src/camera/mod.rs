//! Camera system for 3D scene viewing.
//!
//! Provides a free-fly camera with Euler-angle orientation, keyboard
//! movement, mouse look, scroll zoom, and view/projection matrix
//! construction.

/// Interaction layer scaling raw input into camera mutation.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use controller::CameraController;
pub use core::{Camera, CameraUniform, MoveDirection};
