use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera starting pose, projection, and control parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    pub position: [f32; 3],
    /// Initial yaw in degrees (-90 faces `-Z`).
    pub yaw: f32,
    /// Initial pitch in degrees.
    pub pitch: f32,
    /// Initial vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Mouse look sensitivity in degrees per pixel.
    pub mouse_sensitivity: f32,
    /// Zoom sensitivity multiplier per wheel line.
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: -90.0,
            pitch: 0.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            zoom_speed: 1.0,
        }
    }
}
