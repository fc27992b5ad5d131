use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Window and frame-pacing parameters for the viewer shell.
pub struct DisplayOptions {
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Frame-rate cap (0 = unlimited).
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "flycam".into(),
            target_fps: 0,
        }
    }
}
