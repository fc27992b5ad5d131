//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera pose and speeds, window parameters,
//! keybindings) are consolidated here. Options serialize to/from TOML
//! for presets, and every section uses `#[serde(default)]` so partial
//! files work.

mod camera;
mod display;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[camera]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera pose, projection, and control parameters.
    pub camera: CameraOptions,
    /// Window and frame-pacing parameters.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path).map_err(FlycamError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        // The serde(skip) reverse maps don't reflect the loaded
        // bindings until rebuilt.
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlycamError::Io)?;
        }
        std::fs::write(path, content).map_err(FlycamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use crate::camera::MoveDirection;
    use crate::input::KeyAction;

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 5.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 5.0);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.camera.position, [0.0, 0.0, 3.0]);
        assert_eq!(opts.display.width, 800);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup_movement("KeyW"),
            Some(MoveDirection::Forward)
        );
        assert_eq!(
            opts.keybindings.lookup_action("Escape"),
            Some(KeyAction::Quit)
        );
        assert_eq!(opts.keybindings.lookup_movement("KeyZ"), None);
    }

    #[test]
    fn load_rebuilds_reverse_maps() {
        let dir = std::env::temp_dir().join("flycam-options-test");
        let path = dir.join("preset.toml");

        let mut opts = Options::default();
        let _ = opts
            .keybindings
            .movement
            .insert(MoveDirection::Forward, "ArrowUp".into());
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(
            loaded.keybindings.lookup_movement("ArrowUp"),
            Some(MoveDirection::Forward)
        );
        assert_eq!(loaded.keybindings.lookup_movement("KeyW"), None);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn list_presets_returns_sorted_toml_stems() {
        let dir = std::env::temp_dir().join("flycam-preset-list-test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("wide.toml"), "").unwrap();
        std::fs::write(dir.join("close.toml"), "").unwrap();
        std::fs::write(dir.join("notes.txt"), "").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["close", "wide"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
