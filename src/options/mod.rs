//! Rig configuration with TOML preset support.
//!
//! A preset bundles the target framing, scene settings, smoothing rate and
//! projection planes. Options serialize to/from TOML; every section uses
//! `#[serde(default)]` so partial presets fill in the rest.

mod camera;
mod smoothing;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use smoothing::SmoothingOptions;

use crate::error::RigError;
use crate::frame::FrameParameters;
use crate::scene::SceneSettings;

/// Top-level rig preset.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct RigOptions {
    /// Target framing.
    pub frame: FrameParameters,
    /// Render settings for the captured scene.
    pub scene: SceneSettings,
    /// Framing smoothing.
    pub smoothing: SmoothingOptions,
    /// Projection clip planes.
    pub camera: CameraOptions,
}

impl RigOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(RigOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        log::info!("loaded rig preset {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)?;
        log::info!("saved rig preset {}", path.display());
        Ok(())
    }

    /// Names of the presets (`*.toml` file stems) in `dir`, sorted.
    ///
    /// An unreadable or missing directory has no presets.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| {
                path.file_stem().and_then(|s| s.to_str()).map(str::to_owned)
            })
            .collect();
        names.sort();
        names
    }
}
