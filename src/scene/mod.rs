//! Scene-wide render settings applied before a capture.
//!
//! The renderer that owns skybox, fog, ambient light and the camera clear
//! color is reached through the [`RenderContext`] handle; settings are never
//! written to process-wide state directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Mid-gray fog color used by [`SceneSettings::default`].
pub const DEFAULT_FOG_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
/// Pure green clear color used by [`SceneSettings::default`].
pub const DEFAULT_BACKGROUND_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

/// Host renderer state that [`SceneSettings`] writes to.
pub trait RenderContext {
    /// Set the skybox material by name, or clear it.
    fn set_skybox(&mut self, skybox: Option<&str>);
    /// Set the environment (ambient) light intensity.
    fn set_ambient_intensity(&mut self, intensity: f32);
    /// Enable or disable distance fog.
    fn set_fog_enabled(&mut self, enabled: bool);
    /// Set the fog color (linear RGB).
    fn set_fog_color(&mut self, color: [f32; 3]);
    /// Set the capturing camera's clear color (linear RGB, opaque).
    fn set_background_color(&mut self, color: [f32; 3]);
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Render settings for the captured scene.
pub struct SceneSettings {
    /// Skybox material name. `None` renders without a skybox.
    #[schemars(title = "Skybox")]
    pub skybox: Option<String>,
    /// Environment light intensity multiplier.
    #[schemars(title = "Environment Light", range(min = 0.0, max = 8.0), extend("step" = 0.05))]
    pub ambient_intensity: f32,
    /// Whether distance fog is rendered.
    #[schemars(title = "Fog")]
    pub fog_enabled: bool,
    /// Fog color (linear RGB).
    #[schemars(title = "Fog Color")]
    pub fog_color: [f32; 3],
    /// Camera clear color (linear RGB).
    #[schemars(title = "Background")]
    pub background_color: [f32; 3],
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            skybox: None,
            ambient_intensity: 1.0,
            fog_enabled: false,
            fog_color: DEFAULT_FOG_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
        }
    }
}

impl SceneSettings {
    /// Push every setting to `ctx`.
    pub fn apply<R: RenderContext + ?Sized>(&self, ctx: &mut R) {
        ctx.set_skybox(self.skybox.as_deref());
        ctx.set_ambient_intensity(self.ambient_intensity);
        ctx.set_fog_enabled(self.fog_enabled);
        ctx.set_fog_color(self.fog_color);
        ctx.set_background_color(self.background_color);
    }

    /// Restore the capture defaults (no skybox, ambient 1, fog off, gray
    /// fog, green background) and apply them to `ctx`.
    pub fn reset_to_default<R: RenderContext + ?Sized>(&mut self, ctx: &mut R) {
        *self = Self::default();
        self.apply(ctx);
    }
}
