use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frame::DEFAULT_SMOOTHING_RATE;

/// How quickly the rig chases its target framing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Smoothing", inline)]
#[serde(default)]
pub struct SmoothingOptions {
    /// Blend rate in 1/seconds. Higher is snappier; `delta * rate >= 1`
    /// jumps straight to the target.
    #[schemars(title = "Rate", range(min = 0.5, max = 60.0), extend("step" = 0.5))]
    pub rate: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            rate: DEFAULT_SMOOTHING_RATE,
        }
    }
}
