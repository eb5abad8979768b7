//! Camera framing parameters and the pose they describe.
//!
//! A [`FrameParameters`] value says how a camera sits relative to a rig
//! origin: pitch/yaw/roll orientation, a distance along the view axis, two
//! fine offsets and a field of view. [`FrameParameters::to_pose`] turns it
//! into a concrete [`Pose`]; [`interpolator`] smooths between two framings
//! over time.

/// Exponential lerp-rate smoothing between framings.
pub mod interpolator;
/// Pose output and rig origin types.
pub mod pose;

pub use interpolator::{
    advance, FrameInterpolator, DEFAULT_SMOOTHING_RATE, MIN_DELTA_SECONDS,
};
pub use pose::{Pose, RigOrigin};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Frame", inline)]
#[serde(default)]
/// Framing of a camera relative to its rig origin.
///
/// Angles are in degrees. The ranges in the schema are what the editing UI
/// offers; the math itself accepts any real value.
pub struct FrameParameters {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Elevation of the view axis in degrees.
    #[schemars(title = "Pitch", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Yaw in degrees. Enters the view axis as a raw linear term.
    #[schemars(title = "Yaw", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub yaw: f32,
    /// Rotation about the view axis in degrees.
    #[schemars(title = "Roll", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub roll: f32,
    /// Sideways shift along the camera right axis, in units of `distance`.
    #[schemars(title = "Lateral Offset", range(min = -1.0, max = 1.0), extend("step" = 0.01))]
    pub lateral_offset: f32,
    /// Shift along world up, in units of `distance`.
    #[schemars(title = "Vertical Offset", range(min = -1.0, max = 1.0), extend("step" = 0.01))]
    pub vertical_offset: f32,
    /// Distance from the origin back along the view axis.
    #[schemars(title = "Distance", range(min = 0.0), extend("step" = 0.5))]
    pub distance: f32,
}

impl Default for FrameParameters {
    fn default() -> Self {
        Self {
            fov: 45.0,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            lateral_offset: 0.0,
            vertical_offset: 0.0,
            distance: 20.0,
        }
    }
}

impl FrameParameters {
    /// Blend every field toward `other` by `t` (clamped to [0, 1], NaN
    /// treated as 0).
    ///
    /// Fields are independent. `t == 1` returns `other` exactly, and a field
    /// already equal to its target is left bit-for-bit unchanged.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        if t.is_nan() {
            return *self;
        }
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return *other;
        }
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            fov: mix(self.fov, other.fov),
            pitch: mix(self.pitch, other.pitch),
            yaw: mix(self.yaw, other.yaw),
            roll: mix(self.roll, other.roll),
            lateral_offset: mix(self.lateral_offset, other.lateral_offset),
            vertical_offset: mix(self.vertical_offset, other.vertical_offset),
            distance: mix(self.distance, other.distance),
        }
    }

    /// The seven scalar fields in declaration order.
    #[must_use]
    pub fn to_array(&self) -> [f32; 7] {
        [
            self.fov,
            self.pitch,
            self.yaw,
            self.roll,
            self.lateral_offset,
            self.vertical_offset,
            self.distance,
        ]
    }

    /// Euclidean distance between two framings over all seven fields.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f32>()
            .sqrt()
    }

    /// Compute the camera pose for this framing around `origin`.
    ///
    /// The view axis is `normalize(cos(pitch), yaw, sin(pitch))` (radians,
    /// yaw as a raw linear term) in the origin's basis, falling back to the
    /// origin forward axis when it cannot be normalized. Roll spins the
    /// camera about that axis; the camera then backs off by `distance` and
    /// shifts by the fine offsets along its right axis and the origin up.
    #[must_use]
    pub fn to_pose(&self, origin: &RigOrigin) -> Pose {
        pose::compute(self, origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrameParameters {
        FrameParameters {
            fov: 60.0,
            pitch: 30.0,
            yaw: -45.0,
            roll: 10.0,
            lateral_offset: 0.25,
            vertical_offset: -0.5,
            distance: 12.0,
        }
    }

    #[test]
    fn defaults_match_editor_values() {
        let f = FrameParameters::default();
        assert_eq!(f.fov, 45.0);
        assert_eq!(f.distance, 20.0);
        assert_eq!(f.pitch, 0.0);
        assert_eq!(f.lateral_offset, 0.0);
    }

    #[test]
    fn lerp_full_step_returns_target() {
        let a = FrameParameters::default();
        let b = sample();
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 7.5), b);
    }

    #[test]
    fn lerp_zero_step_keeps_current() {
        let a = FrameParameters::default();
        assert_eq!(a.lerp(&sample(), 0.0), a);
        assert_eq!(a.lerp(&sample(), -2.0), a);
    }

    #[test]
    fn lerp_ignores_nan_step() {
        let a = FrameParameters::default();
        assert_eq!(a.lerp(&sample(), f32::NAN), a);
        assert_eq!(a.lerp(&a, f32::NAN), a);
    }

    #[test]
    fn lerp_fields_are_independent() {
        let a = FrameParameters::default();
        let mut b = a;
        b.roll = 90.0;
        let mid = a.lerp(&b, 0.5);
        assert!((mid.roll - 45.0).abs() < 1e-6);
        assert_eq!(mid.pitch, a.pitch);
        assert_eq!(mid.distance, a.distance);
        assert_eq!(mid.fov, a.fov);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let s = sample();
        assert_eq!(s.distance_to(&s), 0.0);
        let mut t = s;
        t.pitch += 3.0;
        t.yaw += 4.0;
        assert!((s.distance_to(&t) - 5.0).abs() < 1e-5);
    }
}
