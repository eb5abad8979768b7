use super::{FrameParameters, Pose, RigOrigin};

/// Default blend rate, in units of 1/seconds.
pub const DEFAULT_SMOOTHING_RATE: f32 = 20.0;

/// Smallest elapsed time a tick is treated as, so a zero or paused delta
/// still makes progress.
pub const MIN_DELTA_SECONDS: f32 = 0.001;

/// Move `current` toward `target` after `delta_seconds` of elapsed time.
///
/// The delta is floored to [`MIN_DELTA_SECONDS`] and the blend factor is
/// `clamp01(delta * rate)`, so a long frame lands exactly on `target`
/// instead of overshooting. Every field blends independently.
#[must_use]
pub fn advance(
    current: &FrameParameters,
    target: &FrameParameters,
    delta_seconds: f32,
    rate: f32,
) -> FrameParameters {
    current.lerp(target, blend_factor(delta_seconds, rate))
}

/// `clamp01(max(delta_seconds, MIN_DELTA_SECONDS) * rate)`.
#[must_use]
pub fn blend_factor(delta_seconds: f32, rate: f32) -> f32 {
    // f32::max ignores NaN, so a bogus delta floors too.
    let dt = delta_seconds.max(MIN_DELTA_SECONDS);
    let t = dt * rate;
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

/// Owns the smoothed framing of one camera rig.
///
/// Created when the rig becomes active, then driven once per host tick with
/// [`FrameInterpolator::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInterpolator {
    current: FrameParameters,
    rate: f32,
}

impl FrameInterpolator {
    /// Start at a copy of `start` with the default rate.
    #[must_use]
    pub fn new(start: FrameParameters) -> Self {
        Self::with_rate(start, DEFAULT_SMOOTHING_RATE)
    }

    /// Start at a copy of `start` blending at `rate`.
    #[must_use]
    pub fn with_rate(start: FrameParameters, rate: f32) -> Self {
        Self {
            current: start,
            rate,
        }
    }

    /// The smoothed framing.
    #[must_use]
    pub fn current(&self) -> &FrameParameters {
        &self.current
    }

    /// Blend rate in 1/seconds.
    #[must_use]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Change the blend rate. Takes effect on the next tick.
    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
    }

    /// Step toward `target` and store the result.
    pub fn advance(
        &mut self,
        target: &FrameParameters,
        delta_seconds: f32,
    ) -> FrameParameters {
        self.current = advance(&self.current, target, delta_seconds, self.rate);
        self.current
    }

    /// Jump straight to `target`.
    pub fn snap_to(&mut self, target: &FrameParameters) {
        self.current = *target;
    }

    /// Pose of the smoothed framing around `origin`.
    #[must_use]
    pub fn pose(&self, origin: &RigOrigin) -> Pose {
        self.current.to_pose(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framing(pitch: f32) -> FrameParameters {
        FrameParameters {
            pitch,
            ..FrameParameters::default()
        }
    }

    #[test]
    fn equal_target_is_a_fixed_point() {
        let current = FrameParameters {
            fov: 33.3,
            pitch: 0.1,
            yaw: -17.7,
            roll: 5.5,
            lateral_offset: 0.3,
            vertical_offset: -0.9,
            distance: 7.1,
        };
        for dt in [0.0, 0.001, 0.016, 0.5, 3.0] {
            for rate in [0.0, 1.0, 20.0, 1000.0] {
                assert_eq!(advance(&current, &current, dt, rate), current);
            }
        }
    }

    #[test]
    fn large_step_snaps_to_target() {
        let current = framing(0.0);
        let target = framing(90.0);
        let next = advance(&current, &target, 1.0, DEFAULT_SMOOTHING_RATE);
        assert_eq!(next, target);
    }

    #[test]
    fn converges_monotonically_below_full_blend() {
        let target = FrameParameters {
            fov: 80.0,
            pitch: 90.0,
            yaw: -30.0,
            roll: 15.0,
            lateral_offset: 0.5,
            vertical_offset: 0.25,
            distance: 5.0,
        };
        let mut current = FrameParameters::default();
        let mut last = current.distance_to(&target);
        for _ in 0..40 {
            current = advance(&current, &target, 0.005, 20.0);
            let d = current.distance_to(&target);
            assert!(d < last, "distance did not shrink: {d} >= {last}");
            last = d;
        }
    }

    #[test]
    fn zero_delta_still_steps() {
        let target = framing(90.0);
        let mut current = framing(0.0);
        for _ in 0..5 {
            let next = advance(&current, &target, 0.0, DEFAULT_SMOOTHING_RATE);
            assert!(next.pitch > current.pitch);
            current = next;
        }
        assert!((blend_factor(0.0, 20.0) - 0.02).abs() < 1e-6);
    }

    #[test]
    fn blend_factor_is_clamped() {
        assert_eq!(blend_factor(10.0, 20.0), 1.0);
        assert_eq!(blend_factor(0.01, -5.0), 0.0);
        assert!((blend_factor(f32::NAN, 20.0) - 0.02).abs() < 1e-6);
        assert!((blend_factor(-1.0, 20.0) - 0.02).abs() < 1e-6);
        assert_eq!(blend_factor(0.01, f32::NAN), 0.0);
    }

    #[test]
    fn interpolator_starts_at_copy_of_start() {
        let start = FrameParameters {
            pitch: 12.0,
            roll: 34.0,
            ..FrameParameters::default()
        };
        let interp = FrameInterpolator::new(start);
        assert_eq!(*interp.current(), start);
        assert_eq!(interp.current().pitch, 12.0);
        assert_eq!(interp.current().roll, 34.0);
        assert_eq!(interp.rate(), DEFAULT_SMOOTHING_RATE);
    }

    #[test]
    fn interpolator_stores_each_step() {
        let mut interp = FrameInterpolator::with_rate(framing(0.0), 10.0);
        let target = framing(100.0);
        let first = interp.advance(&target, 0.05);
        assert!((first.pitch - 50.0).abs() < 1e-4);
        assert_eq!(*interp.current(), first);
        let second = interp.advance(&target, 0.05);
        assert!((second.pitch - 75.0).abs() < 1e-4);

        interp.snap_to(&target);
        assert_eq!(*interp.current(), target);
        let pose = interp.pose(&RigOrigin::default());
        assert_eq!(pose.fov, target.fov);
    }
}
