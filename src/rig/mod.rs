//! Host-facing camera rig driver.
//!
//! [`CameraRig`] is the per-tick entry point: the host calls
//! [`CameraRig::tick`] from its update loop, the rig eases its framing toward
//! the target and places the bound camera. There is no scheduler; when the
//! rig is disabled the host simply stops ticking it.

mod clock;
mod guide;

pub use clock::TickClock;
pub use guide::OrbitGuide;

use crate::camera::Camera;
use crate::frame::{FrameInterpolator, FrameParameters, Pose, RigOrigin};
use crate::options::RigOptions;
use crate::scene::{RenderContext, SceneSettings};

/// A host camera that a rig can place.
pub trait RigCamera {
    /// Move the camera to `pose` (position, view direction, roll, FOV).
    fn apply_pose(&mut self, pose: &Pose);
}

impl RigCamera for Camera {
    fn apply_pose(&mut self, pose: &Pose) {
        self.set_pose(pose);
    }
}

/// Smoothed camera rig around a fixed origin.
#[derive(Debug, Clone)]
pub struct CameraRig {
    target: FrameParameters,
    interpolator: FrameInterpolator,
    origin: RigOrigin,
    scene: SceneSettings,
    clock: TickClock,
}

impl CameraRig {
    /// Activate a rig at `origin`, starting exactly at the preset framing.
    #[must_use]
    pub fn new(options: &RigOptions, origin: RigOrigin) -> Self {
        Self {
            target: options.frame,
            interpolator: FrameInterpolator::with_rate(
                options.frame,
                options.smoothing.rate,
            ),
            origin,
            scene: options.scene.clone(),
            clock: TickClock::new(),
        }
    }

    /// Framing the rig is easing toward.
    #[must_use]
    pub fn target(&self) -> &FrameParameters {
        &self.target
    }

    /// Change the framing to ease toward.
    pub fn set_target(&mut self, target: FrameParameters) {
        self.target = target;
    }

    /// Framing as of the last tick.
    #[must_use]
    pub fn current(&self) -> &FrameParameters {
        self.interpolator.current()
    }

    /// Rig origin.
    #[must_use]
    pub fn origin(&self) -> &RigOrigin {
        &self.origin
    }

    /// Move the rig origin. Takes effect on the next tick.
    pub fn set_origin(&mut self, origin: RigOrigin) {
        self.origin = origin;
    }

    /// Change the smoothing rate (1/seconds).
    pub fn set_rate(&mut self, rate: f32) {
        self.interpolator.set_rate(rate);
    }

    /// Scene settings owned by the rig.
    #[must_use]
    pub fn scene(&self) -> &SceneSettings {
        &self.scene
    }

    /// Mutable scene settings. Call [`CameraRig::apply_scene`] afterwards.
    pub fn scene_mut(&mut self) -> &mut SceneSettings {
        &mut self.scene
    }

    /// Pose of the current framing.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.interpolator.pose(&self.origin)
    }

    /// Orbit guide for the current pose.
    #[must_use]
    pub fn orbit_guide(&self) -> OrbitGuide {
        OrbitGuide::from_pose(&self.origin, &self.pose())
    }

    /// Advance by the wall-clock time since the last tick and place
    /// `camera`.
    ///
    /// With no camera bound nothing moves and `None` is returned.
    pub fn tick<C: RigCamera + ?Sized>(
        &mut self,
        camera: Option<&mut C>,
    ) -> Option<Pose> {
        let dt = self.clock.tick();
        self.tick_with_delta(dt, camera)
    }

    /// Like [`CameraRig::tick`] with an explicit elapsed time in seconds.
    pub fn tick_with_delta<C: RigCamera + ?Sized>(
        &mut self,
        delta_seconds: f32,
        camera: Option<&mut C>,
    ) -> Option<Pose> {
        let Some(camera) = camera else {
            log::debug!("no camera bound, skipping rig tick");
            return None;
        };
        let _ = self.interpolator.advance(&self.target, delta_seconds);
        let pose = self.pose();
        camera.apply_pose(&pose);
        Some(pose)
    }

    /// Jump straight to the target framing and place `camera`.
    pub fn snap<C: RigCamera + ?Sized>(&mut self, camera: &mut C) -> Pose {
        self.interpolator.snap_to(&self.target);
        let pose = self.pose();
        camera.apply_pose(&pose);
        pose
    }

    /// Re-activate the rig: restart at the target framing and reset the
    /// tick clock so the first delta is not the whole disabled period.
    pub fn restart(&mut self) {
        self.interpolator.snap_to(&self.target);
        self.clock.reset();
    }

    /// Apply the scene settings to the capture context.
    ///
    /// Returns `false` (and warns) when no context is bound.
    pub fn apply_scene<R: RenderContext + ?Sized>(
        &self,
        ctx: Option<&mut R>,
    ) -> bool {
        let Some(ctx) = ctx else {
            log::warn!("no camera assigned, scene settings not applied");
            return false;
        };
        self.scene.apply(ctx);
        true
    }

    /// Reset the scene settings to the capture defaults and apply them.
    pub fn reset_scene<R: RenderContext + ?Sized>(&mut self, ctx: &mut R) {
        self.scene.reset_to_default(ctx);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::options::CameraOptions;
    use crate::scene::tests::RecordingContext;

    #[derive(Default)]
    struct CountingCamera {
        last: Option<Pose>,
        applied: usize,
    }

    impl RigCamera for CountingCamera {
        fn apply_pose(&mut self, pose: &Pose) {
            self.last = Some(*pose);
            self.applied += 1;
        }
    }

    fn rig() -> CameraRig {
        CameraRig::new(&RigOptions::default(), RigOrigin::default())
    }

    #[test]
    fn starts_at_preset_framing() {
        let mut options = RigOptions::default();
        options.frame.roll = 25.0;
        options.frame.pitch = -5.0;
        let rig = CameraRig::new(&options, RigOrigin::default());
        assert_eq!(*rig.current(), options.frame);
        assert_eq!(*rig.target(), options.frame);
    }

    #[test]
    fn tick_without_camera_does_nothing() {
        let mut rig = rig();
        let before = *rig.current();
        rig.set_target(FrameParameters {
            pitch: 90.0,
            ..before
        });
        assert!(rig
            .tick_with_delta(0.5, None::<&mut CountingCamera>)
            .is_none());
        assert!(rig.tick(None::<&mut Camera>).is_none());
        assert_eq!(*rig.current(), before);
    }

    #[test]
    fn ticks_ease_camera_toward_target() {
        let mut rig = rig();
        let target = FrameParameters {
            pitch: 60.0,
            fov: 30.0,
            ..FrameParameters::default()
        };
        rig.set_target(target);

        let mut camera = CountingCamera::default();
        let first = rig.tick_with_delta(0.01, Some(&mut camera)).unwrap();
        assert!(rig.current().pitch > 0.0 && rig.current().pitch < 60.0);
        assert_eq!(camera.last, Some(first));

        for _ in 0..200 {
            let _ = rig.tick_with_delta(0.01, Some(&mut camera));
        }
        assert!((rig.current().pitch - 60.0).abs() < 1e-3);
        assert_eq!(camera.applied, 201);

        let _ = rig.tick_with_delta(1.0, Some(&mut camera));
        assert_eq!(*rig.current(), target);
    }

    #[test]
    fn drives_a_projection_camera() {
        let mut rig = rig();
        let pose = rig.pose();
        let mut camera =
            Camera::from_pose(&pose, 16.0 / 9.0, &CameraOptions::default());
        rig.set_target(FrameParameters {
            distance: 5.0,
            ..FrameParameters::default()
        });
        let placed = rig.snap(&mut camera);
        assert_eq!(camera.eye, placed.position);
        assert!((camera.eye - Vec3::new(-5.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn restart_jumps_to_target() {
        let mut rig = rig();
        let target = FrameParameters {
            yaw: 40.0,
            ..FrameParameters::default()
        };
        rig.set_target(target);
        rig.restart();
        assert_eq!(*rig.current(), target);
    }

    #[test]
    fn scene_requires_bound_context() {
        let mut rig = rig();
        rig.scene_mut().fog_enabled = true;
        assert!(!rig.apply_scene(None::<&mut RecordingContext>));

        let mut ctx = RecordingContext::default();
        assert!(rig.apply_scene(Some(&mut ctx)));
        assert!(ctx.fog);

        rig.reset_scene(&mut ctx);
        assert!(!ctx.fog);
        assert_eq!(*rig.scene(), SceneSettings::default());
    }

    #[test]
    fn orbit_guide_follows_current_pose() {
        let rig = rig();
        let guide = rig.orbit_guide();
        assert!((guide.radius - 20.0).abs() < 1e-4);
    }
}
