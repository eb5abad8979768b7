use glam::Vec3;

use crate::frame::{Pose, RigOrigin};

/// Horizontal circle around the rig origin passing through the camera.
///
/// Editors draw it as a wire disc so the orbit of the camera is visible in
/// the scene view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGuide {
    /// Disc center: the origin lifted to the camera's height.
    pub center: Vec3,
    /// Disc normal (world up).
    pub normal: Vec3,
    /// Horizontal distance from the center to the camera.
    pub radius: f32,
}

impl OrbitGuide {
    /// Guide for a camera at `pose` around `origin`.
    #[must_use]
    pub fn from_pose(origin: &RigOrigin, pose: &Pose) -> Self {
        let center =
            Vec3::new(origin.position.x, pose.position.y, origin.position.z);
        Self {
            center,
            normal: Vec3::Y,
            radius: pose.position.distance(center),
        }
    }
}
