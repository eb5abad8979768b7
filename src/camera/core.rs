use glam::{Mat4, Vec3};

use crate::frame::Pose;
use crate::options::CameraOptions;

/// Perspective camera placed by a rig [`Pose`].
///
/// Uses the host's left-handed convention: +Z looks into the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
    /// Up direction vector, roll included.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Camera at `pose` with the given viewport aspect and clip planes.
    #[must_use]
    pub fn from_pose(pose: &Pose, aspect: f32, options: &CameraOptions) -> Self {
        Self {
            eye: pose.position,
            forward: pose.forward,
            up: pose.up(),
            aspect,
            fovy: pose.fov,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Move the camera to `pose`, keeping aspect and clip planes.
    pub fn set_pose(&mut self, pose: &Pose) {
        self.eye = pose.position;
        self.forward = pose.forward;
        self.up = pose.up();
        self.fovy = pose.fov;
    }

    /// View matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_to_lh(self.eye, self.forward, self.up)
    }

    /// Projection matrix. Depth range is [0, 1].
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_lh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, 1.0],
            fovy: 45.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.forward.to_array();
        self.fovy = camera.fovy;
    }
}
