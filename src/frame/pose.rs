use glam::{Mat3, Quat, Vec3};

use super::FrameParameters;

/// Reference transform a camera is framed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigOrigin {
    /// World-space position of the rig.
    pub position: Vec3,
    /// Optional orthonormal basis of the rig. `None` uses the world axes.
    pub basis: Option<Quat>,
}

impl Default for RigOrigin {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl RigOrigin {
    /// Origin at `position` aligned with the world axes.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            basis: None,
        }
    }

    /// Origin at `position` with the given basis rotation.
    #[must_use]
    pub fn with_basis(position: Vec3, basis: Quat) -> Self {
        Self {
            position,
            basis: Some(basis),
        }
    }

    fn rotation(&self) -> Quat {
        self.basis.map_or(Quat::IDENTITY, Quat::normalize)
    }

    /// Forward axis of the origin (+Z in its basis).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// Up axis of the origin (+Y in its basis).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }
}

/// Concrete camera placement derived from a [`FrameParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Full camera rotation, roll included. `orientation * Z == forward`.
    pub orientation: Quat,
}

impl Pose {
    /// Camera right axis after roll.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Camera up axis after roll.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }
}

/// Rotation whose +Z axis is `forward` and whose +Y leans toward `up`.
///
/// Right is `up × forward`. When `forward` is parallel to `up` an arbitrary
/// perpendicular right axis is used.
pub(crate) fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let right = up
        .cross(forward)
        .try_normalize()
        .unwrap_or_else(|| forward.any_orthonormal_vector());
    let true_up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, true_up, forward)).normalize()
}

/// Unit vector along `v`, or `None` when `v` is zero or not finite.
///
/// Components are divided by the largest magnitude first so huge finite
/// inputs do not overflow the length.
fn normalize_direction(v: Vec3) -> Option<Vec3> {
    if !v.is_finite() {
        return None;
    }
    let scale = v.abs().max_element();
    if scale == 0.0 {
        return None;
    }
    (v / scale).try_normalize()
}

/// Build the pose for `frame` around `origin`.
///
/// The view axis is `normalize(cos(pitch), yaw, sin(pitch))` with angles in
/// radians and yaw taken as a raw linear component, expressed in the
/// origin's basis. If that vector is zero or not finite the origin forward
/// axis is used. Roll then spins the camera about its own view axis, and
/// the camera backs off by `distance` before the fine offsets are added
/// along the rolled right axis and the origin's up axis.
pub(crate) fn compute(frame: &FrameParameters, origin: &RigOrigin) -> Pose {
    let rotation = origin.rotation();
    let pitch = frame.pitch.to_radians();
    let local = Vec3::new(pitch.cos(), frame.yaw.to_radians(), pitch.sin());

    let forward = if let Some(dir) = normalize_direction(local) {
        rotation * dir
    } else {
        log::debug!(
            "degenerate view axis for pitch={} yaw={}, using origin forward",
            frame.pitch,
            frame.yaw
        );
        origin.forward()
    };

    let up_axis = origin.up();
    let orientation = look_rotation(forward, up_axis)
        * Quat::from_rotation_z(frame.roll.to_radians());
    let right = orientation * Vec3::X;

    let offset = (right * frame.lateral_offset
        + up_axis * frame.vertical_offset)
        * frame.distance;
    let position = origin.position - forward * frame.distance + offset;

    Pose {
        position,
        forward,
        fov: frame.fov,
        orientation,
    }
}
