//! Perspective camera driven by rig poses.
//!
//! Hosts that render with their own pipeline can turn a [`crate::frame::Pose`]
//! into view/projection matrices and a GPU uniform here.

/// Core camera struct and GPU uniform types.
pub mod core;

pub use self::core::{Camera, CameraUniform};
