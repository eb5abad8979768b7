// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera framing rig for capturing in-editor screenshots.
//!
//! A rig frames a camera around an origin with pitch/yaw/roll, a distance,
//! fine offsets and a field of view, eases that framing toward a target
//! every host tick, and carries the scene render settings applied before a
//! capture.
//!
//! # Key entry points
//!
//! - [`frame::FrameParameters`] - framing value type and pose math
//! - [`frame::advance`] - frame-rate independent smoothing step
//! - [`rig::CameraRig`] - per-tick driver that places a host camera
//! - [`scene::SceneSettings`] - skybox, fog, ambient and background
//! - [`options::RigOptions`] - TOML presets for all of the above
//!
//! The host owns the render loop, the camera object and image capture; this
//! crate only computes where the camera goes and what the scene looks like.

pub mod camera;
pub mod error;
pub mod frame;
pub mod options;
pub mod rig;
pub mod scene;
