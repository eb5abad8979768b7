//! Demo binary that drives a camera rig through a simulated run.

use std::path::Path;

use shotrig::camera::Camera;
use shotrig::frame::{FrameParameters, RigOrigin};
use shotrig::options::RigOptions;
use shotrig::rig::CameraRig;
use shotrig::scene::RenderContext;

/// Simulated ticks per second.
const TICK_RATE: f32 = 60.0;
/// Simulated run length in ticks.
const TICKS: usize = 90;

/// Render context that only reports what it was asked to do.
struct LogContext;

impl RenderContext for LogContext {
    fn set_skybox(&mut self, skybox: Option<&str>) {
        log::info!("skybox: {}", skybox.unwrap_or("none"));
    }

    fn set_ambient_intensity(&mut self, intensity: f32) {
        log::info!("ambient intensity: {intensity}");
    }

    fn set_fog_enabled(&mut self, enabled: bool) {
        log::info!("fog: {}", if enabled { "on" } else { "off" });
    }

    fn set_fog_color(&mut self, color: [f32; 3]) {
        log::info!("fog color: {color:?}");
    }

    fn set_background_color(&mut self, color: [f32; 3]) {
        log::info!("background: {color:?}");
    }
}

fn load_options(arg: Option<&str>) -> RigOptions {
    let Some(path) = arg.map(Path::new) else {
        return RigOptions::default();
    };
    if let Some(dir) = path.parent() {
        let presets = RigOptions::list_presets(dir);
        if !presets.is_empty() {
            log::info!(
                "presets in {}: {}",
                dir.display(),
                presets.join(", ")
            );
        }
    }
    match RigOptions::load(path) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = load_options(std::env::args().nth(1).as_deref());

    // Start from the neutral framing and ease into the preset.
    let mut rig = CameraRig::new(
        &RigOptions {
            frame: FrameParameters::default(),
            ..options.clone()
        },
        RigOrigin::default(),
    );
    rig.set_target(options.frame);

    let mut ctx = LogContext;
    let _ = rig.apply_scene(Some(&mut ctx));

    let mut camera =
        Camera::from_pose(&rig.pose(), 16.0 / 9.0, &options.camera);
    let dt = 1.0 / TICK_RATE;
    for tick in 0..TICKS {
        let Some(pose) = rig.tick_with_delta(dt, Some(&mut camera)) else {
            continue;
        };
        if tick % 15 == 0 || tick + 1 == TICKS {
            log::info!(
                "tick {tick:>3}: position {:.3} forward {:.3} fov {:.1}",
                pose.position,
                pose.forward,
                pose.fov
            );
        }
    }

    let guide = rig.orbit_guide();
    log::info!(
        "orbit guide: center {:.3} radius {:.3}",
        guide.center,
        guide.radius
    );
}
