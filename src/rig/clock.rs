use web_time::Instant;

use crate::frame::MIN_DELTA_SECONDS;

/// Wall-clock tick timer for driving a rig from a host loop.
///
/// Each [`TickClock::tick`] reports the time since the previous tick,
/// floored to [`MIN_DELTA_SECONDS`].
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    /// Timestamp of the previous tick
    last_tick: Instant,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickClock {
    /// Start timing from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous tick (or since creation), floored.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        elapsed.max(MIN_DELTA_SECONDS)
    }

    /// Restart timing from now, e.g. when the rig is re-enabled.
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}
