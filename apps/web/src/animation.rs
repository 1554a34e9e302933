#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnimationMode {
    Running,
    Paused,
}

/// Longest step a single frame may advance the clock. Background tabs stop
/// drawing, and the ticker should resume where it left off, not jump.
const ANIMATION_MAX_FRAME_DELTA: f64 = 0.25;

/// Seconds of animation time driving the ticker scroll and word cloud reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    pub elapsed: f64,
    last_tick: Option<f64>,
}

impl AnimationClock {
    /// Advance to `now_seconds` (wall clock). The first tick only records the
    /// time; going backwards never rewinds.
    pub fn tick(&mut self, now_seconds: f64, mode: AnimationMode) {
        let delta = self
            .last_tick
            .map_or(0.0, |last| (now_seconds - last).clamp(0.0, ANIMATION_MAX_FRAME_DELTA));

        if mode == AnimationMode::Running {
            self.elapsed += delta;
        }
        self.last_tick = Some(now_seconds);
    }

    /// Restart from zero, keeping the wall clock reference.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(self.elapsed.max(0.0))
    }
}
