use std::time::{Duration, Instant};

/// Frame timing: per-frame delta time, smoothed FPS, and optional
/// frame limiting.
///
/// The returned delta is the elapsed-time input every camera movement
/// is scaled by, so one `FrameTiming` drives both pacing and motion.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 =
    /// unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for
                                 * smooth display */
        }
    }

    /// Whether enough time has passed since the last frame to render
    /// another.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call once at the start of each frame. Returns the seconds
    /// elapsed since the previous frame.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let dt = elapsed.as_secs_f32();
        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_timer_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
    }

    #[test]
    fn begin_frame_returns_nonnegative_delta() {
        let mut timing = FrameTiming::new(0);
        let dt = timing.begin_frame();
        assert!(dt >= 0.0);
        assert!(timing.fps() > 0.0);
    }

    #[test]
    fn capped_timer_waits_out_the_frame_budget() {
        let mut timing = FrameTiming::new(30);
        let _ = timing.begin_frame();
        // Immediately after a frame the 33 ms budget cannot have
        // elapsed.
        assert!(!timing.should_render());
    }
}
