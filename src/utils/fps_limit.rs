use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps successive frames at least `1 / max_fps` seconds apart.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        let mut result = Self {
            target_frametime: Duration::ZERO,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        };
        result.set_max_fps(max_fps);
        result
    }

    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    pub fn target_frametime(&self) -> Duration {
        self.target_frametime
    }

    /// Non-positive or non-finite values disable the limit.
    pub fn set_max_fps(&mut self, max_fps: f64) {
        self.target_frametime = if max_fps.is_finite() && max_fps > 0. {
            Duration::from_secs_f64(1. / max_fps)
        } else {
            Duration::ZERO
        };
    }

    /// Sleeps until the current frame has lasted the target frametime.
    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let after_wait = self.frame_timer.elapsed();
        let frametime = after_wait.as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
