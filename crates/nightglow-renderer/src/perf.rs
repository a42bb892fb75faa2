//! Frame timing: per-frame delta for camera movement and a rolling FPS
//! average for the overlay.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Longest delta handed to movement code, so a stall (window drag, breakpoint)
/// does not teleport the camera.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

const SAMPLE_WINDOW: usize = 120;

pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_WINDOW),
            last_frame: start,
        }
    }

    /// Record the start of a new frame and return its delta in seconds.
    pub fn begin_frame(&mut self) -> f32 {
        self.tick(Instant::now()).as_secs_f32()
    }

    /// Record a frame starting at `now`. Returns the clamped delta.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > SAMPLE_WINDOW {
            self.frame_times.pop_front();
        }
        dt.min(MAX_FRAME_DELTA)
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.total_secs() / self.frame_times.len() as f64 * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(Duration::as_secs_f64).sum()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
