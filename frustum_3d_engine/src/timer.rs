/// Frame timing - per-frame elapsed time and frames per second.
///
/// Both types take an explicit `Instant` in their `*_at` methods so the
/// frame loop (and tests) can drive them from a single clock reading.

use std::time::{Duration, Instant};

/// Measures the time between consecutive frames.
#[derive(Debug, Clone)]
pub struct Timer {
    last: Instant,
    frame_time: f32,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Start timing now.
    pub fn new() -> Self {
        Self::new_at(Instant::now())
    }

    pub fn new_at(start: Instant) -> Self {
        Self {
            last: start,
            frame_time: 0.0,
        }
    }

    /// Mark the end of a frame.
    pub fn frame(&mut self) {
        self.frame_at(Instant::now());
    }

    pub fn frame_at(&mut self, now: Instant) {
        self.frame_time = now.saturating_duration_since(self.last).as_secs_f32() * 1000.0;
        self.last = now;
    }

    /// Milliseconds between the last two frames (0 before the first).
    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }
}

const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Counts frames over one-second windows.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    fps: u32,
    count: u32,
    window_start: Instant,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::new_at(Instant::now())
    }

    pub fn new_at(start: Instant) -> Self {
        Self {
            fps: 0,
            count: 0,
            window_start: start,
        }
    }

    /// Count one frame.
    pub fn frame(&mut self) {
        self.frame_at(Instant::now());
    }

    /// Count one frame; publish and restart once a full second has passed.
    pub fn frame_at(&mut self, now: Instant) {
        self.count += 1;

        if now.saturating_duration_since(self.window_start) >= FPS_WINDOW {
            self.fps = self.count;
            self.count = 0;
            self.window_start = now;
        }
    }

    /// Frames counted in the last completed window.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
