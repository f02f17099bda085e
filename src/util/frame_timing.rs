//! Frame clock for render drivers.
//!
//! The orbit controller has no clock of its own; damping is applied per
//! resolved frame. A driver uses [`FrameTiming`] to cap how often it
//! resolves and to show a smoothed frame rate next to the debug snapshot.

use web_time::{Duration, Instant};

use crate::camera::DebugSnapshot;
use crate::options::DebugOptions;

/// Frame pacing with a smoothed FPS estimate.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Minimum frame duration (zero = unlimited)
    min_frame_duration: Duration,
    last_frame: Instant,
    frames: u64,
    /// Exponential moving average of the instantaneous FPS
    smoothed_fps: f32,
    /// Weight of the newest sample (lower = smoother)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a clock capped at `target_fps` (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Create a clock whose first frame starts at `now`.
    #[must_use]
    pub fn starting_at(target_fps: u32, now: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            min_frame_duration,
            last_frame: now,
            frames: 0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame at `now`.
    #[must_use]
    pub fn should_render_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_frame) >= self.min_frame_duration
    }

    /// Whether enough time has passed to render another frame.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.should_render_at(Instant::now())
    }

    /// Record a finished frame at `now`.
    pub fn end_frame_at(&mut self, now: Instant) {
        let frame_time =
            now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Record a finished frame now.
    pub fn end_frame(&mut self) {
        self.end_frame_at(Instant::now());
    }

    /// Frames recorded so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Debug overlay text, or `None` when the overlay is disabled.
    #[must_use]
    pub fn overlay_text(
        &self,
        snapshot: &DebugSnapshot,
        debug: &DebugOptions,
    ) -> Option<String> {
        if !debug.show_overlay {
            return None;
        }
        if debug.show_fps {
            Some(format!("{snapshot} | {:.0} fps", self.smoothed_fps))
        } else {
            Some(snapshot.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> DebugSnapshot {
        DebugSnapshot {
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,
            radius: 5.0,
            has_orientation_signal: false,
        }
    }

    #[test]
    fn frame_cap_gates_rendering() {
        let start = Instant::now();
        let clock = FrameTiming::starting_at(60, start);
        assert!(!clock.should_render_at(start + Duration::from_millis(5)));
        assert!(clock.should_render_at(start + Duration::from_millis(20)));
    }

    #[test]
    fn unlimited_clock_always_renders() {
        let start = Instant::now();
        let clock = FrameTiming::starting_at(0, start);
        assert!(clock.should_render_at(start));
    }

    #[test]
    fn fps_moves_toward_observed_rate() {
        let start = Instant::now();
        let mut clock = FrameTiming::starting_at(0, start);
        let mut now = start;
        for _ in 0..400 {
            now += Duration::from_millis(20);
            clock.end_frame_at(now);
        }
        assert_eq!(clock.frames(), 400);
        assert!((clock.fps() - 50.0).abs() < 0.5, "fps {}", clock.fps());
    }

    #[test]
    fn overlay_respects_debug_toggles() {
        let clock = FrameTiming::starting_at(0, Instant::now());
        let off = DebugOptions::default();
        assert!(clock.overlay_text(&snapshot(), &off).is_none());

        let on = DebugOptions {
            show_overlay: true,
            show_fps: true,
        };
        let text = clock.overlay_text(&snapshot(), &on).unwrap();
        assert!(text.contains("Orientation: not detected"));
        assert!(text.ends_with("60 fps"));
    }
}
