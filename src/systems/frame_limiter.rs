//! Frame rate cap
//!
//! Tells the event loop when the next frame is due. A frame that runs late
//! schedules the following one a full frame after it finished, so a stall
//! never causes a burst of catch-up frames.

use std::time::{Duration, Instant};

/// Fixed frame rate limiter
pub struct FrameLimiter {
    frame_duration: Duration,
    next_frame: Instant,
}

impl FrameLimiter {
    /// Limit to `fps` frames per second (at least 1), first frame due now
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    /// Limit to `fps` frames per second, first frame due at `start`
    pub fn starting_at(fps: u32, start: Instant) -> Self {
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next_frame: start,
        }
    }

    /// Time between frames
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// When the next frame should be drawn
    pub fn next_deadline(&self) -> Instant {
        self.next_frame
    }

    /// Whether a frame is due at `now`
    pub fn should_render(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Record that a frame was drawn at `now` and schedule the next one
    pub fn mark_rendered(&mut self, now: Instant) {
        self.next_frame += self.frame_duration;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_due_immediately() {
        let start = Instant::now();
        let limiter = FrameLimiter::starting_at(60, start);
        assert!(limiter.should_render(start));
    }

    #[test]
    fn test_frame_duration() {
        let limiter = FrameLimiter::new(60);
        let micros = limiter.frame_duration().as_micros();
        assert!((16_660..=16_670).contains(&micros), "got {}us", micros);

        // Zero fps is clamped to one frame per second
        assert_eq!(FrameLimiter::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_on_time_frames_keep_cadence() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::starting_at(50, start);
        let frame = limiter.frame_duration();

        limiter.mark_rendered(start + Duration::from_millis(1));
        assert_eq!(limiter.next_deadline(), start + frame);
        assert!(!limiter.should_render(start + Duration::from_millis(10)));
        assert!(limiter.should_render(start + frame));
    }

    #[test]
    fn test_late_frame_does_not_accumulate_lag() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::starting_at(50, start);
        let frame = limiter.frame_duration();

        // Frame finished half a second late
        let late = start + Duration::from_millis(500);
        limiter.mark_rendered(late);
        assert_eq!(limiter.next_deadline(), late + frame);
        assert!(!limiter.should_render(late));
    }
}
