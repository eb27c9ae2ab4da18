//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame so the loop runs at a fixed rate.
#[derive(Debug)]
pub struct FramePacer {
    frame_duration: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(frames_per_second: u32) -> Self {
        let frame_duration = Duration::from_secs(1) / frames_per_second.max(1);
        Self {
            frame_duration,
            next_frame: Instant::now() + frame_duration,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Time left until the next frame is due.
    pub fn remaining(&self) -> Duration {
        self.next_frame.saturating_duration_since(Instant::now())
    }

    /// Block until the next frame is due.
    ///
    /// A frame that overran does not trigger a burst of catch-up frames;
    /// the schedule restarts from now.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
            self.next_frame += self.frame_duration;
        } else {
            self.next_frame = now + self.frame_duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_for_60_fps() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.frame_duration(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_zero_rate_does_not_divide_by_zero() {
        let pacer = FramePacer::new(0);
        assert_eq!(pacer.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_takes_about_one_frame() {
        let mut pacer = FramePacer::new(100);
        let start = Instant::now();
        pacer.wait();
        pacer.wait();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(15));
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_never_exceeds_frame() {
        let pacer = FramePacer::new(60);
        assert!(pacer.remaining() <= pacer.frame_duration());
    }
}
