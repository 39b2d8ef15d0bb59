use std::time::{Duration, Instant};

use crate::{foundation::core::Millis, render::surface::Surface, timeline::run::Host};

/// Deterministic host: the clock starts at `start` and advances by `interval_ms`
/// after every presented frame.
///
/// `now()` is also called once before the first frame to capture the run's
/// start time; that reading does not advance the clock.
#[derive(Clone, Debug)]
pub struct SimulatedHost {
    now: Millis,
    interval_ms: u64,
    frames: u64,
    max_frames: Option<u64>,
    cancel_at_frame: Option<u64>,
}

impl SimulatedHost {
    pub fn new(start: Millis, interval_ms: u64) -> Self {
        Self {
            now: start,
            interval_ms,
            frames: 0,
            max_frames: None,
            cancel_at_frame: None,
        }
    }

    /// Cancel once `max` frames have been presented.
    pub fn with_max_frames(mut self, max: u64) -> Self {
        self.max_frames = Some(max);
        self
    }

    /// Cancel at the start of frame `frame` (0-based).
    pub fn cancel_at(mut self, frame: u64) -> Self {
        self.cancel_at_frame = Some(frame);
        self
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    pub fn clock(&self) -> Millis {
        self.now
    }
}

impl Host for SimulatedHost {
    fn now(&mut self) -> Millis {
        self.now
    }

    fn keep_running(&mut self) -> bool {
        if self.cancel_at_frame.is_some_and(|f| self.frames >= f) {
            return false;
        }
        !self.max_frames.is_some_and(|max| self.frames >= max)
    }

    fn present(&mut self, _surface: &dyn Surface) {
        self.frames += 1;
        self.now = self.now.add_ms(self.interval_ms);
    }
}

/// Real-time host backed by [`Instant`], optionally sleeping to hold a frame
/// cadence.
#[derive(Debug)]
pub struct WallClockHost {
    origin: Instant,
    frame_interval: Option<Duration>,
    last_present: Option<Instant>,
}

impl WallClockHost {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            frame_interval: None,
            last_present: None,
        }
    }

    /// Sleep in `present` so frames are at least `interval_ms` apart.
    pub fn paced(mut self, interval_ms: u64) -> Self {
        self.frame_interval = Some(Duration::from_millis(interval_ms));
        self
    }
}

impl Default for WallClockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for WallClockHost {
    fn now(&mut self) -> Millis {
        Millis(u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX))
    }

    fn present(&mut self, _surface: &dyn Surface) {
        if let (Some(interval), Some(last)) = (self.frame_interval, self.last_present) {
            let elapsed = last.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            }
        }
        self.last_present = Some(Instant::now());
    }
}

#[cfg(test)]
#[path = "../tests/unit/host.rs"]
mod tests;
