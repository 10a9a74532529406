//! Trial Timing
//!
//! Wall-clock timing for a single trial via `std::time::Instant`. Sorting
//! trials run for microseconds to seconds, so monotonic wall-clock
//! resolution is ample.

use std::time::{Duration, Instant};

/// Timer bracketing one sorter invocation.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed duration.
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_measures_elapsed_time() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();

        // At least 10ms, under 100ms accounting for scheduling.
        assert!(elapsed >= Duration::from_millis(5));
        assert!(elapsed < Duration::from_millis(100));
    }
}
