//! Frame pacing
//!
//! Sleeps away whatever is left of the frame budget. A frame that runs over
//! budget is simply late; nothing is skipped or caught up.

use std::thread;
use std::time::{Duration, Instant};

pub struct FramePacer {
    budget: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        FramePacer {
            budget,
            frame_start: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Marks the start of a frame's work
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time left in the budget after `elapsed`, if any
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget
            .checked_sub(elapsed)
            .filter(|rest| !rest.is_zero())
    }

    /// Blocks until the budget of the current frame is used up
    pub fn wait(&self) {
        if let Some(rest) = self.remaining(self.frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
