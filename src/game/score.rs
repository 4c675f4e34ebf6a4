// Score tracker
//
// Two counters that only go up, with one cap shared by both: as soon as
// either side reaches it, nobody scores again until the round restarts.

use super::Side;

/// Highest value either counter can reach
pub const SCORE_CAP: u32 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    /// Adds a point for `side` unless the cap has been reached.
    ///
    /// Returns whether the point was counted.
    pub fn award(&mut self, side: Side) -> bool {
        if self.is_capped() {
            return false;
        }
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
        true
    }

    pub fn is_capped(&self) -> bool {
        self.left >= SCORE_CAP || self.right >= SCORE_CAP
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn reset(&mut self) {
        *self = Score::default();
    }
}
