//! Scroll-driven motion helpers: parallax drift and pinning.

use crate::reveal::trigger::ScrollRange;

/// Direction a parallax layer travels as the page scrolls down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Negative y.
    Up,
    /// Positive y.
    #[default]
    Down,
}

/// Scroll-scrubbed vertical drift.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parallax {
    /// Total travel in pixels over the trigger range.
    pub distance: f64,
    /// Travel direction.
    #[serde(default)]
    pub direction: Direction,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            distance: 100.0,
            direction: Direction::Down,
        }
    }
}

impl Parallax {
    /// Vertical offset at scrub `progress` in `[0, 1]`.
    pub fn offset_y(&self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self.direction {
            Direction::Up => -self.distance * p,
            Direction::Down => self.distance * p,
        }
    }
}

/// Placement of a pinned element for a given scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinState {
    /// Scroll is before the range; the element scrolls normally.
    Before,
    /// Inside the range; the element is held and shifted down by `offset`.
    Pinned {
        /// Distance scrolled since the range start.
        offset: f64,
    },
    /// After the range; the element scrolls again, displaced by the full range length.
    After {
        /// Spacer height left behind.
        spacer: f64,
    },
}

/// Pin state for `scroll` within `range`.
pub fn pin_state(range: &ScrollRange, scroll: f64) -> PinState {
    if scroll < range.start {
        PinState::Before
    } else if range.contains(scroll) {
        PinState::Pinned {
            offset: scroll - range.start,
        }
    } else {
        PinState::After {
            spacer: range.len(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/motion.rs"]
mod tests;
