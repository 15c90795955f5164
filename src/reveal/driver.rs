//! Crossing detection and scrub smoothing for a single scroll-linked element.

use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::foundation::error::{ShowreelError, ShowreelResult};
use crate::reveal::trigger::ScrollRange;

/// Boundary crossings reported by a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealEvent {
    /// Scrolling forward past the start.
    Enter,
    /// Scrolling forward past the end.
    Leave,
    /// Scrolling backward past the end.
    EnterBack,
    /// Scrolling backward past the start.
    LeaveBack,
}

/// What the attached animation should do on a crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    /// Play forward from the current position.
    Play,
    /// Pause in place.
    Pause,
    /// Resume in the current direction.
    Resume,
    /// Play backward from the current position.
    Reverse,
    /// Jump to the start and play forward.
    Restart,
    /// Jump to the start and stop.
    Reset,
    /// Jump to the end.
    Complete,
    /// Do nothing.
    None,
}

impl ToggleAction {
    fn parse(token: &str) -> ShowreelResult<Self> {
        Ok(match token {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "reverse" => Self::Reverse,
            "restart" => Self::Restart,
            "reset" => Self::Reset,
            "complete" => Self::Complete,
            "none" => Self::None,
            other => {
                return Err(ShowreelError::validation(format!(
                    "unknown toggle action '{other}'"
                )));
            }
        })
    }
}

/// Actions for the four crossings, in `enter leave enter_back leave_back` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    /// On [`RevealEvent::Enter`].
    pub on_enter: ToggleAction,
    /// On [`RevealEvent::Leave`].
    pub on_leave: ToggleAction,
    /// On [`RevealEvent::EnterBack`].
    pub on_enter_back: ToggleAction,
    /// On [`RevealEvent::LeaveBack`].
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl ToggleActions {
    /// Parse four space-separated actions, e.g. `"play none none reverse"`.
    pub fn parse(s: &str) -> ShowreelResult<Self> {
        let tokens: Vec<String> = s
            .split_whitespace()
            .map(|t| t.to_ascii_lowercase())
            .collect();
        let [a, b, c, d] = tokens.as_slice() else {
            return Err(ShowreelError::validation(format!(
                "toggle actions need four entries, got '{s}'"
            )));
        };
        Ok(Self {
            on_enter: ToggleAction::parse(a)?,
            on_leave: ToggleAction::parse(b)?,
            on_enter_back: ToggleAction::parse(c)?,
            on_leave_back: ToggleAction::parse(d)?,
        })
    }

    /// Action bound to `event`.
    pub fn action_for(&self, event: RevealEvent) -> ToggleAction {
        match event {
            RevealEvent::Enter => self.on_enter,
            RevealEvent::Leave => self.on_leave,
            RevealEvent::EnterBack => self.on_enter_back,
            RevealEvent::LeaveBack => self.on_leave_back,
        }
    }
}

/// How a trigger drives its animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealMode {
    /// Play once on the first enter; never react again.
    Once,
    /// Map crossings to actions.
    Toggle(ToggleActions),
    /// Tie animation progress to scroll progress, catching up over `lag_secs`.
    Scrub {
        /// Seconds to catch up with the scroll position; `0` follows it exactly.
        lag_secs: f64,
    },
    /// Ignore scroll; play once when an owner calls [`RevealDriver::fire`].
    Manual,
}

/// A crossing and the action it maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RevealSignal {
    /// Which boundary was crossed.
    pub event: RevealEvent,
    /// What the animation should do.
    pub action: ToggleAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    Before,
    Active,
    After,
}

/// Duration and ease of the animation a driver plays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
    /// Seconds from hidden to revealed.
    pub duration_secs: f64,
    /// Ease over that duration.
    pub ease: Ease,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            duration_secs: 0.7,
            ease: Ease::OutQuint,
        }
    }
}

impl RevealTiming {
    /// Eased reveal amount in `[0, 1]`, `elapsed` seconds after a play signal.
    pub fn sample(&self, elapsed: f64) -> f64 {
        Tween {
            from: 0.0,
            to: 1.0,
            duration_secs: self.duration_secs,
            ease: self.ease,
        }
        .sample(elapsed.max(0.0))
    }
}

/// Scroll-linked driver for one element.
///
/// Feed every observed scroll offset to [`RevealDriver::on_scroll`]; in scrub mode also call
/// [`RevealDriver::tick`] once per frame.
#[derive(Clone, Debug)]
pub struct RevealDriver {
    range: ScrollRange,
    mode: RevealMode,
    timing: RevealTiming,
    zone: Zone,
    spent: bool,
    target: f64,
    progress: f64,
}

impl RevealDriver {
    /// Create a driver with nothing observed yet.
    pub fn new(range: ScrollRange, mode: RevealMode) -> Self {
        Self {
            range,
            mode,
            timing: RevealTiming::default(),
            zone: Zone::Before,
            spent: false,
            target: 0.0,
            progress: 0.0,
        }
    }

    /// Replace the animation timing.
    pub fn with_timing(mut self, timing: RevealTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Animation timing played on [`ToggleAction::Play`].
    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    /// Resolved scroll range.
    pub fn range(&self) -> ScrollRange {
        self.range
    }

    /// Replace the range after a layout change, keeping crossing state.
    pub fn set_range(&mut self, range: ScrollRange) {
        self.range = range;
    }

    /// Animation progress in `[0, 1]` (scrub mode), smoothed by [`RevealDriver::tick`].
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Return `true` once a [`RevealMode::Once`] driver has fired.
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// Observe a scroll offset and report the crossings it caused.
    ///
    /// Jumping over the whole range reports both crossings in order.
    pub fn on_scroll(&mut self, scroll: f64) -> Vec<RevealSignal> {
        let zone = if scroll < self.range.start {
            Zone::Before
        } else if scroll > self.range.end.max(self.range.start) {
            Zone::After
        } else {
            Zone::Active
        };

        let events: &[RevealEvent] = match (self.zone, zone) {
            (Zone::Before, Zone::Active) => &[RevealEvent::Enter],
            (Zone::Before, Zone::After) => &[RevealEvent::Enter, RevealEvent::Leave],
            (Zone::Active, Zone::After) => &[RevealEvent::Leave],
            (Zone::After, Zone::Active) => &[RevealEvent::EnterBack],
            (Zone::After, Zone::Before) => &[RevealEvent::EnterBack, RevealEvent::LeaveBack],
            (Zone::Active, Zone::Before) => &[RevealEvent::LeaveBack],
            _ => &[],
        };
        self.zone = zone;

        if let RevealMode::Scrub { lag_secs } = self.mode {
            self.target = self.range.progress(scroll);
            if lag_secs <= 0.0 {
                self.progress = self.target;
            }
        }

        let mut out = Vec::with_capacity(events.len());
        for &event in events {
            let action = match self.mode {
                RevealMode::Once => {
                    if self.spent || event != RevealEvent::Enter {
                        continue;
                    }
                    self.spent = true;
                    ToggleAction::Play
                }
                RevealMode::Toggle(actions) => actions.action_for(event),
                RevealMode::Scrub { .. } => ToggleAction::None,
                RevealMode::Manual => continue,
            };
            out.push(RevealSignal { event, action });
        }
        out
    }

    /// Readiness message from the owner of a [`RevealMode::Manual`] driver.
    ///
    /// Returns the play signal the first time; `None` afterwards or in other modes.
    pub fn fire(&mut self) -> Option<RevealSignal> {
        if self.mode != RevealMode::Manual || self.spent {
            return None;
        }
        self.spent = true;
        Some(RevealSignal {
            event: RevealEvent::Enter,
            action: ToggleAction::Play,
        })
    }

    /// Advance scrub smoothing by `dt` seconds and return the current progress.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if let RevealMode::Scrub { lag_secs } = self.mode {
            if lag_secs <= 0.0 || !dt.is_finite() {
                self.progress = self.target;
            } else if dt > 0.0 {
                let k = (dt / lag_secs).min(1.0);
                self.progress += (self.target - self.progress) * k;
                if (self.target - self.progress).abs() < 1e-6 {
                    self.progress = self.target;
                }
            }
        }
        self.progress
    }
}

/// Start delays for `count` staggered items, `each` seconds apart.
pub fn stagger(count: usize, each: f64) -> Vec<f64> {
    let each = if each.is_finite() { each.max(0.0) } else { 0.0 };
    (0..count).map(|i| i as f64 * each).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/driver.rs"]
mod tests;
