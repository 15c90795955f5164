pub mod driver;
pub mod motion;
pub mod trigger;

use crate::animation::ease::Ease;
use crate::foundation::error::{ShowreelError, ShowreelResult};
use crate::reveal::driver::{RevealDriver, RevealMode, RevealTiming, ToggleActions, stagger};
use crate::reveal::motion::Parallax;
use crate::reveal::trigger::{Layout, ScrollTrigger};

/// Declarative reveal configuration, as written in JSON.
///
/// Defaults describe the stock headline reveal: play once when the element's top reaches 80%
/// of the viewport, letters staggered by 60 ms.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Start position, e.g. `"top 80%"`.
    pub start: String,
    /// End position, e.g. `"top 30%"` or `"+=600"`.
    pub end: String,
    /// `"once"`, `"toggle"`, `"scrub"` or `"manual"`.
    pub mode: String,
    /// Four toggle actions, used in `toggle` mode.
    pub toggle_actions: String,
    /// Scrub catch-up lag in seconds, used in `scrub` mode.
    pub scrub_secs: f64,
    /// Per-item animation duration in seconds.
    pub duration_secs: f64,
    /// Ease name (`"power4.out"`, `"InOutCubic"`, ...).
    pub ease: String,
    /// Delay between consecutive items in seconds.
    pub stagger_secs: f64,
    /// Optional scroll-scrubbed drift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallax: Option<Parallax>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            start: "top 80%".to_owned(),
            end: "top 30%".to_owned(),
            mode: "once".to_owned(),
            toggle_actions: "play none none none".to_owned(),
            scrub_secs: 0.5,
            duration_secs: 0.7,
            ease: "power4.out".to_owned(),
            stagger_secs: 0.06,
            parallax: None,
        }
    }
}

impl RevealConfig {
    /// Parsed trigger positions.
    pub fn trigger(&self) -> ShowreelResult<ScrollTrigger> {
        ScrollTrigger::parse(&self.start, &self.end)
    }

    /// Parsed mode.
    pub fn mode(&self) -> ShowreelResult<RevealMode> {
        match self.mode.trim().to_ascii_lowercase().as_str() {
            "once" => Ok(RevealMode::Once),
            "toggle" => Ok(RevealMode::Toggle(ToggleActions::parse(
                &self.toggle_actions,
            )?)),
            "scrub" => {
                if !self.scrub_secs.is_finite() || self.scrub_secs < 0.0 {
                    return Err(ShowreelError::config("scrub_secs must be finite and >= 0"));
                }
                Ok(RevealMode::Scrub {
                    lag_secs: self.scrub_secs,
                })
            }
            "manual" => Ok(RevealMode::Manual),
            other => Err(ShowreelError::config(format!("unknown reveal mode '{other}'"))),
        }
    }

    /// Parsed ease.
    pub fn ease(&self) -> ShowreelResult<Ease> {
        Ease::parse(&self.ease)
    }

    /// Start delays for `count` items.
    pub fn delays(&self, count: usize) -> Vec<f64> {
        stagger(count, self.stagger_secs)
    }

    /// Parsed duration and ease.
    pub fn timing(&self) -> ShowreelResult<RevealTiming> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(ShowreelError::config(
                "duration_secs must be finite and >= 0",
            ));
        }
        Ok(RevealTiming {
            duration_secs: self.duration_secs,
            ease: self.ease()?,
        })
    }

    /// Validate every field and build a driver for `layout`.
    pub fn build(&self, layout: &Layout) -> ShowreelResult<RevealDriver> {
        let timing = self.timing()?;
        let range = self.trigger()?.range(layout)?;
        Ok(RevealDriver::new(range, self.mode()?).with_timing(timing))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/config.rs"]
mod tests;
