use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::carousel::position::PositionProfile;
use crate::foundation::core::{DEFAULT_BREAKPOINT, ViewportClass};
use crate::foundation::error::{ShowreelError, ShowreelResult};

/// Tunables for a carousel.
///
/// `Default` reproduces the stock portfolio carousel: 0.8 s quartic in/out moves, a 768 px
/// breakpoint and the built-in mobile/desktop magnitudes. Every field may be omitted in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Duration of every slide move, in seconds.
    pub duration_secs: f64,
    /// Ease applied to every slide move.
    pub ease: Ease,
    /// Widths below this are mobile.
    pub breakpoint: f64,
    /// Magnitudes used on mobile viewports.
    pub mobile: PositionProfile,
    /// Magnitudes used on desktop viewports.
    pub desktop: PositionProfile,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            duration_secs: 0.8,
            ease: Ease::InOutQuart,
            breakpoint: DEFAULT_BREAKPOINT,
            mobile: PositionProfile::MOBILE,
            desktop: PositionProfile::DESKTOP,
        }
    }
}

impl CarouselConfig {
    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShowreelResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ShowreelError::serde(format!("parse carousel config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> ShowreelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShowreelError::config(format!("open carousel config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check durations, breakpoint and both profiles.
    pub fn validate(&self) -> ShowreelResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(ShowreelError::config(
                "duration_secs must be finite and >= 0",
            ));
        }
        if !self.breakpoint.is_finite() || self.breakpoint <= 0.0 {
            return Err(ShowreelError::config("breakpoint must be finite and > 0"));
        }
        self.mobile
            .validate()
            .map_err(|e| ShowreelError::config(format!("mobile: {e}")))?;
        self.desktop
            .validate()
            .map_err(|e| ShowreelError::config(format!("desktop: {e}")))?;
        Ok(())
    }

    /// Profile for a viewport class.
    pub fn profile(&self, class: ViewportClass) -> PositionProfile {
        match class {
            ViewportClass::Mobile => self.mobile,
            ViewportClass::Desktop => self.desktop,
        }
    }

    /// Classify `width` against this config's breakpoint.
    pub fn classify(&self, width: f64) -> ViewportClass {
        ViewportClass::classify(width, self.breakpoint)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/config.rs"]
mod tests;
