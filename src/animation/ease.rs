use crate::foundation::error::{ShowreelError, ShowreelResult};

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out. The carousel default.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in/out.
    InOutQuint,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => ease_in(t, 2),
            Self::OutQuad => ease_out(t, 2),
            Self::InOutQuad => ease_in_out(t, 2),
            Self::InCubic => ease_in(t, 3),
            Self::OutCubic => ease_out(t, 3),
            Self::InOutCubic => ease_in_out(t, 3),
            Self::InQuart => ease_in(t, 4),
            Self::OutQuart => ease_out(t, 4),
            Self::InOutQuart => ease_in_out(t, 4),
            Self::InQuint => ease_in(t, 5),
            Self::OutQuint => ease_out(t, 5),
            Self::InOutQuint => ease_in_out(t, 5),
        }
    }

    /// Parse an ease name.
    ///
    /// Accepts the variant names (`"InOutQuart"`) as well as the `powerN.dir` names used by
    /// web animation engines, where `power1` is quadratic and `power4` quintic. `"none"` and
    /// `"linear"` map to [`Ease::Linear`]; a bare `"powerN"` means ease-out.
    pub fn parse(name: &str) -> ShowreelResult<Self> {
        let s = name.trim();
        let lower = s.to_ascii_lowercase();
        if lower == "none" || lower == "linear" || lower == "power0" {
            return Ok(Self::Linear);
        }

        if let Some(rest) = lower.strip_prefix("power") {
            let (degree, dir) = rest.split_once('.').unwrap_or((rest, "out"));
            let degree: u8 = degree
                .parse()
                .map_err(|_| ShowreelError::validation(format!("unknown ease '{s}'")))?;
            let table = match degree {
                1 => [Self::InQuad, Self::OutQuad, Self::InOutQuad],
                2 => [Self::InCubic, Self::OutCubic, Self::InOutCubic],
                3 => [Self::InQuart, Self::OutQuart, Self::InOutQuart],
                4 => [Self::InQuint, Self::OutQuint, Self::InOutQuint],
                _ => return Err(ShowreelError::validation(format!("unknown ease '{s}'"))),
            };
            return match dir {
                "in" => Ok(table[0]),
                "out" => Ok(table[1]),
                "inout" => Ok(table[2]),
                _ => Err(ShowreelError::validation(format!("unknown ease '{s}'"))),
            };
        }

        serde_json::from_value(serde_json::Value::String(s.to_owned()))
            .map_err(|_| ShowreelError::validation(format!("unknown ease '{s}'")))
    }
}

impl std::str::FromStr for Ease {
    type Err = ShowreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn ease_in(t: f64, p: i32) -> f64 {
    t.powi(p)
}

fn ease_out(t: f64, p: i32) -> f64 {
    1.0 - (1.0 - t).powi(p)
}

fn ease_in_out(t: f64, p: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(p - 1) * t.powi(p)
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(p) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
