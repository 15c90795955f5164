//! Slide position model: maps a slide's offset from the current index to its placement.

use crate::foundation::core::{
    LAYER_CENTER, LAYER_HIDDEN, LAYER_SIDE, SlideTransform, ViewportClass,
};
use crate::foundation::error::{ShowreelError, ShowreelResult};

/// Opacity of the two slides adjacent to the center.
pub const SIDE_OPACITY: f64 = 0.6;

/// The viewport-dependent magnitudes of the position policy.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PositionProfile {
    /// Scale of every non-center slide.
    pub side_scale: f64,
    /// Horizontal distance of the two neighbours.
    pub side_x: f64,
    /// Horizontal distance of hidden slides.
    pub hidden_x: f64,
}

impl PositionProfile {
    /// Built-in mobile magnitudes.
    pub const MOBILE: Self = Self {
        side_scale: 0.6,
        side_x: 200.0,
        hidden_x: 400.0,
    };

    /// Built-in desktop magnitudes.
    pub const DESKTOP: Self = Self {
        side_scale: 0.5,
        side_x: 600.0,
        hidden_x: 1200.0,
    };

    /// Built-in profile for a viewport class.
    pub fn for_class(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Mobile => Self::MOBILE,
            ViewportClass::Desktop => Self::DESKTOP,
        }
    }

    /// Reject non-finite or non-positive magnitudes.
    pub fn validate(&self) -> ShowreelResult<()> {
        for (name, v) in [
            ("side_scale", self.side_scale),
            ("side_x", self.side_x),
            ("hidden_x", self.hidden_x),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ShowreelError::config(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Placement for a slide at `offset = slide_index - current_index` using the built-in
/// profile for `class`.
pub fn compute_transform(offset: i64, class: ViewportClass) -> SlideTransform {
    compute_transform_with(offset, &PositionProfile::for_class(class))
}

/// Placement for a slide at `offset` using explicit magnitudes.
///
/// Negative offsets sit left of center, positive offsets right of it. Hidden slides keep the
/// side scale so they grow in from the same size when they become neighbours.
pub fn compute_transform_with(offset: i64, profile: &PositionProfile) -> SlideTransform {
    match offset {
        0 => SlideTransform::CENTER,
        -1 | 1 => SlideTransform {
            scale: profile.side_scale,
            offset_x: offset.signum() as f64 * profile.side_x,
            opacity: SIDE_OPACITY,
            layer: LAYER_SIDE,
        },
        _ => SlideTransform {
            scale: profile.side_scale,
            offset_x: offset.signum() as f64 * profile.hidden_x,
            opacity: 0.0,
            layer: LAYER_HIDDEN,
        },
    }
}

/// Placements for every slide of a `len`-slide carousel centered on `current`.
pub fn layout(len: usize, current: usize, profile: &PositionProfile) -> Vec<SlideTransform> {
    (0..len)
        .map(|i| compute_transform_with(i as i64 - current as i64, profile))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/position.rs"]
mod tests;
