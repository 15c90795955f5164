pub use kurbo::{Affine, Vec2};

/// Width (in logical pixels) below which a viewport counts as mobile.
pub const DEFAULT_BREAKPOINT: f64 = 768.0;

/// Coarse device-width bucket controlling animation magnitudes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    /// Narrow viewports (`width < breakpoint`).
    Mobile,
    /// Everything else.
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classify a viewport width against `breakpoint`.
    ///
    /// Non-finite widths classify as desktop.
    pub fn classify(width: f64, breakpoint: f64) -> Self {
        if width.is_finite() && width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Return `true` for [`ViewportClass::Mobile`].
    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Stacking order used by the centered slide.
pub const LAYER_CENTER: i32 = 10;
/// Stacking order used by the two neighbours of the centered slide.
pub const LAYER_SIDE: i32 = 5;
/// Stacking order used by every hidden slide.
pub const LAYER_HIDDEN: i32 = 1;

/// Visual placement of a single slide.
///
/// Derived from a slide's offset to the current index; never stored as carousel state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideTransform {
    /// Uniform scale around the slide center.
    pub scale: f64,
    /// Horizontal translation in logical pixels.
    pub offset_x: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Stacking order; larger draws on top.
    pub layer: i32,
}

impl SlideTransform {
    /// The centered, fully visible placement.
    pub const CENTER: Self = Self {
        scale: 1.0,
        offset_x: 0.0,
        opacity: 1.0,
        layer: LAYER_CENTER,
    };

    /// Return `true` when this is the centered placement.
    pub fn is_center(&self) -> bool {
        self.offset_x == 0.0 && self.scale == 1.0 && self.layer == LAYER_CENTER
    }

    /// Translation as a vector (y is always zero).
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.offset_x, 0.0)
    }

    /// Affine for renderers: scale about the slide origin, then translate.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation()) * Affine::scale(self.scale)
    }
}

impl Default for SlideTransform {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
