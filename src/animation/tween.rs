use crate::animation::ease::Ease;
use crate::foundation::core::SlideTransform;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with eased progress `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for i32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let v = f64::from(*a) + (f64::from(*b) - f64::from(*a)) * t;
        v.round() as i32
    }
}

impl Lerp for SlideTransform {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            scale: f64::lerp(&a.scale, &b.scale, t),
            offset_x: f64::lerp(&a.offset_x, &b.offset_x, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t).clamp(0.0, 1.0),
            layer: i32::lerp(&a.layer, &b.layer, t),
        }
    }
}

/// A single eased interpolation over a fixed duration in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    /// Value at `elapsed == 0`.
    pub from: T,
    /// Value at `elapsed >= duration_secs`.
    pub to: T,
    /// Duration in seconds; `0` jumps straight to `to`.
    pub duration_secs: f64,
    /// Ease applied to normalized progress.
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Normalized, un-eased progress at `elapsed` seconds.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Sample the tween at `elapsed` seconds.
    pub fn sample(&self, elapsed: f64) -> T {
        let p = self.progress(elapsed);
        if p >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }

    /// Return `true` once `elapsed` reaches the end of the tween.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.progress(elapsed) >= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
