//! Easing curves mapping linear progress to displayed progress.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Progress curve for the counter animation.
///
/// Every variant maps 0 to 0 and 1 to 1 and is monotone in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic ease-out.
    #[default]
    EaseOutQuad,
    /// Cubic ease-out.
    EaseOutCubic,
    /// Quartic ease-out.
    EaseOutQuart,
    /// Exponential ease-out.
    EaseOutExpo,
    /// Sine ease-out.
    EaseOutSine,
}

impl Easing {
    /// Apply the curve to normalized progress (clamped to 0.0..=1.0).
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseOutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
            Easing::EaseOutSine => (t * PI / 2.0).sin(),
        }
    }

    /// All available curves.
    pub fn all() -> [Easing; 6] {
        [
            Easing::Linear,
            Easing::EaseOutQuad,
            Easing::EaseOutCubic,
            Easing::EaseOutQuart,
            Easing::EaseOutExpo,
            Easing::EaseOutSine,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in Easing::all() {
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Easing::EaseOutQuad.apply(-3.0), 0.0);
        assert_eq!(Easing::EaseOutQuad.apply(7.0), 1.0);
        assert_eq!(Easing::EaseOutQuad.apply(f64::NAN), 0.0);
    }

    #[test]
    fn test_ease_out_decelerates() {
        // First half covers more ground than the second.
        for easing in Easing::all().into_iter().filter(|e| *e != Easing::Linear) {
            let first = easing.apply(0.5);
            let second = easing.apply(1.0) - first;
            assert!(first > second, "{:?} should decelerate", easing);
        }
        assert!((Easing::EaseOutQuad.apply(0.5) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_default_is_quadratic() {
        assert_eq!(Easing::default(), Easing::EaseOutQuad);
    }
}
