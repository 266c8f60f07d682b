//! Contrast requirements that scale with the user's contrast preference.

use material_color_utilities::utils::math::lerp;

/// A contrast ratio requirement at four anchor contrast levels.
///
/// `low`, `normal`, `medium` and `high` are the ratios required at contrast
/// levels -1.0, 0.0, 0.5 and 1.0. Levels in between interpolate linearly;
/// levels outside `[-1, 1]` clamp to the nearest anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCurve {
    pub low: f64,
    pub normal: f64,
    pub medium: f64,
    pub high: f64,
}

impl ContrastCurve {
    pub const fn new(low: f64, normal: f64, medium: f64, high: f64) -> Self {
        Self {
            low,
            normal,
            medium,
            high,
        }
    }

    /// The required ratio at `contrast_level`.
    pub fn get(&self, contrast_level: f64) -> f64 {
        if contrast_level <= -1.0 {
            self.low
        } else if contrast_level < 0.0 {
            lerp(self.low, self.normal, contrast_level + 1.0)
        } else if contrast_level < 0.5 {
            lerp(self.normal, self.medium, contrast_level / 0.5)
        } else if contrast_level < 1.0 {
            lerp(self.medium, self.high, (contrast_level - 0.5) / 0.5)
        } else {
            self.high
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVE: ContrastCurve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);

    #[test]
    fn test_anchors() {
        assert_eq!(CURVE.get(-1.0), 3.0);
        assert_eq!(CURVE.get(0.0), 4.5);
        assert_eq!(CURVE.get(0.5), 7.0);
        assert_eq!(CURVE.get(1.0), 11.0);
    }

    #[test]
    fn test_interpolates_between_anchors() {
        assert!((CURVE.get(-0.5) - 3.75).abs() < 1e-9);
        assert!((CURVE.get(0.25) - 5.75).abs() < 1e-9);
        assert!((CURVE.get(0.75) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_outside_range() {
        assert_eq!(CURVE.get(-3.0), 3.0);
        assert_eq!(CURVE.get(2.0), 11.0);
    }

    #[test]
    fn test_monotonic_for_increasing_curve() {
        let mut last = CURVE.get(-1.0);
        for step in 1..=20 {
            let value = CURVE.get(-1.0 + f64::from(step) * 0.1);
            assert!(value >= last);
            last = value;
        }
    }
}
