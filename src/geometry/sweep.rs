use std::f64::consts::TAU;

use crate::config::SweepCalibration;
use crate::math::{ANGLE_TOLERANCE, SATURATION_TOLERANCE};

/// Returns true when `saturation` is close enough to 1.0 to mean "no curvature".
#[must_use]
pub fn is_full_saturation(saturation: f64) -> bool {
    (saturation - 1.0).abs() <= SATURATION_TOLERANCE
}

impl SweepCalibration {
    /// Estimates the sweep angle (radians) of the arc that realizes
    /// `saturation` over a chord of length `chord_length`.
    ///
    /// Returns exactly `0.0` for full saturation. The saturation is first
    /// rescaled by the chord relative to the reference length,
    /// `x = 1 - (chord_length / reference_length)^2 * (1 - saturation)`,
    /// then fed to the rational approximation. No iteration, no other branch.
    #[must_use]
    pub fn estimate_sweep(&self, saturation: f64, chord_length: f64) -> f64 {
        if is_full_saturation(saturation) {
            return 0.0;
        }
        let ratio = chord_length / self.reference_length;
        let x = 1.0 - ratio * ratio * (1.0 - saturation);
        let [c0, c1, c2, c3, c4, c5] = self.coefficients;
        let numerator = c0 + c1 * x + c2 * x * x;
        let denominator = 1.0 + c3 * x + c4 * x * x + c5 * x * x * x;
        numerator / denominator
    }
}

/// Reduces an estimated sweep to the magnitude a circle can realize, in `(0, 2pi)`.
///
/// `None` means "draw a straight line": the estimate was zero, not finite, or
/// a whole number of turns (where the fitted radius diverges).
#[must_use]
pub fn resolve_sweep(theta: f64) -> Option<f64> {
    if !theta.is_finite() {
        return None;
    }
    let sweep = theta.abs() % TAU;
    (sweep > ANGLE_TOLERANCE && TAU - sweep > ANGLE_TOLERANCE).then_some(sweep)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn full_saturation_is_exactly_zero() {
        let cal = SweepCalibration::default();
        assert_eq!(cal.estimate_sweep(1.0, 30.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(cal.estimate_sweep(1.0 - 1e-11, 30.0).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn rational_form_uses_rescaled_saturation() {
        // Reference length 2, chord 1: x = 1 - 0.25 * (1 - 0.6) = 0.9.
        let cal = SweepCalibration::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2.0);
        let x: f64 = 0.9;
        let expected = (1.0 + 2.0 * x + 3.0 * x * x) / (1.0 + 4.0 * x + 5.0 * x * x + 6.0 * x.powi(3));
        assert_relative_eq!(cal.estimate_sweep(0.6, 1.0), expected, epsilon = 1e-15);
    }

    #[test]
    fn zero_chord_uses_plain_coefficient_ratio() {
        // x = 1 regardless of saturation.
        let cal = SweepCalibration::new([1.0, 1.0, 1.0, 1.0, 1.0, 1.0], 50.0);
        assert_relative_eq!(cal.estimate_sweep(0.2, 0.0), 3.0 / 4.0, epsilon = 1e-15);
    }

    #[test]
    fn default_table_is_finite_for_typical_inputs() {
        let cal = SweepCalibration::default();
        for &(s, d) in &[(0.0, 10.0), (0.5, 100.0), (0.9, 1.0), (0.25, 60.0)] {
            assert!(cal.estimate_sweep(s, d).is_finite(), "s={s} d={d}");
        }
    }

    #[test]
    fn resolve_sweep_folds_sign_and_turns() {
        assert!(resolve_sweep(0.0).is_none());
        assert!(resolve_sweep(f64::NAN).is_none());
        assert!(resolve_sweep(f64::INFINITY).is_none());
        assert!(resolve_sweep(TAU).is_none());
        assert_relative_eq!(resolve_sweep(-0.5).unwrap(), 0.5);
        assert_relative_eq!(resolve_sweep(TAU + PI).unwrap(), PI, epsilon = 1e-12);
    }
}
