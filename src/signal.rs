//! Deterministic signal
//!
//! The noiseless backbone of every sample: a scaled sine of elapsed time.

/// A pure scalar function of elapsed time and a scale factor.
pub trait SignalFunction {
    /// Evaluate the signal at elapsed time `x` [s] with scale `y`.
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

/// `y * sin(x)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SineSignal;

impl SignalFunction for SineSignal {
    #[inline]
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        y * x.sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_sine_known_points() {
        let signal = SineSignal;
        assert_eq!(signal.evaluate(0.0, 1.0), 0.0);
        assert_abs_diff_eq!(
            signal.evaluate(std::f64::consts::FRAC_PI_2, 1.0),
            1.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            signal.evaluate(std::f64::consts::FRAC_PI_2, -3.0),
            -3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_scale_silences_signal() {
        assert_eq!(SineSignal.evaluate(1.234, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn sine_matches_closed_form(x in -1.0e3f64..1.0e3, y in -1.0e3f64..1.0e3) {
            let z = SineSignal.evaluate(x, y);
            prop_assert!((z - y * x.sin()).abs() <= 1e-9);
            prop_assert!(z.abs() <= y.abs() + 1e-9);
        }
    }
}
