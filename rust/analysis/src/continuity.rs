// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sampled ε-δ continuity.

use crate::error::{check_tolerance, Result};
use crate::function::RealFunction;

/// Offsets from `x0`, as fractions of `delta`, that are probed.
const PROBE_FRACTIONS: [f64; 4] = [-0.5, -0.25, 0.25, 0.5];

/// Checks `|f(x) - f(x0)| < epsilon` at `x0 ± delta/4` and `x0 ± delta/2`.
///
/// Four probes cannot establish continuity; they only catch jumps and poles
/// large enough to show at that scale. A non-finite value at `x0` or at any
/// probe is reported as discontinuous.
pub fn is_continuous_at<F>(f: &F, x0: f64, epsilon: f64, delta: f64) -> Result<bool>
where
    F: RealFunction + ?Sized,
{
    check_tolerance("epsilon", epsilon)?;
    check_tolerance("delta", delta)?;

    let center = f.eval(x0);
    if !center.is_finite() {
        tracing::trace!(x0, "value at x0 is not finite");
        return Ok(false);
    }

    let jump = PROBE_FRACTIONS
        .iter()
        .map(|fraction| x0 + fraction * delta)
        .find(|&x| {
            let fx = f.eval(x);
            !(fx.is_finite() && (fx - center).abs() < epsilon)
        });
    if let Some(x) = jump {
        tracing::trace!(x0, x, epsilon, delta, "continuity probe failed");
    }
    Ok(jump.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn polynomial_is_continuous() {
        let square = |x: f64| x * x;
        assert_eq!(is_continuous_at(&square, 1.0, 1e-3, 1e-4), Ok(true));
        assert_eq!(is_continuous_at(&f64::sin, 0.0, 1e-6, 1e-7), Ok(true));
    }

    #[test]
    fn step_is_discontinuous_at_the_jump() {
        let step = |x: f64| if x < 0.0 { 0.0 } else { 1.0 };
        assert_eq!(is_continuous_at(&step, 0.0, 0.5, 1e-6), Ok(false));
        assert_eq!(is_continuous_at(&step, 1.0, 0.5, 1e-6), Ok(true));
    }

    #[test]
    fn delta_too_coarse_for_epsilon() {
        // Slope 10: a probe at delta/2 moves the value by 5 * delta.
        let steep = |x: f64| 10.0 * x;
        assert_eq!(is_continuous_at(&steep, 0.0, 0.1, 0.1), Ok(false));
        assert_eq!(is_continuous_at(&steep, 0.0, 0.1, 0.001), Ok(true));
    }

    #[test]
    fn poles_are_discontinuous() {
        let reciprocal = |x: f64| 1.0 / x;
        assert_eq!(is_continuous_at(&reciprocal, 0.0, 1.0, 0.1), Ok(false));
        let log = |x: f64| x.ln();
        // ln of the left probes is NaN
        assert_eq!(is_continuous_at(&log, 0.01, 1.0, 0.1), Ok(false));
    }

    #[test]
    fn tolerances_must_be_positive() {
        let id = |x: f64| x;
        assert!(matches!(
            is_continuous_at(&id, 0.0, 0.0, 0.1),
            Err(Error::InvalidTolerance { name: "epsilon", .. })
        ));
        assert!(matches!(
            is_continuous_at(&id, 0.0, 0.1, -0.1),
            Err(Error::InvalidTolerance { name: "delta", .. })
        ));
    }
}
