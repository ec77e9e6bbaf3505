// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Contraction checks and fixed-point iteration.

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::error::{check_tolerance, Error, Result};
use crate::function::RealFunction;
use crate::sampling::Interval;

/// Outcome of a converged fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPoint {
    /// The last iterate `f(x)`.
    pub value: f64,
    /// Number of applications of `f`.
    pub iterations: usize,
    /// `|f(x) - x|` at the final step.
    pub residual: f64,
}

/// Sampled Lipschitz check: `|f(x) - f(y)| <= L·|x - y|` for every pair of
/// the `samples` points spread over `domain`.
///
/// Passing is a necessary condition only. `L` is not required to be below 1,
/// so this also serves as a plain Lipschitz bound check.
pub fn is_contraction<F>(f: &F, domain: Interval, lipschitz: f64, samples: usize) -> Result<bool>
where
    F: RealFunction + ?Sized,
{
    if !(lipschitz.is_finite() && lipschitz >= 0.0) {
        return Err(Error::InvalidLipschitzConstant(lipschitz));
    }
    let points = domain.sample_points(samples)?;
    let values: Vec<f64> = points.iter().map(|&x| f.eval(x)).collect();
    let n = points.len();

    let (points, values) = (&points, &values);
    let violation_at = move |i: usize| {
        (i + 1..n)
            .find(|&j| {
                let bound = lipschitz * (points[i] - points[j]).abs();
                let change = (values[i] - values[j]).abs();
                change.is_nan() || change > bound
            })
            .map(|j| (i, j))
    };

    #[cfg(not(target_arch = "wasm32"))]
    let violation = (0..n).into_par_iter().find_map_first(violation_at);

    #[cfg(target_arch = "wasm32")]
    let violation = (0..n).find_map(violation_at);

    if let Some((i, j)) = violation {
        tracing::debug!(
            x = points[i],
            y = points[j],
            lipschitz,
            "Lipschitz bound violated"
        );
    }
    Ok(violation.is_none())
}

/// Iterates `x <- f(x)` from `x0` until `|f(x) - x| < tolerance`.
///
/// Returns the final iterate, or [`Error::NonConvergent`] once
/// `max_iterations` applications have not met the tolerance.
pub fn find_fixed_point<F>(f: &F, x0: f64, tolerance: f64, max_iterations: usize) -> Result<f64>
where
    F: RealFunction + ?Sized,
{
    iterate_fixed_point(f, x0, tolerance, max_iterations).map(|fixed| fixed.value)
}

/// Like [`find_fixed_point`], reporting how the iteration ended.
///
/// A non-finite iterate stops the iteration early with
/// [`Error::NonConvergent`] carrying that iterate.
pub fn iterate_fixed_point<F>(
    f: &F,
    x0: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<FixedPoint>
where
    F: RealFunction + ?Sized,
{
    check_tolerance("tolerance", tolerance)?;

    let mut x = x0;
    for iteration in 1..=max_iterations {
        let next = f.eval(x);
        if !next.is_finite() {
            tracing::debug!(iteration, x, next, "fixed-point iterate is not finite");
            return Err(Error::NonConvergent {
                iterations: iteration,
                last: next,
            });
        }

        let residual = (next - x).abs();
        tracing::trace!(iteration, value = next, residual, "fixed-point step");
        if residual < tolerance {
            return Ok(FixedPoint {
                value: next,
                iterations: iteration,
                residual,
            });
        }
        x = next;
    }

    tracing::debug!(
        iterations = max_iterations,
        last = x,
        tolerance,
        "fixed-point iteration did not converge"
    );
    Err(Error::NonConvergent {
        iterations: max_iterations,
        last: x,
    })
}
