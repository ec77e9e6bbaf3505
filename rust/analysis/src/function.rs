// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Real-valued functions and their pointwise algebra.
//!
//! Any `Fn(f64) -> f64` is a [`RealFunction`]. Composites ([`Compose`],
//! [`Sum`], [`Scaled`]) own their constituent functions and evaluate them
//! lazily on every call; nothing is cached.

use crate::error::{Error, Result};
use crate::metric::Metric;
use crate::sampling::Interval;
use crate::vector::Vector;

/// A function `ℝ → ℝ`.
pub trait RealFunction {
    fn eval(&self, x: f64) -> f64;

    /// Applies the function to every coordinate of `v`.
    fn eval_vector(&self, v: &[f64]) -> Vector {
        Vector::from_iterator(v.len(), v.iter().map(|&x| self.eval(x)))
    }
}

impl<F> RealFunction for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// `x ↦ outer(inner(x))`.
#[derive(Debug, Clone)]
pub struct Compose<F, G> {
    outer: F,
    inner: G,
}

impl<F: RealFunction, G: RealFunction> RealFunction for Compose<F, G> {
    fn eval(&self, x: f64) -> f64 {
        self.outer.eval(self.inner.eval(x))
    }
}

/// `x ↦ left(x) + right(x)`.
#[derive(Debug, Clone)]
pub struct Sum<F, G> {
    left: F,
    right: G,
}

impl<F: RealFunction, G: RealFunction> RealFunction for Sum<F, G> {
    fn eval(&self, x: f64) -> f64 {
        self.left.eval(x) + self.right.eval(x)
    }
}

/// `x ↦ factor · inner(x)`.
#[derive(Debug, Clone)]
pub struct Scaled<F> {
    inner: F,
    factor: f64,
}

impl<F: RealFunction> RealFunction for Scaled<F> {
    fn eval(&self, x: f64) -> f64 {
        self.factor * self.inner.eval(x)
    }
}

/// `f ∘ g`.
pub fn compose<F: RealFunction, G: RealFunction>(f: F, g: G) -> Compose<F, G> {
    Compose { outer: f, inner: g }
}

pub fn function_add<F: RealFunction, G: RealFunction>(f: F, g: G) -> Sum<F, G> {
    Sum { left: f, right: g }
}

pub fn function_scale<F: RealFunction>(f: F, c: f64) -> Scaled<F> {
    Scaled {
        inner: f,
        factor: c,
    }
}

/// Sampled sup-distance between `f` and `g` over `domain`.
///
/// Evaluates both functions at `samples` equally spaced points and returns
/// the largest `metric([f(x)], [g(x)])`. This only approximates the sup
/// metric: a spike between two sample points is invisible, so accuracy is
/// bounded by the sample density.
pub fn function_distance<F, G, M>(
    f: &F,
    g: &G,
    metric: &M,
    domain: Interval,
    samples: usize,
) -> Result<f64>
where
    F: RealFunction + ?Sized,
    G: RealFunction + ?Sized,
    M: Metric + ?Sized,
{
    let mut max_distance = 0.0f64;
    for x in domain.sample_points(samples)? {
        let (fx, gx) = (f.eval(x), g.eval(x));
        if !fx.is_finite() || !gx.is_finite() {
            return Err(Error::NonFinite { at: x });
        }
        max_distance = max_distance.max(metric.distance(&[fx], &[gx])?);
    }
    Ok(max_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{euclidean_distance, MetricKind};
    use approx::assert_relative_eq;

    #[test]
    fn composition_order() {
        let h = compose(|x: f64| x + 1.0, |x: f64| 2.0 * x);
        assert_eq!(h.eval(3.0), 7.0);
        let k = compose(|x: f64| 2.0 * x, |x: f64| x + 1.0);
        assert_eq!(k.eval(3.0), 8.0);
    }

    #[test]
    fn add_and_scale() {
        let sum = function_add(f64::sin, f64::cos);
        assert_relative_eq!(sum.eval(0.0), 1.0);
        let scaled = function_scale(|x: f64| x * x, -0.5);
        assert_eq!(scaled.eval(4.0), -8.0);
    }

    #[test]
    fn composites_nest() {
        let f = function_scale(
            function_add(|x: f64| x, compose(f64::abs, |x: f64| x - 1.0)),
            2.0,
        );
        // 2 * (x + |x - 1|) at x = 0
        assert_eq!(f.eval(0.0), 2.0);
        assert_eq!(f.eval(3.0), 10.0);
    }

    #[test]
    fn per_coordinate_application() {
        let square = |x: f64| x * x;
        assert_eq!(
            square.eval_vector(&[1.0, -2.0, 3.0]).as_slice(),
            &[1.0, 4.0, 9.0]
        );
    }

    #[test]
    fn distance_between_functions() {
        let domain = Interval::new(0.0, 1.0).unwrap();
        // |x - x²| peaks at 0.25 when x = 0.5, which is a sample point
        let d = function_distance(
            &|x: f64| x,
            &|x: f64| x * x,
            &euclidean_distance,
            domain,
            101,
        )
        .unwrap();
        assert_relative_eq!(d, 0.25, epsilon = 1e-12);

        let same = function_distance(&f64::sin, &f64::sin, &MetricKind::Manhattan, domain, 10);
        assert_eq!(same, Ok(0.0));
    }

    #[test]
    fn distance_needs_two_samples() {
        let domain = Interval::new(0.0, 1.0).unwrap();
        let err = function_distance(&f64::sin, &f64::cos, &MetricKind::Euclidean, domain, 1);
        assert_eq!(err, Err(Error::InvalidSampleCount(1)));
    }

    #[test]
    fn distance_rejects_non_finite_samples() {
        let domain = Interval::new(0.0, 1.0).unwrap();
        let err = function_distance(
            &|x: f64| 1.0 / x,
            &|_: f64| 0.0,
            &MetricKind::Euclidean,
            domain,
            5,
        );
        assert_eq!(err, Err(Error::NonFinite { at: 0.0 }));
    }
}
