// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Distance functions over real vectors.
//!
//! The four norm-induced metrics are thin compositions of
//! [`vector_subtract`] and [`vector_norm`]. Symmetry and the triangle
//! inequality are the caller's contract for custom [`Metric`]s and are not
//! checked at runtime.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vector::{vector_norm, vector_subtract};

/// A distance between two real vectors.
pub trait Metric {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64>;
}

impl<F> Metric for F
where
    F: Fn(&[f64], &[f64]) -> Result<f64>,
{
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        self(a, b)
    }
}

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    vector_norm(vector_subtract(a, b)?.as_slice(), 2.0)
}

pub fn manhattan_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    vector_norm(vector_subtract(a, b)?.as_slice(), 1.0)
}

pub fn chebyshev_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    vector_norm(vector_subtract(a, b)?.as_slice(), f64::INFINITY)
}

pub fn minkowski_distance(a: &[f64], b: &[f64], p: f64) -> Result<f64> {
    vector_norm(vector_subtract(a, b)?.as_slice(), p)
}

/// The 0/1 metric of the discrete topology.
///
/// Works on anything comparable: scalars, slices, tuples. Slices of
/// different length are simply unequal.
pub fn discrete_metric<T: PartialEq + ?Sized>(a: &T, b: &T) -> f64 {
    if a == b {
        0.0
    } else {
        1.0
    }
}

/// The catalogue of built-in metrics, selectable by name in exercise data.
///
/// ```
/// use topo_explorer_analysis::{Metric, MetricKind};
///
/// let metric: MetricKind = serde_json::from_str(r#"{ "kind": "minkowski", "p": 1 }"#).unwrap();
/// assert_eq!(metric.distance(&[0.0, 0.0], &[2.0, 1.0]).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MetricKind {
    Euclidean,
    Manhattan,
    Chebyshev,
    Minkowski { p: f64 },
    Discrete,
}

impl MetricKind {
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Euclidean => "euclidean",
            MetricKind::Manhattan => "manhattan",
            MetricKind::Chebyshev => "chebyshev",
            MetricKind::Minkowski { .. } => "minkowski",
            MetricKind::Discrete => "discrete",
        }
    }
}

impl Metric for MetricKind {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        match *self {
            MetricKind::Euclidean => euclidean_distance(a, b),
            MetricKind::Manhattan => manhattan_distance(a, b),
            MetricKind::Chebyshev => chebyshev_distance(a, b),
            MetricKind::Minkowski { p } => minkowski_distance(a, b, p),
            MetricKind::Discrete => Ok(discrete_metric(a, b)),
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricKind::Minkowski { p } => write!(f, "minkowski(p={p})"),
            other => f.write_str(other.name()),
        }
    }
}
