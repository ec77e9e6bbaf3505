// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Topology Explorer: Analysis
//!
//! Metric spaces and real analysis over `f64`, evaluated numerically.
//!
//! - [`vector`] and [`metric`]: vector arithmetic and the standard
//!   distances, backed by nalgebra.
//! - [`function`]: real functions as values (composition, sums, scaling)
//!   and a sampled distance between them.
//! - [`sequence`], [`iteration`], [`continuity`]: bounded, sampled checks
//!   for convergence, the Cauchy property, contractions, fixed points and
//!   continuity at a point.
//!
//! All checks look at finitely many samples or terms. A `true` answer means
//! "no counterexample found within the bounds", never a proof.
//!
//! ```
//! use topo_explorer_analysis::{find_fixed_point, is_cauchy};
//!
//! let x = find_fixed_point(&|x: f64| x / 2.0 + 1.0, 0.0, 1e-9, 100).unwrap();
//! assert!((x - 2.0).abs() < 1e-8);
//!
//! let harmonic = |n: usize| 1.0 / (n as f64 + 1.0);
//! assert!(is_cauchy(&harmonic, 0.01, 1000).unwrap());
//! ```

pub mod config;
pub mod continuity;
pub mod error;
pub mod function;
pub mod iteration;
pub mod metric;
pub mod sampling;
pub mod sequence;
pub mod vector;

pub use config::{AnalysisConfig, Analyzer, MAX_TERMS};
pub use continuity::is_continuous_at;
pub use error::{Error, Result};
pub use function::{compose, function_add, function_distance, function_scale, RealFunction};
pub use iteration::{find_fixed_point, is_contraction, iterate_fixed_point, FixedPoint};
pub use metric::{
    chebyshev_distance, discrete_metric, euclidean_distance, manhattan_distance,
    minkowski_distance, Metric, MetricKind,
};
pub use sampling::Interval;
pub use sequence::{cauchy_threshold, is_cauchy, is_convergent, Sequence};
pub use vector::{dot_product, vector_add, vector_norm, vector_scale, vector_subtract, Vector};
