// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Default tolerances and bounds, and an [`Analyzer`] that applies them.

use serde::{Deserialize, Serialize};

use crate::continuity::is_continuous_at;
use crate::error::{check_tolerance, Error, Result};
use crate::function::{function_distance, RealFunction};
use crate::iteration::{find_fixed_point, is_contraction};
use crate::metric::Metric;
use crate::sampling::Interval;
use crate::sequence::{is_cauchy, is_convergent, Sequence};

/// Largest accepted `max_terms`. The Cauchy scan keeps every term in memory.
pub const MAX_TERMS: usize = 10_000_000;

/// Tolerances and iteration bounds for the numerical checks.
///
/// Missing JSON fields take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Closeness threshold for sequences and continuity.
    pub epsilon: f64,
    /// Probe radius for continuity checks.
    pub delta: f64,
    /// Stopping residual for fixed-point iteration.
    pub tolerance: f64,
    /// Number of sequence terms inspected.
    pub max_terms: usize,
    /// Bound on fixed-point iterations.
    pub max_iterations: usize,
    /// Sample points for sampled function checks.
    pub samples: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-10,
            delta: 1e-10,
            tolerance: 1e-10,
            max_terms: 1000,
            max_iterations: 100,
            samples: 100,
        }
    }
}

impl AnalysisConfig {
    /// Parses a (possibly partial) JSON config and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_tolerance("epsilon", self.epsilon)?;
        check_tolerance("delta", self.delta)?;
        check_tolerance("tolerance", self.tolerance)?;
        if self.max_terms < 2 {
            return Err(Error::InvalidSampleCount(self.max_terms));
        }
        if self.max_terms > MAX_TERMS {
            return Err(Error::TooManyTerms {
                requested: self.max_terms,
                max: MAX_TERMS,
            });
        }
        if self.samples < 2 {
            return Err(Error::InvalidSampleCount(self.samples));
        }
        Ok(())
    }
}

/// Runs the analysis checks with one validated [`AnalysisConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn is_convergent<S: Sequence + ?Sized>(&self, seq: &S, limit: f64) -> Result<bool> {
        is_convergent(seq, limit, self.config.epsilon, self.config.max_terms)
    }

    pub fn is_cauchy<S: Sequence + ?Sized>(&self, seq: &S) -> Result<bool> {
        is_cauchy(seq, self.config.epsilon, self.config.max_terms)
    }

    pub fn is_continuous_at<F: RealFunction + ?Sized>(&self, f: &F, x0: f64) -> Result<bool> {
        is_continuous_at(f, x0, self.config.epsilon, self.config.delta)
    }

    pub fn is_contraction<F: RealFunction + ?Sized>(
        &self,
        f: &F,
        domain: Interval,
        lipschitz: f64,
    ) -> Result<bool> {
        is_contraction(f, domain, lipschitz, self.config.samples)
    }

    pub fn find_fixed_point<F: RealFunction + ?Sized>(&self, f: &F, x0: f64) -> Result<f64> {
        find_fixed_point(f, x0, self.config.tolerance, self.config.max_iterations)
    }

    pub fn function_distance<F, G, M>(
        &self,
        f: &F,
        g: &G,
        metric: &M,
        domain: Interval,
    ) -> Result<f64>
    where
        F: RealFunction + ?Sized,
        G: RealFunction + ?Sized,
        M: Metric + ?Sized,
    {
        function_distance(f, g, metric, domain, self.config.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::MetricKind;
    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.epsilon, 1e-10);
        assert_eq!(config.max_terms, 1000);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.samples, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AnalysisConfig::from_json(r#"{ "epsilon": 0.01, "maxTerms": 500 }"#).unwrap();
        assert_eq!(config.epsilon, 0.01);
        assert_eq!(config.max_terms, 500);
        assert_eq!(config.tolerance, 1e-10);
    }

    #[test]
    fn invalid_json_config() {
        assert!(matches!(
            AnalysisConfig::from_json("{ not json"),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json(r#"{ "delta": 0 }"#),
            Err(Error::InvalidTolerance { name: "delta", .. })
        ));
        assert_eq!(
            AnalysisConfig::from_json(r#"{ "samples": 1 }"#),
            Err(Error::InvalidSampleCount(1))
        );
    }

    #[test]
    fn analyzer_uses_config() {
        let analyzer = Analyzer::new(AnalysisConfig {
            epsilon: 0.01,
            ..AnalysisConfig::default()
        })
        .unwrap();

        let harmonic = |n: usize| 1.0 / (n as f64 + 1.0);
        assert_eq!(analyzer.is_cauchy(&harmonic), Ok(true));
        assert_eq!(analyzer.is_convergent(&harmonic, 0.0), Ok(true));
        assert_eq!(analyzer.is_continuous_at(&f64::exp, 0.0), Ok(true));

        let x = analyzer.find_fixed_point(&|x: f64| x / 2.0 + 1.0, 0.0).unwrap();
        assert_relative_eq!(x, 2.0, epsilon = 1e-9);

        let domain = Interval::new(-1.0, 1.0).unwrap();
        assert_eq!(analyzer.is_contraction(&|x: f64| x / 3.0, domain, 0.5), Ok(true));
        let d = analyzer
            .function_distance(&|x: f64| x, &|_: f64| 0.0, &MetricKind::Euclidean, domain)
            .unwrap();
        assert_eq!(d, 1.0);
    }

    #[test]
    fn term_bound_is_capped() {
        assert_eq!(
            AnalysisConfig::from_json(r#"{ "maxTerms": 1000000000 }"#),
            Err(Error::TooManyTerms {
                requested: 1_000_000_000,
                max: MAX_TERMS
            })
        );
        let at_limit = AnalysisConfig {
            max_terms: MAX_TERMS,
            ..AnalysisConfig::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn analyzer_rejects_invalid_config() {
        let config = AnalysisConfig {
            max_terms: 0,
            ..AnalysisConfig::default()
        };
        assert_eq!(Analyzer::new(config).unwrap_err(), Error::InvalidSampleCount(0));
    }
}
