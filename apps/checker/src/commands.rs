// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The checker's subcommands, as plain functions returning reports.

use std::fmt;

use anyhow::Context;
use serde::Serialize;
use topo_explorer_analysis::{AnalysisConfig, Analyzer, Interval, Metric, MetricKind};
use topo_explorer_topology::{Element, FiniteSet, TopologicalSpace, ValidationResult, Validator};

/// Derived sets of one queried subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsetReport {
    pub subset: Vec<Element>,
    pub closure: Vec<Element>,
    pub interior: Vec<Element>,
    pub boundary: Vec<Element>,
    pub is_open: bool,
    pub is_closed: bool,
    pub is_dense: bool,
}

/// Result of checking a space file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceReport {
    pub valid: bool,
    pub violations: Vec<String>,
    pub subsets: Vec<SubsetReport>,
}

/// Validates the space in `json` and, if it is a topology, derives the
/// closure, interior and boundary of every subset in `subsets`.
pub fn check_space(json: &str, strict: bool, subsets: &[String]) -> anyhow::Result<SpaceReport> {
    let space = TopologicalSpace::<Element>::from_json(json).context("parsing space")?;
    let queries = subsets
        .iter()
        .map(|raw| {
            serde_json::from_str::<FiniteSet<Element>>(raw)
                .with_context(|| format!("parsing subset {raw}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let result = Validator::new().with_union_closure(strict).validate(&space);
    tracing::info!(
        base = space.base_set().len(),
        open_sets = space.open_set_count(),
        strict,
        valid = result.is_valid(),
        "validated space"
    );

    let subsets = match &result {
        ValidationResult::Valid => queries
            .iter()
            .map(|subset| {
                if !subset.is_subset(space.base_set()) {
                    tracing::warn!(%subset, "subset has elements outside the base set");
                }
                derive(&space, subset)
            })
            .collect(),
        ValidationResult::Invalid(_) => Vec::new(),
    };

    Ok(SpaceReport {
        valid: result.is_valid(),
        violations: result.violations().iter().map(|v| v.to_string()).collect(),
        subsets,
    })
}

fn derive(space: &TopologicalSpace<Element>, subset: &FiniteSet<Element>) -> SubsetReport {
    SubsetReport {
        subset: subset.to_sorted_vec(),
        closure: space.closure(subset).to_sorted_vec(),
        interior: space.interior(subset).to_sorted_vec(),
        boundary: space.boundary(subset).to_sorted_vec(),
        is_open: space.is_open(subset),
        is_closed: space.is_closed(subset),
        is_dense: space.is_dense(subset),
    }
}

/// Relative slack on the Lipschitz bound of an affine map.
const LIPSCHITZ_SLACK: f64 = 1e-6;

/// Contraction check and fixed point of `x ↦ slope·x + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffineReport {
    pub slope: f64,
    pub intercept: f64,
    pub contraction: bool,
    pub fixed_point: Option<f64>,
    pub failure: Option<String>,
}

/// Checks the contraction bound `|slope|` on `[x0 - 1, x0 + 1]` and iterates
/// from `x0` with the configured tolerance and iteration bound.
pub fn check_affine(
    slope: f64,
    intercept: f64,
    x0: f64,
    config: AnalysisConfig,
) -> anyhow::Result<AffineReport> {
    let analyzer = Analyzer::new(config)?;
    let f = move |x: f64| slope * x + intercept;

    let domain = Interval::new(x0 - 1.0, x0 + 1.0)?;
    let lipschitz = slope.abs();
    // |f(x) - f(y)| is exactly |slope|·|x - y| in theory; rounding needs room.
    let bound = lipschitz * (1.0 + LIPSCHITZ_SLACK);
    let contraction = lipschitz < 1.0 && analyzer.is_contraction(&f, domain, bound)?;

    let (fixed_point, failure) = match analyzer.find_fixed_point(&f, x0) {
        Ok(value) => (Some(value), None),
        Err(err) => (None, Some(err.to_string())),
    };
    Ok(AffineReport {
        slope,
        intercept,
        contraction,
        fixed_point,
        failure,
    })
}

/// Distance between two vectors given as JSON arrays.
pub fn distance(a: &str, b: &str, metric: MetricKind) -> anyhow::Result<f64> {
    let a: Vec<f64> = serde_json::from_str(a).with_context(|| format!("parsing vector {a}"))?;
    let b: Vec<f64> = serde_json::from_str(b).with_context(|| format!("parsing vector {b}"))?;
    Ok(metric.distance(&a, &b)?)
}

fn write_elements(f: &mut fmt::Formatter<'_>, elements: &[Element]) -> fmt::Result {
    f.write_str("{")?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{element}")?;
    }
    f.write_str("}")
}

impl fmt::Display for SpaceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            writeln!(f, "valid topology")?;
        } else {
            writeln!(f, "not a topology:")?;
            for violation in &self.violations {
                writeln!(f, "  - {violation}")?;
            }
        }
        for report in &self.subsets {
            write_elements(f, &report.subset)?;
            writeln!(
                f,
                " (open: {}, closed: {}, dense: {})",
                report.is_open, report.is_closed, report.is_dense
            )?;
            f.write_str("  closure:  ")?;
            write_elements(f, &report.closure)?;
            f.write_str("\n  interior: ")?;
            write_elements(f, &report.interior)?;
            f.write_str("\n  boundary: ")?;
            write_elements(f, &report.boundary)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for AffineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "x -> {} * x + {}: {}",
            self.slope,
            self.intercept,
            if self.contraction {
                "contraction"
            } else {
                "not a contraction"
            }
        )?;
        match (&self.fixed_point, &self.failure) {
            (Some(x), _) => writeln!(f, "fixed point: {x}"),
            (None, Some(reason)) => writeln!(f, "no fixed point: {reason}"),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN: &str = r#"{
        "baseSet": ["a", "b", "c"],
        "openSets": [[], ["a"], ["a", "b"], ["a", "b", "c"]]
    }"#;

    #[test]
    fn derives_sets_of_a_valid_space() {
        let report = check_space(CHAIN, false, &[r#"["b"]"#.to_string()]).unwrap();
        assert!(report.valid);
        let b = &report.subsets[0];
        assert_eq!(b.closure, vec![Element::from("b"), Element::from("c")]);
        assert!(b.interior.is_empty());
        assert_eq!(b.boundary, b.closure);
        assert!(!b.is_open && !b.is_closed && !b.is_dense);
    }

    #[test]
    fn reports_violations_without_deriving() {
        let json = r#"{ "baseSet": [1, 2, 3], "openSets": [[], [1, 2, 3], [1, 2], [2, 3]] }"#;
        let report = check_space(json, false, &["[1]".to_string()]).unwrap();
        assert!(!report.valid);
        assert!(report.subsets.is_empty());
        assert_eq!(report.violations.len(), 1);
        assert!(report.to_string().contains("not a topology"));
    }

    #[test]
    fn strict_mode_checks_unions() {
        let json = r#"{ "baseSet": [1, 2, 3], "openSets": [[], [1, 2, 3], [1], [2]] }"#;
        assert!(check_space(json, false, &[]).unwrap().valid);
        assert!(!check_space(json, true, &[]).unwrap().valid);
    }

    #[test]
    fn malformed_input() {
        assert!(check_space("{", false, &[]).is_err());
        assert!(check_space(CHAIN, false, &["[\"a\", \"a\"]".to_string()]).is_err());
    }

    #[test]
    fn affine_maps() {
        let report = check_affine(0.5, 1.0, 0.0, AnalysisConfig::default()).unwrap();
        assert!(report.contraction);
        let x = report.fixed_point.unwrap();
        assert!((x - 2.0).abs() < 1e-8);

        let report = check_affine(1.0, 1.0, 0.0, AnalysisConfig::default()).unwrap();
        assert!(!report.contraction);
        assert!(report.fixed_point.is_none());
        assert!(report.to_string().contains("did not converge"));
    }

    #[test]
    fn affine_contractions_are_recognised() {
        let cases = [
            (0.5, 1.0, 0.0),
            (0.3, 1.0, 0.0),
            (0.7, 2.0, 0.0),
            (0.9, -1.0, 0.0),
            (0.5, 1.0, 0.3),
            (0.1, 5.0, 2.0),
            (-0.6, 1.0, 0.0),
            (0.0, 3.0, -4.0),
            (0.25, -7.5, 1e3),
        ];
        // slope 0.9 needs a couple of hundred steps to settle
        let config = AnalysisConfig {
            max_iterations: 1000,
            ..AnalysisConfig::default()
        };
        for (slope, intercept, x0) in cases {
            let report = check_affine(slope, intercept, x0, config).unwrap();
            assert!(report.contraction, "{slope} * x + {intercept} from {x0}");
            let expected = intercept / (1.0 - slope);
            let x = report.fixed_point.unwrap();
            assert!((x - expected).abs() < 1e-6, "{x} vs {expected}");
        }
    }

    #[test]
    fn expanding_affine_maps_are_not_contractions() {
        for slope in [1.0, -1.0, 1.5, -2.0] {
            let report = check_affine(slope, 1.0, 0.0, AnalysisConfig::default()).unwrap();
            assert!(!report.contraction, "slope {slope}");
        }
    }

    #[test]
    fn vector_distances() {
        assert_eq!(distance("[0, 0]", "[3, 4]", MetricKind::Euclidean).unwrap(), 5.0);
        assert_eq!(distance("[0, 0]", "[3, 4]", MetricKind::Chebyshev).unwrap(), 4.0);
        assert!(distance("[0]", "[3, 4]", MetricKind::Manhattan).is_err());
    }
}
