// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology axiom validation.
//!
//! [`validate`] checks a candidate space in four steps:
//!
//! 1. The base set and the open-set collection are non-empty.
//! 2. Every open set is a subset of the base set.
//! 3. The empty set and the base set are both listed (by set equality).
//! 4. The intersection of every pair of open sets is listed.
//!
//! ## Union closure
//!
//! The default validator does **not** check that unions of open sets are
//! open. A space that passes [`validate`] is only guaranteed to satisfy the
//! other axioms; callers that need the full guarantee must supply collections
//! that are union-closed by construction (see [`crate::builders`]).
//!
//! [`Validator::with_union_closure`] turns on an extra pairwise union check.
//! For a finite family, closure under pairwise unions implies closure under
//! all unions, so this is the complete axiom; it is opt-in so that the
//! default contract stays as documented.

use std::hash::Hash;

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::set::FiniteSet;
use crate::space::TopologicalSpace;

/// A violated topology axiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The base set has no elements.
    EmptyBaseSet,
    /// The collection of open sets is empty.
    NoOpenSets,
    /// The open set at `index` has elements outside the base set.
    OpenSetNotSubset { index: usize },
    /// No open set equals the empty set.
    MissingEmptySet,
    /// No open set equals the base set.
    MissingWholeSpace,
    /// The intersection of open sets `left` and `right` is not listed.
    IntersectionNotOpen { left: usize, right: usize },
    /// The union of open sets `left` and `right` is not listed.
    ///
    /// Only reported when union closure checking is enabled.
    UnionNotOpen { left: usize, right: usize },
}

impl Violation {
    /// Returns the stable code for this violation.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::EmptyBaseSet => "non-empty-base",
            Violation::NoOpenSets => "no-open-sets",
            Violation::OpenSetNotSubset { .. } => "non-subset-open-set",
            Violation::MissingEmptySet => "missing-empty-set",
            Violation::MissingWholeSpace => "missing-whole-space",
            Violation::IntersectionNotOpen { .. } => "intersection-not-open",
            Violation::UnionNotOpen { .. } => "union-not-open",
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::OpenSetNotSubset { index } => {
                write!(f, "{} (open set {index})", self.code())
            }
            Violation::IntersectionNotOpen { left, right }
            | Violation::UnionNotOpen { left, right } => {
                write!(f, "{} (open sets {left} and {right})", self.code())
            }
            _ => f.write_str(self.code()),
        }
    }
}

/// Outcome of validating a candidate space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns the violations, empty when valid.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(v) => v,
        }
    }

    fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(violations)
        }
    }
}

/// Configurable axiom checker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    union_closure: bool,
}

impl Validator {
    /// Creates a validator with the default (intersection-only) contract.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the pairwise union closure check.
    pub fn with_union_closure(mut self, enabled: bool) -> Self {
        self.union_closure = enabled;
        self
    }

    /// Validates a space, collecting every violation found.
    pub fn validate<T>(&self, space: &TopologicalSpace<T>) -> ValidationResult
    where
        T: Eq + Hash + Clone + Send + Sync,
    {
        let base = &space.base_set;
        let open_sets = &space.open_sets;

        if base.is_empty() {
            return ValidationResult::Invalid(vec![Violation::EmptyBaseSet]);
        }
        if open_sets.is_empty() {
            return ValidationResult::Invalid(vec![Violation::NoOpenSets]);
        }

        let mut violations: Vec<Violation> = open_sets
            .iter()
            .enumerate()
            .filter(|(_, open)| !open.is_subset(base))
            .map(|(index, _)| Violation::OpenSetNotSubset { index })
            .collect();

        if !open_sets.iter().any(FiniteSet::is_empty) {
            violations.push(Violation::MissingEmptySet);
        }
        if !open_sets.iter().any(|open| open == base) {
            violations.push(Violation::MissingWholeSpace);
        }

        violations.extend(
            unlisted_pairs(open_sets, FiniteSet::<T>::intersection)
                .into_iter()
                .map(|(left, right)| Violation::IntersectionNotOpen { left, right }),
        );

        if self.union_closure {
            violations.extend(
                unlisted_pairs(open_sets, FiniteSet::<T>::union)
                    .into_iter()
                    .map(|(left, right)| Violation::UnionNotOpen { left, right }),
            );
        }

        tracing::debug!(
            base_len = base.len(),
            open_sets = open_sets.len(),
            union_closure = self.union_closure,
            violations = violations.len(),
            "Validated topology"
        );

        ValidationResult::from_violations(violations)
    }
}

/// Validates a space with the default contract (union closure unchecked).
pub fn validate<T>(space: &TopologicalSpace<T>) -> ValidationResult
where
    T: Eq + Hash + Clone + Send + Sync,
{
    Validator::new().validate(space)
}

/// Returns every pair `(i, j)`, `i < j`, whose combination is not listed.
///
/// Pairs come back in lexicographic order on every target.
fn unlisted_pairs<T, F>(open_sets: &[FiniteSet<T>], combine: F) -> Vec<(usize, usize)>
where
    T: Eq + Hash + Clone + Send + Sync,
    F: Fn(&FiniteSet<T>, &FiniteSet<T>) -> FiniteSet<T> + Sync,
{
    let k = open_sets.len();
    let combine = &combine;
    let missing_for = move |i: usize| {
        (i + 1..k).filter_map(move |j| {
            let combined = combine(&open_sets[i], &open_sets[j]);
            if open_sets.iter().any(|open| *open == combined) {
                None
            } else {
                Some((i, j))
            }
        })
    };

    // Native: spread rows over the thread pool. WASM has no threads.
    #[cfg(not(target_arch = "wasm32"))]
    let pairs: Vec<(usize, usize)> = (0..k)
        .into_par_iter()
        .flat_map_iter(missing_for)
        .collect();

    #[cfg(target_arch = "wasm32")]
    let pairs: Vec<(usize, usize)> = (0..k).flat_map(missing_for).collect();

    pairs
}
