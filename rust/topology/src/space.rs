// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Finite topological spaces.
//!
//! A [`TopologicalSpace`] is a base set plus an ordered list of open sets.
//! Construction does not check the axioms: a learner's submission has to be
//! representable even when it is wrong. Use [`crate::validation::validate`]
//! (or [`TopologicalSpace::validated`]) before trusting a space, and only
//! hand validated spaces to the derivation methods.

use std::hash::Hash;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::set::FiniteSet;
use crate::validation::{validate, ValidationResult};

/// A base set together with a collection of open sets.
///
/// # Example
///
/// ```
/// use topo_explorer_topology::{FiniteSet, TopologicalSpace};
///
/// let space: TopologicalSpace = TopologicalSpace::validated(
///     FiniteSet::of(["a", "b"]),
///     vec![FiniteSet::new(), FiniteSet::of(["a"]), FiniteSet::of(["a", "b"])],
/// )
/// .unwrap();
///
/// assert_eq!(space.open_set_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TopologicalSpace<T = Element> {
    pub(crate) base_set: FiniteSet<T>,
    pub(crate) open_sets: Vec<FiniteSet<T>>,
}

impl<T: Eq + Hash> TopologicalSpace<T> {
    /// Creates a space without checking any axiom.
    pub fn new(base_set: FiniteSet<T>, open_sets: Vec<FiniteSet<T>>) -> Self {
        Self {
            base_set,
            open_sets,
        }
    }

    pub fn base_set(&self) -> &FiniteSet<T> {
        &self.base_set
    }

    pub fn open_sets(&self) -> &[FiniteSet<T>] {
        &self.open_sets
    }

    pub fn open_set_count(&self) -> usize {
        self.open_sets.len()
    }

    /// Returns the index of the first open set equal to `set`, if any.
    pub fn position_of(&self, set: &FiniteSet<T>) -> Option<usize> {
        self.open_sets.iter().position(|open| open == set)
    }

    /// Checks if `set` is listed among the open sets (by set equality).
    pub fn is_open(&self, set: &FiniteSet<T>) -> bool {
        self.position_of(set).is_some()
    }
}

impl<T: Eq + Hash + Clone + Send + Sync> TopologicalSpace<T> {
    /// Creates a space and validates it, failing with
    /// [`Error::InvalidTopology`] on any axiom violation.
    ///
    /// Union closure is not checked here; see [`crate::validation`].
    pub fn validated(base_set: FiniteSet<T>, open_sets: Vec<FiniteSet<T>>) -> Result<Self> {
        let space = Self::new(base_set, open_sets);
        match validate(&space) {
            ValidationResult::Valid => Ok(space),
            ValidationResult::Invalid(violations) => Err(Error::InvalidTopology(violations)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;

    #[test]
    fn new_does_not_validate() {
        let space: TopologicalSpace<i64> =
            TopologicalSpace::new(FiniteSet::of([1, 2]), vec![FiniteSet::of([3])]);
        assert_eq!(space.open_set_count(), 1);
        assert_eq!(space.base_set().len(), 2);
    }

    #[test]
    fn position_uses_set_equality() {
        let space: TopologicalSpace<i64> = TopologicalSpace::new(
            FiniteSet::of([1, 2]),
            vec![FiniteSet::new(), FiniteSet::of([2, 1])],
        );
        assert_eq!(space.position_of(&FiniteSet::of([1, 2])), Some(1));
        assert!(space.is_open(&FiniteSet::new()));
        assert!(!space.is_open(&FiniteSet::of([1])));
    }

    #[test]
    fn validated_reports_violations() {
        let err = TopologicalSpace::<i64>::validated(
            FiniteSet::of([1, 2]),
            vec![FiniteSet::of([1, 2])],
        )
        .unwrap_err();
        assert_eq!(err.violations(), Some(&[Violation::MissingEmptySet][..]));
    }
}
