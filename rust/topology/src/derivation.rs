// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Derived sets of a validated space: closed-set test, closure, interior,
//! boundary and exterior.
//!
//! These methods assume the space already passed validation and never
//! re-check the axioms. On an invalid space they still terminate and return
//! a set, but the result carries no topological meaning.

use std::hash::Hash;

use crate::set::FiniteSet;
use crate::space::TopologicalSpace;

impl<T: Eq + Hash + Clone> TopologicalSpace<T> {
    /// Returns `base − subset`.
    pub fn complement(&self, subset: &FiniteSet<T>) -> FiniteSet<T> {
        self.base_set.difference(subset)
    }

    /// Returns the closed sets, one per listed open set, in the same order.
    pub fn closed_sets(&self) -> Vec<FiniteSet<T>> {
        self.open_sets
            .iter()
            .map(|open| self.complement(open))
            .collect()
    }

    /// Checks if `subset` is closed, i.e. its complement is an open set.
    pub fn is_closed(&self, subset: &FiniteSet<T>) -> bool {
        self.is_open(&self.complement(subset))
    }

    /// Smallest closed set containing `subset`.
    ///
    /// Intersects every closed superset of `subset`, starting from the base
    /// set, so the base set comes back when no smaller closed superset exists.
    pub fn closure(&self, subset: &FiniteSet<T>) -> FiniteSet<T> {
        self.open_sets
            .iter()
            .map(|open| self.complement(open))
            .filter(|closed| subset.is_subset(closed))
            .fold(self.base_set.clone(), |acc, closed| acc.intersection(&closed))
    }

    /// Largest open set contained in `subset`.
    ///
    /// Unions every open subset of `subset`; empty when there is none.
    pub fn interior(&self, subset: &FiniteSet<T>) -> FiniteSet<T> {
        self.open_sets
            .iter()
            .filter(|open| open.is_subset(subset))
            .fold(FiniteSet::new(), |acc, open| acc.union(open))
    }

    /// `closure(subset) − interior(subset)`.
    pub fn boundary(&self, subset: &FiniteSet<T>) -> FiniteSet<T> {
        self.closure(subset).difference(&self.interior(subset))
    }

    /// Interior of the complement of `subset`.
    pub fn exterior(&self, subset: &FiniteSet<T>) -> FiniteSet<T> {
        self.interior(&self.complement(subset))
    }

    /// Checks if the closure of `subset` is the whole base set.
    pub fn is_dense(&self, subset: &FiniteSet<T>) -> bool {
        self.closure(subset) == self.base_set
    }
}
