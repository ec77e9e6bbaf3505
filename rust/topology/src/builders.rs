// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Constructors for spaces that are topologies by construction.
//!
//! The validator does not check union closure, so exercise generators should
//! build their collections here instead of listing open sets by hand. Every
//! space returned by this module is closed under finite intersections and
//! arbitrary unions.

use std::hash::Hash;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::set::FiniteSet;
use crate::space::TopologicalSpace;
use crate::validation::Violation;

/// Largest base set for which a power set (or a generated topology, whose
/// worst case is the power set) will be built. 2^16 open sets.
pub const MAX_POWER_SET_BASE: usize = 16;

impl<T: Eq + Hash + Clone> TopologicalSpace<T> {
    /// The discrete topology: every subset of `base` is open.
    pub fn discrete(base: FiniteSet<T>) -> Result<Self> {
        let open_sets = power_set(&base)?;
        Ok(Self::new(base, open_sets))
    }

    /// The indiscrete topology: only ∅ and `base` are open.
    pub fn indiscrete(base: FiniteSet<T>) -> Self {
        let open_sets = vec![FiniteSet::new(), base.clone()];
        Self::new(base, open_sets)
    }

    /// The topology generated by `subbasis`.
    ///
    /// Adds ∅ and `base`, closes the family under pairwise intersections
    /// (giving a basis), then under pairwise unions. Every subbasis member
    /// must be a subset of `base`.
    pub fn generate(base: FiniteSet<T>, subbasis: Vec<FiniteSet<T>>) -> Result<Self> {
        if base.len() > MAX_POWER_SET_BASE {
            return Err(Error::PowerSetTooLarge {
                len: base.len(),
                max: MAX_POWER_SET_BASE,
            });
        }

        let stray: Vec<Violation> = subbasis
            .iter()
            .enumerate()
            .filter(|(_, set)| !set.is_subset(&base))
            .map(|(index, _)| Violation::OpenSetNotSubset { index })
            .collect();
        if !stray.is_empty() {
            return Err(Error::InvalidTopology(stray));
        }

        let mut family: Vec<FiniteSet<T>> = Vec::with_capacity(subbasis.len() + 2);
        push_unique(&mut family, FiniteSet::new());
        push_unique(&mut family, base.clone());
        for set in subbasis {
            push_unique(&mut family, set);
        }

        close_under(&mut family, FiniteSet::<T>::intersection);
        close_under(&mut family, FiniteSet::<T>::union);

        tracing::debug!(
            base_len = base.len(),
            open_sets = family.len(),
            "Generated topology from subbasis"
        );

        Ok(Self::new(base, family))
    }
}

impl TopologicalSpace<Element> {
    /// The Sierpiński space: X = {0, 1}, τ = {∅, {1}, X}.
    pub fn sierpinski() -> Self {
        Self::new(
            FiniteSet::of([0, 1]),
            vec![FiniteSet::new(), FiniteSet::of([1]), FiniteSet::of([0, 1])],
        )
    }
}

/// Every subset of `base`, starting with ∅ and ending with `base`.
pub fn power_set<T: Eq + Hash + Clone>(base: &FiniteSet<T>) -> Result<Vec<FiniteSet<T>>> {
    let n = base.len();
    if n > MAX_POWER_SET_BASE {
        return Err(Error::PowerSetTooLarge {
            len: n,
            max: MAX_POWER_SET_BASE,
        });
    }

    let elements: Vec<&T> = base.iter().collect();
    let subsets = (0u32..(1u32 << n))
        .map(|mask| {
            elements
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, e)| (*e).clone())
                .collect::<FiniteSet<T>>()
        })
        .collect();
    Ok(subsets)
}

fn push_unique<T: Eq + Hash>(family: &mut Vec<FiniteSet<T>>, set: FiniteSet<T>) -> bool {
    if family.contains(&set) {
        false
    } else {
        family.push(set);
        true
    }
}

/// Adds pairwise combinations until the family is closed under `combine`.
fn close_under<T, F>(family: &mut Vec<FiniteSet<T>>, combine: F)
where
    T: Eq + Hash + Clone,
    F: Fn(&FiniteSet<T>, &FiniteSet<T>) -> FiniteSet<T>,
{
    let mut changed = true;
    while changed {
        changed = false;
        let len = family.len();
        for i in 0..len {
            for j in (i + 1)..len {
                let combined = combine(&family[i], &family[j]);
                changed |= push_unique(family, combined);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, Validator};

    #[test]
    fn discrete_is_power_set() {
        let space =
            TopologicalSpace::discrete(FiniteSet::<Element>::of(["a", "b", "c"])).unwrap();
        assert_eq!(space.open_set_count(), 8);
        assert!(space.is_open(&FiniteSet::new()));
        assert!(space.is_open(&FiniteSet::of(["a", "c"])));
        assert!(Validator::new()
            .with_union_closure(true)
            .validate(&space)
            .is_valid());
    }

    #[test]
    fn power_set_limit() {
        let base: FiniteSet<i64> = (0..17).collect();
        let err = power_set(&base).unwrap_err();
        assert!(matches!(err, Error::PowerSetTooLarge { len: 17, max: 16 }));
    }

    #[test]
    fn indiscrete_has_two_open_sets() {
        let space = TopologicalSpace::indiscrete(FiniteSet::<i64>::of([1, 2, 3]));
        assert_eq!(space.open_set_count(), 2);
        assert!(validate(&space).is_valid());
        assert_eq!(space.closure(&FiniteSet::of([2])), FiniteSet::of([1, 2, 3]));
    }

    #[test]
    fn sierpinski_is_valid() {
        let space = TopologicalSpace::<Element>::sierpinski();
        assert!(validate(&space).is_valid());
        assert!(space.is_closed(&FiniteSet::of([0])));
    }

    #[test]
    fn generated_topology_is_fully_closed() {
        let space = TopologicalSpace::generate(
            FiniteSet::<i64>::of([1, 2, 3, 4]),
            vec![FiniteSet::of([1, 2]), FiniteSet::of([2, 3])],
        )
        .unwrap();

        // ∅, X, {1,2}, {2,3}, {2}, {1,2,3}
        assert_eq!(space.open_set_count(), 6);
        assert!(space.is_open(&FiniteSet::of([2])));
        assert!(space.is_open(&FiniteSet::of([1, 2, 3])));
        assert!(Validator::new()
            .with_union_closure(true)
            .validate(&space)
            .is_valid());
    }

    #[test]
    fn generate_rejects_stray_subbasis() {
        let err = TopologicalSpace::generate(
            FiniteSet::<i64>::of([1, 2]),
            vec![FiniteSet::of([1]), FiniteSet::of([5])],
        )
        .unwrap_err();
        assert_eq!(
            err.violations(),
            Some(&[Violation::OpenSetNotSubset { index: 1 }][..])
        );
    }
}
