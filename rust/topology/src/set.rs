// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Finite sets with hash-indexed membership.
//!
//! [`FiniteSet`] is the unit every other module works in: open sets, closed
//! sets, closures and boundaries are all finite sets over the same element
//! type. Membership is O(1) on average, so the binary operations here run in
//! O(|A| + |B|).
//!
//! Equality is order-independent: two sets are equal when they have the same
//! cardinality and every member of one is contained in the other.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::element::Element;

/// An unordered collection of unique elements.
#[derive(Clone)]
pub struct FiniteSet<T = Element> {
    members: FxHashSet<T>,
}

impl<T: Eq + Hash> FiniteSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            members: FxHashSet::default(),
        }
    }

    /// Builds a set from anything convertible into the element type.
    ///
    /// Repeated items collapse into one member.
    pub fn of<I, U>(items: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<T>,
    {
        items.into_iter().map(Into::into).collect()
    }

    /// Builds a set from a list, rejecting the first repeated item.
    ///
    /// On failure the duplicate is handed back.
    pub fn try_from_vec(items: Vec<T>) -> std::result::Result<Self, T> {
        let mut members = FxHashSet::default();
        members.reserve(items.len());
        for item in items {
            if members.contains(&item) {
                return Err(item);
            }
            members.insert(item);
        }
        Ok(Self { members })
    }

    /// Adds an element. Returns `false` if it was already present.
    pub fn insert(&mut self, element: T) -> bool {
        self.members.insert(element)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.members.contains(element)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.members.iter()
    }

    /// Returns true if every member of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.members.iter().all(|e| other.contains(e))
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns true if no member of `self` is in `other`.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !small.members.iter().any(|e| large.contains(e))
    }
}

impl<T: Eq + Hash + Clone> FiniteSet<T> {
    /// Returns a new set with the members of both sets.
    pub fn union(&self, other: &Self) -> Self {
        let mut members = self.members.clone();
        members.extend(other.members.iter().cloned());
        Self { members }
    }

    /// Returns a new set with the members common to both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .members
            .iter()
            .filter(|e| large.contains(e))
            .cloned()
            .collect()
    }

    /// Returns a new set with the members of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.members
            .iter()
            .filter(|e| !other.contains(e))
            .cloned()
            .collect()
    }
}

impl<T: Ord + Clone> FiniteSet<T> {
    /// Returns the members in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<T> {
        let mut items: Vec<T> = self.members.iter().cloned().collect();
        items.sort();
        items
    }
}

impl<T: Eq + Hash> Default for FiniteSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for FiniteSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Eq + Hash> Eq for FiniteSet<T> {}

impl<T: Eq + Hash> FromIterator<T> for FiniteSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for FiniteSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<T> IntoIterator for FiniteSet<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FiniteSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for FiniteSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members.iter()).finish()
    }
}

impl<T: fmt::Display + Ord> fmt::Display for FiniteSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items: Vec<&T> = self.members.iter().collect();
        items.sort();
        f.write_str("{")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}

impl<T: Serialize> Serialize for FiniteSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.members.iter())
    }
}

impl<'de, T> Deserialize<'de> for FiniteSet<T>
where
    T: Deserialize<'de> + Eq + Hash + fmt::Debug,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from_vec(items)
            .map_err(|dup| serde::de::Error::custom(format!("duplicate element {dup:?}")))
    }
}
