// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON interchange for topological spaces.
//!
//! The wire shape is the one exercise definitions and learner submissions
//! use:
//!
//! ```json
//! { "baseSet": ["a", "b"], "openSets": [[], ["a"], ["a", "b"]] }
//! ```
//!
//! Sets are written as lists. A list that repeats an element is rejected
//! with [`Error::DuplicateElement`] rather than silently deduplicated.

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::set::FiniteSet;
use crate::space::TopologicalSpace;

/// Serializable representation of a space, sets as plain lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceSnapshot<T> {
    pub base_set: Vec<T>,
    pub open_sets: Vec<Vec<T>>,
}

impl<T: Eq + Hash + Debug> SpaceSnapshot<T> {
    /// Converts the lists into sets, failing on the first repeated element.
    pub fn into_space(self) -> Result<TopologicalSpace<T>> {
        let base_set = to_set(self.base_set)?;
        let open_sets = self
            .open_sets
            .into_iter()
            .map(to_set)
            .collect::<Result<Vec<_>>>()?;
        Ok(TopologicalSpace::new(base_set, open_sets))
    }
}

fn to_set<T: Eq + Hash + Debug>(items: Vec<T>) -> Result<FiniteSet<T>> {
    FiniteSet::try_from_vec(items).map_err(|dup| Error::DuplicateElement(format!("{dup:?}")))
}

impl<T: Eq + Hash + Debug + DeserializeOwned> TopologicalSpace<T> {
    /// Parses a space from its JSON wire shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: SpaceSnapshot<T> =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        snapshot.into_space()
    }
}

impl<T: Eq + Hash + Ord + Clone + Serialize> TopologicalSpace<T> {
    /// Creates a snapshot with every set sorted, open sets in listed order.
    pub fn to_snapshot(&self) -> SpaceSnapshot<T> {
        SpaceSnapshot {
            base_set: self.base_set.to_sorted_vec(),
            open_sets: self.open_sets.iter().map(FiniteSet::to_sorted_vec).collect(),
        }
    }

    /// Serializes the space to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_snapshot())
            .map_err(|e| Error::Serialization(e.to_string()))
    }
}
