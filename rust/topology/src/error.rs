// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for finite topology operations.

use crate::validation::Violation;

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, parsing or validating a space.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The candidate space violates one or more topology axioms.
    #[error("invalid topology: {}", join_codes(.0))]
    InvalidTopology(Vec<Violation>),

    /// A listed set contains the same element twice.
    #[error("duplicate element in set: {0}")]
    DuplicateElement(String),

    /// A power set was requested over too many elements.
    #[error("power set of {len} elements exceeds the limit of {max}")]
    PowerSetTooLarge { len: usize, max: usize },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

fn join_codes(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Returns the violated axioms if this is an [`Error::InvalidTopology`].
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Error::InvalidTopology(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_topology_lists_codes() {
        let err = Error::InvalidTopology(vec![
            Violation::MissingEmptySet,
            Violation::IntersectionNotOpen { left: 1, right: 2 },
        ]);
        assert_eq!(
            err.to_string(),
            "invalid topology: missing-empty-set, intersection-not-open (open sets 1 and 2)"
        );
        assert_eq!(err.violations().map(|v| v.len()), Some(2));
    }

    #[test]
    fn other_errors_have_no_violations() {
        let err = Error::PowerSetTooLarge { len: 30, max: 16 };
        assert!(err.violations().is_none());
        assert_eq!(err.to_string(), "power set of 30 elements exceeds the limit of 16");
    }
}
