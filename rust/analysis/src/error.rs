// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for metric and numerical analysis operations.

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating metrics, functions or sequences.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Two vectors combined by an operation have different lengths.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Fewer than two sample points were requested.
    #[error("at least 2 samples are required, got {0}")]
    InvalidSampleCount(usize),

    /// A term bound above what the configuration accepts.
    #[error("max_terms {requested} exceeds the limit of {max}")]
    TooManyTerms { requested: usize, max: usize },

    /// Fixed-point iteration exhausted its bound without meeting tolerance.
    #[error("fixed-point iteration did not converge after {iterations} iterations (last value {last})")]
    NonConvergent { iterations: usize, last: f64 },

    /// A tolerance parameter is not a finite positive number.
    #[error("{name} must be finite and positive, got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },

    /// A p-norm exponent that is not positive (or NaN).
    #[error("norm exponent must be positive, got {0}")]
    InvalidExponent(f64),

    /// A sampling interval with a non-finite bound.
    #[error("invalid domain [{start}, {end}]")]
    InvalidDomain { start: f64, end: f64 },

    /// A Lipschitz constant that is negative or not finite.
    #[error("Lipschitz constant must be finite and non-negative, got {0}")]
    InvalidLipschitzConstant(f64),

    /// A function produced a non-finite value at a sample point.
    #[error("function is not finite at x = {at}")]
    NonFinite { at: f64 },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Fails with [`Error::InvalidTolerance`] unless `value` is finite and > 0.
pub(crate) fn check_tolerance(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidTolerance { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_check() {
        assert!(check_tolerance("epsilon", 1e-10).is_ok());
        assert_eq!(
            check_tolerance("epsilon", 0.0),
            Err(Error::InvalidTolerance {
                name: "epsilon",
                value: 0.0
            })
        );
        assert!(check_tolerance("delta", f64::NAN).is_err());
        assert!(check_tolerance("delta", f64::INFINITY).is_err());
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::DimensionMismatch { left: 2, right: 3 }.to_string(),
            "dimension mismatch: 2 vs 3"
        );
        assert_eq!(
            Error::InvalidSampleCount(1).to_string(),
            "at least 2 samples are required, got 1"
        );
    }
}
