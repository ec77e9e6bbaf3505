// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vector arithmetic on plain `f64` slices.
//!
//! Inputs are borrowed slices so callers can pass arrays, `Vec`s or nalgebra
//! storage alike; results are owned [`Vector`]s. Binary operations fail with
//! [`Error::DimensionMismatch`] instead of panicking on unequal lengths.

use nalgebra::{DVector, DVectorView};

use crate::error::{Error, Result};

/// Owned real vector.
pub type Vector = DVector<f64>;

fn view(v: &[f64]) -> DVectorView<'_, f64> {
    DVectorView::from_slice(v, v.len())
}

fn check_dims(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        })
    }
}

pub fn vector_add(a: &[f64], b: &[f64]) -> Result<Vector> {
    check_dims(a, b)?;
    Ok(view(a) + view(b))
}

pub fn vector_subtract(a: &[f64], b: &[f64]) -> Result<Vector> {
    check_dims(a, b)?;
    Ok(view(a) - view(b))
}

pub fn vector_scale(v: &[f64], scalar: f64) -> Vector {
    view(v) * scalar
}

pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dims(a, b)?;
    Ok(view(a).dot(&view(b)))
}

/// The p-norm `(Σ|v_i|^p)^(1/p)`, or `max |v_i|` for `p = f64::INFINITY`.
///
/// `p` must be positive. For `0 < p < 1` the formula is still evaluated,
/// although the result is then not a norm (the triangle inequality fails).
/// The empty vector has norm 0.
pub fn vector_norm(v: &[f64], p: f64) -> Result<f64> {
    if p.is_nan() || p <= 0.0 {
        return Err(Error::InvalidExponent(p));
    }
    if v.is_empty() {
        return Ok(0.0);
    }

    let v = view(v);
    let norm = if p == f64::INFINITY {
        v.amax()
    } else if p == 1.0 {
        v.lp_norm(1)
    } else if p == 2.0 {
        v.norm()
    } else {
        v.iter().map(|x| x.abs().powf(p)).sum::<f64>().powf(p.recip())
    };
    Ok(norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn add_subtract_scale() {
        assert_eq!(
            vector_add(&[1.0, 2.0], &[3.0, 4.0]).unwrap().as_slice(),
            &[4.0, 6.0]
        );
        assert_eq!(
            vector_subtract(&[1.0, 2.0], &[3.0, 5.0]).unwrap().as_slice(),
            &[-2.0, -3.0]
        );
        assert_eq!(vector_scale(&[1.0, -2.0], 3.0).as_slice(), &[3.0, -6.0]);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = vector_add(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { left: 1, right: 2 });
        assert!(vector_subtract(&[1.0, 2.0, 3.0], &[]).is_err());
        assert!(dot_product(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn dot() {
        assert_relative_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]).unwrap(), 12.0);
    }

    #[test]
    fn norms() {
        let v = [3.0, -4.0];
        assert_relative_eq!(vector_norm(&v, 1.0).unwrap(), 7.0);
        assert_relative_eq!(vector_norm(&v, 2.0).unwrap(), 5.0);
        assert_relative_eq!(vector_norm(&v, f64::INFINITY).unwrap(), 4.0);
        assert_relative_eq!(
            vector_norm(&v, 3.0).unwrap(),
            (27.0f64 + 64.0).powf(1.0 / 3.0),
            epsilon = 1e-12
        );
        assert_eq!(vector_norm(&[], 2.0).unwrap(), 0.0);
    }

    #[test]
    fn fractional_exponent_uses_the_formula() {
        // (1^0.5 + 1^0.5)^2
        assert_relative_eq!(vector_norm(&[1.0, 1.0], 0.5).unwrap(), 4.0);
        assert_relative_eq!(
            vector_norm(&[4.0, -9.0], 0.5).unwrap(),
            25.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn bad_exponent() {
        assert_eq!(
            vector_norm(&[1.0], 0.0).unwrap_err(),
            Error::InvalidExponent(0.0)
        );
        assert!(vector_norm(&[1.0], -2.0).is_err());
        assert!(vector_norm(&[1.0], f64::NAN).is_err());
        assert!(vector_norm(&[1.0], f64::NEG_INFINITY).is_err());
    }
}
