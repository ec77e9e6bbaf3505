// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded checks on real sequences.
//!
//! A sequence is only ever observed through its first `max_terms` terms, so
//! every answer here is evidence, not proof: a sequence that wanders off
//! after the bound looks identical to one that converges.

use crate::error::{check_tolerance, Error, Result};

/// A real sequence `n ↦ a(n)`, indexed from 0.
pub trait Sequence {
    fn term(&self, n: usize) -> f64;
}

impl<F> Sequence for F
where
    F: Fn(usize) -> f64,
{
    fn term(&self, n: usize) -> f64 {
        self(n)
    }
}

/// True as soon as some term `n < max_terms` is within `epsilon` of `limit`.
///
/// This detects eventual proximity, not stabilization: an oscillating
/// sequence that touches `limit` once is reported convergent.
pub fn is_convergent<S>(seq: &S, limit: f64, epsilon: f64, max_terms: usize) -> Result<bool>
where
    S: Sequence + ?Sized,
{
    check_tolerance("epsilon", epsilon)?;
    let hit = (0..max_terms).find(|&n| (seq.term(n) - limit).abs() < epsilon);
    tracing::trace!(?hit, limit, epsilon, max_terms, "convergence scan");
    Ok(hit.is_some())
}

/// Bounded Cauchy test.
///
/// True iff some tail `[N, max_terms)` with `N <= max_terms / 2` has every
/// pair of terms closer than `epsilon`. See [`cauchy_threshold`].
pub fn is_cauchy<S>(seq: &S, epsilon: f64, max_terms: usize) -> Result<bool>
where
    S: Sequence + ?Sized,
{
    Ok(cauchy_threshold(seq, epsilon, max_terms)?.is_some())
}

/// The smallest tail start `N <= max_terms / 2` such that all terms in
/// `[N, max_terms)` lie pairwise within `epsilon`, if any.
///
/// Pairwise closeness of a tail is the same as its spread `max - min` being
/// below `epsilon`, so the tails are scanned once from the back while the
/// running extremes are kept. A non-finite term disqualifies every tail
/// containing it.
///
/// All `max_terms` terms are held in memory at once (8 bytes each);
/// [`AnalysisConfig`](crate::config::AnalysisConfig) caps the bound at
/// [`MAX_TERMS`](crate::config::MAX_TERMS).
pub fn cauchy_threshold<S>(seq: &S, epsilon: f64, max_terms: usize) -> Result<Option<usize>>
where
    S: Sequence + ?Sized,
{
    check_tolerance("epsilon", epsilon)?;
    if max_terms < 2 {
        return Err(Error::InvalidSampleCount(max_terms));
    }

    let terms: Vec<f64> = (0..max_terms).map(|n| seq.term(n)).collect();
    let last_start = max_terms / 2;

    // spread_ok[n] is whether the tail starting at n qualifies
    let mut spread_ok = vec![false; last_start + 1];
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut poisoned = false;
    for n in (0..max_terms).rev() {
        let t = terms[n];
        if !t.is_finite() {
            poisoned = true;
        }
        lo = lo.min(t);
        hi = hi.max(t);
        if n <= last_start {
            spread_ok[n] = !poisoned && hi - lo < epsilon;
        }
    }

    let threshold = spread_ok.iter().position(|&ok| ok);
    tracing::debug!(?threshold, epsilon, max_terms, "cauchy tail scan");
    Ok(threshold)
}
