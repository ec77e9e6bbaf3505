// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed sampling intervals.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The closed interval `[start, end]` that sampled checks run over.
///
/// `start > end` is allowed; points are then produced in descending order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Creates an interval, rejecting non-finite bounds.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if start.is_finite() && end.is_finite() {
            Ok(Self { start, end })
        } else {
            Err(Error::InvalidDomain { start, end })
        }
    }

    pub fn width(&self) -> f64 {
        (self.end - self.start).abs()
    }

    /// `samples` equally spaced points, both endpoints included.
    pub fn sample_points(&self, samples: usize) -> Result<Vec<f64>> {
        if samples < 2 {
            return Err(Error::InvalidSampleCount(samples));
        }
        if !(self.start.is_finite() && self.end.is_finite()) {
            return Err(Error::InvalidDomain {
                start: self.start,
                end: self.end,
            });
        }

        let step = (self.end - self.start) / (samples - 1) as f64;
        Ok((0..samples)
            .map(|i| {
                if i == samples - 1 {
                    self.end
                } else {
                    self.start + i as f64 * step
                }
            })
            .collect())
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = Error;

    fn try_from((start, end): (f64, f64)) -> Result<Self> {
        Self::new(start, end)
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = Error;

    fn try_from([start, end]: [f64; 2]) -> Result<Self> {
        Self::new(start, end)
    }
}
