// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Interval pattern algebra.
//!
//! Less precise means wider: `a` is less precise than `b` iff `b` lies
//! within `a`. Bottom (`None`) is more precise than every interval.

use crate::attributes::{DistinctBounds, IntervalBinAttributes};
use crate::interval::IntervalPattern;
use patstruct_core::{BinAttributes, BinarizedContext, PatternAlgebra, PatternError, Result};

/// Whether pattern `a` covers row `b`, i.e. `a` is less precise than `b`.
pub(crate) fn covers(a: &IntervalPattern, b: &IntervalPattern) -> bool {
    match (a, b) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(a), Some(b)) => a.contains(b),
    }
}

/// Pattern algebra over closed real intervals.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalAlgebra;

impl IntervalAlgebra {
    pub fn new() -> Self {
        Self
    }

    /// Greatest pattern more precise than both: their intersection, or
    /// bottom when they are disjoint.
    pub fn meet_patterns(&self, a: &IntervalPattern, b: &IntervalPattern) -> IntervalPattern {
        match (a, b) {
            (Some(a), Some(b)) => a.intersection(b),
            _ => None,
        }
    }

    /// Rebuild the description of `row` from its itemset by meeting every
    /// attribute pattern the row satisfies.
    pub fn restore_pattern(
        &self,
        context: &BinarizedContext<IntervalPattern>,
        row: usize,
    ) -> Result<IntervalPattern> {
        Ok(context
            .satisfied_patterns(row)?
            .copied()
            .reduce(|acc, pattern| self.meet_patterns(&acc, &pattern))
            .flatten())
    }
}

impl PatternAlgebra for IntervalAlgebra {
    type Pattern = IntervalPattern;

    fn bottom(&self) -> IntervalPattern {
        None
    }

    fn join_patterns(&self, a: &IntervalPattern, b: &IntervalPattern) -> IntervalPattern {
        match (a, b) {
            (None, _) => *b,
            (_, None) => *a,
            (Some(a), Some(b)) => Some(a.hull(b)),
        }
    }

    fn is_less_precise(&self, a: &IntervalPattern, b: &IntervalPattern) -> bool {
        covers(a, b)
    }

    fn iter_bin_attributes<'a>(
        &'a self,
        data: &'a [IntervalPattern],
    ) -> Result<BinAttributes<'a, IntervalPattern>> {
        if data.is_empty() {
            tracing::warn!(operation = "iter_bin_attributes", "Rejecting empty dataset");
            return Err(PatternError::empty_input("iter_bin_attributes"));
        }
        let bounds = DistinctBounds::from_data(data);
        tracing::trace!(
            n_rows = data.len(),
            n_lowers = bounds.lowers.len(),
            n_uppers = bounds.uppers.len(),
            "Enumerating interval attributes"
        );
        Ok(Box::new(IntervalBinAttributes::new(data, bounds)))
    }

    fn n_bin_attributes(&self, data: &[IntervalPattern]) -> Result<usize> {
        if data.is_empty() {
            tracing::warn!(operation = "n_bin_attributes", "Rejecting empty dataset");
            return Err(PatternError::empty_input("n_bin_attributes"));
        }
        let bounds = DistinctBounds::from_data(data);
        if bounds.is_empty() {
            return Ok(1);
        }
        Ok(bounds.lowers.len() + bounds.uppers.len())
    }
}
