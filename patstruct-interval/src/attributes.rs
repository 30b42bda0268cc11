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

//! Lazy enumeration of interval binary attributes.
//!
//! With `min`/`max` the smallest lower and largest upper bound, the walk is:
//!
//! 1. `[min, max]`, covering every row
//! 2. `[lb, max]` for every other distinct lower bound, ascending
//! 3. `[min, ub]` for every other distinct upper bound, descending
//! 4. bottom
//!
//! Each step inside 2 and 3 is strictly more precise than the one before.
//! Distinct bound values, not rows, drive the walk, so the sequence has
//! `|lowers| + |uppers|` attributes.

use crate::algebra::covers;
use crate::interval::{Interval, IntervalPattern};
use patstruct_core::{BinaryAttribute, Extent};
use std::iter::{FusedIterator, Rev};
use std::vec::IntoIter;

/// Sorted, deduplicated bounds of the non-bottom rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DistinctBounds {
    pub lowers: Vec<f64>,
    pub uppers: Vec<f64>,
}

impl DistinctBounds {
    pub fn from_data(data: &[IntervalPattern]) -> Self {
        let mut lowers: Vec<f64> = data.iter().flatten().map(|i| i.lower).collect();
        let mut uppers: Vec<f64> = data.iter().flatten().map(|i| i.upper).collect();
        for bounds in [&mut lowers, &mut uppers] {
            bounds.sort_by(f64::total_cmp);
            bounds.dedup();
        }
        Self { lowers, uppers }
    }

    /// No non-bottom row contributed a bound.
    pub fn is_empty(&self) -> bool {
        self.lowers.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Top,
    Lowers,
    Uppers,
    Bottom,
    Done,
}

#[derive(Debug, Clone)]
struct Walk {
    min: f64,
    max: f64,
    lowers: IntoIter<f64>,
    uppers: Rev<IntoIter<f64>>,
}

/// Iterator returned by `IntervalAlgebra::iter_bin_attributes`.
#[derive(Debug, Clone)]
pub struct IntervalBinAttributes<'a> {
    data: &'a [IntervalPattern],
    // None when every row is bottom.
    walk: Option<Walk>,
    stage: Stage,
}

impl<'a> IntervalBinAttributes<'a> {
    pub(crate) fn new(data: &'a [IntervalPattern], bounds: DistinctBounds) -> Self {
        let DistinctBounds { lowers, uppers } = bounds;
        let walk = match (lowers.split_first(), uppers.split_last()) {
            (Some((&min, rest_lowers)), Some((&max, rest_uppers))) => Some(Walk {
                min,
                max,
                lowers: rest_lowers.to_vec().into_iter(),
                uppers: rest_uppers.to_vec().into_iter().rev(),
            }),
            _ => None,
        };
        Self {
            data,
            walk,
            stage: Stage::Top,
        }
    }

    fn attribute(&self, pattern: IntervalPattern) -> BinaryAttribute<IntervalPattern> {
        let extent: Extent = self.data.iter().map(|row| covers(&pattern, row)).collect();
        BinaryAttribute::new(pattern, extent)
    }

    fn remaining(&self) -> usize {
        let (lowers, uppers) = self
            .walk
            .as_ref()
            .map_or((0, 0), |w| (w.lowers.len(), w.uppers.len()));
        match self.stage {
            Stage::Top if self.walk.is_none() => 1,
            Stage::Top => 2 + lowers + uppers,
            Stage::Lowers => 1 + lowers + uppers,
            Stage::Uppers => 1 + uppers,
            Stage::Bottom => 1,
            Stage::Done => 0,
        }
    }
}

impl Iterator for IntervalBinAttributes<'_> {
    type Item = BinaryAttribute<IntervalPattern>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stage {
                Stage::Top => {
                    let top = self.walk.as_ref().map(|w| Interval::new(w.min, w.max));
                    // All-bottom data: the intent is bottom itself.
                    self.stage = if top.is_some() { Stage::Lowers } else { Stage::Done };
                    return Some(self.attribute(top));
                }
                Stage::Lowers => {
                    let next = self
                        .walk
                        .as_mut()
                        .and_then(|w| w.lowers.next().map(|lb| Interval::new(lb, w.max)));
                    match next {
                        Some(pattern) => return Some(self.attribute(Some(pattern))),
                        None => self.stage = Stage::Uppers,
                    }
                }
                Stage::Uppers => {
                    let next = self
                        .walk
                        .as_mut()
                        .and_then(|w| w.uppers.next().map(|ub| Interval::new(w.min, ub)));
                    match next {
                        Some(pattern) => return Some(self.attribute(Some(pattern))),
                        None => self.stage = Stage::Bottom,
                    }
                }
                Stage::Bottom => {
                    self.stage = Stage::Done;
                    return Some(self.attribute(None));
                }
                Stage::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IntervalBinAttributes<'_> {}

impl FusedIterator for IntervalBinAttributes<'_> {}
