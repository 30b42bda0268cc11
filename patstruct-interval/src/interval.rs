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

//! Closed real intervals.

use patstruct_core::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed range `[lower, upper]`.
///
/// `lower <= upper` is a caller precondition. `Interval::new` does not
/// check it; use `Interval::checked` for untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

/// Interval pattern: `None` is bottom, the empty description that no
/// real interval is covered by.
pub type IntervalPattern = Option<Interval>;

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Like `new`, but rejects `lower > upper` and NaN bounds.
    pub fn checked(lower: f64, upper: f64) -> Result<Self> {
        if lower <= upper {
            Ok(Self { lower, upper })
        } else {
            Err(PatternError::MalformedInterval { lower, upper })
        }
    }

    /// Degenerate interval `[value, value]`.
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether `other` lies within `self`.
    pub fn contains(&self, other: &Interval) -> bool {
        self.lower <= other.lower && other.lower <= other.upper && other.upper <= self.upper
    }

    /// Smallest interval enclosing both.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval::new(self.lower.min(other.lower), self.upper.max(other.upper))
    }

    /// Common part of both, `None` if they are disjoint.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let lower = self.lower.max(other.lower);
        let upper = self.upper.min(other.upper);
        (lower <= upper).then(|| Interval::new(lower, upper))
    }
}

impl From<(f64, f64)> for Interval {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_rejects_reversed_bounds() {
        assert_eq!(
            Interval::checked(3.0, 1.0).unwrap_err(),
            PatternError::MalformedInterval { lower: 3.0, upper: 1.0 }
        );
        assert!(Interval::checked(f64::NAN, 1.0).is_err());
        assert_eq!(Interval::checked(1.0, 1.0).unwrap(), Interval::point(1.0));
    }

    #[test]
    fn test_contains() {
        let wide = Interval::new(0.0, 10.0);
        let narrow = Interval::new(2.0, 3.0);
        assert!(wide.contains(&narrow));
        assert!(!narrow.contains(&wide));
        assert!(narrow.contains(&narrow));
        assert!(!wide.contains(&Interval::new(5.0, 11.0)));
    }

    #[test]
    fn test_hull_and_intersection() {
        let a = Interval::new(1.0, 5.0);
        let b = Interval::new(2.0, 8.0);
        assert_eq!(a.hull(&b), Interval::new(1.0, 8.0));
        assert_eq!(a.intersection(&b), Some(Interval::new(2.0, 5.0)));
        assert_eq!(a.intersection(&Interval::new(6.0, 7.0)), None);
        assert_eq!(a.intersection(&Interval::new(5.0, 7.0)), Some(Interval::point(5.0)));
    }

    #[test]
    fn test_display_and_width() {
        let interval = Interval::from((0.5, 2.0));
        assert_eq!(interval.to_string(), "[0.5, 2]");
        assert_eq!(interval.width(), 1.5);
    }
}
