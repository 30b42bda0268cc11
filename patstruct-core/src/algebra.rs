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

//! The pattern algebra contract.
//!
//! A pattern type supplies three things: a `bottom` value, the semilattice
//! `join_patterns`, and an ordered enumeration of binary attributes.
//! Everything else (precision test, extent, intent, attribute count,
//! binarization) is derived here and may be overridden with faster,
//! equivalent versions.
//!
//! Precision order: `a` is less precise than `b` iff `join(a, b) == a`.
//! `bottom` is the join identity, so it is more precise than every pattern.

use crate::config::BinarizeConfig;
use crate::context::BinarizedContext;
use crate::error::{PatternError, Result};
use crate::extent::Extent;
use std::fmt;

/// A pattern together with the rows it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryAttribute<P> {
    pub pattern: P,
    pub extent: Extent,
}

impl<P> BinaryAttribute<P> {
    pub fn new(pattern: P, extent: Extent) -> Self {
        Self { pattern, extent }
    }
}

/// Lazy sequence of binary attributes, fresh for every call.
pub type BinAttributes<'a, P> = Box<dyn Iterator<Item = BinaryAttribute<P>> + 'a>;

/// Algebra of one pattern type over a list of object descriptions.
///
/// Implementations must make `join_patterns` commutative, associative and
/// idempotent with `bottom` as identity. None of this is checked at runtime.
pub trait PatternAlgebra {
    type Pattern: Clone + PartialEq + fmt::Debug + Send + Sync;

    /// The most precise pattern ("no match").
    fn bottom(&self) -> Self::Pattern;

    /// Most precise pattern describing both `a` and `b`.
    fn join_patterns(&self, a: &Self::Pattern, b: &Self::Pattern) -> Self::Pattern;

    /// Binary attributes of `data`, from the most general to the most precise.
    ///
    /// The first attribute is the intent of `data` with an all-true extent.
    /// Fails with `EmptyInput` when `data` is empty.
    fn iter_bin_attributes<'a>(
        &'a self,
        data: &'a [Self::Pattern],
    ) -> Result<BinAttributes<'a, Self::Pattern>>;

    /// Whether `a` is less precise than `b`.
    fn is_less_precise(&self, a: &Self::Pattern, b: &Self::Pattern) -> bool {
        self.join_patterns(a, b) == *a
    }

    /// Indices of rows described by `pattern`, ascending.
    fn extent<'a>(
        &'a self,
        pattern: &'a Self::Pattern,
        data: &'a [Self::Pattern],
    ) -> impl Iterator<Item = usize> + 'a {
        data.iter()
            .enumerate()
            .filter(move |(_, row)| self.is_less_precise(pattern, row))
            .map(|(i, _)| i)
    }

    /// `extent` packed as a bit-set of `data.len()` rows.
    fn extent_bits(&self, pattern: &Self::Pattern, data: &[Self::Pattern]) -> Extent {
        data.iter()
            .map(|row| self.is_less_precise(pattern, row))
            .collect()
    }

    /// Common pattern of all rows, or `None` when `data` is empty.
    fn intent(&self, data: &[Self::Pattern]) -> Option<Self::Pattern> {
        let (first, rest) = data.split_first()?;
        Some(
            rest.iter()
                .fold(first.clone(), |acc, row| self.join_patterns(&acc, row)),
        )
    }

    /// Number of attributes `iter_bin_attributes` yields for `data`.
    fn n_bin_attributes(&self, data: &[Self::Pattern]) -> Result<usize> {
        Ok(self.iter_bin_attributes(data)?.count())
    }

    /// Binarize `data` into a formal context with default settings.
    fn binarize(&self, data: &[Self::Pattern]) -> Result<BinarizedContext<Self::Pattern>> {
        self.binarize_with(data, &BinarizeConfig::default())
    }

    fn binarize_with(
        &self,
        data: &[Self::Pattern],
        config: &BinarizeConfig,
    ) -> Result<BinarizedContext<Self::Pattern>> {
        if data.is_empty() {
            tracing::warn!(operation = "binarize", "Rejecting empty dataset");
            return Err(PatternError::empty_input("binarize"));
        }
        config.validate()?;

        let attributes: Vec<_> = match config.max_attributes {
            Some(limit) => {
                let attributes: Vec<_> = self
                    .iter_bin_attributes(data)?
                    .take(limit.saturating_add(1))
                    .collect();
                if attributes.len() > limit {
                    return Err(PatternError::Config(format!(
                        "binarization yields more than {} attributes",
                        limit
                    )));
                }
                attributes
            }
            None => self.iter_bin_attributes(data)?.collect(),
        };

        let parallel = config.is_parallel_for(data.len());
        tracing::debug!(
            n_rows = data.len(),
            n_attributes = attributes.len(),
            parallel,
            "Binarized pattern data"
        );

        BinarizedContext::from_attributes(data.len(), attributes, parallel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Thresholds on a single count: join keeps the smaller value,
    /// `u32::MAX` is bottom.
    struct ThresholdAlgebra;

    impl PatternAlgebra for ThresholdAlgebra {
        type Pattern = u32;

        fn bottom(&self) -> u32 {
            u32::MAX
        }

        fn join_patterns(&self, a: &u32, b: &u32) -> u32 {
            *a.min(b)
        }

        fn iter_bin_attributes<'a>(&'a self, data: &'a [u32]) -> Result<BinAttributes<'a, u32>> {
            if data.is_empty() {
                return Err(PatternError::empty_input("iter_bin_attributes"));
            }
            let mut values = data.to_vec();
            values.sort_unstable();
            values.dedup();
            values.push(self.bottom());
            values.dedup();
            Ok(Box::new(values.into_iter().map(move |v| {
                BinaryAttribute::new(v, data.iter().map(|x| *x >= v).collect())
            })))
        }
    }

    /// Yields a single attribute whose extent is one row short.
    struct ShortExtentAlgebra;

    impl PatternAlgebra for ShortExtentAlgebra {
        type Pattern = u32;

        fn bottom(&self) -> u32 {
            u32::MAX
        }

        fn join_patterns(&self, a: &u32, b: &u32) -> u32 {
            *a.min(b)
        }

        fn iter_bin_attributes<'a>(&'a self, data: &'a [u32]) -> Result<BinAttributes<'a, u32>> {
            let extent = Extent::full(data.len().saturating_sub(1));
            Ok(Box::new(std::iter::once(BinaryAttribute::new(0, extent))))
        }
    }

    #[test]
    fn test_binarize_reports_short_extent() {
        let err = ShortExtentAlgebra.binarize(&[1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            PatternError::ExtentLengthMismatch { extent_len: 2, n_rows: 3 }
        );
        let parallel = BinarizeConfig::default().with_parallel_row_threshold(0);
        assert!(ShortExtentAlgebra.binarize_with(&[1, 2, 3], &parallel).is_err());
    }

    #[test]
    fn test_default_is_less_precise_follows_join() {
        let algebra = ThresholdAlgebra;
        assert!(algebra.is_less_precise(&1, &5));
        assert!(!algebra.is_less_precise(&5, &1));
        assert!(algebra.is_less_precise(&3, &algebra.bottom()));
        assert!(algebra.is_less_precise(&algebra.bottom(), &algebra.bottom()));
    }

    #[test]
    fn test_extent_and_intent() {
        let algebra = ThresholdAlgebra;
        let data = [3, 5, 1];
        assert_eq!(algebra.intent(&data), Some(1));
        assert_eq!(algebra.extent(&3, &data).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(algebra.extent_bits(&3, &data).to_string(), "110");
        assert_eq!(algebra.intent(&[]), None);
    }

    #[test]
    fn test_default_attribute_count_enumerates() {
        let algebra = ThresholdAlgebra;
        assert_eq!(algebra.n_bin_attributes(&[3, 5, 1, 3]).unwrap(), 4);
        assert!(algebra.n_bin_attributes(&[]).is_err());
    }

    #[test]
    fn test_binarize_builds_incidence_matrix() {
        let algebra = ThresholdAlgebra;
        let context = algebra.binarize(&[3, 5, 1]).unwrap();
        assert_eq!(context.patterns(), &[1, 3, 5, u32::MAX]);
        let rows: Vec<String> = context.itemsets().iter().map(|s| s.to_string()).collect();
        assert_eq!(rows, vec!["1100", "1110", "1000"]);
    }

    #[test]
    fn test_binarize_empty_is_an_error() {
        let err = ThresholdAlgebra.binarize(&[]).unwrap_err();
        assert_eq!(err, PatternError::EmptyInput { operation: "binarize" });
    }

    #[test]
    fn test_binarize_respects_attribute_limit() {
        let algebra = ThresholdAlgebra;
        let config = BinarizeConfig::default().with_max_attributes(3);
        assert!(matches!(
            algebra.binarize_with(&[3, 5, 1], &config),
            Err(PatternError::Config(_))
        ));
        let config = BinarizeConfig::default().with_max_attributes(4);
        assert_eq!(algebra.binarize_with(&[3, 5, 1], &config).unwrap().n_attributes(), 4);
    }

    proptest! {
        #[test]
        fn prop_parallel_and_sequential_agree(data in proptest::collection::vec(0u32..20, 1..40)) {
            let algebra = ThresholdAlgebra;
            let sequential = algebra.binarize_with(&data, &BinarizeConfig::sequential()).unwrap();
            let parallel = algebra
                .binarize_with(&data, &BinarizeConfig::default().with_parallel_row_threshold(0))
                .unwrap();
            prop_assert_eq!(sequential, parallel);
        }

        #[test]
        fn prop_intent_covers_every_row(data in proptest::collection::vec(0u32..100, 1..30)) {
            let algebra = ThresholdAlgebra;
            let intent = algebra.intent(&data).unwrap();
            prop_assert_eq!(algebra.extent(&intent, &data).count(), data.len());
        }
    }
}
