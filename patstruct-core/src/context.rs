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

//! Binarized pattern data: a classical formal context.

use crate::algebra::BinaryAttribute;
use crate::error::{PatternError, Result};
use crate::extent::Extent;
use rayon::prelude::*;
use serde::Serialize;

/// Objects x binary attributes incidence matrix.
///
/// `itemsets[i]` has one bit per attribute; bit `j` is set iff row `i` is
/// covered by `patterns[j]`. Row order follows the input data and column
/// order follows attribute enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinarizedContext<P> {
    patterns: Vec<P>,
    itemsets: Vec<Extent>,
}

impl<P: Send + Sync> BinarizedContext<P> {
    /// Transpose attribute extents (columns) into per-row itemsets.
    ///
    /// Fails with `ExtentLengthMismatch` if an attribute extent is not
    /// `n_rows` long.
    pub(crate) fn from_attributes(
        n_rows: usize,
        attributes: Vec<BinaryAttribute<P>>,
        parallel: bool,
    ) -> Result<Self> {
        if let Some(attribute) = attributes.iter().find(|a| a.extent.len() != n_rows) {
            return Err(PatternError::ExtentLengthMismatch {
                extent_len: attribute.extent.len(),
                n_rows,
            });
        }

        let itemsets = if parallel {
            (0..n_rows)
                .into_par_iter()
                .map(|row| {
                    attributes
                        .iter()
                        .map(|attribute| attribute.extent.contains(row))
                        .collect::<Extent>()
                })
                .collect()
        } else {
            let mut itemsets = vec![Extent::empty(attributes.len()); n_rows];
            for (column, attribute) in attributes.iter().enumerate() {
                for row in attribute.extent.iter_ones() {
                    itemsets[row].set(column);
                }
            }
            itemsets
        };

        let patterns = attributes
            .into_iter()
            .map(|attribute| attribute.pattern)
            .collect();

        Ok(Self { patterns, itemsets })
    }
}

impl<P> BinarizedContext<P> {
    /// Attribute patterns, in enumeration order.
    pub fn patterns(&self) -> &[P] {
        &self.patterns
    }

    /// One itemset per input row.
    pub fn itemsets(&self) -> &[Extent] {
        &self.itemsets
    }

    pub fn n_objects(&self) -> usize {
        self.itemsets.len()
    }

    pub fn n_attributes(&self) -> usize {
        self.patterns.len()
    }

    pub fn itemset(&self, row: usize) -> Result<&Extent> {
        self.itemsets.get(row).ok_or(PatternError::RowOutOfRange {
            row,
            n_rows: self.itemsets.len(),
        })
    }

    /// Rows covered by attribute `column`, read back out of the itemsets.
    pub fn attribute_extent(&self, column: usize) -> Option<Extent> {
        if column >= self.patterns.len() {
            return None;
        }
        Some(
            self.itemsets
                .iter()
                .map(|itemset| itemset.contains(column))
                .collect(),
        )
    }

    /// Patterns of the attributes satisfied by `row`, in column order.
    pub fn satisfied_patterns(&self, row: usize) -> Result<impl Iterator<Item = &P> + '_> {
        let itemset = self.itemset(row)?;
        Ok(itemset.iter_ones().map(move |column| &self.patterns[column]))
    }

    pub fn into_parts(self) -> (Vec<P>, Vec<Extent>) {
        (self.patterns, self.itemsets)
    }
}
