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

//! Fixed-width bit-set over the rows of a dataset.
//!
//! Bit `i` stands for row `i` of the input list. An `Extent` is built once
//! and never resized; set operations return new values.

use crate::error::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const WORD_BITS: usize = 64;

/// Immutable bit vector, one bit per object.
///
/// Bits past `len` in the last word are always zero, so word-wise
/// equality and popcount are exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ExtentRepr", try_from = "ExtentRepr")]
pub struct Extent {
    len: usize,
    words: Vec<u64>,
}

/// Wire form: length plus the indices of set bits.
#[derive(Serialize, Deserialize)]
struct ExtentRepr {
    len: usize,
    ones: Vec<usize>,
}

impl From<Extent> for ExtentRepr {
    fn from(extent: Extent) -> Self {
        Self {
            len: extent.len,
            ones: extent.iter_ones().collect(),
        }
    }
}

impl TryFrom<ExtentRepr> for Extent {
    type Error = PatternError;

    fn try_from(repr: ExtentRepr) -> Result<Self> {
        Extent::from_indices(repr.len, repr.ones)
    }
}

fn word_count(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

impl Extent {
    /// All-false extent of `len` rows.
    pub fn empty(len: usize) -> Self {
        Self {
            len,
            words: vec![0; word_count(len)],
        }
    }

    /// Like `empty`, but reports allocation failure instead of aborting.
    pub fn try_empty(len: usize) -> Result<Self> {
        let n_words = word_count(len);
        let mut words = Vec::new();
        words
            .try_reserve_exact(n_words)
            .map_err(|_| PatternError::ExtentTooLarge { len })?;
        words.resize(n_words, 0);
        Ok(Self { len, words })
    }

    /// All-true extent of `len` rows.
    pub fn full(len: usize) -> Self {
        let mut words = vec![u64::MAX; word_count(len)];
        let tail = len % WORD_BITS;
        if tail != 0 {
            if let Some(last) = words.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        Self { len, words }
    }

    /// Build an extent of `len` rows with the given rows set.
    ///
    /// Fails with `RowOutOfRange` if any index is `>= len`.
    pub fn from_indices<I>(len: usize, indices: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut extent = Self::try_empty(len)?;
        for row in indices {
            if row >= len {
                return Err(PatternError::RowOutOfRange { row, n_rows: len });
            }
            extent.set(row);
        }
        Ok(extent)
    }

    pub(crate) fn set(&mut self, row: usize) {
        self.words[row / WORD_BITS] |= 1u64 << (row % WORD_BITS);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether row `row` is a member. Rows past the end are never members.
    pub fn contains(&self, row: usize) -> bool {
        row < self.len && self.words[row / WORD_BITS] & (1u64 << (row % WORD_BITS)) != 0
    }

    /// Number of member rows.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Member rows in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let offset = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(w * WORD_BITS + offset)
            })
        })
    }

    /// Whether every member of `self` is a member of `other`.
    ///
    /// # Panics
    /// Panics if the extents have different lengths.
    pub fn is_subset(&self, other: &Extent) -> bool {
        self.assert_same_len(other);
        self.words
            .iter()
            .zip(&other.words)
            .all(|(a, b)| a & !b == 0)
    }

    /// Bitwise AND.
    ///
    /// # Panics
    /// Panics if the extents have different lengths.
    pub fn intersection(&self, other: &Extent) -> Extent {
        self.assert_same_len(other);
        Self {
            len: self.len,
            words: self.words.iter().zip(&other.words).map(|(a, b)| a & b).collect(),
        }
    }

    /// Bitwise OR.
    ///
    /// # Panics
    /// Panics if the extents have different lengths.
    pub fn union(&self, other: &Extent) -> Extent {
        self.assert_same_len(other);
        Self {
            len: self.len,
            words: self.words.iter().zip(&other.words).map(|(a, b)| a | b).collect(),
        }
    }

    fn assert_same_len(&self, other: &Extent) {
        assert_eq!(
            self.len, other.len,
            "Extent length mismatch: {} vs {}",
            self.len, other.len
        );
    }
}

impl FromIterator<bool> for Extent {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut words: Vec<u64> = Vec::new();
        let mut len = 0;
        for bit in iter {
            if len % WORD_BITS == 0 {
                words.push(0);
            }
            if bit {
                words[len / WORD_BITS] |= 1u64 << (len % WORD_BITS);
            }
            len += 1;
        }
        Self { len, words }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.len {
            f.write_str(if self.contains(row) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
