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

//! Error types shared by every pattern algebra.

use thiserror::Error;

/// Errors raised by pattern structure operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// An operation that needs at least one object description got none.
    #[error("{operation} requires at least one object description, got an empty dataset")]
    EmptyInput { operation: &'static str },

    /// Interval whose lower bound exceeds its upper bound.
    #[error("Malformed interval: lower bound {lower} is greater than upper bound {upper}")]
    MalformedInterval { lower: f64, upper: f64 },

    /// Row index past the end of an extent or context.
    #[error("Row {row} is out of range for a context with {n_rows} rows")]
    RowOutOfRange { row: usize, n_rows: usize },

    /// Extent too long to allocate.
    #[error("Extent of {len} rows cannot be allocated")]
    ExtentTooLarge { len: usize },

    /// A pattern type yielded an attribute whose extent does not span the dataset.
    #[error("Attribute extent covers {extent_len} rows, dataset has {n_rows}")]
    ExtentLengthMismatch { extent_len: usize, n_rows: usize },

    /// Invalid or unparsable binarization settings.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PatternError {
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }
}

/// Result type for pattern structure operations.
pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message_names_operation() {
        let err = PatternError::empty_input("binarize");
        assert_eq!(err, PatternError::EmptyInput { operation: "binarize" });
        assert!(err.to_string().starts_with("binarize requires"));
    }

    #[test]
    fn test_extent_error_messages() {
        let err = PatternError::ExtentLengthMismatch { extent_len: 2, n_rows: 3 };
        assert_eq!(err.to_string(), "Attribute extent covers 2 rows, dataset has 3");
        let err = PatternError::ExtentTooLarge { len: 7 };
        assert_eq!(err.to_string(), "Extent of 7 rows cannot be allocated");
    }

    #[test]
    fn test_malformed_interval_message() {
        let err = PatternError::MalformedInterval { lower: 3.0, upper: 1.0 };
        assert_eq!(
            err.to_string(),
            "Malformed interval: lower bound 3 is greater than upper bound 1"
        );
    }
}
