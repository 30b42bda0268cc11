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

//! Binarization settings.
//!
//! Settings only affect how the incidence matrix is assembled, never its
//! contents: the same dataset binarizes to the same context under any config.

use crate::error::{PatternError, Result};
use serde::{Deserialize, Serialize};

/// Default row count at which itemsets are built on the rayon pool.
pub const DEFAULT_PARALLEL_ROW_THRESHOLD: usize = 4096;

/// Configuration for `PatternAlgebra::binarize_with`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarizeConfig {
    /// Build per-row itemsets in parallel once the dataset has at least
    /// this many rows.
    #[serde(default = "default_parallel_row_threshold")]
    pub parallel_row_threshold: usize,

    /// Upper limit on the number of binary attributes.
    /// None = unlimited
    #[serde(default)]
    pub max_attributes: Option<usize>,
}

fn default_parallel_row_threshold() -> usize {
    DEFAULT_PARALLEL_ROW_THRESHOLD
}

impl Default for BinarizeConfig {
    fn default() -> Self {
        Self {
            parallel_row_threshold: default_parallel_row_threshold(),
            max_attributes: None,
        }
    }
}

impl BinarizeConfig {
    /// Never use the thread pool.
    pub fn sequential() -> Self {
        Self {
            parallel_row_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Parse settings from TOML. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).map_err(|e| PatternError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_attributes(mut self, max_attributes: usize) -> Self {
        self.max_attributes = Some(max_attributes);
        self
    }

    pub fn with_parallel_row_threshold(mut self, threshold: usize) -> Self {
        self.parallel_row_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attributes == Some(0) {
            return Err(PatternError::Config(
                "max_attributes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a dataset of `n_rows` rows takes the parallel path.
    pub fn is_parallel_for(&self, n_rows: usize) -> bool {
        n_rows >= self.parallel_row_threshold
    }
}
