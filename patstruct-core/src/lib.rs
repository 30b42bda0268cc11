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

//! Patstruct Core
//!
//! Pattern structures: partially ordered object descriptions that stand in
//! for attributes in Formal Concept Analysis.
//!
//! ## Contents
//!
//! - **`PatternAlgebra`**: the contract a pattern type implements, with
//!   generic extent, intent and binarization built on top of it.
//! - **`Extent`**: fixed-width bit-set over dataset rows.
//! - **`BinarizedContext`**: the objects x binary attributes matrix handed
//!   to concept-lattice engines.
//! - **`BinarizeConfig`**: settings for matrix assembly.

pub mod algebra;
pub mod config;
pub mod context;
pub mod error;
pub mod extent;

pub use algebra::{BinAttributes, BinaryAttribute, PatternAlgebra};
pub use config::{BinarizeConfig, DEFAULT_PARALLEL_ROW_THRESHOLD};
pub use context::BinarizedContext;
pub use error::{PatternError, Result};
pub use extent::Extent;
