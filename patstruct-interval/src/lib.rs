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

//! Patstruct Interval
//!
//! Interval pattern structures: each object is described by a closed real
//! interval, and a group of objects by the smallest interval enclosing all
//! of theirs.
//!
//! ```rust,ignore
//! use patstruct_core::PatternAlgebra;
//! use patstruct_interval::{Interval, IntervalAlgebra};
//!
//! let data = vec![Some(Interval::new(1.0, 5.0)), Some(Interval::new(2.0, 3.0))];
//! let context = IntervalAlgebra::new().binarize(&data)?;
//! ```

pub mod algebra;
pub mod attributes;
pub mod interval;

pub use algebra::IntervalAlgebra;
pub use attributes::{DistinctBounds, IntervalBinAttributes};
pub use interval::{Interval, IntervalPattern};
