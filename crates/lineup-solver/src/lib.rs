// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Lineup Solver
//!
//! The entry point for picking the best five candidates within a budget.
//!
//! ## Modules
//!
//! - `config`: `SelectorConfig`, the budget, pruning threshold and optional
//!   search limits, loadable through `serde`.
//! - `error`: `SelectError`, the failures callers can observe.
//! - `selector`: the `select` functions and the reusable `Selector` facade.
//!
//! ## Usage
//!
//! ```rust
//! use lineup_solver::select;
//!
//! let values = [10.0, 9.0, 8.0, 7.0, 6.0, 5.0];
//! let costs = [200; 6];
//! let selection = select(&values, &costs, 1000).unwrap();
//! assert_eq!(selection.to_usize_array(), [0, 1, 2, 3, 4]);
//! assert_eq!(selection.total_value(), 40.0);
//! ```

pub mod config;
pub mod error;
pub mod selector;

pub use config::SelectorConfig;
pub use error::SelectError;
pub use selector::{Selector, select, select_with_config};
