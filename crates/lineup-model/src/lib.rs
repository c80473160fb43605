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

//! # Lineup Model
//!
//! The data model for choosing five candidates under a budget. It is the
//! interchange layer between the caller (a CLI, a host binding, a test) and
//! the search engine in `lineup_bnb`.
//!
//! * **`index`**: `CandidateIndex`, a typed position in the candidate list.
//! * **`pool`**: `CandidatePool` (immutable, validated, structure of arrays)
//!   and `CandidatePoolBuilder`.
//! * **`selection`**: `Selection`, exactly `SELECTION_SIZE` ascending indices
//!   with their total value and cost.
//! * **`loading`**: a line-oriented text format for candidate lists.
//!
//! Pools are validated on construction (equal lengths, non-negative costs,
//! finite values), so the engine never has to re-check its input.

pub mod index;
pub mod loading;
pub mod pool;
pub mod selection;
