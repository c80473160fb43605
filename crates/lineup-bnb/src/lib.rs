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

//! Lineup-BnB: exhaustive backtracking for five-candidate selection
//!
//! Finds, among all groups of exactly `SELECTION_SIZE` candidates whose total
//! cost fits a budget, the one with the highest total value. The search walks
//! the binary "take candidate i / skip candidate i" tree in index order, with
//! two cuts: a complete selection is never extended, and a branch whose
//! remaining budget is at or below the pruning threshold is abandoned.
//!
//! Core flow
//! - Provide a validated `lineup_model::pool::CandidatePool<T>`.
//! - Pick a budget and a pruning threshold.
//! - Optionally attach monitors (logging, time or node limits).
//! - Run `bnb::SelectionSolver::solve` and inspect the `SelectorOutcome`.
//!
//! Guarantees
//! - Deterministic: take is explored before skip and ties keep the first
//!   selection found, so equal inputs always give equal outputs.
//! - The threshold is clamped per run to `min(threshold, min_cost - 1)`, so
//!   the budget cut can only save work, never drop an optimum.
//! - No state survives a `solve` call besides reusable buffer capacity.
//!
//! Module map
//! - `bnb`: the solver engine and per-run session.
//! - `monitor`: tree-search monitors (no-op, composite, log, limits).
//! - `result`: outcomes with termination reasons.
//! - `state`: search nodes and branching decisions.
//! - `stats`: counters and timing.

pub mod bnb;
mod incumbent;
pub mod monitor;
pub mod result;
mod stack;
pub mod state;
pub mod stats;
