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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait, `PruneReason` and `SearchCommand`
//! for observing and controlling the take/skip search.
//!
//! Lifecycle
//! - enter → {command → descend → selection | prune}* → exit
//! - `SearchStatistics` is handed to every callback.
//!
//! `search_command` is asked once per node before the node is expanded. A
//! `Terminate` stops the run with the best selection seen so far.

use crate::{state::SearchNode, stats::SearchStatistics};
use lineup_model::{pool::CandidatePool, selection::Selection};
use num_traits::{PrimInt, Signed};

/// Why a branch was not explored further.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// The remaining budget is at or below the pruning threshold.
    BudgetThreshold,
    /// Every candidate has been decided on.
    Exhausted,
    /// The candidate at the cursor costs more than the remaining budget, so
    /// only its skip-branch exists.
    Unaffordable,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::BudgetThreshold => write!(f, "BudgetThreshold"),
            PruneReason::Exhausted => write!(f, "Exhausted"),
            PruneReason::Unaffordable => write!(f, "Unaffordable"),
        }
    }
}

/// What the search should do next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchCommand {
    /// Keep searching.
    #[default]
    Continue,
    /// Stop now. The string says why.
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate({})", reason),
        }
    }
}

/// Trait for monitoring and controlling the selection search.
pub trait TreeSearchMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, pool: &CandidatePool<T>, statistics: &SearchStatistics);
    /// Called when the search ends, however it ends.
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    /// Called before a node is expanded to decide whether to go on.
    fn search_command(
        &mut self,
        _node: &SearchNode<T>,
        _statistics: &SearchStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called when a node is popped from the work-list.
    fn on_descend(&mut self, node: &SearchNode<T>, statistics: &SearchStatistics);
    /// Called when a branch is cut.
    fn on_prune(&mut self, node: &SearchNode<T>, reason: PruneReason, statistics: &SearchStatistics);
    /// Called when a selection replaces the incumbent.
    fn on_selection_found(&mut self, selection: &Selection<T>, statistics: &SearchStatistics);
}

impl<T> std::fmt::Debug for dyn TreeSearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn TreeSearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_reason_display() {
        assert_eq!(format!("{}", PruneReason::BudgetThreshold), "BudgetThreshold");
        assert_eq!(format!("{}", PruneReason::Exhausted), "Exhausted");
        assert_eq!(format!("{}", PruneReason::Unaffordable), "Unaffordable");
    }

    #[test]
    fn test_search_command_default_and_display() {
        assert_eq!(SearchCommand::default(), SearchCommand::Continue);
        assert_eq!(
            format!("{}", SearchCommand::Terminate("limit".into())),
            "Terminate(limit)"
        );
    }
}
