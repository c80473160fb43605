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

use crate::stats::SearchStatistics;
use lineup_model::selection::Selection;
use num_traits::{PrimInt, Signed};

/// What a search run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<T> {
    /// No group of `SELECTION_SIZE` candidates fits the budget.
    Infeasible,
    /// The best selection, with the whole tree explored.
    Optimal(Selection<T>),
    /// The best selection seen before the search was stopped early.
    Feasible(Selection<T>),
    /// The search was stopped before any selection was found.
    Unknown,
}

impl<T> std::fmt::Display for SearchResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResult::Infeasible => write!(f, "Infeasible"),
            SearchResult::Optimal(selection) => {
                write!(f, "Optimal(value={})", selection.total_value())
            }
            SearchResult::Feasible(selection) => {
                write!(f, "Feasible(value={})", selection.total_value())
            }
            SearchResult::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The whole tree was explored and the best selection is known.
    OptimalityProven,
    /// The whole tree was explored and no selection exists.
    InfeasibilityProven,
    /// A monitor stopped the search. The string says why.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of the selection search after termination.
#[derive(Debug, Clone)]
pub struct SelectorOutcome<T> {
    result: SearchResult<T>,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<T> SelectorOutcome<T> {
    #[inline]
    pub fn optimal(selection: Selection<T>, statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::Optimal(selection),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn infeasible(statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    /// An early stop. Without a selection the result is `Unknown`, since the
    /// unexplored part of the tree may still hold one.
    #[inline]
    pub fn aborted<R>(
        selection: Option<Selection<T>>,
        reason: R,
        statistics: SearchStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        let result = match selection {
            Some(selection) => SearchResult::Feasible(selection),
            None => SearchResult::Unknown,
        };

        Self {
            result,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    #[inline]
    pub fn result(&self) -> &SearchResult<T> {
        &self.result
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the selection, if the search found one.
    #[inline]
    pub fn selection(&self) -> Option<&Selection<T>> {
        match &self.result {
            SearchResult::Optimal(s) | SearchResult::Feasible(s) => Some(s),
            SearchResult::Infeasible | SearchResult::Unknown => None,
        }
    }

    #[inline]
    pub fn into_selection(self) -> Option<Selection<T>> {
        match self.result {
            SearchResult::Optimal(s) | SearchResult::Feasible(s) => Some(s),
            SearchResult::Infeasible | SearchResult::Unknown => None,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SearchResult::Optimal(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.result, SearchResult::Infeasible)
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::Aborted(_))
    }
}

impl<T> std::fmt::Display for SelectorOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.result, self.termination_reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_model::index::CandidateIndex;

    type I = i64;

    fn selection() -> Selection<I> {
        Selection::new([0, 1, 2, 3, 4].map(CandidateIndex::new), 40.0, 1000)
    }

    #[test]
    fn test_optimal_outcome() {
        let outcome = SelectorOutcome::optimal(selection(), SearchStatistics::default());
        assert!(outcome.is_optimal());
        assert!(!outcome.is_aborted());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
        assert_eq!(outcome.selection(), Some(&selection()));
        assert_eq!(
            format!("{}", outcome),
            "Optimal(value=40) (Optimality Proven)"
        );
        assert_eq!(outcome.into_selection(), Some(selection()));
    }

    #[test]
    fn test_infeasible_outcome() {
        let outcome = SelectorOutcome::<I>::infeasible(SearchStatistics::default());
        assert!(outcome.is_infeasible());
        assert!(outcome.selection().is_none());
        assert_eq!(format!("{}", outcome), "Infeasible (Infeasibility Proven)");
    }

    #[test]
    fn test_aborted_with_selection_is_feasible() {
        let outcome =
            SelectorOutcome::aborted(Some(selection()), "node limit", SearchStatistics::default());
        assert!(outcome.is_aborted());
        assert!(!outcome.is_optimal());
        assert!(matches!(outcome.result(), SearchResult::Feasible(_)));
        assert_eq!(outcome.selection(), Some(&selection()));
    }

    #[test]
    fn test_aborted_without_selection_is_unknown() {
        let outcome =
            SelectorOutcome::<I>::aborted(None, "time limit", SearchStatistics::default());
        assert!(matches!(outcome.result(), SearchResult::Unknown));
        assert!(!outcome.is_infeasible());
        match outcome.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "time limit"),
            other => panic!("expected Aborted, got {:?}", other),
        }
        assert_eq!(format!("{}", outcome), "Unknown (Aborted: time limit)");
    }
}
