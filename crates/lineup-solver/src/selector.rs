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

//! Selecting the best affordable group of candidates.
//!
//! `select` is the plain entry point: two parallel slices and a budget in,
//! the optimal selection or a `SelectError` out. `Selector` keeps a
//! configuration and a reusable search engine for callers that solve many
//! pools, want statistics, or need time and node limits.

use crate::{
    config::SelectorConfig,
    error::{SelectError, budget_to_i64},
};
use lineup_bnb::{
    bnb::SelectionSolver,
    monitor::{
        composite::CompositeTreeSearchMonitor, log::LogTreeSearchMonitor,
        no_op::NoOperationMonitor, nodes::NodeLimitMonitor, time::TimeLimitMonitor,
    },
    result::{SearchResult, SelectorOutcome, TerminationReason},
};
use lineup_model::{pool::CandidatePool, selection::Selection};
use num_traits::{PrimInt, Signed};

/// Returns the highest-value group of `SELECTION_SIZE` candidates whose total
/// cost is at most `budget`, using the default pruning threshold.
///
/// # Errors
///
/// - `SelectError::InvalidInput` if the slices differ in length, a cost is
///   negative, or a value is not finite.
/// - `SelectError::NegativeBudget` if `budget < 0`.
/// - `SelectError::NoFeasibleSelection` if no group fits.
///
/// # Examples
///
/// ```rust
/// # use lineup_solver::{select, SelectError};
/// let err = select(&[5.0; 5], &[300; 5], 1000).unwrap_err();
/// assert!(matches!(err, SelectError::NoFeasibleSelection { .. }));
/// ```
pub fn select(values: &[f64], costs: &[i64], budget: i64) -> Result<Selection<i64>, SelectError> {
    select_with_config(values, costs, &SelectorConfig::default().with_budget(budget))
}

/// Like `select`, for any signed cost type and an explicit configuration.
pub fn select_with_config<T>(
    values: &[f64],
    costs: &[T],
    config: &SelectorConfig<T>,
) -> Result<Selection<T>, SelectError>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    let pool = CandidatePool::from_slices(values, costs)?;
    Selector::new(*config).select(&pool)
}

/// A configured, reusable selector.
#[derive(Debug, Clone)]
pub struct Selector<T>
where
    T: PrimInt + Signed,
{
    config: SelectorConfig<T>,
    solver: SelectionSolver<T>,
}

impl<T> Default for Selector<T>
where
    T: PrimInt + Signed + From<i16> + std::fmt::Display,
{
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl<T> Selector<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    #[inline]
    pub fn new(config: SelectorConfig<T>) -> Self {
        Self {
            config,
            solver: SelectionSolver::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SelectorConfig<T> {
        &self.config
    }

    #[inline]
    pub fn set_config(&mut self, config: SelectorConfig<T>) {
        self.config = config;
    }

    /// Runs the search on `pool` and returns the full outcome.
    ///
    /// # Errors
    ///
    /// Returns `SelectError::NegativeBudget` if the configured budget is
    /// below zero. Infeasibility is not an error here; it is reported
    /// through the outcome.
    pub fn solve(&mut self, pool: &CandidatePool<T>) -> Result<SelectorOutcome<T>, SelectError> {
        let budget = self.config.budget();
        if budget.is_negative() {
            return Err(SelectError::NegativeBudget {
                budget: budget_to_i64(budget),
            });
        }

        let threshold = self.config.prune_threshold();
        if !self.config.has_limits() && !self.config.log_progress() {
            return Ok(self
                .solver
                .solve(pool, budget, threshold, NoOperationMonitor::new()));
        }

        let mut monitor = CompositeTreeSearchMonitor::with_capacity(3);
        if let Some(limit) = self.config.time_limit() {
            monitor.add_monitor(TimeLimitMonitor::with_default_check_interval(limit));
        }
        if let Some(limit) = self.config.node_limit() {
            monitor.add_monitor(NodeLimitMonitor::new(limit));
        }
        if self.config.log_progress() {
            monitor.add_monitor(LogTreeSearchMonitor::default());
        }

        Ok(self.solver.solve(pool, budget, threshold, monitor))
    }

    /// Runs the search on `pool` and returns the selection.
    ///
    /// When a limit stops the search after a selection was found, that
    /// selection is returned even though it may not be optimal; use `solve`
    /// to tell the two apart.
    ///
    /// # Errors
    ///
    /// - `SelectError::NegativeBudget` if the configured budget is below zero.
    /// - `SelectError::NoFeasibleSelection` if no group fits.
    /// - `SelectError::Aborted` if a limit stopped the search before any
    ///   selection was found.
    pub fn select(&mut self, pool: &CandidatePool<T>) -> Result<Selection<T>, SelectError> {
        let outcome = self.solve(pool)?;
        self.resolve(pool, &outcome)
    }

    /// Turns an outcome of `solve` on `pool` into the selection or the
    /// matching error, the same way `select` does.
    pub fn resolve(
        &self,
        pool: &CandidatePool<T>,
        outcome: &SelectorOutcome<T>,
    ) -> Result<Selection<T>, SelectError> {
        let reason = match outcome.termination_reason() {
            TerminationReason::Aborted(msg) => msg.clone(),
            other => other.to_string(),
        };

        match outcome.result() {
            SearchResult::Optimal(selection) => Ok(*selection),
            SearchResult::Feasible(selection) => {
                tracing::warn!(
                    reason = %reason,
                    value = selection.total_value(),
                    "returning a selection that is not proven optimal"
                );
                Ok(*selection)
            }
            SearchResult::Infeasible => Err(SelectError::NoFeasibleSelection {
                candidates: pool.num_candidates(),
                budget: budget_to_i64(self.config.budget()),
            }),
            SearchResult::Unknown => Err(SelectError::Aborted { reason }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_model::{pool::PoolError, selection::SELECTION_SIZE};
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::time::Duration;

    fn best_by_enumeration(values: &[f64], costs: &[i64], budget: i64) -> Option<f64> {
        let n = values.len();
        let mut best: Option<f64> = None;
        for a in 0..n {
            for b in a + 1..n {
                for c in b + 1..n {
                    for d in c + 1..n {
                        for e in d + 1..n {
                            let idx = [a, b, c, d, e];
                            let cost: i64 = idx.iter().map(|&i| costs[i]).sum();
                            if cost > budget {
                                continue;
                            }
                            let value = idx.iter().fold(0.0, |acc, &i| acc + values[i]);
                            if best.is_none_or(|v| value > v) {
                                best = Some(value);
                            }
                        }
                    }
                }
            }
        }
        best
    }

    #[test]
    fn test_picks_five_highest_when_all_fit() {
        let selection = select(&[10.0, 9.0, 8.0, 7.0, 6.0, 5.0], &[200; 6], 1000).unwrap();
        assert_eq!(selection.to_usize_array(), [0, 1, 2, 3, 4]);
        assert_eq!(selection.total_value(), 40.0);
        assert_eq!(selection.total_cost(), 1000);
    }

    #[test]
    fn test_reports_no_feasible_selection() {
        let err = select(&[5.0; 5], &[300; 5], 1000).unwrap_err();
        assert_eq!(
            err,
            SelectError::NoFeasibleSelection {
                candidates: 5,
                budget: 1000
            }
        );
    }

    #[test]
    fn test_zero_budget_with_priced_candidates_is_infeasible() {
        let err = select(&[1.0; 8], &[10; 8], 0).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_fewer_than_five_candidates_is_infeasible() {
        let err = select(&[1.0; 4], &[1; 4], 1000).unwrap_err();
        assert_eq!(
            err,
            SelectError::NoFeasibleSelection {
                candidates: 4,
                budget: 1000
            }
        );
        assert!(select(&[], &[], 1000).unwrap_err().is_infeasible());
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(
            select(&[1.0; 5], &[1; 6], 1000).unwrap_err(),
            SelectError::InvalidInput(PoolError::LengthMismatch { values: 5, costs: 6 })
        );
        assert_eq!(
            select(&[1.0; 5], &[1, 1, -3, 1, 1], 1000).unwrap_err(),
            SelectError::InvalidInput(PoolError::NegativeCost { index: 2, cost: -3 })
        );
        assert_eq!(
            select(&[1.0, f64::NAN, 1.0, 1.0, 1.0], &[1; 5], 1000).unwrap_err(),
            SelectError::InvalidInput(PoolError::NonFiniteValue { index: 1 })
        );

        let err = select(&[1.0; 5], &[1; 5], -1).unwrap_err();
        assert_eq!(err, SelectError::NegativeBudget { budget: -1 });
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(2024);
        let values: Vec<f64> = (0..25).map(|_| rng.random_range(0.0..3.0)).collect();
        let costs: Vec<i64> = (0..25).map(|_| rng.random_range(20..=60) * 5).collect();

        let first = select(&values, &costs, 1000);
        for _ in 0..3 {
            assert_eq!(select(&values, &costs, 1000), first);
        }
    }

    #[test]
    fn test_pruning_does_not_change_the_selection() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let n = rng.random_range(5..=14);
            let values: Vec<f64> = (0..n).map(|_| rng.random_range(0..20) as f64).collect();
            let costs: Vec<i64> = (0..n).map(|_| rng.random_range(0..=350)).collect();

            let pruned = select_with_config(&values, &costs, &SelectorConfig::default());
            let unpruned =
                select_with_config(&values, &costs, &SelectorConfig::default().without_pruning());
            assert_eq!(pruned, unpruned);
        }
    }

    #[test]
    fn test_selector_is_reusable() {
        let mut selector = Selector::<i64>::default();
        let rich = CandidatePool::from_slices(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0], &[100; 7]).unwrap();
        let poor = CandidatePool::from_slices(&[1.0; 5], &[250; 5]).unwrap();

        let a = selector.select(&rich).unwrap();
        assert_eq!(a.to_usize_array(), [0, 2, 4, 5, 6]);
        assert!(selector.select(&poor).unwrap_err().is_infeasible());
        assert_eq!(selector.select(&rich).unwrap(), a);

        selector.set_config(selector.config().with_budget(1250));
        assert!(selector.select(&poor).is_ok());
    }

    #[test]
    fn test_solve_exposes_statistics() {
        let mut selector = Selector::<i64>::default();
        let pool = CandidatePool::from_slices(&[1.0; 9], &[100; 9]).unwrap();
        let outcome = selector.solve(&pool).unwrap();
        assert!(outcome.is_optimal());
        assert!(outcome.statistics().nodes_explored > 0);
        assert!(outcome.statistics().selections_evaluated >= 1);
    }

    #[test]
    fn test_node_limit_before_first_selection_aborts() {
        let config = SelectorConfig::<i64>::default().with_node_limit(2);
        let pool = CandidatePool::from_slices(&[1.0; 10], &[100; 10]).unwrap();
        let err = Selector::new(config).select(&pool).unwrap_err();
        assert_eq!(
            err,
            SelectError::Aborted {
                reason: "node limit of 2 reached".to_string()
            }
        );
    }

    #[test]
    fn test_node_limit_after_first_selection_returns_it() {
        let config = SelectorConfig::<i64>::default().with_node_limit(SELECTION_SIZE as u64 + 1);
        let pool = CandidatePool::from_slices(&[1.0; 10], &[100; 10]).unwrap();
        let mut selector = Selector::new(config);
        let outcome = selector.solve(&pool).unwrap();
        assert!(outcome.is_aborted());
        let selection = selector.select(&pool).unwrap();
        assert_eq!(selection.to_usize_array(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_generous_time_limit_and_logging_do_not_change_the_result() {
        let values = [2.0, 7.0, 1.0, 8.0, 2.0, 8.0, 1.0, 8.0, 2.0, 8.0];
        let costs = [120, 310, 90, 280, 150, 260, 100, 240, 130, 300];
        let plain = select(&values, &costs, 1000).unwrap();

        let config = SelectorConfig::default()
            .with_time_limit(Duration::from_secs(60))
            .with_progress_logging(true);
        let limited = select_with_config(&values, &costs, &config).unwrap();
        assert_eq!(plain, limited);
    }

    #[test]
    fn test_other_cost_widths() {
        let config = SelectorConfig::<i32>::default();
        let selection =
            select_with_config(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[100i32; 6], &config).unwrap();
        assert_eq!(selection.to_usize_array(), [1, 2, 3, 4, 5]);
        assert_eq!(selection.total_cost(), 500i32);
    }

    proptest! {
        #[test]
        fn prop_selection_is_feasible_and_optimal(
            items in proptest::collection::vec((0u32..30, 0i64..400), 0..12),
            budget in 0i64..1600,
        ) {
            let values: Vec<f64> = items.iter().map(|&(v, _)| v as f64).collect();
            let costs: Vec<i64> = items.iter().map(|&(_, c)| c).collect();

            match select(&values, &costs, budget) {
                Ok(selection) => {
                    let indices = selection.to_usize_array();
                    prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
                    prop_assert!(indices.iter().all(|&i| i < values.len()));
                    let cost: i64 = indices.iter().map(|&i| costs[i]).sum();
                    prop_assert!(cost <= budget);
                    prop_assert_eq!(
                        Some(selection.total_value()),
                        best_by_enumeration(&values, &costs, budget)
                    );
                }
                Err(err) => {
                    prop_assert!(err.is_infeasible());
                    prop_assert_eq!(best_by_enumeration(&values, &costs, budget), None);
                }
            }
        }
    }
}
