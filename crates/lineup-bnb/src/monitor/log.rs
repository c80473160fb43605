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

//! Periodic progress reporting through `tracing`.

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::SearchNode,
    stats::SearchStatistics,
};
use lineup_model::{pool::CandidatePool, selection::Selection};
use num_traits::{PrimInt, Signed};
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Emits an `info` event every `log_interval`, plus one per improvement.
///
/// The clock is only read when `nodes_explored & clock_check_mask == 0`, so
/// the mask should be one less than a power of two.
#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_value: Option<f64>,
    _marker: PhantomData<T>,
}

impl<T> LogTreeSearchMonitor<T> {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_log_time: now,
            log_interval,
            clock_check_mask,
            best_value: None,
            _marker: PhantomData,
        }
    }

    fn log_progress(&mut self, node: &SearchNode<T>, stats: &SearchStatistics)
    where
        T: PrimInt + Signed + std::fmt::Display,
    {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time);
        tracing::info!(
            elapsed = ?elapsed,
            nodes = stats.nodes_explored,
            taken = node.taken(),
            cursor = node.cursor().get(),
            money_left = %node.money_left(),
            best = ?self.best_value,
            pruned = stats.total_prunings(),
            "search progress"
        );
        self.last_log_time = now;
    }
}

impl<T> Default for LogTreeSearchMonitor<T> {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogTreeSearchMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {:?}, clock_check_mask: {})",
            self.log_interval, self.clock_check_mask
        )
    }
}

impl<T> TreeSearchMonitor<T> for LogTreeSearchMonitor<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, pool: &CandidatePool<T>, _stats: &SearchStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_value = None;
        tracing::info!(candidates = pool.num_candidates(), "search started");
    }

    fn on_exit_search(&mut self, stats: &SearchStatistics) {
        tracing::info!(
            nodes = stats.nodes_explored,
            selections = stats.selections_evaluated,
            improvements = stats.selections_improved,
            pruned = stats.total_prunings(),
            best = ?self.best_value,
            elapsed = ?self.start_time.elapsed(),
            "search finished"
        );
    }

    fn on_descend(&mut self, node: &SearchNode<T>, stats: &SearchStatistics) {
        if (stats.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_progress(node, stats);
        }
    }

    fn on_prune(&mut self, _node: &SearchNode<T>, _reason: PruneReason, _stats: &SearchStatistics) {}

    fn on_selection_found(&mut self, selection: &Selection<T>, stats: &SearchStatistics) {
        self.best_value = Some(selection.total_value());
        tracing::info!(
            value = selection.total_value(),
            cost = %selection.total_cost(),
            indices = ?selection.to_usize_array(),
            nodes = stats.nodes_explored,
            "improved selection"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_model::index::CandidateIndex;

    #[test]
    fn test_tracks_best_value_and_resets_on_enter() {
        let mut monitor = LogTreeSearchMonitor::<i64>::default();
        let pool = CandidatePool::try_new(vec![1.0; 5], vec![1i64; 5]).unwrap();
        let stats = SearchStatistics::default();
        let selection = Selection::new([0, 1, 2, 3, 4].map(CandidateIndex::new), 5.0, 5);

        monitor.on_enter_search(&pool, &stats);
        monitor.on_selection_found(&selection, &stats);
        assert_eq!(monitor.best_value, Some(5.0));

        monitor.on_enter_search(&pool, &stats);
        assert_eq!(monitor.best_value, None);
    }

    #[test]
    fn test_display() {
        let monitor = LogTreeSearchMonitor::<i64>::new(Duration::from_millis(500), 1023);
        assert_eq!(
            format!("{}", monitor),
            "LogTreeSearchMonitor(log_interval: 500ms, clock_check_mask: 1023)"
        );
    }
}
