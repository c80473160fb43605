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

//! Exhaustive take/skip search for the best affordable five-candidate group.
//!
//! `SelectionSolver` owns the reusable work-list; every call to `solve`
//! opens a `SelectionSearchSession` that holds the per-run state (the path
//! being built, the incumbent, statistics and timing) and is dropped when
//! the run ends. Nothing but buffer capacity survives between runs.
//!
//! Nodes are expanded in candidate order. At each node the take-branch is
//! explored before the skip-branch, and a node is checked in this order:
//! 1. complete (`SELECTION_SIZE` taken): evaluate against the incumbent, stop;
//! 2. remaining budget at or below the pruning threshold: cut;
//! 3. no candidate left: cut;
//! 4. otherwise branch, generating the take-child only if affordable.
//!
//! Together with the strictly-greater incumbent rule this makes the first
//! optimal selection in lexicographic index order the one that is returned.

use crate::{
    incumbent::Incumbent,
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    result::{SelectorOutcome, TerminationReason},
    stack::SearchStack,
    state::{Decision, SearchNode},
    stats::SearchStatistics,
};
use lineup_model::{
    index::CandidateIndex,
    pool::CandidatePool,
    selection::{SELECTION_SIZE, Selection},
};
use num_traits::{PrimInt, Signed};

/// Returns the threshold actually used for a run on `pool`.
///
/// A branch whose remaining budget is below the cheapest cost can never take
/// another candidate, so cutting it is always safe. Cutting a branch that
/// could still afford someone is not, which is why the configured threshold
/// is clamped to `min_cost - 1`. A negative threshold disables the cut.
#[inline]
pub fn effective_prune_threshold<T>(pool: &CandidatePool<T>, prune_threshold: T) -> T
where
    T: PrimInt + Signed,
{
    match pool.min_cost() {
        Some(min_cost) => prune_threshold.min(min_cost - T::one()),
        None => prune_threshold,
    }
}

/// The search engine. Reusable across runs and pools.
#[derive(Clone, Debug)]
pub struct SelectionSolver<T>
where
    T: PrimInt + Signed,
{
    stack: SearchStack<T>,
}

impl<T> Default for SelectionSolver<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SelectionSolver<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            stack: SearchStack::new(),
        }
    }

    /// Creates a solver with a work-list sized for `num_candidates`.
    ///
    /// # Note
    ///
    /// `solve` grows the work-list on demand anyway; preallocating only moves
    /// the allocation to construction time.
    #[inline]
    pub fn preallocated(num_candidates: usize) -> Self {
        Self {
            stack: SearchStack::preallocated(num_candidates),
        }
    }

    /// Searches `pool` for the highest-value group of `SELECTION_SIZE`
    /// candidates whose total cost is at most `budget`.
    ///
    /// `prune_threshold` is clamped with `effective_prune_threshold` before
    /// use, so it never changes the result, only the work done.
    pub fn solve<S>(
        &mut self,
        pool: &CandidatePool<T>,
        budget: T,
        prune_threshold: T,
        mut monitor: S,
    ) -> SelectorOutcome<T>
    where
        S: TreeSearchMonitor<T>,
    {
        let session = SelectionSearchSession::new(self, pool, budget, prune_threshold, &mut monitor);
        let outcome = session.run();
        self.reset();
        debug_assert!(self.stack.is_empty());
        outcome
    }

    /// Bytes held by the reusable buffers.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.stack.allocated_memory_bytes()
    }

    /// Clears the work-list, keeping its capacity.
    #[inline]
    fn reset(&mut self) {
        self.stack.reset();
    }
}

/// State of a single search run.
struct SelectionSearchSession<'a, T, S>
where
    T: PrimInt + Signed,
{
    solver: &'a mut SelectionSolver<T>,
    pool: &'a CandidatePool<T>,
    monitor: &'a mut S,
    budget: T,
    prune_threshold: T,
    current: [CandidateIndex; SELECTION_SIZE],
    incumbent: Incumbent<T>,
    stats: SearchStatistics,
    start_time: std::time::Instant,
}

impl<'a, T, S> std::fmt::Debug for SelectionSearchSession<'a, T, S>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionSearchSession")
            .field("pool", &self.pool)
            .field("budget", &self.budget)
            .field("prune_threshold", &self.prune_threshold)
            .field("incumbent", &self.incumbent)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, T, S> SelectionSearchSession<'a, T, S>
where
    T: PrimInt + Signed,
    S: TreeSearchMonitor<T>,
{
    #[inline]
    fn new(
        solver: &'a mut SelectionSolver<T>,
        pool: &'a CandidatePool<T>,
        budget: T,
        prune_threshold: T,
        monitor: &'a mut S,
    ) -> Self {
        Self {
            solver,
            pool,
            monitor,
            budget,
            prune_threshold: effective_prune_threshold(pool, prune_threshold),
            current: [CandidateIndex::new(0); SELECTION_SIZE],
            incumbent: Incumbent::new(),
            stats: SearchStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> SelectorOutcome<T> {
        self.monitor.on_enter_search(self.pool, &self.stats);
        tracing::debug!(
            candidates = self.pool.num_candidates(),
            budget = self.budget.to_i64(),
            prune_threshold = self.prune_threshold.to_i64(),
            "starting selection search"
        );

        if !self.pool.has_enough_candidates() {
            tracing::debug!(
                candidates = self.pool.num_candidates(),
                required = SELECTION_SIZE,
                "not enough candidates for a selection"
            );
            return self.finish(TerminationReason::InfeasibilityProven);
        }

        self.initialize();

        let termination_reason = loop {
            let Some(node) = self.solver.stack.pop() else {
                break if self.incumbent.is_empty() {
                    TerminationReason::InfeasibilityProven
                } else {
                    TerminationReason::OptimalityProven
                };
            };

            if let SearchCommand::Terminate(msg) = self.monitor.search_command(&node, &self.stats) {
                tracing::debug!(reason = %msg, "search terminated by monitor");
                break TerminationReason::Aborted(msg);
            }

            self.stats.on_node_explored();
            self.monitor.on_descend(&node, &self.stats);
            self.process(node);
        };

        self.finish(termination_reason)
    }

    /// Makes sure the work-list will not grow mid-search and pushes the root.
    #[inline]
    fn initialize(&mut self) {
        self.solver
            .stack
            .ensure_capacity(self.pool.num_candidates());
        self.solver.stack.push(SearchNode::root(self.budget));
    }

    #[inline(always)]
    fn process(&mut self, node: SearchNode<T>) {
        // Every pending Take on the path to `node` was popped before it and
        // wrote a lower slot, so `current[..taken]` is exactly that path.
        if let Decision::Take(index) = node.decision() {
            self.current[node.taken() - 1] = index;
        }

        if node.taken() == SELECTION_SIZE {
            self.handle_complete_selection(&node);
            return;
        }

        if node.money_left() <= self.prune_threshold {
            self.stats.on_pruning_threshold();
            self.monitor
                .on_prune(&node, PruneReason::BudgetThreshold, &self.stats);
            return;
        }

        if node.cursor().get() >= self.pool.num_candidates() {
            self.stats.on_pruning_exhausted();
            self.monitor
                .on_prune(&node, PruneReason::Exhausted, &self.stats);
            return;
        }

        self.expand(&node);
    }

    /// Pushes the children of `node`. Skip goes first so that take is popped first.
    #[inline(always)]
    fn expand(&mut self, node: &SearchNode<T>) {
        let cursor = node.cursor();
        self.solver.stack.push(node.skip());

        let cost = self.pool.cost(cursor);
        if cost <= node.money_left() {
            self.solver
                .stack
                .push(node.take(self.pool.value(cursor), cost));
        } else {
            self.stats.on_pruning_unaffordable();
            self.monitor
                .on_prune(node, PruneReason::Unaffordable, &self.stats);
        }

        self.stats
            .on_stack_depth(self.solver.stack.num_entries() as u64);
    }

    #[inline(always)]
    fn handle_complete_selection(&mut self, node: &SearchNode<T>) {
        self.stats.on_selection_evaluated();

        if !self.incumbent.improves(node.points()) {
            return;
        }

        let selection = Selection::new(
            self.current,
            node.points(),
            self.budget - node.money_left(),
        );
        debug_assert!(
            selection == Selection::from_pool(self.pool, self.current),
            "path totals diverged from the pool"
        );
        self.incumbent.try_install(selection);
        self.stats.on_selection_improved();
        tracing::trace!(
            value = selection.total_value(),
            indices = ?selection.to_usize_array(),
            "incumbent improved"
        );
        self.monitor.on_selection_found(&selection, &self.stats);
    }

    fn finish(mut self, reason: TerminationReason) -> SelectorOutcome<T> {
        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        tracing::debug!(
            nodes = self.stats.nodes_explored,
            selections = self.stats.selections_evaluated,
            termination = %reason,
            elapsed = ?self.stats.time_total,
            "selection search finished"
        );

        let best = self.incumbent.into_inner();
        match (reason, best) {
            (TerminationReason::Aborted(msg), best) => SelectorOutcome::aborted(best, msg, self.stats),
            (_, Some(selection)) => SelectorOutcome::optimal(selection, self.stats),
            (_, None) => SelectorOutcome::infeasible(self.stats),
        }
    }
}
