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

use crate::{
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    state::SearchNode,
    stats::SearchStatistics,
};
use lineup_model::{pool::CandidatePool, selection::Selection};
use num_traits::{PrimInt, Signed};
use std::marker::PhantomData;

/// A monitor that terminates the search once `node_limit` nodes were explored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLimitMonitor<T> {
    node_limit: u64,
    _marker: PhantomData<T>,
}

impl<T> NodeLimitMonitor<T> {
    #[inline]
    pub fn new(node_limit: u64) -> Self {
        Self {
            node_limit,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn node_limit(&self) -> u64 {
        self.node_limit
    }
}

impl<T> TreeSearchMonitor<T> for NodeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(&mut self, _pool: &CandidatePool<T>, _stats: &SearchStatistics) {}
    fn on_exit_search(&mut self, _stats: &SearchStatistics) {}

    fn search_command(&mut self, _node: &SearchNode<T>, stats: &SearchStatistics) -> SearchCommand {
        if stats.nodes_explored >= self.node_limit {
            return SearchCommand::Terminate(format!(
                "node limit of {} reached",
                self.node_limit
            ));
        }
        SearchCommand::Continue
    }

    fn on_descend(&mut self, _node: &SearchNode<T>, _stats: &SearchStatistics) {}
    fn on_prune(&mut self, _node: &SearchNode<T>, _reason: PruneReason, _stats: &SearchStatistics) {}
    fn on_selection_found(&mut self, _selection: &Selection<T>, _stats: &SearchStatistics) {}
}
