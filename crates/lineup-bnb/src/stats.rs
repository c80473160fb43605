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

use std::time::Duration;

/// Statistics collected during one run of the selection search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Total nodes popped from the work-list.
    pub nodes_explored: u64,
    /// Complete selections of `SELECTION_SIZE` candidates reached.
    pub selections_evaluated: u64,
    /// Complete selections that replaced the incumbent.
    pub selections_improved: u64,
    /// Branches cut because the remaining budget was at or below the threshold.
    pub prunings_threshold: u64,
    /// Branches cut because no candidates were left to decide on.
    pub prunings_exhausted: u64,
    /// Take-branches never generated because the candidate was too expensive.
    pub prunings_unaffordable: u64,
    /// The largest number of pending nodes held by the work-list.
    pub max_stack_depth: u64,
    /// Total time spent in the search.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_selection_evaluated(&mut self) {
        self.selections_evaluated = self.selections_evaluated.saturating_add(1);
    }

    #[inline]
    pub fn on_selection_improved(&mut self) {
        self.selections_improved = self.selections_improved.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_threshold(&mut self) {
        self.prunings_threshold = self.prunings_threshold.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_exhausted(&mut self) {
        self.prunings_exhausted = self.prunings_exhausted.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_unaffordable(&mut self) {
        self.prunings_unaffordable = self.prunings_unaffordable.saturating_add(1);
    }

    #[inline]
    pub fn on_stack_depth(&mut self, depth: u64) {
        self.max_stack_depth = self.max_stack_depth.max(depth);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Total number of cuts of any kind.
    #[inline]
    pub fn total_prunings(&self) -> u64 {
        self.prunings_threshold
            .saturating_add(self.prunings_exhausted)
            .saturating_add(self.prunings_unaffordable)
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lineup-BnB Search Statistics:")?;
        writeln!(f, "  Nodes explored:           {}", self.nodes_explored)?;
        writeln!(f, "  Selections evaluated:     {}", self.selections_evaluated)?;
        writeln!(f, "  Selections improved:      {}", self.selections_improved)?;
        writeln!(f, "  Prunings (threshold):     {}", self.prunings_threshold)?;
        writeln!(f, "  Prunings (exhausted):     {}", self.prunings_exhausted)?;
        writeln!(f, "  Prunings (unaffordable):  {}", self.prunings_unaffordable)?;
        writeln!(f, "  Max stack depth:          {}", self.max_stack_depth)?;
        writeln!(f, "  Total time:               {:.2?}", self.time_total)?;
        Ok(())
    }
}
