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

//! Monitoring combinators for the selection search
//!
//! `CompositeTreeSearchMonitor` forwards every event to its children, so a
//! run can log, count and enforce limits at the same time.
//!
//! Behavior
//! - Events reach child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    state::SearchNode,
    stats::SearchStatistics,
};
use lineup_model::{pool::CandidatePool, selection::Selection};
use num_traits::{PrimInt, Signed};

/// A monitor that forwards events to any number of child monitors.
pub struct CompositeTreeSearchMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    monitors: Vec<Box<dyn TreeSearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeTreeSearchMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeTreeSearchMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor. It will see events after every monitor added before it.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn TreeSearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn TreeSearchMonitor<T> + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn TreeSearchMonitor<T> + 'a>> for CompositeTreeSearchMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TreeSearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> TreeSearchMonitor<T> for CompositeTreeSearchMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeTreeSearchMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, pool: &CandidatePool<T>, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(pool, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn search_command(&mut self, node: &SearchNode<T>, statistics: &SearchStatistics) -> SearchCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.search_command(node, statistics);
            if !matches!(cmd, SearchCommand::Continue) {
                return cmd;
            }
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_descend(&mut self, node: &SearchNode<T>, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_descend(node, statistics);
        }
    }

    #[inline(always)]
    fn on_prune(&mut self, node: &SearchNode<T>, reason: PruneReason, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_prune(node, reason, statistics);
        }
    }

    #[inline(always)]
    fn on_selection_found(&mut self, selection: &Selection<T>, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_selection_found(selection, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    type Events = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        tag: &'static str,
        events: Events,
        stop: bool,
    }

    impl TreeSearchMonitor<i64> for Recorder {
        fn name(&self) -> &str {
            self.tag
        }

        fn on_enter_search(&mut self, _pool: &CandidatePool<i64>, _statistics: &SearchStatistics) {
            self.events.borrow_mut().push(format!("{}:enter", self.tag));
        }

        fn on_exit_search(&mut self, _statistics: &SearchStatistics) {
            self.events.borrow_mut().push(format!("{}:exit", self.tag));
        }

        fn search_command(
            &mut self,
            _node: &SearchNode<i64>,
            _statistics: &SearchStatistics,
        ) -> SearchCommand {
            self.events.borrow_mut().push(format!("{}:command", self.tag));
            if self.stop {
                SearchCommand::Terminate(format!("{} says stop", self.tag))
            } else {
                SearchCommand::Continue
            }
        }

        fn on_descend(&mut self, _node: &SearchNode<i64>, _statistics: &SearchStatistics) {
            self.events.borrow_mut().push(format!("{}:descend", self.tag));
        }

        fn on_prune(
            &mut self,
            _node: &SearchNode<i64>,
            reason: PruneReason,
            _statistics: &SearchStatistics,
        ) {
            self.events
                .borrow_mut()
                .push(format!("{}:prune:{}", self.tag, reason));
        }

        fn on_selection_found(&mut self, _selection: &Selection<i64>, _statistics: &SearchStatistics) {
            self.events.borrow_mut().push(format!("{}:selection", self.tag));
        }
    }

    fn recorder(tag: &'static str, events: &Events, stop: bool) -> Recorder {
        Recorder {
            tag,
            events: Rc::clone(events),
            stop,
        }
    }

    #[test]
    fn test_events_fan_out_in_insertion_order() {
        let events: Events = Rc::default();
        let mut composite = CompositeTreeSearchMonitor::new();
        composite.add_monitor(recorder("a", &events, false));
        composite.add_monitor(recorder("b", &events, false));
        assert_eq!(composite.len(), 2);

        let pool = CandidatePool::<i64>::try_new(vec![1.0], vec![1]).unwrap();
        let stats = SearchStatistics::default();
        let node = SearchNode::root(10);

        composite.on_enter_search(&pool, &stats);
        composite.on_descend(&node, &stats);
        composite.on_prune(&node, PruneReason::Exhausted, &stats);
        composite.on_exit_search(&stats);

        assert_eq!(
            *events.borrow(),
            vec![
                "a:enter",
                "b:enter",
                "a:descend",
                "b:descend",
                "a:prune:Exhausted",
                "b:prune:Exhausted",
                "a:exit",
                "b:exit",
            ]
        );
    }

    #[test]
    fn test_search_command_short_circuits() {
        let events: Events = Rc::default();
        let monitors: Vec<Box<dyn TreeSearchMonitor<i64>>> = vec![
            Box::new(recorder("a", &events, false)),
            Box::new(recorder("b", &events, true)),
            Box::new(recorder("c", &events, true)),
        ];
        let mut composite: CompositeTreeSearchMonitor<'_, i64> = monitors.into_iter().collect();

        let cmd = composite.search_command(&SearchNode::root(10), &SearchStatistics::default());
        assert_eq!(cmd, SearchCommand::Terminate("b says stop".to_string()));
        assert_eq!(*events.borrow(), vec!["a:command", "b:command"]);
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeTreeSearchMonitor::<i64>::default();
        assert!(composite.is_empty());
        let cmd = composite.search_command(&SearchNode::root(10), &SearchStatistics::default());
        assert_eq!(cmd, SearchCommand::Continue);
    }
}
