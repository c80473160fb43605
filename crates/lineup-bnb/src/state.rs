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

//! Search nodes and branching decisions.
//!
//! A `SearchNode` is one point in the take/skip tree: the next candidate to
//! decide on, how many candidates are already taken, the value collected so
//! far and the budget still available. Nodes are small `Copy` values so the
//! work-list can hold them directly.

use lineup_model::index::CandidateIndex;
use num_traits::{PrimInt, Signed};

/// The branching decision that produced a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Decision {
    /// The root of the search tree.
    Root,
    /// The candidate was added to the selection.
    Take(CandidateIndex),
    /// The candidate was passed over.
    Skip(CandidateIndex),
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Root => write!(f, "Root"),
            Decision::Take(index) => write!(f, "Take({})", index.get()),
            Decision::Skip(index) => write!(f, "Skip({})", index.get()),
        }
    }
}

/// One node of the take/skip search tree.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SearchNode<T> {
    cursor: CandidateIndex,
    taken: usize,
    points: f64,
    money_left: T,
    decision: Decision,
}

impl<T> SearchNode<T>
where
    T: PrimInt + Signed,
{
    /// The root node: nothing decided, nothing taken, the full budget left.
    #[inline]
    pub fn root(budget: T) -> Self {
        Self {
            cursor: CandidateIndex::new(0),
            taken: 0,
            points: 0.0,
            money_left: budget,
            decision: Decision::Root,
        }
    }

    /// The child that takes the current candidate.
    #[inline]
    pub fn take(&self, value: f64, cost: T) -> Self {
        debug_assert!(
            cost <= self.money_left,
            "called `SearchNode::take` with unaffordable cost"
        );

        Self {
            cursor: self.cursor.next(),
            taken: self.taken + 1,
            points: self.points + value,
            money_left: self.money_left - cost,
            decision: Decision::Take(self.cursor),
        }
    }

    /// The child that skips the current candidate.
    #[inline]
    pub fn skip(&self) -> Self {
        Self {
            cursor: self.cursor.next(),
            decision: Decision::Skip(self.cursor),
            ..*self
        }
    }

    /// The next candidate to decide on.
    #[inline]
    pub fn cursor(&self) -> CandidateIndex {
        self.cursor
    }

    /// The number of candidates taken on the path to this node.
    #[inline]
    pub fn taken(&self) -> usize {
        self.taken
    }

    /// The value accumulated on the path to this node.
    #[inline]
    pub fn points(&self) -> f64 {
        self.points
    }

    /// The budget still available at this node.
    #[inline]
    pub fn money_left(&self) -> T {
        self.money_left
    }

    /// The decision that led to this node.
    #[inline]
    pub fn decision(&self) -> Decision {
        self.decision
    }
}

impl<T> std::fmt::Display for SearchNode<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchNode(cursor: {}, taken: {}, points: {}, money_left: {}, via: {})",
            self.cursor.get(),
            self.taken,
            self.points,
            self.money_left,
            self.decision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node() {
        let root = SearchNode::root(1000i64);
        assert_eq!(root.cursor().get(), 0);
        assert_eq!(root.taken(), 0);
        assert_eq!(root.points(), 0.0);
        assert_eq!(root.money_left(), 1000);
        assert_eq!(root.decision(), Decision::Root);
    }

    #[test]
    fn test_take_advances_and_accumulates() {
        let root = SearchNode::root(1000i64);
        let child = root.take(7.5, 300);
        assert_eq!(child.cursor().get(), 1);
        assert_eq!(child.taken(), 1);
        assert_eq!(child.points(), 7.5);
        assert_eq!(child.money_left(), 700);
        assert_eq!(child.decision(), Decision::Take(CandidateIndex::new(0)));

        let grandchild = child.take(2.5, 700);
        assert_eq!(grandchild.taken(), 2);
        assert_eq!(grandchild.points(), 10.0);
        assert_eq!(grandchild.money_left(), 0);
    }

    #[test]
    fn test_skip_only_advances_cursor() {
        let node = SearchNode::root(500i32).take(1.0, 100);
        let skipped = node.skip();
        assert_eq!(skipped.cursor().get(), 2);
        assert_eq!(skipped.taken(), node.taken());
        assert_eq!(skipped.points(), node.points());
        assert_eq!(skipped.money_left(), node.money_left());
        assert_eq!(skipped.decision(), Decision::Skip(CandidateIndex::new(1)));
    }

    #[test]
    fn test_display() {
        let node = SearchNode::root(10i64).skip();
        assert_eq!(
            format!("{}", node),
            "SearchNode(cursor: 1, taken: 0, points: 0, money_left: 10, via: Skip(0))"
        );
    }
}
