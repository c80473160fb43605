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

use crate::state::SearchNode;

/// The LIFO work-list of pending search nodes.
///
/// The solver pushes the skip child before the take child, so the take
/// branch is always popped (and fully explored) first. This reproduces the
/// visiting order of a recursive take-then-skip search without recursion.
///
/// Performance notes:
/// - `preallocated` and `ensure_capacity` size the stack for the worst case
///   (one pending skip node per candidate plus the node being expanded), so
///   the hot loop never reallocates.
/// - `reset` keeps the allocation for the next run.
#[derive(Clone, Debug)]
pub struct SearchStack<T> {
    entries: Vec<SearchNode<T>>,
}

impl<T> Default for SearchStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchStack<T> {
    /// Creates a new, empty `SearchStack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a `SearchStack` sized for a pool of `num_candidates`.
    #[inline]
    pub fn preallocated(num_candidates: usize) -> Self {
        Self {
            entries: Vec::with_capacity(Self::required_capacity(num_candidates)),
        }
    }

    #[inline(always)]
    fn required_capacity(num_candidates: usize) -> usize {
        num_candidates.saturating_add(2)
    }

    /// Ensures the stack can hold the deepest search over `num_candidates`.
    #[inline]
    pub fn ensure_capacity(&mut self, num_candidates: usize) {
        let required = Self::required_capacity(num_candidates);
        if self.entries.capacity() < required {
            self.entries.reserve(required - self.entries.len());
        }
    }

    /// Returns the number of pending nodes.
    #[inline]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no nodes are pending (search exhausted).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pushes a node.
    #[inline]
    pub fn push(&mut self, node: SearchNode<T>) {
        self.entries.push(node);
    }

    /// Pops the most recently pushed node.
    #[inline]
    pub fn pop(&mut self) -> Option<SearchNode<T>> {
        self.entries.pop()
    }

    /// Clears all entries but keeps the allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Returns the allocated memory in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.entries.capacity() * core::mem::size_of::<SearchNode<T>>()
    }
}

impl<T> std::fmt::Display for SearchStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchStack(entries: {})", self.entries.len())
    }
}
