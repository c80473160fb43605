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

//! Best-so-far selection for one search run.
//!
//! The incumbent lives inside a single search session and is discarded with
//! it, so no result can leak from one run into the next. It starts empty:
//! the first complete selection is always installed, even with a total value
//! of zero, and later ones only when strictly better. Ties therefore keep the
//! selection that was found first.

use lineup_model::selection::Selection;
use num_traits::{PrimInt, Signed};

#[derive(Debug, Clone, PartialEq)]
pub struct Incumbent<T> {
    best: Option<Selection<T>>,
}

impl<T> Default for Incumbent<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Incumbent<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new() -> Self {
        Self { best: None }
    }

    /// Returns the value of the incumbent, if any.
    #[inline]
    pub fn best_value(&self) -> Option<f64> {
        self.best.as_ref().map(|s| s.total_value())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.best.is_none()
    }

    /// Returns `true` if a selection worth `points` would replace the incumbent.
    #[inline]
    pub fn improves(&self, points: f64) -> bool {
        match self.best_value() {
            Some(best) => points > best,
            None => true,
        }
    }

    #[inline]
    pub fn into_inner(self) -> Option<Selection<T>> {
        self.best
    }

    /// Installs `candidate` if it is strictly better than the incumbent.
    /// Returns `true` if it was installed.
    #[inline]
    pub fn try_install(&mut self, candidate: Selection<T>) -> bool {
        if !self.improves(candidate.total_value()) {
            return false;
        }
        self.best = Some(candidate);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_model::{index::CandidateIndex, selection::SELECTION_SIZE};

    fn selection(raw: [usize; SELECTION_SIZE], value: f64) -> Selection<i64> {
        Selection::new(raw.map(CandidateIndex::new), value, 500)
    }

    #[test]
    fn test_initial_state() {
        let inc = Incumbent::<i64>::new();
        assert!(inc.is_empty());
        assert_eq!(inc.best_value(), None);
        assert_eq!(inc.into_inner(), None);
    }

    #[test]
    fn test_empty_incumbent_accepts_any_value() {
        let inc = Incumbent::<i32>::default();
        assert!(inc.improves(0.0));
        assert!(inc.improves(-5.0));
    }

    #[test]
    fn test_first_selection_is_installed_even_with_zero_value() {
        let mut inc = Incumbent::new();
        assert!(inc.try_install(selection([0, 1, 2, 3, 4], 0.0)));
        assert_eq!(inc.best_value(), Some(0.0));
    }

    #[test]
    fn test_reject_worse_or_equal_candidates() {
        let mut inc = Incumbent::new();
        let first = selection([0, 1, 2, 3, 4], 40.0);
        assert!(inc.try_install(first));

        assert!(!inc.try_install(selection([1, 2, 3, 4, 5], 39.0)));
        assert!(!inc.try_install(selection([0, 2, 3, 4, 5], 40.0)));
        assert_eq!(inc.best_value(), Some(40.0));

        let better = selection([0, 1, 2, 3, 5], 40.5);
        assert!(inc.try_install(better));
        assert_eq!(inc.into_inner(), Some(better));
    }
}
