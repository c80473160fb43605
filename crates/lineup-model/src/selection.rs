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

use crate::{index::CandidateIndex, pool::CandidatePool};
use num_traits::{PrimInt, Signed};

/// The number of candidates in every selection.
pub const SELECTION_SIZE: usize = 5;

/// A feasible group of exactly `SELECTION_SIZE` candidates.
///
/// Indices are strictly ascending, which is the order the search visits them
/// in. The totals are carried along so callers do not need the pool to
/// interpret the result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection<T> {
    indices: [CandidateIndex; SELECTION_SIZE],
    total_value: f64,
    total_cost: T,
}

impl<T> Selection<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `Selection`.
    ///
    /// # Panics
    ///
    /// Panics if `indices` is not strictly ascending.
    pub fn new(indices: [CandidateIndex; SELECTION_SIZE], total_value: f64, total_cost: T) -> Self {
        assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "called `Selection::new` with indices that are not strictly ascending: {:?}",
            indices
        );

        Self {
            indices,
            total_value,
            total_cost,
        }
    }

    /// Constructs a `Selection` from `indices`, summing value and cost from
    /// `pool` in index order.
    ///
    /// # Panics
    ///
    /// Panics if `indices` is not strictly ascending or an index is out of
    /// bounds for `pool`.
    pub fn from_pool(pool: &CandidatePool<T>, indices: [CandidateIndex; SELECTION_SIZE]) -> Self {
        let mut total_value = 0.0;
        let mut total_cost = T::zero();
        for &index in &indices {
            total_value += pool.value(index);
            total_cost = total_cost + pool.cost(index);
        }
        Self::new(indices, total_value, total_cost)
    }

    /// Returns the selected indices in ascending order.
    #[inline]
    pub fn indices(&self) -> &[CandidateIndex; SELECTION_SIZE] {
        &self.indices
    }

    /// Returns the selected indices as plain `usize` values.
    #[inline]
    pub fn to_usize_array(&self) -> [usize; SELECTION_SIZE] {
        self.indices.map(|i| i.get())
    }

    /// Returns the sum of the selected candidates' values.
    #[inline]
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Returns the sum of the selected candidates' costs.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Iterates over the selected indices.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateIndex> {
        self.indices.iter()
    }

    /// Returns a `Display` adapter that renders this selection as a table
    /// with per-candidate values, costs and labels taken from `pool`.
    #[inline]
    pub fn table<'a>(&'a self, pool: &'a CandidatePool<T>) -> SelectionTable<'a, T> {
        SelectionTable {
            selection: self,
            pool,
        }
    }
}

impl<T> std::fmt::Display for Selection<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let indices = self
            .indices
            .iter()
            .map(|i| i.get().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Selection([{}], value: {}, cost: {})",
            indices, self.total_value, self.total_cost
        )
    }
}

/// Tabular rendering of a `Selection` against its pool.
pub struct SelectionTable<'a, T> {
    selection: &'a Selection<T>,
    pool: &'a CandidatePool<T>,
}

impl<T> std::fmt::Display for SelectionTable<'_, T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Selection Summary")?;
        writeln!(f, "   Total Value: {}", self.selection.total_value)?;
        writeln!(f, "   Total Cost:  {}", self.selection.total_cost)?;
        writeln!(f)?;
        writeln!(
            f,
            "   {:<9} | {:<10} | {:<8} | {:<16}",
            "Index", "Value", "Cost", "Label"
        )?;
        writeln!(f, "   {:-<9}-+-{:-<10}-+-{:-<8}-+-{:-<16}", "", "", "", "")?;
        for &index in self.selection.iter() {
            writeln!(
                f,
                "   {:<9} | {:<10} | {:<8} | {:<16}",
                index.get(),
                self.pool.value(index),
                self.pool.cost(index),
                self.pool.label(index).unwrap_or("-")
            )?;
        }
        Ok(())
    }
}
