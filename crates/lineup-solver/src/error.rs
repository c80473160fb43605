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

use lineup_model::{pool::PoolError, selection::SELECTION_SIZE};
use num_traits::PrimInt;
use thiserror::Error;

/// Why no selection was returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The candidate sequences are malformed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] PoolError),
    /// The budget is below zero.
    #[error("invalid input: budget must not be negative, got {budget}")]
    NegativeBudget { budget: i64 },
    /// No group of `SELECTION_SIZE` candidates fits the budget.
    #[error(
        "no group of {} candidates fits a budget of {budget} ({candidates} candidates available)",
        SELECTION_SIZE
    )]
    NoFeasibleSelection { candidates: usize, budget: i64 },
    /// A configured limit stopped the search before any selection was found.
    #[error("search stopped before a selection was found: {reason}")]
    Aborted { reason: String },
}

impl SelectError {
    /// Returns `true` for errors caused by the caller's input rather than by
    /// the instance itself.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SelectError::InvalidInput(_) | SelectError::NegativeBudget { .. }
        )
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self, SelectError::NoFeasibleSelection { .. })
    }
}

/// Converts a budget of any cost type for error reporting, saturating at the
/// `i64` bounds.
#[inline]
pub(crate) fn budget_to_i64<T>(budget: T) -> i64
where
    T: PrimInt,
{
    budget.to_i64().unwrap_or(if budget < T::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SelectError::NoFeasibleSelection {
            candidates: 5,
            budget: 1000,
        };
        assert_eq!(
            err.to_string(),
            "no group of 5 candidates fits a budget of 1000 (5 candidates available)"
        );

        let err = SelectError::from(PoolError::LengthMismatch { values: 3, costs: 4 });
        assert_eq!(
            err.to_string(),
            "invalid input: value and cost sequences differ in length: 3 values, 4 costs"
        );

        let err = SelectError::NegativeBudget { budget: -5 };
        assert_eq!(
            err.to_string(),
            "invalid input: budget must not be negative, got -5"
        );
    }

    #[test]
    fn test_categories() {
        assert!(SelectError::NegativeBudget { budget: -1 }.is_invalid_input());
        assert!(SelectError::InvalidInput(PoolError::NonFiniteValue { index: 0 }).is_invalid_input());
        let infeasible = SelectError::NoFeasibleSelection {
            candidates: 0,
            budget: 0,
        };
        assert!(infeasible.is_infeasible());
        assert!(!infeasible.is_invalid_input());
        assert!(
            !SelectError::Aborted {
                reason: "limit".into()
            }
            .is_invalid_input()
        );
    }

    #[test]
    fn test_budget_to_i64_saturates() {
        assert_eq!(budget_to_i64(1000i32), 1000);
        assert_eq!(budget_to_i64(i128::MAX), i64::MAX);
        assert_eq!(budget_to_i64(i128::MIN), i64::MIN);
    }
}
