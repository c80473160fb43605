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

use lineup_core::num::constants::MinusOne;
use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The budget used when none is configured.
///
/// Typed `i16` because it is the narrowest signed type holding both defaults:
/// `Default` is available for every cost type that converts losslessly from
/// `i16`, and absent for `i8`, which cannot represent a budget of 1000.
pub const DEFAULT_BUDGET: i16 = 1000;

/// The pruning threshold used when none is configured.
pub const DEFAULT_PRUNE_THRESHOLD: i16 = 140;

/// Parameters of a selection run.
///
/// The pruning threshold is a performance knob: the search clamps it below
/// the cheapest cost in the pool, so it never changes which selection is
/// returned. A negative threshold turns the cut off.
///
/// Missing fields fall back to their defaults when deserializing:
///
/// ```rust
/// # use lineup_solver::config::SelectorConfig;
/// let config: SelectorConfig<i64> = serde_json::from_str(r#"{ "budget": 850 }"#).unwrap();
/// assert_eq!(config.budget(), 850);
/// assert_eq!(config.prune_threshold(), 140);
/// assert_eq!(config.time_limit(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    default,
    bound(
        serialize = "T: Serialize",
        deserialize = "T: Deserialize<'de> + PrimInt + Signed + From<i16>"
    )
)]
pub struct SelectorConfig<T> {
    budget: T,
    prune_threshold: T,
    time_limit_ms: Option<u64>,
    node_limit: Option<u64>,
    log_progress: bool,
}

impl<T> Default for SelectorConfig<T>
where
    T: PrimInt + Signed + From<i16>,
{
    fn default() -> Self {
        Self {
            budget: <T as From<i16>>::from(DEFAULT_BUDGET),
            prune_threshold: <T as From<i16>>::from(DEFAULT_PRUNE_THRESHOLD),
            time_limit_ms: None,
            node_limit: None,
            log_progress: false,
        }
    }
}

impl<T> SelectorConfig<T>
where
    T: PrimInt + Signed,
{
    /// Creates a configuration with the given budget and threshold and no limits.
    #[inline]
    pub fn new(budget: T, prune_threshold: T) -> Self {
        Self {
            budget,
            prune_threshold,
            time_limit_ms: None,
            node_limit: None,
            log_progress: false,
        }
    }

    #[inline]
    pub fn with_budget(mut self, budget: T) -> Self {
        self.budget = budget;
        self
    }

    #[inline]
    pub fn with_prune_threshold(mut self, prune_threshold: T) -> Self {
        self.prune_threshold = prune_threshold;
        self
    }

    /// Disables the budget-threshold cut.
    #[inline]
    pub fn without_pruning(mut self) -> Self
    where
        T: MinusOne,
    {
        self.prune_threshold = T::MINUS_ONE;
        self
    }

    /// Stops the search after `limit`. The clock is checked every few
    /// thousand nodes, so the limit may be overshot slightly.
    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Stops the search after `limit` explored nodes.
    #[inline]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Reports search progress through `tracing` at `info` level.
    #[inline]
    pub fn with_progress_logging(mut self, yes: bool) -> Self {
        self.log_progress = yes;
        self
    }

    #[inline]
    pub fn budget(&self) -> T {
        self.budget
    }

    #[inline]
    pub fn prune_threshold(&self) -> T {
        self.prune_threshold
    }

    #[inline]
    pub fn is_pruning_enabled(&self) -> bool {
        !self.prune_threshold.is_negative()
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    #[inline]
    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }

    #[inline]
    pub fn log_progress(&self) -> bool {
        self.log_progress
    }

    /// Returns `true` if a limit may stop the search before it is complete.
    #[inline]
    pub fn has_limits(&self) -> bool {
        self.time_limit_ms.is_some() || self.node_limit.is_some()
    }
}

impl<T> std::fmt::Display for SelectorConfig<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SelectorConfig(budget: {}, prune_threshold: {}",
            self.budget, self.prune_threshold
        )?;
        if let Some(ms) = self.time_limit_ms {
            write!(f, ", time_limit: {}ms", ms)?;
        }
        if let Some(nodes) = self.node_limit {
            write!(f, ", node_limit: {}", nodes)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SelectorConfig::<i64>::default();
        assert_eq!(config.budget(), 1000);
        assert_eq!(config.prune_threshold(), 140);
        assert!(config.is_pruning_enabled());
        assert!(!config.has_limits());
        assert!(!config.log_progress());
        assert_eq!(format!("{}", config), "SelectorConfig(budget: 1000, prune_threshold: 140)");
    }

    #[test]
    fn test_defaults_for_every_wide_enough_cost_type() {
        let narrow = SelectorConfig::<i16>::default();
        assert_eq!(narrow.budget(), 1000);
        assert_eq!(narrow.prune_threshold(), 140);

        let wide = SelectorConfig::<i128>::default();
        assert_eq!(wide.budget(), 1000);
        assert_eq!(wide.prune_threshold(), 140);
    }

    #[test]
    fn test_builder_setters() {
        let config = SelectorConfig::<i32>::default()
            .with_budget(750)
            .with_prune_threshold(20)
            .with_time_limit(Duration::from_millis(250))
            .with_node_limit(1_000_000)
            .with_progress_logging(true);

        assert_eq!(config.budget(), 750);
        assert_eq!(config.prune_threshold(), 20);
        assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
        assert_eq!(config.node_limit(), Some(1_000_000));
        assert!(config.has_limits());
        assert!(config.log_progress());
        assert_eq!(
            format!("{}", config),
            "SelectorConfig(budget: 750, prune_threshold: 20, time_limit: 250ms, node_limit: 1000000)"
        );
    }

    #[test]
    fn test_without_pruning() {
        let config = SelectorConfig::<i64>::new(500, 140).without_pruning();
        assert_eq!(config.prune_threshold(), -1);
        assert!(!config.is_pruning_enabled());
        assert_eq!(config.budget(), 500);
    }

    #[test]
    fn test_json_round_trip_and_defaults() {
        let config = SelectorConfig::<i64>::new(900, 100).with_node_limit(42);
        let json = serde_json::to_string(&config).unwrap();
        let back: SelectorConfig<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let empty: SelectorConfig<i64> = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SelectorConfig::default());
    }
}
