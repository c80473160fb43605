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

//! `lineup`: pick the best five candidates from a file within a budget.
//!
//! Usage:
//!     lineup players.txt --budget 1000 --prune-threshold 140
//!     lineup players.txt --no-prune --json
//!
//! Each line of the input holds `<value> <cost> [label]`; `#` starts a comment.

use anyhow::Context;
use clap::Parser;
use lineup_bnb::result::SelectorOutcome;
use lineup_model::{loading::CandidateLoader, pool::CandidatePool, selection::Selection};
use lineup_solver::{config::SelectorConfig, selector::Selector};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "lineup",
    version,
    about = "Select the five highest-value candidates that fit a budget"
)]
struct Args {
    /// Candidate file, one `<value> <cost> [label]` per line
    file: PathBuf,

    /// Total cost ceiling for the selection
    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    budget: i64,

    /// Remaining budget at or below which a branch is cut; negative disables
    #[arg(long, default_value_t = 140, allow_negative_numbers = true)]
    prune_threshold: i64,

    /// Disable the budget-threshold cut
    #[arg(long, conflicts_with = "prune_threshold")]
    no_prune: bool,

    /// Print the result as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Log search details and periodic progress
    #[arg(short, long)]
    verbose: bool,

    /// Stop the search after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Stop the search after this many explored nodes
    #[arg(long)]
    node_limit: Option<u64>,
}

impl Args {
    fn selector_config(&self) -> SelectorConfig<i64> {
        let mut config = SelectorConfig::new(self.budget, self.prune_threshold)
            .with_progress_logging(self.verbose);
        if self.no_prune {
            config = config.without_pruning();
        }
        if let Some(ms) = self.time_limit_ms {
            config = config.with_time_limit(Duration::from_millis(ms));
        }
        if let Some(nodes) = self.node_limit {
            config = config.with_node_limit(nodes);
        }
        config
    }
}

/// Logs go to stderr so `--json` output stays machine-readable.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "lineup=debug" } else { "lineup=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose),
        )
        .init();
}

#[derive(Serialize, Debug)]
struct CandidateReport<'a> {
    index: usize,
    label: Option<&'a str>,
    value: f64,
    cost: i64,
}

#[derive(Serialize, Debug)]
struct StatisticsReport {
    nodes_explored: u64,
    selections_evaluated: u64,
    prunings: u64,
    time_ms: f64,
}

#[derive(Serialize, Debug)]
struct SelectionReport<'a> {
    proven_optimal: bool,
    termination: String,
    indices: Vec<usize>,
    total_value: f64,
    total_cost: i64,
    candidates: Vec<CandidateReport<'a>>,
    statistics: StatisticsReport,
}

impl<'a> SelectionReport<'a> {
    fn new(
        pool: &'a CandidatePool<i64>,
        selection: &Selection<i64>,
        outcome: &SelectorOutcome<i64>,
    ) -> Self {
        let stats = outcome.statistics();
        Self {
            proven_optimal: outcome.is_optimal(),
            termination: outcome.termination_reason().to_string(),
            indices: selection.to_usize_array().to_vec(),
            total_value: selection.total_value(),
            total_cost: selection.total_cost(),
            candidates: selection
                .iter()
                .map(|&index| CandidateReport {
                    index: index.get(),
                    label: pool.label(index),
                    value: pool.value(index),
                    cost: pool.cost(index),
                })
                .collect(),
            statistics: StatisticsReport {
                nodes_explored: stats.nodes_explored,
                selections_evaluated: stats.selections_evaluated,
                prunings: stats.total_prunings(),
                time_ms: stats.time_total.as_secs_f64() * 1e3,
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let pool = CandidateLoader::<i64>::new()
        .from_path(&args.file)
        .with_context(|| format!("failed to load candidates from {}", args.file.display()))?;
    tracing::info!(candidates = pool.num_candidates(), file = %args.file.display(), "loaded candidates");
    tracing::debug!(subsets = ?pool.num_subsets(), min_cost = ?pool.min_cost(), "search space");

    let config = args.selector_config();
    tracing::debug!(%config, "selector configured");

    let mut selector = Selector::new(config);
    let outcome = selector.solve(&pool)?;
    let selection = selector
        .resolve(&pool, &outcome)
        .with_context(|| format!("no selection for {}", args.file.display()))?;

    if args.json {
        let report = SelectionReport::new(&pool, &selection, &outcome);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", selection.table(&pool));
        println!();
        println!("   Status:      {}", outcome.termination_reason());
        if args.verbose {
            print!("{}", outcome.statistics());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("lineup").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["players.txt"]);
        let config = args.selector_config();
        assert_eq!(config.budget(), 1000);
        assert_eq!(config.prune_threshold(), 140);
        assert!(!config.has_limits());
        assert!(!args.json);
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = parse(&[
            "players.txt",
            "--budget",
            "850",
            "--no-prune",
            "--time-limit-ms",
            "500",
            "--node-limit",
            "10000",
            "--verbose",
        ]);
        let config = args.selector_config();
        assert_eq!(config.budget(), 850);
        assert!(!config.is_pruning_enabled());
        assert_eq!(config.time_limit(), Some(Duration::from_millis(500)));
        assert_eq!(config.node_limit(), Some(10_000));
        assert!(config.log_progress());
    }

    #[test]
    fn test_negative_threshold_is_accepted() {
        let args = parse(&["players.txt", "--prune-threshold", "-1"]);
        assert!(!args.selector_config().is_pruning_enabled());
    }

    #[test]
    fn test_no_prune_conflicts_with_explicit_threshold() {
        let res = Args::try_parse_from(["lineup", "f.txt", "--no-prune", "--prune-threshold", "10"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_json_report_shape() {
        let pool = CandidateLoader::<i64>::new()
            .from_str("10 200 alpha\n9 200 bravo\n8 200\n7 200\n6 200\n5 200\n")
            .unwrap();
        let mut selector = Selector::new(SelectorConfig::default());
        let outcome = selector.solve(&pool).unwrap();
        let selection = selector.resolve(&pool, &outcome).unwrap();

        let report = SelectionReport::new(&pool, &selection, &outcome);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["proven_optimal"], true);
        assert_eq!(json["indices"], serde_json::json!([0, 1, 2, 3, 4]));
        assert_eq!(json["total_value"], 40.0);
        assert_eq!(json["total_cost"], 1000);
        assert_eq!(json["candidates"][0]["label"], "alpha");
        assert_eq!(json["candidates"][2]["label"], serde_json::Value::Null);
    }
}
