// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the busca command-line interface.
//!
//! Two subcommands: `search` to query a dataset file and `stats` to summarize
//! its costs. The search command mirrors the knobs of the ranking engine -
//! threshold, threshold mode, per-pass candidate limit, result cap - plus
//! JSON output and CSV export for pipelines.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "busca",
    about = "Fuzzy search over tabular project datasets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a dataset file and display ranked matches
    Search {
        /// Path to the dataset (csv, xls or xlsx)
        file: String,

        /// Free-text query
        query: String,

        /// Minimum similarity (0-100) for a match to be shown
        #[arg(short, long, default_value = "70")]
        threshold: f64,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Candidates inspected per scoring pass (bounds work on large files)
        #[arg(long, default_value = "10")]
        top_k: usize,

        /// Require scores strictly above the threshold instead of at-or-above
        #[arg(long)]
        strict: bool,

        /// Print results as JSON instead of the formatted listing
        #[arg(long)]
        json: bool,

        /// Also write the results to a CSV file
        #[arg(long)]
        export: Option<String>,
    },

    /// Show record count and cost metrics for a dataset file
    Stats {
        /// Path to the dataset (csv, xls or xlsx)
        file: String,
    },
}
