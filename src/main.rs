// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The busca binary: ingestion + engine + display, wired together.

use std::error::Error;
use std::path::Path;

use clap::Parser;

use busca::dataset::{prepare, Dataset};
use busca::ingest::{load_table, map_columns, typed_rows};
use busca::rank::rank_hits;
use busca::types::{RankOptions, ThresholdMode};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            file,
            query,
            threshold,
            limit,
            top_k,
            strict,
            json,
            export,
        } => run_search(
            &file, &query, threshold, limit, top_k, strict, json, export,
        ),
        Commands::Stats { file } => run_stats(&file),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

/// Load a file, resolve its columns, and prepare it for querying.
fn load_prepared(file: &str) -> Result<Dataset, Box<dyn Error>> {
    let table = load_table(Path::new(file))?;
    let schema = map_columns(&table.headers)?;
    let rows = typed_rows(table, &schema);
    Ok(prepare(&rows, &schema)?)
}

#[allow(clippy::too_many_arguments)]
fn run_search(
    file: &str,
    query: &str,
    threshold: f64,
    limit: usize,
    top_k: usize,
    strict: bool,
    json: bool,
    export: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let dataset = load_prepared(file)?;

    let options = RankOptions {
        threshold,
        threshold_mode: if strict {
            ThresholdMode::Strict
        } else {
            ThresholdMode::Inclusive
        },
        candidate_limit: top_k,
        result_cap: Some(limit),
    };

    let hits = rank_hits(&dataset, query, &options);

    if json {
        display::print_json(&hits)?;
    } else {
        display::print_hits(query, threshold, &hits);
    }

    if let Some(path) = export {
        display::write_csv(&path, &hits)?;
        if !json {
            println!("Results written to {}", path);
        }
    }

    Ok(())
}

fn run_stats(file: &str) -> Result<(), Box<dyn Error>> {
    let dataset = load_prepared(file)?;
    display::print_stats(&dataset);
    Ok(())
}
