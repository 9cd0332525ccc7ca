// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the busca CLI.
//!
//! Ranked results as a readable listing, costs in Brazilian currency format,
//! score badges colored by match quality. Colors respect `NO_COLOR` and
//! non-TTY detection for pipelines, so `busca search ... | grep` stays clean.

use std::io::Write;
use std::sync::OnceLock;

use busca::dataset::Dataset;
use busca::types::Hit;

/// Cached color-support detection.
static COLOR: OnceLock<bool> = OnceLock::new();

/// Colors are on only for a real terminal without `NO_COLOR` set.
fn color_enabled() -> bool {
    *COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

fn paint(text: &str, code: &str) -> String {
    if color_enabled() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Badge color by score bucket: 90 excellent, 80 good, 70 moderate, below
/// that weak.
fn score_badge(score: f64) -> String {
    let label = format!("{:5.1}%", score);
    if score >= 90.0 {
        paint(&label, "32") // green
    } else if score >= 80.0 {
        paint(&label, "36") // cyan
    } else if score >= 70.0 {
        paint(&label, "33") // yellow
    } else {
        paint(&label, "31") // red
    }
}

/// Format a cost as Brazilian currency: `R$ 1.234.567,89`.
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let (int_part, frac_part) = (cents / 100, cents % 100);

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("R$ {},{:02}", grouped, frac_part)
}

/// Print the ranked result listing.
pub fn print_hits(query: &str, threshold: f64, hits: &[Hit]) {
    if hits.is_empty() {
        println!(
            "No projects found with similarity >= {:.0}% for '{}'.",
            threshold, query
        );
        println!("Try lowering the threshold or using more general keywords.");
        return;
    }

    println!(
        "{} project(s) found with similarity >= {:.0}% for '{}':\n",
        hits.len(),
        threshold,
        query
    );

    for (position, hit) in hits.iter().enumerate() {
        println!(
            "{:>3}. {} {} [{}]",
            position + 1,
            score_badge(hit.score),
            paint(&hit.name, "1"), // bold
            hit.id
        );
        println!("     {}", hit.description);
        println!(
            "     {}  (matched on {:?})\n",
            format_brl(hit.cost),
            hit.matched_field
        );
    }
}

/// Print the dataset cost summary.
pub fn print_stats(dataset: &Dataset) {
    println!("Projects:    {}", dataset.len());
    println!("Total cost:  {}", format_brl(dataset.total_cost()));
    println!("Mean cost:   {}", format_brl(dataset.mean_cost()));
    println!("Max cost:    {}", format_brl(dataset.max_cost()));
}

/// Write hits to a CSV file for downstream tooling.
pub fn write_csv(path: &str, hits: &[Hit]) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for hit in hits {
        writer.serialize(hit)?;
    }
    writer.flush()?;
    Ok(())
}

/// Print hits as pretty JSON to stdout.
pub fn print_json(hits: &[Hit]) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, hits)?;
    writeln!(handle)?;
    Ok(())
}
