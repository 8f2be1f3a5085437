// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Rendering of sweep results, as aligned text tables or as JSON.

use crate::password::PasswordSource;
use hashcost::cost::CostLevel;
use hashcost::recommendation::Recommendation;
use hashcost::stats::CostSummary;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;

/// The benchmark parameters echoed at the top of a report.
#[derive(Clone, Copy, Debug)]
pub struct BenchmarkSettings {
    pub start_cost: CostLevel,
    pub end_cost: CostLevel,
    pub iterations: usize,
    pub password_length: usize,
    pub password_source: PasswordSource,
}

/// Format a duration with two decimals in the largest unit below it: µs, ms or s.
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_millis(1) {
        format!("{:.2}µs", d.as_micros() as f64)
    } else if d < Duration::from_secs(1) {
        format!("{:.2}ms", d.as_micros() as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Bcrypt Cost Benchmark")?;
    writeln!(out, "=====================")?;
    writeln!(out)
}

/// Write the configuration, results and analysis sections for the given summaries.
pub fn write_report<W: Write>(
    out: &mut W,
    settings: &BenchmarkSettings,
    summaries: &[CostSummary],
) -> io::Result<()> {
    writeln!(out, "Benchmark Configuration")?;
    writeln!(out, "-----------------------")?;
    let configuration = vec![
        vec![
            "Cost Range:".to_string(),
            format!("{} - {}", settings.start_cost, settings.end_cost),
        ],
        vec![
            "Iterations:".to_string(),
            format!("{} per cost level", settings.iterations),
        ],
        vec![
            "Password Length:".to_string(),
            format!("{} characters", settings.password_length),
        ],
        vec![
            "Password Source:".to_string(),
            settings.password_source.describe().to_string(),
        ],
    ];
    write_aligned(out, &configuration, 2)?;

    writeln!(out)?;
    writeln!(out, "Results")?;
    writeln!(out, "-------")?;
    writeln!(out)?;
    let mut rows = vec![
        ["Cost", "Iterations", "Mean", "StdDev", "P25", "P75", "P95", "P99"]
            .map(String::from)
            .to_vec(),
        ["----", "----------", "----", "------", "---", "---", "---", "---"]
            .map(String::from)
            .to_vec(),
    ];
    rows.extend(summaries.iter().map(|s| {
        vec![
            s.cost.to_string(),
            s.sample_count.to_string(),
            format_duration(s.mean),
            format_duration(s.std_dev),
            format_duration(s.p25),
            format_duration(s.p75),
            format_duration(s.p95),
            format_duration(s.p99),
        ]
    }));
    write_aligned(out, &rows, 3)?;

    writeln!(out)?;
    writeln!(out, "Analysis")?;
    writeln!(out, "--------")?;
    for summary in summaries {
        writeln!(
            out,
            "  Cost {}: {}",
            summary.cost,
            summary.recommendation().advice()
        )?;
    }
    Ok(())
}

/// Write rows as left aligned columns separated by at least `padding` spaces.
fn write_aligned<W: Write>(out: &mut W, rows: &[Vec<String>], padding: usize) -> io::Result<()> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in rows {
        let mut line = String::new();
        for (cell, width) in row.iter().zip(&widths) {
            line.push_str(cell);
            let fill = width + padding - cell.chars().count();
            line.extend(std::iter::repeat(' ').take(fill));
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    #[serde(flatten)]
    summary: &'a CostSummary,
    recommendation: Recommendation,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    start_cost: CostLevel,
    end_cost: CostLevel,
    iterations: usize,
    password_length: usize,
    password_generated: bool,
    results: Vec<JsonSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Write the report as a single JSON document. Durations are in nanoseconds. If the sweep was
/// aborted, `error` holds the reason and `summaries` the cost levels that completed.
pub fn write_json_report<W: Write>(
    out: &mut W,
    settings: &BenchmarkSettings,
    summaries: &[CostSummary],
    error: Option<String>,
) -> serde_json::Result<()> {
    let report = JsonReport {
        start_cost: settings.start_cost,
        end_cost: settings.end_cost,
        iterations: settings.iterations,
        password_length: settings.password_length,
        password_generated: settings.password_source == PasswordSource::Generated,
        results: summaries
            .iter()
            .map(|summary| JsonSummary {
                summary,
                recommendation: summary.recommendation(),
            })
            .collect(),
        error,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
