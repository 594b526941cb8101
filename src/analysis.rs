// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Byte distribution analysis of a sample source's digests.

use std::io::Write;
use std::time::Instant;

use chrono::Local;
use log::{debug, error, info};

use crate::config::RunConfig;
use crate::digest::{self, Digest};
use crate::error::RunError;
use crate::frequency::FrequencyTable;
use crate::report::{format_progress, write_report};
use crate::samplers::{Sample, SampleSource};
use crate::stats::Report;
use crate::utils;

/// Hash `config.iterations` samples from `source` and write the report to `out`.
pub fn run<S, W>(source: &mut S, config: &RunConfig, out: &mut W) -> Result<Report, RunError>
where
    S: SampleSource + ?Sized,
    W: Write,
{
    run_with_digest(source, digest::digest, config, out)
}

/// Same as [`run`] with a substitute digest function.
/// Nothing is written to `out` except progress lines unless every iteration succeeds.
pub fn run_with_digest<S, D, W>(
    source: &mut S,
    digest_fn: D,
    config: &RunConfig,
    out: &mut W,
) -> Result<Report, RunError>
where
    S: SampleSource + ?Sized,
    D: Fn(&Sample) -> Digest,
    W: Write,
{
    let start = Instant::now();
    info!(
        "Analysing {} samples of {} (started {})",
        config.iterations,
        config.strategy.label(),
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let table = accumulate(source, &digest_fn, config, out)?;
    debug!("Accumulated {} digests", table.digests());
    let report = Report::from_table(&table, config.iterations);
    if !table.is_conserved() || !report.is_conserved() {
        return Err(RunError::Conservation {
            expected: report.expected_total(),
            actual: report.total,
        });
    }
    write_report(out, &report, config.strategy.label())?;
    out.flush()?;

    info!(
        "Analysed {} of digest output in {}",
        utils::format_byte_count(report.total),
        utils::format_elapsed_time(start.elapsed())
    );
    Ok(report)
}

/// The sample -> digest -> count loop. Stops at the first failed sample.
fn accumulate<S, D, W>(
    source: &mut S,
    digest_fn: &D,
    config: &RunConfig,
    out: &mut W,
) -> Result<FrequencyTable, RunError>
where
    S: SampleSource + ?Sized,
    D: Fn(&Sample) -> Digest,
    W: Write,
{
    let mut table = FrequencyTable::new();
    for iteration in 0..config.iterations {
        let sample = source.next_sample().map_err(|source| {
            error!("Sample generation failed at iteration {}: {}", iteration, source);
            RunError::Sample { iteration, source }
        })?;
        table.observe(&digest_fn(&sample));

        if let Some(every) = config.progress_interval {
            let done = iteration + 1;
            if done % every == 0 {
                writeln!(out, "{}", format_progress(done, config.iterations))?;
                out.flush()?;
            }
        }
    }
    Ok(table)
}
