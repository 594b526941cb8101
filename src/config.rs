// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Run configuration and the command line surface.

use clap::Parser;

use crate::digest::DIGEST_SIZE;
use crate::samplers::Strategy;

/// Progress lines per run when progress is on by default.
const PROGRESS_STEPS: u64 = 10_000;
/// Largest run whose observation total still fits in a `u64`.
pub const MAX_ITERATIONS: u64 = u64::MAX / DIGEST_SIZE as u64;

/// Immutable parameters of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub strategy: Strategy,
    pub iterations: u64,
    /// Emit a progress line every this many iterations.
    pub progress_interval: Option<u64>,
    /// Read the clock four times per timestamp sample instead of once.
    pub independent_timestamps: bool,
}

impl RunConfig {
    /// Production defaults for `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        let iterations = strategy.default_iterations();
        RunConfig {
            strategy,
            iterations,
            progress_interval: strategy
                .reports_progress()
                .then(|| default_progress_interval(iterations)),
            independent_timestamps: false,
        }
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        if self.progress_interval.is_some() {
            self.progress_interval = Some(default_progress_interval(iterations));
        }
        self.iterations = iterations;
        self
    }

    /// `0` turns progress reporting off.
    pub fn with_progress_interval(mut self, every: u64) -> Self {
        self.progress_interval = (every > 0).then_some(every);
        self
    }
}

fn default_progress_interval(iterations: u64) -> u64 {
    (iterations / PROGRESS_STEPS).max(1)
}

#[derive(Debug, Parser)]
#[command(name = "sha256_distribution")]
#[command(about = "Hash generated samples and report how evenly the digest bytes spread over all 256 values")]
pub struct Cli {
    /// Sample source
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    pub strategy: Strategy,

    /// Number of samples to hash (defaults to the strategy's production count)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_ITERATIONS))]
    pub iterations: Option<u64>,

    /// Print progress every N iterations, 0 disables it
    #[arg(long)]
    pub progress_every: Option<u64>,

    /// Read the clock once per quarter block instead of repeating one reading
    #[arg(long)]
    pub independent_timestamps: bool,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        let mut config = RunConfig::new(self.strategy);
        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations);
        }
        if let Some(every) = self.progress_every {
            config = config.with_progress_interval(every);
        }
        config.independent_timestamps = self.independent_timestamps;
        config
    }
}
