// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Error types for sample generation and analysis runs.

use thiserror::Error;

/// Underlying cause of a sample generation failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure to produce a sample. Always fatal for the run.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Error generating random bytes: {0}")]
    RandomBytes(#[source] BoxError),
    #[error("Error generating Ed25519 key: {0}")]
    KeyGeneration(#[source] BoxError),
}

/// Reasons an analysis run ends without a report.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{source} (iteration {iteration})")]
    Sample {
        iteration: u64,
        #[source]
        source: SampleError,
    },
    /// Counter total does not match `iterations * 32`.
    #[error("frequency table holds {actual} observations, expected {expected}")]
    Conservation { expected: u64, actual: u64 },
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
