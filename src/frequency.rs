// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Per byte value occurrence counters.

use crate::digest::{Digest, DIGEST_SIZE};

/// Number of distinct byte values.
pub const BUCKETS: usize = 256;

/// Counts how often each byte value appeared across all observed digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; BUCKETS],
    digests: u64,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; BUCKETS],
            digests: 0,
        }
    }

    /// Increment the bucket of every byte in `digest`, once per occurrence.
    pub fn observe(&mut self, digest: &Digest) {
        for &by in digest {
            self.counts[by as usize] += 1;
        }
        self.digests += 1;
    }

    pub fn counts(&self) -> &[u64; BUCKETS] {
        &self.counts
    }

    /// Number of digests observed so far.
    pub fn digests(&self) -> u64 {
        self.digests
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True when the counters hold exactly 32 increments per digest.
    pub fn is_conserved(&self) -> bool {
        self.total() == self.digests.saturating_mul(DIGEST_SIZE as u64)
    }
}
