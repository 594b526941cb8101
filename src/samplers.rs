// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Sample generation strategies.
//! All implement the SampleSource interface and produce one
//! fixed-size block per call, independent of every other call.

use clap::ValueEnum;

use crate::error::SampleError;
use crate::strings;

/// Bytes per sample block.
pub const SAMPLE_SIZE: usize = 32;
/// Bytes in an Ed25519 private key (seed followed by public key).
pub const PRIVATE_KEY_SIZE: usize = 64;

/// One iteration's input to the digest function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sample {
    /// Hashed directly with SHA-256.
    Block([u8; SAMPLE_SIZE]),
    /// `message` is authenticated with HMAC-SHA256 under `key`.
    Keyed {
        message: [u8; SAMPLE_SIZE],
        key: [u8; PRIVATE_KEY_SIZE],
    },
}

impl Sample {
    /// The block that gets hashed or authenticated.
    pub fn message(&self) -> &[u8; SAMPLE_SIZE] {
        match self {
            Sample::Block(block) => block,
            Sample::Keyed { message, .. } => message,
        }
    }
}

/// General trait for sample producers.
pub trait SampleSource {
    /// Produce the next sample.
    /// An error aborts the run, there is no retry.
    fn next_sample(&mut self) -> Result<Sample, SampleError>;
}

/// Selects which sample source feeds the analysis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Bytes from the operating system CSPRNG.
    Random,
    /// Public key of a fresh Ed25519 key pair.
    PublicKey,
    /// Nanosecond Unix timestamp.
    Timestamp,
    /// HMAC of a fresh public key, keyed by its private key.
    Hmac,
}

impl Strategy {
    /// Label printed as the last report line.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Random => strings::RANDOM_LABEL,
            Strategy::PublicKey => strings::PUBLIC_KEY_LABEL,
            Strategy::Timestamp => strings::TIMESTAMP_LABEL,
            Strategy::Hmac => strings::HMAC_LABEL,
        }
    }

    /// Production iteration count.
    pub fn default_iterations(&self) -> u64 {
        match self {
            Strategy::Hmac => 1_000_000_000,
            _ => 100_000_000,
        }
    }

    /// Whether a run reports progress unless told otherwise.
    pub fn reports_progress(&self) -> bool {
        matches!(self, Strategy::Hmac)
    }

    /// Build the source for this strategy.
    pub fn build(&self, independent_timestamps: bool) -> Box<dyn SampleSource> {
        match self {
            Strategy::Random => Box::new(random::OsRandom::new()),
            Strategy::PublicKey => Box::new(keys::PublicKey::new()),
            Strategy::Timestamp => Box::new(timestamp::Timestamp::new(independent_timestamps)),
            Strategy::Hmac => Box::new(keys::HmacKeyPair::new()),
        }
    }
}

/// Operating system randomness.
pub mod random {
    use rand::rngs::OsRng;
    use rand::TryRngCore;

    use super::{Sample, SampleSource, SAMPLE_SIZE};
    use crate::error::SampleError;

    #[derive(Debug, Default)]
    pub struct OsRandom {
        rng: OsRng,
    }

    impl OsRandom {
        pub fn new() -> Self {
            OsRandom { rng: OsRng }
        }
    }

    impl SampleSource for OsRandom {
        fn next_sample(&mut self) -> Result<Sample, SampleError> {
            let mut block = [0u8; SAMPLE_SIZE];
            self.rng
                .try_fill_bytes(&mut block)
                .map_err(|err| SampleError::RandomBytes(Box::new(err)))?;
            Ok(Sample::Block(block))
        }
    }
}

/// Samples derived from freshly generated Ed25519 key pairs.
pub mod keys {
    use ed25519_dalek::{SecretKey, SigningKey, SECRET_KEY_LENGTH};
    use rand::rngs::OsRng;
    use rand::TryRngCore;

    use super::{Sample, SampleSource};
    use crate::error::SampleError;

    /// Generate a key pair from a 32-byte seed drawn from the OS.
    pub fn generate_keypair() -> Result<SigningKey, SampleError> {
        let mut seed: SecretKey = [0u8; SECRET_KEY_LENGTH];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|err| SampleError::KeyGeneration(Box::new(err)))?;
        Ok(SigningKey::from_bytes(&seed))
    }

    /// Sample is the 32-byte public key. The private half is discarded.
    #[derive(Debug, Default)]
    pub struct PublicKey {}

    impl PublicKey {
        pub fn new() -> Self {
            PublicKey {}
        }
    }

    impl SampleSource for PublicKey {
        fn next_sample(&mut self) -> Result<Sample, SampleError> {
            let signing = generate_keypair()?;
            Ok(Sample::Block(signing.verifying_key().to_bytes()))
        }
    }

    /// Public key as the message, 64-byte private key as the HMAC key.
    #[derive(Debug, Default)]
    pub struct HmacKeyPair {}

    impl HmacKeyPair {
        pub fn new() -> Self {
            HmacKeyPair {}
        }
    }

    impl SampleSource for HmacKeyPair {
        fn next_sample(&mut self) -> Result<Sample, SampleError> {
            let signing = generate_keypair()?;
            Ok(Sample::Keyed {
                message: signing.verifying_key().to_bytes(),
                key: signing.to_keypair_bytes(),
            })
        }
    }
}

/// Samples built from the wall clock.
pub mod timestamp {
    use chrono::Utc;

    use super::{Sample, SampleSource, SAMPLE_SIZE};
    use crate::error::SampleError;

    const QUARTER: usize = 8;

    /// Nanoseconds since the Unix epoch. Wraps instead of failing.
    pub fn unix_nanos() -> i64 {
        let now = Utc::now();
        now.timestamp()
            .wrapping_mul(1_000_000_000)
            .wrapping_add(i64::from(now.timestamp_subsec_nanos()))
    }

    /// One timestamp copied into all four quarters of the block.
    pub fn replicate(nanos: i64) -> [u8; SAMPLE_SIZE] {
        compose([nanos; 4])
    }

    /// Four timestamps, one per quarter, little endian.
    pub fn compose(reads: [i64; 4]) -> [u8; SAMPLE_SIZE] {
        let mut block = [0u8; SAMPLE_SIZE];
        for (quarter, nanos) in block.chunks_exact_mut(QUARTER).zip(reads) {
            quarter.copy_from_slice(&nanos.to_le_bytes());
        }
        block
    }

    #[derive(Debug, Default)]
    pub struct Timestamp {
        independent_reads: bool,
    }

    impl Timestamp {
        /// With `independent_reads` unset the clock is read once per sample
        /// and the value repeated across the block.
        pub fn new(independent_reads: bool) -> Self {
            Timestamp { independent_reads }
        }
    }

    impl SampleSource for Timestamp {
        fn next_sample(&mut self) -> Result<Sample, SampleError> {
            let block = if self.independent_reads {
                compose([unix_nanos(), unix_nanos(), unix_nanos(), unix_nanos()])
            } else {
                replicate(unix_nanos())
            };
            Ok(Sample::Block(block))
        }
    }
}
