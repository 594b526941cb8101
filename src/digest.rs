// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Maps samples to 32-byte digests.

use hmac::{Hmac, Mac};
use sha2::{Digest as _, Sha256};

use crate::samplers::Sample;

/// Bytes per digest.
pub const DIGEST_SIZE: usize = 32;

pub type Digest = [u8; DIGEST_SIZE];

type HmacSha256 = Hmac<Sha256>;

/// SHA-256 of a plain block, HMAC-SHA256 of a keyed one.
pub fn digest(sample: &Sample) -> Digest {
    match sample {
        Sample::Block(block) => Sha256::digest(block).into(),
        Sample::Keyed { key, .. } => hmac_sha256(key, sample.message()),
    }
}

/// HMAC-SHA256 over `message` with `key` as the secret.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Digest {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC key");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::{keys, SampleSource};
    use sha2::Digest as _;

    const BLOCK_SIZE: usize = 64;

    /// HMAC built directly from SHA-256, valid for keys of exactly one block.
    fn reference_hmac(key: &[u8; BLOCK_SIZE], message: &[u8]) -> Digest {
        let mut inner_pad = [0x36u8; BLOCK_SIZE];
        let mut outer_pad = [0x5cu8; BLOCK_SIZE];
        for i in 0..BLOCK_SIZE {
            inner_pad[i] ^= key[i];
            outer_pad[i] ^= key[i];
        }
        let inner = Sha256::new()
            .chain_update(inner_pad)
            .chain_update(message)
            .finalize();
        Sha256::new()
            .chain_update(outer_pad)
            .chain_update(inner)
            .finalize()
            .into()
    }

    #[test]
    fn block_digest_is_sha256() {
        // SHA-256 of 32 zero bytes.
        let expected = [
            0x66, 0x68, 0x7a, 0xad, 0xf8, 0x62, 0xbd, 0x77, 0x6c, 0x8f, 0xc1, 0x8b, 0x8e, 0x9f,
            0x8e, 0x20, 0x08, 0x97, 0x14, 0x85, 0x6e, 0xe2, 0x33, 0xb3, 0x90, 0x2a, 0x59, 0x1d,
            0x0d, 0x5f, 0x29, 0x25,
        ];
        assert_eq!(digest(&Sample::Block([0u8; 32])), expected);
    }

    #[test]
    fn keyed_digest_is_hmac_of_public_key_under_private_key() {
        let mut source = keys::HmacKeyPair::new();
        let sample = source.next_sample().unwrap();
        let (message, key) = match &sample {
            Sample::Keyed { message, key } => (*message, *key),
            other => panic!("expected keyed sample, got {other:?}"),
        };
        let out = digest(&sample);
        assert_eq!(out, reference_hmac(&key, &message));
        let plain: Digest = Sha256::digest(message).into();
        assert_ne!(out, plain);
    }

    #[test]
    fn hmac_accepts_short_and_long_keys() {
        // RFC 4231 test case 1: 20-byte key.
        let expected = [
            0xb0, 0x34, 0x4c, 0x61, 0xd8, 0xdb, 0x38, 0x53, 0x5c, 0xa8, 0xaf, 0xce, 0xaf, 0x0b,
            0xf1, 0x2b, 0x88, 0x1d, 0xc2, 0x00, 0xc9, 0x83, 0x3d, 0xa7, 0x26, 0xe9, 0x37, 0x6c,
            0x2e, 0x32, 0xcf, 0xf7,
        ];
        assert_eq!(hmac_sha256(&[0x0b; 20], b"Hi There"), expected);
        // Keys longer than one block are hashed first.
        let long_key = [0xaau8; 131];
        let hashed_key: Digest = Sha256::digest(long_key).into();
        assert_eq!(
            hmac_sha256(&long_key, b"message"),
            hmac_sha256(&hashed_key, b"message")
        );
    }

    #[test]
    fn digest_leaves_sample_untouched() {
        let sample = Sample::Keyed {
            message: [7u8; 32],
            key: [9u8; 64],
        };
        let before = sample.clone();
        let _ = digest(&sample);
        assert_eq!(sample, before);
    }
}
