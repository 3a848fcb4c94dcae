//! Digest primitive

use blake2::{Blake2b512, Digest};

/// Length of a digest in hex characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// BLAKE2b-512 truncated to its last 32 bytes, hex encoded ("blake2bl").
pub fn blake2bl(data: &[u8]) -> String {
    let digest = Blake2b512::digest(data);
    hex::encode(&digest[32..])
}

/// Whether `value` looks like a full-length digest.
pub fn is_digest(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
}
