//! Polynomial rolling hash for string keys.
//!
//! Every bucket index in the crate is derived here: a key is folded into a
//! 64-bit digest one character at a time, and the digest is reduced modulo
//! the current capacity. The digest is deterministic, so equal keys always
//! land in the same bucket for a given capacity. It is not a cryptographic
//! hash and makes no attempt to resist crafted collisions.

/// Prime multiplier folding successive characters into the digest.
pub(crate) const PRIME: u64 = 31;

/// Folds `key` into a 64-bit digest, left to right over its characters.
///
/// Computes `PRIME * acc + char` per character with wrapping arithmetic;
/// overflow only changes the digest value, never the validity of the
/// resulting bucket distribution.
pub(crate) fn digest(key: &str) -> u64 {
    key.chars()
        .fold(0_u64, |acc, ch| acc.wrapping_mul(PRIME).wrapping_add(u64::from(u32::from(ch))))
}

/// Maps `key` onto a bucket slot in `[0, capacity)`.
#[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
pub(crate) fn bucket_index(key: &str, capacity: usize) -> usize {
    // The modulus keeps the slot in range for any positive capacity, and the
    // map constructors never let capacity reach zero. Truncating the digest
    // to usize first only re-wraps it on narrow targets.
    let index = (digest(key) as usize) % capacity;
    debug_assert!(index < capacity, "slot {index} escaped capacity {capacity}");
    index
}
