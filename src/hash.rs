//! Name digest used to pick a table bucket.

/// Compute the digest of a name.
///
/// Each byte is folded into the accumulator as
/// `acc = c + (acc << 6) + (acc << 16) - acc`, starting from zero, with
/// wrap-around arithmetic. The empty name hashes to `0`.
#[inline]
pub fn hash(name: &[u8]) -> u64 {
    name.iter().fold(0u64, |acc, &c| {
        u64::from(c)
            .wrapping_add(acc << 6)
            .wrapping_add(acc << 16)
            .wrapping_sub(acc)
    })
}
