//! Reflected binary (Gray) code.
//!
//! Consecutive integers differ by a single bit in Gray code, so a one-bit
//! change in a genome moves the decoded phenotype by a small step. Fitness
//! functions decoding a genome chunk into a coordinate use these; the engine
//! itself never does.
//!
//! ```
//! use bitga::gray;
//!
//! assert_eq!(gray::encode_u32(2), 3);
//! assert_eq!(gray::decode_u32(3), 2);
//! ```

/// Encodes `x` as Gray code.
pub fn encode_u32(x: u32) -> u32 {
    x ^ (x >> 1)
}

/// Inverts [`encode_u32`].
pub fn decode_u32(mut x: u32) -> u32 {
    x ^= x >> 16;
    x ^= x >> 8;
    x ^= x >> 4;
    x ^= x >> 2;
    x ^= x >> 1;
    x
}

/// Encodes `x` as Gray code.
pub fn encode_u64(x: u64) -> u64 {
    x ^ (x >> 1)
}

/// Inverts [`encode_u64`].
pub fn decode_u64(mut x: u64) -> u64 {
    x ^= x >> 32;
    x ^= x >> 16;
    x ^= x >> 8;
    x ^= x >> 4;
    x ^= x >> 2;
    x ^= x >> 1;
    x
}
