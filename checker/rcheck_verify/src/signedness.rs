//! Exit-code signedness normalization.
//!
//! The OS truncates a return code to one byte, and whether that byte reads
//! back signed or unsigned depends on the platform. The expected ordinal
//! decides which reading to compare against:
//!
//! | expected       | actual becomes                   |
//! |----------------|----------------------------------|
//! | `< 0`          | `byte - 256`, in `-256..=-1`     |
//! | `>= 128`       | `byte`, in `0..=255`             |
//! | otherwise      | unchanged                        |
//!
//! `byte` is `actual` reduced modulo 256. The negative reading covers every
//! ordinal down to -256, so an enum starting below -128 still matches.

/// Reinterpret `actual` with the byte signedness implied by `expected`.
pub fn match_signedness(actual: i64, expected: i64) -> i64 {
    let byte = actual.rem_euclid(256);
    if expected < 0 {
        byte - 256
    } else if expected >= 128 {
        byte
    } else {
        actual
    }
}
