//! Lenient conversion of digit runs captured by the grammars.

/// Parses a digit run, returning 0 when it cannot be represented.
///
/// Leading zeros and spaces are stripped first, so `"007"` is 7 and `"000"`
/// is 0. Runs too large for `u64` also yield 0.
pub fn lenient_u64(digits: &str) -> u64 {
    digits
        .trim_start_matches(['0', ' '])
        .parse()
        .unwrap_or(0)
}
