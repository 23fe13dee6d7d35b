//! Constant-time digest comparison.
//!
//! Every byte pair is visited regardless of where the first difference is, so
//! the running time does not reveal how much of a digest matched.

use std::fmt;

/// Outcome of comparing a computed digest against an expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
    /// The two digests have different lengths (usually the wrong hash function).
    LengthMismatch {
        computed_len: usize,
        expected_len: usize,
    },
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Match => write!(f, "Digests match!"),
            Verdict::Mismatch => write!(f, "Digest mismatch!"),
            Verdict::LengthMismatch { .. } => write!(
                f,
                "Digest lengths don't match, was the correct hash function used?"
            ),
        }
    }
}

/// XOR each byte pair and OR into an accumulator; zero means equal.
/// Only the contents are compared in constant time; slices of different
/// length are unequal immediately.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let acc = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));
    std::hint::black_box(acc) == 0
}

/// Compare two hex digests as raw text.
pub fn compare_digests(computed: &str, expected: &str) -> Verdict {
    let (computed, expected) = (computed.as_bytes(), expected.as_bytes());
    if computed.len() != expected.len() {
        return Verdict::LengthMismatch {
            computed_len: computed.len(),
            expected_len: expected.len(),
        };
    }
    if constant_time_eq(computed, expected) {
        Verdict::Match
    } else {
        Verdict::Mismatch
    }
}
