//! File verification: hash a file and compare against an expected digest.

use crate::checksum;
use crate::compare::{self, Verdict};
use crate::error::VerifyError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Result of verifying one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub computed: String,
    pub expected: String,
    pub verdict: Verdict,
}

/// Renders the three report lines (computed, expected, verdict) without a trailing newline.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Computed digest: {}.", self.computed)?;
        writeln!(f, "Expected digest: {}.", self.expected)?;
        write!(f, "{}", self.verdict)
    }
}

/// Trim surrounding whitespace and lowercase ASCII hex digits.
pub fn normalize_expected(text: &str) -> String {
    let digest = text.trim().to_ascii_lowercase();
    if !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
        tracing::warn!(expected = %digest, "expected digest contains non-hex characters");
    }
    digest
}

/// Hash `path` and compare the result against `expected`.
///
/// A length difference is reported through the verdict, not as an error;
/// only failing to read the file is an error.
pub fn verify_file(path: &Path, expected: &str) -> Result<Report, VerifyError> {
    let computed = checksum::sha256_path(path)?;
    let expected = normalize_expected(expected);
    let verdict = compare::compare_digests(&computed, &expected);

    match verdict {
        Verdict::Match => tracing::info!(path = %path.display(), "digest match"),
        Verdict::Mismatch => tracing::warn!(
            path = %path.display(),
            %computed,
            %expected,
            "digest mismatch"
        ),
        Verdict::LengthMismatch {
            computed_len,
            expected_len,
        } => tracing::warn!(
            path = %path.display(),
            computed_len,
            expected_len,
            "digest length mismatch"
        ),
    }

    Ok(Report {
        path: path.to_path_buf(),
        computed,
        expected,
        verdict,
    })
}
