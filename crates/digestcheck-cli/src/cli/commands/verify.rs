//! `digestcheck verify` – hash a file and report whether it matches.

use anyhow::Result;
use digestcheck_core::verify;
use std::path::Path;

/// Exit status for a non-matching verdict under `--strict`.
pub const EXIT_NOT_MATCHED: i32 = 2;

/// Print the computed digest, the expected digest and the verdict.
/// A mismatch is only a failure status when `strict` is set.
pub fn run_verify(path: &Path, expected: &str, strict: bool) -> Result<i32> {
    let report = verify::verify_file(path, expected)?;
    println!("{report}");
    if strict && !report.verdict.is_match() {
        tracing::warn!(path = %report.path.display(), "strict: {}", report.verdict);
        return Ok(EXIT_NOT_MATCHED);
    }
    Ok(0)
}
