//! Typed errors for digest computation.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read the file being verified. Always fatal for the caller.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

