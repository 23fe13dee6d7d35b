//! CLI command handlers, one per file.

mod checksum;
mod verify;

pub use checksum::run_checksum;
pub use verify::run_verify;
