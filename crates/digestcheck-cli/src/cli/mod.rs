//! CLI for digestcheck.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use digestcheck_core::config;
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_verify};

/// Top-level CLI. With no subcommand, verifies the configured target.
#[derive(Debug, Parser)]
#[command(name = "digestcheck", version)]
#[command(about = "Verify a file's SHA-256 digest against a known-good value", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Hash a file and compare it against the expected digest.
    Verify {
        /// File to verify (defaults to target_path from config).
        path: Option<String>,

        /// Expected SHA-256 as hex (defaults to expected_digest from config).
        #[arg(long, value_name = "HEX")]
        expected: Option<String>,

        /// Exit with status 2 unless the digests match.
        #[arg(long)]
        strict: bool,
    },

    /// Compute SHA-256 of a file and print it.
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    /// Parse arguments, run the command, and return the process exit status.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let command = cli.command.unwrap_or(CliCommand::Verify {
            path: None,
            expected: None,
            strict: false,
        });

        match command {
            CliCommand::Verify {
                path,
                expected,
                strict,
            } => {
                let path = path
                    .map(PathBuf::from)
                    .unwrap_or_else(|| cfg.target_path.clone());
                let expected = expected.unwrap_or_else(|| cfg.expected_digest.clone());
                run_verify(&path, &expected, strict || cfg.strict)
            }
            CliCommand::Checksum { path } => {
                run_checksum(Path::new(&path))?;
                Ok(0)
            }
        }
    }
}
