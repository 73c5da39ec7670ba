//! Seed signer
//!
//! Two commands around the seed signing key:
//! - `keygen`: write a new P-256 private key and print its public key
//! - `sign`: print the base64 ECDSA signature over the seed file's SHA-256 digest

use std::ffi::OsString;
use std::io::Write;

use clap::{error::ErrorKind, CommandFactory, Parser};

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

use cli::{Cli, Command};

pub use config::SignerConfig;
pub use error::SignerError;

/// Parse `args`, run the selected command and return the process exit status.
///
/// A missing or unknown command prints usage to `err` and returns 0. Malformed
/// options and failing commands print their error to `err` and return 1.
/// Explicit `--help` and `--version` output goes to `out`.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let config = cli.config();
    tracing::debug!(command = ?cli.command, ?config, "dispatching");

    let result = match cli.command {
        Command::Keygen(_) => commands::keygen(&config, out).map(|_| ()),
        Command::Sign(_) => commands::sign(&config, out).map(|_| ()),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "{}", e);
            1
        }
    }
}

fn report_parse_error<O: Write, E: Write>(e: &clap::Error, out: &mut O, err: &mut E) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", e.render());
            0
        }
        ErrorKind::InvalidSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = write!(err, "{}", Cli::command().render_help());
            0
        }
        _ => {
            let _ = write!(err, "{}", e.render());
            1
        }
    }
}
