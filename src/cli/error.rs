//! Turning clap parse failures into hoppath errors
//!
//! Only used when the raw arguments ask for JSON output: clap fails before
//! `Cli::format` exists, so the request is read from argv directly.

use clap::error::{Error, ErrorKind};
use hoppath_core::error::HoppathError;

/// Map a parse failure onto a hoppath error, or `None` when clap is
/// printing help or version text rather than reporting a mistake.
pub fn from_clap(err: &Error) -> Option<HoppathError> {
    let message = err.to_string();
    let mapped = match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => return None,
        ErrorKind::ArgumentConflict if message.contains("--format") => {
            HoppathError::DuplicateFormat
        }
        ErrorKind::ArgumentConflict
        | ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::NoEquals
        | ErrorKind::TooManyValues
        | ErrorKind::TooFewValues
        | ErrorKind::WrongNumberOfValues => HoppathError::UsageError(message),
        _ => HoppathError::Other(message),
    };
    Some(mapped)
}

/// Whether the raw arguments request `--format json`
pub fn requests_json<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|v| v.as_ref() == "json") => return true,
            _ => {}
        }
    }
    false
}
