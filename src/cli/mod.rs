//! Command-line interface
//!
//! Argument parsing and the mapping from fatal errors to exit codes. Usage
//! mistakes and a refused token are reported on stdout and exit 0; every
//! other fatal error exits 1.

pub mod commands;
pub mod types;

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};

use crate::domain::errors::{ArgumentError, TokenPolicyError};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

pub use types::Cli;

/// Parse command-line arguments, classifying failures.
pub fn parse_args<I, T>(args: I) -> Result<Cli, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::MissingRequiredArgument
        | ErrorKind::UnknownArgument
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => ArgumentError::WrongArity {
            usage: Cli::command().render_usage().to_string(),
        },
        ErrorKind::ValueValidation | ErrorKind::InvalidValue if names_milestone(&err) => {
            let value = match err.get(ContextKind::InvalidValue) {
                Some(ContextValue::String(value)) => value.clone(),
                _ => String::new(),
            };
            let reason = std::error::Error::source(&err)
                .map_or_else(|| err.to_string(), ToString::to_string);
            ArgumentError::InvalidMilestone { value, reason }
        }
        _ => ArgumentError::Clap(err),
    })
}

fn names_milestone(err: &clap::Error) -> bool {
    matches!(
        err.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if arg.contains("MILESTONE")
    )
}

/// Parse arguments, refuse a legacy token, then load configuration.
///
/// The token policy runs before any configuration source is read.
pub fn prepare<I, T>(args: I) -> anyhow::Result<(Cli, Config)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = parse_args(args)?;
    cli.token.ensure_fine_grained()?;
    let config = ConfigLoader::load(cli.config.as_deref())?;
    Ok((cli, config))
}

/// Process exit code for a fatal error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ArgumentError>() {
        Some(ArgumentError::WrongArity { .. }) => return 0,
        Some(ArgumentError::Clap(clap_err)) => return clap_err.exit_code(),
        _ => {}
    }
    if err.downcast_ref::<TokenPolicyError>().is_some() {
        return 0;
    }
    1
}

/// Report a fatal error and terminate the process.
pub fn handle_error(err: anyhow::Error) -> ! {
    let code = exit_code(&err);
    match err.downcast::<ArgumentError>() {
        Ok(ArgumentError::Clap(clap_err)) => clap_err.exit(),
        Ok(arg_err @ ArgumentError::WrongArity { .. }) => println!("{arg_err}"),
        Ok(arg_err) => eprintln!("Error: {arg_err}"),
        Err(err) if code == 0 => println!("{err}"),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "fatal error");
            eprintln!("Error: {err:#}");
        }
    }
    std::process::exit(code)
}
