use std::path::PathBuf;

use ilshim_bindings::BindingError;
use miette::Diagnostic;
use thiserror::Error;

/// CLI-specific error type that provides rich diagnostics
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Failed to read config file {path}")]
    #[diagnostic(code(ilshim::cli::config_read))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}")]
    #[diagnostic(
        code(ilshim::cli::config_parse),
        help("Expected a [header] table with guard, includes, inline, groups and output keys")
    )]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed while {operation} {path}")]
    #[diagnostic(code(ilshim::cli::io_error))]
    IoError {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to stdout")]
    #[diagnostic(code(ilshim::cli::output))]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Binding(#[from] BindingError),
}
