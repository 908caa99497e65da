//! Error types for the REPL
//!
//! Three layers of failure exist:
//! - [`SimError`]: running a generated snippet through an external toolchain
//! - [`CommandError`]: anything that aborts a single command line
//! - [`ConfigError`]: bad values in the startup environment
//!
//! None of them are fatal. The session reports a [`CommandError`] as a
//! `*** <message>` line and keeps going with its state untouched.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Failures while handing a snippet to an external simulator
#[derive(Debug, Error)]
pub enum SimError {
    /// The scratch directory or the source file inside it could not be created
    #[error("could not prepare scratch workspace: {0}")]
    Workspace(#[source] io::Error),

    /// The executable could not be started at all (usually: not on PATH)
    #[error("could not launch `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The compile phase ran but reported failure
    #[error("{tool} exited with {status}")]
    ToolFailed { tool: String, status: ExitStatus },
}

/// Errors that abort one command line
#[derive(Debug, Error)]
pub enum CommandError {
    /// Malformed `reg` argument
    #[error("Unknown syntax")]
    Syntax,

    /// Unrecognized `set` / `unset` flag
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    /// `eval [0] ...`
    #[error("Context width must be positive")]
    ZeroWidth,

    /// A bracketed bit index that does not fit in 32 bits
    #[error("Bit index out of range: {0}")]
    IndexOutOfRange(String),

    /// `eval` with nothing to evaluate
    #[error("Missing expression")]
    MissingExpression,

    #[error("No help on '{0}'")]
    UnknownHelpTopic(String),

    #[error(transparent)]
    Sim(#[from] SimError),

    /// Writing to the session output failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors in the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown simulator '{0}' (expected 'iverilog' or 'verilator')")]
    UnknownSimulator(String),
}
