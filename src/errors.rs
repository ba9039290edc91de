// errors.rs
use thiserror::Error;

/// Failures of the one-shot snapshot load. None of these are fatal: the
/// controller logs them and settles on an empty store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Snapshot request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Could not read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Snapshot parse error: {0}")]
    Parse(String),
}

/// A typed command the host could not turn into an intent.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for `{0}`")]
    MissingArgument(&'static str),

    #[error("Invalid value for `{command}`: {value}")]
    InvalidValue { command: &'static str, value: String },
}
