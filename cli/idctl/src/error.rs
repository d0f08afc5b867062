//! Error handling and display for the CLI.

use colored::Colorize;
use tenant_id::{IdError, IdType};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid identifier '{input}': {source}")]
    InvalidId {
        input: String,
        #[source]
        source: IdError,
    },

    #[error("{failed} of {total} identifiers were rejected")]
    Rejected { failed: usize, total: usize },

    #[error("Invalid component '{input}': {reason}")]
    InvalidComponent { input: String, reason: String },

    #[error("{kind} takes {expected} component(s), got {actual}")]
    Arity {
        kind: IdType,
        expected: usize,
        actual: usize,
    },

    #[error("{0} requires --object-id")]
    MissingObjectId(IdType),

    #[error("{0} does not take an object id")]
    UnexpectedObjectId(IdType),

    #[error("{0} is reserved and cannot be built yet")]
    Reserved(IdType),

    #[error("Unknown output format '{0}'")]
    UnknownFormat(String),
}

impl CliError {
    /// Wrap a library error with the input that caused it.
    pub fn invalid_id(input: impl Into<String>, source: IdError) -> Self {
        Self::InvalidId {
            input: input.into(),
            source,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint(err: &anyhow::Error) -> Option<String> {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return match cli_err {
            CliError::InvalidId { source, .. } => id_hint(source),
            CliError::Arity { kind, .. } => Some(format!(
                "{} ids are written as tag '{}' followed by {} field(s){}.",
                kind,
                kind.tag(),
                kind.level(),
                if kind.is_resource() {
                    " and a 24-character object id"
                } else {
                    ""
                }
            )),
            CliError::MissingObjectId(_) => {
                Some("Pass a 24-character hex object id with --object-id.".to_string())
            }
            CliError::Reserved(_) => {
                Some("Run `idctl kinds` to see which kinds are available.".to_string())
            }
            CliError::UnknownFormat(_) => Some("Use `table` or `json`.".to_string()),
            _ => None,
        };
    }

    err.downcast_ref::<IdError>().and_then(id_hint)
}

fn id_hint(err: &IdError) -> Option<String> {
    match err {
        IdError::UnknownTag(_) | IdError::UnknownKind(_) | IdError::Unimplemented(_) => {
            Some("Run `idctl kinds` to list the known tags.".to_string())
        }
        IdError::Overflow { .. } | IdError::ComponentOutOfRange { .. } => {
            Some("Components must be at most 0x7FFFFFFFFFFFFFFF.".to_string())
        }
        IdError::TrailingGarbage { expected: 24, .. } => {
            Some("Object ids are exactly 24 hex characters.".to_string())
        }
        _ if err.is_object_id_error() => {
            Some("Object ids are exactly 24 hex characters.".to_string())
        }
        _ => None,
    }
}
