//! Conditions that abort a run instead of being folded into a check result.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("required port set must not be empty")]
    EmptyPortSet,

    #[error("port 0 is not a valid required port")]
    InvalidPort,

    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {status}")]
    ToolFailed { program: String, status: String },

    #[error("'{program}' produced no digest")]
    MalformedDigest { program: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
