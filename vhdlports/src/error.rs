//! Error types for port parsing and the command-line driver.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::ScanState;

/// Why a single source could not be turned into [crate::EntityPorts].
#[derive(Error, Debug)]
pub enum ParseError {
    /// The source could not be opened or read.
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    /// End of input was hit before the port block was closed.
    #[error("incomplete entity port block (stopped while {reached})")]
    Incomplete { reached: ScanState },
}

/// Errors that stop a whole run.
/// The display text is the single line reported to the user.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Error, no files supplied")]
    MissingArguments,

    #[error("Error reading {}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing {}", .path.display())]
    IncompleteParse { path: PathBuf, reached: ScanState },

    /// Writing the diagram to the output failed.
    #[error("Error writing output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    /// Attaches a file path to a [ParseError].
    pub fn from_parse(path: impl Into<PathBuf>, e: ParseError) -> Error {
        let path = path.into();
        match e {
            ParseError::Io(source) => Error::UnreadableFile { path, source },
            ParseError::Incomplete { reached } => Error::IncompleteParse { path, reached },
        }
    }
}
