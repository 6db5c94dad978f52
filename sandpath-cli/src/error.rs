//! Errors surfaced by the `sandpath` binary and the exit code each maps to.
//!
//! | code | meaning                                                 |
//! |------|---------------------------------------------------------|
//! | 0    | success                                                 |
//! | 1    | an input failed to resolve or a strict lookup missed    |
//! | 4    | bad command-line arguments                              |
//! | 5    | filesystem access failed                                |
//! | 6    | any other library failure (for example, rendering)      |
//! | 7    | the configuration could not be loaded or is invalid     |

use sandpath::{Error as LibError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Library(LibError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A path-level failure; the message is printed as is.
    #[error("{0}")]
    SemanticFailure(String),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SemanticFailure(_) => 1,
            Self::InvalidArguments(_) => 4,
            Self::Io(_) => 5,
            Self::Config(_) => 7,
            Self::Library(e) => match e.kind() {
                Some(ErrorKind::IoFailure) => 5,
                Some(_) => 1,
                None => 6,
            },
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Io(io) => Self::Io(io),
            LibError::Configuration(_) | LibError::Validation { .. } => Self::Config(e.to_string()),
            other => Self::Library(other),
        }
    }
}
