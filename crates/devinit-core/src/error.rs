//! Error taxonomy for a bootstrap run
//!
//! Classification drives control flow: `Precondition` and `Cancelled`
//! abort before any mutation, `Parse` is fatal at manifest merge time,
//! `Install` and `Filesystem` are caught at the owning feature's
//! boundary and logged.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required precondition is missing; nothing has been mutated yet.
    #[error("{what} not found (use \"{remedy}\")")]
    Precondition {
        what: &'static str,
        remedy: String,
    },

    /// The operator backed out at the prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// An external command exited non-zero (or could not be spawned).
    #[error("`{program}` exited with code {code}: {stderr}")]
    Install {
        program: String,
        code: i32,
        stderr: String,
    },

    /// The manifest could not be parsed or re-serialized as JSON.
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A template copy or generated-file write failed.
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Shorthand for a filesystem failure at a known path.
    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
