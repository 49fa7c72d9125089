// crates/shared-kernel/src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

use crate::value_objects::ScopeMode;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LineTallyError {
    /// Adds human context while preserving the original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LineTallyError>,
    },

    #[error("Scope error: {0}")]
    Scope(#[from] ScopeError),

    /// Arbitrary failure raised by caller code inside a scoped block.
    #[error("operation failed: {reason}")]
    Failed { reason: String },
}

impl LineTallyError {
    /// Build a caller-raised block failure from a plain message.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failed { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, LineTallyError>;

/// Errors produced by the scoped file wrapper and its underlying handle.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// The target path is missing on read-mode acquisition. Fatal to the
    /// scope attempt; no handle is left open and no release follows.
    #[error("file '{path}' not found")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The requested operation conflicts with the mode the handle was
    /// opened in. The lines-processed counter is untouched.
    #[error("'{operation}' is not supported in {mode} mode")]
    UnsupportedOperation {
        operation: &'static str,
        mode: ScopeMode,
    },

    #[error("{operation} on '{path}' failed: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failure while releasing the handle. Reported through the scope
    /// reporter, never returned as the scope's outcome.
    #[error("failed to close '{path}': {source}")]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ScopeResult<T> = std::result::Result<T, ScopeError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LineTallyError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LineTallyError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LineTallyError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
