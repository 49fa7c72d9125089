// crates/domain/src/config.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use line_tally_shared_kernel::{ScopeMode, TextEncoding};

/// Configuration for a single file scope.
///
/// Nothing is validated at construction time; acquisition performs the
/// checks the requested mode implies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeConfig {
    pub path: PathBuf,
    pub mode: ScopeMode,
    pub encoding: TextEncoding,
    /// When set, a failure inside the scoped block is swallowed at scope
    /// exit and the scope reports success.
    pub suppress_errors: bool,
}

impl ScopeConfig {
    pub fn new(path: impl Into<PathBuf>, mode: ScopeMode) -> Self {
        Self {
            path: path.into(),
            mode,
            encoding: TextEncoding::default(),
            suppress_errors: false,
        }
    }

    /// Read-mode scope over an existing file.
    pub fn read(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ScopeMode::Read)
    }

    /// Write-mode scope; truncates or creates the target.
    pub fn write(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ScopeMode::Write)
    }

    /// Append-mode scope; creates the target if absent.
    pub fn append(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ScopeMode::Append)
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_suppressed_errors(mut self, suppress: bool) -> Self {
        self.suppress_errors = suppress;
        self
    }
}
