// crates/shared-kernel/src/value_objects/mode.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Access mode requested for a file scope.
///
/// `Write` and `Append` create the target if absent; `Read` requires it to
/// exist. Exactly one direction is usable per scope: reads are rejected on
/// write-capable handles and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeMode {
    Read,
    Write,
    Append,
}

impl ScopeMode {
    #[inline]
    #[must_use]
    pub const fn allows_read(self) -> bool {
        matches!(self, Self::Read)
    }

    #[inline]
    #[must_use]
    pub const fn allows_write(self) -> bool {
        matches!(self, Self::Write | Self::Append)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Append => "append",
        }
    }
}

impl fmt::Display for ScopeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
