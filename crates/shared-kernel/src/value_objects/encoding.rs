// crates/shared-kernel/src/value_objects/encoding.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Text encoding used when decoding file content.
///
/// UTF-8 is the only supported encoding. Invalid byte sequences surface as
/// read errors from the underlying handle rather than being replaced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
}

impl TextEncoding {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
