// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ErrorContext, LineTallyError, Result, ScopeError, ScopeResult};

pub mod error;
pub mod value_objects;

pub use value_objects::{LineCount, ScopeMode, TextEncoding, UniqueWordCount, WordCount};
