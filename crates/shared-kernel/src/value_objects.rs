// crates/shared-kernel/src/value_objects.rs
pub mod counts;
pub mod encoding;
pub mod mode;

pub use counts::{LineCount, UniqueWordCount, WordCount};
pub use encoding::TextEncoding;
pub use mode::ScopeMode;
