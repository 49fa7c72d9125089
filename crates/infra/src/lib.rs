// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod reporting;
pub mod scoped;

pub use persistence::StdTextHandle;
pub use reporting::{LogReporter, NullReporter};
pub use scoped::ScopedFile;
