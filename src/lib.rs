//! Scoped, line-counting access to text files plus a small content analyzer.
//!
//! A [`ScopedFile`] owns one file handle for the duration of a scope: it
//! counts the lines flowing through reads and writes, reports lifecycle
//! events through an injected [`ScopeReporter`], guarantees the handle is
//! released on every exit path, and can optionally swallow a failure that
//! occurred while the file was in use. [`analyze_text`] and
//! [`AnalyzeContent`] compute word, line and unique-word statistics from
//! any [`ContentSource`], a scoped file included.
//!
//! ```no_run
//! use line_tally::{ScopeConfig, with_scoped_file};
//!
//! # fn main() -> line_tally::Result<()> {
//! let written = with_scoped_file(ScopeConfig::write("notes.txt"), |file| {
//!     file.write_text("Line A\n")?;
//!     file.write_text("Line B\nLine C\n")?;
//!     Ok(file.lines_processed())
//! })?;
//! assert_eq!(written.map(|count| count.value()), Some(3));
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions)]

pub use line_tally_core::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
