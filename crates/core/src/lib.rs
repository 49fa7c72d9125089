//! # line_tally core
//!
//! Facade crate assembling the workspace layers into the public surface:
//! scoped, line-counting file access plus the content analyzer, with the
//! convenience entry points callers reach for first.

#![allow(clippy::multiple_crate_versions)]

use std::{path::PathBuf, sync::Arc};

pub use line_tally_domain::analytics::{analyze_text, line_segments};
pub use line_tally_domain::config::ScopeConfig;
pub use line_tally_domain::model::AnalysisResult;
pub use line_tally_infra::persistence::StdTextHandle;
pub use line_tally_infra::reporting::{LogReporter, NullReporter};
pub use line_tally_infra::scoped::{ScopedFile, count_line_breaks};
pub use line_tally_ports::content::ContentSource;
pub use line_tally_ports::handle::TextHandle;
pub use line_tally_ports::reporter::ScopeReporter;
pub use line_tally_shared_kernel::{
    ErrorContext, LineCount, LineTallyError, Result, ScopeError, ScopeMode, ScopeResult,
    TextEncoding, UniqueWordCount, WordCount,
};
pub use line_tally_usecase::AnalyzeContent;

/// Run `block` inside a scoped file using the default log-backed reporter.
///
/// `Ok(None)` means the block failed and the scope was configured to
/// suppress it.
pub fn with_scoped_file<T, F>(config: ScopeConfig, block: F) -> Result<Option<T>>
where
    F: FnOnce(&mut ScopedFile) -> Result<T>,
{
    let file = ScopedFile::open(config, Arc::new(LogReporter))?;
    file.scope(block)
}

/// Open `path` for reading and compute its text statistics in one scope.
pub fn analyze_path(path: impl Into<PathBuf>) -> Result<AnalysisResult> {
    let outcome =
        with_scoped_file(ScopeConfig::read(path), |file| AnalyzeContent::new(file).run())?;
    Ok(outcome.unwrap_or_default())
}
