// crates/ports/src/reporter.rs
use std::path::Path;

use line_tally_shared_kernel::{LineCount, LineTallyError, ScopeError, ScopeMode};

/// Port for scope lifecycle reporting.
///
/// Implementations are injected into each scope by the top-level caller
/// rather than configured through process-wide mutable state. The wrapper
/// calls these hooks in a fixed order on exit: close failure (if any),
/// block failure (if any), then `scope_exited` with the final counter.
pub trait ScopeReporter: Send + Sync {
    /// The handle was acquired and the scope is now active.
    fn scope_entered(&self, path: &Path, mode: ScopeMode);

    /// Acquisition failed; the scope was never entered.
    fn acquire_failed(&self, path: &Path, error: &ScopeError);

    /// Releasing the handle failed. This is a side note only; it never
    /// becomes the scope's outcome.
    fn close_failed(&self, path: &Path, error: &ScopeError);

    /// The scoped block failed, and the suppression verdict for it.
    fn block_failed(&self, path: &Path, error: &LineTallyError, suppressed: bool);

    /// The scope ended; `lines_processed` is the counter's final value.
    fn scope_exited(&self, path: &Path, lines_processed: LineCount);
}
