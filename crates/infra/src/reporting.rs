// crates/infra/src/reporting.rs
//! Reporter adapters bridging scope events to the `log` facade.

use std::path::Path;

use line_tally_ports::reporter::ScopeReporter;
use line_tally_shared_kernel::{LineCount, LineTallyError, ScopeError, ScopeMode};

/// Reporter emitting scope lifecycle events through `log`.
///
/// The backend (e.g. `env_logger`) is configured by the top-level caller;
/// this adapter only records events against the crate's log target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ScopeReporter for LogReporter {
    fn scope_entered(&self, path: &Path, mode: ScopeMode) {
        log::info!("entering scope: opening '{}' in {mode} mode", path.display());
    }

    fn acquire_failed(&self, path: &Path, error: &ScopeError) {
        log::error!("could not open '{}': {error}", path.display());
    }

    fn close_failed(&self, path: &Path, error: &ScopeError) {
        log::error!("error while closing '{}': {error}", path.display());
    }

    fn block_failed(&self, path: &Path, error: &LineTallyError, suppressed: bool) {
        log::error!("scoped block on '{}' failed: {error}", path.display());
        if suppressed {
            log::info!("failure suppressed; scope exit reports success");
        } else {
            log::info!("failure will propagate to the caller");
        }
    }

    fn scope_exited(&self, path: &Path, lines_processed: LineCount) {
        log::info!("closing '{}'; lines processed: {lines_processed}", path.display());
    }
}

/// Reporter that discards every event. Useful for tests and for callers
/// that do not want any logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ScopeReporter for NullReporter {
    fn scope_entered(&self, _path: &Path, _mode: ScopeMode) {}

    fn acquire_failed(&self, _path: &Path, _error: &ScopeError) {}

    fn close_failed(&self, _path: &Path, _error: &ScopeError) {}

    fn block_failed(&self, _path: &Path, _error: &LineTallyError, _suppressed: bool) {}

    fn scope_exited(&self, _path: &Path, _lines_processed: LineCount) {}
}
