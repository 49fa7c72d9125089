// crates/ports/src/handle.rs
use std::io::SeekFrom;

use line_tally_shared_kernel::ScopeResult;

/// Port for raw sequential access to an open text resource.
///
/// Implementations perform unchecked I/O; deciding whether an operation is
/// allowed for the mode a scope was opened in is the wrapper's job.
pub trait TextHandle {
    /// Append `text` to the resource.
    fn write_text(&mut self, text: &str) -> ScopeResult<()>;

    /// Read up to `limit` bytes, or everything that remains when `None`.
    fn read_to_string(&mut self, limit: Option<usize>) -> ScopeResult<String>;

    /// Next line including its terminator, or `None` at end of stream.
    fn read_line(&mut self) -> ScopeResult<Option<String>>;

    /// All remaining lines, terminators kept.
    fn read_lines(&mut self) -> ScopeResult<Vec<String>>;

    fn seek(&mut self, pos: SeekFrom) -> ScopeResult<u64>;

    fn position(&mut self) -> ScopeResult<u64>;

    /// Flush pending state to the underlying resource. Called exactly once
    /// at scope exit, before the handle is dropped.
    fn close(&mut self) -> ScopeResult<()>;
}
