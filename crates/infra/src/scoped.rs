// crates/infra/src/scoped.rs
//! Scoped, counted, reported access to a single text file.

use std::{fmt, io::SeekFrom, path::Path, sync::Arc};

use line_tally_domain::analytics::line_segments;
use line_tally_domain::config::ScopeConfig;
use line_tally_ports::content::ContentSource;
use line_tally_ports::handle::TextHandle;
use line_tally_ports::reporter::ScopeReporter;
use line_tally_shared_kernel::{LineCount, Result, ScopeError, ScopeMode, ScopeResult};

use crate::persistence::StdTextHandle;

/// Number of line breaks (`\n`) in `text`; the write-side counter increment.
///
/// Text without any break contributes zero, so `"Line 4\n"` counts one and
/// `"tail"` counts nothing.
#[must_use]
pub fn count_line_breaks(text: &str) -> usize {
    bytecount::count(text.as_bytes(), b'\n')
}

/// Wrapper owning one underlying text handle for the duration of a scope.
///
/// Tracks how many lines the scope has processed, reports lifecycle events
/// through the injected reporter, and guarantees the handle is released on
/// every exit path of [`ScopedFile::scope`]. A wrapper is built per scope
/// and consumed by it; there is no reuse after release.
///
/// Counter policy per operation:
///
/// | Operation            | Counter behavior                          |
/// |----------------------|-------------------------------------------|
/// | [`write_text`]       | `+=` line breaks in the written text      |
/// | [`read_to_string`]   | `=` segments in the content just read     |
/// | [`read_line`]        | `+= 1` per non-EOF line, else unchanged   |
/// | [`read_lines`]       | `=` number of lines returned              |
///
/// [`write_text`]: ScopedFile::write_text
/// [`read_to_string`]: ScopedFile::read_to_string
/// [`read_line`]: ScopedFile::read_line
/// [`read_lines`]: ScopedFile::read_lines
pub struct ScopedFile<H: TextHandle = StdTextHandle> {
    config: ScopeConfig,
    reporter: Arc<dyn ScopeReporter>,
    lines_processed: LineCount,
    handle: H,
}

impl ScopedFile<StdTextHandle> {
    /// Acquire the configured path and enter the scope.
    ///
    /// On failure the scope is never considered entered: the error is
    /// reported, nothing is left open, and no release will run.
    pub fn open(config: ScopeConfig, reporter: Arc<dyn ScopeReporter>) -> ScopeResult<Self> {
        match StdTextHandle::open(&config) {
            Ok(handle) => Ok(Self::with_handle(config, reporter, handle)),
            Err(error) => {
                reporter.acquire_failed(&config.path, &error);
                Err(error)
            }
        }
    }
}

impl<H: TextHandle> ScopedFile<H> {
    /// Enter a scope over an already-acquired handle.
    pub fn with_handle(config: ScopeConfig, reporter: Arc<dyn ScopeReporter>, handle: H) -> Self {
        reporter.scope_entered(&config.path, config.mode);
        Self { config, reporter, lines_processed: LineCount::zero(), handle }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn mode(&self) -> ScopeMode {
        self.config.mode
    }

    /// Counter of lines processed so far, readable at any point in the scope.
    pub fn lines_processed(&self) -> LineCount {
        self.lines_processed
    }

    /// Append `text`, counting each line break it contains.
    pub fn write_text(&mut self, text: &str) -> ScopeResult<()> {
        self.ensure_writable("write")?;
        self.handle.write_text(text)?;
        self.lines_processed += LineCount::new(count_line_breaks(text));
        Ok(())
    }

    /// Read up to `limit` bytes, or everything that remains when `None`.
    ///
    /// Overwrites the counter with the segment count of the content just
    /// returned; whatever the counter held before is discarded.
    pub fn read_to_string(&mut self, limit: Option<usize>) -> ScopeResult<String> {
        self.ensure_readable("read")?;
        let content = self.handle.read_to_string(limit)?;
        self.lines_processed = LineCount::new(line_segments(&content));
        Ok(content)
    }

    /// Next line including its terminator, or `None` at end of stream.
    pub fn read_line(&mut self) -> ScopeResult<Option<String>> {
        self.ensure_readable("readline")?;
        let line = self.handle.read_line()?;
        if line.is_some() {
            self.lines_processed = self.lines_processed.incremented();
        }
        Ok(line)
    }

    /// All remaining lines; overwrites the counter with their number.
    pub fn read_lines(&mut self) -> ScopeResult<Vec<String>> {
        self.ensure_readable("readlines")?;
        let lines = self.handle.read_lines()?;
        self.lines_processed = LineCount::new(lines.len());
        Ok(lines)
    }

    /// Pass-through to the underlying handle; not mode-gated.
    pub fn seek(&mut self, pos: SeekFrom) -> ScopeResult<u64> {
        self.handle.seek(pos)
    }

    /// Pass-through to the underlying handle; not mode-gated.
    pub fn position(&mut self) -> ScopeResult<u64> {
        self.handle.position()
    }

    /// The raw handle, for operations the wrapper does not cover.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    /// Run `block` inside the scope, then release.
    ///
    /// The handle is always closed first, whatever the block's outcome; a
    /// close failure is reported as a side note and never replaces that
    /// outcome. Then the suppression gate runs: with `suppress_errors` set
    /// a failing block yields `Ok(None)` as if nothing happened, otherwise
    /// the block's error is returned unchanged. A successful block yields
    /// `Ok(Some(value))`.
    pub fn scope<T, F>(mut self, block: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let outcome = block(&mut self);
        self.release(outcome)
    }

    fn release<T>(mut self, outcome: Result<T>) -> Result<Option<T>> {
        if let Err(close_error) = self.handle.close() {
            self.reporter.close_failed(&self.config.path, &close_error);
        }

        let verdict = match outcome {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                self.reporter.block_failed(&self.config.path, &error, self.config.suppress_errors);
                if self.config.suppress_errors { Ok(None) } else { Err(error) }
            }
        };

        self.reporter.scope_exited(&self.config.path, self.lines_processed);
        verdict
    }

    fn ensure_readable(&self, operation: &'static str) -> ScopeResult<()> {
        if self.config.mode.allows_read() {
            Ok(())
        } else {
            Err(ScopeError::UnsupportedOperation { operation, mode: self.config.mode })
        }
    }

    fn ensure_writable(&self, operation: &'static str) -> ScopeResult<()> {
        if self.config.mode.allows_write() {
            Ok(())
        } else {
            Err(ScopeError::UnsupportedOperation { operation, mode: self.config.mode })
        }
    }
}

impl<H: TextHandle> fmt::Debug for ScopedFile<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedFile")
            .field("path", &self.config.path)
            .field("mode", &self.config.mode)
            .field("lines_processed", &self.lines_processed)
            .finish_non_exhaustive()
    }
}

impl<H: TextHandle> ContentSource for ScopedFile<H> {
    /// Whole-content read through the wrapper, so the line counter reflects
    /// exactly the content handed to the analyzer.
    fn read_all(&mut self) -> Result<String> {
        Ok(self.read_to_string(None)?)
    }
}
