// crates/infra/src/persistence/text_handle.rs
use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write},
    path::PathBuf,
};

use line_tally_domain::config::ScopeConfig;
use line_tally_ports::handle::TextHandle;
use line_tally_shared_kernel::{ScopeError, ScopeMode, ScopeResult};

/// Filesystem adapter implementing the `TextHandle` port on top of
/// `std::fs::File`.
///
/// Reads go through a `BufReader` so line-at-a-time access is cheap; writes
/// bypass the read buffer and hit the file directly, which is safe because
/// a scope only ever uses one direction. UTF-8 is validated by the std read
/// paths, so a misencoded file surfaces as an I/O error rather than mangled
/// text.
#[derive(Debug)]
pub struct StdTextHandle {
    path: PathBuf,
    writable: bool,
    inner: BufReader<File>,
}

impl StdTextHandle {
    /// Open the configured path in the requested mode.
    ///
    /// A missing file is only an error in read mode; write truncates or
    /// creates, append creates.
    pub fn open(config: &ScopeConfig) -> ScopeResult<Self> {
        let path = config.path.clone();
        log::debug!(
            "opening '{}' in {} mode ({} encoding)",
            path.display(),
            config.mode,
            config.encoding
        );

        let file = match config.mode {
            ScopeMode::Read => File::open(&path).map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    ScopeError::NotFound { path: path.clone(), source }
                } else {
                    ScopeError::Open { path: path.clone(), source }
                }
            })?,
            ScopeMode::Write => File::create(&path)
                .map_err(|source| ScopeError::Open { path: path.clone(), source })?,
            ScopeMode::Append => OpenOptions::new()
                .append(true)
                .create(true)
                .open(&path)
                .map_err(|source| ScopeError::Open { path: path.clone(), source })?,
        };

        Ok(Self { path, writable: config.mode.allows_write(), inner: BufReader::new(file) })
    }

    fn io_error(&self, operation: &'static str, source: io::Error) -> ScopeError {
        ScopeError::Io { operation, path: self.path.clone(), source }
    }
}

impl TextHandle for StdTextHandle {
    fn write_text(&mut self, text: &str) -> ScopeResult<()> {
        self.inner
            .get_mut()
            .write_all(text.as_bytes())
            .map_err(|e| self.io_error("write", e))
    }

    fn read_to_string(&mut self, limit: Option<usize>) -> ScopeResult<String> {
        let mut content = String::new();
        let read = match limit {
            Some(max) => (&mut self.inner).take(max as u64).read_to_string(&mut content),
            None => self.inner.read_to_string(&mut content),
        };
        read.map_err(|e| self.io_error("read", e))?;
        Ok(content)
    }

    fn read_line(&mut self) -> ScopeResult<Option<String>> {
        let mut line = String::new();
        let read = self.inner.read_line(&mut line).map_err(|e| self.io_error("readline", e))?;
        if read == 0 { Ok(None) } else { Ok(Some(line)) }
    }

    fn read_lines(&mut self) -> ScopeResult<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        Ok(lines)
    }

    fn seek(&mut self, pos: SeekFrom) -> ScopeResult<u64> {
        self.inner.seek(pos).map_err(|e| self.io_error("seek", e))
    }

    fn position(&mut self) -> ScopeResult<u64> {
        self.inner.stream_position().map_err(|e| self.io_error("position", e))
    }

    fn close(&mut self) -> ScopeResult<()> {
        // Reads have nothing to flush; for write-capable handles push the
        // data to disk so a close-time failure is observable here instead of
        // being swallowed by the eventual drop.
        if self.writable {
            self.inner
                .get_mut()
                .sync_all()
                .map_err(|source| ScopeError::Close { path: self.path.clone(), source })?;
        }
        Ok(())
    }
}
