//! End-to-end scope lifecycle over real files.

use std::io::SeekFrom;
use std::sync::Arc;

use line_tally::{
    ErrorContext, LineTallyError, NullReporter, ScopeConfig, ScopeError, ScopedFile,
    with_scoped_file,
};

use crate::common::{fixture, init_logging, temp_dir};

#[test]
fn write_scope_counts_then_read_scope_sees_the_content() -> anyhow::Result<()> {
    init_logging();
    let dir = temp_dir();
    let path = dir.path().join("example.txt");

    let written = with_scoped_file(ScopeConfig::write(&path), |file| {
        file.write_text("Line A\n")?;
        file.write_text("Line B\nLine C\n")?;
        Ok(file.lines_processed())
    })?;
    assert_eq!(written.map(|count| count.value()), Some(3));

    let read_back = with_scoped_file(ScopeConfig::read(&path), |file| {
        let content = file.read_to_string(None)?;
        Ok((content, file.lines_processed()))
    })?;
    let (content, count) = read_back.expect("read scope succeeds");
    assert_eq!(content, "Line A\nLine B\nLine C\n");
    assert_eq!(count.value(), 3);
    Ok(())
}

#[test]
fn read_line_walks_the_file_one_line_at_a_time() -> anyhow::Result<()> {
    let dir = temp_dir();
    let path = fixture(&dir, "three.txt", "Line 1\nLine 2\nLine 3\n");

    let mut file = ScopedFile::open(ScopeConfig::read(&path), Arc::new(NullReporter))?;
    for (index, expected) in ["Line 1\n", "Line 2\n", "Line 3\n"].iter().enumerate() {
        let line = file.read_line()?;
        assert_eq!(line.as_deref(), Some(*expected));
        assert_eq!(file.lines_processed().value(), index + 1);
    }
    assert_eq!(file.read_line()?, None);
    assert_eq!(file.lines_processed().value(), 3);

    let outcome = file.scope(|_| Ok(()))?;
    assert_eq!(outcome, Some(()));
    Ok(())
}

#[test]
fn read_lines_returns_the_tail_and_overwrites_the_counter() -> anyhow::Result<()> {
    let dir = temp_dir();
    let path = fixture(&dir, "tail.txt", "Line 1\nLine 2\nLine 3\n");

    let collected = with_scoped_file(ScopeConfig::read(&path), |file| {
        file.read_line()?;
        let rest = file.read_lines()?;
        assert_eq!(file.lines_processed().value(), rest.len());
        Ok(rest)
    })?;
    assert_eq!(collected, Some(vec!["Line 2\n".to_string(), "Line 3\n".to_string()]));
    Ok(())
}

#[test]
fn append_scope_extends_the_file() -> anyhow::Result<()> {
    let dir = temp_dir();
    let path = fixture(&dir, "log.txt", "Line 1\nLine 2\nLine 3\n");

    let appended = with_scoped_file(ScopeConfig::append(&path), |file| {
        file.write_text("Line 4\n")?;
        Ok(file.lines_processed())
    })?;
    assert_eq!(appended.map(|count| count.value()), Some(1));

    assert_eq!(std::fs::read_to_string(&path)?, "Line 1\nLine 2\nLine 3\nLine 4\n");
    Ok(())
}

#[test]
fn missing_file_fails_acquisition_with_not_found() {
    let dir = temp_dir();
    let config = ScopeConfig::read(dir.path().join("nonexistent.txt"));

    let err = ScopedFile::open(config, Arc::new(NullReporter)).unwrap_err();
    assert!(matches!(err, ScopeError::NotFound { .. }));
}

#[test]
fn acquisition_errors_take_extra_context() {
    let dir = temp_dir();
    let config = ScopeConfig::read(dir.path().join("nonexistent.txt"));

    let wrapped = ScopedFile::open(config, Arc::new(NullReporter))
        .map(|_| ())
        .context("loading sample file")
        .unwrap_err();
    assert!(wrapped.to_string().starts_with("loading sample file: "));
}

#[test]
fn suppressed_scope_swallows_the_block_failure() -> anyhow::Result<()> {
    init_logging();
    let dir = temp_dir();
    let path = fixture(&dir, "data.txt", "Line 1\n");

    let config = ScopeConfig::read(&path).with_suppressed_errors(true);
    let outcome: line_tally::Result<Option<()>> =
        with_scoped_file(config, |_| Err(LineTallyError::failure("deliberate failure")));

    // Execution continues normally after the scope.
    assert_eq!(outcome?, None);
    Ok(())
}

#[test]
fn unsuppressed_scope_re_raises_the_failure_unchanged() {
    let dir = temp_dir();
    let path = fixture(&dir, "data.txt", "Line 1\n");

    let outcome: line_tally::Result<Option<()>> = with_scoped_file(
        ScopeConfig::read(&path),
        |_| Err(LineTallyError::failure("deliberate failure")),
    );

    let err = outcome.unwrap_err();
    assert_eq!(err.to_string(), "operation failed: deliberate failure");
}

#[test]
fn writing_is_rejected_on_a_read_scope() -> anyhow::Result<()> {
    let dir = temp_dir();
    let path = fixture(&dir, "data.txt", "Line 1\n");

    let rejected = with_scoped_file(ScopeConfig::read(&path), |file| {
        let err = file.write_text("nope\n").unwrap_err();
        assert!(matches!(err, ScopeError::UnsupportedOperation { .. }));
        // The failed write left the counter alone.
        Ok(file.lines_processed().value())
    })?;
    assert_eq!(rejected, Some(0));
    Ok(())
}

#[test]
fn seek_and_position_pass_through_to_the_handle() -> anyhow::Result<()> {
    let dir = temp_dir();
    let path = fixture(&dir, "data.txt", "Line 1\nLine 2\n");

    with_scoped_file(ScopeConfig::read(&path), |file| {
        file.read_line()?;
        let position = file.position()?;
        assert!(position > 0);

        file.seek(SeekFrom::Start(0))?;
        assert_eq!(file.position()?, 0);
        assert_eq!(file.read_line()?.as_deref(), Some("Line 1\n"));
        Ok(())
    })?;
    Ok(())
}
