//! Analyzer behavior over content read through scoped files.

use std::sync::Arc;

use line_tally::{
    AnalyzeContent, NullReporter, ScopeConfig, ScopedFile, analyze_path, with_scoped_file,
};
use serde_json::json;

use crate::common::{fixture, init_logging, temp_dir};

#[test]
fn analyzes_content_read_through_a_scoped_file() -> anyhow::Result<()> {
    init_logging();
    let dir = temp_dir();
    let path = fixture(&dir, "sample.txt", "Hello world.\nHello again.\n");

    let stats = with_scoped_file(ScopeConfig::read(&path), |file| {
        let stats = AnalyzeContent::new(file).run()?;
        // The wrapper's counter reflects the content handed to the analyzer.
        assert_eq!(file.lines_processed().value(), 2);
        Ok(stats)
    })?
    .expect("analysis scope succeeds");

    assert_eq!(stats.word_count.value(), 4);
    assert_eq!(stats.line_count.value(), 2);
    assert_eq!(stats.unique_word_count.value(), 3);
    Ok(())
}

#[test]
fn analyze_path_runs_the_whole_flow_in_one_call() -> anyhow::Result<()> {
    let dir = temp_dir();
    let path = fixture(&dir, "sample.txt", "one two\ntwo three\n");

    let stats = analyze_path(&path)?;
    assert_eq!(stats.word_count.value(), 4);
    assert_eq!(stats.line_count.value(), 2);
    assert_eq!(stats.unique_word_count.value(), 3);
    Ok(())
}

#[test]
fn empty_file_yields_all_zeros() -> anyhow::Result<()> {
    let dir = temp_dir();
    let path = fixture(&dir, "empty.txt", "");

    let stats = analyze_path(&path)?;
    assert!(stats.is_empty());
    Ok(())
}

#[test]
fn whitespace_only_file_yields_all_zeros() -> anyhow::Result<()> {
    let dir = temp_dir();
    let path = fixture(&dir, "blank.txt", " \n\t \n");

    let stats = analyze_path(&path)?;
    assert!(stats.is_empty());
    Ok(())
}

#[test]
fn analysis_results_serialize_as_plain_counts() -> anyhow::Result<()> {
    let dir = temp_dir();
    let path = fixture(&dir, "sample.txt", "Hello world.\nHello again.\n");

    let file = ScopedFile::open(ScopeConfig::read(&path), Arc::new(NullReporter))?;
    let stats = file.scope(|f| AnalyzeContent::new(f).run())?.expect("scope succeeds");

    assert_eq!(
        serde_json::to_value(stats)?,
        json!({ "word_count": 4, "line_count": 2, "unique_word_count": 3 })
    );
    Ok(())
}
