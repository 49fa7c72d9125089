// crates/domain/src/analytics.rs
//! Pure text statistics over in-memory content.

use std::collections::HashSet;

use line_tally_shared_kernel::{LineCount, UniqueWordCount, WordCount};

use crate::model::AnalysisResult;

/// Number of newline-delimited segments in `text`.
///
/// A trailing newline does not open a final empty segment: `"a\n"` is one
/// segment, `"a\nb"` is two, `""` is zero.
#[must_use]
pub fn line_segments(text: &str) -> usize {
    text.lines().count()
}

/// Compute word, line and unique-word counts for `content`.
///
/// Tokens are whitespace-delimited and compared verbatim: counting is
/// case-sensitive and punctuation is kept, so `Hello` and `Hello.` are
/// distinct words. Empty or whitespace-only content yields all zeros
/// instead of failing.
#[must_use]
pub fn analyze_text(content: &str) -> AnalysisResult {
    if content.trim().is_empty() {
        return AnalysisResult::default();
    }

    let mut words = 0usize;
    let mut unique = HashSet::new();
    for token in content.split_whitespace() {
        words += 1;
        unique.insert(token);
    }

    AnalysisResult::new(
        WordCount::new(words),
        LineCount::new(line_segments(content)),
        UniqueWordCount::new(unique.len()),
    )
}
