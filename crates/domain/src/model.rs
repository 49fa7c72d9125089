// crates/domain/src/model.rs
use serde::{Deserialize, Serialize};

use line_tally_shared_kernel::{LineCount, UniqueWordCount, WordCount};

/// Statistics computed from a single full read of a text source.
///
/// Produced once per analysis call; has no identity beyond its values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub word_count: WordCount,
    pub line_count: LineCount,
    pub unique_word_count: UniqueWordCount,
}

impl AnalysisResult {
    #[must_use]
    pub const fn new(
        word_count: WordCount,
        line_count: LineCount,
        unique_word_count: UniqueWordCount,
    ) -> Self {
        Self { word_count, line_count, unique_word_count }
    }

    /// True when every count is zero, the result for empty content.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count.is_zero() && self.line_count.is_zero() && self.unique_word_count.is_zero()
    }
}
