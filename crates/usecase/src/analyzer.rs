use line_tally_domain::analytics::analyze_text;
use line_tally_domain::model::AnalysisResult;
use line_tally_ports::content::ContentSource;
use line_tally_shared_kernel::Result;

/// Use case computing word, line and unique-word statistics from whatever
/// content the injected source yields.
pub struct AnalyzeContent<'a> {
    source: &'a mut dyn ContentSource,
}

impl<'a> AnalyzeContent<'a> {
    pub fn new(source: &'a mut dyn ContentSource) -> Self {
        Self { source }
    }

    /// Read everything the source holds and compute its statistics.
    ///
    /// Only the read can fail; empty content is a zero-filled result, not
    /// an error.
    pub fn run(self) -> Result<AnalysisResult> {
        let content = self.source.read_all()?;
        Ok(analyze_text(&content))
    }
}
