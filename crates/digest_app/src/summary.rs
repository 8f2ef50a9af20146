use std::fmt;

use digest_core::{top_n, FrequencyEntry};
use digest_engine::DigestReport;

use crate::config::AnalysisConfig;

/// Plain-text run summary printed to stdout.
pub struct Summary<'a> {
    report: &'a DigestReport,
    analysis: &'a AnalysisConfig,
}

impl<'a> Summary<'a> {
    pub fn new(report: &'a DigestReport, analysis: &'a AnalysisConfig) -> Self {
        Self { report, analysis }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "posts fetched:   {}", report.post_count)?;
        writeln!(f, "markdown files:  {}", report.markdown_files.len())?;
        writeln!(f, "rewritten files: {}", report.rewrite.files.len())?;
        writeln!(f, "links rewritten: {}", report.rewrite.links_rewritten)?;

        let Some(result) = &report.analysis else {
            return Ok(());
        };
        write_table(f, "top words", top_n(&result.word_frequencies, self.analysis.top_words))?;
        write_table(f, "top tags", top_n(&result.pos_frequencies, self.analysis.top_tags))?;

        writeln!(f, "\nsentiment (post, polarity, subjectivity)")?;
        let sentiment = &result.sentiment;
        for (index, (polarity, subjectivity)) in
            sentiment.polarity.iter().zip(&sentiment.subjectivity).enumerate()
        {
            writeln!(f, "{index:>5} {polarity:>8.3} {subjectivity:>8.3}")?;
        }
        if let (Some(p), Some(s)) = (sentiment.mean_polarity(), sentiment.mean_subjectivity()) {
            writeln!(f, " mean {p:>8.3} {s:>8.3}")?;
        }
        Ok(())
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, title: &str, rows: &[FrequencyEntry]) -> fmt::Result {
    writeln!(f, "\n{title}")?;
    for row in rows {
        writeln!(f, "{:>6}  {}", row.count, row.item)?;
    }
    Ok(())
}
