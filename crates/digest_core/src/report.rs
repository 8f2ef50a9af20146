use crate::frequency::FrequencyTable;
use crate::pos::{pos_frequencies, PosTagger};
use crate::sentiment::{sentiment_series, SentimentScorer, SentimentSeries};
use crate::words::word_frequencies;

/// The three read-only reports over a batch of plain-text posts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisReport {
    pub word_frequencies: FrequencyTable,
    pub pos_frequencies: FrequencyTable,
    pub sentiment: SentimentSeries,
}

/// Word and tag tables run over all posts joined by a space; sentiment is
/// scored per post.
pub fn analyze<S: AsRef<str>>(
    posts: &[S],
    tagger: &dyn PosTagger,
    scorer: &dyn SentimentScorer,
) -> AnalysisReport {
    let joined = posts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    AnalysisReport {
        word_frequencies: word_frequencies(&joined),
        pos_frequencies: pos_frequencies(&joined, tagger),
        sentiment: sentiment_series(posts, scorer),
    }
}
