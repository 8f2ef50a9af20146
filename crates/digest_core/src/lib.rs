//! Digest core: pure segment planning and text analysis helpers.
mod frequency;
mod lexicon;
mod pos;
mod report;
mod segment;
mod sentiment;
mod words;

pub use frequency::{count_ranked, top_n, FrequencyEntry, FrequencyTable};
pub use pos::{pos_frequencies, LexiconPosTagger, PosTagger, TaggedToken};
pub use report::{analyze, AnalysisReport};
pub use segment::{effective_file_count, plan_segments, separator, FileSegment, LINE_BREAK};
pub use sentiment::{
    sentiment_series, LexiconSentimentScorer, SentimentScore, SentimentScorer, SentimentSeries,
};
pub use words::{split_tokens, tokenize_words, word_frequencies};
