use crate::lexicon;
use crate::words::tokenize_words;

/// Polarity in `[-1.0, 1.0]`, subjectivity in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

/// Parallel per-post series, indexed by post position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SentimentSeries {
    pub polarity: Vec<f64>,
    pub subjectivity: Vec<f64>,
}

impl SentimentSeries {
    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }

    pub fn push(&mut self, score: SentimentScore) {
        self.polarity.push(score.polarity);
        self.subjectivity.push(score.subjectivity);
    }

    pub fn mean_polarity(&self) -> Option<f64> {
        mean(&self.polarity)
    }

    pub fn mean_subjectivity(&self) -> Option<f64> {
        mean(&self.subjectivity)
    }
}

pub fn sentiment_series<S: AsRef<str>>(
    posts: &[S],
    scorer: &dyn SentimentScorer,
) -> SentimentSeries {
    let mut series = SentimentSeries::default();
    for post in posts {
        series.push(scorer.score(post.as_ref()));
    }
    series
}

/// Averages adjective scores over the text.
///
/// A negation before an adjective multiplies its polarity by -0.5; an
/// intensifier scales both polarity and subjectivity. Modifiers apply to the
/// next adjective only and are dropped by any other word.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentimentScorer;

impl SentimentScorer for LexiconSentimentScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();
        let mut negated = false;
        let mut factor = 1.0;

        for word in tokenize_words(text) {
            if let Some((polarity, subjectivity)) = lexicon::adjective(&word) {
                let mut polarity = polarity * factor;
                if negated {
                    polarity *= -0.5;
                }
                polarities.push(polarity.clamp(-1.0, 1.0));
                subjectivities.push((subjectivity * factor).clamp(0.0, 1.0));
                negated = false;
                factor = 1.0;
            } else if lexicon::is_negation(&word) {
                negated = true;
            } else if let Some(multiplier) = lexicon::intensity(&word) {
                factor *= multiplier;
            } else {
                negated = false;
                factor = 1.0;
            }
        }

        SentimentScore {
            polarity: mean(&polarities).unwrap_or(0.0),
            subjectivity: mean(&subjectivities).unwrap_or(0.0),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
