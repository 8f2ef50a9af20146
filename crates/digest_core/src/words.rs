use crate::frequency::{count_ranked, FrequencyTable};

/// Splits text into word tokens, keeping the original case.
///
/// Letters and digits form words; apostrophes and hyphens are kept only
/// between word characters ("don't", "well-known").
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || is_joiner(c)))
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(|token| token.replace('\u{2019}', "'"))
        .collect()
}

/// Lower-cased word tokens.
pub fn tokenize_words(text: &str) -> Vec<String> {
    split_tokens(text)
        .into_iter()
        .map(|token| token.to_lowercase())
        .collect()
}

pub fn word_frequencies(text: &str) -> FrequencyTable {
    count_ranked(tokenize_words(text))
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-')
}
