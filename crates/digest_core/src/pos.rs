use crate::frequency::{count_ranked, FrequencyTable};
use crate::lexicon;
use crate::words::split_tokens;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

pub trait PosTagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Deterministic tagger emitting Penn Treebank labels.
///
/// Closed-class words come from a fixed lexicon, known evaluative adjectives
/// are `JJ`, and everything else is decided by shape and suffix. Good enough
/// for frequency reports, not for parsing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconPosTagger;

impl PosTagger for LexiconPosTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        split_tokens(text)
            .into_iter()
            .enumerate()
            .map(|(position, word)| {
                let tag = tag_word(&word, position == 0);
                TaggedToken {
                    word,
                    tag: tag.to_string(),
                }
            })
            .collect()
    }
}

pub fn pos_frequencies(text: &str, tagger: &dyn PosTagger) -> FrequencyTable {
    count_ranked(tagger.tag(text).into_iter().map(|token| token.tag))
}

fn tag_word(word: &str, first: bool) -> &'static str {
    let lower = word.to_lowercase();

    if let Some(tag) = lexicon::closed_class_tag(&lower) {
        return tag;
    }
    if lower.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return "CD";
    }
    if lexicon::adjective(&lower).is_some() {
        return "JJ";
    }
    if lower.ends_with("n't") {
        return "RB";
    }
    if !first && word.chars().next().is_some_and(char::is_uppercase) {
        return if lower.ends_with('s') && lower.len() > 3 {
            "NNPS"
        } else {
            "NNP"
        };
    }
    suffix_tag(&lower)
}

fn suffix_tag(lower: &str) -> &'static str {
    const ADJECTIVE_SUFFIXES: &[&str] = &[
        "ous", "ful", "ive", "able", "ible", "less", "ish", "ical", "ic", "al",
    ];

    if lower.len() > 4 && lower.ends_with("ly") {
        return "RB";
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return "VBG";
    }
    if lower.len() > 3 && lower.ends_with("ed") {
        return "VBD";
    }
    if lower.len() > 4 && lower.ends_with("est") {
        return "JJS";
    }
    if lower.len() > 4
        && ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| lower.ends_with(suffix))
    {
        return "JJ";
    }
    if lower.len() > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return "NNS";
    }
    "NN"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_pick_open_class_tags() {
        assert_eq!(suffix_tag("quickly"), "RB");
        assert_eq!(suffix_tag("reading"), "VBG");
        assert_eq!(suffix_tag("finished"), "VBD");
        assert_eq!(suffix_tag("books"), "NNS");
        assert_eq!(suffix_tag("glass"), "NN");
        assert_eq!(suffix_tag("famous"), "JJ");
        assert_eq!(suffix_tag("novel"), "NN");
    }

    #[test]
    fn capitalized_word_mid_sentence_is_proper_noun() {
        assert_eq!(tag_word("Dune", false), "NNP");
        assert_eq!(tag_word("Dune", true), "NN");
        assert_eq!(tag_word("The", true), "DT");
    }
}
