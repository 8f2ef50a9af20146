//! Small English word lists shared by the lexicon tagger and scorer.

/// (word, polarity, subjectivity) for common evaluative adjectives.
pub(crate) const ADJECTIVES: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("bland", -0.4, 0.7),
    ("boring", -1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("charming", 0.6, 0.8),
    ("clever", 0.5, 0.9),
    ("compelling", 0.5, 0.7),
    ("confusing", -0.4, 0.7),
    ("delightful", 0.9, 1.0),
    ("disappointing", -0.6, 0.7),
    ("dull", -0.3, 0.6),
    ("enjoyable", 0.5, 0.6),
    ("engaging", 0.5, 0.6),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("fascinating", 0.6, 0.9),
    ("favorite", 0.5, 1.0),
    ("fine", 0.4, 0.5),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("horrible", -1.0, 1.0),
    ("interesting", 0.5, 0.5),
    ("lovely", 0.5, 0.75),
    ("mediocre", -0.3, 0.6),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("poor", -0.4, 0.6),
    ("powerful", 0.3, 1.0),
    ("sad", -0.5, 1.0),
    ("slow", -0.3, 0.4),
    ("strange", -0.05, 0.15),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("tedious", -0.6, 0.8),
    ("ugly", -0.7, 1.0),
    ("unique", 0.375, 1.0),
    ("weak", -0.375, 0.625),
    ("weird", -0.5, 1.0),
    ("wonderful", 1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
];

/// Words that flip the polarity of the next scored word.
pub(crate) const NEGATIONS: &[&str] = &["not", "never", "no", "nor", "neither", "cannot"];

/// (word, multiplier) applied to the next scored word.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("really", 1.3),
    ("so", 1.2),
    ("very", 1.3),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

/// Closed-class words and their Penn Treebank tag.
pub(crate) const CLOSED_CLASS: &[(&str, &str)] = &[
    ("a", "DT"),
    ("an", "DT"),
    ("the", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("each", "DT"),
    ("every", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("all", "DT"),
    ("about", "IN"),
    ("after", "IN"),
    ("against", "IN"),
    ("although", "IN"),
    ("among", "IN"),
    ("as", "IN"),
    ("at", "IN"),
    ("because", "IN"),
    ("before", "IN"),
    ("between", "IN"),
    ("by", "IN"),
    ("during", "IN"),
    ("for", "IN"),
    ("from", "IN"),
    ("if", "IN"),
    ("in", "IN"),
    ("into", "IN"),
    ("of", "IN"),
    ("on", "IN"),
    ("over", "IN"),
    ("since", "IN"),
    ("than", "IN"),
    ("though", "IN"),
    ("through", "IN"),
    ("under", "IN"),
    ("until", "IN"),
    ("upon", "IN"),
    ("while", "IN"),
    ("with", "IN"),
    ("within", "IN"),
    ("without", "IN"),
    ("and", "CC"),
    ("but", "CC"),
    ("or", "CC"),
    ("nor", "CC"),
    ("yet", "CC"),
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("myself", "PRP"),
    ("itself", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("her", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("to", "TO"),
    ("be", "VB"),
    ("is", "VBZ"),
    ("has", "VBZ"),
    ("does", "VBZ"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("have", "VBP"),
    ("do", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("had", "VBD"),
    ("did", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("not", "RB"),
    ("never", "RB"),
    ("very", "RB"),
    ("too", "RB"),
    ("also", "RB"),
    ("just", "RB"),
    ("still", "RB"),
    ("even", "RB"),
    ("quite", "RB"),
    ("here", "RB"),
    ("there", "EX"),
    ("now", "RB"),
    ("then", "RB"),
    ("so", "RB"),
    ("which", "WDT"),
    ("what", "WP"),
    ("who", "WP"),
    ("whom", "WP"),
    ("whose", "WP$"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
];

pub(crate) fn adjective(word: &str) -> Option<(f64, f64)> {
    ADJECTIVES
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|&(_, polarity, subjectivity)| (polarity, subjectivity))
}

pub(crate) fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, factor)| factor)
}

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

pub(crate) fn closed_class_tag(word: &str) -> Option<&'static str> {
    CLOSED_CLASS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, tag)| tag)
}
