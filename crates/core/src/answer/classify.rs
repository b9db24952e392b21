use std::sync::LazyLock;

use regex::Regex;

use super::types::LineKind;

// Only options a–e are recognised; a question with more options falls back to the last line.
// The letter must end the word: a bare prefix match would also accept "réponse B2" or
// "réponse Cé", which are not single-letter answers.
static CANONICAL_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)question\s*\d+\s*réponse\s*[a-e]\b").expect("canonical answer pattern")
});

static NOT_CONFIDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pas\s+sûr").expect("not confident pattern"));

static ILLEGIBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recommence").expect("illegible pattern"));

/// Classify a single reply line.
///
/// Matching is case-insensitive and looks for the pattern anywhere in the line.
/// The canonical answer takes precedence over the other two signals.
pub fn classify_line(line: &str) -> LineKind {
    if CANONICAL_ANSWER.is_match(line) {
        LineKind::CanonicalAnswer
    } else if NOT_CONFIDENT.is_match(line) {
        LineKind::NotConfident
    } else if ILLEGIBLE.is_match(line) {
        LineKind::Illegible
    } else {
        LineKind::Unrecognized
    }
}
