use super::classify::classify_line;
use super::types::{ExtractedAnswer, LineKind};

/// Pick the answer line out of a model reply.
///
/// Blank lines are ignored. The reply is scanned from the last line to the first and the
/// first line carrying a signal (canonical answer, not confident, illegible) wins. When no
/// line carries a signal the last non-blank line is used. Returns `None` when the reply has
/// no non-blank line at all.
pub fn extract_answer_with_kind(reply: &str) -> Option<ExtractedAnswer> {
    let lines: Vec<&str> = reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let last = *lines.last()?;

    let found = lines
        .iter()
        .rev()
        .map(|line| (*line, classify_line(line)))
        .find(|(_, kind)| kind.is_signal());

    let (answer, kind) = found.unwrap_or((last, LineKind::Unrecognized));

    Some(ExtractedAnswer {
        answer: answer.to_string(),
        kind,
    })
}

/// Same as [`extract_answer_with_kind`], keeping only the line.
pub fn extract_answer(reply: &str) -> Option<String> {
    extract_answer_with_kind(reply).map(|extracted| extracted.answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_last_line() {
        assert_eq!(
            extract_answer("Ligne 1\nLigne 2\nQuestion 5 réponse C\n").as_deref(),
            Some("Question 5 réponse C")
        );
    }

    #[test]
    fn test_not_confident() {
        assert_eq!(
            extract_answer("blah\nblah\nPas sûr\n").as_deref(),
            Some("Pas sûr")
        );
    }

    #[test]
    fn test_illegible() {
        assert_eq!(
            extract_answer("texte illisible\nRecommence").as_deref(),
            Some("Recommence")
        );
    }

    #[test]
    fn test_single_line_without_signal() {
        assert_eq!(extract_answer("42").as_deref(), Some("42"));
    }

    #[test]
    fn test_out_of_range_letter_falls_back_to_last_line() {
        let extracted = extract_answer_with_kind("Question 3 réponse F").unwrap();
        assert_eq!(extracted.answer, "Question 3 réponse F");
        assert_eq!(extracted.kind, LineKind::Unrecognized);
    }

    #[test]
    fn test_trailing_commentary_after_answer() {
        let reply = "1. PERCEPTION\n[1,1] cercle noir\n\n\
                     Question 8 réponse B\n\nJ'espère que cela aide !";
        let extracted = extract_answer_with_kind(reply).unwrap();
        assert_eq!(extracted.answer, "Question 8 réponse B");
        assert_eq!(extracted.kind, LineKind::CanonicalAnswer);
    }

    #[test]
    fn test_not_confident_keeps_source_casing() {
        assert_eq!(
            extract_answer("analyse\nPAS SÛR\nfin de l'analyse").as_deref(),
            Some("PAS SÛR")
        );
    }

    #[test]
    fn test_latest_signal_wins() {
        let reply = "Question 1 réponse A\nEn fait non\nPas sûr";
        assert_eq!(extract_answer(reply).as_deref(), Some("Pas sûr"));

        let reply = "Pas sûr\nEn y regardant mieux\nQuestion 1 réponse D";
        assert_eq!(
            extract_answer(reply).as_deref(),
            Some("Question 1 réponse D")
        );
    }

    #[test]
    fn test_lines_are_trimmed() {
        assert_eq!(
            extract_answer("  raisonnement  \n   Question 2 réponse e   \n").as_deref(),
            Some("Question 2 réponse e")
        );
        assert_eq!(
            extract_answer("alpha\n   omega   \n\n").as_deref(),
            Some("omega")
        );
    }

    #[test]
    fn test_crlf_line_breaks() {
        assert_eq!(
            extract_answer("Ligne 1\r\nRecommence\r\n").as_deref(),
            Some("Recommence")
        );
    }

    #[test]
    fn test_fallback_uses_last_non_blank_line() {
        let extracted =
            extract_answer_with_kind("premier\ndeuxième\n\n  \ntroisième\n  ").unwrap();
        assert_eq!(extracted.answer, "troisième");
        assert_eq!(extracted.kind, LineKind::Unrecognized);
    }

    #[test]
    fn test_empty_reply() {
        assert_eq!(extract_answer(""), None);
        assert_eq!(extract_answer("   \n\t\n  "), None);
    }

    #[test]
    fn test_answer_is_one_of_the_lines() {
        let reply = "a\nbb\nQuestion 10 réponse c\nccc";
        let answer = extract_answer(reply).unwrap();
        assert!(reply.lines().any(|line| line.trim() == answer));
        let longest = reply.lines().map(str::len).max().unwrap();
        assert!(answer.len() <= longest);
    }
}
