//! Paragraph cleanup and sentence-per-line comment formatting.
//!
//! Sentence detection is deliberately naive: a unit ends at `.`, `!` or `?`
//! followed by a single space, or at a line break. Abbreviations like "e.g. "
//! split too.

/// Characters that end a sentence when directly followed by a space
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Strip every line, drop the ones left empty and join the rest with `\n`.
pub fn cleanup<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<String> = lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();
    kept.join("\n")
}

/// [`cleanup`] over the lines of a single block of text
pub fn cleanup_text(text: &str) -> String {
    cleanup(text.lines())
}

/// Split text into raw sentence units.
///
/// The terminator stays with its sentence and the space after it is consumed.
/// Units are returned untrimmed and may be empty.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '\n' {
            units.push(&text[start..i]);
            start = i + 1;
        } else if SENTENCE_TERMINATORS.contains(&c) {
            if let Some(&(space_at, ' ')) = chars.peek() {
                units.push(&text[start..space_at]);
                chars.next();
                start = space_at + 1;
            }
        }
    }
    units.push(&text[start..]);
    units
}

/// Put every sentence of `text` on its own line behind `symbol` and a space.
///
/// Any string is accepted as the symbol. Blank units are dropped, so the result
/// is empty when `text` holds nothing but whitespace.
pub fn format_as_comment(text: &str, symbol: &str) -> String {
    let lines: Vec<String> = split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(|unit| format!("{} {}", symbol, unit))
        .collect();

    tracing::debug!(symbol, sentences = lines.len(), "formatted text as comments");
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup() {
        assert_eq!(cleanup(["  hello  ", "", "world  "]), "hello\nworld");
        assert_eq!(cleanup(["", "   ", "\t"]), "");
        assert_eq!(cleanup(Vec::<String>::new()), "");
    }

    #[test]
    fn test_cleanup_keeps_order() {
        let lines = vec!["c".to_string(), " b ".to_string(), "a".to_string()];
        assert_eq!(cleanup(&lines), "c\nb\na");
    }

    #[test]
    fn test_cleanup_text() {
        assert_eq!(cleanup_text("\n  first line\r\n\n second \n"), "first line\nsecond");
    }

    #[test]
    fn test_format_two_sentences() {
        let out = format_as_comment("Bees fly. They don't care.", "#");
        assert_eq!(out, "# Bees fly.\n# They don't care.");
    }

    #[test]
    fn test_format_no_terminator() {
        assert_eq!(format_as_comment("no punctuation here", "//"), "// no punctuation here");
    }

    #[test]
    fn test_format_mixed_terminators() {
        let out = format_as_comment("Really? Yes! Fine.", "--");
        assert_eq!(out, "-- Really?\n-- Yes!\n-- Fine.");
    }

    #[test]
    fn test_format_consecutive_terminators() {
        // "?!" only splits after the last mark, where the space is
        assert_eq!(format_as_comment("What?! No way", "%"), "% What?!\n% No way");
        assert_eq!(format_as_comment("v1.2.3 is out", ";"), "; v1.2.3 is out");
    }

    #[test]
    fn test_format_drops_empty_units() {
        assert_eq!(format_as_comment("One.  . Two. ", "'"), "' One.\n' .\n' Two.");
        assert_eq!(format_as_comment("   ", "#"), "");
        assert_eq!(format_as_comment("", "#"), "");
    }

    #[test]
    fn test_format_splits_on_newlines() {
        assert_eq!(format_as_comment("first\nsecond. third", "#"), "# first\n# second.\n# third");
    }

    #[test]
    fn test_split_sentences_raw() {
        assert_eq!(split_sentences("A. B! C? D"), vec!["A.", "B!", "C?", "D"]);
        assert_eq!(split_sentences("End. "), vec!["End.", ""]);
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn test_split_sentences_multibyte() {
        assert_eq!(split_sentences("Café ok. Ünïcode!"), vec!["Café ok.", "Ünïcode!"]);
    }
}
