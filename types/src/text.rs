//! Message text helpers.

/// Split a multi-paragraph message on blank-line boundaries.
///
/// Line endings are normalized first so configs written on any platform
/// paragraph the same way. Leading/trailing whitespace per paragraph is
/// trimmed and empty paragraphs are dropped.
#[must_use]
pub fn paragraphs(message: &str) -> Vec<String> {
    let normalized = message.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::paragraphs;

    #[test]
    fn splits_on_blank_lines() {
        let message = "Dear you,\n\nTwo lines\nsame paragraph.\n\nYours.";
        assert_eq!(
            paragraphs(message),
            vec!["Dear you,", "Two lines\nsame paragraph.", "Yours."]
        );
    }

    #[test]
    fn normalizes_crlf() {
        assert_eq!(paragraphs("a\r\n\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn drops_empty_paragraphs() {
        assert_eq!(paragraphs("a\n\n\n\nb"), vec!["a", "b"]);
        assert!(paragraphs("\n\n").is_empty());
    }

    #[test]
    fn single_paragraph_passes_through() {
        assert_eq!(paragraphs("just one"), vec!["just one"]);
    }
}
