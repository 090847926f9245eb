//! The title + body document convention used for editing and export.
//!
//! A note is presented as a markdown-like document: the title as a `#`
//! heading, a blank line, then the plaintext body.

/// Build the editing/export document for a title and body.
pub fn assemble(title: &str, value: &str) -> String {
    format!("# {title}\n\n{value}")
}

/// Split an edited document back into its title and body.
///
/// The first line is the title, stripped of leading `#` markup and
/// surrounding whitespace; the remainder is the body, trimmed. A document
/// with no line break is title-only with an empty body.
pub fn split(document: &str) -> (String, String) {
    let (title_line, body) = document.split_once('\n').unwrap_or((document, ""));
    (parse_title(title_line), body.trim().to_string())
}

fn parse_title(line: &str) -> String {
    line.trim_start_matches('#').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble() {
        assert_eq!(assemble("T", "V"), "# T\n\nV");
        assert_eq!(assemble("T", ""), "# T\n\n");
    }

    #[test]
    fn test_split_round_trip() {
        let (title, body) = split("# T\n\nV");
        assert_eq!(title, "T");
        assert_eq!(body, "V");
    }

    #[test]
    fn test_split_tolerates_markup_and_whitespace() {
        let (title, body) = split("##  T  \n\n  V  ");
        assert_eq!(title, "T");
        assert_eq!(body, "V");

        let (title, body) = split("###T\nV");
        assert_eq!(title, "T");
        assert_eq!(body, "V");
    }

    #[test]
    fn test_split_without_line_break_is_title_only() {
        let (title, body) = split("# Just a title");
        assert_eq!(title, "Just a title");
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_keeps_interior_body_lines() {
        let (title, body) = split("# T\n\nline one\n\nline two\n");
        assert_eq!(title, "T");
        assert_eq!(body, "line one\n\nline two");
    }
}
