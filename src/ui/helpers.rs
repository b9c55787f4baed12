//! Plain-text layout helpers for the terminal output. Kept free of any
//! styling so the line-breaking logic stays trivially testable.

/// Greedy word wrap. A word longer than the width gets a line of its own
/// rather than being split mid-word. Empty input still yields one empty
/// line so field labels keep their row.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Wrap with a hanging indent: continuation lines are pushed right so a
/// multi-line reading stays visually attached to its citation number.
pub(crate) fn wrap_hanging(text: &str, width: usize, indent: usize) -> Vec<String> {
    let indent_str = " ".repeat(indent);
    wrap(text, width.saturating_sub(indent))
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line
            } else {
                format!("{indent_str}{line}")
            }
        })
        .collect()
}

/// Left-pad a string to an exact column width.
pub(crate) fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_the_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 15);
        assert!(lines.iter().all(|l| l.len() <= 15));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_of_empty_text_keeps_one_blank_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn overlong_words_get_their_own_line() {
        let lines = wrap("a Nebuchadnezzar b", 6);
        assert_eq!(lines, vec!["a", "Nebuchadnezzar", "b"]);
    }

    #[test]
    fn hanging_wrap_indents_continuations_only() {
        let lines = wrap_hanging("one two three four five six", 12, 2);
        assert!(!lines[0].starts_with(' '));
        assert!(lines[1..].iter().all(|l| l.starts_with("  ")));
    }

    #[test]
    fn pad_fills_to_the_column() {
        assert_eq!(pad("ab", 5), "ab   ");
        assert_eq!(pad("abcdef", 5), "abcdef");
    }
}
