//! Plain-text helpers for widgets that need to know their height up front.

/// Greedy word wrap to `width` columns (counted in chars).
///
/// Explicit newlines start a new line; words longer than `width` are split.
/// An empty input yields one empty line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let sep = usize::from(line_len > 0);
            if line_len + sep + word.len() > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            } else if sep == 1 {
                line.push(' ');
                line_len += 1;
            }
            line_len += word.len();
            line.extend(word);
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("Open until 3 PM today", 10),
            vec!["Open until", "3 PM today"]
        );
    }

    #[test]
    fn test_keeps_explicit_newlines() {
        assert_eq!(
            wrap_text("I can help you with:\n• Mensa menu", 40),
            vec!["I can help you with:", "• Mensa menu"]
        );
    }

    #[test]
    fn test_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(wrap_text("", 5), vec![String::new()]);
    }
}
