//! Text layout helpers for template descriptions.

/// Column width used for long descriptions in `info` tables.
pub const DESCRIPTION_WIDTH: usize = 50;

/// Wrap `text` so that no line exceeds `width` characters.
///
/// Lines break at the last space inside the window, which is replaced by a
/// newline. Other spaces around a break are dropped. A window without any
/// space is broken at the width boundary. Existing newlines are kept and
/// start a new window. A `width` of zero returns the text unchanged.
pub fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut wrapped = String::with_capacity(text.len() + text.len() / width + 1);
    let mut line: Vec<char> = Vec::with_capacity(width + 1);
    // A break is held back until a non-space follows it, so spaces at a
    // break point never start or end a line.
    let mut pending_break = false;

    for c in text.chars() {
        if c == '\n' {
            pending_break = false;
            wrapped.extend(line.drain(..));
            wrapped.push('\n');
            continue;
        }
        if pending_break {
            if c == ' ' {
                continue;
            }
            wrapped.push('\n');
            pending_break = false;
        }

        line.push(c);
        if line.len() <= width {
            continue;
        }

        match line.iter().rposition(|&ch| ch == ' ') {
            Some(space) => {
                let end = line[..space]
                    .iter()
                    .rposition(|&ch| ch != ' ')
                    .map_or(0, |last| last + 1);
                wrapped.extend(&line[..end]);
                line.drain(..=space);
            }
            None => {
                let rest = line.split_off(width);
                wrapped.extend(line.drain(..));
                line = rest;
            }
        }

        if line.is_empty() {
            pending_break = true;
        } else {
            wrapped.push('\n');
        }
    }

    wrapped.extend(line);
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lines_fit(text: &str, width: usize) {
        for line in text.lines() {
            assert!(
                line.chars().count() <= width,
                "line '{}' is longer than {}",
                line,
                width
            );
        }
    }

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(wrap_text("A small CLI", 50), "A small CLI");
    }

    #[test]
    fn empty_text_is_unchanged() {
        assert_eq!(wrap_text("", 50), "");
    }

    #[test]
    fn breaks_at_last_space_in_window() {
        assert_eq!(wrap_text("aaa bbb ccc", 7), "aaa bbb\nccc");
        assert_eq!(wrap_text("aaa bbbb", 6), "aaa\nbbbb");
    }

    #[test]
    fn never_splits_words_when_a_space_exists() {
        let text = "Ships with Poetry packaging, pytest, Sphinx documentation, pre-configured linting and GitHub Actions workflows.";
        let wrapped = wrap_text(text, DESCRIPTION_WIDTH);

        assert_lines_fit(&wrapped, DESCRIPTION_WIDTH);
        let original_words: Vec<&str> = text.split_whitespace().collect();
        let wrapped_words: Vec<&str> = wrapped.split_whitespace().collect();
        assert_eq!(original_words, wrapped_words);
    }

    #[test]
    fn line_of_exactly_width_is_not_broken() {
        let text = "x".repeat(50);
        assert_eq!(wrap_text(&text, 50), text);
    }

    #[test]
    fn word_longer_than_width_is_hard_broken() {
        let text = "y".repeat(120);
        let wrapped = wrap_text(&text, 50);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 50);
        assert_eq!(lines[1].len(), 50);
        assert_eq!(lines[2].len(), 20);
    }

    #[test]
    fn long_word_after_short_one_moves_to_next_line_first() {
        let text = format!("ab {}", "z".repeat(60));
        let wrapped = wrap_text(&text, 50);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines[0], "ab");
        assert_lines_fit(&wrapped, 50);
        assert_eq!(wrapped.replace('\n', "").len(), 62);
    }

    #[test]
    fn existing_newlines_reset_the_window() {
        assert_eq!(wrap_text("aaaa\nbbbb cc", 7), "aaaa\nbbbb cc");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "ééééé ééééé";
        assert_eq!(wrap_text(text, 5), "ééééé\nééééé");
    }

    #[test]
    fn spaces_at_a_break_are_dropped() {
        let text = format!("{}  b", "a".repeat(49));
        assert_eq!(wrap_text(&text, 50), format!("{}\nb", "a".repeat(49)));
    }

    #[test]
    fn trailing_space_after_full_window_adds_no_line() {
        let text = format!("{} ", "a".repeat(50));
        assert_eq!(wrap_text(&text, 50), "a".repeat(50));
    }

    #[test]
    fn zero_width_returns_input() {
        assert_eq!(wrap_text("a b c", 0), "a b c");
    }
}
