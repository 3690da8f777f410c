//! Text Measurement
//!
//! Utilities for measuring text dimensions in terminal cells.
//!
//! Terminal text width depends on Unicode character widths:
//! - ASCII characters: 1 cell
//! - CJK characters: 2 cells (fullwidth)
//! - Zero-width characters: 0 cells
//!
//! Widths come from `unicode-width`; wrapping walks `unicode-segmentation`
//! word bounds so words stay intact.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Measure the display width of a string in terminal cells.
#[inline]
pub fn string_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s) as u16
}

/// Word-wrap text to a given width.
///
/// Returns a vector of lines, each fitting within the specified width.
/// Explicit newlines are respected. A single word wider than the line is
/// hard-broken rather than overflowing.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0u16;

        for word in paragraph.split_word_bounds() {
            let word_width = string_width(word);

            if current_width + word_width > width && !current.is_empty() {
                lines.push(current.trim_end().to_string());
                current = String::new();
                current_width = 0;

                // Whitespace at a wrap point disappears
                if word.trim().is_empty() {
                    continue;
                }
            }

            if word_width > width {
                // Oversized word: hard-break char by char
                for c in word.chars() {
                    let cw = UnicodeWidthChar::width(c).unwrap_or(0) as u16;
                    if current_width + cw > width && !current.is_empty() {
                        lines.push(current.trim_end().to_string());
                        current = String::new();
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += cw;
                }
            } else {
                current.push_str(word);
                current_width += word_width;
            }
        }

        lines.push(current.trim_end().to_string());
    }

    lines
}

/// Truncate text to fit within a given width.
///
/// If text is longer than width, it's truncated and an ellipsis is added.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }
    if string_width(text) <= width {
        return text.to_string();
    }

    // Need to truncate - leave room for ellipsis
    let target_width = width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0u16;

    for c in text.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0) as u16;
        if current_width + cw > target_width {
            break;
        }
        result.push(c);
        current_width += cw;
    }

    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("a b c"), 5);
    }

    #[test]
    fn test_string_width_fullwidth() {
        assert_eq!(string_width("日本"), 4);
        assert_eq!(string_width("a日b"), 4);
    }

    #[test]
    fn test_wrap_text_keeps_words_intact() {
        let lines = wrap_text("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_text_fits_width() {
        let lines = wrap_text("lorem ipsum dolor sit amet consectetur", 12);
        for line in &lines {
            assert!(string_width(line) <= 12, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_wrap_text_newlines() {
        let lines = wrap_text("a\nb", 10);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_text_oversized_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("", 5), "");
    }

    #[test]
    fn test_truncate_text_exact() {
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("hello", 4), "hel…");
    }
}
