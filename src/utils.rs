//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one double-byte character.
///
/// A double-byte character is any char outside the single-byte range
/// (code point above U+00FF). Accented Latin letters are single-byte-range
/// and do not count.
///
/// # Examples
///
/// ```
/// use hanseek::utils::has_double_byte;
///
/// assert!(has_double_byte("你好"));
/// assert!(has_double_byte("prefix 中文 suffix"));
/// assert!(!has_double_byte("Hello"));
/// assert!(!has_double_byte("héllo"));
/// assert!(!has_double_byte(""));
/// ```
pub fn has_double_byte(text: &str) -> bool {
    text.chars().any(|c| c as u32 > 0xFF)
}

/// Convert a byte offset into 1-based line and column numbers.
///
/// The column counts characters, not bytes, so it lines up with what an
/// editor displays. Offsets past the end of the source clamp to the last
/// position.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let clamped = offset.min(source.len());
    let mut line = 1;
    let mut col = 1;
    for (i, c) in source.char_indices() {
        if i >= clamped {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_has_double_byte() {
        // Should return true for CJK and other wide scripts
        assert!(has_double_byte("你好"));
        assert!(has_double_byte("テスト"));
        assert!(has_double_byte("한국어"));
        assert!(has_double_byte("abc中def"));

        // Should return false for ASCII and Latin-1 text
        assert!(!has_double_byte("Hello"));
        assert!(!has_double_byte("héllo"));
        assert!(!has_double_byte("123-456"));
        assert!(!has_double_byte(""));
    }

    #[test]
    fn test_line_col() {
        let source = "ab\ncd\nef";
        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 1), (1, 2));
        assert_eq!(line_col(source, 3), (2, 1));
        assert_eq!(line_col(source, 7), (3, 2));
    }

    #[test]
    fn test_line_col_counts_chars_not_bytes() {
        let source = "中文x";
        // "中文" is 6 bytes but 2 columns
        assert_eq!(line_col(source, 6), (1, 3));
    }

    #[test]
    fn test_line_col_clamps_past_end() {
        assert_eq!(line_col("ab", 100), (1, 3));
    }
}
