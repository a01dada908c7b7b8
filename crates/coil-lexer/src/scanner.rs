/// Coil source scanner.
///
/// Holds the immutable source text and the read cursor over it.
/// The cursor is a character offset, `0 <= pos <= len`, and only ever
/// moves forward; matches never rewind it. All parsing logic lives in
/// the matcher — the scanner is pure position bookkeeping.
///
/// Uses a `Vec<char>` for index-based navigation so that reported
/// offsets count characters, not bytes.
pub struct Scanner<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source, cursor at offset 0.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    /// The source text the scanner was created with.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current cursor offset. No side effect.
    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor forward to `pos`.
    ///
    /// The cursor is monotonic: `pos` must be at or past the current
    /// offset and within the text.
    pub fn advance_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor may not move backward");
        debug_assert!(pos <= self.chars.len(), "cursor past end of text");
        self.pos = pos;
    }

    /// Advance the cursor past a maximal run of whitespace and
    /// `#`-to-end-of-line comments, interleaved in any order.
    ///
    /// Never fails; if nothing matches, the cursor is unchanged.
    /// Idempotent: a second call in a row is a no-op.
    pub fn skip_ws_and_comments(&mut self) {
        loop {
            match self.chars.get(self.pos) {
                Some(c) if c.is_whitespace() => self.pos += 1,
                Some('#') => {
                    // Comment runs to the newline; the newline itself is
                    // whitespace and gets consumed on the next iteration.
                    while let Some(&c) = self.chars.get(self.pos) {
                        if c == '\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    /// The full text as characters, for pattern functions.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The text between two character offsets.
    pub fn text_between(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// The unscanned remainder of the text, from the cursor on.
    pub fn remaining(&self) -> String {
        self.chars[self.pos..].iter().collect()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Construction and cursor
    // =========================================================================

    #[test]
    fn test_new_scanner_starts_at_zero() {
        let scanner = Scanner::new("abc");
        assert_eq!(scanner.current_pos(), 0);
        assert!(!scanner.is_at_end());
    }

    #[test]
    fn test_empty_source_is_at_end() {
        let scanner = Scanner::new("");
        assert_eq!(scanner.current_pos(), 0);
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_advance_to() {
        let mut scanner = Scanner::new("abcdef");
        scanner.advance_to(3);
        assert_eq!(scanner.current_pos(), 3);
        assert_eq!(scanner.remaining(), "def");
    }

    #[test]
    fn test_advance_to_end() {
        let mut scanner = Scanner::new("abc");
        scanner.advance_to(3);
        assert!(scanner.is_at_end());
        assert_eq!(scanner.remaining(), "");
    }

    #[test]
    fn test_text_between() {
        let scanner = Scanner::new("@my-name: value");
        assert_eq!(scanner.text_between(0, 8), "@my-name");
    }

    // =========================================================================
    // Whitespace and comment skipping
    // =========================================================================

    #[test]
    fn test_skip_nothing() {
        let mut scanner = Scanner::new("name:");
        scanner.skip_ws_and_comments();
        assert_eq!(scanner.current_pos(), 0);
    }

    #[test]
    fn test_skip_spaces_and_tabs() {
        let mut scanner = Scanner::new("  \t name:");
        scanner.skip_ws_and_comments();
        assert_eq!(scanner.current_pos(), 4);
        assert_eq!(scanner.remaining(), "name:");
    }

    #[test]
    fn test_skip_newlines() {
        let mut scanner = Scanner::new("\n\r\n name:");
        scanner.skip_ws_and_comments();
        assert_eq!(scanner.remaining(), "name:");
    }

    #[test]
    fn test_skip_comment_to_eol() {
        let mut scanner = Scanner::new("# comment\nname:");
        scanner.skip_ws_and_comments();
        assert_eq!(scanner.remaining(), "name:");
    }

    #[test]
    fn test_skip_interleaved_ws_and_comments() {
        let mut scanner = Scanner::new("  # one\n\t# two\n\n  name:");
        scanner.skip_ws_and_comments();
        assert_eq!(scanner.remaining(), "name:");
    }

    #[test]
    fn test_skip_comment_at_eof_without_newline() {
        let mut scanner = Scanner::new("# trailing");
        scanner.skip_ws_and_comments();
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_skip_stops_at_non_ws_non_comment() {
        let mut scanner = Scanner::new("  @name: # not skipped");
        scanner.skip_ws_and_comments();
        assert_eq!(scanner.current_pos(), 2);
        assert_eq!(scanner.remaining(), "@name: # not skipped");
    }

    #[test]
    fn test_skip_is_idempotent() {
        let mut scanner = Scanner::new("  # comment\n@my-name: value");
        scanner.skip_ws_and_comments();
        let pos = scanner.current_pos();
        scanner.skip_ws_and_comments();
        assert_eq!(scanner.current_pos(), pos);
    }

    #[test]
    fn test_skip_on_empty_source() {
        let mut scanner = Scanner::new("");
        scanner.skip_ws_and_comments();
        assert_eq!(scanner.current_pos(), 0);
    }

    #[test]
    fn test_skip_whitespace_only_source() {
        let mut scanner = Scanner::new("   \n\t  ");
        scanner.skip_ws_and_comments();
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        // "é" is two bytes but one char; the comment must not skew offsets.
        let mut scanner = Scanner::new("# café\nname:");
        scanner.skip_ws_and_comments();
        assert_eq!(scanner.current_pos(), 7);
        assert_eq!(scanner.remaining(), "name:");
    }
}
