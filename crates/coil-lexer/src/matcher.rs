//! Committed-match engine and the element-name rule.
//!
//! A [`MatchRule`] is plain data: three pattern functions (begin, body,
//! trailer) plus the error messages to report when a committed phase
//! fails. One generic operation, [`Matcher::apply`], interprets any rule;
//! the grammar rules themselves are rule values, not hand-rolled loops.
//!
//! Commit semantics: if `begin` does not match at the cursor, the rule
//! reports [`MatchResult::NoMatch`] and leaves the cursor untouched.
//! Once `begin` has matched, the rule must run to completion — a failing
//! `body` or `trailer` is a [`ParseError`] positioned at the offset where
//! the token began, never a silent fallback to "no match".

use crate::scanner::Scanner;
use crate::token::NameToken;
use crate::ParseError;

/// A pattern function: given the text and a start offset, return the end
/// offset of the match, or `None` if the pattern does not apply there.
/// Zero-width matches (`Some(start)`) are legal.
pub type Pattern = fn(&[char], usize) -> Option<usize>;

/// Result of applying a match rule.
///
/// `NoMatch` means the begin pattern did not apply and the caller may try
/// another rule. Hard failures after a committed begin travel separately,
/// as `Err(ParseError)`.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    NoMatch,
    /// The text matched by begin plus body. Trailer characters are
    /// consumed from the stream but excluded from the text.
    Matched(String),
}

/// A three-phase grammar rule for [`Matcher::apply`].
///
/// `begin` is the lead-in: if it matches, the rule is committed. `body`
/// must match immediately after it, `trailer` immediately after that.
/// The returned text is begin + body; trailer is consumed but dropped.
pub struct MatchRule {
    pub begin: Pattern,
    pub body: Pattern,
    /// Message when `body` fails after a committed begin.
    pub body_error: &'static str,
    pub trailer: Pattern,
    /// Message when `trailer` fails; the matched text is appended
    /// in brackets.
    pub trailer_error: &'static str,
}

/// The element-name rule: `('@' | letter)` lead-in, then a run of
/// alphanumerics and single non-repeated separators, then optional
/// whitespace and a required `:`.
pub const ELEMENT_NAME: MatchRule = MatchRule {
    begin: name_begin,
    body: name_rest,
    body_error: "Badly-formed element name",
    trailer: name_end,
    trailer_error: "Could not find the required \":\" after element name",
};

/// Committed matcher over a scanner.
///
/// Borrows the scanner mutably for the duration of a match; the cursor
/// advances past each successful phase and never rewinds.
pub struct Matcher<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
}

impl<'s, 'a> Matcher<'s, 'a> {
    pub fn new(scanner: &'s mut Scanner<'a>) -> Self {
        Self { scanner }
    }

    /// Apply a rule at the current cursor.
    ///
    /// - `begin` fails: `Ok(NoMatch)`, cursor untouched.
    /// - `body` fails after a committed begin: `Err` with the rule's
    ///   `body_error`, positioned at the operation's starting offset.
    /// - `trailer` fails: `Err` with the rule's `trailer_error` and the
    ///   matched text, again positioned at the starting offset. The
    ///   cursor rests at the end of the body.
    /// - Full match: cursor advances past the trailer,
    ///   `Ok(Matched(text))` with the begin+body text.
    pub fn apply(&mut self, rule: &MatchRule) -> Result<MatchResult, ParseError> {
        let start = self.scanner.current_pos();

        let Some(begin_end) = (rule.begin)(self.scanner.chars(), start) else {
            return Ok(MatchResult::NoMatch);
        };

        // Committed from here on.
        let Some(body_end) = (rule.body)(self.scanner.chars(), begin_end) else {
            return Err(ParseError {
                message: rule.body_error.into(),
                pos: start,
            });
        };
        self.scanner.advance_to(body_end);
        let matched = self.scanner.text_between(start, body_end);

        let Some(trailer_end) = (rule.trailer)(self.scanner.chars(), body_end) else {
            return Err(ParseError {
                message: format!("{} [{matched}]", rule.trailer_error),
                pos: start,
            });
        };
        self.scanner.advance_to(trailer_end);

        Ok(MatchResult::Matched(matched))
    }

    /// Match an element name and its `:` delimiter at the cursor.
    ///
    /// Returns `Ok(None)` when no name begins here (cursor untouched),
    /// `Ok(Some(token))` on a full match with the cursor past the `:`.
    pub fn match_name(&mut self) -> Result<Option<NameToken>, ParseError> {
        match self.apply(&ELEMENT_NAME)? {
            MatchResult::NoMatch => Ok(None),
            MatchResult::Matched(text) => Ok(Some(NameToken::new(text))),
        }
    }
}

// --- Element-name patterns ---

fn is_name_sep(c: char) -> bool {
    matches!(c, '_' | '.' | '-')
}

/// Lead-in: exactly one `@` or ASCII letter.
fn name_begin(chars: &[char], start: usize) -> Option<usize> {
    match chars.get(start) {
        Some(&c) if c == '@' || c.is_ascii_alphabetic() => Some(start + 1),
        _ => None,
    }
}

/// Body: greedy run of ASCII alphanumerics and separators (`_` `.` `-`).
/// An identical separator may not appear twice in a row, and the run may
/// not end on a separator. Tracks the previous separator explicitly
/// instead of encoding the rule in a regex backreference.
fn name_rest(chars: &[char], start: usize) -> Option<usize> {
    let mut pos = start;
    let mut prev_sep: Option<char> = None;

    while let Some(&c) = chars.get(pos) {
        if c.is_ascii_alphanumeric() {
            prev_sep = None;
        } else if is_name_sep(c) {
            if prev_sep == Some(c) {
                return None; // doubled separator, e.g. "a--b"
            }
            prev_sep = Some(c);
        } else {
            break;
        }
        pos += 1;
    }

    // A name may not end on a separator ("ab-" is malformed). Greedy
    // consumption already guarantees the run ends at a non-name char.
    if prev_sep.is_some() {
        return None;
    }
    Some(pos)
}

/// Trailer: optional whitespace, then the mandatory `:`.
fn name_end(chars: &[char], start: usize) -> Option<usize> {
    let mut pos = start;
    while matches!(chars.get(pos), Some(c) if c.is_whitespace()) {
        pos += 1;
    }
    match chars.get(pos) {
        Some(':') => Some(pos + 1),
        _ => None,
    }
}
