//! Coil Lexer
//!
//! Lexical front end for `.coil` configuration files: a position-tracking
//! scanner over the source text, a committed-match engine, and the
//! element-name rule built on top of it.
//!
//! A rule is a [`MatchRule`]: a begin pattern, a body pattern, and a
//! trailer pattern. If the begin pattern does not apply, the rule reports
//! "no match" and the cursor stays put so the caller can try another rule.
//! Once the begin pattern has matched, the rule is committed: anything
//! short of a full match is a hard [`ParseError`] carrying the offset
//! where the token began. There is no backtracking past a committed begin.
//!
//! # Example
//!
//! ```
//! use coil_lexer::{Matcher, Scanner};
//!
//! let mut scanner = Scanner::new("# config root\n@server: ...");
//! scanner.skip_ws_and_comments();
//! let name = Matcher::new(&mut scanner).match_name().unwrap().unwrap();
//! assert_eq!(name.text, "@server");
//! ```

pub mod matcher;
pub mod scanner;
pub mod token;

pub use matcher::{MatchResult, MatchRule, Matcher, ELEMENT_NAME};
pub use scanner::Scanner;
pub use token::NameToken;

/// Lexer error with position information.
///
/// `pos` is the 0-based character offset at which the failure occurred.
/// Every failure path in this crate populates both fields; there is no
/// other error shape.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at offset {pos}: {message}")]
pub struct ParseError {
    pub message: String,
    pub pos: usize,
}
