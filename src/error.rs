//! Error types for FRED parsing.
//!
//! Parsing never stops at the first problem. Every stage of the pipeline
//! (lexing, grammar, value building) records what it finds and keeps going,
//! and the caller receives one [`ParseError`] holding the whole collection.
//!
//! ## Error Categories
//!
//! - **Lexical errors**: a character no token rule accepts
//! - **Syntax errors**: a token the grammar did not expect, with the rule in progress
//! - **Semantic errors**: a well-formed literal whose value is out of range
//!   (`0xFFFFFFFFFFFFFFFFFF`, `2021-02-30`, `"\uD800"`)
//! - **Encoding errors**: byte input that is not UTF-8 ([`parse_slice`](crate::parse_slice))
//! - **Nesting errors**: input nested deeper than [`ParseOptions::max_depth`](crate::ParseOptions)
//!
//! ## Examples
//!
//! ```rust
//! use fred::parse;
//!
//! let err = parse("{a 1 b: 2 c 3}").unwrap_err();
//! assert_eq!(err.len(), 2);
//! for problem in err.errors() {
//!     eprintln!("{}", problem);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// The grammar rule that was being matched when a syntax error was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Document,
    Stream,
    Value,
    Tagged,
    Attrs,
    Attr,
    Object,
    Pair,
    Array,
    Symbol,
    DateOrDateTime,
}

impl Rule {
    /// Returns the rule's name as it appears in the FRED grammar.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Rule::Document => "document",
            Rule::Stream => "stream",
            Rule::Value => "value",
            Rule::Tagged => "tagged",
            Rule::Attrs => "attrs",
            Rule::Attr => "attr",
            Rule::Object => "object",
            Rule::Pair => "pair",
            Rule::Array => "array",
            Rule::Symbol => "symbol",
            Rule::DateOrDateTime => "dateOrDateTime",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic produced while parsing FRED text.
///
/// Every variant carries the byte `offset` into the input together with a
/// 1-based `line` and `col` (counted in characters).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input that no token rule matches
    #[error("Lexical error at line {line}, column {col}: unexpected character {found:?}")]
    Lex {
        offset: usize,
        line: usize,
        col: usize,
        found: char,
    },

    /// Grammar violation
    #[error("Syntax error at line {line}, column {col} in {rule}: expected {expected}, found {found}")]
    Syntax {
        offset: usize,
        line: usize,
        col: usize,
        rule: Rule,
        expected: String,
        found: String,
    },

    /// Lexically valid literal that does not denote a value
    #[error("Semantic error at line {line}, column {col}: {reason}")]
    Semantic {
        offset: usize,
        line: usize,
        col: usize,
        reason: String,
    },

    /// Input bytes that are not UTF-8
    #[error("Encoding error at line {line}, column {col}: input is not valid UTF-8")]
    Encoding { offset: usize, line: usize, col: usize },

    /// Nesting beyond the configured depth limit
    #[error("Nesting error at line {line}, column {col}: input is nested deeper than {limit} levels")]
    NestingTooDeep {
        offset: usize,
        line: usize,
        col: usize,
        limit: usize,
    },
}

impl Error {
    /// Creates a lexical error for the character found at `offset`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fred::Error;
    ///
    /// let err = Error::lex("a\n@", 2, '@');
    /// assert!(err.to_string().contains("line 2, column 1"));
    /// ```
    pub fn lex(source: &str, offset: usize, found: char) -> Self {
        let (line, col) = line_col(source, offset);
        Error::Lex {
            offset,
            line,
            col,
            found,
        }
    }

    /// Creates a syntax error recorded while matching `rule`.
    pub fn syntax(source: &str, offset: usize, rule: Rule, expected: &str, found: &str) -> Self {
        let (line, col) = line_col(source, offset);
        Error::Syntax {
            offset,
            line,
            col,
            rule,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a semantic error for an out-of-range literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fred::Error;
    ///
    /// let err = Error::semantic("2021-02-30", 0, "invalid date `2021-02-30`");
    /// assert!(err.to_string().contains("invalid date"));
    /// ```
    pub fn semantic<T: fmt::Display>(source: &str, offset: usize, reason: T) -> Self {
        let (line, col) = line_col(source, offset);
        Error::Semantic {
            offset,
            line,
            col,
            reason: reason.to_string(),
        }
    }

    /// Creates an encoding error for input whose first `offset` bytes are
    /// valid UTF-8 text `valid`.
    pub fn encoding(valid: &str, offset: usize) -> Self {
        let (line, col) = line_col(valid, offset);
        Error::Encoding { offset, line, col }
    }

    /// Creates a nesting error for a region that starts at `offset`.
    pub fn nesting_too_deep(source: &str, offset: usize, limit: usize) -> Self {
        let (line, col) = line_col(source, offset);
        Error::NestingTooDeep {
            offset,
            line,
            col,
            limit,
        }
    }

    /// Byte offset into the input where the problem starts.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Error::Lex { offset, .. }
            | Error::Syntax { offset, .. }
            | Error::Semantic { offset, .. }
            | Error::Encoding { offset, .. }
            | Error::NestingTooDeep { offset, .. } => *offset,
        }
    }

    /// 1-based line of the problem.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Error::Lex { line, .. }
            | Error::Syntax { line, .. }
            | Error::Semantic { line, .. }
            | Error::Encoding { line, .. }
            | Error::NestingTooDeep { line, .. } => *line,
        }
    }

    /// 1-based column of the problem, in characters.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Error::Lex { col, .. }
            | Error::Syntax { col, .. }
            | Error::Semantic { col, .. }
            | Error::Encoding { col, .. }
            | Error::NestingTooDeep { col, .. } => *col,
        }
    }

    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self, Error::Lex { .. })
    }

    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }

    #[must_use]
    pub const fn is_semantic(&self) -> bool {
        matches!(self, Error::Semantic { .. })
    }
}

/// The aggregate failure returned by [`parse`](crate::parse).
///
/// Holds every diagnostic found in the input, ordered by source offset.
/// A `ParseError` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    errors: Vec<Error>,
}

impl ParseError {
    /// Builds the aggregate from per-stage diagnostics, ordering them by
    /// offset. Diagnostics at the same offset keep their stage order.
    ///
    /// Callers only build an aggregate once at least one stage has failed.
    pub(crate) fn from_errors(mut errors: Vec<Error>) -> Self {
        debug_assert!(!errors.is_empty());
        errors.sort_by_key(Error::offset);
        ParseError { errors }
    }

    /// All diagnostics, in source order.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the aggregate and returns the diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "found {} problem{} in FRED input",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl IntoIterator for ParseError {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseError {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Converts a byte offset into a 1-based (line, column) pair.
///
/// Offsets past the end of `source` resolve to the position just after the
/// last character.
pub(crate) fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let before = &source[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names_match_grammar() {
        let rules = [
            Rule::Document,
            Rule::Stream,
            Rule::Value,
            Rule::Tagged,
            Rule::Attrs,
            Rule::Attr,
            Rule::Object,
            Rule::Pair,
            Rule::Array,
            Rule::Symbol,
            Rule::DateOrDateTime,
        ];
        let names: Vec<&str> = rules.iter().map(Rule::as_str).collect();
        assert_eq!(
            names,
            [
                "document",
                "stream",
                "value",
                "tagged",
                "attrs",
                "attr",
                "object",
                "pair",
                "array",
                "symbol",
                "dateOrDateTime"
            ]
        );
    }

    #[test]
    fn test_line_col() {
        let source = "ab\ncd\n\u{e9}f";
        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 1), (1, 2));
        assert_eq!(line_col(source, 3), (2, 1));
        assert_eq!(line_col(source, 4), (2, 2));
        // 'é' is two bytes wide but one column
        assert_eq!(line_col(source, 8), (3, 2));
        assert_eq!(line_col(source, 100), (3, 3));
    }

    #[test]
    fn test_parse_error_is_sorted() {
        let source = "xyz";
        let err = ParseError::from_errors(vec![
            Error::semantic(source, 2, "late"),
            Error::lex(source, 0, 'x'),
        ]);
        assert_eq!(err.len(), 2);
        assert!(err.errors()[0].is_lex());
        assert!(err.errors()[1].is_semantic());
    }

    #[test]
    fn test_display_lists_every_problem() {
        let source = "a b";
        let err = ParseError::from_errors(vec![
            Error::syntax(source, 0, Rule::Object, "`}`", "end of input"),
            Error::lex(source, 2, 'b'),
        ]);
        let text = err.to_string();
        assert!(text.starts_with("found 2 problems"));
        assert!(text.contains("in object: expected `}`, found end of input"));
        assert!(text.contains("unexpected character 'b'"));
    }
}
