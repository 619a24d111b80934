//! FRED tokenization.
//!
//! The lexer turns FRED text into an ordered sequence of [`Token`]s. Token
//! rules are declared on [`TokenKind`] with the `logos` derive, which picks
//! the longest match at each position and breaks ties by rule priority.
//! That is what separates the overlapping lexical classes:
//!
//! - `2021-05-01` is a date rather than the number `2021` (longer match)
//! - `0x1F` is a hex literal rather than `0` followed by an identifier
//! - `---` is a stream separator rather than an identifier
//!
//! Identifiers are matched by their first character and extended by hand up
//! to the next structural character or `---`. Whole words spelling `true`,
//! `false`, `null`, `T`, `_` or `Z` are then reclassified, so `true---` is a
//! keyword followed by a separator while `trueish` or `Zulu` stay plain
//! identifiers.
//!
//! Whitespace (space, tab, CR, LF and the comma) and `;` line comments are
//! skipped and never reach the parser.
//!
//! When no rule matches, the lexer records an [`Error::Lex`] for the
//! offending character, moves one character forward and carries on, so a
//! single pass reports every unmatched region.
//!
//! ```rust
//! use fred::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("point(x=1) [0xFF 2021-05-01]").unwrap();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Ident,
//!         TokenKind::LParen,
//!         TokenKind::Ident,
//!         TokenKind::Equals,
//!         TokenKind::Number,
//!         TokenKind::RParen,
//!         TokenKind::LSquare,
//!         TokenKind::Hex,
//!         TokenKind::Date,
//!         TokenKind::RSquare,
//!     ]
//! );
//! ```

use crate::Error;
use logos::Logos;
use std::fmt;

/// Every kind of token the FRED lexer can produce.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Discarded
    #[regex(r"[ \t\r\n,]+", logos::skip)]
    Whitespace,
    #[regex(r";[^\n]*", logos::skip)]
    Comment,

    // Numeric literals
    #[regex(r"-?(?:0|[1-9](?:_?[0-9])*)(?:\.[0-9](?:_?[0-9])*)?(?:[eE][+-]?[0-9](?:_?[0-9])*)?")]
    Number,
    #[regex(r"0x[0-9a-fA-F](?:_?[0-9a-fA-F])*")]
    Hex,
    #[regex(r"0o[0-7](?:_?[0-7])*")]
    Octal,
    #[regex(r"0b[01](?:_?[01])*")]
    Binary,

    // Dates and times
    #[regex(r"[0-9]{4}-[0-9]{2}-[0-9]{2}")]
    Date,
    #[regex(r"[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?")]
    Time,
    /// `+hh:mm` or `-hh:mm` here; a bare `Z` is reclassified from an identifier.
    #[regex(r"[+-][0-9]{2}:[0-9]{2}")]
    TimeOffset,

    // Quoted forms
    #[regex(r##""(?:[^"\\]|\\(?:[bfnrtv"`\\/]|x[0-9a-fA-F]{2}|u[0-9a-fA-F]{4}|U[0-9a-fA-F]{8}))*""##)]
    String,
    #[regex(r##"#"(?:[^"\\\r\n]|\\(?:[bfnrtv"`\\/]|x[0-9a-fA-F]{2}|u[0-9a-fA-F]{4}|U[0-9a-fA-F]{8}))*""##)]
    Blob,
    #[regex(r##"`(?:[^`\\]|\\(?:[bfnrtv"`\\/]|x[0-9a-fA-F]{2}|u[0-9a-fA-F]{4}|U[0-9a-fA-F]{8}))+`"##)]
    QuotedIdent,

    // Punctuation
    #[token("{")]
    LCurly,
    #[token("}")]
    RCurly,
    #[token("[")]
    LSquare,
    #[token("]")]
    RSquare,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(":")]
    Colon,
    #[token("=")]
    Equals,
    #[token("$")]
    Dollar,
    #[token("#")]
    Hash,
    #[token("---")]
    StreamSep,

    // Words produced by `reclassify` from an identifier match.
    TimeMarker,
    Underscore,
    True,
    False,
    Null,

    // Bare identifier: a non-structural, non-digit character, extended by
    // `ident_tail`.
    #[regex(r##"[^#"`$:;{}\[\]=()\t\r\n ,0-9]"##, ident_tail)]
    Ident,
}

fn is_structural(c: char) -> bool {
    matches!(
        c,
        '#' | '"' | '`' | '$' | ':' | ';' | '{' | '}' | '[' | ']' | '=' | '(' | ')'
            | '\t' | '\r' | '\n' | ' ' | ','
    )
}

/// Extends an identifier past its first character, stopping before a
/// structural character or a `---` separator. A lone `T` or `_` in front
/// of a digit is the date/time joiner and is not extended.
fn ident_tail(lex: &mut logos::Lexer<'_, TokenKind>) {
    let rest = lex.remainder();
    if matches!(lex.slice(), "T" | "_") && rest.starts_with(|c: char| c.is_ascii_digit()) {
        return;
    }
    let mut len = 0;
    for (i, c) in rest.char_indices() {
        if is_structural(c) || rest[i..].starts_with("---") {
            break;
        }
        len = i + c.len_utf8();
    }
    lex.bump(len);
}

/// Maps an identifier spelling a reserved word to that word's kind.
fn reclassify(kind: TokenKind, text: &str) -> TokenKind {
    if kind != TokenKind::Ident {
        return kind;
    }
    match text {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        "T" => TokenKind::TimeMarker,
        "_" => TokenKind::Underscore,
        "Z" => TokenKind::TimeOffset,
        _ => TokenKind::Ident,
    }
}

impl TokenKind {
    /// Human-readable description used in diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Number => "number",
            TokenKind::Hex => "hex literal",
            TokenKind::Octal => "octal literal",
            TokenKind::Binary => "binary literal",
            TokenKind::Date => "date",
            TokenKind::Time => "time",
            TokenKind::TimeOffset => "time offset",
            TokenKind::String => "string",
            TokenKind::Blob => "blob",
            TokenKind::QuotedIdent => "quoted identifier",
            TokenKind::LCurly => "`{`",
            TokenKind::RCurly => "`}`",
            TokenKind::LSquare => "`[`",
            TokenKind::RSquare => "`]`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Colon => "`:`",
            TokenKind::Equals => "`=`",
            TokenKind::Dollar => "`$`",
            TokenKind::Hash => "`#`",
            TokenKind::TimeMarker => "`T`",
            TokenKind::Underscore => "`_`",
            TokenKind::StreamSep => "`---`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Null => "`null`",
            TokenKind::Ident => "identifier",
        }
    }

    /// Returns `true` for tokens that can begin a name.
    #[inline]
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::QuotedIdent)
    }

    /// Returns `true` for tokens that can begin an atom.
    #[inline]
    #[must_use]
    pub const fn starts_atom(&self) -> bool {
        matches!(
            self,
            TokenKind::LCurly
                | TokenKind::LSquare
                | TokenKind::Date
                | TokenKind::Time
                | TokenKind::Dollar
                | TokenKind::Number
                | TokenKind::Hex
                | TokenKind::Octal
                | TokenKind::Binary
                | TokenKind::String
                | TokenKind::Blob
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Returns `true` for tokens that close an enclosing construct.
    #[inline]
    #[must_use]
    pub const fn is_closer(&self) -> bool {
        matches!(
            self,
            TokenKind::RCurly | TokenKind::RSquare | TokenKind::RParen | TokenKind::StreamSep
        )
    }

    /// Returns `true` for literal kinds whose text is worth quoting in diagnostics.
    #[inline]
    const fn has_payload(&self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::Hex
                | TokenKind::Octal
                | TokenKind::Binary
                | TokenKind::Date
                | TokenKind::Time
                | TokenKind::TimeOffset
                | TokenKind::String
                | TokenKind::Blob
                | TokenKind::QuotedIdent
                | TokenKind::Ident
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A lexed token: its kind, the exact source text and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub offset: usize,
}

impl<'src> Token<'src> {
    /// Length of the token in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset just past the token.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Describes the token for a diagnostic, e.g. ``number `12` `` or `` `}` ``.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.kind.has_payload() {
            format!("{} `{}`", self.kind, self.text)
        } else {
            self.kind.describe().to_string()
        }
    }
}

/// Scans the whole input, returning every token and every lexical error.
///
/// The parser still runs when lexical errors were found so that syntax
/// problems elsewhere in the input are reported in the same batch.
pub(crate) fn scan(source: &str) -> (Vec<Token<'_>>, Vec<Error>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut base = 0;

    'restart: while base < source.len() {
        let mut lexer = TokenKind::lexer(&source[base..]);
        while let Some(result) = lexer.next() {
            let span = lexer.span();
            let offset = base + span.start;
            match result {
                Ok(kind) => tokens.push(Token {
                    kind: reclassify(kind, lexer.slice()),
                    text: lexer.slice(),
                    offset,
                }),
                Err(()) => {
                    // Skip exactly one character and rescan from there.
                    let found = source[offset..].chars().next().unwrap_or('\u{FFFD}');
                    tracing::trace!(offset, ?found, "unmatched input");
                    errors.push(Error::lex(source, offset, found));
                    base = offset + found.len_utf8();
                    continue 'restart;
                }
            }
        }
        break;
    }

    (tokens, errors)
}

/// Tokenizes FRED text.
///
/// # Errors
///
/// Returns every lexical error when any part of the input is unmatched.
///
/// # Examples
///
/// ```rust
/// use fred::lexer::tokenize;
///
/// // '@' is an ordinary identifier character
/// assert!(tokenize("[1 @@ 2]").is_ok());
///
/// let errors = tokenize("{a: \"open").unwrap_err();
/// assert_eq!(errors.len(), 1);
/// ```
pub fn tokenize(source: &str) -> std::result::Result<Vec<Token<'_>>, Vec<Error>> {
    let (tokens, errors) = scan(source);
    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

/// Returns `true` if `name` can be written as a bare identifier.
///
/// Names that would lex as anything else (`true`, `T`, `Z`, `12ab`, names
/// containing whitespace or structural characters) must be backtick-quoted.
/// So must names ending in `-`, which would run into a following `---`.
///
/// ```rust
/// use fred::lexer::is_bare_name;
///
/// assert!(is_bare_name("point"));
/// assert!(is_bare_name("my-tag"));
/// assert!(is_bare_name("-flag"));
/// assert!(!is_bare_name("true"));
/// assert!(!is_bare_name("two words"));
/// assert!(!is_bare_name("dash-"));
/// ```
#[must_use]
pub fn is_bare_name(name: &str) -> bool {
    if name.ends_with('-') {
        return false;
    }
    let mut lexer = TokenKind::lexer(name);
    let first = match lexer.next() {
        Some(Ok(kind)) => reclassify(kind, lexer.slice()),
        _ => return false,
    };
    first == TokenKind::Ident && lexer.span() == (0..name.len()) && lexer.next().is_none()
}
