//! FRED grammar and parse tree.
//!
//! The parser is a hand-written recursive descent over the token stream
//! produced by [`lexer`](crate::lexer). Each call builds a fresh [`Parser`]
//! that owns its scanning position, so parsing holds no state between calls
//! and independent inputs can be parsed on separate threads.
//!
//! The grammar, with `SEP` standing for `---`:
//!
//! ```text
//! document       := stream | value
//! stream         := SEP (value SEP)*
//! value          := tagged | atom
//! tagged         := name attrs? atom | "(" name attr* ")"
//! attrs          := "(" attr* ")"
//! attr           := name "=" atom
//! atom           := object | array | dateOrDateTime | TIME
//!                 | symbol | number | string | bool | NULL
//! object         := "{" pair* "}"
//! pair           := name ":" value
//! array          := "[" atom* "]"
//! symbol         := "$" name
//! dateOrDateTime := DATE ((T | _) TIME TIMEOFFSET?)?
//! ```
//!
//! Array elements and tag payloads are atoms: a tagged value may only appear
//! at the top level or as an object entry.
//!
//! ## Error recovery
//!
//! A syntax error does not end the parse. The parser records the error and
//! resynchronizes so later, independent problems are reported in the same
//! batch:
//!
//! - a missing token is either skipped over (when the token after the
//!   unexpected one is the expected one) or assumed present
//! - container loops drop tokens that cannot start an element, including
//!   closers that match nothing open, and stop at a closer belonging to an
//!   enclosing construct
//! - after an error, further errors are suppressed until a token is consumed
//!   normally, which keeps one mistake from cascading
//! - at most one error is recorded per source offset
//!
//! The parse tree borrows its tokens from the input; decoding literals into
//! values is left to [`builder`](crate::builder).

use crate::error::Rule;
use crate::lexer::{Token, TokenKind};
use crate::{Error, ParseOptions};

/// Root of a parse tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode<'src> {
    Stream(Vec<ValueNode<'src>>),
    Single(ValueNode<'src>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueNode<'src> {
    Tagged(TaggedNode<'src>),
    Atom(AtomNode<'src>),
}

/// The two surface forms of a tagged value.
#[derive(Debug, Clone, PartialEq)]
pub enum TaggedNode<'src> {
    /// `name(attr ...) atom` or `name atom`
    Prefix {
        name: Token<'src>,
        attrs: Option<Vec<AttrNode<'src>>>,
        atom: AtomNode<'src>,
    },
    /// `(name attr ...)`
    Void {
        name: Token<'src>,
        attrs: Vec<AttrNode<'src>>,
    },
}

/// `name = atom`
#[derive(Debug, Clone, PartialEq)]
pub struct AttrNode<'src> {
    pub name: Token<'src>,
    pub atom: AtomNode<'src>,
}

/// `name : value`
#[derive(Debug, Clone, PartialEq)]
pub struct PairNode<'src> {
    pub name: Token<'src>,
    pub value: ValueNode<'src>,
}

/// One node per `atom` alternative. Literal nodes keep their token so the
/// builder can decode the text and point diagnostics at it.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomNode<'src> {
    Object(Vec<PairNode<'src>>),
    Array(Vec<AtomNode<'src>>),
    Date {
        date: Token<'src>,
        time: Option<Token<'src>>,
        offset: Option<Token<'src>>,
    },
    Time(Token<'src>),
    Symbol(Token<'src>),
    Number(Token<'src>),
    String(Token<'src>),
    Blob(Token<'src>),
    Bool(bool),
    Null,
}

/// Recursive-descent parser for one input.
///
/// A `Parser` is consumed by [`Parser::document`] or
/// [`Parser::value_document`], so it can never be reused across inputs.
pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
    pos: usize,
    max_depth: usize,
    closers: Vec<TokenKind>,
    errors: Vec<Error>,
    last_error_offset: Option<usize>,
    recovering: bool,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token<'src>>, options: &ParseOptions) -> Self {
        Parser {
            source,
            tokens,
            pos: 0,
            max_depth: options.max_depth,
            closers: Vec::new(),
            errors: Vec::new(),
            last_error_offset: None,
            recovering: false,
        }
    }

    /// Parses the `document` rule and requires the input to end after it.
    ///
    /// # Errors
    ///
    /// Returns every syntax error found in the input.
    pub fn document(mut self) -> Result<DocumentNode<'src>, Vec<Error>> {
        let node = if self.peek_kind() == Some(TokenKind::StreamSep) {
            self.stream().map(DocumentNode::Stream)
        } else {
            self.value().map(DocumentNode::Single)
        };
        self.expect_end();
        self.finish(node)
    }

    /// Parses a lone `value` and requires the input to end after it.
    ///
    /// # Errors
    ///
    /// Returns every syntax error found in the input. A stream is an error.
    pub fn value_document(mut self) -> Result<ValueNode<'src>, Vec<Error>> {
        let node = self.value();
        self.expect_end();
        self.finish(node)
    }

    fn finish<T>(self, node: Option<T>) -> Result<T, Vec<Error>> {
        // Every path that yields no node has recorded an error.
        match node {
            Some(node) if self.errors.is_empty() => Ok(node),
            _ => Err(self.errors),
        }
    }

    fn stream(&mut self) -> Option<Vec<ValueNode<'src>>> {
        self.bump();
        let mut values = Vec::new();
        while self.peek().is_some() {
            let start = self.pos;
            if let Some(value) = self.value() {
                values.push(value);
            }
            self.expect(TokenKind::StreamSep, Rule::Stream);
            if self.pos == start {
                self.skip();
            }
        }
        Some(values)
    }

    fn value(&mut self) -> Option<ValueNode<'src>> {
        match self.peek_kind() {
            Some(TokenKind::LParen) => self.void_tag().map(ValueNode::Tagged),
            Some(kind) if kind.is_name() => self.prefix_tag().map(ValueNode::Tagged),
            _ => self.atom(Rule::Value).map(ValueNode::Atom),
        }
    }

    fn prefix_tag(&mut self) -> Option<TaggedNode<'src>> {
        let name = self.bump()?;
        let attrs = if self.peek_kind() == Some(TokenKind::LParen) {
            Some(self.attr_list())
        } else {
            None
        };
        let atom = self.atom(Rule::Tagged)?;
        Some(TaggedNode::Prefix { name, attrs, atom })
    }

    fn void_tag(&mut self) -> Option<TaggedNode<'src>> {
        if !self.enter(TokenKind::RParen) {
            return None;
        }
        let name = self.expect_name(Rule::Tagged);
        let attrs = self.attr_items();
        self.leave();
        Some(TaggedNode::Void { name: name?, attrs })
    }

    fn attr_list(&mut self) -> Vec<AttrNode<'src>> {
        if !self.enter(TokenKind::RParen) {
            return Vec::new();
        }
        let attrs = self.attr_items();
        self.leave();
        attrs
    }

    /// `attr* ")"`, after the opening parenthesis has been consumed.
    fn attr_items(&mut self) -> Vec<AttrNode<'src>> {
        let mut attrs = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::RParen) => {
                    self.bump();
                    break;
                }
                Some(kind) if kind.is_name() => {
                    if let Some(attr) = self.attr() {
                        attrs.push(attr);
                    }
                }
                Some(kind) if kind.is_closer() => {
                    self.error(Rule::Attrs, "`)`");
                    if self.closes_enclosing(kind) {
                        break;
                    }
                    self.skip();
                }
                None => {
                    self.error(Rule::Attrs, "`)`");
                    break;
                }
                Some(_) => {
                    self.error(Rule::Attr, "attribute name");
                    self.skip();
                }
            }
        }
        attrs
    }

    fn attr(&mut self) -> Option<AttrNode<'src>> {
        let name = self.bump()?;
        self.expect(TokenKind::Equals, Rule::Attr);
        let atom = self.atom(Rule::Attr)?;
        Some(AttrNode { name, atom })
    }

    fn atom(&mut self, rule: Rule) -> Option<AtomNode<'src>> {
        let Some(token) = self.peek() else {
            self.error(rule, "value");
            return None;
        };
        match token.kind {
            TokenKind::LCurly => self.object(),
            TokenKind::LSquare => self.array(),
            TokenKind::Date => self.date(),
            TokenKind::Dollar => self.symbol(),
            TokenKind::Time => self.bump().map(AtomNode::Time),
            TokenKind::Number | TokenKind::Hex | TokenKind::Octal | TokenKind::Binary => {
                self.bump().map(AtomNode::Number)
            }
            TokenKind::String => self.bump().map(AtomNode::String),
            TokenKind::Blob => self.bump().map(AtomNode::Blob),
            TokenKind::True => self.bump().map(|_| AtomNode::Bool(true)),
            TokenKind::False => self.bump().map(|_| AtomNode::Bool(false)),
            TokenKind::Null => self.bump().map(|_| AtomNode::Null),
            kind => {
                self.error(rule, "value");
                if !self.closes_enclosing(kind) {
                    self.skip();
                }
                None
            }
        }
    }

    fn object(&mut self) -> Option<AtomNode<'src>> {
        if !self.enter(TokenKind::RCurly) {
            return None;
        }
        let mut pairs = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::RCurly) => {
                    self.bump();
                    break;
                }
                Some(kind) if kind.is_name() => {
                    if let Some(pair) = self.pair() {
                        pairs.push(pair);
                    }
                }
                Some(kind) if kind.is_closer() => {
                    self.error(Rule::Object, "`}`");
                    if self.closes_enclosing(kind) {
                        break;
                    }
                    self.skip();
                }
                None => {
                    self.error(Rule::Object, "`}`");
                    break;
                }
                Some(_) => {
                    self.error(Rule::Pair, "name");
                    self.skip();
                }
            }
        }
        self.leave();
        Some(AtomNode::Object(pairs))
    }

    fn pair(&mut self) -> Option<PairNode<'src>> {
        let name = self.bump()?;
        self.expect(TokenKind::Colon, Rule::Pair);
        let value = self.value()?;
        Some(PairNode { name, value })
    }

    fn array(&mut self) -> Option<AtomNode<'src>> {
        if !self.enter(TokenKind::RSquare) {
            return None;
        }
        let mut items = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::RSquare) => {
                    self.bump();
                    break;
                }
                Some(kind) if kind.starts_atom() => {
                    if let Some(atom) = self.atom(Rule::Array) {
                        items.push(atom);
                    }
                }
                Some(kind) if kind.is_closer() => {
                    self.error(Rule::Array, "`]`");
                    if self.closes_enclosing(kind) {
                        break;
                    }
                    self.skip();
                }
                None => {
                    self.error(Rule::Array, "`]`");
                    break;
                }
                Some(_) => {
                    self.error(Rule::Array, "value");
                    self.skip();
                }
            }
        }
        self.leave();
        Some(AtomNode::Array(items))
    }

    fn date(&mut self) -> Option<AtomNode<'src>> {
        let date = self.bump()?;
        let mut time = None;
        let mut offset = None;
        if matches!(
            self.peek_kind(),
            Some(TokenKind::TimeMarker | TokenKind::Underscore)
        ) {
            self.bump();
            time = Some(self.expect(TokenKind::Time, Rule::DateOrDateTime)?);
            if self.peek_kind() == Some(TokenKind::TimeOffset) {
                offset = self.bump();
            }
        }
        Some(AtomNode::Date { date, time, offset })
    }

    fn symbol(&mut self) -> Option<AtomNode<'src>> {
        self.bump();
        self.expect_name(Rule::Symbol).map(AtomNode::Symbol)
    }

    fn expect_end(&mut self) {
        if self.peek().is_some() {
            self.error(Rule::Document, "end of input");
        }
    }

    fn expect(&mut self, kind: TokenKind, rule: Rule) -> Option<Token<'src>> {
        self.expect_where(rule, kind.describe(), |k| k == kind)
    }

    fn expect_name(&mut self, rule: Rule) -> Option<Token<'src>> {
        self.expect_where(rule, "name", |k| k.is_name())
    }

    /// Consumes a token accepted by `accept`.
    ///
    /// On a mismatch the error is recorded; if the following token is
    /// acceptable the stray token is dropped, otherwise the expected token
    /// is treated as present and `None` is returned.
    fn expect_where(
        &mut self,
        rule: Rule,
        expected: &str,
        accept: impl Fn(TokenKind) -> bool,
    ) -> Option<Token<'src>> {
        match self.peek_kind() {
            Some(kind) if accept(kind) => self.bump(),
            current => {
                self.error(rule, expected);
                let stray = current.is_some_and(|kind| !kind.is_closer());
                let next_fits = self.peek_kind_at(1).is_some_and(&accept);
                if stray && next_fits {
                    self.skip();
                    self.bump()
                } else {
                    None
                }
            }
        }
    }

    /// Consumes the opener of a nested construct, enforcing the depth limit.
    ///
    /// A construct nested too deeply is reported and skipped up to its
    /// matching closer.
    fn enter(&mut self, closer: TokenKind) -> bool {
        let offset = self.current_offset();
        self.bump();
        if self.closers.len() < self.max_depth {
            self.closers.push(closer);
            return true;
        }
        if self.last_error_offset != Some(offset) {
            tracing::trace!(offset, limit = self.max_depth, "nesting too deep");
            self.errors
                .push(Error::nesting_too_deep(self.source, offset, self.max_depth));
            self.last_error_offset = Some(offset);
        }
        self.skip_balanced();
        false
    }

    fn leave(&mut self) {
        self.closers.pop();
    }

    /// Returns `true` if `kind` ends the current construct or one around it.
    /// Other closers are strays and can be dropped.
    fn closes_enclosing(&self, kind: TokenKind) -> bool {
        kind == TokenKind::StreamSep || self.closers.contains(&kind)
    }

    fn skip_balanced(&mut self) {
        let mut level = 1usize;
        while let Some(kind) = self.peek_kind() {
            self.skip();
            match kind {
                TokenKind::LCurly | TokenKind::LSquare | TokenKind::LParen => level += 1,
                TokenKind::RCurly | TokenKind::RSquare | TokenKind::RParen => {
                    level -= 1;
                    if level == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    /// Records a syntax error at the current token.
    fn error(&mut self, rule: Rule, expected: &str) {
        let offset = self.current_offset();
        if self.recovering || self.last_error_offset == Some(offset) {
            return;
        }
        let found = self
            .peek()
            .map_or_else(|| "end of input".to_string(), |token| token.describe());
        tracing::trace!(offset, %rule, expected, found = %found, "syntax error");
        self.errors
            .push(Error::syntax(self.source, offset, rule, expected, &found));
        self.last_error_offset = Some(offset);
        self.recovering = true;
    }

    fn current_offset(&self) -> usize {
        self.peek().map_or(self.source.len(), |token| token.offset)
    }

    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_kind_at(0)
    }

    fn peek_kind_at(&self, ahead: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + ahead).map(|token| token.kind)
    }

    /// Consumes a token as part of a successful match.
    fn bump(&mut self) -> Option<Token<'src>> {
        let token = self.peek()?;
        self.pos += 1;
        self.recovering = false;
        Some(token)
    }

    /// Discards a token during recovery.
    fn skip(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }
}

/// Parses a token sequence into a parse tree.
///
/// # Errors
///
/// Returns every syntax error found.
///
/// # Examples
///
/// ```rust
/// use fred::lexer::tokenize;
/// use fred::parser::{parse_tokens, DocumentNode};
/// use fred::ParseOptions;
///
/// let source = "---1---2---";
/// let tokens = tokenize(source).unwrap();
/// let tree = parse_tokens(source, tokens, &ParseOptions::default()).unwrap();
/// assert!(matches!(tree, DocumentNode::Stream(values) if values.len() == 2));
/// ```
pub fn parse_tokens<'src>(
    source: &'src str,
    tokens: Vec<Token<'src>>,
    options: &ParseOptions,
) -> Result<DocumentNode<'src>, Vec<Error>> {
    Parser::new(source, tokens, options).document()
}
