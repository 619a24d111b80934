//! Parse tree to value tree.
//!
//! The builder walks a [`DocumentNode`] and decodes every literal token:
//!
//! - numbers: `_` separators are stripped, `0x`/`0o`/`0b` literals are read in
//!   their base, decimal literals with a fraction or exponent become floats
//! - strings, blobs and quoted names: quotes are stripped and escapes resolved
//! - dates: validated with `chrono`; the shape of the [`DateValue`] follows
//!   the parts that were written
//! - objects and attribute lists: folded left to right, a repeated name
//!   overwrites the earlier value in place
//!
//! A literal that is lexically valid but names no value (an integer past
//! `i64`, `2021-02-30`, an unpaired `\uD800`) is reported as
//! [`Error::Semantic`]. The builder keeps going after such a literal so that
//! every out-of-range literal is reported together.

use crate::lexer::{Token, TokenKind};
use crate::parser::{AtomNode, AttrNode, DocumentNode, PairNode, TaggedNode, ValueNode};
use crate::{DateValue, Document, Error, FredMap, Number, Symbol, Tagged, Value};
use chrono::{FixedOffset, NaiveDate, NaiveTime};

/// Builds a [`Document`] from a parse tree.
///
/// # Errors
///
/// Returns every semantic error found in the tree's literals.
///
/// # Examples
///
/// ```rust
/// use fred::builder::build;
/// use fred::lexer::tokenize;
/// use fred::parser::parse_tokens;
/// use fred::{Document, ParseOptions, Value};
///
/// let source = "0xFF";
/// let tree = parse_tokens(source, tokenize(source).unwrap(), &ParseOptions::default()).unwrap();
/// assert_eq!(build(source, &tree).unwrap(), Document::Single(Value::from(255)));
/// ```
pub fn build(source: &str, tree: &DocumentNode<'_>) -> Result<Document, Vec<Error>> {
    let mut builder = Builder::new(source);
    let doc = match tree {
        DocumentNode::Single(value) => Document::Single(builder.value(value)),
        DocumentNode::Stream(values) => {
            Document::Stream(values.iter().map(|value| builder.value(value)).collect())
        }
    };
    builder.finish(doc)
}

/// Builds a single [`Value`] from a `value` node.
///
/// # Errors
///
/// Returns every semantic error found in the node's literals.
pub fn build_value(source: &str, node: &ValueNode<'_>) -> Result<Value, Vec<Error>> {
    let mut builder = Builder::new(source);
    let value = builder.value(node);
    builder.finish(value)
}

struct Builder<'a> {
    source: &'a str,
    errors: Vec<Error>,
}

impl<'a> Builder<'a> {
    fn new(source: &'a str) -> Self {
        Builder {
            source,
            errors: Vec::new(),
        }
    }

    fn finish<T>(self, result: T) -> Result<T, Vec<Error>> {
        if self.errors.is_empty() {
            Ok(result)
        } else {
            Err(self.errors)
        }
    }

    fn fail(&mut self, token: &Token<'_>, reason: String) {
        tracing::trace!(offset = token.offset, %reason, "semantic error");
        self.errors
            .push(Error::semantic(self.source, token.offset, reason));
    }

    fn value(&mut self, node: &ValueNode<'_>) -> Value {
        match node {
            ValueNode::Tagged(tagged) => Value::Tagged(self.tagged(tagged)),
            ValueNode::Atom(atom) => self.atom(atom),
        }
    }

    fn tagged(&mut self, node: &TaggedNode<'_>) -> Tagged {
        match node {
            TaggedNode::Prefix { name, attrs, atom } => Tagged {
                tag: self.name(name),
                meta: attrs.as_ref().map(|attrs| self.attrs(attrs)),
                value: Some(Box::new(self.atom(atom))),
            },
            TaggedNode::Void { name, attrs } => Tagged {
                tag: self.name(name),
                meta: (!attrs.is_empty()).then(|| self.attrs(attrs)),
                value: None,
            },
        }
    }

    fn attrs(&mut self, attrs: &[AttrNode<'_>]) -> FredMap {
        let mut meta = FredMap::with_capacity(attrs.len());
        for attr in attrs {
            let name = self.name(&attr.name);
            let value = self.atom(&attr.atom);
            meta.insert(name, value);
        }
        meta
    }

    fn object(&mut self, pairs: &[PairNode<'_>]) -> FredMap {
        let mut map = FredMap::with_capacity(pairs.len());
        for pair in pairs {
            let name = self.name(&pair.name);
            let value = self.value(&pair.value);
            map.insert(name, value);
        }
        map
    }

    fn atom(&mut self, node: &AtomNode<'_>) -> Value {
        match node {
            AtomNode::Object(pairs) => Value::Object(self.object(pairs)),
            AtomNode::Array(items) => {
                Value::Array(items.iter().map(|item| self.atom(item)).collect())
            }
            AtomNode::Date { date, time, offset } => self
                .date(date, time.as_ref(), offset.as_ref())
                .map_or(Value::Null, Value::Date),
            AtomNode::Time(token) => self
                .time(token)
                .map_or(Value::Null, |time| Value::Date(DateValue::Time(time))),
            AtomNode::Symbol(token) => Value::Symbol(Symbol::new(self.name(token))),
            AtomNode::Number(token) => self.number(token).map_or(Value::Null, Value::Number),
            AtomNode::String(token) => Value::String(self.text(token, 1)),
            AtomNode::Blob(token) => Value::Blob(self.text(token, 2)),
            AtomNode::Bool(b) => Value::Bool(*b),
            AtomNode::Null => Value::Null,
        }
    }

    fn name(&mut self, token: &Token<'_>) -> String {
        match token.kind {
            TokenKind::QuotedIdent => self.text(token, 1),
            _ => token.text.to_string(),
        }
    }

    /// Decodes a quoted token whose opening delimiter is `open` bytes long.
    fn text(&mut self, token: &Token<'_>, open: usize) -> String {
        let body = token
            .text
            .get(open..token.text.len().saturating_sub(1))
            .unwrap_or_default();
        match unescape(body) {
            Ok(text) => text,
            Err(reason) => {
                self.fail(token, reason);
                String::new()
            }
        }
    }

    fn number(&mut self, token: &Token<'_>) -> Option<Number> {
        let digits: String = token.text.chars().filter(|&c| c != '_').collect();
        let radix = match token.kind {
            TokenKind::Hex => 16,
            TokenKind::Octal => 8,
            TokenKind::Binary => 2,
            _ => 10,
        };

        if radix != 10 {
            let body = digits.get(2..).unwrap_or_default();
            return match i64::from_str_radix(body, radix) {
                Ok(n) => Some(Number::Integer(n)),
                Err(_) => {
                    self.fail(token, format!("integer `{}` does not fit in 64 bits", token.text));
                    None
                }
            };
        }

        if digits.contains(|c| matches!(c, '.' | 'e' | 'E')) {
            match digits.parse::<f64>() {
                Ok(f) if f.is_finite() => Some(Number::Float(f)),
                _ => {
                    self.fail(token, format!("number `{}` is out of range", token.text));
                    None
                }
            }
        } else {
            match digits.parse::<i64>() {
                Ok(n) => Some(Number::Integer(n)),
                Err(_) => {
                    self.fail(token, format!("integer `{}` does not fit in 64 bits", token.text));
                    None
                }
            }
        }
    }

    fn date(
        &mut self,
        date: &Token<'_>,
        time: Option<&Token<'_>>,
        offset: Option<&Token<'_>>,
    ) -> Option<DateValue> {
        let Ok(day) = NaiveDate::parse_from_str(date.text, "%Y-%m-%d") else {
            self.fail(date, format!("invalid date `{}`", date.text));
            return None;
        };
        let Some(time) = time else {
            return Some(DateValue::Date(day));
        };
        let local = day.and_time(self.time(time)?);
        let Some(offset) = offset else {
            return Some(DateValue::LocalDateTime(local));
        };
        let zone = self.offset(offset)?;
        match local.and_local_timezone(zone).single() {
            Some(dt) => Some(DateValue::OffsetDateTime(dt)),
            None => {
                self.fail(offset, format!("date-time `{}` is out of range", date.text));
                None
            }
        }
    }

    fn time(&mut self, token: &Token<'_>) -> Option<NaiveTime> {
        match NaiveTime::parse_from_str(token.text, "%H:%M:%S%.f") {
            Ok(time) => Some(time),
            Err(_) => {
                self.fail(token, format!("invalid time `{}`", token.text));
                None
            }
        }
    }

    fn offset(&mut self, token: &Token<'_>) -> Option<FixedOffset> {
        let parsed = if token.text == "Z" {
            FixedOffset::east_opt(0)
        } else {
            parse_numeric_offset(token.text)
        };
        if parsed.is_none() {
            self.fail(token, format!("invalid time offset `{}`", token.text));
        }
        parsed
    }
}

/// `+hh:mm` / `-hh:mm` with `hh < 24` and `mm < 60`.
fn parse_numeric_offset(text: &str) -> Option<FixedOffset> {
    let sign = match text.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours: i32 = text.get(1..3)?.parse().ok()?;
    let minutes: i32 = text.get(4..6)?.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Resolves escape sequences in the body of a string, blob or quoted name.
///
/// Returns a reason string when an escape names an invalid code point.
pub(crate) fn unescape(body: &str) -> Result<String, String> {
    if !body.contains('\\') {
        return Ok(body.to_string());
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let decoded = match chars.next() {
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('v') => '\u{000B}',
            Some(c @ ('"' | '`' | '\\' | '/')) => c,
            Some('x') => code_point(read_hex(&mut chars, 2)?)?,
            Some('U') => code_point(read_hex(&mut chars, 8)?)?,
            Some('u') => {
                let unit = read_hex(&mut chars, 4)?;
                match unit {
                    0xD800..=0xDBFF => {
                        let mut ahead = chars.clone();
                        let low = match (ahead.next(), ahead.next()) {
                            (Some('\\'), Some('u')) => read_hex(&mut ahead, 4)?,
                            _ => return Err(format!("unpaired surrogate `\\u{:04X}`", unit)),
                        };
                        if !(0xDC00..=0xDFFF).contains(&low) {
                            return Err(format!("unpaired surrogate `\\u{:04X}`", unit));
                        }
                        chars = ahead;
                        code_point(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))?
                    }
                    0xDC00..=0xDFFF => {
                        return Err(format!("unpaired surrogate `\\u{:04X}`", unit))
                    }
                    _ => code_point(unit)?,
                }
            }
            Some(other) => return Err(format!("unknown escape `\\{}`", other)),
            None => return Err("dangling `\\` at end of text".to_string()),
        };
        out.push(decoded);
    }
    Ok(out)
}

fn read_hex(chars: &mut std::str::Chars<'_>, len: usize) -> Result<u32, String> {
    let digits: String = chars.by_ref().take(len).collect();
    if digits.len() != len {
        return Err(format!("truncated escape `{}`", digits));
    }
    u32::from_str_radix(&digits, 16).map_err(|_| format!("invalid hex escape `{}`", digits))
}

fn code_point(value: u32) -> Result<char, String> {
    char::from_u32(value).ok_or_else(|| format!("escape names invalid code point U+{:X}", value))
}
