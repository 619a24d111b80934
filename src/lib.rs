//! # fred
//!
//! A parser and canonical serializer for FRED, a textual, self-describing
//! data-interchange format.
//!
//! ## What is FRED?
//!
//! FRED extends JSON-like values with tags, attribute metadata, symbols,
//! dates and times, binary blobs and multi-document streams:
//!
//! ```text
//! ; a tagged object with attributes
//! user(id=7 since=2021-05-01) {
//!   name: "Ada"
//!   role: $admin
//!   avatar: #"iVBORw0KGgo="
//!   scores: [0xFF 0b101 1_000 2.5e3]
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Whole-pipeline diagnostics**: lexical, syntax and semantic problems are
//!   collected across the entire input and reported together
//! - **Faithful value tree**: dates keep their shape, symbols compare by name,
//!   objects keep insertion order with last-write-wins keys
//! - **Canonical output**: serialization depends only on the value tree
//! - **Stateless**: every call builds its own parser, so independent inputs
//!   can be parsed concurrently
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use fred::{parse, serialize, Document, Value};
//!
//! let doc = parse("point(x=1 y=2) [1 2]").unwrap();
//! let Document::Single(Value::Tagged(point)) = &doc else { unreachable!() };
//! assert_eq!(point.tag, "point");
//! assert_eq!(point.attr("x"), Some(&Value::from(1)));
//!
//! assert_eq!(serialize(&doc), "point(x=1 y=2)[1 2]");
//! ```
//!
//! ### Error Reporting
//!
//! A failed parse never yields a partial document. It yields every problem
//! found, in source order:
//!
//! ```rust
//! let err = fred::parse("{a 1 b: [2 #] c: 2021-02-30}").unwrap_err();
//! let columns: Vec<usize> = err.errors().iter().map(|e| e.column()).collect();
//! assert_eq!(columns, vec![4, 12]);
//! ```
//!
//! Semantic problems (out-of-range literals) are only looked for once the
//! input is free of lexical and syntax errors.
//!
//! ### Dynamic Values with fred! Macro
//!
//! ```rust
//! use fred::{fred, Value};
//!
//! let data = fred!({
//!     "name": "Alice",
//!     "tags": ["rust", "fred"]
//! });
//!
//! if let Value::Object(obj) = &data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! assert_eq!(data.to_string(), r#"{name:"Alice" tags:["rust" "fred"]}"#);
//! ```
//!
//! ### Logging
//!
//! The crate reports through the `tracing` facade: one `debug` event per
//! parse and `trace` events for each diagnostic. No subscriber is installed.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the full grammar and lexical rules.
//!
//! ## Examples
//!
//! The `demos/` directory holds runnable programs:
//!
//! - **`minify.rs`** - read FRED from stdin, write the canonical form
//! - **`inspect.rs`** - print the JSON test encoding of a document
//!
//! Run one with: `cargo run --example <name>`

#[macro_use]
mod macros;

pub mod builder;
pub mod error;
pub mod format;
pub mod lexer;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

pub use error::{Error, ParseError, Result, Rule};
pub use map::FredMap;
pub use options::{ParseOptions, SerializeOptions};
pub use ser::Serializer;
pub use value::{DateValue, Document, Number, Symbol, Tagged, Value};

use std::io;

/// Parses FRED text into a [`Document`].
///
/// # Examples
///
/// ```rust
/// use fred::{parse, Document, Value};
///
/// let doc = parse("---1---2---").unwrap();
/// assert_eq!(doc, Document::Stream(vec![Value::from(1), Value::from(2)]));
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] holding every lexical, syntax and semantic
/// problem found in the input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Document> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parses FRED text with custom options.
///
/// # Errors
///
/// Returns a [`ParseError`] holding every problem found in the input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Document> {
    let (tokens, lex_errors) = lexer::scan(text);
    let token_count = tokens.len();
    let lex_count = lex_errors.len();
    let tree = parser::Parser::new(text, tokens, options).document();
    let result = finish(text, lex_errors, tree, builder::build);
    tracing::debug!(
        bytes = text.len(),
        tokens = token_count,
        lex_errors = lex_count,
        errors = result.as_ref().map_or_else(ParseError::len, |_| 0),
        "parsed document"
    );
    result
}

/// Parses a single FRED value.
///
/// Unlike [`parse`], a `---` stream is rejected.
///
/// # Examples
///
/// ```rust
/// use fred::{parse_value, Value};
///
/// assert_eq!(parse_value("0b101").unwrap(), Value::from(5));
/// assert!(parse_value("---1---").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] holding every problem found in the input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_value(text: &str) -> Result<Value> {
    let (tokens, lex_errors) = lexer::scan(text);
    let token_count = tokens.len();
    let tree = parser::Parser::new(text, tokens, &ParseOptions::default()).value_document();
    let result = finish(text, lex_errors, tree, builder::build_value);
    tracing::debug!(
        bytes = text.len(),
        tokens = token_count,
        errors = result.as_ref().map_or_else(ParseError::len, |_| 0),
        "parsed value"
    );
    result
}

/// Parses FRED from UTF-8 bytes.
///
/// # Examples
///
/// ```rust
/// let doc = fred::parse_slice(b"[1 2]").unwrap();
/// assert_eq!(doc.to_string(), "[1 2]");
///
/// let err = fred::parse_slice(b"[1 \xFF]").unwrap_err();
/// assert_eq!(err.errors()[0].offset(), 3);
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if the bytes are not UTF-8 or the text is not
/// valid FRED.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(bytes: &[u8]) -> Result<Document> {
    match std::str::from_utf8(bytes) {
        Ok(text) => parse(text),
        Err(e) => {
            let offset = e.valid_up_to();
            let valid = String::from_utf8_lossy(&bytes[..offset]);
            Err(ParseError::from_errors(vec![Error::encoding(&valid, offset)]))
        }
    }
}

/// Reads FRED text from an I/O stream and parses it.
///
/// # Errors
///
/// Returns an `io::Error` if reading fails; the inner result carries any
/// parse problems.
pub fn parse_reader<R: io::Read>(mut reader: R) -> io::Result<Result<Document>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(parse_slice(&bytes))
}

fn finish<N, T>(
    source: &str,
    mut errors: Vec<Error>,
    tree: std::result::Result<N, Vec<Error>>,
    build: impl FnOnce(&str, &N) -> std::result::Result<T, Vec<Error>>,
) -> Result<T> {
    match tree {
        Ok(tree) if errors.is_empty() => build(source, &tree).map_err(ParseError::from_errors),
        Ok(_) => Err(ParseError::from_errors(errors)),
        Err(syntax) => {
            errors.extend(syntax);
            Err(ParseError::from_errors(errors))
        }
    }
}

/// Serializes a document to canonical (minified) FRED text.
///
/// # Examples
///
/// ```rust
/// use fred::{parse, serialize};
///
/// let doc = parse("{ a : 0x10 , b : [ true , null ] } ; trailing comment").unwrap();
/// assert_eq!(serialize(&doc), "{a:16 b:[true null]}");
/// ```
#[must_use]
pub fn serialize(doc: &Document) -> String {
    serialize_with_options(doc, SerializeOptions::default())
}

/// Serializes a single value to canonical FRED text.
#[must_use]
pub fn serialize_value(value: &Value) -> String {
    let mut serializer = Serializer::new(SerializeOptions::default());
    serializer.serialize_value(value);
    serializer.into_inner()
}

/// Serializes a document with newlines and 2-space indentation.
#[must_use]
pub fn to_string_pretty(doc: &Document) -> String {
    serialize_with_options(doc, SerializeOptions::pretty())
}

/// Serializes a document with custom options.
///
/// # Examples
///
/// ```rust
/// use fred::{parse, serialize_with_options, SerializeOptions};
///
/// let doc = parse("---{a:1}---").unwrap();
/// let text = serialize_with_options(&doc, SerializeOptions::pretty());
/// assert_eq!(text, "---\n{\n  a: 1\n}\n---");
/// ```
#[must_use]
pub fn serialize_with_options(doc: &Document, options: SerializeOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize_document(doc);
    let text = serializer.into_inner();
    tracing::trace!(bytes = text.len(), "serialized document");
    text
}

/// Serializes a document to a writer in canonical FRED form.
///
/// # Examples
///
/// ```rust
/// let doc = fred::parse("[1 2]").unwrap();
/// let mut buffer = Vec::new();
/// fred::to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[1 2]");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W: io::Write>(mut writer: W, doc: &Document) -> io::Result<()> {
    writer.write_all(serialize(doc).as_bytes())
}
