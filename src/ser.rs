//! FRED serialization ("minify").
//!
//! This module provides the [`Serializer`] that writes a value tree back to
//! FRED text. Output depends only on the tree: number bases, quoting style,
//! comments and whitespace from any original input are not retained.
//!
//! ## Canonical form
//!
//! - objects `{key:value key:value}`, arrays `[atom atom]`, single spaces
//!   between elements and no trailing separator
//! - tagged values `tag(k=v ...)atom`, `(tag k=v ...)` or `tag atom`
//! - strings always double-quoted, names bare when they lex as a single
//!   identifier and backtick-quoted otherwise
//! - streams `---value---value---`
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use fred::{parse, serialize, to_string_pretty};
//!
//! let doc = parse("point( x = 0x10 ) [ 1, 2 ]").unwrap();
//! assert_eq!(serialize(&doc), "point(x=16)[1 2]");
//! assert_eq!(to_string_pretty(&doc), "point(x=16)[\n  1\n  2\n]");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use fred::{fred, Serializer, SerializeOptions};
//!
//! let mut serializer = Serializer::new(SerializeOptions::new());
//! serializer.serialize_value(&fred!({ "name": "Ada", "tags": ["x", "y"] }));
//! assert_eq!(serializer.into_inner(), r#"{name:"Ada" tags:["x" "y"]}"#);
//! ```

use crate::lexer::is_bare_name;
use crate::{Document, FredMap, SerializeOptions, Tagged, Value};

/// The FRED serializer.
///
/// Writes into an internal buffer; call [`Serializer::into_inner`] to take
/// the text.
pub struct Serializer {
    output: String,
    options: SerializeOptions,
    indent_level: usize,
}

impl Serializer {
    pub fn new(options: SerializeOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes a whole document. A stream is written as
    /// `---value---value---`; an empty stream is `---`.
    pub fn serialize_document(&mut self, doc: &Document) {
        match doc {
            Document::Single(value) => self.serialize_value(value),
            Document::Stream(values) => {
                self.output.push_str("---");
                for value in values {
                    self.write_newline();
                    self.serialize_value(value);
                    self.write_newline();
                    self.output.push_str("---");
                }
            }
        }
    }

    pub fn serialize_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.output.push_str(&n.to_string()),
            Value::String(s) => self.write_quoted(s, '"'),
            Value::Blob(s) => {
                self.output.push('#');
                self.write_quoted(s, '"');
            }
            Value::Symbol(sym) => {
                self.output.push('$');
                self.write_name(sym.name());
            }
            Value::Date(date) => self.output.push_str(&date.to_string()),
            Value::Array(items) => self.write_array(items),
            Value::Object(map) => self.write_object(map),
            Value::Tagged(tagged) => self.write_tagged(tagged),
        }
    }

    fn write_indent(&mut self) {
        if self.options.pretty {
            for _ in 0..self.indent_level * self.options.indent {
                self.output.push(' ');
            }
        }
    }

    fn write_newline(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
        }
    }

    /// Break before a container element: a new indented line when pretty,
    /// otherwise a single space between elements.
    fn write_element_break(&mut self, first: bool) {
        if self.options.pretty {
            self.output.push('\n');
            self.write_indent();
        } else if !first {
            self.output.push(' ');
        }
    }

    fn write_closing_break(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            self.write_indent();
        }
    }

    fn write_array(&mut self, items: &[Value]) {
        if items.is_empty() {
            self.output.push_str("[]");
            return;
        }
        self.output.push('[');
        self.indent_level += 1;
        for (i, item) in items.iter().enumerate() {
            self.write_element_break(i == 0);
            self.serialize_value(item);
        }
        self.indent_level -= 1;
        self.write_closing_break();
        self.output.push(']');
    }

    fn write_object(&mut self, map: &FredMap) {
        if map.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push('{');
        self.indent_level += 1;
        for (i, (key, value)) in map.iter().enumerate() {
            self.write_element_break(i == 0);
            self.write_name(key);
            self.output.push(':');
            if self.options.pretty {
                self.output.push(' ');
            }
            self.serialize_value(value);
        }
        self.indent_level -= 1;
        self.write_closing_break();
        self.output.push('}');
    }

    fn write_tagged(&mut self, tagged: &Tagged) {
        match (&tagged.meta, &tagged.value) {
            (Some(meta), Some(value)) => {
                self.write_name(&tagged.tag);
                self.output.push('(');
                self.write_attrs(meta);
                self.output.push(')');
                self.serialize_value(value);
            }
            (None, Some(value)) => {
                self.write_name(&tagged.tag);
                if !starts_with_delimiter(value) {
                    self.output.push(' ');
                }
                self.serialize_value(value);
            }
            (meta, None) => {
                self.output.push('(');
                self.write_name(&tagged.tag);
                if let Some(meta) = meta {
                    if !meta.is_empty() {
                        self.output.push(' ');
                        self.write_attrs(meta);
                    }
                }
                self.output.push(')');
            }
        }
    }

    fn write_attrs(&mut self, meta: &FredMap) {
        for (i, (key, value)) in meta.iter().enumerate() {
            if i > 0 {
                self.output.push(' ');
            }
            self.write_name(key);
            self.output.push('=');
            self.serialize_value(value);
        }
    }

    fn write_name(&mut self, name: &str) {
        if is_bare_name(name) {
            self.output.push_str(name);
        } else {
            self.write_quoted(name, '`');
        }
    }

    fn write_quoted(&mut self, s: &str, delimiter: char) {
        self.output.push(delimiter);
        for ch in s.chars() {
            match ch {
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000B}' => self.output.push_str("\\v"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if c == delimiter => {
                    self.output.push('\\');
                    self.output.push(c);
                }
                c if c.is_control() => {
                    self.output.push_str(&format!("\\u{:04X}", c as u32));
                }
                c => self.output.push(c),
            }
        }
        self.output.push(delimiter);
    }
}

/// Returns `true` if the value's text starts with a character that already
/// separates it from a preceding tag name.
fn starts_with_delimiter(value: &Value) -> bool {
    matches!(
        value,
        Value::Object(_) | Value::Array(_) | Value::String(_) | Value::Blob(_) | Value::Symbol(_)
    )
}
