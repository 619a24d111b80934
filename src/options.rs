//! Configuration options for FRED parsing and serialization.
//!
//! - [`ParseOptions`]: resource limits applied while parsing
//! - [`SerializeOptions`]: output layout (canonical minify or pretty)
//!
//! ## Examples
//!
//! ```rust
//! use fred::{parse_with_options, serialize_with_options, ParseOptions, SerializeOptions};
//!
//! let options = ParseOptions::new().with_max_depth(4);
//! assert!(parse_with_options("[[[[1]]]]", &options).is_ok());
//! assert!(parse_with_options("[[[[[1]]]]]", &options).is_err());
//!
//! let doc = fred::parse("{a: [1 2]}").unwrap();
//! let pretty = serialize_with_options(&doc, SerializeOptions::pretty().with_indent(4));
//! assert_eq!(pretty, "{\n    a: [\n        1\n        2\n    ]\n}");
//! ```

/// Nesting limit used by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for FRED parsing.
///
/// # Examples
///
/// ```rust
/// use fred::ParseOptions;
///
/// let options = ParseOptions::new();
/// assert_eq!(options.max_depth, 128);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest nesting of objects, arrays and attribute lists accepted.
    /// Deeper regions are reported as [`Error::NestingTooDeep`](crate::Error)
    /// and skipped.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Configuration options for FRED serialization.
///
/// The default is the canonical minified form: single spaces between
/// elements and nothing else. Pretty output spreads non-empty objects,
/// arrays and streams over indented lines; it reads back as the same value
/// tree.
///
/// # Examples
///
/// ```rust
/// use fred::SerializeOptions;
///
/// // Canonical minify
/// let options = SerializeOptions::new();
/// assert!(!options.pretty);
///
/// // Pretty-printed with 4-space indentation
/// let options = SerializeOptions::pretty().with_indent(4);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    pub indent: usize,
    pub pretty: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            indent: 2,
            pretty: false,
        }
    }
}

impl SerializeOptions {
    /// Creates default options (canonical minify, 2-space indent if pretty is enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    ///
    /// ```rust
    /// use fred::SerializeOptions;
    ///
    /// assert!(SerializeOptions::pretty().pretty);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        SerializeOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Turns pretty layout on or off.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
