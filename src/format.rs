//! FRED Format Reference
//!
//! This module documents the FRED text format as implemented by this
//! library. It contains no code.
//!
//! # Overview
//!
//! A FRED document is either one value or a stream of values. Values are
//! JSON-like (objects, arrays, strings, numbers, booleans, null) with
//! additions: tags with attribute metadata, symbols, dates and times, and
//! opaque blobs.
//!
//! # Lexical Rules
//!
//! ## Whitespace and Comments
//!
//! Space, tab, CR, LF and the comma are all separators and are
//! interchangeable. A `;` starts a comment running to the end of the line.
//!
//! ```text
//! [1, 2 3]      ; the same as [1 2 3]
//! ```
//!
//! ## Names
//!
//! Names appear as tag names, object keys, attribute names and symbol names.
//!
//! - **Bare**: a run of characters other than ``# " ` $ : ; { } [ ] = ( )``,
//!   whitespace and the comma. It may not start with a digit (a leading `-`
//!   followed by a digit is a number) and ends before any `---`. `T` and `_`
//!   may only start a bare name when a non-digit follows. `-flag` and `a-`
//!   are bare names.
//! - **Quoted**: backtick-delimited, with the string escape set:
//!   `` `two words` ``, `` `true` ``.
//!
//! `true`, `false`, `null`, `T`, `Z` and `_` are never bare names.
//!
//! ## Numbers
//!
//! | Form | Example | Value |
//! |------|---------|-------|
//! | Decimal integer | `-42`, `1_000` | `-42`, `1000` |
//! | Decimal float | `2.5`, `-1e-3`, `6.02E23` | floats |
//! | Hexadecimal | `0xFF`, `0xdead_beef` | `255`, `3735928559` |
//! | Octal | `0o17` | `15` |
//! | Binary | `0b101` | `5` |
//!
//! `_` may separate digits. Hex, octal and binary literals carry no sign.
//! Every integer must fit in a signed 64-bit integer.
//!
//! ## Strings and Blobs
//!
//! Strings are double-quoted: `"hello"`. Blobs are a `#` directly followed
//! by a quoted payload that contains no raw line breaks: `#"aGVsbG8="`. The
//! blob payload is opaque text; it is not decoded.
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\b` `\f` `\n` `\r` `\t` `\v` | control characters |
//! | `\"` `` \` `` `\\` `\/` | the character itself |
//! | `\xHH` | code point `HH` |
//! | `\uHHHH` | UTF-16 unit; surrogate pairs combine |
//! | `\UHHHHHHHH` | code point `HHHHHHHH` |
//!
//! ## Dates and Times
//!
//! | Form | Example |
//! |------|---------|
//! | Date | `2021-05-01` |
//! | Local date-time | `2021-05-01T10:00:00`, `2021-05-01_10:00:00` |
//! | Offset date-time | `2021-05-01T10:00:00Z`, `2021-05-01T10:00:00.5+02:00` |
//! | Time | `10:00:00`, `23:59:59.999` |
//!
//! `T` and `_` between date and time are equivalent. Dates, times and
//! offsets must name real calendar values.
//!
//! # Grammar
//!
//! ```text
//! document       := stream | value
//! stream         := "---" (value "---")*
//! value          := tagged | atom
//! tagged         := name attrs? atom
//!                 | "(" name attr* ")"
//! attrs          := "(" attr* ")"
//! attr           := name "=" atom
//! atom           := object | array | dateOrDateTime | TIME
//!                 | symbol | number | string | blob
//!                 | "true" | "false" | "null"
//! object         := "{" pair* "}"
//! pair           := name ":" value
//! array          := "[" atom* "]"
//! symbol         := "$" name
//! dateOrDateTime := DATE (("T" | "_") TIME TIMEOFFSET?)?
//! ```
//!
//! ## Tagged Values
//!
//! ```text
//! point(x=1 y=2) [1 2]     ; prefix form: tag, attributes, payload
//! point [1 2]              ; prefix form without attributes
//! (point x=1 y=2)          ; void form: tag and attributes, no payload
//! ```
//!
//! Only objects may hold tagged values; array elements, attribute values and
//! tag payloads are atoms.
//!
//! ## Repeated Names
//!
//! A repeated object key or attribute name overwrites the earlier value,
//! keeping the position where the name first appeared:
//!
//! ```text
//! {a:1 b:2 a:3}            ; {a:3 b:2}
//! ```
//!
//! ## Streams
//!
//! A stream starts with `---` and every value is followed by `---`:
//!
//! ```text
//! ---
//! {id: 1}
//! ---
//! {id: 2}
//! ---
//! ```
//!
//! `---` alone is an empty stream.
//!
//! # Canonical Form
//!
//! [`serialize`](crate::serialize) writes:
//!
//! - single spaces between elements, no space around `:` and `=`
//! - decimal numbers; floats always show a fraction or exponent
//! - double-quoted strings with the minimal escape set; other control
//!   characters as `\uHHHH`
//! - bare names where possible, backtick-quoted names otherwise
//! - a zero offset as `Z`, other offsets as `+hh:mm` / `-hh:mm`
//! - names ending in `-` backtick-quoted, so they never run into a `---`
//! - a space between a tag name and its payload only when the payload does
//!   not start with a delimiter: `id 5`, `name"x"`, `list[1 2]`
//!
//! Parsing the canonical text yields the same value tree.
