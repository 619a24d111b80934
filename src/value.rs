//! The FRED value model.
//!
//! This module provides the semantic tree produced by [`parse`](crate::parse)
//! and consumed by [`serialize`](crate::serialize).
//!
//! ## Core Types
//!
//! - [`Document`]: a single value or a `---`-separated stream of values
//! - [`Value`]: any FRED value (null, bool, number, string, blob, symbol, date, array, object, tagged)
//! - [`Number`]: a decoded numeric literal; the base it was written in is not kept
//! - [`DateValue`]: date-only, local date-time, offset date-time or time-only
//! - [`Symbol`]: a `$name` compared by name
//! - [`Tagged`]: a tag name with optional attribute metadata and optional payload
//!
//! All of these own their data outright; a [`Document`] exclusively owns its
//! subtree and nothing is shared between documents, so values can be sent
//! across threads freely.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use fred::{fred, parse, Document, Value};
//!
//! let doc = parse(r#"user(id=7) {name: "Ada" langs: ["en" "fr"]}"#).unwrap();
//! let Document::Single(Value::Tagged(tagged)) = doc else { unreachable!() };
//!
//! assert_eq!(tagged.tag, "user");
//! assert_eq!(tagged.attr("id").and_then(Value::as_i64), Some(7));
//! assert_eq!(
//!     tagged.value.as_deref(),
//!     Some(&fred!({ "name": "Ada", "langs": ["en", "fr"] }))
//! );
//! ```
//!
//! ## JSON Test Encoding
//!
//! [`Value`] and [`Document`] implement `serde::Serialize` using the encoding
//! of the FRED conformance corpus: JSON natives where JSON has them, and
//! `{"type": ..., "value": ...}` wrappers for dates, blobs, symbols, objects
//! and streams. Tagged values become `{"tag", "meta", "value"}` objects.

use crate::FredMap;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A parsed FRED document.
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    /// A document holding one top-level value.
    Single(Value),
    /// A `---`-separated stream of top-level values.
    Stream(Vec<Value>),
}

impl Document {
    #[inline]
    #[must_use]
    pub const fn is_stream(&self) -> bool {
        matches!(self, Document::Stream(_))
    }

    /// Returns the top-level values in document order.
    ///
    /// ```rust
    /// let doc = fred::parse("---1---2---").unwrap();
    /// let numbers: Vec<_> = doc.values().iter().filter_map(|v| v.as_i64()).collect();
    /// assert_eq!(numbers, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn values(&self) -> &[Value] {
        match self {
            Document::Single(value) => std::slice::from_ref(value),
            Document::Stream(values) => values,
        }
    }

    /// Consumes the document and returns its top-level values.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Document::Single(value) => vec![value],
            Document::Stream(values) => values,
        }
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Document::Single(value)
    }
}

impl std::str::FromStr for Document {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize(self))
    }
}

/// Any FRED value.
///
/// Arrays, tag attributes and tag payloads hold atoms (every variant except
/// [`Value::Tagged`]); only object entries and top-level values may be
/// tagged. A tree that puts a tagged value in an atom position serializes to
/// text the grammar rejects.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Opaque blob payload; escapes are resolved but the content is not decoded.
    Blob(String),
    Symbol(Symbol),
    Date(DateValue),
    Array(Vec<Value>),
    Object(FredMap),
    Tagged(Tagged),
}

/// A decoded numeric literal.
///
/// Hex, octal and binary literals always decode to non-negative integers.
/// Decimal literals with a fraction or exponent decode to floats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fred::Number;
    ///
    /// assert!(Number::Integer(42).is_integer());
    /// assert!(!Number::Float(3.5).is_integer());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Floats with no fractional part that fit in `i64` convert; everything
    /// else returns `None`.
    ///
    /// ```rust
    /// use fred::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            // Debug keeps a fraction or exponent, so the text reads back as a float
            Number::Float(fl) if fl.is_finite() => write!(f, "{:?}", fl),
            Number::Float(_) => write!(f, "null"),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A date or time value. The shape records which parts were written.
///
/// Two [`DateValue::OffsetDateTime`]s are equal only when both the local
/// date-time and the offset match, so equal values serialize identically.
/// `10:00:00+01:00` and `09:00:00Z` name the same instant but are not equal.
#[derive(Clone, Copy, Debug)]
pub enum DateValue {
    /// `2021-05-01`
    Date(NaiveDate),
    /// `2021-05-01T10:00:00`
    LocalDateTime(NaiveDateTime),
    /// `2021-05-01T10:00:00Z`, `2021-05-01T10:00:00+02:00`
    OffsetDateTime(DateTime<FixedOffset>),
    /// `10:00:00`
    Time(NaiveTime),
}

impl DateValue {
    /// Returns `true` if this value carries a time of day.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        !matches!(self, DateValue::Date(_))
    }

    /// Returns the offset of an offset date-time.
    #[must_use]
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            DateValue::OffsetDateTime(dt) => Some(*dt.offset()),
            _ => None,
        }
    }
}

impl PartialEq for DateValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DateValue::Date(a), DateValue::Date(b)) => a == b,
            (DateValue::LocalDateTime(a), DateValue::LocalDateTime(b)) => a == b,
            (DateValue::OffsetDateTime(a), DateValue::OffsetDateTime(b)) => {
                a.naive_local() == b.naive_local() && a.offset() == b.offset()
            }
            (DateValue::Time(a), DateValue::Time(b)) => a == b,
            _ => false,
        }
    }
}

/// Writes `HH:MM:SS` with the fraction only when there is one.
fn write_time(f: &mut fmt::Formatter<'_>, time: &NaiveTime) -> fmt::Result {
    write!(f, "{}", time.format("%H:%M:%S"))?;
    if time.nanosecond() != 0 {
        write!(f, "{}", time.format("%.f"))?;
    }
    Ok(())
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DateValue::LocalDateTime(dt) => {
                write!(f, "{}T", dt.date().format("%Y-%m-%d"))?;
                write_time(f, &dt.time())
            }
            DateValue::OffsetDateTime(dt) => {
                let local = dt.naive_local();
                write!(f, "{}T", local.date().format("%Y-%m-%d"))?;
                write_time(f, &local.time())?;
                if dt.offset().local_minus_utc() == 0 {
                    f.write_str("Z")
                } else {
                    write!(f, "{}", dt.format("%:z"))
                }
            }
            DateValue::Time(time) => write_time(f, time),
        }
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        DateValue::Date(value)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        DateValue::LocalDateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for DateValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateValue::OffsetDateTime(value)
    }
}

impl From<NaiveTime> for DateValue {
    fn from(value: NaiveTime) -> Self {
        DateValue::Time(value)
    }
}

/// A FRED symbol, written `$name`. Two symbols are equal when their names are.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Symbol(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize_value(&Value::Symbol(self.clone())))
    }
}

/// A tagged value.
///
/// The two surface forms map onto the optional fields:
///
/// - prefix form `point(x=1 y=2) [1 2]`: `meta` is `Some` when an attribute
///   list was written (even an empty `()`), `value` is always `Some`
/// - void form `(point x=1 y=2)`: `value` is `None`, and `meta` is `None`
///   when no attributes were written
///
/// Repeated attribute names keep the last value written.
#[derive(Clone, Debug, PartialEq)]
pub struct Tagged {
    pub tag: String,
    pub meta: Option<FredMap>,
    pub value: Option<Box<Value>>,
}

impl Tagged {
    /// Creates a tag with no metadata and no payload.
    #[must_use]
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Tagged {
            tag: tag.into(),
            meta: None,
            value: None,
        }
    }

    /// Sets the attribute metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: FredMap) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Sets the payload.
    #[must_use]
    pub fn with_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.value = Some(Box::new(value.into()));
        self
    }

    /// Looks up a single attribute.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.meta.as_ref().and_then(|meta| meta.get(name))
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_blob(&self) -> bool {
        matches!(self, Value::Blob(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_tagged(&self) -> bool {
        matches!(self, Value::Tagged(_))
    }

    /// Returns `true` for every variant that may stand in an atom position.
    #[inline]
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        !self.is_tagged()
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// ```rust
    /// use fred::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns it. Blobs are not strings.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_blob(&self) -> Option<&str> {
        match self {
            Value::Blob(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateValue> {
        match self {
            Value::Date(date) => Some(date),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&FredMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_tagged(&self) -> Option<&Tagged> {
        match self {
            Value::Tagged(tagged) => Some(tagged),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize_value(self))
    }
}

/// `{"type": kind, "value": value}`
struct TypedEncoding<'a, T: ?Sized>(&'static str, &'a T);

impl<T: Serialize + ?Sized> Serialize for TypedEncoding<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.0)?;
        map.serialize_entry("value", self.1)?;
        map.end()
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Integer(i) => serializer.serialize_i64(*i),
            Number::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

impl Serialize for FredMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for Tagged {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("tag", &self.tag)?;
        map.serialize_entry("meta", &self.meta)?;
        map.serialize_entry("value", &self.value)?;
        map.end()
    }
}

/// Encodes the value in the JSON form used by FRED conformance fixtures.
///
/// Dates are encoded by their canonical text, the same text [`fmt::Display`]
/// writes: a fraction is padded to 3, 6 or 9 digits and a zero offset is
/// written `Z`. The spelling in the source (`.5`, `+00:00`, `_`) is not kept.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Blob(s) => TypedEncoding("blob", s.as_str()).serialize(serializer),
            Value::Symbol(sym) => TypedEncoding("symbol", sym.name()).serialize(serializer),
            Value::Date(date) => {
                TypedEncoding("date", date.to_string().as_str()).serialize(serializer)
            }
            Value::Array(arr) => arr.serialize(serializer),
            Value::Object(obj) => TypedEncoding("object", obj).serialize(serializer),
            Value::Tagged(tagged) => tagged.serialize(serializer),
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Document::Single(value) => value.serialize(serializer),
            Document::Stream(values) => {
                TypedEncoding("stream", values.as_slice()).serialize(serializer)
            }
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<DateValue> for Value {
    fn from(value: DateValue) -> Self {
        Value::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<FredMap> for Value {
    fn from(value: FredMap) -> Self {
        Value::Object(value)
    }
}

impl From<Tagged> for Value {
    fn from(value: Tagged) -> Self {
        Value::Tagged(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_symbols_compare_by_name() {
        assert_eq!(Symbol::new("red"), Symbol::new(String::from("red")));
        assert_ne!(Symbol::new("red"), Symbol::new("blue"));
        assert_eq!(
            Value::Symbol(Symbol::new("x")),
            Value::from(Symbol::new("x"))
        );
    }

    #[test]
    fn test_number_display_reads_back_as_same_kind() {
        assert_eq!(Number::Integer(-12).to_string(), "-12");
        assert_eq!(Number::Float(1.0).to_string(), "1.0");
        assert_eq!(Number::Float(0.25).to_string(), "0.25");
        assert_eq!(Number::Float(1e20).to_string(), "1e20");
        assert_eq!(Number::Float(f64::NAN).to_string(), "null");
    }

    #[test]
    fn test_offset_datetimes_compare_by_local_time_and_offset() {
        let plus_one = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2021, 5, 1, 10, 0, 0)
            .unwrap();
        let utc = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2021, 5, 1, 9, 0, 0)
            .unwrap();
        assert_eq!(plus_one, utc);
        assert_ne!(DateValue::OffsetDateTime(plus_one), DateValue::OffsetDateTime(utc));
        assert_eq!(
            DateValue::OffsetDateTime(plus_one),
            DateValue::OffsetDateTime(plus_one)
        );
        assert_ne!(
            DateValue::Date(NaiveDate::from_ymd_opt(2021, 5, 1).unwrap()),
            DateValue::LocalDateTime(plus_one.naive_local())
        );
    }

    #[test]
    fn test_date_display() {
        let date = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
        let time = NaiveTime::from_hms_milli_opt(10, 0, 0, 250).unwrap();
        assert_eq!(DateValue::Date(date).to_string(), "2021-05-01");
        assert_eq!(
            DateValue::LocalDateTime(date.and_time(time)).to_string(),
            "2021-05-01T10:00:00.250"
        );
        assert_eq!(
            DateValue::Time(NaiveTime::from_hms_opt(23, 59, 1).unwrap()).to_string(),
            "23:59:01"
        );

        let utc = FixedOffset::east_opt(0).unwrap();
        let dt = utc.with_ymd_and_hms(2021, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(
            DateValue::OffsetDateTime(dt).to_string(),
            "2021-05-01T10:00:00Z"
        );

        let minus_three = FixedOffset::west_opt(3 * 3600).unwrap();
        let dt = minus_three.with_ymd_and_hms(2021, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(
            DateValue::OffsetDateTime(dt).to_string(),
            "2021-05-01T10:00:00-03:00"
        );
    }

    #[test]
    fn test_tagged_builders() {
        let mut meta = FredMap::new();
        meta.insert("x".to_string(), Value::from(1));
        let tagged = Tagged::new("point")
            .with_meta(meta)
            .with_value(vec![Value::from(1), Value::from(2)]);

        assert_eq!(tagged.attr("x"), Some(&Value::from(1)));
        assert_eq!(tagged.attr("y"), None);
        assert!(Value::from(tagged).is_tagged());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn test_document_values() {
        let single = Document::Single(Value::Null);
        assert_eq!(single.values(), &[Value::Null]);
        assert!(!single.is_stream());

        let stream = Document::Stream(vec![Value::from(1), Value::from(2)]);
        assert!(stream.is_stream());
        assert_eq!(stream.into_values().len(), 2);
    }
}
