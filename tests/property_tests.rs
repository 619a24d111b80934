//! Property-based tests over generated FRED values.
//!
//! The generators only produce trees the grammar can express: array
//! elements, attribute values and tag payloads are atoms, names are
//! non-empty, and floats are finite.

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
use fred::{parse, serialize, to_string_pretty, DateValue, Document, FredMap, Symbol, Tagged, Value};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> + Clone {
    prop_oneof![
        "[a-z][a-z0-9-]{0,6}[a-z0-9]",
        "\\PC{1,6}",
    ]
}

fn date() -> impl Strategy<Value = DateValue> + Clone {
    let day = (1000i32..=9999, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
    let time = (0u32..86_400, prop_oneof![Just(0u32), 0u32..1_000_000_000])
        .prop_map(|(secs, nanos)| NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos).unwrap());
    let offset = (-1439i32..=1439).prop_map(|minutes| FixedOffset::east_opt(minutes * 60).unwrap());

    prop_oneof![
        day.clone().prop_map(DateValue::Date),
        (day.clone(), time.clone()).prop_map(|(d, t)| DateValue::LocalDateTime(d.and_time(t))),
        (day, time.clone(), offset).prop_map(|(d, t, o)| {
            DateValue::OffsetDateTime(o.from_local_datetime(&d.and_time(t)).unwrap())
        }),
        time.prop_map(DateValue::Time),
    ]
}

fn leaf() -> impl Strategy<Value = Value> + Clone {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::from),
        any::<String>().prop_map(Value::String),
        "[A-Za-z0-9+/]{0,12}={0,2}".prop_map(Value::Blob),
        name().prop_map(|n| Value::Symbol(Symbol::new(n))),
        date().prop_map(Value::Date),
    ]
}

fn attrs(atom: impl Strategy<Value = Value> + Clone) -> impl Strategy<Value = FredMap> + Clone {
    prop::collection::vec((name(), atom), 1..4).prop_map(|pairs| pairs.into_iter().collect())
}

/// Atoms nest through arrays and objects; tagged values only appear as
/// object entries.
fn atom() -> impl Strategy<Value = Value> + Clone {
    leaf().prop_recursive(4, 48, 6, |inner| {
        let entry = prop_oneof![
            3 => inner.clone(),
            1 => tagged(inner.clone()),
        ];
        prop_oneof![
            prop::collection::vec(inner, 0..6).prop_map(Value::Array),
            prop::collection::vec((name(), entry), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

fn tagged(atom: impl Strategy<Value = Value> + Clone) -> impl Strategy<Value = Value> + Clone {
    let void = (name(), prop::option::of(attrs(atom.clone()))).prop_map(|(tag, meta)| {
        let mut tagged = Tagged::new(tag);
        tagged.meta = meta;
        Value::Tagged(tagged)
    });
    let prefix = (name(), prop::option::of(attrs(atom.clone())), atom).prop_map(
        |(tag, meta, payload)| {
            let mut tagged = Tagged::new(tag).with_value(payload);
            tagged.meta = meta;
            Value::Tagged(tagged)
        },
    );
    prop_oneof![void, prefix]
}

fn value() -> impl Strategy<Value = Value> + Clone {
    prop_oneof![3 => atom(), 1 => tagged(atom())]
}

fn document() -> impl Strategy<Value = Document> + Clone {
    prop_oneof![
        3 => value().prop_map(Document::Single),
        1 => prop::collection::vec(value(), 0..4).prop_map(Document::Stream),
    ]
}

proptest! {
    #[test]
    fn prop_minified_round_trip(doc in document()) {
        let text = serialize(&doc);
        let parsed = parse(&text).map_err(|e| TestCaseError::fail(format!("{text:?}: {e}")))?;
        prop_assert_eq!(parsed, doc);
    }

    #[test]
    fn prop_pretty_round_trip(doc in document()) {
        let text = to_string_pretty(&doc);
        let parsed = parse(&text).map_err(|e| TestCaseError::fail(format!("{text:?}: {e}")))?;
        prop_assert_eq!(parsed, doc);
    }

    #[test]
    fn prop_minify_is_idempotent(doc in document()) {
        let once = serialize(&doc);
        let twice = serialize(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_minified_text_is_single_line(doc in document()) {
        prop_assert!(!serialize(&doc).contains('\n'));
    }

    #[test]
    fn prop_parse_never_panics(text in "\\PC{0,64}") {
        let _ = parse(&text);
    }

    #[test]
    fn prop_parse_never_panics_on_token_soup(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "{", "}", "[", "]", "(", ")", ":", "=", "$", "#", "---", "T", "_", "Z",
                "a", "`q`", "1", "-", "0x1F", "2021-05-01", "10:00:00", "+01:00",
                "\"s\"", "#\"b\"", "null", "true", ";c\n", " ",
            ]),
            0..40,
        )
    ) {
        let text: String = parts.concat();
        if let Err(err) = parse(&text) {
            prop_assert!(!err.is_empty());
            let offsets: Vec<usize> = err.errors().iter().map(fred::Error::offset).collect();
            prop_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
