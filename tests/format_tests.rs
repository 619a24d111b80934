//! Conformance cases in the JSON test encoding.
//!
//! Each case parses FRED text and compares the `serde` encoding of the
//! result with the expected JSON, the way the shared FRED test corpus
//! states its expectations.

use fred::{parse, parse_value, Document};
use serde_json::{json, Value as Json};

fn encode(source: &str) -> Json {
    let doc = parse(source).unwrap_or_else(|e| panic!("{source}: {e}"));
    serde_json::to_value(&doc).unwrap()
}

#[test]
fn test_scalars_encode_as_json_natives() {
    assert_eq!(encode("null"), json!(null));
    assert_eq!(encode("true"), json!(true));
    assert_eq!(encode("-12"), json!(-12));
    assert_eq!(encode("2.5"), json!(2.5));
    assert_eq!(encode(r#""a\nb""#), json!("a\nb"));
    assert_eq!(encode("[1 [2]]"), json!([1, [2]]));
}

#[test]
fn test_typed_wrappers() {
    assert_eq!(encode("$ok"), json!({"type": "symbol", "value": "ok"}));
    assert_eq!(encode(r#"#"AAE=""#), json!({"type": "blob", "value": "AAE="}));
    assert_eq!(
        encode("2021-05-01"),
        json!({"type": "date", "value": "2021-05-01"})
    );
    assert_eq!(
        encode("2021-05-01_10:00:00.5"),
        json!({"type": "date", "value": "2021-05-01T10:00:00.500"})
    );
    assert_eq!(
        encode("2021-05-01T10:00:00+01:00"),
        json!({"type": "date", "value": "2021-05-01T10:00:00+01:00"})
    );
    assert_eq!(encode("12:30:00"), json!({"type": "date", "value": "12:30:00"}));
}

#[test]
fn test_dates_encode_canonical_text() {
    assert_eq!(
        encode("2021-05-01T10:00:00+00:00"),
        json!({"type": "date", "value": "2021-05-01T10:00:00Z"})
    );
    assert_eq!(
        encode("10:00:00.5"),
        json!({"type": "date", "value": "10:00:00.500"})
    );
    assert_eq!(
        encode("2021-05-01T10:00:00.123456-05:30"),
        json!({"type": "date", "value": "2021-05-01T10:00:00.123456-05:30"})
    );
}

#[test]
fn test_keywords_inside_streams() {
    assert_eq!(encode("---null---"), json!({"type": "stream", "value": [null]}));
    assert_eq!(
        encode("---true---false---"),
        json!({"type": "stream", "value": [true, false]})
    );
    assert_eq!(
        encode("---x false---"),
        json!({"type": "stream", "value": [{"tag": "x", "meta": null, "value": false}]})
    );
}

#[test]
fn test_object_encoding_keeps_order() {
    let encoded = encode("{b:1 a:{} b:3}");
    assert_eq!(
        encoded,
        json!({"type": "object", "value": {"b": 3, "a": {"type": "object", "value": {}}}})
    );
    let keys: Vec<&String> = encoded["value"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn test_tagged_encoding() {
    assert_eq!(
        encode("(point x=1 y=2)"),
        json!({"tag": "point", "meta": {"x": 1, "y": 2}, "value": null})
    );
    assert_eq!(
        encode("point(x=1 y=2) [1 2]"),
        json!({"tag": "point", "meta": {"x": 1, "y": 2}, "value": [1, 2]})
    );
    assert_eq!(
        encode("point [1 2]"),
        json!({"tag": "point", "meta": null, "value": [1, 2]})
    );
    assert_eq!(
        encode("(point)"),
        json!({"tag": "point", "meta": null, "value": null})
    );
    assert_eq!(
        encode("when(tz=$utc) 2021-05-01"),
        json!({
            "tag": "when",
            "meta": {"tz": {"type": "symbol", "value": "utc"}},
            "value": {"type": "date", "value": "2021-05-01"}
        })
    );
}

#[test]
fn test_stream_encoding() {
    assert_eq!(
        encode("---1---$a---"),
        json!({"type": "stream", "value": [1, {"type": "symbol", "value": "a"}]})
    );
    assert_eq!(encode("---"), json!({"type": "stream", "value": []}));
}

#[test]
fn test_lexical_overlaps() {
    // keyword prefixes stay identifiers
    assert_eq!(
        encode("{nullable: trueish 1}"),
        json!({"type": "object", "value": {
            "nullable": {"tag": "trueish", "meta": null, "value": 1}
        }})
    );
    // a date is not a subtraction of numbers
    assert_eq!(encode("[2021-05-01 2021]")[1], json!(2021));
    // `Z` and `T` only act as markers next to times
    assert_eq!(
        encode("[$Zulu $Tango]"),
        json!([
            {"type": "symbol", "value": "Zulu"},
            {"type": "symbol", "value": "Tango"}
        ])
    );
    // hyphenated names survive, `---` splits them
    assert_eq!(
        encode("---my-tag 1---"),
        json!({"type": "stream", "value": [{"tag": "my-tag", "meta": null, "value": 1}]})
    );
}

#[test]
fn test_quoted_names() {
    assert_eq!(
        encode("{`true`: 1 `a b`: 2 `\\u00e9`: 3}"),
        json!({"type": "object", "value": {"true": 1, "a b": 2, "\u{e9}": 3}})
    );
}

#[test]
fn test_escapes() {
    assert_eq!(
        encode(r#""\b\f\n\r\t\v\"\`\\\/""#),
        json!("\u{8}\u{c}\n\r\t\u{b}\"`\\/")
    );
    assert_eq!(encode(r#""😀""#), json!("\u{1F600}"));
    assert_eq!(encode(r#""\U0001F600""#), json!("\u{1F600}"));
}

#[test]
fn test_rejected_inputs() {
    let rejected = [
        "",
        "; nothing but a comment",
        "[1 2",
        "{a}",
        "[point 1]",
        "(point x)",
        "(1)",
        "$",
        "#",
        "2021-05-01T",
        "10:00:00Z",
        "---1",
        "1 2",
        "0x",
        "\"unterminated",
        "#\"line\nbreak\"",
        "`` ",
        "a---",
    ];
    for input in rejected {
        assert!(parse(input).is_err(), "accepted: {input:?}");
    }
}

#[test]
fn test_value_entry_point_agrees_with_document() {
    for input in ["{a:1}", "(t)", "t 1", "[1 2]"] {
        let Document::Single(value) = parse(input).unwrap() else {
            panic!("expected single value");
        };
        assert_eq!(parse_value(input).unwrap(), value);
    }
}
