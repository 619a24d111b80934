/// Builds a [`Value`](crate::Value) with JSON-like syntax.
///
/// Object keys are string literals; anything else falls through to
/// `Value::from`. Entries keep the order they are written in. Tagged values
/// start with the `tag` keyword followed by the tag name.
///
/// ```rust
/// use fred::{fred, Value};
///
/// let value = fred!({ "id": 7, "tags": ["a", null, true] });
/// assert_eq!(value.to_string(), r#"{id:7 tags:["a" null true]}"#);
///
/// let point = fred!(tag "point" ("x" = 1, "y" = 2) [1, 2]);
/// assert_eq!(point.to_string(), "point(x=1 y=2)[1 2]");
/// assert_eq!(fred!(tag "done" ()).to_string(), "(done)");
/// ```
#[macro_export]
macro_rules! fred {
    (null) => {
        $crate::Value::Null
    };
    (true) => {
        $crate::Value::Bool(true)
    };
    (false) => {
        $crate::Value::Bool(false)
    };

    // tagged values: `tag "name" (attrs) payload`, `tag "name" (attrs)`, `tag "name" payload`
    (tag $tag:literal ( $($attr:literal = $meta:tt),* $(,)? ) $payload:tt) => {
        $crate::Value::Tagged(
            $crate::Tagged::new($tag)
                .with_meta($crate::fred!(@attrs $($attr = $meta),*))
                .with_value($crate::fred!($payload)),
        )
    };
    (tag $tag:literal ( $($attr:literal = $meta:tt),* $(,)? )) => {
        $crate::Value::Tagged(
            $crate::Tagged::new($tag).with_meta($crate::fred!(@attrs $($attr = $meta),*)),
        )
    };
    (tag $tag:literal $payload:tt) => {
        $crate::Value::Tagged($crate::Tagged::new($tag).with_value($crate::fred!($payload)))
    };
    (@attrs $($attr:literal = $meta:tt),*) => {{
        #[allow(unused_mut)]
        let mut meta = $crate::FredMap::new();
        $(
            meta.insert($attr, $crate::fred!($meta));
        )*
        meta
    }};

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::fred!($elem)),*])
    };
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut object = $crate::FredMap::new();
        $(
            object.insert($key, $crate::fred!($value));
        )*
        $crate::Value::Object(object)
    }};

    (( $($inner:tt)+ )) => {
        $crate::fred!($($inner)+)
    };
    ($e:expr) => {
        $crate::Value::from($e)
    };
}

#[cfg(test)]
mod tests {
    use crate::{FredMap, Number, Symbol, Value};

    #[test]
    fn test_fred_macro_primitives() {
        assert_eq!(fred!(null), Value::Null);
        assert_eq!(fred!(true), Value::Bool(true));
        assert_eq!(fred!(false), Value::Bool(false));
        assert_eq!(fred!(42), Value::Number(Number::Integer(42)));
        assert_eq!(fred!(-123), Value::Number(Number::Integer(-123)));
        assert_eq!(fred!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(fred!("hello"), Value::String("hello".to_string()));
        assert_eq!(fred!(Symbol::new("s")), Value::Symbol(Symbol::new("s")));
    }

    #[test]
    fn test_fred_macro_arrays() {
        assert_eq!(fred!([]), Value::Array(vec![]));
        assert_eq!(
            fred!([1, "two", null]),
            Value::Array(vec![Value::from(1), Value::from("two"), Value::Null])
        );
    }

    #[test]
    fn test_fred_macro_objects() {
        assert_eq!(fred!({}), Value::Object(FredMap::new()));

        let obj = fred!({
            "name": "Alice",
            "nested": { "ok": true },
            "age": 30,
        });

        let Value::Object(map) = obj else {
            panic!("Expected object");
        };
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "nested", "age"]);
        assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
        assert!(map.get("nested").is_some_and(Value::is_object));
    }

    #[test]
    fn test_fred_macro_tags() {
        let Value::Tagged(void) = fred!(tag "flag" ("on" = true)) else {
            panic!("Expected tagged value");
        };
        assert_eq!(void.attr("on"), Some(&Value::Bool(true)));
        assert!(void.value.is_none());

        let Value::Tagged(prefix) = fred!(tag "id" 5) else {
            panic!("Expected tagged value");
        };
        assert!(prefix.meta.is_none());
        assert_eq!(prefix.value.as_deref(), Some(&Value::from(5)));

        let entry = fred!({ "when": (tag "at" ("tz" = "utc") {}) });
        assert_eq!(entry.to_string(), r#"{when:at(tz="utc"){}}"#);
    }
}
