//! Nested-object flattening
//!
//! Transforms an arbitrarily nested JSON object into a single-level map
//! keyed by dot-joined path segments. Only objects are recursed into;
//! arrays and scalars are leaves and are preserved as-is.
//!
//! The traversal is depth-first over an explicit stack of sibling
//! iterators, so deeply nested input never grows the call stack. A later
//! sibling whose value is an object interrupts iteration of the current
//! level, is descended into completely, then the outer siblings resume.

use crate::types::{JsonObject, JsonValue};

/// Separator joining path segments in flattened keys
pub const PATH_SEPARATOR: &str = ".";

/// Flatten a nested JSON object into a flat map keyed by `.`-joined paths.
///
/// An object value that yields no leaves (an empty object, or objects
/// nested to any depth with no leaf fields) contributes no entries.
pub fn flatten(object: &JsonObject) -> JsonObject {
    flatten_with(object, PATH_SEPARATOR)
}

/// Flatten a nested JSON object using a custom path separator.
pub fn flatten_with(object: &JsonObject, separator: &str) -> JsonObject {
    let mut result = JsonObject::new();
    let mut frames: Vec<serde_json::map::Iter<'_>> = vec![object.iter()];
    let mut path: Vec<&str> = Vec::new();

    while let Some(frame) = frames.last_mut() {
        let mut descend = None;
        for (key, value) in frame.by_ref() {
            path.push(key);
            if let JsonValue::Object(inner) = value {
                descend = Some(inner);
                break;
            }
            result.insert(path.join(separator), value.clone());
            path.pop();
        }
        match descend {
            Some(inner) => frames.push(inner.iter()),
            None => {
                // Level exhausted: drop its path segment, unless this is
                // the root level (which pushed none).
                if !path.is_empty() {
                    path.pop();
                }
                frames.pop();
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn obj(value: JsonValue) -> JsonObject {
        value.as_object().expect("test input must be an object").clone()
    }

    #[test]
    fn test_flat_input_is_unchanged() {
        let input = obj(json!({"a": 1, "b": "two", "c": null}));
        assert_eq!(flatten(&input), input);
    }

    #[test]
    fn test_nested_paths() {
        let input = obj(json!({"a": {"b": 1, "c": 2}, "d": 3}));
        let expected = obj(json!({"a.b": 1, "a.c": 2, "d": 3}));
        assert_eq!(flatten(&input), expected);
    }

    #[test]
    fn test_deeply_nested_paths() {
        let input = obj(json!({
            "headline": {"main": "Title", "kicker": {"text": "K"}},
            "web_url": "https://example.com"
        }));
        let expected = obj(json!({
            "headline.main": "Title",
            "headline.kicker.text": "K",
            "web_url": "https://example.com"
        }));
        assert_eq!(flatten(&input), expected);
    }

    #[test_case(json!([1, 2, 3]); "number array")]
    #[test_case(json!(["x", {"y": 1}]); "array holding an object")]
    #[test_case(json!([]); "empty array")]
    fn test_arrays_are_leaves(leaf: JsonValue) {
        let input = obj(json!({ "a": leaf }));
        assert_eq!(flatten(&input), input);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(flatten(&JsonObject::new()), JsonObject::new());
    }

    #[test]
    fn test_empty_nested_object_yields_nothing() {
        let input = obj(json!({"a": {}}));
        assert_eq!(flatten(&input), JsonObject::new());
    }

    #[test]
    fn test_leaf_free_nesting_yields_nothing() {
        let input = obj(json!({"a": {"b": {}}}));
        assert_eq!(flatten(&input), JsonObject::new());
    }

    #[test]
    fn test_empty_object_does_not_corrupt_sibling_paths() {
        let input = obj(json!({"a": {}, "d": 3}));
        assert_eq!(flatten(&input), obj(json!({"d": 3})));

        let input = obj(json!({"a": {"b": {}}, "d": {"e": 4}}));
        assert_eq!(flatten(&input), obj(json!({"d.e": 4})));
    }

    #[test]
    fn test_sibling_resumes_after_descent() {
        let input = obj(json!({"a": 1, "b": {"c": 2}, "d": 3}));
        let expected = obj(json!({"a": 1, "b.c": 2, "d": 3}));
        assert_eq!(flatten(&input), expected);
    }

    #[test]
    fn test_custom_separator() {
        let input = obj(json!({"a": {"b": 1}}));
        let expected = obj(json!({"a/b": 1}));
        assert_eq!(flatten_with(&input, "/"), expected);
    }

    #[test]
    fn test_very_deep_nesting() {
        // 2000 levels deep: an explicit stack must handle this without
        // overflowing the call stack.
        let depth = 2000;
        let mut value = json!(1);
        for _ in 0..depth {
            value = json!({ "k": value });
        }
        let input = obj(value);

        let result = flatten(&input);
        assert_eq!(result.len(), 1);

        let key = result.keys().next().unwrap();
        assert_eq!(key.matches('.').count(), depth - 1);
        assert_eq!(result[key], json!(1));
    }
}
