//! Deep merge for nested JSON-like trees.
//!
//! Used both to overlay message trees and to compose user configuration over
//! the built-in defaults.

use serde_json::{Map, Value};

/// What: Recursively merge `source` into `target`.
///
/// Inputs:
/// - `target`: Base tree
/// - `source`: Overriding tree
///
/// Output:
/// - Merged tree; `source` wins on every conflicting leaf
///
/// Details:
/// - `Null` source returns `target` unchanged, `Null` target returns `source`
/// - If either side is not an object, `source` replaces `target` entirely
/// - Arrays are atomic values and are replaced, never merged element-wise
/// - Keys present only in `target` are preserved
/// - A `null` value nested inside `source` still overwrites the target key
#[must_use]
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (target, Value::Null) => target,
        (Value::Null, source) => source,
        (Value::Object(mut result), Value::Object(source)) => {
            for (key, value) in source {
                if value.is_object() {
                    let slot = result.entry(key).or_insert(Value::Null);
                    let existing = std::mem::take(slot);
                    *slot = deep_merge(existing, value);
                } else {
                    result.insert(key, value);
                }
            }
            Value::Object(result)
        }
        (_, source) => source,
    }
}

/// What: Fold [`deep_merge`] left-to-right over an ordered sequence of trees.
///
/// Inputs:
/// - `trees`: Trees in ascending precedence order
///
/// Output:
/// - `{}` for an empty sequence, the tree itself for a single element,
///   otherwise the merged result where later trees win
#[must_use]
pub fn deep_merge_all<I>(trees: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let mut iter = trees.into_iter();
    let Some(first) = iter.next() else {
        return Value::Object(Map::new());
    };
    iter.fold(first, deep_merge)
}

/// What: Merge two object maps without leaving the `Map` type.
///
/// Inputs:
/// - `target`: Base map
/// - `source`: Overriding map
///
/// Output:
/// - Merged map, same rules as [`deep_merge`]
#[must_use]
pub fn merge_maps(target: Map<String, Value>, source: Map<String, Value>) -> Map<String, Value> {
    match deep_merge(Value::Object(target), Value::Object(source)) {
        Value::Object(map) => map,
        // Two objects always merge into an object.
        _ => Map::new(),
    }
}
