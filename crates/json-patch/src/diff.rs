use json_pointer::JsonPointer;
use serde_json::{Map, Value};

use crate::{DiffOptions, JsonDiff, JsonPatch};

/// Computes the operations that turn `actual` into `expected`.
///
/// The result is empty iff both trees are semantically equal: object key order
/// is ignored, array order is not, and numbers compare according to
/// [`DiffOptions::numbers`]. Moves and copies are never detected.
pub fn diff(actual: &Value, expected: &Value, options: DiffOptions) -> JsonDiff {
    let mut output = Vec::new();
    let mut path = JsonPointer::root();
    diff_value(&mut path, actual, expected, options, &mut output);
    JsonDiff::new(output)
}

fn diff_value(
    path: &mut JsonPointer,
    actual: &Value,
    expected: &Value,
    options: DiffOptions,
    output: &mut Vec<JsonPatch>,
) {
    let same = match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => {
            return diff_object(path, actual, expected, options, output)
        }
        (Value::Array(actual), Value::Array(expected)) => {
            return diff_array(path, actual, expected, options, output)
        }
        (Value::Number(a), Value::Number(b)) => options.numbers.equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        _ => false,
    };

    if !same {
        output.push(JsonPatch::Replace {
            path: path.clone(),
            value: expected.clone(),
        });
    }
}

fn diff_object(
    path: &mut JsonPointer,
    actual: &Map<String, Value>,
    expected: &Map<String, Value>,
    options: DiffOptions,
    output: &mut Vec<JsonPatch>,
) {
    for (key, actual_value) in actual {
        match expected.get(key) {
            Some(expected_value) => {
                path.push(key);
                diff_value(path, actual_value, expected_value, options, output);
                path.pop();
            }
            None => output.push(JsonPatch::Remove {
                path: path.child(key),
            }),
        }
    }

    for (key, expected_value) in expected {
        if !actual.contains_key(key) {
            output.push(JsonPatch::Add {
                path: path.child(key),
                value: expected_value.clone(),
            });
        }
    }
}

fn diff_array(
    path: &mut JsonPointer,
    actual: &[Value],
    expected: &[Value],
    options: DiffOptions,
    output: &mut Vec<JsonPatch>,
) {
    let common = actual.len().min(expected.len());

    for (index, (actual_value, expected_value)) in actual.iter().zip(expected).enumerate() {
        path.push(index);
        diff_value(path, actual_value, expected_value, options, output);
        path.pop();
    }

    // Highest index first so each removal leaves the remaining indices valid.
    for index in (common..actual.len()).rev() {
        output.push(JsonPatch::Remove {
            path: path.child(index),
        });
    }

    for (index, value) in expected.iter().enumerate().skip(common) {
        output.push(JsonPatch::Add {
            path: path.child(index),
            value: value.clone(),
        });
    }
}
