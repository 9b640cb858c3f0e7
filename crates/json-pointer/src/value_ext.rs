use serde_json::Value;

use crate::JsonPointer;

pub trait ValueExt {
    fn locate(&self, pointer: &JsonPointer) -> Option<&Value>;
}

fn parse_index(segment: &str) -> Option<usize> {
    // RFC 6901 forbids leading zeros in array indices.
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}

impl ValueExt for Value {
    fn locate(&self, pointer: &JsonPointer) -> Option<&Value> {
        pointer.iter().try_fold(self, |acc, segment| match acc {
            Value::Object(obj) => obj.get(segment),
            Value::Array(array) => array.get(parse_index(segment)?),
            _ => None,
        })
    }
}
