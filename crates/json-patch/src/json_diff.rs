use std::fmt::{self, Display, Formatter, Write};

use json_pointer::ValueExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::JsonPatch;

/// An ordered list of patch operations; empty means the documents are equal.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonDiff(Vec<JsonPatch>);

impl JsonDiff {
    pub fn new(operations: Vec<JsonPatch>) -> Self {
        Self(operations)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JsonPatch> {
        self.0.iter()
    }

    #[inline]
    pub fn operations(&self) -> &[JsonPatch] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<JsonPatch> {
        self.0
    }

    /// One line per operation, showing what `actual` held at each path.
    pub fn explain(&self, actual: &Value) -> String {
        let mut out = String::new();
        // writing into a `String` cannot fail
        self.write_explanation(&mut out, actual).ok();
        out
    }

    fn write_explanation(&self, out: &mut impl Write, actual: &Value) -> fmt::Result {
        for op in &self.0 {
            let path = op.path();
            match (op, actual.locate(path)) {
                (JsonPatch::Add { value, .. }, _) => {
                    writeln!(out, "  {}: missing, expected {}", display_path(path), value)?
                }
                (JsonPatch::Remove { .. }, Some(found)) => {
                    writeln!(out, "  {}: unexpected {}", display_path(path), found)?
                }
                (JsonPatch::Replace { value, .. }, Some(found)) => writeln!(
                    out,
                    "  {}: expected {}, found {}",
                    display_path(path),
                    value,
                    found
                )?,
                (op, _) => {
                    let op = serde_json::to_string(op).map_err(|_| fmt::Error)?;
                    writeln!(out, "  {}: {}", display_path(path), op)?
                }
            }
        }
        Ok(())
    }
}

fn display_path(path: &json_pointer::JsonPointer) -> String {
    if path.is_root() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

impl Display for JsonDiff {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl IntoIterator for JsonDiff {
    type Item = JsonPatch;
    type IntoIter = std::vec::IntoIter<JsonPatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonDiff {
    type Item = &'a JsonPatch;
    type IntoIter = std::slice::Iter<'a, JsonPatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
