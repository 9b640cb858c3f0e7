//! RFC 6902 patch operations and a structural diff between two JSON trees.

mod diff;
mod json_diff;
mod options;

pub use diff::diff;
pub use json_diff::JsonDiff;
pub use options::{DiffOptions, NumberMode};

use json_pointer::JsonPointer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum JsonPatch {
    Add {
        path: JsonPointer,
        value: Value,
    },
    Remove {
        path: JsonPointer,
    },
    Replace {
        path: JsonPointer,
        value: Value,
    },
    Move {
        from: JsonPointer,
        path: JsonPointer,
    },
    Copy {
        from: JsonPointer,
        path: JsonPointer,
    },
    Test {
        path: JsonPointer,
        value: Value,
    },
}

impl JsonPatch {
    /// The location this operation targets.
    pub fn path(&self) -> &JsonPointer {
        match self {
            JsonPatch::Add { path, .. }
            | JsonPatch::Remove { path }
            | JsonPatch::Replace { path, .. }
            | JsonPatch::Move { path, .. }
            | JsonPatch::Copy { path, .. }
            | JsonPatch::Test { path, .. } => path,
        }
    }
}
