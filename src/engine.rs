use json_patch::{DiffOptions, JsonDiff};
use serde_json::Value;

use crate::{FixtureError, JsonInput, Result, Side};

/// Parses two JSON texts and diffs them.
#[derive(Debug, Copy, Clone, Default)]
pub struct JsonDiffEngine {
    options: DiffOptions,
}

impl JsonDiffEngine {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> DiffOptions {
        self.options
    }

    /// Parses one side of a comparison.
    pub fn parse(&self, side: Side, text: &str) -> Result<Value> {
        serde_json::from_str(text).map_err(|source| FixtureError::Parse { side, source })
    }

    /// Operations turning `actual` into `expected`.
    pub fn diff(&self, actual: impl JsonInput, expected: impl JsonInput) -> Result<JsonDiff> {
        let (actual, expected) = self.parse_pair(&actual, &expected)?;
        Ok(self.diff_values(&actual, &expected))
    }

    pub fn diff_values(&self, actual: &Value, expected: &Value) -> JsonDiff {
        json_patch::diff(actual, expected, self.options)
    }

    pub fn equal(&self, actual: impl JsonInput, expected: impl JsonInput) -> Result<bool> {
        Ok(self.diff(actual, expected)?.is_empty())
    }

    pub(crate) fn parse_pair(
        &self,
        actual: &dyn JsonInput,
        expected: &dyn JsonInput,
    ) -> Result<(Value, Value)> {
        let (actual, expected) = match (actual.json_text(), expected.json_text()) {
            (Some(actual), Some(expected)) => (actual, expected),
            (None, _) => return Err(FixtureError::invalid_argument("actual json is null")),
            (_, None) => return Err(FixtureError::invalid_argument("expected json is null")),
        };

        Ok((
            self.parse(Side::Actual, actual)?,
            self.parse(Side::Expected, expected)?,
        ))
    }
}

/// [`JsonDiffEngine::diff`] with default options.
pub fn diff(actual: impl JsonInput, expected: impl JsonInput) -> Result<JsonDiff> {
    JsonDiffEngine::default().diff(actual, expected)
}

/// [`JsonDiffEngine::equal`] with default options.
pub fn equal(actual: impl JsonInput, expected: impl JsonInput) -> Result<bool> {
    JsonDiffEngine::default().equal(actual, expected)
}
