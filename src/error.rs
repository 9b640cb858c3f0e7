use std::fmt;

use json_patch::JsonDiff;

pub type Result<T, E = FixtureError> = std::result::Result<T, E>;

/// Which document of a comparison an error refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Side {
    Actual,
    Expected,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Actual => "actual",
            Side::Expected => "expected",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to parse {side} json: {source}")]
    Parse {
        side: Side,
        #[source]
        source: serde_json::Error,
    },
    #[error("fixture not found: {path}")]
    NotFound { path: String },
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("json documents are not equal ({path}): {diff}\n{explanation}")]
    AssertionFailure {
        path: String,
        diff: JsonDiff,
        explanation: String,
    },
    #[error("fixture is not valid utf-8: {path}")]
    InvalidEncoding {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot derive a test context from thread `{thread}`")]
    UnknownTestContext { thread: String },
}

impl FixtureError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        FixtureError::InvalidArgument {
            message: message.into(),
        }
    }

    /// The diff carried by an assertion failure.
    pub fn diff(&self) -> Option<&JsonDiff> {
        match self {
            FixtureError::AssertionFailure { diff, .. } => Some(diff),
            _ => None,
        }
    }
}
