use std::fmt;

use json_patch::DiffOptions;
use predicates::{
    reflection::{Case, Parameter, PredicateReflection, Product},
    Predicate,
};

use crate::{JsonDiffEngine, JsonInput, Result};

/// Predicate matching JSON text semantically equal to an expected document.
///
/// ```
/// use jsonfixture::json_equals;
/// use predicates::Predicate;
///
/// let matcher = json_equals(r#"{"a": 1, "b": [true]}"#);
/// assert!(matcher.eval(r#"{"b": [true], "a": 1.0}"#));
/// assert!(!matcher.eval(r#"{"a": 1}"#));
/// ```
#[derive(Debug, Clone)]
pub struct JsonMatcher {
    expected: String,
    engine: JsonDiffEngine,
}

pub fn json_equals(expected: impl Into<String>) -> JsonMatcher {
    json_equals_with(expected, DiffOptions::default())
}

/// Like [`json_equals`], comparing with custom options.
pub fn json_equals_with(expected: impl Into<String>, options: DiffOptions) -> JsonMatcher {
    JsonMatcher {
        expected: expected.into(),
        engine: JsonDiffEngine::new(options),
    }
}

impl JsonMatcher {
    /// Fails on a null or malformed document instead of answering `false`.
    pub fn matches(&self, actual: impl JsonInput) -> Result<bool> {
        self.engine.equal(actual, self.expected.as_str())
    }

    /// The expected JSON text.
    #[inline]
    pub fn describe(&self) -> &str {
        &self.expected
    }
}

impl fmt::Display for JsonMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "json equal to {}", self.expected)
    }
}

impl PredicateReflection for JsonMatcher {
    fn parameters<'a>(&'a self) -> Box<dyn Iterator<Item = Parameter<'a>> + 'a> {
        let params = vec![Parameter::new("expected", &self.expected)];
        Box::new(params.into_iter())
    }
}

impl Predicate<str> for JsonMatcher {
    fn eval(&self, variable: &str) -> bool {
        self.matches(variable).unwrap_or(false)
    }

    fn find_case<'a>(&'a self, expected: bool, variable: &str) -> Option<Case<'a>> {
        let product = match self.engine.diff(variable, self.expected.as_str()) {
            Ok(diff) if diff.is_empty() == expected => Product::new("diff", diff.to_string()),
            Ok(_) => return None,
            Err(err) if !expected => Product::new("error", err.to_string()),
            Err(_) => return None,
        };
        Some(Case::new(Some(self), expected).add_product(product))
    }
}
