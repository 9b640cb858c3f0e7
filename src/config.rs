use std::path::PathBuf;

use json_patch::{DiffOptions, NumberMode};
use serde::{Deserialize, Serialize};

pub const ROOT_ENV: &str = "JSONFIXTURE_ROOT";
pub const TRACE_ENV: &str = "JSONFIXTURE_TRACE";

const DEFAULT_RESOURCE_ROOT: &str = "tests/resources";

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub(crate) resource_root: PathBuf,
    pub(crate) trace: bool,
    pub(crate) options: DiffOptions,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            resource_root: PathBuf::from(DEFAULT_RESOURCE_ROOT),
            trace: false,
            options: DiffOptions::default(),
        }
    }
}

impl FixtureConfig {
    #[must_use]
    pub fn resource_root(self, path: impl Into<PathBuf>) -> Self {
        Self {
            resource_root: path.into(),
            ..self
        }
    }

    /// Logs the full expected and actual documents at info level.
    #[must_use]
    pub fn trace(self, trace: bool) -> Self {
        Self { trace, ..self }
    }

    #[must_use]
    pub fn options(self, options: DiffOptions) -> Self {
        Self { options, ..self }
    }

    #[must_use]
    pub fn numbers(self, numbers: NumberMode) -> Self {
        Self {
            options: self.options.numbers(numbers),
            ..self
        }
    }

    /// Defaults overridden by `JSONFIXTURE_ROOT` and `JSONFIXTURE_TRACE`.
    pub fn from_env() -> Self {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    fn apply_env(self, var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = self;
        if let Some(root) = var(ROOT_ENV).filter(|root| !root.is_empty()) {
            config.resource_root = PathBuf::from(root);
        }
        if let Some(trace) = var(TRACE_ENV) {
            config.trace = matches!(trace.trim(), "1" | "true" | "yes" | "on");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let config = FixtureConfig::default()
            .resource_root("fixtures")
            .trace(true)
            .numbers(NumberMode::Strict);
        assert_eq!(config.resource_root, PathBuf::from("fixtures"));
        assert!(config.trace);
        assert_eq!(config.options, DiffOptions::strict());
    }

    #[test]
    fn env_overrides() {
        let config = FixtureConfig::default().apply_env(|key| match key {
            ROOT_ENV => Some("/srv/fixtures".to_string()),
            TRACE_ENV => Some("true".to_string()),
            _ => None,
        });
        assert_eq!(config.resource_root, PathBuf::from("/srv/fixtures"));
        assert!(config.trace);

        let config = FixtureConfig::default().apply_env(|key| match key {
            ROOT_ENV => Some(String::new()),
            TRACE_ENV => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config, FixtureConfig::default());
    }

    #[test]
    fn deserialize() {
        let config: FixtureConfig =
            serde_json::from_str(r#"{"trace":true,"options":{"numbers":"strict"}}"#).unwrap();
        assert_eq!(
            config,
            FixtureConfig::default()
                .trace(true)
                .options(DiffOptions::strict())
        );
    }
}
