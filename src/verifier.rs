use serde_json::Value;

use crate::{
    fixture_path, loader::read_fixture, DirResourceStore, FixtureConfig, FixtureError,
    JsonDiffEngine, JsonInput, ResourceStore, Result, Side, TestContext, DEFAULT_RESPONSE,
};

/// Compares `actual` with the fixture `json/<class>/<method>/<file>.json` in `store`.
pub fn assert_json_equal(
    store: &impl ResourceStore,
    actual: impl JsonInput,
    class_name: &str,
    method_name: &str,
    file_name: &str,
) -> Result<()> {
    verify(
        store,
        JsonDiffEngine::default(),
        &actual,
        &fixture_path(class_name, method_name, file_name),
        false,
    )
}

fn verify(
    store: &impl ResourceStore,
    engine: JsonDiffEngine,
    actual: &dyn JsonInput,
    path: &str,
    trace: bool,
) -> Result<()> {
    let actual_json = actual
        .json_text()
        .ok_or_else(|| FixtureError::invalid_argument("actual json is null"))?;
    let expected_json = read_fixture(store, path, false)?;

    let (actual, expected) = engine.parse_pair(&actual_json, &expected_json)?;

    if trace {
        tracing::info!(path = %path, json = %expected_json, "expected json");
        tracing::info!(json = %actual_json, "actual json");
    }

    let diff = engine.diff_values(&actual, &expected);
    if diff.is_empty() {
        return Ok(());
    }

    tracing::debug!(path = %path, operations = diff.len(), "json documents differ");
    Err(FixtureError::AssertionFailure {
        path: path.to_string(),
        explanation: diff.explain(&actual),
        diff,
    })
}

/// Checks JSON produced by a test against the fixtures of that test.
///
/// ```no_run
/// use jsonfixture::{JsonVerifier, TestContext};
///
/// let verifier = JsonVerifier::new(TestContext::new("TestClass", "test"));
/// // compared with json/TestClass/test/response.json
/// verifier.assert_json(r#"{"status":"ok"}"#)?;
/// # Ok::<(), jsonfixture::FixtureError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonVerifier<S = DirResourceStore> {
    store: S,
    context: TestContext,
    engine: JsonDiffEngine,
    trace: bool,
}

impl JsonVerifier {
    /// Uses [`FixtureConfig::from_env`].
    pub fn new(context: TestContext) -> Self {
        Self::from_config(&FixtureConfig::from_env(), context)
    }

    pub fn from_config(config: &FixtureConfig, context: TestContext) -> Self {
        Self {
            store: DirResourceStore::new(&config.resource_root),
            context,
            engine: JsonDiffEngine::new(config.options),
            trace: config.trace,
        }
    }

    /// Binds to the test running on the current thread.
    pub fn current() -> Result<Self> {
        Ok(Self::new(TestContext::current()?))
    }
}

impl<S: ResourceStore> JsonVerifier<S> {
    pub fn with_store(store: S, context: TestContext) -> Self {
        Self {
            store,
            context,
            engine: JsonDiffEngine::default(),
            trace: false,
        }
    }

    #[must_use]
    pub fn engine(self, engine: JsonDiffEngine) -> Self {
        Self { engine, ..self }
    }

    #[must_use]
    pub fn trace(self, trace: bool) -> Self {
        Self { trace, ..self }
    }

    #[inline]
    pub fn context(&self) -> &TestContext {
        &self.context
    }

    /// Compares against the `response` fixture.
    pub fn assert_json(&self, actual: impl JsonInput) -> Result<()> {
        self.assert_json_file(actual, DEFAULT_RESPONSE)
    }

    /// Compares against `file_name`, given without the `.json` extension.
    pub fn assert_json_file(&self, actual: impl JsonInput, file_name: &str) -> Result<()> {
        verify(
            &self.store,
            self.engine,
            &actual,
            &self.context.fixture_path(file_name),
            self.trace,
        )
    }

    /// Compares an already parsed document.
    pub fn assert_value(&self, actual: &Value, file_name: &str) -> Result<()> {
        let text = serde_json::to_string(actual).map_err(|source| FixtureError::Parse {
            side: Side::Actual,
            source,
        })?;
        self.assert_json_file(text, file_name)
    }
}
