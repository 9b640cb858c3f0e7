use crate::{
    fixture_path, DirResourceStore, FixtureConfig, FixtureError, ResourceStore, Result,
    TestContext, DEFAULT_REQUEST,
};

/// Reads `json/<class>/<method>/<file>.json` from `store` as UTF-8 text.
pub fn load_fixture(
    store: &impl ResourceStore,
    class_name: &str,
    method_name: &str,
    file_name: &str,
) -> Result<String> {
    read_fixture(store, &fixture_path(class_name, method_name, file_name), false)
}

pub(crate) fn read_fixture(store: &impl ResourceStore, path: &str, trace: bool) -> Result<String> {
    tracing::debug!(path = %path, "reading fixture");

    let data = store
        .read(path)
        .map_err(|source| FixtureError::Io {
            path: path.to_string(),
            source,
        })?
        .ok_or_else(|| FixtureError::NotFound {
            path: path.to_string(),
        })?;
    let json = String::from_utf8(data).map_err(|source| FixtureError::InvalidEncoding {
        path: path.to_string(),
        source,
    })?;

    if trace {
        tracing::info!(path = %path, json = %json, "loaded fixture");
    }
    Ok(json)
}

/// Loads fixtures belonging to one test.
///
/// ```no_run
/// use jsonfixture::{FixtureLoader, TestContext};
///
/// let loader = FixtureLoader::new(TestContext::new("TestClass", "test"));
/// // json/TestClass/test/request.json
/// let request = loader.load()?;
/// # Ok::<(), jsonfixture::FixtureError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FixtureLoader<S = DirResourceStore> {
    store: S,
    context: TestContext,
    trace: bool,
}

impl FixtureLoader {
    /// Reads from the resource root of [`FixtureConfig::from_env`].
    pub fn new(context: TestContext) -> Self {
        Self::from_config(&FixtureConfig::from_env(), context)
    }

    pub fn from_config(config: &FixtureConfig, context: TestContext) -> Self {
        Self {
            store: DirResourceStore::new(&config.resource_root),
            context,
            trace: config.trace,
        }
    }

    /// Binds to the test running on the current thread.
    pub fn current() -> Result<Self> {
        Ok(Self::new(TestContext::current()?))
    }
}

impl<S: ResourceStore> FixtureLoader<S> {
    pub fn with_store(store: S, context: TestContext) -> Self {
        Self {
            store,
            context,
            trace: false,
        }
    }

    #[must_use]
    pub fn trace(self, trace: bool) -> Self {
        Self { trace, ..self }
    }

    #[inline]
    pub fn context(&self) -> &TestContext {
        &self.context
    }

    /// Loads the `request` fixture.
    pub fn load(&self) -> Result<String> {
        self.load_file(DEFAULT_REQUEST)
    }

    /// Loads `file_name`, given without the `.json` extension.
    pub fn load_file(&self, file_name: &str) -> Result<String> {
        read_fixture(
            &self.store,
            &self.context.fixture_path(file_name),
            self.trace,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryResourceStore;

    const REQUEST: &str = "{\n  \"string\" : \"test\",\n  \"number\" : 1,\n  \"boolean\" : true\n}";

    fn store() -> MemoryResourceStore {
        MemoryResourceStore::new()
            .with("json/TestClass/test/request.json", REQUEST)
            .with("json/TestClass/test/fileName.json", REQUEST)
            .with("json/TestClass/test/latin1.json", vec![b'"', 0xe9, b'"'])
    }

    #[test]
    fn load_default_file() {
        let loader = FixtureLoader::with_store(store(), TestContext::new("TestClass", "test"));
        assert_eq!(loader.load().unwrap(), REQUEST);
    }

    #[test]
    fn load_named_file() {
        let loader = FixtureLoader::with_store(store(), TestContext::new("TestClass", "test"));
        assert_eq!(loader.load_file("fileName").unwrap(), REQUEST);
    }

    #[test]
    fn missing_file_is_not_found() {
        let loader = FixtureLoader::with_store(store(), TestContext::new("TestClass", "test"));
        match loader.load_file("test123").unwrap_err() {
            FixtureError::NotFound { path } => assert_eq!(path, "json/TestClass/test/test123.json"),
            err => panic!("unexpected error: {:?}", err),
        }

        let loader = FixtureLoader::with_store(store(), TestContext::new("Other", "test"));
        assert!(matches!(
            loader.load().unwrap_err(),
            FixtureError::NotFound { .. }
        ));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = load_fixture(&store(), "TestClass", "test", "latin1").unwrap_err();
        assert!(matches!(err, FixtureError::InvalidEncoding { .. }));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = FixtureConfig::default().resource_root(dir.path());
        let loader = FixtureLoader::from_config(&config, TestContext::new("tests", "from_dir"));
        assert!(matches!(
            loader.load().unwrap_err(),
            FixtureError::NotFound { .. }
        ));

        std::fs::create_dir_all(dir.path().join("json/tests/from_dir")).unwrap();
        std::fs::write(dir.path().join("json/tests/from_dir/request.json"), "[]").unwrap();
        assert_eq!(loader.load().unwrap(), "[]");
    }
}
