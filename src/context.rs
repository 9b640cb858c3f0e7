use crate::{FixtureError, Result};

/// The test a loader or verifier is bound to.
///
/// Each test should build its own context; sharing one across tests running in
/// parallel mixes up their fixture directories.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TestContext {
    class_name: String,
    method_name: String,
}

impl TestContext {
    pub fn new(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
        }
    }

    /// Splits a libtest path such as `crate::api::tests::creates_user` into the
    /// enclosing module (`tests`) and the function name (`creates_user`).
    pub fn from_test_path(test_path: &str) -> Option<Self> {
        let (module, method) = test_path.rsplit_once("::")?;
        let class = module.rsplit("::").next().unwrap_or(module);
        if class.is_empty() || method.is_empty() {
            return None;
        }
        Some(Self::new(class, method))
    }

    /// Derives the context from the name libtest gives the thread running the test.
    ///
    /// Fails for unnamed threads and for top-level functions of integration test
    /// files, whose names carry no module; use [`TestContext::new`] there.
    pub fn current() -> Result<Self> {
        let thread = std::thread::current();
        let name = thread.name().unwrap_or_default();
        Self::from_test_path(name).ok_or_else(|| FixtureError::UnknownTestContext {
            thread: name.to_string(),
        })
    }

    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    #[inline]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn fixture_path(&self, file_name: &str) -> String {
        crate::fixture_path(&self.class_name, &self.method_name, file_name)
    }
}
