use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

/// Read-only source of fixture files addressed by `/`-separated relative paths.
pub trait ResourceStore {
    /// Returns `Ok(None)` when nothing exists at `path`.
    fn read(&self, path: &str) -> io::Result<Option<Vec<u8>>>;
}

impl<T: ResourceStore + ?Sized> ResourceStore for &T {
    fn read(&self, path: &str) -> io::Result<Option<Vec<u8>>> {
        (**self).read(path)
    }
}

/// Fixtures stored under a directory on disk.
#[derive(Debug, Clone)]
pub struct DirResourceStore {
    root: PathBuf,
}

impl DirResourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }
}

impl ResourceStore for DirResourceStore {
    fn read(&self, path: &str) -> io::Result<Option<Vec<u8>>> {
        let file_path = self.resolve(path);
        match std::fs::read(&file_path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Fixtures held in memory, e.g. embedded with `include_str!`.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceStore {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), data.into());
    }

    #[must_use]
    pub fn with(mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }
}

impl ResourceStore for MemoryResourceStore {
    fn read(&self, path: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.files.get(path).cloned())
    }
}
