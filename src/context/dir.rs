use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::AssetContext;
use crate::{
    config::DEFAULT_EXTENSIONS,
    error::{AssetError, Result},
    model::Asset,
    utils::{relative_key, safe_join, strip_relative_prefix},
};

/// A directory of icon files, filtered by extension.
#[derive(Debug, Clone)]
pub struct DirContext {
    root: PathBuf,
    recursive: bool,
    extensions: Vec<String>,
}

impl DirContext {
    pub fn new(root: impl AsRef<Path>) -> Self {
        DirContext {
            root: root.as_ref().to_path_buf(),
            recursive: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| *allowed == ext))
    }
}

impl AssetContext for DirContext {
    type Asset = Asset;
    type Error = AssetError;

    fn keys(&self) -> Result<Vec<String>> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut keys = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(max_depth) {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(&self.root).to_path_buf();
                match err.into_io_error() {
                    Some(source) => AssetError::io(path, source),
                    None => AssetError::InvalidName(path.display().to_string()),
                }
            })?;

            if !entry.file_type().is_file() || !self.accepts(entry.path()) {
                continue;
            }

            match relative_key(&self.root, entry.path()) {
                Some(key) => keys.push(key),
                None => warn!(path = %entry.path().display(), "skipping icon with non UTF-8 name"),
            }
        }

        keys.sort();
        debug!(root = %self.root.display(), count = keys.len(), "listed icon directory");
        Ok(keys)
    }

    fn resolve(&self, key: &str) -> Result<Asset> {
        let name = strip_relative_prefix(key);
        let path =
            safe_join(&self.root, name).ok_or_else(|| AssetError::InvalidName(key.to_string()))?;

        let bytes = fs::read(&path).map_err(|err| AssetError::io(&path, err))?;
        Ok(Asset::new(name, path, bytes))
    }
}
