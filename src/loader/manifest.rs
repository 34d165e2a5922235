use std::{collections::HashMap, fs, path::Path};

use serde_json::Value;

use super::IconLoader;
use crate::{
    error::{AssetError, Result},
    model::Module,
};

/// Module values keyed by specifier, as emitted by an asset bundler.
///
/// ```json
/// { "cloudy.svg": { "default": "/static/cloudy.5f2a.svg" }, "sunny.svg": "/static/sunny.svg" }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManifestLoader {
    modules: HashMap<String, Value>,
}

impl ManifestLoader {
    pub fn new(modules: HashMap<String, Value>) -> Self {
        ManifestLoader { modules }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(content)?))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| AssetError::io(path, err))?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl IconLoader for ManifestLoader {
    type Icon = Value;

    async fn load(&self, specifier: &str) -> Result<Module<Value>> {
        self.modules
            .get(specifier)
            .cloned()
            .map(Module::from_value)
            .ok_or_else(|| AssetError::NotFound(specifier.to_string()))
    }
}
