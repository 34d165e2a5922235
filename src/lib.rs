mod config;
mod context;
mod error;
mod import;
mod loader;
mod model;
mod resolver;
mod utils;

pub use config::IconConfig;
pub use context::{AssetContext, DirContext};
pub use error::{AssetError, Result};
pub use import::{IconMap, import_all};
pub use loader::{FsLoader, IconLoader, ManifestLoader};
pub use model::{Asset, MediaType, Module};
pub use resolver::{Diagnostics, IconResolver, TracingDiagnostics};

use crate::config::parse_config;
use std::path::Path;
use tracing::info;

/// A directory of icons plus the settings used to look them up.
#[derive(Debug, Clone)]
pub struct IconSet {
    config: IconConfig,
}

impl IconSet {
    pub fn builder(dir: impl AsRef<Path>) -> IconSet {
        IconSet {
            config: IconConfig::new(dir.as_ref()),
        }
    }

    /// Load settings from an `icons.toml` file.
    pub fn from_config(path: impl AsRef<Path>) -> Result<IconSet> {
        let config = parse_config(path.as_ref())?;
        Ok(IconSet { config })
    }

    pub fn set_recursive(&mut self, recursive: bool) -> &mut Self {
        self.config.recursive = recursive;
        self
    }

    pub fn set_extensions<I, S>(&mut self, extensions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_base(&mut self, base: impl Into<String>) -> &mut Self {
        self.config.base = base.into();
        self
    }

    pub fn set_fallback(&mut self, fallback: impl Into<String>) -> &mut Self {
        self.config.fallback = Some(fallback.into());
        self
    }

    pub fn set_alias(&mut self, name: impl Into<String>, file: impl Into<String>) -> &mut Self {
        self.config.aliases.insert(name.into(), file.into());
        self
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    pub fn context(&self) -> DirContext {
        DirContext::new(&self.config.dir)
            .recursive(self.config.recursive)
            .extensions(&self.config.extensions)
    }

    pub fn import_all(&self) -> Result<IconMap<Asset>> {
        let icons = import_all(&self.context())?;
        info!(dir = %self.config.dir.display(), count = icons.len(), "icon set imported");
        Ok(icons)
    }

    pub fn resolver(&self) -> IconResolver<FsLoader> {
        let mut resolver = IconResolver::new(FsLoader::new(&self.config.dir))
            .with_base(self.config.base.clone())
            .with_aliases(self.config.aliases.clone());

        if let Some(fallback) = &self.config.fallback {
            resolver = resolver.with_fallback(fallback.clone());
        }

        resolver
    }
}
