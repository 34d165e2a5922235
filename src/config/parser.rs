use crate::error::{AssetError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub(crate) const DEFAULT_EXTENSIONS: [&str; 6] = ["png", "svg", "jpg", "jpeg", "gif", "webp"];

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconConfig {
    pub dir: PathBuf,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub fallback: Option<String>,
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
}

impl IconConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        IconConfig {
            dir: dir.into(),
            recursive: false,
            extensions: default_extensions(),
            base: String::new(),
            fallback: None,
            aliases: IndexMap::new(),
        }
    }
}

pub(crate) fn parse_str(content: &str) -> Result<IconConfig> {
    Ok(toml::from_str(content)?)
}

/// Read `icons.toml`; a relative `dir` is taken relative to the file.
pub(crate) fn parse_config(path: &Path) -> Result<IconConfig> {
    let content = fs::read_to_string(path).map_err(|err| AssetError::io(path, err))?;
    let mut config = parse_str(&content)?;

    if config.dir.is_relative()
        && let Some(parent) = path.parent()
    {
        config.dir = parent.join(&config.dir);
    }

    Ok(config)
}
