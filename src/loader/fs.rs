use std::path::{Path, PathBuf};

use tracing::debug;

use super::IconLoader;
use crate::{
    error::{AssetError, Result},
    model::{Asset, Module},
    utils::safe_join,
};

/// Reads icons from below a root directory.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        FsLoader {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl IconLoader for FsLoader {
    type Icon = Asset;

    async fn load(&self, specifier: &str) -> Result<Module<Asset>> {
        let path = safe_join(&self.root, specifier)
            .ok_or_else(|| AssetError::InvalidName(specifier.to_string()))?;

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|err| AssetError::io(&path, err))?;

        debug!(path = %path.display(), size = bytes.len(), "loaded icon");
        Ok(Module::Plain(Asset::new(specifier, path, bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_names_with_spaces_verbatim() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join(" sunny.png"), b"spaced").unwrap();
        std::fs::write(temp.path().join("sunny.png"), b"plain").unwrap();

        let asset = FsLoader::new(temp.path())
            .load(" sunny.png")
            .await
            .unwrap()
            .into_default();
        assert_eq!(&*asset.bytes, b"spaced");
    }

    #[tokio::test]
    async fn loads_file_under_root() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("weather")).unwrap();
        std::fs::write(temp.path().join("weather/cloudy.svg"), b"<svg/>").unwrap();

        let module = FsLoader::new(temp.path()).load("weather/cloudy.svg").await.unwrap();
        assert!(!module.has_default());

        let asset = module.into_default();
        assert_eq!(asset.name, "weather/cloudy.svg");
        assert_eq!(&*asset.bytes, b"<svg/>");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let err = FsLoader::new(temp.path()).load("hail.png").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn refuses_to_leave_root() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("etc")).unwrap();
        std::fs::write(temp.path().join("etc/passwd"), b"inside root").unwrap();
        let loader = FsLoader::new(temp.path());

        for specifier in ["../etc/passwd", "/etc/passwd", "", "a/../../b"] {
            let err = loader.load(specifier).await.unwrap_err();
            assert!(matches!(err, AssetError::InvalidName(_)), "{specifier}");
        }
    }
}
