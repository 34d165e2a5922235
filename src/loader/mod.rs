//! On-demand loading of a single icon by specifier.

mod fs;
mod manifest;
mod map;

pub use fs::FsLoader;
pub use manifest::ManifestLoader;

use crate::{error::Result, model::Module};

/// Loads one module-like value for a `/`-separated specifier.
pub trait IconLoader {
    type Icon;

    fn load(&self, specifier: &str) -> impl Future<Output = Result<Module<Self::Icon>>> + Send;
}
