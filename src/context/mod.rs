//! Enumerable asset sources consumed by the bulk importer.

mod dir;

pub use dir::DirContext;

/// Something that can list its entries and load each of them.
///
/// Keys are relative paths such as `./sunny.png`.
pub trait AssetContext {
    type Asset;
    type Error;

    fn keys(&self) -> Result<Vec<String>, Self::Error>;

    fn resolve(&self, key: &str) -> Result<Self::Asset, Self::Error>;
}
