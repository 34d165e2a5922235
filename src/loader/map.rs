use super::IconLoader;
use crate::{
    error::{AssetError, Result},
    import::IconMap,
    model::Module,
};

/// An imported icon map can stand in for lazy loading.
impl<T> IconLoader for IconMap<T>
where
    T: Clone + Send + Sync,
{
    type Icon = T;

    async fn load(&self, specifier: &str) -> Result<Module<T>> {
        self.get(specifier)
            .cloned()
            .map(Module::Plain)
            .ok_or_else(|| AssetError::NotFound(specifier.to_string()))
    }
}
