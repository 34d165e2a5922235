use tracing::error;

use crate::error::AssetError;

/// Receives icon lookups that could not be satisfied.
pub trait Diagnostics {
    fn icon_missing(&self, name: &str, cause: &AssetError);
}

/// Reports through `tracing` at error level.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn icon_missing(&self, name: &str, cause: &AssetError) {
        error!(icon = name, error = %cause, "icon not found");
    }
}

impl<F> Diagnostics for F
where
    F: Fn(&str, &AssetError),
{
    fn icon_missing(&self, name: &str, cause: &AssetError) {
        self(name, cause)
    }
}
