//! Lazy, failure-tolerant icon lookup.

mod diagnostics;

pub use diagnostics::{Diagnostics, TracingDiagnostics};

use indexmap::IndexMap;
use tracing::debug;

use crate::{loader::IconLoader, utils::asset_specifier};

/// Resolves icons one at a time through an injected [`IconLoader`].
///
/// Lookups never fail outward: any load error is handed to the
/// [`Diagnostics`] sink and the caller gets `None`, which it is expected to
/// handle, usually by showing a placeholder.
#[derive(Debug, Clone)]
pub struct IconResolver<L, D = TracingDiagnostics> {
    loader: L,
    diagnostics: D,
    base: String,
    aliases: IndexMap<String, String>,
    fallback: Option<String>,
}

impl<L: IconLoader> IconResolver<L> {
    pub fn new(loader: L) -> Self {
        IconResolver {
            loader,
            diagnostics: TracingDiagnostics,
            base: String::new(),
            aliases: IndexMap::new(),
            fallback: None,
        }
    }
}

impl<L: IconLoader, D: Diagnostics> IconResolver<L, D> {
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> IconResolver<L, E> {
        IconResolver {
            loader: self.loader,
            diagnostics,
            base: self.base,
            aliases: self.aliases,
            fallback: self.fallback,
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Specifier handed to the loader for `name`.
    pub fn specifier(&self, name: &str) -> String {
        let file = self.aliases.get(name).map_or(name, String::as_str);
        asset_specifier(&self.base, file)
    }

    pub async fn resolve(&self, name: &str) -> Option<L::Icon> {
        let specifier = self.specifier(name);

        match self.loader.load(&specifier).await {
            Ok(module) => {
                debug!(icon = name, specifier = %specifier, "resolved icon");
                Some(module.into_default())
            }
            Err(err) => {
                self.diagnostics.icon_missing(name, &err);
                None
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but tries the configured fallback
    /// icon when `name` is unavailable.
    pub async fn resolve_or_fallback(&self, name: &str) -> Option<L::Icon> {
        if let Some(icon) = self.resolve(name).await {
            return Some(icon);
        }

        match self.fallback.as_deref() {
            Some(fallback) if fallback != name => self.resolve(fallback).await,
            _ => None,
        }
    }
}
