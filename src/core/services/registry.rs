//! Theme registry - owns the theme layers and the cached merge
//!
//! The registry keeps `base` and the `theme` section separate so either
//! can be swapped on its own. The [`ResolvedTheme`] is computed on
//! construction and recomputed only by [`ThemeRegistry::reload_base`] or
//! [`ThemeRegistry::reload_theme`].

use std::collections::BTreeSet;

use log::debug;

use super::merge::load;
use crate::core::error::ConfigError;
use crate::core::models::{ResolvedTheme, ThemeConfig, ThemeLayer, TokenValue};

/// Base tokens, user overlay, and their merged result
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    base: ThemeLayer,
    theme: ThemeConfig,
    resolved: ResolvedTheme,
}

impl ThemeRegistry {
    /// Build a registry, validating and merging `theme` over `base`
    pub fn new(base: ThemeLayer, theme: ThemeConfig) -> Result<Self, ConfigError> {
        let resolved = load(&base, &theme)?;
        debug!("theme resolved with {} namespaces", resolved.namespaces().len());
        Ok(Self {
            base,
            theme,
            resolved,
        })
    }

    /// A registry with no user overlay
    #[must_use]
    pub fn from_base(base: ThemeLayer) -> Self {
        let resolved = ResolvedTheme::from(base.clone());
        Self {
            base,
            theme: ThemeConfig::default(),
            resolved,
        }
    }

    /// The cached merged theme
    #[must_use]
    pub const fn theme(&self) -> &ResolvedTheme {
        &self.resolved
    }

    /// The base layer
    #[must_use]
    pub const fn base(&self) -> &ThemeLayer {
        &self.base
    }

    /// The user overlay as configured
    #[must_use]
    pub const fn config(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Resolve a `(namespace, key)` pair
    #[must_use]
    pub fn resolve(&self, namespace: &str, key: &str) -> Option<&TokenValue> {
        self.resolved.resolve(namespace, key)
    }

    /// All namespaces after the merge
    #[must_use]
    pub fn namespaces(&self) -> BTreeSet<&str> {
        self.resolved.namespaces()
    }

    /// Swap in a new base layer and recompute
    ///
    /// On error the registry is left unchanged.
    pub fn reload_base(&mut self, base: ThemeLayer) -> Result<(), ConfigError> {
        self.resolved = load(&base, &self.theme)?;
        self.base = base;
        Ok(())
    }

    /// Swap in a new `theme` section and recompute
    ///
    /// On error the registry is left unchanged.
    pub fn reload_theme(&mut self, theme: ThemeConfig) -> Result<(), ConfigError> {
        self.resolved = load(&self.base, &theme)?;
        self.theme = theme;
        Ok(())
    }
}
