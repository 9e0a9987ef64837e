//! Resolved theme: the effective tokens after merging all layers

use std::collections::BTreeSet;

use super::token::{Namespace, ThemeLayer, TokenValue};

/// Effective theme produced by merging base, overrides and extend
///
/// Immutable once built. A lookup is two hash-map gets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTheme {
    tokens: ThemeLayer,
}

impl ResolvedTheme {
    /// Resolve a `(namespace, key)` pair; `None` means not found
    #[must_use]
    pub fn resolve(&self, namespace: &str, key: &str) -> Option<&TokenValue> {
        self.tokens.get(namespace, key)
    }

    /// All namespaces present after the merge, sorted
    #[must_use]
    pub fn namespaces(&self) -> BTreeSet<&str> {
        self.tokens.iter().map(|(name, _)| name).collect()
    }

    /// Entries of one namespace
    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.tokens.namespace(name)
    }

    /// The merged tokens as a plain layer
    #[must_use]
    pub const fn as_layer(&self) -> &ThemeLayer {
        &self.tokens
    }
}

impl From<ThemeLayer> for ResolvedTheme {
    fn from(tokens: ThemeLayer) -> Self {
        Self { tokens }
    }
}
