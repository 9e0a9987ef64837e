//! Theme merging
//!
//! Each namespace is resolved independently:
//!
//! 1. start from `base`;
//! 2. a namespace in `overrides` replaces the base namespace wholesale;
//! 3. a namespace in `extend` is unioned onto the result, extend winning
//!    on key collisions. An empty extend namespace changes nothing.
//!
//! `extend` never removes an entry.

use log::debug;

use crate::core::error::ConfigError;
use crate::core::models::{ResolvedTheme, ThemeConfig, ThemeLayer};

/// Validate the `theme` section and merge it over `base`
///
/// Fails with [`ConfigError::InvalidShape`] if any override or extend
/// namespace is malformed. Nothing is merged in that case.
pub fn load(base: &ThemeLayer, theme: &ThemeConfig) -> Result<ResolvedTheme, ConfigError> {
    let overrides = ThemeLayer::from_raw(&theme.overrides)?;
    let extend = ThemeLayer::from_extend(&theme.extend)?;
    Ok(merge(base, &overrides, &extend))
}

/// Merge already-validated layers
#[must_use]
pub fn merge(base: &ThemeLayer, overrides: &ThemeLayer, extend: &ThemeLayer) -> ResolvedTheme {
    let mut tokens = base.clone();

    for (name, namespace) in overrides.iter() {
        debug!("theme namespace `{name}` replaced ({} entries)", namespace.len());
        tokens.insert_namespace(name, namespace.clone());
    }

    for (name, namespace) in extend.iter() {
        if namespace.is_empty() {
            continue;
        }
        debug!("theme namespace `{name}` extended with {} entries", namespace.len());
        tokens
            .namespace_mut(name)
            .extend(namespace.iter().map(|(key, value)| (key.clone(), value.clone())));
    }

    ResolvedTheme::from(tokens)
}
