//! Tests for theme loading, merging and the registry
//!
//! The theme is `base` with full-namespace overrides applied, then the
//! `extend` overlay unioned on top.

use serde_json::json;
use tokenwind::ConfigError;
use tokenwind::core::models::{ThemeConfig, ThemeLayer, TokenValue};
use tokenwind::core::services::{ThemeRegistry, load};

use crate::common::{extend, layer, raw};

fn base() -> ThemeLayer {
    layer(json!({
        "height": { "4": "1rem", "full": "100%" },
        "width": { "4": "1rem" },
        "colors": { "white": "#ffffff" }
    }))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn extend_adds_to_base_namespace() {
    let base = layer(json!({ "height": { "4": "1rem" } }));
    let theme = load(&base, &extend(json!({ "height": { "128": "36rem" } }))).unwrap();

    assert_eq!(theme.resolve("height", "128"), Some(&TokenValue::from("36rem")));
    assert_eq!(theme.resolve("height", "4"), Some(&TokenValue::from("1rem")));
}

#[test]
fn extend_creates_namespace_missing_from_base() {
    let theme = load(&base(), &extend(json!({ "fontFamily": { "h1": ["MagicSchoolTwo"] } })))
        .unwrap();

    assert_eq!(
        theme.resolve("fontFamily", "h1"),
        Some(&TokenValue::Stack(vec!["MagicSchoolTwo".to_string()]))
    );
}

#[test]
fn reference_config_extensions() {
    let theme = load(
        &base(),
        &extend(json!({
            "height": { "128": "36rem" },
            "width": { "128": "36rem" },
            "fontFamily": { "h1": ["MagicSchoolTwo"] }
        })),
    )
    .unwrap();

    assert_eq!(theme.resolve("height", "128"), theme.resolve("width", "128"));
    assert_eq!(theme.resolve("width", "4"), Some(&TokenValue::from("1rem")));
    assert_eq!(
        theme.namespaces().into_iter().collect::<Vec<_>>(),
        ["colors", "fontFamily", "height", "width"]
    );
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn empty_extend_yields_base() {
    let theme = load(&base(), &ThemeConfig::default()).unwrap();
    assert_eq!(theme.as_layer(), &base());
}

#[test]
fn empty_extend_namespace_passes_base_through() {
    let theme = load(&base(), &extend(json!({ "height": {} }))).unwrap();
    assert_eq!(theme.namespace("height"), base().namespace("height"));
}

#[test]
fn extend_wins_over_base() {
    let theme = load(&base(), &extend(json!({ "height": { "4": "2rem" } }))).unwrap();
    assert_eq!(theme.resolve("height", "4"), Some(&TokenValue::from("2rem")));
    assert_eq!(theme.resolve("height", "full"), Some(&TokenValue::from("100%")));
}

#[test]
fn load_is_idempotent() {
    let overlay = extend(json!({ "height": { "128": "36rem" }, "opacity": { "15": "0.15" } }));
    assert_eq!(load(&base(), &overlay).unwrap(), load(&base(), &overlay).unwrap());
}

#[test]
fn absent_lookups_are_none() {
    let theme = load(&base(), &ThemeConfig::default()).unwrap();
    assert!(theme.resolve("height", "999").is_none());
    assert!(theme.resolve("nope", "4").is_none());
    assert!(theme.resolve("", "").is_none());
}

// =============================================================================
// Overrides (namespaces outside `extend`)
// =============================================================================

#[test]
fn override_replaces_whole_namespace() {
    let theme_config = ThemeConfig {
        overrides: raw(json!({ "colors": { "brand": "#d97706" } })),
        ..ThemeConfig::default()
    };
    let theme = load(&base(), &theme_config).unwrap();

    assert!(theme.resolve("colors", "white").is_none());
    assert_eq!(theme.resolve("colors", "brand"), Some(&TokenValue::from("#d97706")));
    assert_eq!(theme.resolve("height", "4"), Some(&TokenValue::from("1rem")));
}

#[test]
fn extend_applies_on_top_of_override() {
    let theme_config = ThemeConfig {
        overrides: raw(json!({ "colors": { "brand": "#d97706" } })),
        extend: json!({ "colors": { "accent": "#f59e0b" } }),
    };
    let theme = load(&base(), &theme_config).unwrap();

    assert!(theme.resolve("colors", "brand").is_some());
    assert!(theme.resolve("colors", "accent").is_some());
    assert!(theme.resolve("colors", "white").is_none());
}

#[test]
fn theme_section_from_toml() {
    let theme_config: ThemeConfig = toml::from_str(
        r#"
        [extend.height]
        128 = "36rem"

        [zIndex]
        modal = "50"
        "#,
    )
    .unwrap();

    assert!(theme_config.extend.get("height").is_some());
    assert!(theme_config.overrides.contains_key("zIndex"));
    assert!(!theme_config.overrides.contains_key("extend"));
}

// =============================================================================
// Shape errors
// =============================================================================

#[test]
fn invalid_extend_namespace_is_rejected() {
    let err = load(&base(), &extend(json!({ "height": ["36rem"] }))).unwrap_err();
    match err {
        ConfigError::InvalidShape { namespace, .. } => assert_eq!(namespace, "height"),
        other => panic!("expected InvalidShape, got {other:?}"),
    }
}

#[test]
fn invalid_extend_entry_is_rejected() {
    let err = load(&base(), &extend(json!({ "width": { "128": 36 } }))).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidShape { .. }));
    assert!(err.to_string().contains("width"));
}

#[test]
fn extend_that_is_not_a_table_is_rejected() {
    for value in [json!(5), json!("36rem"), json!(["height"])] {
        let err = load(&base(), &extend(value)).unwrap_err();
        match err {
            ConfigError::InvalidShape { namespace, .. } => assert_eq!(namespace, "extend"),
            other => panic!("expected InvalidShape, got {other:?}"),
        }
    }
}

#[test]
fn null_extend_is_empty() {
    let theme_config = extend(serde_json::Value::Null);
    assert!(theme_config.is_empty());
    assert_eq!(
        load(&base(), &theme_config).unwrap(),
        load(&base(), &extend(json!({}))).unwrap()
    );
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn registry_resolves_and_lists() {
    let registry =
        ThemeRegistry::new(base(), extend(json!({ "height": { "128": "36rem" } }))).unwrap();

    assert_eq!(registry.resolve("height", "128"), Some(&TokenValue::from("36rem")));
    assert!(registry.namespaces().contains("colors"));
    assert_eq!(registry.base(), &base());
}

#[test]
fn registry_from_base_has_no_overlay() {
    let registry = ThemeRegistry::from_base(base());
    assert_eq!(registry.theme().as_layer(), &base());
    assert!(registry.config().is_empty());
}

#[test]
fn registry_reload_theme_recomputes() {
    let mut registry = ThemeRegistry::from_base(base());
    assert!(registry.resolve("height", "128").is_none());

    registry.reload_theme(extend(json!({ "height": { "128": "36rem" } }))).unwrap();
    assert_eq!(registry.resolve("height", "128"), Some(&TokenValue::from("36rem")));
}

#[test]
fn registry_failed_reload_keeps_previous_theme() {
    let mut registry =
        ThemeRegistry::new(base(), extend(json!({ "height": { "128": "36rem" } }))).unwrap();

    let result = registry.reload_theme(extend(json!({ "height": "broken" })));
    assert!(result.is_err());
    assert_eq!(registry.resolve("height", "128"), Some(&TokenValue::from("36rem")));
}

#[test]
fn registry_reload_base_keeps_overlay() {
    let mut registry =
        ThemeRegistry::new(base(), extend(json!({ "height": { "128": "36rem" } }))).unwrap();

    registry.reload_base(layer(json!({ "height": { "8": "2rem" } }))).unwrap();
    assert_eq!(registry.resolve("height", "8"), Some(&TokenValue::from("2rem")));
    assert_eq!(registry.resolve("height", "128"), Some(&TokenValue::from("36rem")));
    assert!(registry.resolve("height", "4").is_none());
}
