//! Design tokens and theme layers
//!
//! A [`ThemeLayer`] maps a namespace (`height`, `fontFamily`, ...) to its
//! entries. Layers read from configuration arrive untyped as a [`RawLayer`]
//! and are validated with [`ThemeLayer::from_raw`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::core::error::ConfigError;

/// Unvalidated layer as read from a config file: namespace -> anything
pub type RawLayer = BTreeMap<String, Value>;

/// Entries of one namespace: key -> value
pub type Namespace = HashMap<String, TokenValue>;

/// Key that a nested mapping uses for its own value
///
/// `{ amber: { DEFAULT: "#f59e0b", 600: "#d97706" } }` flattens to
/// `amber` and `amber-600`.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Value of a single design token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A plain value: `"36rem"`, `"#d97706"`
    Single(String),
    /// An ordered list of values, e.g. a font fallback stack
    Stack(Vec<String>),
}

impl TokenValue {
    /// The value if this is a [`Single`](Self::Single)
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Stack(_) => None,
        }
    }

    /// All values in order (one element for a single value)
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::Stack(stack) => stack,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(s) => f.write_str(s),
            Self::Stack(stack) => f.write_str(&stack.join(", ")),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for TokenValue {
    fn from(stack: Vec<String>) -> Self {
        Self::Stack(stack)
    }
}

impl From<&[&str]> for TokenValue {
    fn from(stack: &[&str]) -> Self {
        Self::Stack(stack.iter().map(ToString::to_string).collect())
    }
}

/// A set of namespaced design tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeLayer {
    namespaces: HashMap<String, Namespace>,
}

impl ThemeLayer {
    /// Create an empty layer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw layer read from configuration
    ///
    /// Every namespace must be a mapping. Entries must be strings or lists
    /// of strings; nested mappings are flattened with `-`, and a nested
    /// `DEFAULT` key stands for its parent.
    pub fn from_raw(raw: &RawLayer) -> Result<Self, ConfigError> {
        let mut layer = Self::new();

        for (name, value) in raw {
            let Value::Object(entries) = value else {
                return Err(ConfigError::invalid_shape(
                    name,
                    format!("expected a mapping of tokens, found {}", describe(value)),
                ));
            };

            let mut namespace = Namespace::with_capacity(entries.len());
            for (key, entry) in entries {
                flatten_entry(name, key, entry, &mut namespace)?;
            }
            layer.namespaces.insert(name.clone(), namespace);
        }

        Ok(layer)
    }

    /// Validate the `theme.extend` value
    ///
    /// It must be a table of namespaces (validated as in
    /// [`from_raw`](Self::from_raw)); null stands for no extension.
    pub fn from_extend(value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(namespaces) => {
                let raw: RawLayer =
                    namespaces.iter().map(|(name, v)| (name.clone(), v.clone())).collect();
                Self::from_raw(&raw)
            },
            other => Err(ConfigError::invalid_shape(
                "extend",
                format!("expected a table of namespaces, found {}", describe(other)),
            )),
        }
    }

    /// Builder-style insert of one token
    #[must_use]
    pub fn with(
        mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Self {
        self.insert(namespace, key, value);
        self
    }

    /// Insert one token, replacing any previous value for the key
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Replace a whole namespace
    pub fn insert_namespace(&mut self, name: impl Into<String>, namespace: Namespace) {
        self.namespaces.insert(name.into(), namespace);
    }

    /// Mutable access to a namespace, creating it if missing
    pub fn namespace_mut(&mut self, name: &str) -> &mut Namespace {
        self.namespaces.entry(name.to_string()).or_default()
    }

    /// Entries of a namespace
    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// Look up one token
    #[must_use]
    pub fn get(&self, namespace: &str, key: &str) -> Option<&TokenValue> {
        self.namespaces.get(namespace).and_then(|ns| ns.get(key))
    }

    /// Iterate over `(name, entries)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Namespace)> {
        self.namespaces.iter().map(|(name, ns)| (name.as_str(), ns))
    }

    /// Number of namespaces
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Whether the layer has no namespaces
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

fn flatten_entry(
    namespace: &str,
    key: &str,
    entry: &Value,
    out: &mut Namespace,
) -> Result<(), ConfigError> {
    match entry {
        Value::String(s) => {
            out.insert(key.to_string(), TokenValue::Single(s.clone()));
        },
        Value::Array(items) => {
            let stack = items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        ConfigError::invalid_shape(
                            namespace,
                            format!("entry `{key}` must contain only strings, found {}", describe(item)),
                        )
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            out.insert(key.to_string(), TokenValue::Stack(stack));
        },
        Value::Object(children) => {
            for (child, value) in children {
                let flat = if child == DEFAULT_KEY {
                    key.to_string()
                } else {
                    format!("{key}-{child}")
                };
                flatten_entry(namespace, &flat, value, out)?;
            }
        },
        other => {
            return Err(ConfigError::invalid_shape(
                namespace,
                format!(
                    "entry `{key}` must be a string or a list of strings, found {}",
                    describe(other)
                ),
            ));
        },
    }
    Ok(())
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
