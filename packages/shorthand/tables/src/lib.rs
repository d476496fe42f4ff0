//! Lookup tables and configuration for the shorthand class rewriter.
//!
//! The rewriter never mutates these tables. They are built once (either from the
//! built-in defaults or from a TOML/JSON file layered over them) and handed to the
//! DSL compiler and attribute rewriter by reference.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod defaults;

/// Identifier every DSL chain must start from.
pub const DEFAULT_DSL_ROOT: &str = "SS";

/// Function used to merge a pre-existing `class` with generated DSL classes.
pub const DEFAULT_CLASS_MERGE_FN: &str = "clsx";

/// Attribute names that carry a DSL chain expression.
pub const DEFAULT_DSL_ATTRIBUTES: &[&str] = &["ss", "use:ss"];

/// Error type for configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The TOML configuration was malformed.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    /// The JSON configuration was malformed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The configuration file extension is not recognized.
    #[error("Unsupported config format for '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// The two static mappings consulted when resolving class candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    /// Shorthand key to utility class string. An empty string means "use the key itself".
    pub lookups: BTreeMap<String, String>,
    /// camelCase CSS property to utility class prefix (`width` -> `w`).
    pub style_prefixes: BTreeMap<String, String>,
}

impl Default for Tables {
    fn default() -> Self {
        Self::from_entries(defaults::LOOKUPS, defaults::STYLE_PREFIXES)
    }
}

impl Tables {
    /// Tables with no entries at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lookups: BTreeMap::new(),
            style_prefixes: BTreeMap::new(),
        }
    }

    /// Builds tables from borrowed `(key, value)` pairs.
    #[must_use]
    pub fn from_entries(lookups: &[(&str, &str)], style_prefixes: &[(&str, &str)]) -> Self {
        Self {
            lookups: lookups
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            style_prefixes: style_prefixes
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Resolves a shorthand key to the class name it stands for.
    ///
    /// The lookup table is a partial override: a key mapped to an empty string
    /// resolves to itself. Returns `None` when the key is unknown.
    #[must_use]
    pub fn resolve_class<'a>(&'a self, key: &'a str) -> Option<&'a str> {
        self.lookups
            .get(key)
            .map(|mapped| if mapped.is_empty() { key } else { mapped.as_str() })
    }

    /// Utility class prefix for a camelCase CSS property, if one is known.
    #[must_use]
    pub fn style_prefix(&self, property: &str) -> Option<&str> {
        self.style_prefixes.get(property).map(String::as_str)
    }

    /// Layers `other` over `self`; entries in `other` win.
    pub fn extend(&mut self, other: Self) {
        self.lookups.extend(other.lookups);
        self.style_prefixes.extend(other.style_prefixes);
    }
}

/// A bracketed-cast idiom used as an icon-name escape hatch inside DSL chains.
///
/// When `marker` appears in a chain it is stripped before compiling, and
/// `${expression}` is appended to the generated class template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEscape {
    pub marker: String,
    pub expression: String,
}

impl IconEscape {
    #[must_use]
    pub fn new(marker: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            expression: expression.into(),
        }
    }
}

/// Everything the DSL compiler and attribute rewriter read at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tables: Tables,
    pub dsl_root: String,
    pub dsl_attributes: Vec<String>,
    pub class_merge_fn: String,
    pub icon_escapes: Vec<IconEscape>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tables: Tables::default(),
            dsl_root: DEFAULT_DSL_ROOT.to_string(),
            dsl_attributes: DEFAULT_DSL_ATTRIBUTES
                .iter()
                .map(ToString::to_string)
                .collect(),
            class_merge_fn: DEFAULT_CLASS_MERGE_FN.to_string(),
            icon_escapes: vec![
                IconEscape::new("[icon as 'icon']", "icon"),
                IconEscape::new("[p.image as 'icon']", "p.image"),
            ],
        }
    }
}

/// On-disk shape of a configuration file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    replace_tables: bool,
    lookups: BTreeMap<String, String>,
    style_prefixes: BTreeMap<String, String>,
    dsl_root: Option<String>,
    dsl_attributes: Option<Vec<String>>,
    class_merge_fn: Option<String>,
    icon_escapes: Option<Vec<IconEscape>>,
}

impl Config {
    /// Default configuration with the given tables.
    #[must_use]
    pub fn with_tables(tables: Tables) -> Self {
        Self {
            tables,
            ..Self::default()
        }
    }

    /// Whether `name` is one of the configured DSL attribute names.
    #[must_use]
    pub fn is_dsl_attribute(&self, name: &str) -> bool {
        self.dsl_attributes.iter().any(|x| x == name)
    }

    /// Parses a TOML configuration and layers it over the defaults.
    ///
    /// # Errors
    ///
    /// * If the TOML is malformed or has fields of the wrong type
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;
        Ok(Self::default().apply(file))
    }

    /// Parses a JSON configuration and layers it over the defaults.
    ///
    /// # Errors
    ///
    /// * If the JSON is malformed or has fields of the wrong type
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(source)?;
        Ok(Self::default().apply(file))
    }

    /// Loads a configuration file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// * If the file cannot be read
    /// * If the extension is neither `.toml` nor `.json`
    /// * If the file contents fail to deserialize
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = path.extension().and_then(|x| x.to_str());
        if !matches!(format, Some("toml" | "json")) {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }

        let source = std::fs::read_to_string(path)?;
        let config = if format == Some("toml") {
            Self::from_toml_str(&source)?
        } else {
            Self::from_json_str(&source)?
        };

        log::debug!(
            "from_file: loaded {} ({} lookups, {} style prefixes)",
            path.display(),
            config.tables.lookups.len(),
            config.tables.style_prefixes.len(),
        );

        Ok(config)
    }

    fn apply(mut self, file: ConfigFile) -> Self {
        let overrides = Tables {
            lookups: file.lookups,
            style_prefixes: file.style_prefixes,
        };
        if file.replace_tables {
            self.tables = overrides;
        } else {
            self.tables.extend(overrides);
        }
        if let Some(root) = file.dsl_root {
            self.dsl_root = root;
        }
        if let Some(attributes) = file.dsl_attributes {
            self.dsl_attributes = attributes;
        }
        if let Some(merge_fn) = file.class_merge_fn {
            self.class_merge_fn = merge_fn;
        }
        if let Some(escapes) = file.icon_escapes {
            self.icon_escapes = escapes;
        }
        self
    }
}
