//! Session configuration, read from `lithocat.toml`.
//!
//! ```toml
//! id-generation-attempts = 64
//!
//! [name-matching]
//! lithology = "ignore-case"
//! curve = "exact"
//! ```

use crate::CatalogueResult;
use lithocat_types::EntityKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// How a name token is compared against entity names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameMatching {
    #[default]
    Exact,
    IgnoreCase,
}

/// Name comparison per entity kind.
///
/// Lithology names compare case-insensitively by default while every other
/// kind compares exactly; catalogues have always resolved lithologies that
/// way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NameMatchingPolicy {
    pub main_lithology_group: NameMatching,
    pub lithology_group: NameMatching,
    pub lithology: NameMatching,
    pub curve_group: NameMatching,
    pub curve: NameMatching,
    pub meta_parameter_group: NameMatching,
    pub meta_parameter: NameMatching,
}

impl Default for NameMatchingPolicy {
    fn default() -> Self {
        Self {
            main_lithology_group: NameMatching::Exact,
            lithology_group: NameMatching::Exact,
            lithology: NameMatching::IgnoreCase,
            curve_group: NameMatching::Exact,
            curve: NameMatching::Exact,
            meta_parameter_group: NameMatching::Exact,
            meta_parameter: NameMatching::Exact,
        }
    }
}

impl NameMatchingPolicy {
    /// Every kind compares names exactly.
    pub fn exact() -> Self {
        Self {
            lithology: NameMatching::Exact,
            ..Self::default()
        }
    }

    pub fn for_kind(&self, kind: EntityKind) -> NameMatching {
        match kind {
            EntityKind::MainLithologyGroup => self.main_lithology_group,
            EntityKind::LithologyGroup => self.lithology_group,
            EntityKind::Lithology => self.lithology,
            EntityKind::CurveGroup => self.curve_group,
            EntityKind::Curve => self.curve,
            EntityKind::MetaParameterGroup => self.meta_parameter_group,
            EntityKind::MetaParameter => self.meta_parameter,
        }
    }
}

fn default_id_generation_attempts() -> u32 {
    64
}

/// Configuration for a catalogue session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogueConfig {
    #[serde(default)]
    pub name_matching: NameMatchingPolicy,
    /// Upper bound on draws when minting a fresh id.
    #[serde(default = "default_id_generation_attempts")]
    pub id_generation_attempts: u32,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            name_matching: NameMatchingPolicy::default(),
            id_generation_attempts: default_id_generation_attempts(),
        }
    }
}

impl CatalogueConfig {
    /// Parses a TOML config.
    pub fn from_toml_str(contents: &str) -> CatalogueResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads config from an explicit path.
    /// A missing or unparsable file falls back to the defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded catalogue config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_ignore_case_for_lithologies_only() {
        let config = CatalogueConfig::default();
        assert_eq!(config.id_generation_attempts, 64);
        for kind in EntityKind::ALL {
            let expected = if kind == EntityKind::Lithology {
                NameMatching::IgnoreCase
            } else {
                NameMatching::Exact
            };
            assert_eq!(config.name_matching.for_kind(kind), expected, "{kind}");
        }
    }

    #[test]
    fn exact_policy_covers_lithologies() {
        assert_eq!(
            NameMatchingPolicy::exact().for_kind(EntityKind::Lithology),
            NameMatching::Exact
        );
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = CatalogueConfig::from_toml_str(
            r#"
[name-matching]
curve = "ignore-case"
"#,
        )
        .unwrap();
        assert_eq!(config.name_matching.curve, NameMatching::IgnoreCase);
        assert_eq!(config.name_matching.lithology, NameMatching::IgnoreCase);
        assert_eq!(config.id_generation_attempts, 64);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(CatalogueConfig::from_toml_str("").unwrap(), CatalogueConfig::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(CatalogueConfig::from_toml_str("name-matching = 3").is_err());
        assert!(
            CatalogueConfig::from_toml_str("[name-matching]\nlithology = \"fuzzy\"").is_err()
        );
    }

    // ================================================================
    // load_from() fallback
    // ================================================================

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogueConfig::load_from(&dir.path().join("nonexistent.toml"));
        assert_eq!(config, CatalogueConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lithocat.toml");
        std::fs::write(
            &path,
            r#"
id-generation-attempts = 8

[name-matching]
lithology = "exact"
"#,
        )
        .unwrap();

        let config = CatalogueConfig::load_from(&path);
        assert_eq!(config.id_generation_attempts, 8);
        assert_eq!(config.name_matching.lithology, NameMatching::Exact);
    }

    #[test]
    fn load_from_garbage_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lithocat.toml");
        std::fs::write(&path, "this is [not toml").unwrap();
        assert_eq!(CatalogueConfig::load_from(&path), CatalogueConfig::default());
    }
}
