use crate::{CurveGroup, MainLithologyGroup, Meta};
use serde::{Deserialize, Serialize};

/// An attribute on the document root, e.g. a namespace declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAttribute {
    pub name: String,
    pub value: String,
}

/// The top-level catalogue document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    pub name: String,
    pub version: String,
    pub read_only: bool,
    /// Root attributes in document order, written back unchanged on save.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<DocumentAttribute>,
    pub meta: Meta,
    #[serde(default)]
    pub curve_groups: Vec<CurveGroup>,
    #[serde(default)]
    pub main_lithology_groups: Vec<MainLithologyGroup>,
}

impl Catalogue {
    /// Creates an empty, modifiable catalogue.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            read_only: false,
            attributes: Vec::new(),
            meta: Meta::default(),
            curve_groups: Vec::new(),
            main_lithology_groups: Vec::new(),
        }
    }

    /// Total number of lithologies across every group, at any depth.
    pub fn lithology_count(&self) -> usize {
        self.main_lithology_groups
            .iter()
            .flat_map(|main| main.groups.iter())
            .map(|group| group.lithology_count())
            .sum()
    }

    /// Total number of curves across every curve group.
    pub fn curve_count(&self) -> usize {
        self.curve_groups.iter().map(|g| g.curves.len()).sum()
    }
}
