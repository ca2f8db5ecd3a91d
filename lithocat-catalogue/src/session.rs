use crate::index::CatalogueIndex;
use crate::{CatalogueConfig, CatalogueResult};
use lithocat_model::Catalogue;
use lithocat_types::{
    CurveGroupId, CurveId, EntityKind, LithologyGroupId, LithologyId, MainLithologyGroupId,
    MetaParameterGroupId, MetaParameterId,
};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// One loaded catalogue and the lookup tables derived from it.
///
/// The session is the only way to read or change the catalogue once it is
/// loaded; the tables are rebuilt by every structural mutation.
#[derive(Debug, Clone)]
pub struct CatalogueSession {
    pub(crate) catalogue: Catalogue,
    pub(crate) index: CatalogueIndex,
    pub(crate) config: CatalogueConfig,
}

impl CatalogueSession {
    /// Wraps a catalogue, building its lookup tables.
    ///
    /// Fails with `DuplicateIdentifier` if any id space holds an id twice.
    pub fn new(catalogue: Catalogue, config: CatalogueConfig) -> CatalogueResult<Self> {
        let index = CatalogueIndex::build(&catalogue, config.name_matching.clone())?;
        Ok(Self {
            catalogue,
            index,
            config,
        })
    }

    /// Wraps a catalogue with the default configuration.
    pub fn from_catalogue(catalogue: Catalogue) -> CatalogueResult<Self> {
        Self::new(catalogue, CatalogueConfig::default())
    }

    /// Parses a catalogue document held in memory.
    pub fn from_xml_str(xml: &str, config: CatalogueConfig) -> CatalogueResult<Self> {
        Self::new(lithocat_xml::from_xml_str(xml)?, config)
    }

    /// Loads a catalogue document from disk.
    pub fn load(path: &Path, config: CatalogueConfig) -> CatalogueResult<Self> {
        let catalogue = lithocat_xml::read_catalogue_file(path)?;
        let session = Self::new(catalogue, config)?;
        info!(
            catalogue = %session.catalogue.name,
            lithologies = session.index.lithologies.len(),
            curves = session.index.curves.len(),
            "Opened catalogue session"
        );
        Ok(session)
    }

    /// Writes the catalogue document to disk.
    pub fn save(&self, path: &Path) -> CatalogueResult<()> {
        lithocat_xml::write_catalogue_file(&self.catalogue, path)?;
        Ok(())
    }

    pub fn to_xml_string(&self) -> CatalogueResult<String> {
        Ok(lithocat_xml::to_xml_string(&self.catalogue)?)
    }

    /// Read-only view of the whole tree.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn into_catalogue(self) -> Catalogue {
        self.catalogue
    }

    pub fn config(&self) -> &CatalogueConfig {
        &self.config
    }

    /// Rebuilds every lookup table from the current tree.
    pub fn reindex(&mut self) -> CatalogueResult<()> {
        self.index = CatalogueIndex::build(&self.catalogue, self.config.name_matching.clone())?;
        Ok(())
    }

    // ── Id sets ──────────────────────────────────────────────────

    pub fn main_lithology_group_ids(&self) -> BTreeSet<MainLithologyGroupId> {
        self.index.main_groups.ids().cloned().collect()
    }

    pub fn lithology_group_ids(&self) -> BTreeSet<LithologyGroupId> {
        self.index.lithology_groups.ids().cloned().collect()
    }

    pub fn lithology_ids(&self) -> BTreeSet<LithologyId> {
        self.index.lithologies.ids().cloned().collect()
    }

    pub fn curve_group_ids(&self) -> BTreeSet<CurveGroupId> {
        self.index.curve_groups.ids().cloned().collect()
    }

    pub fn curve_ids(&self) -> BTreeSet<CurveId> {
        self.index.curves.ids().cloned().collect()
    }

    pub fn meta_parameter_group_ids(&self) -> BTreeSet<MetaParameterGroupId> {
        self.index.meta_groups.ids().cloned().collect()
    }

    pub fn meta_parameter_ids(&self) -> BTreeSet<MetaParameterId> {
        self.index.meta_parameters.ids().cloned().collect()
    }

    /// Ids of one kind as plain text, in id order.
    pub fn ids(&self, kind: EntityKind) -> Vec<String> {
        fn text<I: AsRef<str>>(ids: impl Iterator<Item = I>) -> Vec<String> {
            ids.map(|id| id.as_ref().to_owned()).collect()
        }
        match kind {
            EntityKind::MainLithologyGroup => text(self.index.main_groups.ids()),
            EntityKind::LithologyGroup => text(self.index.lithology_groups.ids()),
            EntityKind::Lithology => text(self.index.lithologies.ids()),
            EntityKind::CurveGroup => text(self.index.curve_groups.ids()),
            EntityKind::Curve => text(self.index.curves.ids()),
            EntityKind::MetaParameterGroup => text(self.index.meta_groups.ids()),
            EntityKind::MetaParameter => text(self.index.meta_parameters.ids()),
        }
    }
}
