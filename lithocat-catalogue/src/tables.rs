//! Flat listings of the catalogue trees, for display and export.

use crate::index::{curve_at, lithology_at, meta_parameter_at};
use crate::query::stale;
use crate::{CatalogueResult, CatalogueSession};
use lithocat_types::{LithologyId, Lookup};
use serde::Serialize;

const PATH_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LithologyRow {
    pub id: String,
    pub name: String,
    /// Main group, then every lithology group down to the owner.
    pub group: String,
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveRow {
    pub id: String,
    pub name: String,
    pub group: String,
    pub points: usize,
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaParameterRow {
    pub id: String,
    pub name: String,
    pub value_type: String,
    pub default_value: Option<String>,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaParameterGroupRow {
    pub id: String,
    pub name: String,
    /// Ancestor groups from the root, empty for top-level groups.
    pub path: String,
}

/// One parameter of a lithology, labelled with its meta parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRow {
    pub meta_parameter_id: String,
    /// `None` when the meta parameter reference dangles.
    pub name: Option<String>,
    pub value: Option<String>,
    pub is_curve: bool,
}

impl CatalogueSession {
    /// Every lithology, in id order.
    pub fn lithology_table(&self) -> CatalogueResult<Vec<LithologyRow>> {
        self.index
            .lithologies
            .entries()
            .map(|(id, path)| {
                let (main, chain) = path.group.resolve(&self.catalogue).ok_or_else(|| stale(id))?;
                let (lithology, _, _) =
                    lithology_at(&self.catalogue, path).ok_or_else(|| stale(id))?;
                let group = std::iter::once(main.name.as_str())
                    .chain(chain.iter().map(|g| g.name.as_str()))
                    .collect::<Vec<_>>()
                    .join(PATH_SEPARATOR);
                Ok(LithologyRow {
                    id: id.to_string(),
                    name: lithology.name.clone(),
                    group,
                    read_only: lithology.read_only,
                })
            })
            .collect()
    }

    /// Every curve, in id order.
    pub fn curve_table(&self) -> CatalogueResult<Vec<CurveRow>> {
        self.index
            .curves
            .entries()
            .map(|(id, path)| {
                let (curve, group) = curve_at(&self.catalogue, *path).ok_or_else(|| stale(id))?;
                Ok(CurveRow {
                    id: id.to_string(),
                    name: curve.name.clone(),
                    group: group.name.clone(),
                    points: curve.points.len(),
                    read_only: curve.read_only,
                })
            })
            .collect()
    }

    /// Every meta parameter, in id order.
    pub fn meta_parameter_table(&self) -> CatalogueResult<Vec<MetaParameterRow>> {
        self.index
            .meta_parameters
            .entries()
            .map(|(id, path)| {
                let (parameter, _) =
                    meta_parameter_at(&self.catalogue, path).ok_or_else(|| stale(id))?;
                let chain = path.group.resolve(&self.catalogue).ok_or_else(|| stale(id))?;
                Ok(MetaParameterRow {
                    id: id.to_string(),
                    name: parameter.name.clone(),
                    value_type: parameter.value_type.clone(),
                    default_value: parameter.default_value.clone(),
                    group: chain
                        .iter()
                        .map(|g| g.name.as_str())
                        .collect::<Vec<_>>()
                        .join(PATH_SEPARATOR),
                })
            })
            .collect()
    }

    /// Every meta parameter group, in id order.
    pub fn meta_parameter_group_table(&self) -> CatalogueResult<Vec<MetaParameterGroupRow>> {
        self.index
            .meta_groups
            .entries()
            .map(|(id, path)| {
                let chain = path.resolve(&self.catalogue).ok_or_else(|| stale(id))?;
                let (group, ancestors) = chain.split_last().ok_or_else(|| stale(id))?;
                Ok(MetaParameterGroupRow {
                    id: id.to_string(),
                    name: group.name.clone(),
                    path: ancestors
                        .iter()
                        .map(|g| g.name.as_str())
                        .collect::<Vec<_>>()
                        .join(PATH_SEPARATOR),
                })
            })
            .collect()
    }

    /// Parameters of one lithology, in document order.
    pub fn lithology_parameters_table<'a>(
        &self,
        lithology: impl Into<Lookup<'a, LithologyId>>,
    ) -> CatalogueResult<Vec<ParameterRow>> {
        let lithology = self.lithology(lithology)?.lithology;
        Ok(lithology
            .parameters()
            .map(|parameter| ParameterRow {
                meta_parameter_id: parameter.meta_parameter_id.to_string(),
                name: self
                    .find_meta_parameters(&parameter.meta_parameter_id)
                    .first()
                    .map(|m| m.parameter.name.clone()),
                value: parameter.value.clone(),
                is_curve: parameter.is_curve(),
            })
            .collect())
    }
}
