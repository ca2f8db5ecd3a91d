//! Lookups over a session: list queries, exactly-one queries, parameter
//! value resolution and weak reference checks.

use crate::index::{curve_at, exactly_one, lithology_at, meta_parameter_at, LithologyPath};
use crate::{CatalogueError, CatalogueResult, CatalogueSession};
use lithocat_model::{
    Curve, CurveGroup, Literal, Lithology, LithologyGroup, MainLithologyGroup, MetaParameter,
    MetaParameterGroup, Parameter, ParameterValue,
};
use lithocat_types::{
    CatalogueId, CurveGroupId, CurveId, EntityKind, LithologyGroupId, LithologyId, Lookup,
    MainLithologyGroupId, MetaParameterGroupId, MetaParameterId,
};
use serde::Serialize;

/// A lithology and the groups that own it.
#[derive(Debug, Clone, Copy)]
pub struct LithologyMatch<'a> {
    pub lithology: &'a Lithology,
    pub group: &'a LithologyGroup,
    pub main_group: &'a MainLithologyGroup,
}

/// A lithology group, its enclosing group when nested, and its main group.
#[derive(Debug, Clone, Copy)]
pub struct LithologyGroupMatch<'a> {
    pub group: &'a LithologyGroup,
    pub parent: Option<&'a LithologyGroup>,
    pub main_group: &'a MainLithologyGroup,
}

#[derive(Debug, Clone, Copy)]
pub struct CurveMatch<'a> {
    pub curve: &'a Curve,
    pub group: &'a CurveGroup,
}

#[derive(Debug, Clone, Copy)]
pub struct MetaParameterMatch<'a> {
    pub parameter: &'a MetaParameter,
    pub group: &'a MetaParameterGroup,
}

/// A meta parameter group and, unless it sits at the root, its parent.
#[derive(Debug, Clone, Copy)]
pub struct MetaParameterGroupMatch<'a> {
    pub group: &'a MetaParameterGroup,
    pub parent: Option<&'a MetaParameterGroup>,
}

/// Kind-erased query result, with the collection that owns the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
    pub name: String,
    /// Immediate owner. `None` for entities held by the catalogue root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,
}

/// The group an [`EntityRef`] belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerRef {
    pub kind: EntityKind,
    pub id: String,
    pub name: String,
}

impl EntityRef {
    fn new(kind: EntityKind, id: &impl AsRef<str>, name: &str) -> Self {
        Self {
            kind,
            id: id.as_ref().to_owned(),
            name: name.to_owned(),
            owner: None,
        }
    }

    fn owned_by(mut self, kind: EntityKind, id: &impl AsRef<str>, name: &str) -> Self {
        self.owner = Some(OwnerRef {
            kind,
            id: id.as_ref().to_owned(),
            name: name.to_owned(),
        });
        self
    }
}

/// A parameter value after resolution against the curve catalogue.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue<'a> {
    Literal(Literal),
    Curve(&'a Curve),
}

impl ResolvedValue<'_> {
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            Self::Curve(_) => None,
        }
    }

    pub fn as_curve(&self) -> Option<&Curve> {
        match self {
            Self::Literal(_) => None,
            Self::Curve(curve) => Some(curve),
        }
    }
}

/// A position that no longer resolves means the index is stale.
pub(crate) fn stale<I: CatalogueId>(id: &I) -> CatalogueError {
    CatalogueError::not_found(I::KIND, id.as_ref())
}

impl CatalogueSession {
    // ── List queries ─────────────────────────────────────────────

    pub fn find_main_lithology_groups<'a>(
        &self,
        lookup: impl Into<Lookup<'a, MainLithologyGroupId>>,
    ) -> Vec<&MainLithologyGroup> {
        let table = &self.index.main_groups;
        table
            .lookup(&lookup.into(), self.index.matching_for::<MainLithologyGroupId>())
            .into_iter()
            .filter_map(|(_, m)| self.catalogue.main_lithology_groups.get(*m))
            .collect()
    }

    pub fn find_lithology_groups<'a>(
        &self,
        lookup: impl Into<Lookup<'a, LithologyGroupId>>,
    ) -> Vec<LithologyGroupMatch<'_>> {
        let table = &self.index.lithology_groups;
        table
            .lookup(&lookup.into(), self.index.matching_for::<LithologyGroupId>())
            .into_iter()
            .filter_map(|(_, path)| {
                let (main_group, chain) = path.resolve(&self.catalogue)?;
                let (group, ancestors) = chain.split_last()?;
                Some(LithologyGroupMatch {
                    group: *group,
                    parent: ancestors.last().copied(),
                    main_group,
                })
            })
            .collect()
    }

    pub fn find_lithologies<'a>(
        &self,
        lookup: impl Into<Lookup<'a, LithologyId>>,
    ) -> Vec<LithologyMatch<'_>> {
        let table = &self.index.lithologies;
        table
            .lookup(&lookup.into(), self.index.matching_for::<LithologyId>())
            .into_iter()
            .filter_map(|(_, path)| lithology_at(&self.catalogue, path))
            .map(|(lithology, group, main_group)| LithologyMatch {
                lithology,
                group,
                main_group,
            })
            .collect()
    }

    pub fn find_curve_groups<'a>(
        &self,
        lookup: impl Into<Lookup<'a, CurveGroupId>>,
    ) -> Vec<&CurveGroup> {
        let table = &self.index.curve_groups;
        table
            .lookup(&lookup.into(), self.index.matching_for::<CurveGroupId>())
            .into_iter()
            .filter_map(|(_, g)| self.catalogue.curve_groups.get(*g))
            .collect()
    }

    pub fn find_curves<'a>(&self, lookup: impl Into<Lookup<'a, CurveId>>) -> Vec<CurveMatch<'_>> {
        let table = &self.index.curves;
        table
            .lookup(&lookup.into(), self.index.matching_for::<CurveId>())
            .into_iter()
            .filter_map(|(_, path)| curve_at(&self.catalogue, *path))
            .map(|(curve, group)| CurveMatch { curve, group })
            .collect()
    }

    pub fn find_meta_parameter_groups<'a>(
        &self,
        lookup: impl Into<Lookup<'a, MetaParameterGroupId>>,
    ) -> Vec<MetaParameterGroupMatch<'_>> {
        let table = &self.index.meta_groups;
        table
            .lookup(&lookup.into(), self.index.matching_for::<MetaParameterGroupId>())
            .into_iter()
            .filter_map(|(_, path)| {
                let chain = path.resolve(&self.catalogue)?;
                let (group, ancestors) = chain.split_last()?;
                Some(MetaParameterGroupMatch {
                    group: *group,
                    parent: ancestors.last().copied(),
                })
            })
            .collect()
    }

    pub fn find_meta_parameters<'a>(
        &self,
        lookup: impl Into<Lookup<'a, MetaParameterId>>,
    ) -> Vec<MetaParameterMatch<'_>> {
        let table = &self.index.meta_parameters;
        table
            .lookup(&lookup.into(), self.index.matching_for::<MetaParameterId>())
            .into_iter()
            .filter_map(|(_, path)| meta_parameter_at(&self.catalogue, path))
            .map(|(parameter, group)| MetaParameterMatch { parameter, group })
            .collect()
    }

    /// Kind-erased list query over one id space.
    pub fn find_by_token(&self, kind: EntityKind, token: &str) -> Vec<EntityRef> {
        match kind {
            EntityKind::MainLithologyGroup => self
                .find_main_lithology_groups(token)
                .into_iter()
                .map(|g| EntityRef::new(kind, &g.id, &g.name))
                .collect(),
            EntityKind::LithologyGroup => self
                .find_lithology_groups(token)
                .into_iter()
                .map(|m| {
                    let found = EntityRef::new(kind, &m.group.id, &m.group.name);
                    match m.parent {
                        Some(parent) => {
                            found.owned_by(EntityKind::LithologyGroup, &parent.id, &parent.name)
                        }
                        None => found.owned_by(
                            EntityKind::MainLithologyGroup,
                            &m.main_group.id,
                            &m.main_group.name,
                        ),
                    }
                })
                .collect(),
            EntityKind::Lithology => self
                .find_lithologies(token)
                .into_iter()
                .map(|m| {
                    EntityRef::new(kind, &m.lithology.id, &m.lithology.name).owned_by(
                        EntityKind::LithologyGroup,
                        &m.group.id,
                        &m.group.name,
                    )
                })
                .collect(),
            EntityKind::CurveGroup => self
                .find_curve_groups(token)
                .into_iter()
                .map(|g| EntityRef::new(kind, &g.id, &g.name))
                .collect(),
            EntityKind::Curve => self
                .find_curves(token)
                .into_iter()
                .map(|m| {
                    EntityRef::new(kind, &m.curve.id, &m.curve.name).owned_by(
                        EntityKind::CurveGroup,
                        &m.group.id,
                        &m.group.name,
                    )
                })
                .collect(),
            EntityKind::MetaParameterGroup => self
                .find_meta_parameter_groups(token)
                .into_iter()
                .map(|m| {
                    let found = EntityRef::new(kind, &m.group.id, &m.group.name);
                    match m.parent {
                        Some(parent) => {
                            found.owned_by(EntityKind::MetaParameterGroup, &parent.id, &parent.name)
                        }
                        None => found,
                    }
                })
                .collect(),
            EntityKind::MetaParameter => self
                .find_meta_parameters(token)
                .into_iter()
                .map(|m| {
                    EntityRef::new(kind, &m.parameter.id, &m.parameter.name).owned_by(
                        EntityKind::MetaParameterGroup,
                        &m.group.id,
                        &m.group.name,
                    )
                })
                .collect(),
        }
    }

    // ── Exactly-one queries ──────────────────────────────────────

    pub fn main_lithology_group<'a>(
        &self,
        lookup: impl Into<Lookup<'a, MainLithologyGroupId>>,
    ) -> CatalogueResult<&MainLithologyGroup> {
        let lookup = lookup.into();
        let token = lookup.describe();
        exactly_one(
            EntityKind::MainLithologyGroup,
            token,
            self.find_main_lithology_groups(lookup),
        )
    }

    pub fn lithology_group<'a>(
        &self,
        lookup: impl Into<Lookup<'a, LithologyGroupId>>,
    ) -> CatalogueResult<LithologyGroupMatch<'_>> {
        let lookup = lookup.into();
        let token = lookup.describe();
        exactly_one(EntityKind::LithologyGroup, token, self.find_lithology_groups(lookup))
    }

    pub fn lithology<'a>(
        &self,
        lookup: impl Into<Lookup<'a, LithologyId>>,
    ) -> CatalogueResult<LithologyMatch<'_>> {
        let lookup = lookup.into();
        let token = lookup.describe();
        exactly_one(EntityKind::Lithology, token, self.find_lithologies(lookup))
    }

    pub fn curve_group<'a>(
        &self,
        lookup: impl Into<Lookup<'a, CurveGroupId>>,
    ) -> CatalogueResult<&CurveGroup> {
        let lookup = lookup.into();
        let token = lookup.describe();
        exactly_one(EntityKind::CurveGroup, token, self.find_curve_groups(lookup))
    }

    pub fn curve<'a>(
        &self,
        lookup: impl Into<Lookup<'a, CurveId>>,
    ) -> CatalogueResult<CurveMatch<'_>> {
        let lookup = lookup.into();
        let token = lookup.describe();
        exactly_one(EntityKind::Curve, token, self.find_curves(lookup))
    }

    pub fn meta_parameter_group<'a>(
        &self,
        lookup: impl Into<Lookup<'a, MetaParameterGroupId>>,
    ) -> CatalogueResult<MetaParameterGroupMatch<'_>> {
        let lookup = lookup.into();
        let token = lookup.describe();
        exactly_one(
            EntityKind::MetaParameterGroup,
            token,
            self.find_meta_parameter_groups(lookup),
        )
    }

    pub fn meta_parameter<'a>(
        &self,
        lookup: impl Into<Lookup<'a, MetaParameterId>>,
    ) -> CatalogueResult<MetaParameterMatch<'_>> {
        let lookup = lookup.into();
        let token = lookup.describe();
        exactly_one(EntityKind::MetaParameter, token, self.find_meta_parameters(lookup))
    }

    // ── Parameter values ─────────────────────────────────────────

    /// Resolves a raw parameter value.
    ///
    /// An id-shaped value must name an existing curve, anything else is read
    /// as an integer, a float or text, in that order.
    pub fn resolve_parameter_value(
        &self,
        parameter: &Parameter,
    ) -> CatalogueResult<ResolvedValue<'_>> {
        match parameter.value_kind() {
            ParameterValue::Literal(raw) => Ok(ResolvedValue::Literal(Literal::parse(raw))),
            ParameterValue::CurveRef(id) => {
                let path = self
                    .index
                    .curves
                    .get(&id)
                    .ok_or_else(|| CatalogueError::not_found(EntityKind::Curve, id.as_str()))?;
                let (curve, _) = curve_at(&self.catalogue, *path).ok_or_else(|| stale(&id))?;
                Ok(ResolvedValue::Curve(curve))
            }
        }
    }

    /// The parameter of a lithology whose meta parameter is named (or
    /// identified) by `parameter`.
    pub fn lithology_parameter<'a>(
        &self,
        lithology: impl Into<Lookup<'a, LithologyId>>,
        parameter: &str,
    ) -> CatalogueResult<&Parameter> {
        let lookup = lithology.into();
        let (id, path) = self
            .index
            .lithologies
            .locate(&lookup, self.index.matching_for::<LithologyId>())?;
        self.parameter_at(&id, &path, parameter)
    }

    /// Resolved value of a lithology parameter.
    pub fn lithology_parameter_value<'a>(
        &self,
        lithology: impl Into<Lookup<'a, LithologyId>>,
        parameter: &str,
    ) -> CatalogueResult<ResolvedValue<'_>> {
        let parameter = self.lithology_parameter(lithology, parameter)?;
        self.resolve_parameter_value(parameter)
    }

    /// Finds the lithology parameter for a meta parameter token.
    ///
    /// The token must name exactly one meta parameter in the schema; a name
    /// shared by several is `Ambiguous` even if the lithology carries only
    /// one of them.
    pub(crate) fn parameter_at(
        &self,
        id: &LithologyId,
        path: &LithologyPath,
        parameter: &str,
    ) -> CatalogueResult<&Parameter> {
        let (lithology, _, _) = lithology_at(&self.catalogue, path).ok_or_else(|| stale(id))?;

        let meta = self.meta_parameter(parameter)?;
        lithology
            .parameter(&meta.parameter.id)
            .ok_or_else(|| CatalogueError::ParameterNotFound {
                lithology: lithology.name.clone(),
                parameter: parameter.to_owned(),
            })
    }

    // ── Weak references ──────────────────────────────────────────

    /// Checks every weak reference in the lithology tree.
    ///
    /// Parameter groups must name a meta parameter group, parameters a meta
    /// parameter, id-shaped values a curve, and mixing components a
    /// lithology. The first dangling reference is returned as `NotFound`.
    pub fn verify_references(&self) -> CatalogueResult<()> {
        for (id, path) in self.index.lithologies.entries() {
            let (lithology, _, _) = lithology_at(&self.catalogue, path).ok_or_else(|| stale(id))?;

            for group in &lithology.parameter_groups {
                if !self.index.meta_groups.contains(&group.meta_parameter_group_id) {
                    return Err(CatalogueError::not_found(
                        EntityKind::MetaParameterGroup,
                        group.meta_parameter_group_id.as_str(),
                    ));
                }
                for parameter in &group.parameters {
                    if !self.index.meta_parameters.contains(&parameter.meta_parameter_id) {
                        return Err(CatalogueError::not_found(
                            EntityKind::MetaParameter,
                            parameter.meta_parameter_id.as_str(),
                        ));
                    }
                    self.resolve_parameter_value(parameter)?;
                }
            }

            for component in lithology.mixing.iter().flat_map(|m| &m.components) {
                if !self.index.lithologies.contains(&component.lithology_id) {
                    return Err(CatalogueError::not_found(
                        EntityKind::Lithology,
                        component.lithology_id.as_str(),
                    ));
                }
            }
        }
        Ok(())
    }
}
