//! Duplicate, create, delete and update operations.
//!
//! Every operation that adds an entity mints an id that is free in its id
//! space. Every structural change rebuilds the session's lookup tables
//! before returning, so a reference returned by one of these calls is
//! already visible to the queries.

use crate::index::{curve_at, curve_at_mut, lithology_at};
use crate::query::stale;
use crate::{CatalogueError, CatalogueResult, CatalogueSession};
use lithocat_model::{
    Curve, CurvePoint, Literal, Lithology, LithologyGroup, MainLithologyGroup, ParameterValue,
};
use lithocat_types::{
    CatalogueId, CurveGroupId, CurveId, EntityKind, LithologyGroupId, LithologyId, Lookup,
    MainLithologyGroupId, is_canonical_id,
};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Mints an id that is not in `existing`.
///
/// Draws at most `max_attempts` candidates; running out is
/// `DuplicateIdentifier`, which means the id space is broken.
pub fn generate_id<I: CatalogueId>(
    existing: &BTreeSet<I>,
    max_attempts: u32,
) -> CatalogueResult<I> {
    generate_id_with(|id| existing.contains::<I>(id), max_attempts, I::generate)
}

/// [`generate_id`] with a caller-supplied membership test and id source.
pub fn generate_id_with<I: CatalogueId>(
    is_taken: impl Fn(&I) -> bool,
    max_attempts: u32,
    mut mint: impl FnMut() -> I,
) -> CatalogueResult<I> {
    let mut last = None;
    for attempt in 1..=max_attempts.max(1) {
        let candidate = mint();
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
        debug!(kind = %I::KIND, attempt, id = %candidate, "Generated id already taken");
        last = Some(candidate);
    }
    Err(CatalogueError::DuplicateIdentifier {
        kind: I::KIND,
        id: last.map(|id| id.to_string()).unwrap_or_default(),
    })
}

/// New value for one lithology parameter.
///
/// Literal-valued parameters take a `Literal`, curve-valued parameters take
/// a `Table` that replaces the referenced curve's points.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterUpdate {
    Literal(String),
    Table(Vec<CurvePoint>),
}

impl From<&str> for ParameterUpdate {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

impl From<String> for ParameterUpdate {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<f64> for ParameterUpdate {
    fn from(value: f64) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<i64> for ParameterUpdate {
    fn from(value: i64) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<Literal> for ParameterUpdate {
    fn from(value: Literal) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<Vec<CurvePoint>> for ParameterUpdate {
    fn from(points: Vec<CurvePoint>) -> Self {
        Self::Table(points)
    }
}

impl From<Vec<(f64, f64)>> for ParameterUpdate {
    fn from(table: Vec<(f64, f64)>) -> Self {
        Self::Table(table.into_iter().map(CurvePoint::from).collect())
    }
}

impl CatalogueSession {
    fn attempts(&self) -> u32 {
        self.config.id_generation_attempts
    }

    /// Copies a curve, points included, under a new name and id.
    ///
    /// The copy goes to `target_group`, or next to the source.
    pub fn duplicate_curve<'a>(
        &mut self,
        source: impl Into<Lookup<'a, CurveId>>,
        new_name: &str,
        target_group: Option<Lookup<'_, CurveGroupId>>,
    ) -> CatalogueResult<&Curve> {
        let (source_id, path) = self
            .index
            .curves
            .locate(&source.into(), self.index.matching_for::<CurveId>())?;
        let target = match target_group {
            Some(lookup) => {
                self.index
                    .curve_groups
                    .locate(&lookup, self.index.matching_for::<CurveGroupId>())?
                    .1
            }
            None => path.group,
        };

        let id = generate_id_with(
            |id| self.index.curves.contains(id),
            self.attempts(),
            CurveId::generate,
        )?;
        let (source_curve, _) = curve_at(&self.catalogue, path).ok_or_else(|| stale(&source_id))?;
        let mut copy = source_curve.clone();
        copy.id = id.clone();
        copy.name = new_name.to_owned();

        self.catalogue
            .curve_groups
            .get_mut(target)
            .ok_or_else(|| stale(&source_id))?
            .curves
            .push(copy);
        self.reindex()?;

        info!(source = %source_id, curve = %id, name = new_name, "Duplicated curve");
        Ok(self.curve(&id)?.curve)
    }

    /// Copies a lithology under a new name and id.
    ///
    /// Parameters, mixing and curve references are copied as they are; the
    /// copy shares its curves with the source. The read-only flag is
    /// `!modifiable`.
    pub fn duplicate_lithology<'a>(
        &mut self,
        source: impl Into<Lookup<'a, LithologyId>>,
        new_name: &str,
        target_group: Option<Lookup<'_, LithologyGroupId>>,
        modifiable: bool,
    ) -> CatalogueResult<&Lithology> {
        let (source_id, path) = self
            .index
            .lithologies
            .locate(&source.into(), self.index.matching_for::<LithologyId>())?;
        let target = match target_group {
            Some(lookup) => {
                self.index
                    .lithology_groups
                    .locate(&lookup, self.index.matching_for::<LithologyGroupId>())?
                    .1
            }
            None => path.group.clone(),
        };

        let id = generate_id_with(
            |id| self.index.lithologies.contains(id),
            self.attempts(),
            LithologyId::generate,
        )?;
        let (source_lithology, _, _) =
            lithology_at(&self.catalogue, &path).ok_or_else(|| stale(&source_id))?;
        let mut copy = source_lithology.clone();
        copy.id = id.clone();
        copy.name = new_name.to_owned();
        copy.read_only = !modifiable;

        target
            .resolve_mut(&mut self.catalogue)
            .ok_or_else(|| stale(&source_id))?
            .lithologies
            .push(copy);
        self.reindex()?;

        info!(
            source = %source_id,
            lithology = %id,
            name = new_name,
            modifiable,
            "Duplicated lithology"
        );
        Ok(self.lithology(&id)?.lithology)
    }

    /// Creates an empty lithology group modelled on `source`.
    ///
    /// Only the scalar fields are copied; the new group has no lithologies
    /// and no nested groups, and is modifiable. It is appended to
    /// `target_main_group`, or to the source's main group.
    pub fn create_lithology_group<'a>(
        &mut self,
        source: impl Into<Lookup<'a, LithologyGroupId>>,
        new_name: &str,
        target_main_group: Option<Lookup<'_, MainLithologyGroupId>>,
    ) -> CatalogueResult<&LithologyGroup> {
        let (source_id, path) = self
            .index
            .lithology_groups
            .locate(&source.into(), self.index.matching_for::<LithologyGroupId>())?;
        let target = match target_main_group {
            Some(lookup) => {
                self.index
                    .main_groups
                    .locate(&lookup, self.index.matching_for::<MainLithologyGroupId>())?
                    .1
            }
            None => path.main,
        };

        let id = generate_id_with(
            |id| self.index.lithology_groups.contains(id),
            self.attempts(),
            LithologyGroupId::generate,
        )?;
        let (_, chain) = path.resolve(&self.catalogue).ok_or_else(|| stale(&source_id))?;
        let source_group = chain.last().ok_or_else(|| stale(&source_id))?;
        let group = LithologyGroup {
            id: id.clone(),
            name: new_name.to_owned(),
            creator: source_group.creator.clone(),
            read_only: false,
            petromod_id: source_group.petromod_id.clone(),
            groups: Vec::new(),
            lithologies: Vec::new(),
        };

        self.catalogue
            .main_lithology_groups
            .get_mut(target)
            .ok_or_else(|| stale(&source_id))?
            .groups
            .push(group);
        self.reindex()?;

        info!(source = %source_id, group = %id, name = new_name, "Created lithology group");
        Ok(self.lithology_group(&id)?.group)
    }

    /// Creates an empty, modifiable main group modelled on `source` and
    /// appends it to the catalogue.
    pub fn create_main_lithology_group<'a>(
        &mut self,
        source: impl Into<Lookup<'a, MainLithologyGroupId>>,
        new_name: &str,
    ) -> CatalogueResult<&MainLithologyGroup> {
        let (source_id, m) = self
            .index
            .main_groups
            .locate(&source.into(), self.index.matching_for::<MainLithologyGroupId>())?;

        let id = generate_id_with(
            |id| self.index.main_groups.contains(id),
            self.attempts(),
            MainLithologyGroupId::generate,
        )?;
        let source_group = self
            .catalogue
            .main_lithology_groups
            .get(m)
            .ok_or_else(|| stale(&source_id))?;
        let group = MainLithologyGroup {
            id: id.clone(),
            name: new_name.to_owned(),
            creator: source_group.creator.clone(),
            read_only: false,
            petromod_id: source_group.petromod_id.clone(),
            groups: Vec::new(),
        };

        self.catalogue.main_lithology_groups.push(group);
        self.reindex()?;

        info!(source = %source_id, group = %id, name = new_name, "Created main lithology group");
        self.main_lithology_group(&id)
    }

    /// Removes a main group and everything under it.
    pub fn delete_main_lithology_group<'a>(
        &mut self,
        target: impl Into<Lookup<'a, MainLithologyGroupId>>,
    ) -> CatalogueResult<MainLithologyGroup> {
        let (id, m) = self
            .index
            .main_groups
            .locate(&target.into(), self.index.matching_for::<MainLithologyGroupId>())?;
        if m >= self.catalogue.main_lithology_groups.len() {
            return Err(stale(&id));
        }
        let removed = self.catalogue.main_lithology_groups.remove(m);
        self.reindex()?;

        info!(group = %id, name = %removed.name, "Deleted main lithology group");
        Ok(removed)
    }

    /// Removes a lithology group from its immediate parent, which is either
    /// an enclosing lithology group or a main group.
    pub fn delete_lithology_group<'a>(
        &mut self,
        target: impl Into<Lookup<'a, LithologyGroupId>>,
    ) -> CatalogueResult<LithologyGroup> {
        let (id, path) = self
            .index
            .lithology_groups
            .locate(&target.into(), self.index.matching_for::<LithologyGroupId>())?;
        let position = path.last().ok_or_else(|| stale(&id))?;

        let siblings = match path.parent() {
            Some(parent) => {
                &mut parent
                    .resolve_mut(&mut self.catalogue)
                    .ok_or_else(|| stale(&id))?
                    .groups
            }
            None => {
                &mut self
                    .catalogue
                    .main_lithology_groups
                    .get_mut(path.main)
                    .ok_or_else(|| stale(&id))?
                    .groups
            }
        };
        if position >= siblings.len() {
            return Err(stale(&id));
        }
        let removed = siblings.remove(position);
        self.reindex()?;

        info!(group = %id, name = %removed.name, "Deleted lithology group");
        Ok(removed)
    }

    /// Removes a lithology from its group.
    pub fn delete_lithology<'a>(
        &mut self,
        target: impl Into<Lookup<'a, LithologyId>>,
    ) -> CatalogueResult<Lithology> {
        let (id, path) = self
            .index
            .lithologies
            .locate(&target.into(), self.index.matching_for::<LithologyId>())?;
        let group = path
            .group
            .resolve_mut(&mut self.catalogue)
            .ok_or_else(|| stale(&id))?;
        if path.index >= group.lithologies.len() {
            return Err(stale(&id));
        }
        let removed = group.lithologies.remove(path.index);
        self.reindex()?;

        info!(lithology = %id, name = %removed.name, "Deleted lithology");
        Ok(removed)
    }

    /// Applies parameter updates to one lithology, in order.
    ///
    /// Each name must resolve to exactly one meta parameter, which the
    /// lithology must carry. A literal-valued parameter stores the new
    /// text; a curve-valued one gets its curve's point table replaced.
    /// Updates stop at the first failure and earlier ones stay applied.
    pub fn update_lithology_parameter<'a, K, V>(
        &mut self,
        lithology: impl Into<Lookup<'a, LithologyId>>,
        updates: impl IntoIterator<Item = (K, V)>,
    ) -> CatalogueResult<()>
    where
        K: AsRef<str>,
        V: Into<ParameterUpdate>,
    {
        let (id, path) = self
            .index
            .lithologies
            .locate(&lithology.into(), self.index.matching_for::<LithologyId>())?;

        for (name, update) in updates {
            let name = name.as_ref();
            let parameter = self.parameter_at(&id, &path, name)?;
            let meta_parameter_id = parameter.meta_parameter_id.clone();
            let curve_id = match parameter.value_kind() {
                ParameterValue::CurveRef(curve_id) => Some(curve_id),
                ParameterValue::Literal(_) => None,
            };

            match (curve_id, update.into()) {
                (Some(curve_id), ParameterUpdate::Table(points)) => {
                    let curve_path = self
                        .index
                        .curves
                        .get(&curve_id)
                        .copied()
                        .ok_or_else(|| {
                            CatalogueError::not_found(EntityKind::Curve, curve_id.as_str())
                        })?;
                    let curve = curve_at_mut(&mut self.catalogue, curve_path)
                        .ok_or_else(|| stale(&curve_id))?;
                    curve.replace_points(points.iter().map(|p| (p.x, p.y)));
                    info!(
                        lithology = %id,
                        parameter = name,
                        curve = %curve_id,
                        points = points.len(),
                        "Replaced curve table"
                    );
                }
                (None, ParameterUpdate::Literal(value)) => {
                    // An id-shaped literal turns the parameter into a curve reference.
                    if is_canonical_id(&value)
                        && !self.index.curves.contains(&CurveId::new(value.as_str()))
                    {
                        return Err(CatalogueError::not_found(EntityKind::Curve, value));
                    }
                    let (lithology, _, _) =
                        lithology_at(&self.catalogue, &path).ok_or_else(|| stale(&id))?;
                    let lithology_name = lithology.name.clone();
                    let group = path
                        .group
                        .resolve_mut(&mut self.catalogue)
                        .ok_or_else(|| stale(&id))?;
                    let parameter = group
                        .lithologies
                        .get_mut(path.index)
                        .and_then(|l| l.parameter_mut(&meta_parameter_id))
                        .ok_or(CatalogueError::ParameterNotFound {
                            lithology: lithology_name,
                            parameter: name.to_owned(),
                        })?;
                    parameter.value = Some(value);
                    info!(
                        lithology = %id,
                        parameter = name,
                        value = ?parameter.value,
                        "Updated lithology parameter"
                    );
                }
                (Some(curve_id), ParameterUpdate::Literal(_)) => {
                    return Err(CatalogueError::InvalidValue {
                        parameter: name.to_owned(),
                        reason: format!(
                            "parameter references curve {curve_id}; supply a point table"
                        ),
                    });
                }
                (None, ParameterUpdate::Table(_)) => {
                    return Err(CatalogueError::InvalidValue {
                        parameter: name.to_owned(),
                        reason: "parameter holds a literal value, not a curve".to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}
