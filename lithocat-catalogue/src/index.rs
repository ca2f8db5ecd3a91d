//! Flattened lookup tables over the catalogue trees.
//!
//! Each table maps a typed id to the position of its entity in the tree,
//! plus exact and case-folded name maps. Positions are only valid for the
//! tree the index was built from; the session rebuilds the index after
//! every structural mutation.

use crate::config::{NameMatching, NameMatchingPolicy};
use crate::{CatalogueError, CatalogueResult};
use lithocat_model::{
    Catalogue, Curve, CurveGroup, Lithology, LithologyGroup, MainLithologyGroup, MetaParameter,
    MetaParameterGroup,
};
use lithocat_types::{
    CatalogueId, CurveGroupId, CurveId, EntityKind, IdentifierToken, LithologyGroupId, LithologyId,
    Lookup, MainLithologyGroupId, MetaParameterGroupId, MetaParameterId,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Position of a lithology group: the main group, then the chain of child
/// indices down to the group itself (never empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GroupPath {
    pub main: usize,
    pub chain: Vec<usize>,
}

impl GroupPath {
    fn child(&self, index: usize) -> Self {
        let mut chain = self.chain.clone();
        chain.push(index);
        Self {
            main: self.main,
            chain,
        }
    }

    /// Path of the enclosing lithology group, if the group is nested.
    pub fn parent(&self) -> Option<Self> {
        match self.chain.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self {
                main: self.main,
                chain: rest.to_vec(),
            }),
            _ => None,
        }
    }

    /// Index of the group inside its owning collection.
    pub fn last(&self) -> Option<usize> {
        self.chain.last().copied()
    }

    /// Resolves to the main group and every group from the top down to the
    /// target (the target last).
    pub fn resolve<'a>(
        &self,
        catalogue: &'a Catalogue,
    ) -> Option<(&'a MainLithologyGroup, Vec<&'a LithologyGroup>)> {
        let main = catalogue.main_lithology_groups.get(self.main)?;
        let (first, rest) = self.chain.split_first()?;
        let mut group = main.groups.get(*first)?;
        let mut chain = vec![group];
        for index in rest {
            group = group.groups.get(*index)?;
            chain.push(group);
        }
        Some((main, chain))
    }

    pub fn resolve_mut<'a>(&self, catalogue: &'a mut Catalogue) -> Option<&'a mut LithologyGroup> {
        let main = catalogue.main_lithology_groups.get_mut(self.main)?;
        let (first, rest) = self.chain.split_first()?;
        let mut group = main.groups.get_mut(*first)?;
        for index in rest {
            group = group.groups.get_mut(*index)?;
        }
        Some(group)
    }
}

/// Position of a lithology inside its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LithologyPath {
    pub group: GroupPath,
    pub index: usize,
}

/// Position of a curve: curve group index, then curve index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CurvePath {
    pub group: usize,
    pub index: usize,
}

/// Position of a meta parameter group: child indices from the meta root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MetaGroupPath(pub Vec<usize>);

impl MetaGroupPath {
    fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    /// Resolves to every group from the meta root down to the target.
    pub fn resolve<'a>(&self, catalogue: &'a Catalogue) -> Option<Vec<&'a MetaParameterGroup>> {
        let (first, rest) = self.0.split_first()?;
        let mut group = catalogue.meta.groups.get(*first)?;
        let mut chain = vec![group];
        for index in rest {
            group = group.groups.get(*index)?;
            chain.push(group);
        }
        Some(chain)
    }
}

/// Position of a meta parameter inside its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MetaParameterPath {
    pub group: MetaGroupPath,
    pub index: usize,
}

/// One id space: id → position, name → ids.
#[derive(Debug, Clone)]
pub(crate) struct Table<I, P> {
    by_id: BTreeMap<I, P>,
    by_name: BTreeMap<String, Vec<I>>,
    by_folded_name: BTreeMap<String, Vec<I>>,
}

impl<I: CatalogueId, P> Default for Table<I, P> {
    fn default() -> Self {
        Self {
            by_id: BTreeMap::new(),
            by_name: BTreeMap::new(),
            by_folded_name: BTreeMap::new(),
        }
    }
}

impl<I: CatalogueId, P> Table<I, P> {
    fn insert(&mut self, id: &I, name: &str, position: P) -> CatalogueResult<()> {
        if self.by_id.contains_key::<I>(id) {
            return Err(CatalogueError::DuplicateIdentifier {
                kind: I::KIND,
                id: id.to_string(),
            });
        }
        self.by_id.insert(id.clone(), position);
        self.by_name.entry(name.to_owned()).or_default().push(id.clone());
        self.by_folded_name
            .entry(name.to_lowercase())
            .or_default()
            .push(id.clone());
        Ok(())
    }

    pub fn contains(&self, id: &I) -> bool {
        self.by_id.contains_key::<I>(id)
    }

    pub fn get(&self, id: &I) -> Option<&P> {
        self.by_id.get::<I>(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// All entries, in id order.
    pub fn entries(&self) -> impl Iterator<Item = (&I, &P)> {
        self.by_id.iter()
    }

    /// All ids, in id order.
    pub fn ids(&self) -> impl Iterator<Item = &I> {
        self.by_id.keys()
    }

    /// The single entry matching the lookup, with its id.
    pub fn locate(&self, lookup: &Lookup<'_, I>, matching: NameMatching) -> CatalogueResult<(I, P)>
    where
        P: Clone,
    {
        let found = self.lookup(lookup, matching);
        let (id, position) = exactly_one(I::KIND, lookup.describe(), found)?;
        Ok((id.clone(), position.clone()))
    }

    /// Every entry matching the lookup, in id order.
    pub fn lookup(&self, lookup: &Lookup<'_, I>, matching: NameMatching) -> Vec<(&I, &P)> {
        match lookup {
            Lookup::Id(id) => self.by_id.get_key_value::<I>(id).into_iter().collect(),
            Lookup::Token(token) => match IdentifierToken::classify(token) {
                IdentifierToken::Id(id) => self.by_id.get_key_value(id).into_iter().collect(),
                IdentifierToken::Name(name) => {
                    let ids = match matching {
                        NameMatching::Exact => self.by_name.get(name),
                        NameMatching::IgnoreCase => self.by_folded_name.get(&name.to_lowercase()),
                    };
                    let mut found: Vec<(&I, &P)> = ids
                        .into_iter()
                        .flatten()
                        .filter_map(|id| self.by_id.get_key_value::<I>(id))
                        .collect();
                    found.sort_by(|a, b| a.0.cmp(b.0));
                    found
                }
            },
        }
    }
}

/// Every id space of one catalogue.
#[derive(Debug, Clone, Default)]
pub(crate) struct CatalogueIndex {
    pub main_groups: Table<MainLithologyGroupId, usize>,
    pub lithology_groups: Table<LithologyGroupId, GroupPath>,
    pub lithologies: Table<LithologyId, LithologyPath>,
    pub curve_groups: Table<CurveGroupId, usize>,
    pub curves: Table<CurveId, CurvePath>,
    pub meta_groups: Table<MetaParameterGroupId, MetaGroupPath>,
    pub meta_parameters: Table<MetaParameterId, MetaParameterPath>,
    pub matching: NameMatchingPolicy,
}

impl CatalogueIndex {
    /// Walks all three trees depth-first and records every entity.
    ///
    /// Fails with `DuplicateIdentifier` if an id space already holds an id.
    pub fn build(catalogue: &Catalogue, matching: NameMatchingPolicy) -> CatalogueResult<Self> {
        let mut index = Self {
            matching,
            ..Self::default()
        };

        for (m, main) in catalogue.main_lithology_groups.iter().enumerate() {
            index.main_groups.insert(&main.id, &main.name, m)?;
            for (g, group) in main.groups.iter().enumerate() {
                let path = GroupPath {
                    main: m,
                    chain: vec![g],
                };
                index.add_lithology_group(group, path)?;
            }
        }

        for (g, group) in catalogue.curve_groups.iter().enumerate() {
            index.curve_groups.insert(&group.id, &group.name, g)?;
            for (c, curve) in group.curves.iter().enumerate() {
                let path = CurvePath { group: g, index: c };
                index.curves.insert(&curve.id, &curve.name, path)?;
            }
        }

        for (g, group) in catalogue.meta.groups.iter().enumerate() {
            index.add_meta_group(group, MetaGroupPath(vec![g]))?;
        }

        debug!(
            main_groups = index.main_groups.len(),
            lithology_groups = index.lithology_groups.len(),
            lithologies = index.lithologies.len(),
            curves = index.curves.len(),
            meta_parameters = index.meta_parameters.len(),
            "Built catalogue index"
        );
        Ok(index)
    }

    fn add_lithology_group(
        &mut self,
        group: &LithologyGroup,
        path: GroupPath,
    ) -> CatalogueResult<()> {
        self.lithology_groups.insert(&group.id, &group.name, path.clone())?;
        for (l, lithology) in group.lithologies.iter().enumerate() {
            let position = LithologyPath {
                group: path.clone(),
                index: l,
            };
            self.lithologies.insert(&lithology.id, &lithology.name, position)?;
        }
        for (c, child) in group.groups.iter().enumerate() {
            self.add_lithology_group(child, path.child(c))?;
        }
        Ok(())
    }

    fn add_meta_group(
        &mut self,
        group: &MetaParameterGroup,
        path: MetaGroupPath,
    ) -> CatalogueResult<()> {
        self.meta_groups.insert(&group.id, &group.name, path.clone())?;
        for (p, parameter) in group.parameters.iter().enumerate() {
            let position = MetaParameterPath {
                group: path.clone(),
                index: p,
            };
            self.meta_parameters
                .insert(&parameter.id, &parameter.name, position)?;
        }
        for (c, child) in group.groups.iter().enumerate() {
            self.add_meta_group(child, path.child(c))?;
        }
        Ok(())
    }

    /// Name comparison used for `I`'s kind.
    pub fn matching_for<I: CatalogueId>(&self) -> NameMatching {
        self.matching.for_kind(I::KIND)
    }
}

/// Exactly-one selection over a list query.
pub(crate) fn exactly_one<T>(
    kind: EntityKind,
    token: String,
    mut found: Vec<T>,
) -> CatalogueResult<T> {
    if found.len() > 1 {
        return Err(CatalogueError::Ambiguous {
            kind,
            token,
            count: found.len(),
        });
    }
    found.pop().ok_or(CatalogueError::NotFound { kind, token })
}

// ── Position → entity resolution ─────────────────────────────────

pub(crate) fn lithology_at<'a>(
    catalogue: &'a Catalogue,
    path: &LithologyPath,
) -> Option<(&'a Lithology, &'a LithologyGroup, &'a MainLithologyGroup)> {
    let (main, chain) = path.group.resolve(catalogue)?;
    let group = *chain.last()?;
    let lithology = group.lithologies.get(path.index)?;
    Some((lithology, group, main))
}

pub(crate) fn curve_at<'a>(
    catalogue: &'a Catalogue,
    path: CurvePath,
) -> Option<(&'a Curve, &'a CurveGroup)> {
    let group = catalogue.curve_groups.get(path.group)?;
    Some((group.curves.get(path.index)?, group))
}

pub(crate) fn curve_at_mut(catalogue: &mut Catalogue, path: CurvePath) -> Option<&mut Curve> {
    catalogue
        .curve_groups
        .get_mut(path.group)?
        .curves
        .get_mut(path.index)
}

pub(crate) fn meta_parameter_at<'a>(
    catalogue: &'a Catalogue,
    path: &MetaParameterPath,
) -> Option<(&'a MetaParameter, &'a MetaParameterGroup)> {
    let chain = path.group.resolve(catalogue)?;
    let group = *chain.last()?;
    Some((group.parameters.get(path.index)?, group))
}
