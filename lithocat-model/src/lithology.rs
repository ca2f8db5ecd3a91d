use crate::ParameterValue;
use lithocat_types::{
    LithologyGroupId, LithologyId, MainLithologyGroupId, MetaParameterGroupId, MetaParameterId,
};
use serde::{Deserialize, Serialize};

/// A property value attached to a lithology.
///
/// `value` is kept as raw text. Whether it is a literal or a curve
/// reference is derived from its shape, see [`Parameter::value_kind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub meta_parameter_id: MetaParameterId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Parameter {
    pub fn new(meta_parameter_id: MetaParameterId, value: impl Into<String>) -> Self {
        Self {
            meta_parameter_id,
            value: Some(value.into()),
        }
    }

    /// Classifies the raw value as a literal or a curve reference.
    pub fn value_kind(&self) -> ParameterValue<'_> {
        ParameterValue::classify(self.value.as_deref())
    }

    /// True when the raw value is id-shaped and therefore names a curve.
    pub fn is_curve(&self) -> bool {
        self.value_kind().is_curve()
    }
}

/// Parameters of one lithology that belong to the same schema group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterGroup {
    pub meta_parameter_group_id: MetaParameterGroupId,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl ParameterGroup {
    pub fn new(meta_parameter_group_id: MetaParameterGroupId) -> Self {
        Self {
            meta_parameter_group_id,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Returns the parameter referencing the given meta parameter.
    pub fn parameter(&self, meta_parameter_id: &MetaParameterId) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| &p.meta_parameter_id == meta_parameter_id)
    }
}

/// One weighted ingredient of a mixed lithology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LithologyComponent {
    pub lithology_id: LithologyId,
    pub fraction: f64,
}

/// Rule expressing a lithology as a blend of other lithologies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mixing {
    pub thermal_conductivity: String,
    pub permeability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capillary_entry_pressure: Option<String>,
    pub read_only: bool,
    #[serde(default)]
    pub components: Vec<LithologyComponent>,
}

/// A rock-type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lithology {
    pub id: LithologyId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub read_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petromod_id: Option<String>,
    pub pattern: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixing: Option<Mixing>,
    #[serde(default)]
    pub parameter_groups: Vec<ParameterGroup>,
}

impl Lithology {
    pub fn new(
        id: LithologyId,
        name: impl Into<String>,
        pattern: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            creator: None,
            read_only: false,
            petromod_id: None,
            pattern: pattern.into(),
            color: color.into(),
            mixing: None,
            parameter_groups: Vec::new(),
        }
    }

    pub fn with_parameter_group(mut self, group: ParameterGroup) -> Self {
        self.parameter_groups.push(group);
        self
    }

    /// Returns the first parameter referencing the given meta parameter,
    /// searching parameter groups in order.
    pub fn parameter(&self, meta_parameter_id: &MetaParameterId) -> Option<&Parameter> {
        self.parameter_groups
            .iter()
            .find_map(|g| g.parameter(meta_parameter_id))
    }

    pub fn parameter_mut(&mut self, meta_parameter_id: &MetaParameterId) -> Option<&mut Parameter> {
        self.parameter_groups
            .iter_mut()
            .flat_map(|g| g.parameters.iter_mut())
            .find(|p| &p.meta_parameter_id == meta_parameter_id)
    }

    /// Iterates every parameter of every group.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameter_groups.iter().flat_map(|g| g.parameters.iter())
    }
}

/// A lithology group. Groups nest to any depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LithologyGroup {
    pub id: LithologyGroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub read_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petromod_id: Option<String>,
    #[serde(default)]
    pub groups: Vec<LithologyGroup>,
    #[serde(default)]
    pub lithologies: Vec<Lithology>,
}

impl LithologyGroup {
    pub fn new(id: LithologyGroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            creator: None,
            read_only: false,
            petromod_id: None,
            groups: Vec::new(),
            lithologies: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: LithologyGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn with_lithology(mut self, lithology: Lithology) -> Self {
        self.lithologies.push(lithology);
        self
    }

    /// Number of lithologies in this group and all nested groups.
    pub fn lithology_count(&self) -> usize {
        self.lithologies.len()
            + self
                .groups
                .iter()
                .map(LithologyGroup::lithology_count)
                .sum::<usize>()
    }
}

/// Root-level grouping of lithology groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainLithologyGroup {
    pub id: MainLithologyGroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub read_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petromod_id: Option<String>,
    #[serde(default)]
    pub groups: Vec<LithologyGroup>,
}

impl MainLithologyGroup {
    pub fn new(id: MainLithologyGroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            creator: None,
            read_only: false,
            petromod_id: None,
            groups: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: LithologyGroup) -> Self {
        self.groups.push(group);
        self
    }
}
