use lithocat_types::{MetaParameterGroupId, MetaParameterId};
use serde::{Deserialize, Serialize};

/// A property definition in the schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaParameter {
    pub id: MetaParameterId,
    pub name: String,
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petrel_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petromod_unit: Option<String>,
    pub read_only: bool,
}

impl MetaParameter {
    pub fn new(
        id: MetaParameterId,
        name: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            value_type: value_type.into(),
            default_value: None,
            petrel_template: None,
            petromod_unit: None,
            read_only: false,
        }
    }
}

/// A node of the schema tree: parameters plus nested groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaParameterGroup {
    pub id: MetaParameterGroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(default)]
    pub parameters: Vec<MetaParameter>,
    #[serde(default)]
    pub groups: Vec<MetaParameterGroup>,
}

impl MetaParameterGroup {
    pub fn new(id: MetaParameterGroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            read_only: None,
            parameters: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: MetaParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_group(mut self, group: MetaParameterGroup) -> Self {
        self.groups.push(group);
        self
    }
}

/// Root of the schema tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub groups: Vec<MetaParameterGroup>,
}
