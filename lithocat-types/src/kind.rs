use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of entity that carry an identifier.
///
/// Id uniqueness is scoped per kind: a lithology and a curve may share an
/// id, two lithologies may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    MainLithologyGroup,
    LithologyGroup,
    Lithology,
    CurveGroup,
    Curve,
    MetaParameterGroup,
    MetaParameter,
}

impl EntityKind {
    /// All kinds, in catalogue order.
    pub const ALL: [EntityKind; 7] = [
        Self::MainLithologyGroup,
        Self::LithologyGroup,
        Self::Lithology,
        Self::CurveGroup,
        Self::Curve,
        Self::MetaParameterGroup,
        Self::MetaParameter,
    ];

    /// Returns the element name used for this kind in catalogue documents.
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::MainLithologyGroup | Self::LithologyGroup => "LithologyGroup",
            Self::Lithology => "Lithology",
            Self::CurveGroup => "CurveGroup",
            Self::Curve => "Curve",
            Self::MetaParameterGroup => "MetaParameterGroup",
            Self::MetaParameter => "MetaParameter",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MainLithologyGroup => "main lithology group",
            Self::LithologyGroup => "lithology group",
            Self::Lithology => "lithology",
            Self::CurveGroup => "curve group",
            Self::Curve => "curve",
            Self::MetaParameterGroup => "meta parameter group",
            Self::MetaParameter => "meta parameter",
        };
        f.write_str(label)
    }
}
