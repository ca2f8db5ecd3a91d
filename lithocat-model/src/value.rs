//! Parameter value classification.
//!
//! A parameter's raw text is either a literal or, when it has the canonical
//! id shape, the id of a curve. [`ParameterValue::classify`] is the only
//! place that decision is made.

use lithocat_types::{CurveId, is_canonical_id};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two shapes a raw parameter value can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue<'a> {
    /// Literal text, to be read as a number when it parses as one.
    Literal(&'a str),
    /// Reference to a curve by id.
    CurveRef(CurveId),
}

impl<'a> ParameterValue<'a> {
    /// Classifies a raw value by shape. An absent value is an empty literal.
    pub fn classify(raw: Option<&'a str>) -> Self {
        match raw {
            Some(text) if is_canonical_id(text) => Self::CurveRef(CurveId::new(text)),
            Some(text) => Self::Literal(text),
            None => Self::Literal(""),
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(self, Self::CurveRef(_))
    }
}

/// A literal parameter value after numeric interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Literal {
    /// Reads `raw` as an integer, then as a float, else keeps the text.
    pub fn parse(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            Self::Integer(i)
        } else if let Ok(f) = raw.parse::<f64>() {
            Self::Float(f)
        } else {
            Self::Text(raw.to_owned())
        }
    }

    /// Numeric view of the literal, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
