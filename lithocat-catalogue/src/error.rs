//! Error types for catalogue queries and mutations.

use lithocat_types::EntityKind;
use lithocat_xml::DocumentError;
use thiserror::Error;

/// Result type for catalogue operations.
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Errors surfaced by the resolution engine and the mutation API.
///
/// Nothing in this crate swallows one of these; every lookup failure reaches
/// the caller.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The source document could not be loaded or saved.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// An exactly-one query found nothing, or a weak reference dangles.
    #[error("no {kind} matches {token:?}")]
    NotFound { kind: EntityKind, token: String },

    /// An exactly-one query found several candidates.
    #[error("{count} {kind} entries match {token:?}; use the unique id instead")]
    Ambiguous {
        kind: EntityKind,
        token: String,
        count: usize,
    },

    /// The lithology has no parameter for the requested meta parameter.
    #[error("lithology {lithology:?} has no parameter {parameter:?}")]
    ParameterNotFound { lithology: String, parameter: String },

    /// An id space already holds the id, or id minting ran out of attempts.
    #[error("duplicate {kind} id {id:?}")]
    DuplicateIdentifier { kind: EntityKind, id: String },

    /// An update does not fit the parameter's current shape.
    #[error("invalid value for parameter {parameter:?}: {reason}")]
    InvalidValue { parameter: String, reason: String },

    /// The configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl CatalogueError {
    /// True for every "nothing matched" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::ParameterNotFound { .. })
    }

    pub(crate) fn not_found(kind: EntityKind, token: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            token: token.into(),
        }
    }
}
