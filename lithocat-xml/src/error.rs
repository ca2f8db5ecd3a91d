//! Error types for the document codec.

use thiserror::Error;

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors raised while loading or saving a catalogue document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Malformed markup.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute in a start tag.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The writer produced bytes that are not UTF-8.
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The document root is not a catalogue.
    #[error("expected <Catalogue> root element, found <{0}>")]
    UnexpectedRoot(String),

    /// A required child element is absent. `path` names the missing
    /// element, e.g. `Catalogue/LithologyGroup/Lithology/Pattern`.
    #[error("missing required element {path}")]
    MissingElement { path: String },

    /// An element's text could not be read as the expected type.
    #[error("{path} has invalid {expected} value {value:?}")]
    InvalidValue {
        path: String,
        value: String,
        expected: &'static str,
    },

    /// Structural problem not reported by the XML reader.
    #[error("malformed document: {0}")]
    Malformed(String),
}
