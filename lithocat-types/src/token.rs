//! Identifier tokens: caller-supplied strings that are either an id or a name.

use crate::is_canonical_id;
use std::fmt;

/// A caller-supplied string, split by shape into an id or a name.
///
/// Names never have the canonical id shape, so the split is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierToken<'a> {
    Id(&'a str),
    Name(&'a str),
}

impl<'a> IdentifierToken<'a> {
    /// Classifies a raw token by its shape.
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        if is_canonical_id(token) {
            Self::Id(token)
        } else {
            Self::Name(token)
        }
    }

    /// Returns the raw token text.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Id(s) | Self::Name(s) => s,
        }
    }

    /// Returns true if the token is id-shaped.
    #[must_use]
    pub fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}

impl fmt::Display for IdentifierToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a query or mutation target is named: a typed id handle, or a token
/// that still needs classifying.
///
/// A typed id always matches by id, even when its text is not canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a, I> {
    Id(I),
    Token(&'a str),
}

impl<I: AsRef<str>> Lookup<'_, I> {
    /// Returns the text used to report this lookup in errors.
    pub fn describe(&self) -> String {
        match self {
            Self::Id(id) => id.as_ref().to_owned(),
            Self::Token(token) => (*token).to_owned(),
        }
    }
}

impl<'a, I> From<&'a str> for Lookup<'a, I> {
    fn from(token: &'a str) -> Self {
        Lookup::Token(token)
    }
}

impl<'a, I> From<&'a String> for Lookup<'a, I> {
    fn from(token: &'a String) -> Self {
        Lookup::Token(token.as_str())
    }
}
