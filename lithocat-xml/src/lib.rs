//! Catalogue document codec.
//!
//! Reads and writes the element-tagged catalogue format:
//!
//! - Loading parses the markup into a small element tree, then maps each
//!   element onto the typed model. Child order is irrelevant, unknown
//!   elements are skipped, missing required elements are errors.
//! - Saving writes the model back with two-space indentation, omitting
//!   absent optionals and empty collections. After generic escaping the
//!   `&lt;` and `&gt;` sequences are decoded back to literal angle brackets,
//!   which is how the catalogue files are expected to look on disk.

mod error;
mod reader;
mod tree;
mod writer;

pub use error::{DocumentError, DocumentResult};
pub use reader::{from_xml_str, read_catalogue_file};
pub use writer::{to_xml_string, write_catalogue_file};
