//! Error types for oxmeta
//!
//! Malformed profile bytes never produce an [`Error`]; parsers report truncation
//! through [`crate::Decoded`] instead. Errors are reserved for programmatic misuse.

use thiserror::Error;

/// Result type for oxmeta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxmeta operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An argument was empty, out of range or otherwise unusable
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A value does not match the data type declared for its tag
    #[error("Type mismatch for tag 0x{tag:04X}: expected {expected}")]
    TypeMismatch { tag: u16, expected: String },

    /// The tag is not present in the registry
    #[error("Unknown tag: 0x{0:04X}")]
    UnknownTag(u16),

    /// XML in an XMP packet could not be read or written
    #[error("XML error: {0}")]
    Xml(String),
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(err.to_string())
    }
}
