/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! This module contains [`BratError`], the error type used throughout the crate.

use crate::types::*;

use std::error::Error;
use std::fmt;

// ------------------------------ ERROR DEFINITIONS & IMPLEMENTATIONS -------------------------------------------------------------

#[derive(Debug)]
pub enum BratError {
    /// A wire tuple references a type code that does not exist in the project schema.
    /// Carries the category, the offending type code and the index of the wire tuple.
    /// Fatal to the decode call: defaulting silently would render wrong colours/labels
    /// and corrupt the document on re-encode.
    SchemaMismatch(Type, String, usize),

    /// The wire document violates a structural invariant that the tuple types
    /// themselves can not enforce, such as trigger and event lists of unequal length.
    MalformedWire(String),

    /// A type code was registered twice within the same category of one project schema.
    DuplicateType(Type, String),

    /// An item is not present in a store. Carries the type and the identifier that missed.
    NotFound(Type, String),

    /// A document has no identifier yet and identifier generation is disabled.
    NoId(&'static str),

    /// JSON deserialisation failed. The path inside the error locates the offending
    /// element (e.g. a wire tuple of the wrong arity). Carries the type being read
    /// and a context message.
    JsonError(
        serde_path_to_error::Error<serde_json::Error>,
        Type,
        &'static str,
    ),

    /// JSON serialisation failed
    SerializationError(String),

    IOError(std::io::Error, &'static str),
}

impl From<&BratError> for String {
    /// Returns the error message as a String
    fn from(error: &BratError) -> String {
        match error {
            BratError::SchemaMismatch(category, type_code, index) => format!(
                "SchemaMismatch: no {} with type code '{}' in the project schema (wire tuple #{})",
                category, type_code, index
            ),
            BratError::MalformedWire(msg) => format!("MalformedWire: {}", msg),
            BratError::DuplicateType(category, type_code) => format!(
                "DuplicateType: {} with type code '{}' already registered in this project",
                category, type_code
            ),
            BratError::NotFound(category, id) => {
                format!("NotFound: no {} with id '{}'", category, id)
            }
            BratError::NoId(msg) => format!("NoId: document has no identifier ({})", msg),
            BratError::JsonError(err, category, msg) => format!(
                "JsonError: error parsing {} at {}: {} ({})",
                category,
                err.path(),
                err.inner(),
                msg
            ),
            BratError::SerializationError(msg) => format!("SerializationError: {}", msg),
            BratError::IOError(err, msg) => format!("IOError: {} ({})", err, msg),
        }
    }
}

impl fmt::Display for BratError {
    /// Formats the error message for printing
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let errmsg: String = String::from(self);
        write!(f, "[BratError] {}", errmsg)
    }
}

impl Error for BratError {}
