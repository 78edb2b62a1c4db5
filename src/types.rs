/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! This module contains lower-level types that are shared between the other modules:
//! text spans, the [`Type`] enum used for introspection and error reporting, and the
//! [`DataFormat`] enum for serialisation.

use sealed::sealed;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;

/// A contiguous character range inside a document's text, 0-indexed and
/// end-exclusive. Serialises as a two-element JSON array `[begin, end]`,
/// which is the form the annotation surface expects inside location lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Span(pub usize, pub usize);

impl Span {
    pub fn new(begin: usize, end: usize) -> Self {
        Self(begin, end)
    }

    pub fn begin(&self) -> usize {
        self.0
    }

    pub fn end(&self) -> usize {
        self.1
    }

    /// Length of the spanned text in characters
    pub fn len(&self) -> usize {
        self.1.saturating_sub(self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.1 <= self.0
    }
}

impl From<(usize, usize)> for Span {
    fn from((begin, end): (usize, usize)) -> Self {
        Self(begin, end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// Used to identify the type of a structure, mostly in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    EntityType,
    AttributeType,
    RelationType,
    EventType,
    ProjectSchema,
    WireDocument,
    AnnotatedDocument,
    CollectionDescriptor,
    Config,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EntityType => write!(f, "EntityType"),
            Self::AttributeType => write!(f, "AttributeType"),
            Self::RelationType => write!(f, "RelationType"),
            Self::EventType => write!(f, "EventType"),
            Self::ProjectSchema => write!(f, "ProjectSchema"),
            Self::WireDocument => write!(f, "WireDocument"),
            Self::AnnotatedDocument => write!(f, "AnnotatedDocument"),
            Self::CollectionDescriptor => write!(f, "CollectionDescriptor"),
            Self::Config => write!(f, "Config"),
        }
    }
}

/// Can be used to obtain the [`Type`] of a structure.
/// This is a sealed trait, not implementable outside this crate.
#[sealed(pub(crate))]
pub trait TypeInfo {
    fn typeinfo() -> Type;
}

/// Determines the serialisation format. Only JSON is supported, either
/// pretty-printed or compact. The annotation surface exchanges compact JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "@type")]
pub enum DataFormat {
    Json { compact: bool },
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Json { .. } => write!(f, "json"),
        }
    }
}

/// Write a debug message to standard error output, only when debug mode is
/// enabled in the configuration. The message is produced lazily via a closure.
pub(crate) fn debug<F>(config: &Config, message: F)
where
    F: FnOnce() -> String,
{
    if config.debug() {
        eprintln!("[bratdoc debug] {}", message());
    }
}
