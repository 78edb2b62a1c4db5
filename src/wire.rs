/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! This module contains the wire document model: the compact, positional,
//! array-encoded representation of one document's annotations as persisted and
//! consumed by the annotation surface. Each tuple is a serde tuple struct, so it
//! maps 1:1 onto a JSON array and the position of every field is enforced by
//! construction. Field order is load-bearing and must never be reinterpreted.

use sealed::sealed;
use serde::{Deserialize, Serialize};

use crate::json::{FromJson, ToJson};
use crate::types::*;

/// Wire entity tuple: `[local_id, type_code, [[begin, end], ...]]`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireEntity(pub String, pub String, pub Vec<Span>);

impl WireEntity {
    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn type_code(&self) -> &str {
        &self.1
    }

    pub fn locations(&self) -> &[Span] {
        &self.2
    }
}

/// Wire attribute tuple: `[local_id, type_code, target_id]`. The target is a
/// weak reference to another annotation in the same document; it is carried
/// verbatim and never validated here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireAttribute(pub String, pub String, pub String);

impl WireAttribute {
    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn type_code(&self) -> &str {
        &self.1
    }

    pub fn target_id(&self) -> &str {
        &self.2
    }
}

/// One endpoint of a wire relation: `[role, target_id]`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireArg(pub String, pub String);

impl WireArg {
    pub fn role(&self) -> &str {
        &self.0
    }

    pub fn target_id(&self) -> &str {
        &self.1
    }
}

/// Wire relation tuple: `[local_id, type_code, [[role_a, id_a], [role_b, id_b]]]`.
/// The first endpoint is the `from` side, the second the `to` side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireRelation(pub String, pub String, pub (WireArg, WireArg));

impl WireRelation {
    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn type_code(&self) -> &str {
        &self.1
    }

    pub fn from(&self) -> &WireArg {
        &self.2 .0
    }

    pub fn to(&self) -> &WireArg {
        &self.2 .1
    }
}

/// Wire event trigger tuple: `[trigger_id, type_code, [[begin, end], ...]]`.
/// Same shape as an entity; the trigger anchors an event to a text span and
/// carries the event's type code (events have none of their own).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireTrigger(pub String, pub String, pub Vec<Span>);

impl WireTrigger {
    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn type_code(&self) -> &str {
        &self.1
    }

    pub fn locations(&self) -> &[Span] {
        &self.2
    }
}

/// One role-tagged link of a wire event: `[link_type, target_id]`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireLink(pub String, pub String);

impl WireLink {
    pub fn link_type(&self) -> &str {
        &self.0
    }

    pub fn target_id(&self) -> &str {
        &self.1
    }
}

/// Wire event tuple: `[event_id, trigger_id, [[link_type, target_id], ...]]`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireEvent(pub String, pub String, pub Vec<WireLink>);

impl WireEvent {
    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn trigger_id(&self) -> &str {
        &self.1
    }

    pub fn links(&self) -> &[WireLink] {
        &self.2
    }
}

/// The wire representation of one annotated document: the free text plus the
/// positional annotation tuples.
///
/// The `triggers` and `events` lists are parallel and of equal length; index
/// *i* of one corresponds to index *i* of the other. This coupling exists only
/// on the wire; the in-memory model pairs each event with its trigger
/// explicitly (see [`crate::codec`]).
///
/// The companion fields (`comments`, `messages`, `modifications`,
/// `normalizations`, `source_files`, `ctime`) are required by the annotation
/// surface's document format; they are emitted as placeholders and never
/// populated meaningfully here.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct WireDocument {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub entities: Vec<WireEntity>,

    #[serde(default)]
    pub attributes: Vec<WireAttribute>,

    #[serde(default)]
    pub relations: Vec<WireRelation>,

    #[serde(default)]
    pub triggers: Vec<WireTrigger>,

    #[serde(default)]
    pub events: Vec<WireEvent>,

    #[serde(default)]
    pub comments: Vec<serde_json::Value>,

    /// Creation time in seconds since the epoch (with fractional part)
    #[serde(default)]
    pub ctime: f64,

    #[serde(default)]
    pub messages: Vec<serde_json::Value>,

    #[serde(default)]
    pub modifications: Vec<serde_json::Value>,

    #[serde(default)]
    pub normalizations: Vec<serde_json::Value>,

    #[serde(default)]
    pub source_files: Vec<String>,
}

impl WireDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[sealed]
impl TypeInfo for WireDocument {
    fn typeinfo() -> Type {
        Type::WireDocument
    }
}

impl ToJson for WireDocument {}

impl FromJson for WireDocument {}
