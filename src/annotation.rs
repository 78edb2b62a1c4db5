/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! This module contains the enriched annotation model: the strongly-typed
//! in-memory representation of a document's annotations used for editing and
//! rendering. Identity fields come from the wire document; display fields are a
//! point-in-time join against the owning project's [`crate::ProjectSchema`] and
//! must be refreshed (by re-decoding) if the registry changes.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::*;

/// An annotated span of text, enriched with the display metadata of its entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityAnnotation {
    /// Identifier, unique within the owning document
    pub id: String,

    /// Display name, joined from the registry
    pub name: String,

    pub type_code: String,

    pub labels: Vec<String>,

    pub bg_color: String,

    /// The text spans this entity covers (discontinuous entities have several)
    pub locations: Vec<Span>,
}

/// An attribute attached to another annotation, enriched with its type's
/// permissible values.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeAnnotation {
    pub id: String,

    pub name: String,

    pub type_code: String,

    /// Attribute types carry no labels in the registry; this stays empty after
    /// a decode and exists for symmetry with the other annotation kinds.
    pub labels: Vec<String>,

    /// All permissible values of the attribute type
    pub values: Vec<String>,

    /// Weak reference to the annotation this attribute is attached to.
    /// Not validated to resolve; see [`AnnotatedDocument::dangling_references`].
    pub target: String,
}

/// One endpoint of a relation: a weak reference plus the role the referenced
/// annotation plays in the relation.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationEndpoint {
    pub id: String,
    pub role: String,
}

/// A role-tagged arc between two annotations, enriched with its type's display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationAnnotation {
    pub id: String,

    pub type_code: String,

    pub labels: Vec<String>,

    pub color: String,

    pub from: RelationEndpoint,

    pub to: RelationEndpoint,
}

/// One role-tagged link from an event to another annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct EventLink {
    /// Weak reference to the linked annotation
    pub id: String,
    pub link_type: String,
}

/// An event: a trigger span plus role-tagged links, enriched with the display
/// metadata of its event type. The type code is the trigger's; events carry
/// none of their own on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct EventAnnotation {
    pub id: String,

    /// Identifier of the trigger span anchoring this event
    pub trigger_id: String,

    pub name: String,

    pub type_code: String,

    pub labels: Vec<String>,

    pub bg_color: String,

    /// The text spans of the trigger
    pub locations: Vec<Span>,

    /// Type codes of the attributes that may be attached to this event
    pub attributes: Vec<String>,

    /// Role-tagged links to other annotations, in wire order
    pub links: Vec<EventLink>,
}

/// A reference to any of the four annotation kinds. Exhaustive matching over
/// this enum is how the codec and descriptor builder handle the kinds uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Annotation<'a> {
    Entity(&'a EntityAnnotation),
    Attribute(&'a AttributeAnnotation),
    Relation(&'a RelationAnnotation),
    Event(&'a EventAnnotation),
}

impl<'a> Annotation<'a> {
    /// The document-local identifier of the annotation
    pub fn id(&self) -> &'a str {
        match self {
            Self::Entity(entity) => &entity.id,
            Self::Attribute(attribute) => &attribute.id,
            Self::Relation(relation) => &relation.id,
            Self::Event(event) => &event.id,
        }
    }

    /// The type code of the annotation
    pub fn type_code(&self) -> &'a str {
        match self {
            Self::Entity(entity) => &entity.type_code,
            Self::Attribute(attribute) => &attribute.type_code,
            Self::Relation(relation) => &relation.type_code,
            Self::Event(event) => &event.type_code,
        }
    }

    /// The category of the annotation, as a [`Type`]
    pub fn category(&self) -> Type {
        match self {
            Self::Entity(_) => Type::EntityType,
            Self::Attribute(_) => Type::AttributeType,
            Self::Relation(_) => Type::RelationType,
            Self::Event(_) => Type::EventType,
        }
    }
}

/// A document under annotation: its metadata, its free text, and its enriched
/// annotations. This is the model the editing session works on; it is decoded
/// from a wire document at the start of a session and re-encoded on save.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedDocument {
    /// Identifier in the document store. `None` until first saved.
    pub document_id: Option<String>,

    /// Identifier of the owning project
    pub project_id: String,

    pub title: String,

    /// The full text being annotated
    pub text: String,

    /// Creation time, round-tripped through the wire `ctime` field
    pub ctime: DateTime<Utc>,

    pub entities: Vec<EntityAnnotation>,
    pub attributes: Vec<AttributeAnnotation>,
    pub relations: Vec<RelationAnnotation>,
    pub events: Vec<EventAnnotation>,
}

impl AnnotatedDocument {
    /// Creates a new, empty annotated document with the current time as creation time.
    pub fn new(
        title: impl Into<String>,
        project_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            document_id: None,
            project_id: project_id.into(),
            title: title.into(),
            text: text.into(),
            ctime: Utc::now(),
            entities: Vec::new(),
            attributes: Vec::new(),
            relations: Vec::new(),
            events: Vec::new(),
        }
    }

    ///Builder pattern to set the document identifier
    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    ///Builder pattern to set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Iterates over all annotations of the document, entities first, then
    /// attributes, relations and events.
    pub fn annotations(&self) -> impl Iterator<Item = Annotation<'_>> {
        self.entities
            .iter()
            .map(Annotation::Entity)
            .chain(self.attributes.iter().map(Annotation::Attribute))
            .chain(self.relations.iter().map(Annotation::Relation))
            .chain(self.events.iter().map(Annotation::Event))
    }

    /// Resolves a document-local identifier to the annotation carrying it,
    /// or `None` if nothing in this document does. Trigger identifiers resolve
    /// to their event.
    pub fn get(&self, id: &str) -> Option<Annotation<'_>> {
        self.annotations()
            .find(|annotation| annotation.id() == id)
            .or_else(|| {
                self.events
                    .iter()
                    .find(|event| event.trigger_id == id)
                    .map(Annotation::Event)
            })
    }

    /// Validation pass over the weak references held by attributes, relations
    /// and event links. Returns `(holder id, missing target id)` pairs for every
    /// reference that does not resolve within this document. Dangling references
    /// are representable by design and are never an error to the codec itself.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        let mut dangling = Vec::new();
        for attribute in self.attributes.iter() {
            if self.get(&attribute.target).is_none() {
                dangling.push((attribute.id.as_str(), attribute.target.as_str()));
            }
        }
        for relation in self.relations.iter() {
            for endpoint in [&relation.from, &relation.to] {
                if self.get(&endpoint.id).is_none() {
                    dangling.push((relation.id.as_str(), endpoint.id.as_str()));
                }
            }
        }
        for event in self.events.iter() {
            for link in event.links.iter() {
                if self.get(&link.id).is_none() {
                    dangling.push((event.id.as_str(), link.id.as_str()));
                }
            }
        }
        dangling
    }
}

/// Converts a wire `ctime` (seconds since the epoch, with fractional part) to a timestamp.
/// Values outside chrono's representable range fall back to the epoch.
pub(crate) fn ctime_to_datetime(ctime: f64) -> DateTime<Utc> {
    let seconds = ctime.trunc() as i64;
    let nanos = (ctime.fract() * 1e9) as u32;
    match Utc.timestamp_opt(seconds, nanos) {
        chrono::LocalResult::Single(ts) => ts,
        _ => DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Converts a timestamp back to the wire `ctime` representation.
pub(crate) fn datetime_to_ctime(ts: DateTime<Utc>) -> f64 {
    ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_nanos()) / 1e9
}
