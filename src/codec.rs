/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! This module contains the annotation codec: the bidirectional, lossless
//! transformation between the positional wire representation of a document's
//! annotations ([`WireDocument`]) and the schema-enriched in-memory model
//! ([`AnnotatedDocument`]).
//!
//! Both directions are pure functions: no I/O, no hidden state, no mutation of
//! the registry. Fetching and storing wire documents is the caller's business
//! (see [`crate::store`]); the codec never initiates either.
//!
//! [`decode`] joins every wire tuple against the project's type registry by
//! type code. A type code absent from the registry aborts the whole decode with
//! [`BratError::SchemaMismatch`]; defaulting silently would render wrong
//! colours/labels and corrupt the document on the next save. Weak references
//! (attribute targets, relation endpoints, event links) are carried verbatim
//! and deliberately not resolved.
//!
//! [`encode`] is the inverse for identity fields. Display metadata is dropped,
//! not written back: the wire format carries only type codes and identity, and
//! the metadata is reconstructible by re-decoding against the (possibly
//! updated) registry.

use crate::annotation::*;
use crate::error::BratError;
use crate::schema::ProjectSchema;
use crate::types::*;
use crate::wire::*;

/// Decodes a wire document into the enriched annotation model, joining display
/// metadata from the project schema.
///
/// The document metadata that does not travel on the wire (title, document
/// identifier) is left unset; attach it with [`AnnotatedDocument::with_title`]
/// and [`AnnotatedDocument::with_document_id`]. The owning project is taken
/// from the schema.
pub fn decode(wire: &WireDocument, schema: &ProjectSchema) -> Result<AnnotatedDocument, BratError> {
    let mut entities = Vec::with_capacity(wire.entities.len());
    for (i, wire_entity) in wire.entities.iter().enumerate() {
        let entity_type = schema.entity_type(wire_entity.type_code()).ok_or_else(|| {
            BratError::SchemaMismatch(Type::EntityType, wire_entity.type_code().to_string(), i)
        })?;
        entities.push(EntityAnnotation {
            id: wire_entity.id().to_string(),
            name: entity_type.name.clone(),
            type_code: entity_type.type_code.clone(),
            labels: entity_type.labels.clone(),
            bg_color: entity_type.bg_color.clone(),
            locations: wire_entity.locations().to_vec(),
        });
    }

    let mut attributes = Vec::with_capacity(wire.attributes.len());
    for (i, wire_attribute) in wire.attributes.iter().enumerate() {
        let attribute_type = schema
            .attribute_type(wire_attribute.type_code())
            .ok_or_else(|| {
                BratError::SchemaMismatch(
                    Type::AttributeType,
                    wire_attribute.type_code().to_string(),
                    i,
                )
            })?;
        attributes.push(AttributeAnnotation {
            id: wire_attribute.id().to_string(),
            name: attribute_type.name.clone(),
            type_code: attribute_type.type_code.clone(),
            labels: Vec::new(),
            values: attribute_type.values.clone(),
            target: wire_attribute.target_id().to_string(),
        });
    }

    let mut relations = Vec::with_capacity(wire.relations.len());
    for (i, wire_relation) in wire.relations.iter().enumerate() {
        let relation_type = schema
            .relation_type(wire_relation.type_code())
            .ok_or_else(|| {
                BratError::SchemaMismatch(
                    Type::RelationType,
                    wire_relation.type_code().to_string(),
                    i,
                )
            })?;
        relations.push(RelationAnnotation {
            id: wire_relation.id().to_string(),
            type_code: relation_type.type_code.clone(),
            labels: relation_type.labels.clone(),
            color: relation_type.color.clone(),
            from: RelationEndpoint {
                id: wire_relation.from().target_id().to_string(),
                role: wire_relation.from().role().to_string(),
            },
            to: RelationEndpoint {
                id: wire_relation.to().target_id().to_string(),
                role: wire_relation.to().role().to_string(),
            },
        });
    }

    // Triggers and events are parallel lists on the wire, paired by position.
    // We walk the trigger list; the type code lives on the trigger, the event
    // tuple contributes only its own id and links.
    if wire.triggers.len() != wire.events.len() {
        return Err(BratError::MalformedWire(format!(
            "trigger and event lists must be parallel, got {} triggers and {} events",
            wire.triggers.len(),
            wire.events.len()
        )));
    }
    let mut events = Vec::with_capacity(wire.events.len());
    for (i, (wire_trigger, wire_event)) in wire.triggers.iter().zip(wire.events.iter()).enumerate()
    {
        let event_type = schema.event_type(wire_trigger.type_code()).ok_or_else(|| {
            BratError::SchemaMismatch(Type::EventType, wire_trigger.type_code().to_string(), i)
        })?;
        events.push(EventAnnotation {
            id: wire_event.id().to_string(),
            trigger_id: wire_trigger.id().to_string(),
            name: event_type.name.clone(),
            type_code: event_type.type_code.clone(),
            labels: event_type.labels.clone(),
            bg_color: event_type.bg_color.clone(),
            locations: wire_trigger.locations().to_vec(),
            attributes: event_type.attributes.clone(),
            links: wire_event
                .links()
                .iter()
                .map(|link| EventLink {
                    id: link.target_id().to_string(),
                    link_type: link.link_type().to_string(),
                })
                .collect(),
        });
    }

    Ok(AnnotatedDocument {
        document_id: None,
        project_id: schema.id().to_string(),
        title: String::new(),
        text: wire.text.clone(),
        ctime: ctime_to_datetime(wire.ctime),
        entities,
        attributes,
        relations,
        events,
    })
}

/// Encodes the annotation model back to its wire representation.
///
/// Each enriched event is marshalled back into one trigger tuple and one event
/// tuple, emitted at the same position in the two parallel lists. The companion
/// fields the annotation surface expects are emitted as placeholders.
pub fn encode(model: &AnnotatedDocument) -> WireDocument {
    let mut triggers = Vec::with_capacity(model.events.len());
    let mut events = Vec::with_capacity(model.events.len());
    for event in model.events.iter() {
        triggers.push(WireTrigger(
            event.trigger_id.clone(),
            event.type_code.clone(),
            event.locations.clone(),
        ));
        events.push(WireEvent(
            event.id.clone(),
            event.trigger_id.clone(),
            event
                .links
                .iter()
                .map(|link| WireLink(link.link_type.clone(), link.id.clone()))
                .collect(),
        ));
    }

    WireDocument {
        text: model.text.clone(),
        entities: model
            .entities
            .iter()
            .map(|entity| {
                WireEntity(
                    entity.id.clone(),
                    entity.type_code.clone(),
                    entity.locations.clone(),
                )
            })
            .collect(),
        attributes: model
            .attributes
            .iter()
            .map(|attribute| {
                WireAttribute(
                    attribute.id.clone(),
                    attribute.type_code.clone(),
                    attribute.target.clone(),
                )
            })
            .collect(),
        relations: model
            .relations
            .iter()
            .map(|relation| {
                WireRelation(
                    relation.id.clone(),
                    relation.type_code.clone(),
                    (
                        WireArg(relation.from.role.clone(), relation.from.id.clone()),
                        WireArg(relation.to.role.clone(), relation.to.id.clone()),
                    ),
                )
            })
            .collect(),
        triggers,
        events,
        comments: Vec::new(),
        ctime: datetime_to_ctime(model.ctime),
        messages: Vec::new(),
        modifications: Vec::new(),
        normalizations: Vec::new(),
        source_files: Vec::new(),
    }
}

impl AnnotatedDocument {
    /// Shortcut for [`decode`]
    pub fn from_wire(
        wire: &WireDocument,
        schema: &ProjectSchema,
    ) -> Result<AnnotatedDocument, BratError> {
        decode(wire, schema)
    }

    /// Shortcut for [`encode`]
    pub fn to_wire(&self) -> WireDocument {
        encode(self)
    }
}
