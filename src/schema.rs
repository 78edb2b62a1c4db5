/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! This module contains the type registry of a project: the catalogs of entity,
//! attribute, relation and event type definitions ([`ProjectSchema`]). The registry
//! is a read-only input to the codec; decoded annotations join their display
//! metadata from it by type code.

use sealed::sealed;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::BratError;
use crate::json::{FromJson, ToJson};
use crate::types::*;

/// An entity type definition: a span category annotators can apply, along with
/// the display metadata the annotation surface needs to render it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EntityType {
    /// Machine-readable type code, unique among the entity types of one project
    #[serde(rename = "type")]
    pub type_code: String,

    /// Human-readable display name
    pub name: String,

    /// Labels shown on the annotation surface, longest first
    #[serde(default)]
    pub labels: Vec<String>,

    /// Background colour for rendered spans
    #[serde(rename = "bgColor")]
    pub bg_color: String,
}

/// An attribute type definition. Attributes attach a value from a closed set to
/// another annotation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AttributeType {
    #[serde(rename = "type")]
    pub type_code: String,

    pub name: String,

    /// The permissible values for this attribute
    #[serde(default)]
    pub values: Vec<String>,
}

/// A relation type definition: a directed, role-tagged arc between two annotations.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RelationType {
    #[serde(rename = "type")]
    pub type_code: String,

    pub name: String,

    #[serde(default)]
    pub labels: Vec<String>,

    /// Arc colour
    pub color: String,
}

/// An event type definition. Events are anchored on a trigger span and carry
/// role-tagged links to other annotations.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EventType {
    #[serde(rename = "type")]
    pub type_code: String,

    pub name: String,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(rename = "bgColor")]
    pub bg_color: String,

    /// Type codes of the attributes that may be attached to events of this type
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// The type registry of one project: catalogs of entity, attribute, relation and
/// event type definitions, indexed by type code for O(1) lookup.
///
/// A `ProjectSchema` can only be obtained fully indexed, through
/// [`ProjectSchemaBuilder`]; no partially constructed registry is observable.
/// The codec never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSchema {
    id: String,
    title: String,
    description: String,

    entities: Vec<EntityType>,
    attributes: Vec<AttributeType>,
    relations: Vec<RelationType>,
    events: Vec<EventType>,

    // type code -> index into the vectors above
    #[serde(skip)]
    entity_index: HashMap<String, usize>,
    #[serde(skip)]
    attribute_index: HashMap<String, usize>,
    #[serde(skip)]
    relation_index: HashMap<String, usize>,
    #[serde(skip)]
    event_index: HashMap<String, usize>,
}

impl ProjectSchema {
    /// Returns a new builder, the only way to construct a schema.
    pub fn builder() -> ProjectSchemaBuilder {
        ProjectSchemaBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Look up an entity type by type code
    pub fn entity_type(&self, type_code: &str) -> Option<&EntityType> {
        self.entity_index
            .get(type_code)
            .map(|&i| &self.entities[i])
    }

    /// Look up an attribute type by type code
    pub fn attribute_type(&self, type_code: &str) -> Option<&AttributeType> {
        self.attribute_index
            .get(type_code)
            .map(|&i| &self.attributes[i])
    }

    /// Look up a relation type by type code
    pub fn relation_type(&self, type_code: &str) -> Option<&RelationType> {
        self.relation_index
            .get(type_code)
            .map(|&i| &self.relations[i])
    }

    /// Look up an event type by type code
    pub fn event_type(&self, type_code: &str) -> Option<&EventType> {
        self.event_index.get(type_code).map(|&i| &self.events[i])
    }

    /// All entity types, in registration order
    pub fn entity_types(&self) -> &[EntityType] {
        &self.entities
    }

    pub fn attribute_types(&self) -> &[AttributeType] {
        &self.attributes
    }

    pub fn relation_types(&self) -> &[RelationType] {
        &self.relations
    }

    pub fn event_types(&self) -> &[EventType] {
        &self.events
    }

    /// Does this registry hold no type definitions at all?
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.attributes.is_empty()
            && self.relations.is_empty()
            && self.events.is_empty()
    }
}

/// Build recipe for a [`ProjectSchema`]. This is the deserialisation target for
/// stored project schemas; [`ProjectSchemaBuilder::build()`] verifies the
/// type-code uniqueness invariant and computes the lookup indices.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectSchemaBuilder {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    entities: Vec<EntityType>,
    #[serde(default)]
    attributes: Vec<AttributeType>,
    #[serde(default)]
    relations: Vec<RelationType>,
    #[serde(default)]
    events: Vec<EventType>,
}

impl ProjectSchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.entities.push(entity_type);
        self
    }

    pub fn with_attribute_type(mut self, attribute_type: AttributeType) -> Self {
        self.attributes.push(attribute_type);
        self
    }

    pub fn with_relation_type(mut self, relation_type: RelationType) -> Self {
        self.relations.push(relation_type);
        self
    }

    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.events.push(event_type);
        self
    }

    /// Consumes the builder and produces the indexed registry.
    /// Fails with [`BratError::DuplicateType`] if a type code occurs twice
    /// within the same category.
    pub fn build(self) -> Result<ProjectSchema, BratError> {
        let entity_index = index_types(Type::EntityType, &self.entities)?;
        let attribute_index = index_types(Type::AttributeType, &self.attributes)?;
        let relation_index = index_types(Type::RelationType, &self.relations)?;
        let event_index = index_types(Type::EventType, &self.events)?;
        Ok(ProjectSchema {
            id: self.id,
            title: self.title,
            description: self.description,
            entities: self.entities,
            attributes: self.attributes,
            relations: self.relations,
            events: self.events,
            entity_index,
            attribute_index,
            relation_index,
            event_index,
        })
    }
}

impl TryFrom<ProjectSchemaBuilder> for ProjectSchema {
    type Error = BratError;

    fn try_from(builder: ProjectSchemaBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

// Gives the indexer a uniform handle on the per-category type codes
trait TypeCoded {
    fn code(&self) -> &str;
}

impl TypeCoded for EntityType {
    fn code(&self) -> &str {
        &self.type_code
    }
}

impl TypeCoded for AttributeType {
    fn code(&self) -> &str {
        &self.type_code
    }
}

impl TypeCoded for RelationType {
    fn code(&self) -> &str {
        &self.type_code
    }
}

impl TypeCoded for EventType {
    fn code(&self) -> &str {
        &self.type_code
    }
}

fn index_types<T: TypeCoded>(
    category: Type,
    types: &[T],
) -> Result<HashMap<String, usize>, BratError> {
    let mut index = HashMap::with_capacity(types.len());
    for (i, t) in types.iter().enumerate() {
        if index.insert(t.code().to_string(), i).is_some() {
            return Err(BratError::DuplicateType(category, t.code().to_string()));
        }
    }
    Ok(index)
}

#[sealed]
impl TypeInfo for ProjectSchema {
    fn typeinfo() -> Type {
        Type::ProjectSchema
    }
}

#[sealed]
impl TypeInfo for ProjectSchemaBuilder {
    fn typeinfo() -> Type {
        Type::ProjectSchema
    }
}

impl ToJson for ProjectSchema {}

impl FromJson for ProjectSchemaBuilder {}
