/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! This module contains the [`CollectionDescriptor`]: a read-only projection of
//! a project's type registry shaped for driving the annotation surface's
//! palette and legend, plus the static configuration (search-engine link
//! templates, category display names) the surface expects alongside it.

use sealed::sealed;
use serde::Serialize;

use crate::json::ToJson;
use crate::schema::ProjectSchema;
use crate::types::*;

/// Search engines offered by the annotation surface for looking up a selected
/// span; `%s` is substituted with the span text.
pub const SEARCH_ENGINES: &[(&str, &str)] = &[
    ("Google", "http://www.google.com/search?q=%s"),
    (
        "Wikipedia",
        "http://en.wikipedia.org/wiki/Special:Search?search=%s",
    ),
    (
        "UniProt",
        "http://www.uniprot.org/uniprot/?sort=score&query=%s",
    ),
    ("EntrezGene", "http://www.ncbi.nlm.nih.gov/gene?term=%s"),
    (
        "GeneOntology",
        "http://amigo.geneontology.org/cgi-bin/amigo/search.cgi?search_query=%s&action=new-search&search_constraint=term",
    ),
    ("ALC", "http://eow.alc.co.jp/%s"),
];

// Rendering defaults the annotation surface expects on every type entry
const BORDER_COLOR: &str = "darken";
const DASH_ARRAY: &str = "3,3";

/// Fixed display names for the four annotation categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiNames {
    pub entities: String,
    pub events: String,
    pub relations: String,
    pub attributes: String,
}

impl Default for UiNames {
    fn default() -> Self {
        Self {
            entities: "entities".to_string(),
            events: "events".to_string(),
            relations: "relations".to_string(),
            attributes: "attributes".to_string(),
        }
    }
}

/// Palette entry for an entity type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityTypeDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub type_code: String,

    pub labels: Vec<String>,

    #[serde(rename = "bgColor")]
    pub bg_color: String,

    #[serde(rename = "borderColor")]
    pub border_color: String,

    pub unused: bool,
}

/// Palette entry for an event type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventTypeDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub type_code: String,

    pub labels: Vec<String>,

    #[serde(rename = "bgColor")]
    pub bg_color: String,

    #[serde(rename = "borderColor")]
    pub border_color: String,

    /// Type codes of the attributes allowed on events of this type
    pub attributes: Vec<String>,

    pub unused: bool,
}

/// Legend entry for a relation type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationTypeDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub type_code: String,

    pub labels: Vec<String>,

    #[serde(rename = "dashArray")]
    pub dash_array: String,

    pub color: String,
}

/// Legend entry for an attribute type. All permissible values are exposed;
/// which one (or which glyph) to show is the consumer's choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeTypeDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub type_code: String,

    pub labels: Vec<String>,

    pub values: Vec<String>,

    pub unused: bool,
}

/// A client-facing description of one project's type system: everything the
/// annotation surface needs to configure its palette and legend. Built from a
/// [`ProjectSchema`] with [`CollectionDescriptor::build`]; independent of any
/// single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionDescriptor {
    pub messages: Vec<serde_json::Value>,

    /// `(name, link template)` pairs, serialised as an array of pairs
    pub search_config: Vec<(String, String)>,

    pub disambiguator_config: Vec<serde_json::Value>,

    pub unconfigured_types: Vec<serde_json::Value>,

    pub ui_names: UiNames,

    pub entity_types: Vec<EntityTypeDescriptor>,

    pub event_types: Vec<EventTypeDescriptor>,

    pub relation_types: Vec<RelationTypeDescriptor>,

    pub entity_attribute_types: Vec<AttributeTypeDescriptor>,

    pub event_attribute_types: Vec<AttributeTypeDescriptor>,

    pub relation_attribute_types: Vec<AttributeTypeDescriptor>,
}

impl CollectionDescriptor {
    /// Builds the descriptor for a project's type registry. Pure: the registry
    /// is only read, and the same registry always yields a structurally equal
    /// descriptor.
    pub fn build(schema: &ProjectSchema) -> Self {
        Self {
            messages: Vec::new(),
            search_config: SEARCH_ENGINES
                .iter()
                .map(|(name, template)| (name.to_string(), template.to_string()))
                .collect(),
            disambiguator_config: Vec::new(),
            unconfigured_types: Vec::new(),
            ui_names: UiNames::default(),
            entity_types: schema
                .entity_types()
                .iter()
                .map(|entity_type| EntityTypeDescriptor {
                    name: entity_type.name.clone(),
                    type_code: entity_type.type_code.clone(),
                    labels: entity_type.labels.clone(),
                    bg_color: entity_type.bg_color.clone(),
                    border_color: BORDER_COLOR.to_string(),
                    unused: false,
                })
                .collect(),
            event_types: schema
                .event_types()
                .iter()
                .map(|event_type| EventTypeDescriptor {
                    name: event_type.name.clone(),
                    type_code: event_type.type_code.clone(),
                    labels: event_type.labels.clone(),
                    bg_color: event_type.bg_color.clone(),
                    border_color: BORDER_COLOR.to_string(),
                    attributes: event_type.attributes.clone(),
                    unused: false,
                })
                .collect(),
            relation_types: schema
                .relation_types()
                .iter()
                .map(|relation_type| RelationTypeDescriptor {
                    name: relation_type.name.clone(),
                    type_code: relation_type.type_code.clone(),
                    labels: relation_type.labels.clone(),
                    dash_array: DASH_ARRAY.to_string(),
                    color: relation_type.color.clone(),
                })
                .collect(),
            entity_attribute_types: schema
                .attribute_types()
                .iter()
                .map(|attribute_type| AttributeTypeDescriptor {
                    name: attribute_type.name.clone(),
                    type_code: attribute_type.type_code.clone(),
                    labels: vec![attribute_type.type_code.clone()],
                    values: attribute_type.values.clone(),
                    unused: false,
                })
                .collect(),
            // The registry does not distinguish attribute applicability yet;
            // all attribute types are presented as entity attributes.
            event_attribute_types: Vec::new(),
            relation_attribute_types: Vec::new(),
        }
    }
}

#[sealed]
impl TypeInfo for CollectionDescriptor {
    fn typeinfo() -> Type {
        Type::CollectionDescriptor
    }
}

impl ToJson for CollectionDescriptor {}
