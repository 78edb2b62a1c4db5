/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! ## Introduction
//!
//! Bratdoc is a library for the core of a text-annotation workbench: the codec
//! between the compact, positional wire representation of a document's
//! annotations (the brat-compatible format the annotation surface persists and
//! consumes) and a fully-typed, schema-enriched in-memory annotation model.
//!
//! **What can you do with this library?**
//!
//! * Decode a wire document against a project's type registry into enriched
//!   entity, attribute, relation and event annotations, and encode an edited
//!   model losslessly back to the wire.
//! * Build and query per-project type registries ([`ProjectSchema`]): catalogs
//!   of entity, attribute, relation and event type definitions with their
//!   display metadata, indexed by type code.
//! * Derive a [`CollectionDescriptor`] from a registry: the read-only
//!   projection that configures the annotation surface's palette and legend.
//! * Fetch and store wire documents through the [`DocumentStore`] and
//!   [`ProjectStore`] collaborator traits; in-memory implementations are
//!   included.
//!
//! The codec ([`decode`]/[`encode`]) is pure and synchronous: it does no I/O,
//! keeps no state between calls, and never mutates the registry it joins
//! against, so it can run on any thread and on independent inputs concurrently.

mod annotation;
mod codec;
mod collection;
mod config;
mod error;
mod json;
mod schema;
mod store;
mod types;
mod wire;

// Our internal crate structure is not very relevant to the outside world,
// expose all structs and traits in the root namespace, and be explicit about it:

pub use annotation::{
    AnnotatedDocument, Annotation, AttributeAnnotation, EntityAnnotation, EventAnnotation,
    EventLink, RelationAnnotation, RelationEndpoint,
};
pub use codec::{decode, encode};
pub use collection::{
    AttributeTypeDescriptor, CollectionDescriptor, EntityTypeDescriptor, EventTypeDescriptor,
    RelationTypeDescriptor, UiNames, SEARCH_ENGINES,
};
pub use config::Config;
pub use error::BratError;
pub use json::{FromJson, ToJson};
pub use schema::{
    AttributeType, EntityType, EventType, ProjectSchema, ProjectSchemaBuilder, RelationType,
};
pub use store::{
    fetch_annotated, save_annotated, DocumentStore, MemoryDocumentStore, MemoryProjectStore,
    ProjectStore,
};
pub use types::{DataFormat, Span, Type, TypeInfo};
pub use wire::{
    WireArg, WireAttribute, WireDocument, WireEntity, WireEvent, WireLink, WireRelation,
    WireTrigger,
};

mod tests;
