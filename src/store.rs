/*
    Bratdoc Library (brat-compatible annotation codec)

        Licensed under the GNU General Public License v3
*/

//! This module contains the store collaborators the codec is invoked around:
//! a key-value [`DocumentStore`] for wire documents and a [`ProjectStore`]
//! supplying the type registry a decode needs. The codec itself never fetches
//! or stores anything; callers fetch then decode, and encode then put.
//!
//! In-memory implementations are provided for tests and small tools; durable
//! backends implement the same traits.

use nanoid::nanoid;
use std::collections::HashMap;

use crate::annotation::AnnotatedDocument;
use crate::codec::{decode, encode};
use crate::config::Config;
use crate::error::BratError;
use crate::schema::ProjectSchema;
use crate::types::*;
use crate::wire::WireDocument;

/// Key-value storage for wire documents, keyed by project-scoped document
/// identifiers.
pub trait DocumentStore {
    /// Fetches the wire document stored under `document_id`.
    /// Fails with [`BratError::NotFound`] if there is none.
    fn get(&self, document_id: &str) -> Result<WireDocument, BratError>;

    /// Stores a wire document under `document_id`, replacing any previous one.
    fn put(&mut self, document_id: &str, document: WireDocument) -> Result<(), BratError>;

    /// Produces a fresh document identifier: 21 URL-friendly ASCII symbols
    /// after a `D` prefix.
    fn new_id(&mut self) -> String {
        format!("D{}", nanoid!())
    }
}

/// Storage for project schemas, keyed by project identifier.
pub trait ProjectStore {
    /// Fetches the type registry of the project identified by `project_id`.
    /// Fails with [`BratError::NotFound`] if there is none.
    fn get(&self, project_id: &str) -> Result<ProjectSchema, BratError>;
}

/// Encodes an annotated document and puts it in the store, assigning a fresh
/// document identifier first if the document has none yet (and the
/// configuration allows generating one). Returns the identifier the document
/// was stored under.
pub fn save_annotated<S: DocumentStore>(
    store: &mut S,
    document: &mut AnnotatedDocument,
    config: &Config,
) -> Result<String, BratError> {
    let document_id = match document.document_id.as_ref() {
        Some(document_id) => document_id.clone(),
        None => {
            if !config.generate_ids() {
                return Err(BratError::NoId(
                    "saving requires an identifier when generate_ids is disabled",
                ));
            }
            let document_id = store.new_id();
            document.document_id = Some(document_id.clone());
            document_id
        }
    };
    debug(config, || format!("save_annotated: id={}", document_id));
    store.put(&document_id, encode(document))?;
    Ok(document_id)
}

/// Fetches a wire document and the schema of its owning project, and decodes
/// the former against the latter.
pub fn fetch_annotated<D: DocumentStore, P: ProjectStore>(
    documents: &D,
    projects: &P,
    document_id: &str,
    project_id: &str,
    config: &Config,
) -> Result<AnnotatedDocument, BratError> {
    debug(config, || {
        format!("fetch_annotated: id={} project={}", document_id, project_id)
    });
    let wire = documents.get(document_id)?;
    let schema = projects.get(project_id)?;
    Ok(decode(&wire, &schema)?.with_document_id(document_id))
}

/// In-memory [`DocumentStore`], backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: HashMap<String, WireDocument>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn get(&self, document_id: &str) -> Result<WireDocument, BratError> {
        self.documents
            .get(document_id)
            .cloned()
            .ok_or_else(|| BratError::NotFound(Type::WireDocument, document_id.to_string()))
    }

    fn put(&mut self, document_id: &str, document: WireDocument) -> Result<(), BratError> {
        self.documents.insert(document_id.to_string(), document);
        Ok(())
    }
}

/// In-memory [`ProjectStore`], backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectStore {
    projects: HashMap<String, ProjectSchema>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project schema, keyed by its own project identifier
    pub fn insert(&mut self, schema: ProjectSchema) {
        self.projects.insert(schema.id().to_string(), schema);
    }
}

impl ProjectStore for MemoryProjectStore {
    fn get(&self, project_id: &str) -> Result<ProjectSchema, BratError> {
        self.projects
            .get(project_id)
            .cloned()
            .ok_or_else(|| BratError::NotFound(Type::ProjectSchema, project_id.to_string()))
    }
}
