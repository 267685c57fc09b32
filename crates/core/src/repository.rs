//! Persistence boundary for templates.

use async_trait::async_trait;

use crate::template::Template;

/// Loads and stores templates, keyed by an opaque identifier assigned by
/// the storage layer.
///
/// The domain core ships no implementation. The owning application wires
/// in a document-store-backed one and is responsible for load/save
/// atomicity, including any optimistic-concurrency checks; this crate only
/// guarantees that an in-memory [`Template`] is internally consistent.
#[async_trait]
pub trait TemplateRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a template by id, with fields and used positions materialized.
    async fn find_by_id(&self, id: &str) -> Result<Option<Template>, Self::Error>;

    /// Persist a template, returning its (possibly newly assigned) id.
    async fn save(&self, template: &Template) -> Result<String, Self::Error>;
}
