//! The content store seam.

use super::entry::EntryCollection;
use super::error::ContentError;
use super::query::EntryQuery;
use async_trait::async_trait;
use std::fmt::Debug;

/// Anything that can answer an [`EntryQuery`].
///
/// Implemented by the HTTP [`super::DeliveryClient`] and the fixture-backed
/// [`super::MemoryStore`]. Returned items have their links resolved.
#[async_trait]
pub trait ContentStore: Debug + Send + Sync {
    async fn get_entries(&self, query: &EntryQuery) -> Result<EntryCollection, ContentError>;

    /// Short label for log lines ("delivery", "preview", "fixtures").
    fn label(&self) -> &str;
}
