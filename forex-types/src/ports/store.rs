//! Rate store port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, in-memory) implement this trait.

use crate::domain::{Rate, RateId, RatePatch, StoredRate};
use crate::error::RepoError;

/// Persistence contract for rate records, one record per key.
///
/// Writes to the same key are last-write-wins; no adapter adds locking or
/// versioning on top of what the backend provides.
#[async_trait::async_trait]
pub trait RateStore: Send + Sync + 'static {
    /// Lists every stored rate. Order is adapter-defined.
    async fn list_rates(&self) -> Result<Vec<StoredRate>, RepoError>;

    /// Gets a rate by key.
    async fn get_rate(&self, id: &RateId) -> Result<Option<StoredRate>, RepoError>;

    /// Creates the record at `id`, or fully overwrites it if present.
    async fn put_rate(&self, id: &RateId, rate: &Rate) -> Result<(), RepoError>;

    /// Merges the supplied fields into the record at `id`.
    ///
    /// Returns `RepoError::NotFound` when no record exists; nothing is created.
    async fn merge_rate(&self, id: &RateId, patch: &RatePatch) -> Result<StoredRate, RepoError>;

    /// Removes the record at `id`. Removing a missing key is not an error.
    async fn delete_rate(&self, id: &RateId) -> Result<(), RepoError>;

    /// Counts stored records.
    async fn count_rates(&self) -> Result<i64, RepoError>;
}
