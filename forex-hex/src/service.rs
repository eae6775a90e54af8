//! Rate Application Service
//!
//! Passes requests through to the rate store port and owns the startup
//! seeding step. Contains NO infrastructure logic.

use forex_types::{
    AppError, Rate, RateId, RatePatch, RateStore, SeedOutcome, StoredRate, default_rates,
};

/// Application service for rate operations.
///
/// Generic over `S: RateStore` - the adapter is injected at compile time.
/// Holds no state of its own between requests.
pub struct RateService<S: RateStore> {
    store: S,
}

impl<S: RateStore> RateService<S> {
    /// Creates a new rate service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes the default rate set if, and only if, the store is empty.
    ///
    /// Running it against a populated store is a no-op.
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, AppError> {
        if self.store.count_rates().await? > 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let defaults = default_rates();
        for rate in &defaults {
            self.store.put_rate(&rate.key()?, rate).await?;
        }

        tracing::debug!(count = defaults.len(), "Default rates written to store");
        Ok(SeedOutcome::Seeded(defaults.len()))
    }

    /// Lists all rates with their storage keys.
    pub async fn list_rates(&self) -> Result<Vec<StoredRate>, AppError> {
        self.store.list_rates().await.map_err(Into::into)
    }

    /// Gets a rate by storage key.
    pub async fn get_rate(&self, id: &RateId) -> Result<StoredRate, AppError> {
        self.store
            .get_rate(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("Currency {}", id))))
    }

    /// Stores `rate` under its code, replacing any record already there.
    pub async fn create_rate(&self, rate: Rate) -> Result<StoredRate, AppError> {
        let id = rate.key()?;
        self.store.put_rate(&id, &rate).await?;
        Ok(StoredRate::new(id, rate))
    }

    /// Merges the supplied fields into an existing rate.
    pub async fn update_rate(&self, id: &RateId, patch: RatePatch) -> Result<StoredRate, AppError> {
        self.store
            .merge_rate(id, &patch)
            .await
            .map_err(|e| match e {
                forex_types::RepoError::NotFound => {
                    AppError::NotFound(format!("Currency {}", id))
                }
                other => other.into(),
            })
    }

    /// Deletes a rate. Succeeds whether or not the key exists.
    pub async fn delete_rate(&self, id: &RateId) -> Result<(), AppError> {
        self.store.delete_rate(id).await.map_err(Into::into)
    }
}
