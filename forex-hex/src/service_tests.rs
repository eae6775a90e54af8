//! RateService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use forex_types::{
        AppError, Rate, RateId, RatePatch, RateStore, RepoError, SeedOutcome, StoredRate,
    };

    use crate::RateService;

    /// Simple in-memory store for testing the service layer.
    pub struct MockStore {
        rates: Mutex<BTreeMap<RateId, Rate>>,
        unavailable: AtomicBool,
    }

    impl MockStore {
        pub fn new() -> Self {
            Self {
                rates: Mutex::new(BTreeMap::new()),
                unavailable: AtomicBool::new(false),
            }
        }

        /// Makes every subsequent call fail like an unreachable backend.
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), RepoError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(RepoError::Database("store unavailable".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl RateStore for MockStore {
        async fn list_rates(&self) -> Result<Vec<StoredRate>, RepoError> {
            self.check()?;
            Ok(self
                .rates
                .lock()
                .unwrap()
                .iter()
                .map(|(id, rate)| StoredRate::new(id.clone(), rate.clone()))
                .collect())
        }

        async fn get_rate(&self, id: &RateId) -> Result<Option<StoredRate>, RepoError> {
            self.check()?;
            Ok(self
                .rates
                .lock()
                .unwrap()
                .get(id)
                .map(|rate| StoredRate::new(id.clone(), rate.clone())))
        }

        async fn put_rate(&self, id: &RateId, rate: &Rate) -> Result<(), RepoError> {
            self.check()?;
            self.rates.lock().unwrap().insert(id.clone(), rate.clone());
            Ok(())
        }

        async fn merge_rate(
            &self,
            id: &RateId,
            patch: &RatePatch,
        ) -> Result<StoredRate, RepoError> {
            self.check()?;
            let mut rates = self.rates.lock().unwrap();
            let rate = rates.get_mut(id).ok_or(RepoError::NotFound)?;
            patch.apply_to(rate);
            Ok(StoredRate::new(id.clone(), rate.clone()))
        }

        async fn delete_rate(&self, id: &RateId) -> Result<(), RepoError> {
            self.check()?;
            self.rates.lock().unwrap().remove(id);
            Ok(())
        }

        async fn count_rates(&self) -> Result<i64, RepoError> {
            self.check()?;
            Ok(self.rates.lock().unwrap().len() as i64)
        }
    }

    fn yen() -> Rate {
        Rate::new("JPY", "YEN", "¥", "https://flags/jp.svg", "0.55", "0.50")
    }

    #[tokio::test]
    async fn test_seed_empty_store() {
        let service = RateService::new(MockStore::new());

        let outcome = service.seed_defaults().await.unwrap();

        assert_eq!(outcome, SeedOutcome::Seeded(3));
        let usd = service.get_rate(&RateId::from("USD")).await.unwrap();
        assert_eq!(usd.rate.buy, "83.94");
        assert_eq!(usd.rate.sell, "82.46");
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let service = RateService::new(MockStore::new());
        service.seed_defaults().await.unwrap();
        service
            .update_rate(
                &RateId::from("GBP"),
                RatePatch {
                    buy: Some("107.0".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let before = service.list_rates().await.unwrap();

        let outcome = service.seed_defaults().await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadyPopulated);
        assert_eq!(service.list_rates().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_seed_skips_store_with_other_records() {
        let service = RateService::new(MockStore::new());
        service.create_rate(yen()).await.unwrap();

        let outcome = service.seed_defaults().await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadyPopulated);
        assert_eq!(service.list_rates().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_seed_store_unavailable() {
        let store = MockStore::new();
        store.set_unavailable(true);
        let service = RateService::new(store);

        let result = service.seed_defaults().await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let service = RateService::new(MockStore::new());

        let created = service.create_rate(yen()).await.unwrap();
        let fetched = service.get_rate(&created.id).await.unwrap();

        assert_eq!(created.id, RateId::from("JPY"));
        assert_eq!(fetched.rate, yen());
    }

    #[tokio::test]
    async fn test_create_empty_code_fails() {
        let service = RateService::new(MockStore::new());

        let result = service
            .create_rate(Rate {
                code: String::new(),
                ..yen()
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(service.list_rates().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_existing_code_replaces_record() {
        let service = RateService::new(MockStore::new());
        service.create_rate(yen()).await.unwrap();

        let replacement = Rate {
            code: "JPY".to_string(),
            sell: "0.45".to_string(),
            ..Default::default()
        };
        service.create_rate(replacement.clone()).await.unwrap();

        let fetched = service.get_rate(&RateId::from("JPY")).await.unwrap();
        assert_eq!(fetched.rate, replacement);
    }

    #[tokio::test]
    async fn test_update_merges_supplied_fields() {
        let service = RateService::new(MockStore::new());
        service.create_rate(yen()).await.unwrap();

        let updated = service
            .update_rate(
                &RateId::from("JPY"),
                RatePatch {
                    buy: Some("0.60".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.rate.buy, "0.60");
        assert_eq!(updated.rate.sell, "0.50");
        assert_eq!(updated.rate.flag, "https://flags/jp.svg");
    }

    #[tokio::test]
    async fn test_update_missing_key_fails() {
        let service = RateService::new(MockStore::new());

        let result = service
            .update_rate(
                &RateId::from("JPY"),
                RatePatch {
                    buy: Some("0.60".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(service.list_rates().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_key_succeeds() {
        let service = RateService::new(MockStore::new());
        service.create_rate(yen()).await.unwrap();

        service.delete_rate(&RateId::from("CHF")).await.unwrap();

        assert_eq!(service.list_rates().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let service = RateService::new(MockStore::new());
        service.create_rate(yen()).await.unwrap();

        service.delete_rate(&RateId::from("JPY")).await.unwrap();

        let result = service.get_rate(&RateId::from("JPY")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
