//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartOffersService, StoreCartOffersService, models::SegmentFailurePolicy},
        offers::{InMemoryOfferStore, OfferStore, OffersService, PgOfferStore, StoreOffersService},
        segments::{HttpSegmentResolver, SegmentResolver, SegmentServiceConfig},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Settings needed to wire the services together.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string. Offers are kept in memory when absent.
    pub database_url: Option<String>,

    pub segments: SegmentServiceConfig,

    pub segment_failure_policy: SegmentFailurePolicy,
}

#[derive(Clone)]
pub struct AppContext {
    pub offers: Arc<dyn OffersService>,
    pub carts: Arc<dyn CartOffersService>,
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Wire both services over one shared store.
    #[must_use]
    pub fn new(
        store: Arc<dyn OfferStore>,
        resolver: Arc<dyn SegmentResolver>,
        policy: SegmentFailurePolicy,
    ) -> Self {
        Self {
            offers: Arc::new(StoreOffersService::new(Arc::clone(&store))),
            carts: Arc::new(StoreCartOffersService::new(resolver, store, policy)),
        }
    }

    /// Build application context from configuration.
    ///
    /// Connects to and migrates PostgreSQL when a database URL is configured.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to or migrating the database fails.
    pub async fn from_config(config: AppConfig) -> Result<Self, AppInitError> {
        let store: Arc<dyn OfferStore> = match &config.database_url {
            Some(url) => {
                let pool = database::connect(url)
                    .await
                    .map_err(AppInitError::Database)?;

                database::migrate(&pool)
                    .await
                    .map_err(AppInitError::Migrate)?;

                info!("using PostgreSQL offer store");

                Arc::new(PgOfferStore::new(Db::new(pool)))
            }
            None => {
                info!("using in-memory offer store");

                Arc::new(InMemoryOfferStore::new())
            }
        };

        let resolver = Arc::new(HttpSegmentResolver::new(config.segments));

        Ok(Self::new(store, resolver, config.segment_failure_policy))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use platter::offers::{RestaurantId, UserId};
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::domain::{
        offers::{data::NewOffer, records::OfferUuid},
        segments::MockSegmentResolver,
    };

    use super::*;

    #[tokio::test]
    async fn services_share_one_store() -> TestResult {
        let mut resolver = MockSegmentResolver::new();

        resolver
            .expect_resolve()
            .returning(|_| Ok(Some("p1".into())));

        let ctx = AppContext::new(
            Arc::new(InMemoryOfferStore::new()),
            Arc::new(resolver),
            SegmentFailurePolicy::Propagate,
        );

        ctx.offers
            .register_offer(NewOffer {
                uuid: OfferUuid::new(),
                restaurant: RestaurantId::new(101),
                offer_type: "FLATX".to_string(),
                offer_value: 10,
                segments: smallvec!["p1".to_string()],
            })
            .await?;

        let applied = ctx
            .carts
            .apply_offer(UserId::new(1), RestaurantId::new(101), 200)
            .await?;

        assert_eq!(applied.cart_value, 190);

        Ok(())
    }

    #[tokio::test]
    async fn from_config_without_database_uses_memory() -> TestResult {
        let ctx = AppContext::from_config(AppConfig {
            database_url: None,
            segments: SegmentServiceConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                timeout: Duration::from_millis(100),
            },
            segment_failure_policy: SegmentFailurePolicy::Propagate,
        })
        .await?;

        let result = ctx.offers.list_offers(RestaurantId::new(1)).await;

        assert!(result.is_err(), "a fresh store has no offers");

        Ok(())
    }
}
