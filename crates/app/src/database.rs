//! Database connection management

use platter::offers::RestaurantId;
use sqlx::{PgPool, Postgres, Transaction, migrate::MigrateError, query};

/// SQL used to serialize writers per restaurant for the rest of a transaction.
pub const LOCK_RESTAURANT_SQL: &str = "SELECT pg_advisory_xact_lock($1)";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction holding the restaurant's advisory write lock.
    ///
    /// The lock is released on commit or rollback. Readers never take it.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or acquiring the lock fails.
    pub async fn begin_restaurant_transaction(
        &self,
        restaurant: RestaurantId,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(LOCK_RESTAURANT_SQL)
            .bind(restaurant.get())
            .execute(&mut *tx)
            .await?;

        Ok(tx)
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply the embedded schema migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
