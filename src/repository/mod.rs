//! Repository layer for database operations

pub mod inventory;
pub mod search;
pub mod shops;
pub mod users;
pub mod vendors;

use sqlx::{Pool, Postgres};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub inventory: inventory::InventoryRepository,
    pub shops: shops::ShopsRepository,
    pub users: users::UsersRepository,
    pub vendors: vendors::VendorsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            inventory: inventory::InventoryRepository::new(pool.clone()),
            shops: shops::ShopsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            vendors: vendors::VendorsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Verify store connectivity (readiness probe)
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
