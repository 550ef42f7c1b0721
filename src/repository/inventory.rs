//! Inventory repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        inventory::{InventoryItem, InventoryQuery},
        page::PageParams,
    },
    repository::search::Predicate,
};

const COLUMNS: &str = "id, name, code, category, location, created_at";

#[derive(Clone)]
pub struct InventoryRepository {
    pool: Pool<Postgres>,
}

impl InventoryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Search inventory items with pagination
    ///
    /// Count and page fetch run against the same rendered predicate;
    /// consistency between the two reads is the store's isolation level.
    pub async fn search(
        &self,
        query: &InventoryQuery,
        pages: PageParams,
    ) -> AppResult<(Vec<InventoryItem>, i64)> {
        let mut predicate = Predicate::new();
        predicate.search(query.search.as_deref(), &["name", "code", "category"]);
        predicate.equals_ci("category", query.category.as_deref());
        let where_clause = predicate.where_clause();

        let count_query = format!("SELECT COUNT(*) FROM inventory_items {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_query);
        for param in predicate.params() {
            count_builder = count_builder.bind(param);
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        // Creation order keeps page boundaries deterministic
        let select_query = format!(
            "SELECT {} FROM inventory_items {} ORDER BY id LIMIT {} OFFSET {}",
            COLUMNS,
            where_clause,
            pages.limit,
            pages.offset()
        );
        let mut select_builder = sqlx::query_as::<_, InventoryItem>(&select_query);
        for param in predicate.params() {
            select_builder = select_builder.bind(param);
        }
        let items = select_builder.fetch_all(&self.pool).await?;

        Ok((items, total))
    }

    /// Look up a single item by exact, case-insensitive name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            "SELECT {} FROM inventory_items WHERE LOWER(name) = LOWER($1)",
            COLUMNS
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }
}
