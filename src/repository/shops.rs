//! Shops repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        page::PageParams,
        shop::{Shop, ShopQuery, ShopStatus},
    },
    repository::search::Predicate,
};

const COLUMNS: &str = "id, code, name, status, created_at";

#[derive(Clone)]
pub struct ShopsRepository {
    pool: Pool<Postgres>,
}

impl ShopsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Search shops with pagination
    pub async fn search(&self, query: &ShopQuery, pages: PageParams) -> AppResult<(Vec<Shop>, i64)> {
        // An unrecognized status value is treated as absent, never as
        // "match nothing"
        let status = query
            .status
            .as_deref()
            .and_then(|s| s.parse::<ShopStatus>().ok());

        let mut predicate = Predicate::new();
        predicate.search(query.search.as_deref(), &["name", "code"]);
        predicate.equals_ci("status", status.map(|s| s.as_str()));
        let where_clause = predicate.where_clause();

        let count_query = format!("SELECT COUNT(*) FROM shops {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_query);
        for param in predicate.params() {
            count_builder = count_builder.bind(param);
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        let select_query = format!(
            "SELECT {} FROM shops {} ORDER BY id LIMIT {} OFFSET {}",
            COLUMNS,
            where_clause,
            pages.limit,
            pages.offset()
        );
        let mut select_builder = sqlx::query_as::<_, Shop>(&select_query);
        for param in predicate.params() {
            select_builder = select_builder.bind(param);
        }
        let shops = select_builder.fetch_all(&self.pool).await?;

        Ok((shops, total))
    }

    /// Look up a single shop by exact, case-insensitive name
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Shop>> {
        let shop = sqlx::query_as::<_, Shop>(&format!(
            "SELECT {} FROM shops WHERE LOWER(name) = LOWER($1)",
            COLUMNS
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(shop)
    }
}
