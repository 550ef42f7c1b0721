//! Vendors repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        page::PageParams,
        vendor::{Vendor, VendorQuery},
    },
    repository::search::Predicate,
};

const COLUMNS: &str = "id, code, name, contact_email, created_at";

#[derive(Clone)]
pub struct VendorsRepository {
    pool: Pool<Postgres>,
}

impl VendorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Search vendors with pagination
    pub async fn search(
        &self,
        query: &VendorQuery,
        pages: PageParams,
    ) -> AppResult<(Vec<Vendor>, i64)> {
        let mut predicate = Predicate::new();
        predicate.search(query.search.as_deref(), &["name", "code"]);
        let where_clause = predicate.where_clause();

        let count_query = format!("SELECT COUNT(*) FROM vendors {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_query);
        for param in predicate.params() {
            count_builder = count_builder.bind(param);
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        let select_query = format!(
            "SELECT {} FROM vendors {} ORDER BY id LIMIT {} OFFSET {}",
            COLUMNS,
            where_clause,
            pages.limit,
            pages.offset()
        );
        let mut select_builder = sqlx::query_as::<_, Vendor>(&select_query);
        for param in predicate.params() {
            select_builder = select_builder.bind(param);
        }
        let vendors = select_builder.fetch_all(&self.pool).await?;

        Ok((vendors, total))
    }
}
