//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        page::PageParams,
        user::{Role, User, UserQuery},
    },
    repository::search::Predicate,
};

const COLUMNS: &str =
    "id, username, password, role, vendor, firstname, lastname, email, phone, created_at, modified_at";

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by exact username (primary authentication lookup)
    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE username = $1",
            COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Search users with pagination
    pub async fn search(&self, query: &UserQuery, pages: PageParams) -> AppResult<(Vec<User>, i64)> {
        let role = query.role.as_deref().and_then(|r| r.parse::<Role>().ok());

        let mut predicate = Predicate::new();
        predicate.search(query.search.as_deref(), &["username", "firstname", "lastname"]);
        predicate.equals_ci("role", role.map(|r| r.as_str()));
        let where_clause = predicate.where_clause();

        let count_query = format!("SELECT COUNT(*) FROM users {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_query);
        for param in predicate.params() {
            count_builder = count_builder.bind(param);
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        let select_query = format!(
            "SELECT {} FROM users {} ORDER BY id LIMIT {} OFFSET {}",
            COLUMNS,
            where_clause,
            pages.limit,
            pages.offset()
        );
        let mut select_builder = sqlx::query_as::<_, User>(&select_query);
        for param in predicate.params() {
            select_builder = select_builder.bind(param);
        }
        let users = select_builder.fetch_all(&self.pool).await?;

        Ok((users, total))
    }
}
