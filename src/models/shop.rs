//! Shop model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};

use crate::models::page::lenient_i64;

/// Shop open/closed status (string identifier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShopStatus {
    Open,
    Closed,
}

impl ShopStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopStatus::Open => "open",
            ShopStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for ShopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ShopStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(ShopStatus::Open),
            "closed" => Ok(ShopStatus::Closed),
            _ => Err(format!("Invalid shop status: {}", s)),
        }
    }
}

// SQLx conversion for ShopStatus, stored as text
impl sqlx::Type<Postgres> for ShopStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for ShopStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for ShopStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Shop directory entry
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Shop {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub status: ShopStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// Query parameters for the shop list endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShopQuery {
    /// Case-insensitive substring over name and code
    pub search: Option<String>,
    /// Status filter (open | closed); anything else is ignored
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("OPEN".parse::<ShopStatus>().unwrap(), ShopStatus::Open);
        assert_eq!("Closed".parse::<ShopStatus>().unwrap(), ShopStatus::Closed);
        assert!("banana".parse::<ShopStatus>().is_err());
    }
}
