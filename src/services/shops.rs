//! Shops service

use crate::{
    error::AppResult,
    models::{
        page::PageParams,
        shop::{Shop, ShopQuery},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ShopsService {
    repository: Repository,
}

impl ShopsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn search(&self, query: &ShopQuery, pages: PageParams) -> AppResult<(Vec<Shop>, i64)> {
        self.repository.shops.search(query, pages).await
    }

    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Shop>> {
        self.repository.shops.find_by_name(name).await
    }
}
