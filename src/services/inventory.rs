//! Inventory service

use crate::{
    error::AppResult,
    models::{
        inventory::{InventoryItem, InventoryQuery},
        page::PageParams,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn search(
        &self,
        query: &InventoryQuery,
        pages: PageParams,
    ) -> AppResult<(Vec<InventoryItem>, i64)> {
        self.repository.inventory.search(query, pages).await
    }

    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<InventoryItem>> {
        self.repository.inventory.find_by_name(name).await
    }
}
