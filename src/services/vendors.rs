//! Vendors service

use crate::{
    error::AppResult,
    models::{
        page::PageParams,
        vendor::{Vendor, VendorQuery},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct VendorsService {
    repository: Repository,
}

impl VendorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn search(
        &self,
        query: &VendorQuery,
        pages: PageParams,
    ) -> AppResult<(Vec<Vendor>, i64)> {
        self.repository.vendors.search(query, pages).await
    }
}
