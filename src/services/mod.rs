//! Business logic services

pub mod auth;
pub mod inventory;
pub mod shops;
pub mod vendors;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub auth: auth::AuthService,
    pub inventory: inventory::InventoryService,
    pub shops: shops::ShopsService,
    pub vendors: vendors::VendorsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            inventory: inventory::InventoryService::new(repository.clone()),
            shops: shops::ShopsService::new(repository.clone()),
            vendors: vendors::VendorsService::new(repository.clone()),
            repository,
        }
    }
}
