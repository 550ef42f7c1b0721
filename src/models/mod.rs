//! Data models for AMN entities

pub mod inventory;
pub mod page;
pub mod shop;
pub mod user;
pub mod vendor;
