// src/integrations/mod.rs
//
// External Integrations Module

pub mod anilist;
pub mod catalog;

pub use anilist::client::AniListClient;
pub use catalog::{AnimeCatalog, PageQuery};

#[cfg(test)]
pub use catalog::MockAnimeCatalog;
