pub mod memory;
pub mod models;
pub mod seed;

use std::sync::Arc;

pub use memory::{ClinicData, MemoryStore};
pub use models::*;

use crate::config::ClinicConfig;

pub struct StorageFactory;

impl StorageFactory {
    /// Build the store described by the `[clinic]` config section
    pub fn create(config: &ClinicConfig) -> Arc<MemoryStore> {
        let store = if config.seed_demo_data {
            MemoryStore::with_demo_data()
        } else {
            MemoryStore::default()
        };
        Arc::new(store)
    }
}
