//! Therapy and practitioner catalog

use std::sync::Arc;

use tracing::trace;

use crate::errors::{ClinicError, Result};
use crate::storage::{MemoryStore, Practitioner, Therapy};

pub struct CatalogService {
    store: Arc<MemoryStore>,
}

impl CatalogService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn list_therapies(&self) -> Vec<Therapy> {
        self.store.therapies()
    }

    pub fn get_therapy(&self, id: u32) -> Result<Therapy> {
        trace!("CatalogService: looking up therapy {}", id);
        self.store
            .therapy(id)
            .ok_or_else(ClinicError::therapy_not_found)
    }

    pub fn list_practitioners(&self) -> Vec<Practitioner> {
        self.store.practitioners()
    }

    pub fn get_practitioner(&self, id: u32) -> Result<Practitioner> {
        trace!("CatalogService: looking up practitioner {}", id);
        self.store
            .practitioner(id)
            .ok_or_else(ClinicError::practitioner_not_found)
    }
}
