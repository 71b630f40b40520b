//! Service layer for business logic
//!
//! Every service shares the same `MemoryStore`; HTTP handlers, the CLI and
//! tests all go through these types.

mod booking_service;
mod catalog_service;
mod feedback_service;
mod notification_service;
mod stats_service;

use std::sync::Arc;

pub use booking_service::*;
pub use catalog_service::*;
pub use feedback_service::*;
pub use notification_service::*;
pub use stats_service::*;

use crate::config::ClinicConfig;
use crate::storage::MemoryStore;

/// All services wired to one store
#[derive(Clone)]
pub struct ClinicServices {
    pub store: Arc<MemoryStore>,
    pub catalog: Arc<CatalogService>,
    pub bookings: Arc<BookingService>,
    pub notifications: Arc<NotificationService>,
    pub feedback: Arc<FeedbackService>,
    pub stats: Arc<StatsService>,
}

impl ClinicServices {
    pub fn new(store: Arc<MemoryStore>, config: &ClinicConfig) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(store.clone())),
            bookings: Arc::new(BookingService::new(
                store.clone(),
                config.max_auto_schedule_sessions,
            )),
            notifications: Arc::new(NotificationService::new(store.clone())),
            feedback: Arc::new(FeedbackService::new(store.clone())),
            stats: Arc::new(StatsService::new(store.clone())),
            store,
        }
    }
}
