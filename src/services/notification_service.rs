//! Patient notification inbox

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::errors::{ClinicError, Result};
use crate::storage::{
    MemoryStore, Notification, NotificationPriority, NotificationType, TS_EXPORT_PATH,
};

/// Query of `GET /notifications`
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct NotificationFilter {
    #[serde(rename = "type")]
    pub kind: Option<NotificationType>,
    pub priority: Option<NotificationPriority>,
    /// Only unread notifications when true
    pub unread: Option<bool>,
    /// Case-insensitive match on title, message or patient name
    pub search: Option<String>,
}

impl NotificationFilter {
    fn matches(&self, n: &Notification, search: Option<&str>) -> bool {
        if self.kind.is_some_and(|k| n.kind != k) {
            return false;
        }
        if self.priority.is_some_and(|p| n.priority != p) {
            return false;
        }
        if self.unread == Some(true) && n.read {
            return false;
        }
        match search {
            Some(s) => {
                n.title.to_lowercase().contains(s)
                    || n.message.to_lowercase().contains(s)
                    || n.patient_name.to_lowercase().contains(s)
            }
            None => true,
        }
    }
}

pub struct NotificationService {
    store: Arc<MemoryStore>,
}

impl NotificationService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn list_notifications(&self, filter: &NotificationFilter) -> Vec<Notification> {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        self.store.read(|data| {
            data.notifications
                .iter()
                .filter(|n| filter.matches(n, search.as_deref()))
                .cloned()
                .collect()
        })
    }

    pub fn mark_read(&self, id: u32) -> Result<Notification> {
        self.store.write(|data| {
            let notification = data
                .notification_mut(id)
                .ok_or_else(ClinicError::notification_not_found)?;
            notification.read = true;
            debug!("NotificationService: notification {} marked read", id);
            Ok(notification.clone())
        })
    }

    /// Mark everything read; returns how many notifications changed
    pub fn mark_all_read(&self) -> usize {
        let changed = self.store.write(|data| {
            let mut changed = 0;
            for n in data.notifications.iter_mut().filter(|n| !n.read) {
                n.read = true;
                changed += 1;
            }
            changed
        });
        info!("NotificationService: marked {} notifications read", changed);
        changed
    }

    pub fn unread_count(&self) -> usize {
        self.store
            .read(|data| data.notifications.iter().filter(|n| !n.read).count())
    }
}
