use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};

use crate::storage::MemoryStore;

/// 等待 Ctrl+C，随后记录内存中的最终记录数（进程退出后数据即丢失）
pub async fn listen_for_shutdown(store: Arc<MemoryStore>) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    let counts = store.counts();
    warn!(
        "Discarding in-memory records: {} bookings, {} notifications, {} feedback",
        counts.bookings, counts.notifications, counts.feedback
    );
}
