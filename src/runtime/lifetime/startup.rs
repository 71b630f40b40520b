use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::{ClinicConfig, get_config};
use crate::services::ClinicServices;
use crate::storage::{MemoryStore, StorageFactory};

pub struct StartupContext {
    pub store: Arc<MemoryStore>,
    pub services: Arc<ClinicServices>,
    pub route_config: RouteConfig,
}

#[derive(Clone, Debug)]
pub struct RouteConfig {
    pub api_prefix: String,
    pub health_prefix: String,
}

impl RouteConfig {
    pub fn from_clinic(clinic: &ClinicConfig) -> Self {
        Self {
            api_prefix: normalize_prefix(&clinic.api_prefix),
            health_prefix: normalize_prefix(&clinic.health_prefix),
        }
    }
}

/// 保证前缀以 `/` 开头且不以 `/` 结尾
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// 准备服务器启动的上下文：存储、服务与路由配置
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let config = get_config();
    let store = StorageFactory::create(&config.clinic);
    let counts = store.counts();

    if config.clinic.seed_demo_data {
        info!(
            "Demo data loaded: {} therapies, {} practitioners, {} bookings, {} notifications, {} feedback",
            counts.therapies,
            counts.practitioners,
            counts.bookings,
            counts.notifications,
            counts.feedback
        );
    } else {
        warn!("Demo data disabled, starting with an empty store");
    }

    let services = Arc::new(ClinicServices::new(store.clone(), &config.clinic));
    let route_config = RouteConfig::from_clinic(&config.clinic);

    if route_config.api_prefix.is_empty() {
        warn!("clinic.api_prefix is empty, API routes are mounted at the root");
    }

    debug!("Pre-startup processing completed in {:?}", start_time.elapsed());

    Ok(StartupContext {
        store,
        services,
        route_config,
    })
}
