use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, trace};

use crate::services::ClinicServices;
use crate::utils::TimeParser;

use super::helpers::json_response;
use super::types::{HealthResponse, HealthStoreCheck};

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

/// Health Service
///
/// 直接读取内存存储的记录数，不经过业务服务。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        services: web::Data<Arc<ClinicServices>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let counts = services.store.counts();
        let unread_notifications = services.notifications.unread_count();

        let now = chrono::Utc::now();
        let uptime_human = TimeParser::format_duration_human(app_start_time.start_datetime, now);
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;

        let health_data = HealthResponse {
            status: "healthy".to_string(),
            timestamp: now.to_rfc3339(),
            uptime: uptime_seconds,
            uptime_human: uptime_human.clone(),
            store: HealthStoreCheck {
                status: "healthy".to_string(),
                counts,
            },
            unread_notifications,
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        info!(
            "Health check completed in {:?}, {} bookings, uptime: {}",
            start_time.elapsed(),
            counts.bookings,
            uptime_human
        );

        json_response(actix_web::http::StatusCode::OK, &health_data)
    }

    // 简单的就绪检查，只返回 200 状态码
    pub async fn readiness_check() -> impl Responder {
        trace!("Received readiness check request");

        HttpResponse::Ok()
            .append_header(("Content-Type", "text/plain"))
            .body("OK")
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes(prefix: &str) -> actix_web::Scope {
    web::scope(prefix)
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
