//! Clinic API 路由配置
//!
//! 将 API 前缀下的路由按资源拆分。

use std::sync::Arc;

use actix_web::web;

use crate::services::ClinicServices;

use super::bookings::{get_booking, get_bookings, post_auto_schedule, post_booking, put_progress};
use super::catalog::{
    get_practitioner, get_practitioner_performance, get_practitioners, get_therapies,
    get_therapy, get_therapy_effectiveness,
};
use super::feedback::{get_feedback, get_feedback_analytics, post_feedback};
use super::helpers::{json_config, path_config, query_config};
use super::notifications::{get_notifications, put_all_read, put_notification_read};
use super::stats::{get_dashboard_stats, get_patient_history};

/// 疗法路由 `/therapies`
pub fn therapies_routes() -> actix_web::Scope {
    web::scope("/therapies")
        .route("", web::get().to(get_therapies))
        .route("/{id}", web::get().to(get_therapy))
        .route("/{id}/effectiveness", web::get().to(get_therapy_effectiveness))
}

/// 医师路由 `/practitioners`
pub fn practitioners_routes() -> actix_web::Scope {
    web::scope("/practitioners")
        .route("", web::get().to(get_practitioners))
        .route("/{id}", web::get().to(get_practitioner))
        .route(
            "/{id}/performance",
            web::get().to(get_practitioner_performance),
        )
}

/// 预约路由 `/bookings`
///
/// 包含：
/// - GET /bookings - 列表（?progress=&search=）
/// - POST /bookings - 创建预约
/// - POST /bookings/auto-schedule - 批量排期
/// - GET /bookings/{id} - 单个预约
/// - PUT /bookings/{id}/progress - 更新进度
pub fn bookings_routes() -> actix_web::Scope {
    web::scope("/bookings")
        .route("", web::get().to(get_bookings))
        .route("", web::post().to(post_booking))
        // must be before /{id}
        .route("/auto-schedule", web::post().to(post_auto_schedule))
        .route("/{id}", web::get().to(get_booking))
        .route("/{id}/progress", web::put().to(put_progress))
}

/// 通知路由 `/notifications`
pub fn notifications_routes() -> actix_web::Scope {
    web::scope("/notifications")
        .route("", web::get().to(get_notifications))
        // must be before /{id}/read
        .route("/read-all", web::put().to(put_all_read))
        .route("/{id}/read", web::put().to(put_notification_read))
}

/// 反馈路由 `/feedback`
pub fn feedback_routes() -> actix_web::Scope {
    web::scope("/feedback")
        .route("", web::get().to(get_feedback))
        .route("", web::post().to(post_feedback))
        .route("/analytics", web::get().to(get_feedback_analytics))
}

/// API 路由
///
/// 组合所有子模块路由
pub fn api_routes(prefix: &str) -> actix_web::Scope {
    web::scope(prefix)
        .service(therapies_routes())
        .service(practitioners_routes())
        .service(bookings_routes())
        .service(notifications_routes())
        .service(feedback_routes())
        .route("/dashboard-stats", web::get().to(get_dashboard_stats))
        .route("/patients/{name}/history", web::get().to(get_patient_history))
}

/// 注册服务实例与提取器配置
pub fn configure_app_data(cfg: &mut web::ServiceConfig, services: &Arc<ClinicServices>) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .app_data(web::Data::new(services.clone()))
        .app_data(web::Data::new(services.catalog.clone()))
        .app_data(web::Data::new(services.bookings.clone()))
        .app_data(web::Data::new(services.notifications.clone()))
        .app_data(web::Data::new(services.feedback.clone()))
        .app_data(web::Data::new(services.stats.clone()));
}
