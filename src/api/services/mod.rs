//! Clinic HTTP API
//!
//! 成功时直接返回 JSON 数据，失败时返回 `{"error", "code"}`。

mod bookings;
mod catalog;
pub mod error_code;
mod feedback;
pub mod health;
mod helpers;
mod notifications;
pub mod routes;
mod stats;
mod types;

pub use error_code::ErrorCode;
pub use health::{AppStartTime, HealthService, health_routes};
pub use helpers::{api_result, error_from_clinic, error_response, success_response};
pub use routes::{api_routes, configure_app_data};
pub use types::*;
