//! HTTP API 类型定义

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::storage::{RecordCounts, TS_EXPORT_PATH};

use super::error_code::ErrorCode;

/// Error body: `{"error": "...", "code": 2000}`
#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct ApiError {
    pub error: String,
    pub code: ErrorCode,
}

/// `PUT /notifications/read-all` 响应
#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct MarkAllReadResponse {
    pub updated: usize,
}

#[derive(Serialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct HealthStoreCheck {
    pub status: String,
    pub counts: RecordCounts,
}

#[derive(Serialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// 运行秒数
    pub uptime: u32,
    pub uptime_human: String,
    pub store: HealthStoreCheck,
    pub unread_notifications: usize,
    pub response_time_ms: u32,
}
