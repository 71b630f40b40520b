//! Clinic record types
//!
//! Field names and enum values follow the JSON the dashboard consumes:
//! camelCase fields, kebab-case enum values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};
use ts_rs::TS;

/// 前端类型导出路径
pub const TS_EXPORT_PATH: &str = "../web/src/types/api.generated.ts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct Therapy {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub price: u32,
    pub benefits: Vec<String>,
    pub category: String,
    pub difficulty: String,
    pub contraindications: Vec<String>,
    pub preparation: String,
    pub aftercare: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct Practitioner {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub experience: String,
    pub qualifications: Vec<String>,
    pub rating: f64,
    pub patients_treated: u32,
    pub availability: String,
    pub languages: Vec<String>,
    pub bio: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, EnumIter, AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
}

/// 疗程进度
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, EnumIter, AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SessionProgress {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, EnumIter, AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u32,
    pub patient_name: String,
    pub therapy_id: u32,
    pub practitioner_id: u32,
    #[ts(type = "string")]
    pub date: NaiveDate,
    /// HH:MM
    pub time: String,
    pub status: BookingStatus,
    pub progress: SessionProgress,
    /// Sessions completed so far, never above `total_days`
    pub day: u32,
    pub total_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub cost: u32,
    pub payment_status: PaymentStatus,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, EnumIter, AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NotificationType {
    PreProcedure,
    PostProcedure,
    Reminder,
    Alert,
    Milestone,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    TS,
    EnumIter,
    AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// 通知渠道（仅展示用，不做真实投递）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, EnumIter, AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NotificationChannel {
    InApp,
    Email,
    Sms,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    pub booking_id: u32,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub read: bool,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
    pub priority: NotificationPriority,
    pub channels: Vec<NotificationChannel>,
    pub patient_name: String,
    pub therapy_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, EnumIter, AsRefStr)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub enum TherapyEffectiveness {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: u32,
    pub booking_id: u32,
    pub patient_name: String,
    /// 1..=5
    pub rating: u8,
    pub symptoms: String,
    pub side_effects: String,
    pub improvements: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapy_effectiveness: Option<TherapyEffectiveness>,
    #[serde(default)]
    pub would_recommend: bool,
    #[serde(default)]
    pub follow_up_needed: bool,
}

/// A booking joined with the therapy and practitioner it references
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    #[serde(flatten)]
    pub booking: Booking,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub therapy: Option<Therapy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practitioner: Option<Practitioner>,
}

/// 各集合记录数（健康检查使用）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "camelCase")]
pub struct RecordCounts {
    pub therapies: usize,
    pub practitioners: usize,
    pub bookings: usize,
    pub notifications: usize,
    pub feedback: usize,
}
