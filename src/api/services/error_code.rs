//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};
use ts_rs::TS;

use crate::errors::ClinicError;
use crate::storage::TS_EXPORT_PATH;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 2000-2099: 预约错误
/// - 3000-3099: 通知错误
/// - 4000-4099: 反馈错误
/// - 5000-5099: 疗法与医师目录错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[ts(rename = "ErrorCode")]
#[ts(repr(enum))]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    InvalidDateFormat = 1012,
    ConfigError = 1020,

    // 预约错误 2000-2099
    BookingNotFound = 2000,
    BookingInvalidProgress = 2001,

    // 通知错误 3000-3099
    NotificationNotFound = 3000,

    // 反馈错误 4000-4099
    FeedbackInvalidRating = 4000,

    // 目录错误 5000-5099
    TherapyNotFound = 5000,
    PractitionerNotFound = 5001,
}

impl From<&ClinicError> for ErrorCode {
    fn from(err: &ClinicError) -> Self {
        match err {
            ClinicError::Validation(_) | ClinicError::Serialization(_) => ErrorCode::BadRequest,
            ClinicError::DateParse(_) => ErrorCode::InvalidDateFormat,
            ClinicError::TherapyNotFound(_) => ErrorCode::TherapyNotFound,
            ClinicError::PractitionerNotFound(_) => ErrorCode::PractitionerNotFound,
            ClinicError::BookingNotFound(_) => ErrorCode::BookingNotFound,
            ClinicError::NotificationNotFound(_) => ErrorCode::NotificationNotFound,
            ClinicError::InvalidProgress(_) => ErrorCode::BookingInvalidProgress,
            ClinicError::InvalidRating(_) => ErrorCode::FeedbackInvalidRating,
            ClinicError::FileOperation(_) => ErrorCode::InternalServerError,
            ClinicError::Config(_) => ErrorCode::ConfigError,
        }
    }
}
