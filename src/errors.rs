use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq)]
pub enum ClinicError {
    Validation(String),
    DateParse(String),
    TherapyNotFound(String),
    PractitionerNotFound(String),
    BookingNotFound(String),
    NotificationNotFound(String),
    InvalidProgress(String),
    InvalidRating(String),
    Serialization(String),
    FileOperation(String),
    Config(String),
}

impl ClinicError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ClinicError::Validation(_) => "E001",
            ClinicError::DateParse(_) => "E002",
            ClinicError::TherapyNotFound(_) => "E003",
            ClinicError::PractitionerNotFound(_) => "E004",
            ClinicError::BookingNotFound(_) => "E005",
            ClinicError::NotificationNotFound(_) => "E006",
            ClinicError::InvalidProgress(_) => "E007",
            ClinicError::InvalidRating(_) => "E008",
            ClinicError::Serialization(_) => "E009",
            ClinicError::FileOperation(_) => "E010",
            ClinicError::Config(_) => "E011",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ClinicError::Validation(_) => "Validation Error",
            ClinicError::DateParse(_) => "Date Parse Error",
            ClinicError::TherapyNotFound(_) => "Therapy Not Found",
            ClinicError::PractitionerNotFound(_) => "Practitioner Not Found",
            ClinicError::BookingNotFound(_) => "Booking Not Found",
            ClinicError::NotificationNotFound(_) => "Notification Not Found",
            ClinicError::InvalidProgress(_) => "Invalid Progress",
            ClinicError::InvalidRating(_) => "Invalid Rating",
            ClinicError::Serialization(_) => "Serialization Error",
            ClinicError::FileOperation(_) => "File Operation Error",
            ClinicError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ClinicError::Validation(msg)
            | ClinicError::DateParse(msg)
            | ClinicError::TherapyNotFound(msg)
            | ClinicError::PractitionerNotFound(msg)
            | ClinicError::BookingNotFound(msg)
            | ClinicError::NotificationNotFound(msg)
            | ClinicError::InvalidProgress(msg)
            | ClinicError::InvalidRating(msg)
            | ClinicError::Serialization(msg)
            | ClinicError::FileOperation(msg)
            | ClinicError::Config(msg) => msg,
        }
    }

    /// HTTP status the API answers with for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            ClinicError::Validation(_)
            | ClinicError::DateParse(_)
            | ClinicError::InvalidProgress(_)
            | ClinicError::InvalidRating(_)
            | ClinicError::Serialization(_) => StatusCode::BAD_REQUEST,
            ClinicError::TherapyNotFound(_)
            | ClinicError::PractitionerNotFound(_)
            | ClinicError::BookingNotFound(_)
            | ClinicError::NotificationNotFound(_) => StatusCode::NOT_FOUND,
            ClinicError::FileOperation(_) | ClinicError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClinicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClinicError {}

// 便捷的构造函数
impl ClinicError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ClinicError::Validation(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        ClinicError::DateParse(msg.into())
    }

    pub fn therapy_not_found() -> Self {
        ClinicError::TherapyNotFound("Therapy not found".to_string())
    }

    pub fn practitioner_not_found() -> Self {
        ClinicError::PractitionerNotFound("Practitioner not found".to_string())
    }

    pub fn booking_not_found() -> Self {
        ClinicError::BookingNotFound("Booking not found".to_string())
    }

    pub fn notification_not_found() -> Self {
        ClinicError::NotificationNotFound("Notification not found".to_string())
    }

    pub fn invalid_progress<T: Into<String>>(msg: T) -> Self {
        ClinicError::InvalidProgress(msg.into())
    }

    pub fn invalid_rating<T: Into<String>>(msg: T) -> Self {
        ClinicError::InvalidRating(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ClinicError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ClinicError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ClinicError::Config(msg.into())
    }

    /// Whether this is one of the lookup-miss variants
    pub fn is_not_found(&self) -> bool {
        self.http_status() == StatusCode::NOT_FOUND
    }
}

impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        ClinicError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClinicError {
    fn from(err: chrono::ParseError) -> Self {
        ClinicError::DateParse(err.to_string())
    }
}

impl From<toml::ser::Error> for ClinicError {
    fn from(err: toml::ser::Error) -> Self {
        ClinicError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClinicError>;
