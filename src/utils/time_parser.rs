use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::errors::{ClinicError, Result};

pub struct TimeParser;

impl TimeParser {
    /// 解析 YYYY-MM-DD 日期
    pub fn parse_date(input: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
            ClinicError::date_parse(format!("Invalid date '{}'. Use YYYY-MM-DD", input))
        })
    }

    /// 解析 HH:MM 时间并规范化为两位小时
    pub fn parse_clock_time(input: &str) -> Result<String> {
        let time = NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|_| {
            ClinicError::date_parse(format!("Invalid time '{}'. Use HH:MM", input))
        })?;
        Ok(time.format("%H:%M").to_string())
    }

    /// 格式化持续时间为人类可读的字符串
    pub fn format_duration_human(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
        let duration = to.signed_duration_since(from);

        if duration.num_seconds() < 0 {
            return "0s".to_string();
        }

        let days = duration.num_days();
        let hours = (duration.num_seconds() % 86400) / 3600;
        let minutes = (duration.num_seconds() % 3600) / 60;

        if days > 0 {
            if hours > 0 {
                format!("{}d {}h", days, hours)
            } else {
                format!("{}d", days)
            }
        } else if hours > 0 {
            if minutes > 0 {
                format!("{}h {}m", hours, minutes)
            } else {
                format!("{}h", hours)
            }
        } else if minutes > 0 {
            format!("{}m", minutes)
        } else {
            format!("{}s", duration.num_seconds())
        }
    }
}
