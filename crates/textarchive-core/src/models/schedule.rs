use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown when a schedule has neither date nor time.
pub const UNSET_DATE_TIME: &str = "未设置时间";

/// Schedule entry as returned by the backend.
///
/// `date` (`YYYY-MM-DD`) and `time` (`HH:MM[:SS]`) are independently optional
/// and kept as the strings the server sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    pub description: String,
    pub original_text: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    pub fn display_date_time(&self) -> String {
        format_date_time(self.date.as_deref(), self.time.as_deref())
    }
}

/// Request DTO for creating a schedule
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub description: String,
    pub original_text: String,
}

/// Request DTO for a partial schedule update
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

/// Response of `GET /schedules`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleListResponse {
    pub schedules: Vec<Schedule>,
    pub total: u64,
}

/// Display string for an optional date and time. Empty strings count as absent.
pub fn format_date_time(date: Option<&str>, time: Option<&str>) -> String {
    let date = date.filter(|d| !d.is_empty());
    let time = time.filter(|t| !t.is_empty());
    match (date, time) {
        (None, None) => UNSET_DATE_TIME.to_string(),
        (Some(date), Some(time)) => format!("{} {}", date, time),
        (Some(date), None) => date.to_string(),
        (None, Some(time)) => time.to_string(),
    }
}
