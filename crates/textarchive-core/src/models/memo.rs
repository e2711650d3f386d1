use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Separator used when joining tags for display and storage.
pub const TAG_SEPARATOR: &str = ", ";

/// Memo record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Memo {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub summary: String,
    /// Comma-joined tag string as stored server-side
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    /// Tags parsed into an ordered list.
    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(self.tags.as_deref())
    }
}

/// Request DTO for creating a memo
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoCreateRequest {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Request DTO for a partial memo update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Response of `GET /memos`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoListResponse {
    pub memos: Vec<Memo>,
    pub total: u64,
}

/// Split a comma-joined tag string into trimmed, non-empty tags.
///
/// `None` yields an empty list. Order is preserved and duplicates are kept.
pub fn parse_tags(tags: Option<&str>) -> Vec<String> {
    let Some(tags) = tags else {
        return Vec::new();
    };
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags with `", "`. Tags must not contain commas; nothing is escaped.
pub fn format_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}
