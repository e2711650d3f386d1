use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category a piece of text is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationKind {
    Schedule,
    Memo,
}

impl FromStr for ClassificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "schedule" => Ok(ClassificationKind::Schedule),
            "memo" => Ok(ClassificationKind::Memo),
            _ => Err(format!(
                "Invalid classification type: {} (expected schedule or memo)",
                s
            )),
        }
    }
}

impl Display for ClassificationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ClassificationKind::Schedule => write!(f, "schedule"),
            ClassificationKind::Memo => write!(f, "memo"),
        }
    }
}

/// Request body for `POST /classify`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifyRequest {
    pub text: String,
}

/// Request body for `POST /classify/manual`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManualClassifyRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ClassificationKind,
}

/// Structured fields pulled out of the text by the classifier.
///
/// Schedule extraction fills date/time/description, memo extraction fills
/// summary/tags. Keys the client does not model are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response of `POST /classify`.
///
/// `needs_manual_selection` is decided server-side; when set, the caller is
/// expected to ask the user and go through `manual_classify` instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    #[serde(rename = "type")]
    pub kind: ClassificationKind,
    pub confidence: f64,
    #[serde(default)]
    pub extracted_data: ExtractedData,
    pub needs_manual_selection: bool,
}

/// Response of `POST /classify/manual`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManualClassifyResponse {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: ClassificationKind,
    #[serde(default)]
    pub extracted_data: ExtractedData,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(
            "Schedule".parse::<ClassificationKind>().unwrap(),
            ClassificationKind::Schedule
        );
        assert_eq!(
            " memo ".parse::<ClassificationKind>().unwrap(),
            ClassificationKind::Memo
        );
        assert!("note".parse::<ClassificationKind>().is_err());
    }

    #[test]
    fn kind_display_matches_wire_format() {
        assert_eq!(ClassificationKind::Schedule.to_string(), "schedule");
        assert_eq!(
            serde_json::to_string(&ClassificationKind::Memo).unwrap(),
            "\"memo\""
        );
    }

    #[test]
    fn classification_keeps_unknown_extracted_keys() {
        let json = r#"{
            "type": "schedule",
            "confidence": 0.42,
            "extracted_data": {"date": "2024-01-15", "time": "14:30", "location": "room 3"},
            "needs_manual_selection": true
        }"#;
        let result: ClassificationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.kind, ClassificationKind::Schedule);
        assert!(result.needs_manual_selection);
        assert_eq!(result.extracted_data.date.as_deref(), Some("2024-01-15"));
        assert_eq!(result.extracted_data.tags, None);
        assert_eq!(
            result.extracted_data.extra.get("location"),
            Some(&serde_json::json!("room 3"))
        );
    }

    #[test]
    fn manual_request_uses_type_key() {
        let body = serde_json::to_value(ManualClassifyRequest {
            text: "buy milk".into(),
            kind: ClassificationKind::Memo,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"text": "buy milk", "type": "memo"}));
    }
}
