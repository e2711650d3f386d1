use serde::{Deserialize, Serialize};

/// One `[x, y]` vertex of a recognized region.
pub type Point = [f64; 2];

/// One recognized text fragment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrTextDetail {
    pub text: String,
    pub confidence: f64,
    /// Region outline; any number of vertices, not necessarily a rectangle
    #[serde(rename = "box")]
    pub bounding_box: Vec<Point>,
}

/// Request body for `POST /ocr/recognize`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OcrRecognizeRequest {
    pub file_id: String,
}

/// Response of `POST /ocr/recognize`.
///
/// A failed recognition is still a 200 response: `success` is false and
/// `error` carries the reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrResult {
    pub success: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub details: Vec<OcrTextDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OcrResult {
    /// Mean confidence over all fragments, `None` when nothing was recognized.
    pub fn average_confidence(&self) -> Option<f64> {
        if self.details.is_empty() {
            return None;
        }
        let sum: f64 = self.details.iter().map(|d| d.confidence).sum();
        Some(sum / self.details.len() as f64)
    }
}

/// Request body for `POST /ocr/edit`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OcrEditRequest {
    pub file_id: String,
    pub edited_text: String,
}

/// Response of `POST /ocr/edit`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OcrEditResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub edited_text: Option<String>,
}
