//! OCR endpoints. Images are never sent here: upload them first and pass the
//! returned `file_id`.

use textarchive_core::models::{OcrEditRequest, OcrEditResponse, OcrRecognizeRequest, OcrResult};

use crate::{ApiClient, Result};

impl ApiClient {
    /// Run recognition on a previously uploaded image.
    ///
    /// A recognition failure on the server side is reported in the body
    /// (`success == false`, `error`), not as an `Err`.
    pub async fn recognize_image(&self, file_id: &str) -> Result<OcrResult> {
        let body = OcrRecognizeRequest {
            file_id: file_id.to_string(),
        };
        self.post_json("/ocr/recognize", &body).await
    }

    /// Save the user's correction of the recognized text.
    pub async fn edit_ocr_result(&self, file_id: &str, edited_text: &str) -> Result<OcrEditResponse> {
        let body = OcrEditRequest {
            file_id: file_id.to_string(),
            edited_text: edited_text.to_string(),
        };
        self.post_json("/ocr/edit", &body).await
    }
}
