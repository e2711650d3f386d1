use textarchive_core::models::{
    ClassificationKind, ClassificationResult, ClassifyRequest, ManualClassifyRequest,
    ManualClassifyResponse,
};

use crate::{ApiClient, Result};

impl ApiClient {
    /// Let the server decide whether `text` is a schedule or a memo.
    ///
    /// Check `needs_manual_selection` on the result; when set, ask the user and
    /// call [`ApiClient::manual_classify`].
    pub async fn classify_text(&self, text: &str) -> Result<ClassificationResult> {
        let body = ClassifyRequest {
            text: text.to_string(),
        };
        self.post_json("/classify", &body).await
    }

    /// Classify `text` as `kind`, bypassing automatic classification.
    pub async fn manual_classify(
        &self,
        text: &str,
        kind: ClassificationKind,
    ) -> Result<ManualClassifyResponse> {
        let body = ManualClassifyRequest {
            text: text.to_string(),
            kind,
        };
        self.post_json("/classify/manual", &body).await
    }
}
