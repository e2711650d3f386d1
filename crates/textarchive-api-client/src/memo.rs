use textarchive_core::models::{Memo, MemoCreateRequest, MemoListResponse, MemoUpdateRequest};

use crate::{path_segment, ApiClient, Result};

impl ApiClient {
    pub async fn create_memo(&self, request: &MemoCreateRequest) -> Result<Memo> {
        self.post_json("/memos", request).await
    }

    /// List memos, optionally filtered by `tags`. The filter is sent verbatim.
    pub async fn list_memos(&self, tags: Option<&str>) -> Result<MemoListResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(tags) = tags.filter(|t| !t.is_empty()) {
            query.push(("tags", tags.to_string()));
        }
        self.get("/memos", &query).await
    }

    pub async fn get_memo(&self, id: &str) -> Result<Memo> {
        self.get(&format!("/memos/{}", path_segment(id)), &[]).await
    }

    pub async fn update_memo(&self, id: &str, request: &MemoUpdateRequest) -> Result<Memo> {
        self.put_json(&format!("/memos/{}", path_segment(id)), request)
            .await
    }

    pub async fn delete_memo(&self, id: &str) -> Result<()> {
        self.delete(&format!("/memos/{}", path_segment(id))).await
    }
}
