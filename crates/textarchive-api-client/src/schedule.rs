use textarchive_core::models::{
    Schedule, ScheduleCreateRequest, ScheduleListResponse, ScheduleUpdateRequest,
};

use crate::{path_segment, ApiClient, Result};

impl ApiClient {
    pub async fn create_schedule(&self, request: &ScheduleCreateRequest) -> Result<Schedule> {
        self.post_json("/schedules", request).await
    }

    /// List schedules, optionally bounded by `start_date` / `end_date` (`YYYY-MM-DD`).
    pub async fn list_schedules(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<ScheduleListResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(start) = start_date.filter(|d| !d.is_empty()) {
            query.push(("start_date", start.to_string()));
        }
        if let Some(end) = end_date.filter(|d| !d.is_empty()) {
            query.push(("end_date", end.to_string()));
        }
        self.get("/schedules", &query).await
    }

    pub async fn get_schedule(&self, id: &str) -> Result<Schedule> {
        self.get(&format!("/schedules/{}", path_segment(id)), &[])
            .await
    }

    pub async fn update_schedule(
        &self,
        id: &str,
        request: &ScheduleUpdateRequest,
    ) -> Result<Schedule> {
        self.put_json(&format!("/schedules/{}", path_segment(id)), request)
            .await
    }

    pub async fn delete_schedule(&self, id: &str) -> Result<()> {
        self.delete(&format!("/schedules/{}", path_segment(id)))
            .await
    }
}
