//! Timer resource.
//!
//! MILKEE tracks at most one running timer per user, server-side. Stopping
//! the timer converts it into a persisted time entry; discarding it abandons
//! the timer with no entry created.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;
use super::times::TimeEntry;

/// The currently running timer, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timer {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub project_id: u64,
    pub task_id: Option<u64>,
    pub description: Option<String>,
    #[serde(default)]
    pub started_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StartTimerInput {
    #[schemars(description = "Project ID (required)")]
    pub project_id: u64,
    #[schemars(description = "Task ID (optional)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    #[schemars(description = "Timer description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
struct StopTimerBody {
    action: &'static str,
}

#[derive(Debug, Serialize)]
struct TimerDescriptionBody<'a> {
    description: &'a str,
}

impl MilkeeApi {
    /// Fetch the running timer; `data` is null when no timer is active.
    pub async fn get_timer(&self) -> ApiResult<ApiResponse<Option<Timer>>> {
        self.get("/times/timer", Query::new()).await
    }

    pub async fn start_timer(&self, input: &StartTimerInput) -> ApiResult<ApiResponse<Timer>> {
        self.post("/times/timer", input).await
    }

    /// Stop the running timer, converting it into a time entry.
    pub async fn stop_timer(&self) -> ApiResult<ApiResponse<TimeEntry>> {
        self.post("/times/timer", &StopTimerBody { action: "stop" })
            .await
    }

    pub async fn update_timer_description(
        &self,
        description: &str,
    ) -> ApiResult<ApiResponse<Timer>> {
        self.put("/times/timer/description", &TimerDescriptionBody { description })
            .await
    }

    /// Abandon the running timer without creating a time entry.
    pub async fn discard_timer(&self) -> ApiResult<Value> {
        self.delete("/times/timer").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_body_shape() {
        let body = serde_json::to_value(StopTimerBody { action: "stop" }).unwrap();
        assert_eq!(body, serde_json::json!({ "action": "stop" }));
    }

    #[test]
    fn test_timer_keeps_unmodeled_fields() {
        let raw = serde_json::json!({
            "id": 7,
            "project_id": 3,
            "task_id": null,
            "description": "writing",
            "started_at": "2026-08-30 09:00:00",
            "elapsed_seconds": 125
        });
        let timer: Timer = serde_json::from_value(raw).unwrap();
        assert_eq!(timer.extra["elapsed_seconds"], 125);
        let back = serde_json::to_value(&timer).unwrap();
        assert_eq!(back["elapsed_seconds"], 125);
    }

    #[test]
    fn test_timer_response_allows_null_data() {
        let raw = serde_json::json!({ "data": null });
        let response: ApiResponse<Option<Timer>> = serde_json::from_value(raw).unwrap();
        assert!(response.data.is_none());
    }
}
