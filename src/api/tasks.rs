//! Tasks resource.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task belonging to one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub project_id: u64,
    pub status: Option<TaskStatus>,
    pub due_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskInput {
    #[schemars(description = "Task title (required)")]
    pub title: String,
    #[schemars(description = "Project ID (required)")]
    pub project_id: u64,
    #[schemars(description = "Task status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[schemars(description = "Due date (YYYY-MM-DD)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskInput {
    #[schemars(description = "Task title")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[schemars(description = "Task status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[schemars(description = "Due date (YYYY-MM-DD)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page")]
    pub per_page: Option<u32>,
    #[schemars(description = "Filter by status")]
    pub status: Option<TaskStatus>,
    #[schemars(description = "Filter by project ID")]
    pub project_id: Option<u64>,
    #[schemars(description = "Include relations")]
    pub include: Option<String>,
}

impl ListTasksParams {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .page(self.page, self.per_page)
            .filter("status", self.status)
            .filter("project_id", self.project_id)
            .param("include", self.include.as_deref())
    }
}

impl MilkeeApi {
    pub async fn list_tasks(&self, params: &ListTasksParams) -> ApiResult<ApiResponse<Vec<Task>>> {
        self.get("/tasks", params.to_query()).await
    }

    pub async fn get_task(&self, id: u64, include: Option<&str>) -> ApiResult<ApiResponse<Task>> {
        let query = Query::new().param("include", include);
        self.get(&format!("/tasks/{id}"), query).await
    }

    pub async fn create_task(&self, input: &CreateTaskInput) -> ApiResult<ApiResponse<Task>> {
        self.post("/tasks", input).await
    }

    pub async fn update_task(
        &self,
        id: u64,
        input: &UpdateTaskInput,
    ) -> ApiResult<ApiResponse<Task>> {
        self.put(&format!("/tasks/{id}"), input).await
    }

    pub async fn delete_task(&self, id: u64) -> ApiResult<Value> {
        self.delete(&format!("/tasks/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            serde_json::json!("in-progress")
        );
        let parsed: TaskStatus = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(parsed, TaskStatus::Open);
    }

    #[test]
    fn test_status_filter_stringified() {
        let params = ListTasksParams {
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().params(),
            &[("filter[status]".to_string(), "in-progress".to_string())]
        );
    }
}
