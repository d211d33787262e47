//! Time entries resource.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

/// Grouping modes for time entry listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeGroupBy {
    Date,
    Project,
    Weeks,
}

impl TimeGroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Project => "project",
            Self::Weeks => "weeks",
        }
    }
}

impl fmt::Display for TimeGroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked unit of work on a project, optionally tied to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub project_id: u64,
    pub task_id: Option<u64>,
    #[serde(default)]
    pub user_id: u64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    pub description: Option<String>,
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub billable: bool,
    pub total_value: Option<f64>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTimeInput {
    #[schemars(description = "Project ID (required)")]
    pub project_id: u64,
    #[schemars(description = "Date (YYYY-MM-DD, required)")]
    pub date: String,
    #[schemars(description = "Hours (required)")]
    pub hours: u32,
    #[schemars(description = "Minutes (required)")]
    pub minutes: u32,
    #[schemars(description = "Description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(description = "Hourly rate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[schemars(description = "Is billable")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[schemars(description = "Task ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    #[schemars(description = "Start time (HH:MM)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[schemars(description = "End time (HH:MM)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTimeInput {
    #[schemars(description = "Project ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[schemars(description = "Date (YYYY-MM-DD)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[schemars(description = "Hours")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
    #[schemars(description = "Minutes")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    #[schemars(description = "Description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(description = "Hourly rate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[schemars(description = "Is billable")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[schemars(description = "Task ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTimesParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page")]
    pub per_page: Option<u32>,
    #[schemars(description = "Filter by user ID")]
    pub user_id: Option<u64>,
    #[schemars(description = "Filter by customer ID")]
    pub customer_id: Option<u64>,
    #[schemars(description = "Filter by project ID")]
    pub project_id: Option<u64>,
    #[schemars(description = "Filter by billable status")]
    pub billable: Option<bool>,
    #[schemars(description = "Filter by status")]
    pub status: Option<String>,
    #[schemars(description = "Filter by date (YYYY-MM-DD or range)")]
    pub date: Option<String>,
    #[schemars(description = "Group results by")]
    pub group_by: Option<TimeGroupBy>,
    #[schemars(description = "Include relations: project, task, user")]
    pub include: Option<String>,
}

impl ListTimesParams {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .page(self.page, self.per_page)
            .filter("user_id", self.user_id)
            .filter("customer_id", self.customer_id)
            .filter("project_id", self.project_id)
            .filter("billable", self.billable)
            .filter("status", self.status.as_deref())
            .filter("date", self.date.as_deref())
            .param("group_by", self.group_by)
            .param("include", self.include.as_deref())
    }
}

impl MilkeeApi {
    pub async fn list_times(
        &self,
        params: &ListTimesParams,
    ) -> ApiResult<ApiResponse<Vec<TimeEntry>>> {
        self.get("/times", params.to_query()).await
    }

    pub async fn get_time(
        &self,
        id: u64,
        include: Option<&str>,
    ) -> ApiResult<ApiResponse<TimeEntry>> {
        let query = Query::new().param("include", include);
        self.get(&format!("/times/{id}"), query).await
    }

    pub async fn create_time(&self, input: &CreateTimeInput) -> ApiResult<ApiResponse<TimeEntry>> {
        self.post("/times", input).await
    }

    pub async fn update_time(
        &self,
        id: u64,
        input: &UpdateTimeInput,
    ) -> ApiResult<ApiResponse<TimeEntry>> {
        self.put(&format!("/times/{id}"), input).await
    }

    pub async fn delete_time(&self, id: u64) -> ApiResult<Value> {
        self.delete(&format!("/times/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_covers_all_filters() {
        let params = ListTimesParams {
            project_id: Some(4),
            billable: Some(true),
            date: Some("2026-01-01".to_string()),
            group_by: Some(TimeGroupBy::Weeks),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().params(),
            &[
                ("filter[project_id]".to_string(), "4".to_string()),
                ("filter[billable]".to_string(), "true".to_string()),
                ("filter[date]".to_string(), "2026-01-01".to_string()),
                ("group_by".to_string(), "weeks".to_string()),
            ]
        );
    }
}
