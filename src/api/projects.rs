//! Projects resource.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

/// How a project is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ProjectType {
    ByHour,
    FixedBudget,
    FixedPrice,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ByHour => "byHour",
            Self::FixedBudget => "fixedBudget",
            Self::FixedPrice => "fixedPrice",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project belonging to one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub customer_id: u64,
    pub project_type: Option<ProjectType>,
    pub budget: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub kanban_status: Option<String>,
    #[serde(default)]
    pub archived: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectInput {
    #[schemars(description = "Project name (required)")]
    pub name: String,
    #[schemars(description = "Customer ID (or use newCustomerName)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[schemars(description = "Create new customer with this name")]
    #[serde(rename = "newCustomerName", skip_serializing_if = "Option::is_none")]
    pub new_customer_name: Option<String>,
    #[schemars(description = "Project billing type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[schemars(description = "Project budget")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[schemars(description = "Hourly rate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProjectInput {
    #[schemars(description = "Project name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[schemars(description = "Project budget")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[schemars(description = "Start date (YYYY-MM-DD)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[schemars(description = "End date (YYYY-MM-DD)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[schemars(description = "Kanban status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kanban_status: Option<String>,
    #[schemars(description = "Archive status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page (max: 100)")]
    pub per_page: Option<u32>,
    #[schemars(description = "Filter by archived status")]
    pub archived: Option<bool>,
    #[schemars(description = "Filter by customer ID")]
    pub customer_id: Option<u64>,
    #[schemars(description = "Include relations")]
    pub include: Option<String>,
}

impl ListProjectsParams {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .page(self.page, self.per_page)
            .filter("archived", self.archived)
            .filter("customer_id", self.customer_id)
            .param("include", self.include.as_deref())
    }
}

/// Body for the bulk archive/unarchive endpoint.
#[derive(Debug, Serialize)]
struct BulkArchiveBody<'a> {
    ids: &'a [u64],
    archive: bool,
}

impl MilkeeApi {
    pub async fn list_projects(
        &self,
        params: &ListProjectsParams,
    ) -> ApiResult<ApiResponse<Vec<Project>>> {
        self.get("/projects", params.to_query()).await
    }

    pub async fn get_project(
        &self,
        id: u64,
        include: Option<&str>,
    ) -> ApiResult<ApiResponse<Project>> {
        let query = Query::new().param("include", include);
        self.get(&format!("/projects/{id}"), query).await
    }

    pub async fn create_project(
        &self,
        input: &CreateProjectInput,
    ) -> ApiResult<ApiResponse<Project>> {
        self.post("/projects", input).await
    }

    pub async fn update_project(
        &self,
        id: u64,
        input: &UpdateProjectInput,
    ) -> ApiResult<ApiResponse<Project>> {
        self.put(&format!("/projects/{id}"), input).await
    }

    pub async fn delete_project(&self, id: u64) -> ApiResult<Value> {
        self.delete(&format!("/projects/{id}")).await
    }

    /// Archive or unarchive a batch of projects in a single request.
    pub async fn bulk_archive_projects(&self, ids: &[u64], archive: bool) -> ApiResult<Value> {
        self.post("/projects/multiple", &BulkArchiveBody { ids, archive })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_wire_spelling() {
        assert_eq!(
            serde_json::to_value(ProjectType::ByHour).unwrap(),
            serde_json::json!("byHour")
        );
        assert_eq!(
            serde_json::to_value(ProjectType::FixedBudget).unwrap(),
            serde_json::json!("fixedBudget")
        );
        let parsed: ProjectType = serde_json::from_str("\"fixedPrice\"").unwrap();
        assert_eq!(parsed, ProjectType::FixedPrice);
    }

    #[test]
    fn test_create_input_renames_new_customer_name() {
        let input = CreateProjectInput {
            name: "Site".to_string(),
            customer_id: None,
            new_customer_name: Some("Acme".to_string()),
            project_type: None,
            budget: None,
            hourly_rate: None,
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "name": "Site", "newCustomerName": "Acme" })
        );
    }

    #[test]
    fn test_list_query_filters() {
        let params = ListProjectsParams {
            customer_id: Some(9),
            archived: Some(false),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().params(),
            &[
                ("filter[archived]".to_string(), "false".to_string()),
                ("filter[customer_id]".to_string(), "9".to_string()),
            ]
        );
    }
}
