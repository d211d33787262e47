//! Project tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::projects::{CreateProjectInput, ListProjectsParams, UpdateProjectInput};
use crate::api::MilkeeApi;
use crate::domains::tools::registry::{Access, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProjectParams {
    #[schemars(description = "Project ID")]
    pub id: u64,
    #[schemars(description = "Include relations: customer, invoices, tasks")]
    pub include: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProjectIdParams {
    #[schemars(description = "Project ID")]
    pub id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    #[schemars(description = "Project ID")]
    pub id: u64,
    #[serde(flatten)]
    pub data: UpdateProjectInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BulkArchiveProjectsParams {
    #[schemars(description = "Project IDs")]
    pub ids: Vec<u64>,
    #[schemars(description = "True to archive, false to unarchive")]
    pub archive: bool,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_projects",
        "List all projects with optional filtering",
        Access::ReadOnly,
        move |params: ListProjectsParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.list_projects(&params).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_project",
        "Get details of a specific project",
        Access::ReadOnly,
        move |params: GetProjectParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_project(params.id, params.include.as_deref()).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_project",
        "Create a new project",
        Access::ReadWrite,
        move |input: CreateProjectInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_project(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_project",
        "Update an existing project",
        Access::ReadWrite,
        move |params: UpdateProjectParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_project(params.id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_project",
        "Delete a project (only if no billable time entries)",
        Access::ReadWrite,
        move |params: ProjectIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_project(params.id).await?;
                Ok(json!({ "success": true, "message": "Project deleted" }))
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_bulk_archive_projects",
        "Archive or unarchive multiple projects",
        Access::ReadWrite,
        move |params: BulkArchiveProjectsParams| {
            let api = Arc::clone(&client);
            async move {
                api.bulk_archive_projects(&params.ids, params.archive).await?;
                let message = if params.archive {
                    "Projects archived"
                } else {
                    "Projects unarchived"
                };
                Ok(json!({ "success": true, "message": message }))
            }
        },
    );
}
