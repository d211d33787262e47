//! Task tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::tasks::{CreateTaskInput, ListTasksParams, UpdateTaskInput};
use crate::api::MilkeeApi;
use crate::domains::tools::registry::{Access, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTaskParams {
    #[schemars(description = "Task ID")]
    pub id: u64,
    #[schemars(description = "Include relations")]
    pub include: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    #[schemars(description = "Task ID")]
    pub id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task ID")]
    pub id: u64,
    #[serde(flatten)]
    pub data: UpdateTaskInput,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_tasks",
        "List all tasks with optional filtering",
        Access::ReadOnly,
        move |params: ListTasksParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.list_tasks(&params).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_task",
        "Get details of a specific task",
        Access::ReadOnly,
        move |params: GetTaskParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_task(params.id, params.include.as_deref()).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_task",
        "Create a new task",
        Access::ReadWrite,
        move |input: CreateTaskInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_task(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_task",
        "Update an existing task",
        Access::ReadWrite,
        move |params: UpdateTaskParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_task(params.id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_task",
        "Delete a task",
        Access::ReadWrite,
        move |params: TaskIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_task(params.id).await?;
                Ok(json!({ "success": true, "message": "Task deleted" }))
            }
        },
    );
}
