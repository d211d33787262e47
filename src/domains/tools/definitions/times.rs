//! Time-entry tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::times::{CreateTimeInput, ListTimesParams, UpdateTimeInput};
use crate::api::MilkeeApi;
use crate::domains::tools::registry::{Access, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTimeParams {
    #[schemars(description = "Time entry ID")]
    pub id: u64,
    #[schemars(description = "Include relations")]
    pub include: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TimeIdParams {
    #[schemars(description = "Time entry ID")]
    pub id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTimeParams {
    #[schemars(description = "Time entry ID")]
    pub id: u64,
    #[serde(flatten)]
    pub data: UpdateTimeInput,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_times",
        "List time entries with optional filtering",
        Access::ReadOnly,
        move |params: ListTimesParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.list_times(&params).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_time",
        "Get details of a specific time entry",
        Access::ReadOnly,
        move |params: GetTimeParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_time(params.id, params.include.as_deref()).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_time",
        "Create a new time entry",
        Access::ReadWrite,
        move |input: CreateTimeInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_time(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_time",
        "Update an existing time entry",
        Access::ReadWrite,
        move |params: UpdateTimeParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_time(params.id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_time",
        "Delete a time entry (cannot delete invoiced entries)",
        Access::ReadWrite,
        move |params: TimeIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_time(params.id).await?;
                Ok(json!({ "success": true, "message": "Time entry deleted" }))
            }
        },
    );
}
