//! Tag tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::tags::{CreateTagInput, ListTagsParams, UpdateTagInput};
use crate::api::MilkeeApi;
use crate::domains::tools::registry::{Access, NoParams, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TagIdParams {
    #[schemars(description = "Tag ID")]
    pub id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTagParams {
    #[schemars(description = "Tag ID")]
    pub id: u64,
    #[serde(flatten)]
    pub data: UpdateTagInput,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_tags",
        "List all tags",
        Access::ReadOnly,
        move |params: ListTagsParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.list_tags(&params).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_tag",
        "Get details of a specific tag",
        Access::ReadOnly,
        move |params: TagIdParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_tag(params.id).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_tag",
        "Create a new tag",
        Access::ReadWrite,
        move |input: CreateTagInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_tag(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_tag",
        "Update an existing tag",
        Access::ReadWrite,
        move |params: UpdateTagParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_tag(params.id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_tag",
        "Delete a tag",
        Access::ReadWrite,
        move |params: TagIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_tag(params.id).await?;
                Ok(json!({ "success": true, "message": "Tag deleted" }))
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_tag_colors",
        "Get available tag colors",
        Access::ReadOnly,
        move |_: NoParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.tag_colors().await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );
}
