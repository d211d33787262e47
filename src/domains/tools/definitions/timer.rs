//! Timer tools. One timer runs per user at a time.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::timer::StartTimerInput;
use crate::api::MilkeeApi;
use crate::domains::tools::registry::{Access, NoParams, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTimerDescriptionParams {
    #[schemars(description = "New description")]
    pub description: String,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_get_timer",
        "Get the current running timer status",
        Access::ReadOnly,
        move |_: NoParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_timer().await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_start_timer",
        "Start a new timer for time tracking",
        Access::ReadWrite,
        move |input: StartTimerInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.start_timer(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_stop_timer",
        "Stop the current running timer and create a time entry",
        Access::ReadWrite,
        move |_: NoParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.stop_timer().await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_timer_description",
        "Update the description of the running timer",
        Access::ReadWrite,
        move |params: UpdateTimerDescriptionParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_timer_description(&params.description).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_discard_timer",
        "Discard the current running timer without creating an entry",
        Access::ReadWrite,
        move |_: NoParams| {
            let api = Arc::clone(&client);
            async move {
                api.discard_timer().await?;
                Ok(json!({ "success": true, "message": "Timer discarded" }))
            }
        },
    );
}
