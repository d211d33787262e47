//! Tax-rate tools. Read-only lookups.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::MilkeeApi;
use crate::domains::tools::registry::{Access, NoParams, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaxRateIdParams {
    #[schemars(description = "Tax rate ID")]
    pub id: u64,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_tax_rates",
        "List all available tax rates",
        Access::ReadOnly,
        move |_: NoParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.list_tax_rates().await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_tax_rate",
        "Get details of a specific tax rate",
        Access::ReadOnly,
        move |params: TaxRateIdParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_tax_rate(params.id).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );
}
