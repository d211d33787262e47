//! Account tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::accounts::{CreateAccountInput, ListAccountsParams, UpdateAccountInput};
use crate::api::MilkeeApi;
use crate::domains::tools::registry::{Access, NoParams, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AccountIdParams {
    #[schemars(description = "Account ID")]
    pub id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateAccountParams {
    #[schemars(description = "Account ID")]
    pub id: u64,
    #[serde(flatten)]
    pub data: UpdateAccountInput,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_accounts",
        "List all accounts (bank, income, expense, assets, etc.)",
        Access::ReadOnly,
        move |params: ListAccountsParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.list_accounts(&params).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_account",
        "Get details of a specific account",
        Access::ReadOnly,
        move |params: AccountIdParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_account(params.id).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_account",
        "Create a new account",
        Access::ReadWrite,
        move |input: CreateAccountInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_account(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_account",
        "Update an existing account",
        Access::ReadWrite,
        move |params: UpdateAccountParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_account(params.id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_account",
        "Delete an account (only if no associated entries)",
        Access::ReadWrite,
        move |params: AccountIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_account(params.id).await?;
                Ok(json!({ "success": true, "message": "Account deleted" }))
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_reset_accounts",
        "Reset the chart of accounts to the default set (removes custom accounts)",
        Access::ReadWrite,
        move |_: NoParams| {
            let api = Arc::clone(&client);
            async move {
                api.reset_accounts().await?;
                Ok(json!({ "success": true, "message": "Accounts reset" }))
            }
        },
    );
}
