//! Contact tools, scoped under a customer.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::contacts::{CreateContactInput, UpdateContactInput};
use crate::api::MilkeeApi;
use crate::domains::tools::registry::{Access, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListContactsParams {
    #[schemars(description = "Customer ID (required)")]
    pub customer_id: u64,
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page")]
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateContactParams {
    #[schemars(description = "Customer ID (required)")]
    pub customer_id: u64,
    #[serde(flatten)]
    pub data: CreateContactInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateContactParams {
    #[schemars(description = "Customer ID")]
    pub customer_id: u64,
    #[schemars(description = "Contact ID")]
    pub contact_id: u64,
    #[serde(flatten)]
    pub data: UpdateContactInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ContactIdParams {
    #[schemars(description = "Customer ID")]
    pub customer_id: u64,
    #[schemars(description = "Contact ID")]
    pub contact_id: u64,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_contacts",
        "List contacts for a customer",
        Access::ReadOnly,
        move |params: ListContactsParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api
                    .list_contacts(params.customer_id, params.page, params.per_page)
                    .await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_contact",
        "Create a new contact for a customer",
        Access::ReadWrite,
        move |params: CreateContactParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_contact(params.customer_id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_contact",
        "Update an existing contact",
        Access::ReadWrite,
        move |params: UpdateContactParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api
                    .update_contact(params.customer_id, params.contact_id, &params.data)
                    .await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_contact",
        "Delete a contact",
        Access::ReadWrite,
        move |params: ContactIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_contact(params.customer_id, params.contact_id).await?;
                Ok(json!({ "success": true, "message": "Contact deleted" }))
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_params_keep_scope_out_of_body() {
        let params: CreateContactParams = serde_json::from_value(json!({
            "customer_id": 9,
            "name": "Jo Muster",
            "position": "CFO"
        }))
        .unwrap();
        assert_eq!(params.customer_id, 9);
        let body = serde_json::to_value(&params.data).unwrap();
        assert!(body.get("customer_id").is_none());
        assert_eq!(body["name"], "Jo Muster");
    }
}
