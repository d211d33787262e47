//! Customer tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::customers::{CreateCustomerInput, ListCustomersParams, UpdateCustomerInput};
use crate::api::MilkeeApi;
use crate::domains::tools::projections::{slim_page, CustomerSummary, SummaryPage};
use crate::domains::tools::registry::{Access, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCustomerParams {
    #[schemars(description = "Customer ID")]
    pub id: u64,
    #[schemars(
        description = "Include relations: taxRate, contacts, proposals, invoices, activeProjects"
    )]
    pub include: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CustomerIdParams {
    #[schemars(description = "Customer ID")]
    pub id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCustomerParams {
    #[schemars(description = "Customer ID")]
    pub id: u64,
    #[serde(flatten)]
    pub data: UpdateCustomerInput,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_customers",
        "List all customers with optional filtering and pagination",
        Access::ReadOnly,
        move |params: ListCustomersParams| {
            let api = Arc::clone(&client);
            async move {
                let page = api.list_customers(&params).await?;
                let slim: SummaryPage<CustomerSummary> = slim_page(page);
                Ok(serde_json::to_value(slim)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_customer",
        "Get details of a specific customer",
        Access::ReadOnly,
        move |params: GetCustomerParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_customer(params.id, params.include.as_deref()).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_customer",
        "Create a new customer",
        Access::ReadWrite,
        move |input: CreateCustomerInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_customer(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_customer",
        "Update an existing customer",
        Access::ReadWrite,
        move |params: UpdateCustomerParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_customer(params.id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_customer",
        "Delete a customer (only if no linked projects or invoices)",
        Access::ReadWrite,
        move |params: CustomerIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_customer(params.id).await?;
                Ok(json!({ "success": true, "message": "Customer deleted" }))
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_customer_statistics",
        "Get financial statistics for a customer (income, expenses, hours, etc.)",
        Access::ReadOnly,
        move |params: CustomerIdParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.customer_statistics(params.id).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_params_split_id_from_body() {
        let params: UpdateCustomerParams = serde_json::from_value(json!({
            "id": 12,
            "name": "Acme AG",
            "city": "Bern"
        }))
        .unwrap();
        assert_eq!(params.id, 12);
        assert_eq!(params.data.name.as_deref(), Some("Acme AG"));
        let body = serde_json::to_value(&params.data).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["city"], "Bern");
    }
}
