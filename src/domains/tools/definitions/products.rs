//! Product tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::products::{CreateProductInput, ListProductsParams, UpdateProductInput};
use crate::api::MilkeeApi;
use crate::domains::tools::registry::{Access, NoParams, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProductIdParams {
    #[schemars(description = "Product ID")]
    pub id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateProductParams {
    #[schemars(description = "Product ID")]
    pub id: u64,
    #[serde(flatten)]
    pub data: UpdateProductInput,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_products",
        "List all products",
        Access::ReadOnly,
        move |params: ListProductsParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.list_products(&params).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_product",
        "Get details of a specific product",
        Access::ReadOnly,
        move |params: ProductIdParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_product(params.id).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_product",
        "Create a new product",
        Access::ReadWrite,
        move |input: CreateProductInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_product(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_product",
        "Update an existing product",
        Access::ReadWrite,
        move |params: UpdateProductParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_product(params.id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_product",
        "Delete a product",
        Access::ReadWrite,
        move |params: ProductIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_product(params.id).await?;
                Ok(json!({ "success": true, "message": "Product deleted" }))
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_product_count",
        "Get the total number of products",
        Access::ReadOnly,
        move |_: NoParams| {
            let api = Arc::clone(&client);
            async move {
                let count = api.product_count().await?;
                Ok(json!({ "count": count }))
            }
        },
    );
}
