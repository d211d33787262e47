//! Products resource. Catalog items for invoice/proposal line items.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    pub unit: Option<String>,
    #[serde(default)]
    pub archived: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateProductInput {
    #[schemars(description = "Product name (required)")]
    pub name: String,
    #[schemars(description = "Product description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(description = "Product price (required)")]
    pub price: f64,
    #[schemars(description = "Unit (e.g., hour, piece)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProductInput {
    #[schemars(description = "Product name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[schemars(description = "Product description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(description = "Product price")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[schemars(description = "Unit")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListProductsParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page")]
    pub per_page: Option<u32>,
    #[schemars(description = "Filter by name")]
    pub name: Option<String>,
    #[schemars(description = "Filter by archived status")]
    pub archived: Option<bool>,
}

impl ListProductsParams {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .page(self.page, self.per_page)
            .filter("name", self.name.as_deref())
            .filter("archived", self.archived)
    }
}

impl MilkeeApi {
    pub async fn list_products(
        &self,
        params: &ListProductsParams,
    ) -> ApiResult<ApiResponse<Vec<Product>>> {
        self.get("/products", params.to_query()).await
    }

    pub async fn get_product(&self, id: u64) -> ApiResult<ApiResponse<Product>> {
        self.get(&format!("/products/{id}"), Query::new()).await
    }

    pub async fn create_product(
        &self,
        input: &CreateProductInput,
    ) -> ApiResult<ApiResponse<Product>> {
        self.post("/products", input).await
    }

    pub async fn update_product(
        &self,
        id: u64,
        input: &UpdateProductInput,
    ) -> ApiResult<ApiResponse<Product>> {
        self.put(&format!("/products/{id}"), input).await
    }

    pub async fn delete_product(&self, id: u64) -> ApiResult<Value> {
        self.delete(&format!("/products/{id}")).await
    }

    /// Total number of products; the endpoint answers a bare number.
    pub async fn product_count(&self) -> ApiResult<u64> {
        self.get("/products/count", Query::new()).await
    }
}
