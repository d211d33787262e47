//! Customers resource.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

/// A client being billed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub contact_name: Option<String>,
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub default_hourly_rate: Option<f64>,
    pub tax_rate_id: Option<u64>,
    #[serde(default)]
    pub archived: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Relations pulled in via `include=` pass through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateCustomerInput {
    #[schemars(description = "Customer name (required, max 255 chars)")]
    pub name: String,
    #[schemars(description = "Contact person name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[schemars(description = "Street address")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[schemars(description = "ZIP/postal code")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[schemars(description = "City")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[schemars(description = "Country")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[schemars(description = "Email address")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[schemars(description = "Phone number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[schemars(description = "Website URL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[schemars(description = "Default hourly rate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,
    #[schemars(description = "Tax rate ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_id: Option<u64>,
}

/// Update payload: every field optional, unset fields stay untouched
/// server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCustomerInput {
    #[schemars(description = "Customer name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[schemars(description = "Contact person name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[schemars(description = "Street address")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[schemars(description = "ZIP/postal code")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[schemars(description = "City")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[schemars(description = "Country")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[schemars(description = "Email address")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[schemars(description = "Phone number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[schemars(description = "Website URL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[schemars(description = "Default hourly rate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,
    #[schemars(description = "Tax rate ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_id: Option<u64>,
}

/// Financial statistics for a single customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerStatistics {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
    #[serde(default)]
    pub profit: f64,
    #[serde(default)]
    pub hours_total: f64,
    #[serde(default)]
    pub hours_billable: f64,
    #[serde(default)]
    pub hours_non_billable: f64,
    #[serde(default)]
    pub hours_open: f64,
    #[serde(default)]
    pub billability_percentage: f64,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCustomersParams {
    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page (default: 15, max: 100)")]
    pub per_page: Option<u32>,
    #[schemars(description = "Filter by name (partial match)")]
    pub name: Option<String>,
    #[schemars(description = "Filter by archived status")]
    pub archived: Option<bool>,
    #[schemars(description = "Include relations: contacts, taxRate")]
    pub include: Option<String>,
}

impl ListCustomersParams {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .page(self.page, self.per_page)
            .filter("name", self.name.as_deref())
            .filter("archived", self.archived)
            .param("include", self.include.as_deref())
    }
}

impl MilkeeApi {
    pub async fn list_customers(
        &self,
        params: &ListCustomersParams,
    ) -> ApiResult<ApiResponse<Vec<Customer>>> {
        self.get("/customers", params.to_query()).await
    }

    pub async fn get_customer(
        &self,
        id: u64,
        include: Option<&str>,
    ) -> ApiResult<ApiResponse<Customer>> {
        let query = Query::new().param("include", include);
        self.get(&format!("/customers/{id}"), query).await
    }

    pub async fn create_customer(
        &self,
        input: &CreateCustomerInput,
    ) -> ApiResult<ApiResponse<Customer>> {
        self.post("/customers", input).await
    }

    pub async fn update_customer(
        &self,
        id: u64,
        input: &UpdateCustomerInput,
    ) -> ApiResult<ApiResponse<Customer>> {
        self.put(&format!("/customers/{id}"), input).await
    }

    pub async fn delete_customer(&self, id: u64) -> ApiResult<Value> {
        self.delete(&format!("/customers/{id}")).await
    }

    pub async fn customer_statistics(&self, id: u64) -> ApiResult<CustomerStatistics> {
        self.get(&format!("/customers/{id}/statistics"), Query::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_uses_bracketed_filters() {
        let params = ListCustomersParams {
            name: Some("Acme".to_string()),
            archived: Some(true),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().params(),
            &[
                ("filter[name]".to_string(), "Acme".to_string()),
                ("filter[archived]".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_query_omits_unset_filters() {
        let params = ListCustomersParams::default();
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn test_update_input_skips_unset_fields() {
        let input = UpdateCustomerInput {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "New Name" }));
    }

    #[test]
    fn test_customer_passes_included_relations_through() {
        let raw = serde_json::json!({
            "id": 3,
            "name": "Acme",
            "archived": false,
            "contacts": [{"id": 1, "name": "Jo"}]
        });
        let customer: Customer = serde_json::from_value(raw).unwrap();
        assert!(customer.extra.contains_key("contacts"));
        let back = serde_json::to_value(&customer).unwrap();
        assert_eq!(back["contacts"][0]["name"], "Jo");
    }
}
