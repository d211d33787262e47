//! Contacts resource, scoped under a customer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub customer_id: u64,
    #[serde(default)]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateContactInput {
    #[schemars(description = "Contact name (required)")]
    pub name: String,
    #[schemars(description = "Email address")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[schemars(description = "Phone number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[schemars(description = "Job position")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateContactInput {
    #[schemars(description = "Contact name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[schemars(description = "Email address")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[schemars(description = "Phone number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[schemars(description = "Job position")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl MilkeeApi {
    pub async fn list_contacts(
        &self,
        customer_id: u64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> ApiResult<ApiResponse<Vec<Contact>>> {
        let query = Query::new().page(page, per_page);
        self.get(&format!("/customers/{customer_id}/contacts"), query)
            .await
    }

    pub async fn create_contact(
        &self,
        customer_id: u64,
        input: &CreateContactInput,
    ) -> ApiResult<ApiResponse<Contact>> {
        self.post(&format!("/customers/{customer_id}/contacts"), input)
            .await
    }

    pub async fn update_contact(
        &self,
        customer_id: u64,
        contact_id: u64,
        input: &UpdateContactInput,
    ) -> ApiResult<ApiResponse<Contact>> {
        self.put(
            &format!("/customers/{customer_id}/contacts/{contact_id}"),
            input,
        )
        .await
    }

    pub async fn delete_contact(&self, customer_id: u64, contact_id: u64) -> ApiResult<Value> {
        self.delete(&format!("/customers/{customer_id}/contacts/{contact_id}"))
            .await
    }
}
