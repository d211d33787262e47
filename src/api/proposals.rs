//! Proposals (quotes) resource.
//!
//! Proposals share the line-item model with invoices; an accepted
//! proposal can be converted into a draft invoice server-side.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;
use super::invoices::Invoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Draft,
    Sent,
    Accepted,
    Declined,
    Expired,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub company_id: u64,
    #[serde(default)]
    pub customer_id: u64,
    pub contact_id: Option<u64>,
    pub project_id: Option<u64>,
    /// Set once the proposal has been converted.
    pub invoice_id: Option<u64>,
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub title: String,
    pub lang: Option<String>,
    #[serde(default)]
    pub date: String,
    pub valid_until: Option<String>,
    /// Opaque serialized line-item list; passed through untouched.
    pub positions: Option<String>,
    pub remarks_top: Option<String>,
    pub remarks: Option<String>,
    pub status: ProposalStatus,
    pub currency: Option<String>,
    #[serde(default)]
    pub total_value: f64,
    pub discount_rate: Option<f64>,
    pub discount_amount: Option<f64>,
    #[serde(default)]
    pub total_value_with_discount: f64,
    #[serde(default)]
    pub vat_active: bool,
    pub vat_rate: Option<f64>,
    pub vat_amount: Option<f64>,
    pub total_value_with_vat: Option<f64>,
    #[serde(default)]
    pub final_value: f64,
    #[serde(default)]
    pub with_signature: bool,
    pub signature_remark: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateProposalInput {
    #[schemars(description = "Customer ID (required)")]
    pub customer_id: u64,
    #[schemars(description = "Proposal title (required)")]
    pub title: String,
    #[schemars(description = "Proposal date (YYYY-MM-DD, required)")]
    pub date: String,
    #[schemars(description = "Validity date (YYYY-MM-DD, required)")]
    pub valid_until: String,
    #[schemars(description = "Serialized line items (JSON string, required)")]
    pub positions: String,
    #[schemars(description = "Contact ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<u64>,
    #[schemars(description = "Project ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[schemars(description = "Language code (e.g. de, en)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[schemars(description = "Remarks above the line items")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks_top: Option<String>,
    #[schemars(description = "Remarks below the line items")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[schemars(description = "Currency code")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[schemars(description = "Discount rate (percent)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    #[schemars(description = "Discount amount")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    #[schemars(description = "Whether VAT applies")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_active: Option<bool>,
    #[schemars(description = "VAT rate (percent)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
    #[schemars(description = "Request a signature on acceptance")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_signature: Option<bool>,
    #[schemars(description = "Remark shown next to the signature field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_remark: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProposalInput {
    #[schemars(description = "Customer ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[schemars(description = "Proposal title")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[schemars(description = "Proposal date (YYYY-MM-DD)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[schemars(description = "Validity date (YYYY-MM-DD)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
    #[schemars(description = "Serialized line items (JSON string)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<String>,
    #[schemars(description = "Proposal status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProposalStatus>,
    #[schemars(description = "Contact ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<u64>,
    #[schemars(description = "Project ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[schemars(description = "Language code")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[schemars(description = "Remarks above the line items")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks_top: Option<String>,
    #[schemars(description = "Remarks below the line items")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[schemars(description = "Currency code")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[schemars(description = "Discount rate (percent)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    #[schemars(description = "Discount amount")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    #[schemars(description = "Whether VAT applies")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_active: Option<bool>,
    #[schemars(description = "VAT rate (percent)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
    #[schemars(description = "Request a signature on acceptance")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_signature: Option<bool>,
    #[schemars(description = "Remark shown next to the signature field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_remark: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListProposalsParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page (max: 100)")]
    pub per_page: Option<u32>,
    #[schemars(description = "Filter by status")]
    pub status: Option<ProposalStatus>,
    #[schemars(description = "Filter by customer ID")]
    pub customer_id: Option<u64>,
    #[schemars(description = "Filter by project ID")]
    pub project_id: Option<u64>,
    #[schemars(description = "Filter by date")]
    pub date: Option<String>,
    #[schemars(description = "Sort field")]
    pub sort: Option<String>,
    #[schemars(description = "Include relations: customer, contact, project")]
    pub include: Option<String>,
}

impl ListProposalsParams {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .page(self.page, self.per_page)
            .filter("status", self.status)
            .filter("customer_id", self.customer_id)
            .filter("project_id", self.project_id)
            .filter("date", self.date.as_deref())
            .param("sort", self.sort.as_deref())
            .param("include", self.include.as_deref())
    }
}

#[derive(Debug, Serialize)]
struct SendBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

impl MilkeeApi {
    pub async fn list_proposals(
        &self,
        params: &ListProposalsParams,
    ) -> ApiResult<ApiResponse<Vec<Proposal>>> {
        self.get("/proposals", params.to_query()).await
    }

    pub async fn get_proposal(
        &self,
        id: u64,
        include: Option<&str>,
    ) -> ApiResult<ApiResponse<Proposal>> {
        let query = Query::new().param("include", include);
        self.get(&format!("/proposals/{id}"), query).await
    }

    pub async fn create_proposal(
        &self,
        input: &CreateProposalInput,
    ) -> ApiResult<ApiResponse<Proposal>> {
        self.post("/proposals", input).await
    }

    pub async fn update_proposal(
        &self,
        id: u64,
        input: &UpdateProposalInput,
    ) -> ApiResult<ApiResponse<Proposal>> {
        self.put(&format!("/proposals/{id}"), input).await
    }

    pub async fn delete_proposal(&self, id: u64) -> ApiResult<Value> {
        self.delete(&format!("/proposals/{id}")).await
    }

    pub async fn send_proposal(
        &self,
        id: u64,
        email: Option<&str>,
    ) -> ApiResult<ApiResponse<Proposal>> {
        self.post(&format!("/proposals/{id}/send"), &SendBody { email })
            .await
    }

    /// Create a draft invoice from an accepted proposal.
    pub async fn convert_proposal_to_invoice(&self, id: u64) -> ApiResult<ApiResponse<Invoice>> {
        self.post_empty(&format!("/proposals/{id}/convert")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(
            serde_json::to_value(ProposalStatus::Accepted).unwrap(),
            serde_json::json!("accepted")
        );
        let parsed: ProposalStatus = serde_json::from_str("\"declined\"").unwrap();
        assert_eq!(parsed, ProposalStatus::Declined);
    }

    #[test]
    fn test_list_query_filters() {
        let params = ListProposalsParams {
            status: Some(ProposalStatus::Sent),
            customer_id: Some(7),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().params(),
            &[
                ("filter[status]".to_string(), "sent".to_string()),
                ("filter[customer_id]".to_string(), "7".to_string()),
            ]
        );
    }
}
