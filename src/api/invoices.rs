//! Invoices resource.
//!
//! `positions` is the serialized line-item list (`{description, amount,
//! price, unit}` records). It is treated as an opaque string end to end;
//! this client never parses it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub company_id: u64,
    #[serde(default)]
    pub customer_id: u64,
    pub contact_id: Option<u64>,
    pub proposal_id: Option<u64>,
    pub project_id: Option<u64>,
    pub bank_account_id: Option<u64>,
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub title: String,
    pub lang: Option<String>,
    #[serde(default)]
    pub date: String,
    pub payable_until: Option<String>,
    /// Opaque serialized line-item list; passed through untouched.
    pub positions: Option<String>,
    pub remarks_top: Option<String>,
    pub remarks: Option<String>,
    pub status: InvoiceStatus,
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
    pub reference: Option<String>,
    pub qr_reference: Option<String>,
    pub entry_id: Option<u64>,
    #[serde(default)]
    pub repeat: bool,
    pub repeat_interval: Option<String>,
    #[serde(default)]
    pub overdue: bool,
    #[serde(default)]
    pub open_total: f64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateInvoiceInput {
    #[schemars(description = "Customer ID (required)")]
    pub customer_id: u64,
    #[schemars(description = "Invoice title (required)")]
    pub title: String,
    #[schemars(description = "Invoice date (YYYY-MM-DD, required)")]
    pub date: String,
    #[schemars(description = "Payment due date (YYYY-MM-DD, required)")]
    pub payable_until: String,
    #[schemars(description = "Serialized line items (JSON string, required)")]
    pub positions: String,
    #[schemars(description = "Contact ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<u64>,
    #[schemars(description = "Project ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[schemars(description = "Bank account ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<u64>,
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
    #[schemars(description = "Tax rate ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateInvoiceInput {
    #[schemars(description = "Customer ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[schemars(description = "Invoice title")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[schemars(description = "Invoice date (YYYY-MM-DD)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[schemars(description = "Payment due date (YYYY-MM-DD)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payable_until: Option<String>,
    #[schemars(description = "Serialized line items (JSON string)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<String>,
    #[schemars(description = "Invoice status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[schemars(description = "Contact ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<u64>,
    #[schemars(description = "Project ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[schemars(description = "Bank account ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<u64>,
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
    #[schemars(description = "Tax rate ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListInvoicesParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page (max: 100)")]
    pub per_page: Option<u32>,
    #[schemars(description = "Filter by status")]
    pub status: Option<InvoiceStatus>,
    #[schemars(description = "Filter by customer ID")]
    pub customer_id: Option<u64>,
    #[schemars(description = "Filter by project ID")]
    pub project_id: Option<u64>,
    #[schemars(description = "Filter by date")]
    pub date: Option<String>,
    #[schemars(description = "Filter by overdue status")]
    pub overdue: Option<bool>,
    #[schemars(description = "Sort field")]
    pub sort: Option<String>,
    #[schemars(description = "Include relations: customer, contact, project")]
    pub include: Option<String>,
}

impl ListInvoicesParams {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .page(self.page, self.per_page)
            .filter("status", self.status)
            .filter("customer_id", self.customer_id)
            .filter("project_id", self.project_id)
            .filter("date", self.date.as_deref())
            .filter("overdue", self.overdue)
            .param("sort", self.sort.as_deref())
            .param("include", self.include.as_deref())
    }
}

#[derive(Debug, Serialize)]
struct MarkPaidBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_date: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct SendBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

impl MilkeeApi {
    pub async fn list_invoices(
        &self,
        params: &ListInvoicesParams,
    ) -> ApiResult<ApiResponse<Vec<Invoice>>> {
        self.get("/invoices", params.to_query()).await
    }

    pub async fn get_invoice(
        &self,
        id: u64,
        include: Option<&str>,
    ) -> ApiResult<ApiResponse<Invoice>> {
        let query = Query::new().param("include", include);
        self.get(&format!("/invoices/{id}"), query).await
    }

    pub async fn create_invoice(
        &self,
        input: &CreateInvoiceInput,
    ) -> ApiResult<ApiResponse<Invoice>> {
        self.post("/invoices", input).await
    }

    pub async fn update_invoice(
        &self,
        id: u64,
        input: &UpdateInvoiceInput,
    ) -> ApiResult<ApiResponse<Invoice>> {
        self.put(&format!("/invoices/{id}"), input).await
    }

    pub async fn delete_invoice(&self, id: u64) -> ApiResult<Value> {
        self.delete(&format!("/invoices/{id}")).await
    }

    pub async fn mark_invoice_paid(
        &self,
        id: u64,
        payment_date: Option<&str>,
    ) -> ApiResult<ApiResponse<Invoice>> {
        self.post(&format!("/invoices/{id}/paid"), &MarkPaidBody { payment_date })
            .await
    }

    pub async fn send_invoice(
        &self,
        id: u64,
        email: Option<&str>,
    ) -> ApiResult<ApiResponse<Invoice>> {
        self.post(&format!("/invoices/{id}/send"), &SendBody { email })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(
            serde_json::to_value(InvoiceStatus::Overdue).unwrap(),
            serde_json::json!("overdue")
        );
        let parsed: InvoiceStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, InvoiceStatus::Cancelled);
    }

    #[test]
    fn test_list_query_status_filter() {
        let params = ListInvoicesParams {
            status: Some(InvoiceStatus::Sent),
            overdue: Some(true),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().params(),
            &[
                ("filter[status]".to_string(), "sent".to_string()),
                ("filter[overdue]".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_minimal_invoice_parses() {
        let invoice: Invoice =
            serde_json::from_value(serde_json::json!({ "status": "paid", "final_value": 100.0 }))
                .unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert_eq!(invoice.final_value, 100.0);
    }
}
