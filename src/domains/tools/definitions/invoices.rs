//! Invoice tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::invoices::{CreateInvoiceInput, ListInvoicesParams, UpdateInvoiceInput};
use crate::api::MilkeeApi;
use crate::domains::tools::projections::{slim_page, InvoiceSummary, SummaryPage};
use crate::domains::tools::registry::{Access, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetInvoiceParams {
    #[schemars(description = "Invoice ID")]
    pub id: u64,
    #[schemars(description = "Include relations: customer, contact, project")]
    pub include: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct InvoiceIdParams {
    #[schemars(description = "Invoice ID")]
    pub id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateInvoiceParams {
    #[schemars(description = "Invoice ID")]
    pub id: u64,
    #[serde(flatten)]
    pub data: UpdateInvoiceInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MarkInvoicePaidParams {
    #[schemars(description = "Invoice ID")]
    pub id: u64,
    #[schemars(description = "Payment date (YYYY-MM-DD, defaults to today)")]
    pub payment_date: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SendInvoiceParams {
    #[schemars(description = "Invoice ID")]
    pub id: u64,
    #[schemars(description = "Recipient email (defaults to the customer's address)")]
    pub email: Option<String>,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_invoices",
        "List invoices with optional filtering",
        Access::ReadOnly,
        move |params: ListInvoicesParams| {
            let api = Arc::clone(&client);
            async move {
                let page = api.list_invoices(&params).await?;
                let slim: SummaryPage<InvoiceSummary> = slim_page(page);
                Ok(serde_json::to_value(slim)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_invoice",
        "Get details of a specific invoice",
        Access::ReadOnly,
        move |params: GetInvoiceParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_invoice(params.id, params.include.as_deref()).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_invoice",
        "Create a new invoice",
        Access::ReadWrite,
        move |input: CreateInvoiceInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_invoice(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_invoice",
        "Update an existing invoice",
        Access::ReadWrite,
        move |params: UpdateInvoiceParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_invoice(params.id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_invoice",
        "Delete an invoice",
        Access::ReadWrite,
        move |params: InvoiceIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_invoice(params.id).await?;
                Ok(json!({ "success": true, "message": "Invoice deleted" }))
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_mark_invoice_paid",
        "Mark an invoice as paid",
        Access::ReadWrite,
        move |params: MarkInvoicePaidParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api
                    .mark_invoice_paid(params.id, params.payment_date.as_deref())
                    .await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_send_invoice",
        "Send an invoice to the customer by email",
        Access::ReadWrite,
        move |params: SendInvoiceParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.send_invoice(params.id, params.email.as_deref()).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );
}
