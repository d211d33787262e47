//! Slim list projections.
//!
//! Full MILKEE records are large; list tools for the high-volume resources
//! return these trimmed shapes instead, so a page of results stays small
//! enough to be useful as tool output. Detail tools still return the full
//! record.

use serde::Serialize;

use crate::api::customers::Customer;
use crate::api::entries::{Entry, EntryType};
use crate::api::invoices::{Invoice, InvoiceStatus};
use crate::api::proposals::{Proposal, ProposalStatus};
use crate::api::{ApiResponse, Meta};

#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub city: Option<String>,
    pub archived: bool,
}

impl From<Customer> for CustomerSummary {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            city: customer.city,
            archived: customer.archived,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntrySummary {
    pub id: u64,
    pub date: String,
    pub description: Option<String>,
    pub sum: f64,
    #[serde(rename = "type")]
    pub entry_type: Option<EntryType>,
    pub debit_account_id: u64,
    pub credit_account_id: u64,
    pub locked: bool,
}

impl From<Entry> for EntrySummary {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            description: entry.description,
            sum: entry.sum,
            entry_type: entry.entry_type,
            debit_account_id: entry.debit_account_id,
            credit_account_id: entry.credit_account_id,
            locked: entry.locked,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSummary {
    pub id: u64,
    pub number: u64,
    pub customer_id: u64,
    pub title: String,
    pub date: String,
    pub status: InvoiceStatus,
    pub final_value: f64,
    pub open_total: f64,
    pub overdue: bool,
}

impl From<Invoice> for InvoiceSummary {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            number: invoice.number,
            customer_id: invoice.customer_id,
            title: invoice.title,
            date: invoice.date,
            status: invoice.status,
            final_value: invoice.final_value,
            open_total: invoice.open_total,
            overdue: invoice.overdue,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProposalSummary {
    pub id: u64,
    pub number: u64,
    pub customer_id: u64,
    pub title: String,
    pub date: String,
    pub status: ProposalStatus,
    pub final_value: f64,
    pub valid_until: Option<String>,
}

impl From<Proposal> for ProposalSummary {
    fn from(proposal: Proposal) -> Self {
        Self {
            id: proposal.id,
            number: proposal.number,
            customer_id: proposal.customer_id,
            title: proposal.title,
            date: proposal.date,
            status: proposal.status,
            final_value: proposal.final_value,
            valid_until: proposal.valid_until,
        }
    }
}

/// Wrapper for a projected list page: trimmed records plus the original
/// pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryPage<S> {
    pub data: Vec<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Project every record of a list page, keeping its pagination metadata.
pub fn slim_page<T, S: From<T>>(page: ApiResponse<Vec<T>>) -> SummaryPage<S> {
    SummaryPage {
        data: page.data.into_iter().map(S::from).collect(),
        meta: page.meta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invoice_summary_keeps_billing_fields_only() {
        let invoice: Invoice = serde_json::from_value(json!({
            "id": 9,
            "number": 2024_001,
            "customer_id": 4,
            "title": "Website relaunch",
            "date": "2024-03-01",
            "status": "sent",
            "final_value": 1500.0,
            "open_total": 1500.0,
            "overdue": false,
            "positions": "[{\"description\":\"Dev\"}]",
            "remarks": "Thanks!"
        }))
        .unwrap();
        let summary = InvoiceSummary::from(invoice);
        let rendered = serde_json::to_value(&summary).unwrap();
        assert_eq!(rendered["status"], "sent");
        assert_eq!(rendered["final_value"], 1500.0);
        assert!(rendered.get("positions").is_none());
        assert!(rendered.get("remarks").is_none());
    }

    #[test]
    fn test_slim_page_preserves_meta() {
        let page = ApiResponse {
            data: vec![
                serde_json::from_value::<Customer>(json!({ "id": 1, "name": "Acme" })).unwrap(),
            ],
            meta: Some(Meta {
                current_page: 2,
                last_page: 5,
                per_page: 15,
                total: 61,
            }),
        };
        let slim: SummaryPage<CustomerSummary> = slim_page(page);
        assert_eq!(slim.data.len(), 1);
        assert_eq!(slim.data[0].name, "Acme");
        assert_eq!(slim.meta.as_ref().unwrap().total, 61);
    }
}
