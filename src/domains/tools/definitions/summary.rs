//! Aggregate company summary.
//!
//! The one tool with no single remote endpoint behind it: five list calls
//! are issued concurrently and folded into a compact financial overview.
//! The fold is fail-fast; if any sub-request fails the whole summary fails
//! rather than reporting partial numbers.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::api::accounts::{Account, ListAccountsParams};
use crate::api::entries::{Entry, EntryType, ListEntriesParams};
use crate::api::invoices::{Invoice, InvoiceStatus, ListInvoicesParams};
use crate::api::proposals::{ListProposalsParams, Proposal};
use crate::api::MilkeeApi;
use crate::domains::tools::registry::{Access, NoParams, ToolRegistry};

/// Each sub-request asks for the largest page the API serves.
const SUMMARY_PAGE_SIZE: u32 = 100;

#[derive(Debug, Serialize)]
pub struct CompanySummary {
    pub invoices: InvoiceTotals,
    pub proposals: ProposalTotals,
    pub finances: FinanceTotals,
    /// Balance of the primary bank account, when one can be identified.
    pub bank_balance: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceTotals {
    pub total_count: usize,
    pub by_status: BTreeMap<String, usize>,
    pub total_value: f64,
    /// Value of invoices sent but not yet paid.
    pub open_value: f64,
    pub paid_value: f64,
}

#[derive(Debug, Serialize)]
pub struct ProposalTotals {
    pub total_count: usize,
    pub by_status: BTreeMap<String, usize>,
    pub total_value: f64,
}

#[derive(Debug, Serialize)]
pub struct FinanceTotals {
    pub income_total: f64,
    pub expense_total: f64,
    pub net_profit: f64,
    /// Formatted percentage, `"N/A"` when there is no income to divide by.
    pub profit_margin: String,
}

/// Fold the five list results into one report. Pure so it can be tested
/// without any HTTP in play.
pub fn build_company_summary(
    invoices: &[Invoice],
    proposals: &[Proposal],
    income: &[Entry],
    expenses: &[Entry],
    accounts: &[Account],
) -> CompanySummary {
    let mut invoice_statuses = BTreeMap::new();
    let mut open_value = 0.0;
    let mut paid_value = 0.0;
    let mut invoice_total = 0.0;
    for invoice in invoices {
        *invoice_statuses
            .entry(invoice.status.as_str().to_string())
            .or_insert(0) += 1;
        invoice_total += invoice.final_value;
        match invoice.status {
            InvoiceStatus::Sent => open_value += invoice.final_value,
            InvoiceStatus::Paid => paid_value += invoice.final_value,
            _ => {}
        }
    }

    let mut proposal_statuses = BTreeMap::new();
    let mut proposal_total = 0.0;
    for proposal in proposals {
        *proposal_statuses
            .entry(proposal.status.as_str().to_string())
            .or_insert(0) += 1;
        proposal_total += proposal.final_value;
    }

    let income_total: f64 = income.iter().map(|e| e.sum).sum();
    let expense_total: f64 = expenses.iter().map(|e| e.sum).sum();
    let net_profit = income_total - expense_total;
    let profit_margin = if income_total > 0.0 {
        format!("{:.1}%", net_profit / income_total * 100.0)
    } else {
        "N/A".to_string()
    };

    CompanySummary {
        invoices: InvoiceTotals {
            total_count: invoices.len(),
            by_status: invoice_statuses,
            total_value: invoice_total,
            open_value,
            paid_value,
        },
        proposals: ProposalTotals {
            total_count: proposals.len(),
            by_status: proposal_statuses,
            total_value: proposal_total,
        },
        finances: FinanceTotals {
            income_total,
            expense_total,
            net_profit,
            profit_margin,
        },
        bank_balance: bank_balance(accounts),
    }
}

/// Pick the account to report a balance from: the one flagged primary, or
/// failing that the conventional Swiss main bank account (name "Bank" or
/// number 1020).
fn bank_balance(accounts: &[Account]) -> Option<f64> {
    accounts
        .iter()
        .find(|a| a.is_primary_bank == Some(true))
        .or_else(|| {
            accounts
                .iter()
                .find(|a| a.name.eq_ignore_ascii_case("bank") || a.number == "1020")
        })
        .and_then(|a| a.balance)
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_get_company_summary",
        "Get an aggregated overview of the company: invoice and proposal totals by status, income vs. expenses, and the bank balance",
        Access::ReadOnly,
        move |_: NoParams| {
            let api = Arc::clone(&client);
            async move {
                let invoice_params = ListInvoicesParams {
                    per_page: Some(SUMMARY_PAGE_SIZE),
                    ..Default::default()
                };
                let proposal_params = ListProposalsParams {
                    per_page: Some(SUMMARY_PAGE_SIZE),
                    ..Default::default()
                };
                let income_params = ListEntriesParams {
                    per_page: Some(SUMMARY_PAGE_SIZE),
                    entry_type: Some(EntryType::Income),
                    ..Default::default()
                };
                let expense_params = ListEntriesParams {
                    per_page: Some(SUMMARY_PAGE_SIZE),
                    entry_type: Some(EntryType::Expense),
                    ..Default::default()
                };
                let account_params = ListAccountsParams::default();

                let (invoices, proposals, income, expenses, accounts) = tokio::try_join!(
                    api.list_invoices(&invoice_params),
                    api.list_proposals(&proposal_params),
                    api.list_entries(&income_params),
                    api.list_entries(&expense_params),
                    api.list_accounts(&account_params),
                )?;

                let summary = build_company_summary(
                    &invoices.data,
                    &proposals.data,
                    &income.data,
                    &expenses.data,
                    &accounts.data,
                );
                Ok(serde_json::to_value(summary)?)
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invoice(status: &str, final_value: f64) -> Invoice {
        serde_json::from_value(json!({ "status": status, "final_value": final_value })).unwrap()
    }

    fn proposal(status: &str, final_value: f64) -> Proposal {
        serde_json::from_value(json!({ "status": status, "final_value": final_value })).unwrap()
    }

    fn entry(sum: f64) -> Entry {
        serde_json::from_value(json!({ "sum": sum })).unwrap()
    }

    fn account(value: serde_json::Value) -> Account {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_invoice_values_split_by_status() {
        let invoices = vec![invoice("paid", 100.0), invoice("sent", 50.0)];
        let summary = build_company_summary(&invoices, &[], &[], &[], &[]);
        assert_eq!(summary.invoices.total_count, 2);
        assert_eq!(summary.invoices.total_value, 150.0);
        assert_eq!(summary.invoices.paid_value, 100.0);
        assert_eq!(summary.invoices.open_value, 50.0);
        assert_eq!(summary.invoices.by_status["paid"], 1);
        assert_eq!(summary.invoices.by_status["sent"], 1);
    }

    #[test]
    fn test_draft_invoices_count_toward_total_only() {
        let invoices = vec![invoice("draft", 80.0)];
        let summary = build_company_summary(&invoices, &[], &[], &[], &[]);
        assert_eq!(summary.invoices.total_value, 80.0);
        assert_eq!(summary.invoices.open_value, 0.0);
        assert_eq!(summary.invoices.paid_value, 0.0);
    }

    #[test]
    fn test_proposal_totals() {
        let proposals = vec![
            proposal("accepted", 200.0),
            proposal("declined", 75.0),
            proposal("accepted", 25.0),
        ];
        let summary = build_company_summary(&[], &proposals, &[], &[], &[]);
        assert_eq!(summary.proposals.total_count, 3);
        assert_eq!(summary.proposals.total_value, 300.0);
        assert_eq!(summary.proposals.by_status["accepted"], 2);
        assert_eq!(summary.proposals.by_status["declined"], 1);
    }

    #[test]
    fn test_profit_margin_formatting() {
        let income = vec![entry(1000.0)];
        let expenses = vec![entry(250.0)];
        let summary = build_company_summary(&[], &[], &income, &expenses, &[]);
        assert_eq!(summary.finances.net_profit, 750.0);
        assert_eq!(summary.finances.profit_margin, "75.0%");
    }

    #[test]
    fn test_profit_margin_without_income_is_not_a_number() {
        let expenses = vec![entry(40.0)];
        let summary = build_company_summary(&[], &[], &[], &expenses, &[]);
        assert_eq!(summary.finances.net_profit, -40.0);
        assert_eq!(summary.finances.profit_margin, "N/A");
    }

    #[test]
    fn test_bank_balance_prefers_primary_flag() {
        let accounts = vec![
            account(json!({ "id": 1, "name": "Bank", "number": "1020", "balance": 500.0 })),
            account(json!({
                "id": 2,
                "name": "Secondary",
                "number": "1025",
                "is_primary_bank": true,
                "balance": 900.0
            })),
        ];
        let summary = build_company_summary(&[], &[], &[], &[], &accounts);
        assert_eq!(summary.bank_balance, Some(900.0));
    }

    #[test]
    fn test_bank_balance_falls_back_to_name_or_number() {
        let accounts = vec![
            account(json!({ "id": 1, "name": "Kasse", "number": "1000", "balance": 50.0 })),
            account(json!({ "id": 2, "name": "Postkonto", "number": "1020", "balance": 120.5 })),
        ];
        let summary = build_company_summary(&[], &[], &[], &[], &accounts);
        assert_eq!(summary.bank_balance, Some(120.5));
    }

    #[test]
    fn test_bank_balance_absent_without_candidates() {
        let accounts = vec![account(json!({ "id": 1, "name": "Kasse", "number": "1000" }))];
        let summary = build_company_summary(&[], &[], &[], &[], &accounts);
        assert_eq!(summary.bank_balance, None);
    }
}
