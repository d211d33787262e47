//! Bookkeeping entries resource.
//!
//! Entries are double-entry ledger records (debit/credit account pair plus
//! amount). Once an entry's year is locked server-side the record is
//! immutable; the API rejects mutations with a transport error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
    Swap,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Swap => "swap",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A double-entry bookkeeping record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub date: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sum: f64,
    #[serde(default)]
    pub debit_account_id: u64,
    #[serde(default)]
    pub credit_account_id: u64,
    #[serde(rename = "type")]
    pub entry_type: Option<EntryType>,
    pub customer_id: Option<u64>,
    pub project_id: Option<u64>,
    pub tax_rate_id: Option<u64>,
    pub billable: Option<bool>,
    #[serde(default)]
    pub locked: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateEntryInput {
    #[schemars(description = "Date (YYYY-MM-DD, required)")]
    pub date: String,
    #[schemars(description = "Debit account ID (required)")]
    pub debit_account_id: u64,
    #[schemars(description = "Credit account ID (required)")]
    pub credit_account_id: u64,
    #[schemars(description = "Entry description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(description = "Amount")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,
    #[schemars(description = "Customer ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[schemars(description = "Project ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[schemars(description = "Tax rate ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_id: Option<u64>,
    #[schemars(description = "Tag IDs")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u64>>,
    #[schemars(description = "Is billable")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateEntryInput {
    #[schemars(description = "Date (YYYY-MM-DD)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[schemars(description = "Debit account ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_account_id: Option<u64>,
    #[schemars(description = "Credit account ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_account_id: Option<u64>,
    #[schemars(description = "Entry description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(description = "Amount")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,
    #[schemars(description = "Customer ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[schemars(description = "Project ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[schemars(description = "Tax rate ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate_id: Option<u64>,
    #[schemars(description = "Tag IDs")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u64>>,
    #[schemars(description = "Is billable")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListEntriesParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page")]
    pub per_page: Option<u32>,
    #[schemars(description = "Filter by date")]
    pub date: Option<String>,
    #[schemars(description = "Filter by entry type")]
    #[serde(rename = "type")]
    pub entry_type: Option<EntryType>,
    #[schemars(description = "Filter by customer ID")]
    pub customer_id: Option<u64>,
    #[schemars(description = "Filter by project ID")]
    pub project_id: Option<u64>,
    #[schemars(description = "Filter by account ID")]
    pub account_id: Option<u64>,
    #[schemars(description = "Filter by tag ID")]
    pub tag_id: Option<u64>,
    #[schemars(description = "Filter by billable status")]
    pub billable: Option<bool>,
    #[schemars(description = "Sort field (e.g., date, sum)")]
    pub sort: Option<String>,
    #[schemars(description = "Include relations: customer, project, tags, tax_rate, accounts")]
    pub include: Option<String>,
}

impl ListEntriesParams {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .page(self.page, self.per_page)
            .filter("date", self.date.as_deref())
            .filter("type", self.entry_type)
            .filter("customer_id", self.customer_id)
            .filter("project_id", self.project_id)
            .filter("account_id", self.account_id)
            .filter("tag_id", self.tag_id)
            .filter("billable", self.billable)
            .param("sort", self.sort.as_deref())
            .param("include", self.include.as_deref())
    }
}

/// Server-computed next booking number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextEntryNumber {
    pub number: u64,
}

#[derive(Debug, Serialize)]
struct BulkDeleteBody<'a> {
    ids: &'a [u64],
}

#[derive(Debug, Serialize)]
struct BulkUpdateBody<'a> {
    ids: &'a [u64],
    #[serde(flatten)]
    updates: &'a UpdateEntryInput,
}

impl MilkeeApi {
    pub async fn list_entries(
        &self,
        params: &ListEntriesParams,
    ) -> ApiResult<ApiResponse<Vec<Entry>>> {
        self.get("/entries", params.to_query()).await
    }

    pub async fn get_entry(&self, id: u64, include: Option<&str>) -> ApiResult<ApiResponse<Entry>> {
        let query = Query::new().param("include", include);
        self.get(&format!("/entries/{id}"), query).await
    }

    pub async fn create_entry(&self, input: &CreateEntryInput) -> ApiResult<ApiResponse<Entry>> {
        self.post("/entries", input).await
    }

    pub async fn update_entry(
        &self,
        id: u64,
        input: &UpdateEntryInput,
    ) -> ApiResult<ApiResponse<Entry>> {
        self.put(&format!("/entries/{id}"), input).await
    }

    pub async fn delete_entry(&self, id: u64) -> ApiResult<Value> {
        self.delete(&format!("/entries/{id}")).await
    }

    /// Next available booking number for the given type, current year by
    /// default.
    pub async fn next_entry_number(
        &self,
        entry_type: EntryType,
        year: Option<u32>,
    ) -> ApiResult<NextEntryNumber> {
        let query = Query::new().param("year", year);
        self.get(&format!("/entries/number/{entry_type}"), query)
            .await
    }

    pub async fn bulk_delete_entries(&self, ids: &[u64]) -> ApiResult<Value> {
        self.delete_with_body("/entries/multiple", &BulkDeleteBody { ids })
            .await
    }

    /// Apply one set of updates to every listed entry in a single request.
    pub async fn bulk_update_entries(
        &self,
        ids: &[u64],
        updates: &UpdateEntryInput,
    ) -> ApiResult<Value> {
        self.put("/entries/multiple", &BulkUpdateBody { ids, updates })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_wire_spelling() {
        assert_eq!(EntryType::Income.as_str(), "income");
        let parsed: EntryType = serde_json::from_str("\"swap\"").unwrap();
        assert_eq!(parsed, EntryType::Swap);
    }

    #[test]
    fn test_list_query_type_filter() {
        let params = ListEntriesParams {
            entry_type: Some(EntryType::Expense),
            tag_id: Some(3),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().params(),
            &[
                ("filter[type]".to_string(), "expense".to_string()),
                ("filter[tag_id]".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_bulk_update_body_flattens_updates_beside_ids() {
        let updates = UpdateEntryInput {
            billable: Some(false),
            ..Default::default()
        };
        let body = serde_json::to_value(BulkUpdateBody {
            ids: &[1, 2, 3],
            updates: &updates,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "ids": [1, 2, 3], "billable": false }));
    }
}
