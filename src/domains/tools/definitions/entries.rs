//! Bookkeeping entry tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::entries::{CreateEntryInput, EntryType, ListEntriesParams, UpdateEntryInput};
use crate::api::MilkeeApi;
use crate::domains::tools::projections::{slim_page, EntrySummary, SummaryPage};
use crate::domains::tools::registry::{Access, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetEntryParams {
    #[schemars(description = "Entry ID")]
    pub id: u64,
    #[schemars(description = "Include relations")]
    pub include: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct EntryIdParams {
    #[schemars(description = "Entry ID")]
    pub id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateEntryParams {
    #[schemars(description = "Entry ID")]
    pub id: u64,
    #[serde(flatten)]
    pub data: UpdateEntryInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NextEntryNumberParams {
    #[schemars(description = "Entry type (required)")]
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[schemars(description = "Year (optional, defaults to current)")]
    pub year: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BulkDeleteEntriesParams {
    #[schemars(description = "Entry IDs to delete")]
    pub ids: Vec<u64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BulkUpdateEntriesParams {
    #[schemars(description = "Entry IDs to update")]
    pub ids: Vec<u64>,
    #[serde(flatten)]
    pub updates: UpdateEntryInput,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_entries",
        "List bookkeeping entries with optional filtering",
        Access::ReadOnly,
        move |params: ListEntriesParams| {
            let api = Arc::clone(&client);
            async move {
                let page = api.list_entries(&params).await?;
                let slim: SummaryPage<EntrySummary> = slim_page(page);
                Ok(serde_json::to_value(slim)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_entry",
        "Get details of a specific bookkeeping entry",
        Access::ReadOnly,
        move |params: GetEntryParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_entry(params.id, params.include.as_deref()).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_entry",
        "Create a new bookkeeping entry",
        Access::ReadWrite,
        move |input: CreateEntryInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_entry(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_entry",
        "Update an existing bookkeeping entry",
        Access::ReadWrite,
        move |params: UpdateEntryParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_entry(params.id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_entry",
        "Delete a bookkeeping entry (cannot delete entries in locked years)",
        Access::ReadWrite,
        move |params: EntryIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_entry(params.id).await?;
                Ok(json!({ "success": true, "message": "Entry deleted" }))
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_next_entry_number",
        "Get the next available booking number for entries",
        Access::ReadOnly,
        move |params: NextEntryNumberParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.next_entry_number(params.entry_type, params.year).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_bulk_delete_entries",
        "Delete multiple bookkeeping entries at once",
        Access::ReadWrite,
        move |params: BulkDeleteEntriesParams| {
            let api = Arc::clone(&client);
            async move {
                api.bulk_delete_entries(&params.ids).await?;
                Ok(json!({ "success": true, "message": "Entries deleted" }))
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_bulk_update_entries",
        "Update multiple bookkeeping entries at once",
        Access::ReadWrite,
        move |params: BulkUpdateEntriesParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.bulk_update_entries(&params.ids, &params.updates).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_update_params_flatten_updates_beside_ids() {
        let params: BulkUpdateEntriesParams = serde_json::from_value(json!({
            "ids": [4, 5],
            "billable": true,
            "tax_rate_id": 2
        }))
        .unwrap();
        assert_eq!(params.ids, vec![4, 5]);
        assert_eq!(params.updates.billable, Some(true));
        assert_eq!(params.updates.tax_rate_id, Some(2));
    }

    #[test]
    fn test_next_entry_number_params_use_wire_key() {
        let params: NextEntryNumberParams =
            serde_json::from_value(json!({ "type": "expense" })).unwrap();
        assert_eq!(params.entry_type, EntryType::Expense);
        assert_eq!(params.year, None);
    }
}
