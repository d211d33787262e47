//! Accounts resource. Chart-of-accounts nodes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Bank,
    Deprecations,
    Income,
    Expense,
    Assets,
    Liabilities,
    BalanceSheet,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::Deprecations => "deprecations",
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Assets => "assets",
            Self::Liabilities => "liabilities",
            Self::BalanceSheet => "balance_sheet",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub number: String,
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
    pub iban: Option<String>,
    pub is_primary_bank: Option<bool>,
    pub balance: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateAccountInput {
    #[schemars(description = "Account name (required)")]
    pub name: String,
    #[schemars(description = "Account number (required)")]
    pub number: String,
    #[schemars(description = "Account type (required)")]
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[schemars(description = "IBAN (for bank accounts)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[schemars(description = "Set as primary bank account")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary_bank: Option<bool>,
}

/// The account type is fixed at creation; updates cannot change it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateAccountInput {
    #[schemars(description = "Account name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[schemars(description = "Account number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[schemars(description = "IBAN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[schemars(description = "Set as primary bank account")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary_bank: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListAccountsParams {
    #[schemars(description = "Filter by account type")]
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
}

impl ListAccountsParams {
    pub(crate) fn to_query(&self) -> Query {
        Query::new().filter("type", self.account_type)
    }
}

impl MilkeeApi {
    pub async fn list_accounts(
        &self,
        params: &ListAccountsParams,
    ) -> ApiResult<ApiResponse<Vec<Account>>> {
        self.get("/accounts", params.to_query()).await
    }

    pub async fn get_account(&self, id: u64) -> ApiResult<ApiResponse<Account>> {
        self.get(&format!("/accounts/{id}"), Query::new()).await
    }

    pub async fn create_account(
        &self,
        input: &CreateAccountInput,
    ) -> ApiResult<ApiResponse<Account>> {
        self.post("/accounts", input).await
    }

    pub async fn update_account(
        &self,
        id: u64,
        input: &UpdateAccountInput,
    ) -> ApiResult<ApiResponse<Account>> {
        self.put(&format!("/accounts/{id}"), input).await
    }

    pub async fn delete_account(&self, id: u64) -> ApiResult<Value> {
        self.delete(&format!("/accounts/{id}")).await
    }

    /// Restore the default chart of accounts, removing custom accounts.
    pub async fn reset_accounts(&self) -> ApiResult<Value> {
        self.post_empty("/accounts/reset").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_wire_spelling() {
        assert_eq!(
            serde_json::to_value(AccountType::BalanceSheet).unwrap(),
            serde_json::json!("balance_sheet")
        );
        let parsed: AccountType = serde_json::from_str("\"deprecations\"").unwrap();
        assert_eq!(parsed, AccountType::Deprecations);
    }

    #[test]
    fn test_type_filter_key() {
        let params = ListAccountsParams {
            account_type: Some(AccountType::Bank),
        };
        assert_eq!(
            params.to_query().params(),
            &[("filter[type]".to_string(), "bank".to_string())]
        );
    }
}
