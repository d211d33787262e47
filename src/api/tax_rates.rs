//! Tax rates resource. Read-only lookup values.

use serde::{Deserialize, Serialize};

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRate {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub is_default: bool,
}

impl MilkeeApi {
    pub async fn list_tax_rates(&self) -> ApiResult<ApiResponse<Vec<TaxRate>>> {
        self.get("/tax-rates", Query::new()).await
    }

    pub async fn get_tax_rate(&self, id: u64) -> ApiResult<ApiResponse<TaxRate>> {
        self.get(&format!("/tax-rates/{id}"), Query::new()).await
    }
}
