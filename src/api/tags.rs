//! Tags resource. Labels attachable to bookkeeping entries.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::client::{ApiResponse, MilkeeApi, Query};
use super::error::ApiResult;

/// The fixed palette MILKEE offers for tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Orange,
    Blue,
    Lime,
    Yellow,
    Turquoise,
    Marine,
    Purple,
    Pink,
    Green,
    Red,
    Gray,
}

impl TagColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Lime => "lime",
            Self::Yellow => "yellow",
            Self::Turquoise => "turquoise",
            Self::Marine => "marine",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Green => "green",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub color: Option<TagColor>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTagInput {
    #[schemars(description = "Tag name (required)")]
    pub name: String,
    #[schemars(description = "Tag color (required)")]
    pub color: TagColor,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTagInput {
    #[schemars(description = "Tag name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[schemars(description = "Tag color")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TagColor>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTagsParams {
    #[schemars(description = "Page number")]
    pub page: Option<u32>,
    #[schemars(description = "Items per page")]
    pub per_page: Option<u32>,
    #[schemars(description = "Filter by name")]
    pub name: Option<String>,
    #[schemars(description = "Filter by color")]
    pub color: Option<TagColor>,
}

impl ListTagsParams {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .page(self.page, self.per_page)
            .filter("name", self.name.as_deref())
            .filter("color", self.color)
    }
}

/// Catalog of colors tags may use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagColors {
    pub colors: Vec<TagColor>,
}

impl MilkeeApi {
    pub async fn list_tags(&self, params: &ListTagsParams) -> ApiResult<ApiResponse<Vec<Tag>>> {
        self.get("/tags", params.to_query()).await
    }

    pub async fn get_tag(&self, id: u64) -> ApiResult<ApiResponse<Tag>> {
        self.get(&format!("/tags/{id}"), Query::new()).await
    }

    pub async fn create_tag(&self, input: &CreateTagInput) -> ApiResult<ApiResponse<Tag>> {
        self.post("/tags", input).await
    }

    pub async fn update_tag(&self, id: u64, input: &UpdateTagInput) -> ApiResult<ApiResponse<Tag>> {
        self.put(&format!("/tags/{id}"), input).await
    }

    pub async fn delete_tag(&self, id: u64) -> ApiResult<Value> {
        self.delete(&format!("/tags/{id}")).await
    }

    pub async fn tag_colors(&self) -> ApiResult<TagColors> {
        self.get("/tags/colors", Query::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_wire_spelling() {
        assert_eq!(
            serde_json::to_value(TagColor::Turquoise).unwrap(),
            serde_json::json!("turquoise")
        );
        let parsed: TagColor = serde_json::from_str("\"marine\"").unwrap();
        assert_eq!(parsed, TagColor::Marine);
    }
}
