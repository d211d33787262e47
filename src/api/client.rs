//! HTTP transport for the MILKEE API.
//!
//! Every request is scoped under `/companies/{companyId}`, carries a bearer
//! token, and exchanges JSON. Filters use MILKEE's bracketed key convention
//! (`filter[name]=...`); unset parameters are omitted from the query string
//! entirely.

use reqwest::{Method, StatusCode, header};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use crate::core::config::CredentialsConfig;

/// Production base URL of the MILKEE REST API.
pub const BASE_URL: &str = "https://app.milkee.ch/api/v2";

/// Standard envelope for MILKEE responses: `{data: T}` for single items,
/// `{data: T[], meta: {...}}` for paginated lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

/// Ordered query-parameter list. `None` values never make it in, so the
/// emitted query string only contains parameters the caller actually set.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain query parameter, skipping `None`.
    pub fn param<V: fmt::Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.params.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Append a `filter[<key>]` parameter, skipping `None`.
    pub fn filter<V: fmt::Display>(self, key: &str, value: Option<V>) -> Self {
        let key = format!("filter[{key}]");
        self.param(&key, value)
    }

    /// Append `page` / `per_page` pagination parameters.
    pub fn page(self, page: Option<u32>, per_page: Option<u32>) -> Self {
        self.param("page", page).param("per_page", per_page)
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Authenticated client for the MILKEE REST API.
///
/// Holds the configured token and company id for the process lifetime; all
/// facade methods in the sibling resource modules go through [`Self::request`].
pub struct MilkeeApi {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    company_id: String,
}

impl MilkeeApi {
    pub fn new(credentials: &CredentialsConfig) -> Self {
        Self::with_base_url(credentials, BASE_URL)
    }

    /// Build a client against a non-default base URL (used by tests).
    pub fn with_base_url(credentials: &CredentialsConfig, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_token: credentials.api_token.clone(),
            company_id: credentials.company_id.clone(),
        }
    }

    /// Absolute URL for a company-scoped resource path.
    fn url(&self, path: &str) -> String {
        format!("{}/companies/{}{}", self.base_url, self.company_id, path)
    }

    /// Perform one HTTP exchange and decode the response.
    ///
    /// Success is any 2xx; a `204 No Content` decodes as an empty object
    /// instead of being parsed. Any non-2xx becomes [`ApiError::Status`]
    /// carrying the status code and raw body text.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: Query,
    ) -> ApiResult<T> {
        let url = self.url(path);
        debug!(%method, %url, "MILKEE request");

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.api_token)
            .header(header::ACCEPT, "application/json");

        if !query.is_empty() {
            request = request.query(query.params());
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        decode_body(status, &text)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> ApiResult<T> {
        self.request(Method::GET, path, None, query).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, Some(body), Query::new())
            .await
    }

    /// POST with no request body (e.g. proposal conversion).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::POST, path, None, Query::new()).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, Some(body), Query::new())
            .await
    }

    /// DELETE a resource. MILKEE answers these with `204 No Content`, which
    /// decodes to an empty object.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.request(Method::DELETE, path, None, Query::new()).await
    }

    pub(crate) async fn delete_with_body<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<Value> {
        let body = serde_json::to_value(body)?;
        self.request(Method::DELETE, path, Some(body), Query::new())
            .await
    }
}

/// Decode a response body given its status.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> ApiResult<T> {
    if !status.is_success() {
        return Err(ApiError::status(status.as_u16(), body.trim()));
    }
    if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
        // Deletes answer 204; hand back an empty object rather than trying
        // to parse an empty body.
        return Ok(serde_json::from_value(Value::Object(Default::default()))?);
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_filter_keys_are_bracketed() {
        let query = Query::new()
            .filter("name", Some("Acme"))
            .filter("archived", Some(true));
        assert_eq!(
            query.params(),
            &[
                ("filter[name]".to_string(), "Acme".to_string()),
                ("filter[archived]".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_omits_unset_values() {
        let query = Query::new()
            .page(Some(2), None)
            .filter::<&str>("name", None)
            .param("include", Some("contacts"));
        assert_eq!(
            query.params(),
            &[
                ("page".to_string(), "2".to_string()),
                ("include".to_string(), "contacts".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_empty_when_nothing_set() {
        let query = Query::new().page(None, None).filter::<bool>("archived", None);
        assert!(query.is_empty());
    }

    #[test]
    fn test_decode_body_success() {
        let body = r#"{"data": {"id": 7}}"#;
        let decoded: Value = decode_body(StatusCode::OK, body).unwrap();
        assert_eq!(decoded["data"]["id"], 7);
    }

    #[test]
    fn test_decode_body_no_content_yields_empty_object() {
        let decoded: Value = decode_body(StatusCode::NO_CONTENT, "").unwrap();
        assert_eq!(decoded, serde_json::json!({}));
    }

    #[test]
    fn test_decode_body_empty_2xx_yields_empty_object() {
        let decoded: Value = decode_body(StatusCode::OK, "  ").unwrap();
        assert_eq!(decoded, serde_json::json!({}));
    }

    #[test]
    fn test_decode_body_error_carries_status_and_body() {
        let err = decode_body::<Value>(StatusCode::NOT_FOUND, "No such customer").unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "No such customer");
            }
            other => panic!("expected status error, got {other:?}"),
        }
        let message = decode_body::<Value>(StatusCode::NOT_FOUND, "nope")
            .unwrap_err()
            .to_string();
        assert_eq!(message, "MILKEE API error 404: nope");
    }

    #[test]
    fn test_url_is_company_scoped() {
        let credentials = CredentialsConfig {
            api_token: "tok".to_string(),
            company_id: "42".to_string(),
        };
        let api = MilkeeApi::with_base_url(&credentials, "https://example.test/api/v2");
        assert_eq!(
            api.url("/customers/7"),
            "https://example.test/api/v2/companies/42/customers/7"
        );
    }

    #[test]
    fn test_list_meta_roundtrip() {
        let body = r#"{"data": [], "meta": {"current_page": 1, "last_page": 3, "per_page": 15, "total": 44}}"#;
        let page: ApiResponse<Vec<Value>> = decode_body(StatusCode::OK, body).unwrap();
        let meta = page.meta.unwrap();
        assert_eq!(meta.last_page, 3);
        assert_eq!(meta.total, 44);
    }
}
