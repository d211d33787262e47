//! Tool registry - the single source of truth for every exposed tool.
//!
//! Each entry pairs the MCP `Tool` metadata (name, description, input schema
//! derived from the handler's typed parameter struct) with its access class
//! and a boxed async handler. Because schema and handler are registered in
//! one call, a tool can never advertise a schema its handler does not accept.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::api::MilkeeApi;

use super::definitions;
use super::error::ToolError;

/// Whether a tool only reads remote state or also mutates it.
///
/// The dispatcher refuses [`Access::ReadWrite`] tools when the server is
/// configured read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

/// Parameter struct for tools that take no arguments.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

type Handler = Box<dyn Fn(Value) -> BoxFuture<'static, Result<Value, ToolError>> + Send + Sync>;

/// One registered tool: metadata, access class, and handler.
pub struct ToolEntry {
    tool: Tool,
    access: Access,
    handler: Handler,
}

impl ToolEntry {
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn call(&self, args: Value) -> BoxFuture<'static, Result<Value, ToolError>> {
        (self.handler)(args)
    }
}

/// Registry of all available tools, indexed by name.
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build the full registry against one API client.
    pub fn new(api: Arc<MilkeeApi>) -> Self {
        let mut registry = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        definitions::customers::register(&mut registry, &api);
        definitions::contacts::register(&mut registry, &api);
        definitions::projects::register(&mut registry, &api);
        definitions::tasks::register(&mut registry, &api);
        definitions::times::register(&mut registry, &api);
        definitions::timer::register(&mut registry, &api);
        definitions::entries::register(&mut registry, &api);
        definitions::accounts::register(&mut registry, &api);
        definitions::tags::register(&mut registry, &api);
        definitions::tax_rates::register(&mut registry, &api);
        definitions::products::register(&mut registry, &api);
        definitions::invoices::register(&mut registry, &api);
        definitions::proposals::register(&mut registry, &api);
        definitions::summary::register(&mut registry, &api);
        registry
    }

    /// Register one tool.
    ///
    /// The input schema is derived from `P`; the raw argument object is
    /// deserialized into `P` before the handler runs, so handlers only ever
    /// see validated, typed parameters.
    pub fn register<P, F, Fut>(
        &mut self,
        name: &'static str,
        description: &'static str,
        access: Access,
        handler: F,
    ) where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ToolError>> + Send + 'static,
    {
        assert!(
            !self.index.contains_key(name),
            "duplicate tool name: {name}"
        );

        let tool = Tool {
            name: name.into(),
            title: None,
            description: Some(description.into()),
            input_schema: schema_for_type::<P>().into(),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: None,
        };

        let handler = Box::new(move |args: Value| {
            match serde_json::from_value::<P>(args) {
                Ok(params) => handler(params).boxed(),
                Err(e) => std::future::ready(Err(ToolError::invalid_arguments(e.to_string())))
                    .boxed(),
            }
        });

        self.index.insert(name, self.entries.len());
        self.entries.push(ToolEntry {
            tool,
            access,
            handler,
        });
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Tool metadata for listing. In read-only mode, mutating tools are
    /// omitted entirely rather than advertised and refused.
    pub fn tools(&self, read_only: bool) -> Vec<Tool> {
        self.entries
            .iter()
            .filter(|entry| !read_only || entry.access == Access::ReadOnly)
            .map(|entry| entry.tool.clone())
            .collect()
    }

    /// All registered tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.tool.name.as_ref())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;

    fn test_registry() -> ToolRegistry {
        let credentials = CredentialsConfig {
            api_token: "test-token".to_string(),
            company_id: "1".to_string(),
        };
        ToolRegistry::new(Arc::new(MilkeeApi::new(&credentials)))
    }

    #[test]
    fn test_registry_covers_every_resource() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 74);
        for name in [
            "milkee_list_customers",
            "milkee_create_customer",
            "milkee_list_contacts",
            "milkee_list_projects",
            "milkee_bulk_archive_projects",
            "milkee_list_tasks",
            "milkee_list_times",
            "milkee_get_timer",
            "milkee_list_entries",
            "milkee_get_next_entry_number",
            "milkee_list_accounts",
            "milkee_list_tags",
            "milkee_get_tag_colors",
            "milkee_list_tax_rates",
            "milkee_list_products",
            "milkee_get_product_count",
            "milkee_list_invoices",
            "milkee_mark_invoice_paid",
            "milkee_list_proposals",
            "milkee_convert_proposal_to_invoice",
            "milkee_get_company_summary",
        ] {
            assert!(names.contains(&name), "missing tool: {name}");
        }
    }

    #[test]
    fn test_tool_names_are_unique() {
        let registry = test_registry();
        let names = registry.tool_names();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn test_every_tool_has_description_and_schema() {
        let registry = test_registry();
        for tool in registry.tools(false) {
            assert!(tool.name.starts_with("milkee_"), "bad prefix: {}", tool.name);
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.is_empty(), "no description: {}", tool.name);
            assert_eq!(
                tool.input_schema.get("type").and_then(Value::as_str),
                Some("object"),
                "schema for {} is not an object",
                tool.name
            );
        }
    }

    #[test]
    fn test_read_only_listing_hides_mutating_tools() {
        let registry = test_registry();
        let all = registry.tools(false);
        let read_only = registry.tools(true);
        assert!(read_only.len() < all.len());
        let names: Vec<_> = read_only.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"milkee_list_customers"));
        assert!(names.contains(&"milkee_get_company_summary"));
        assert!(!names.contains(&"milkee_create_customer"));
        assert!(!names.contains(&"milkee_delete_invoice"));
        assert!(!names.contains(&"milkee_reset_accounts"));
    }

    #[tokio::test]
    async fn test_invalid_arguments_fail_before_any_request() {
        let registry = test_registry();
        let entry = registry.get("milkee_get_customer").unwrap();
        let err = entry
            .call(serde_json::json!({ "id": "not-a-number" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
