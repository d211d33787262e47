//! Tool dispatch - name resolution, access gating, and result rendering.

use rmcp::model::Tool;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::error::ToolError;
use super::registry::{Access, ToolRegistry};

/// Routes incoming tool calls to their registered handlers.
///
/// Resolution order is fixed: unknown name, then the read-only gate, then
/// argument validation inside the entry. A gated or unknown call never
/// reaches the network.
pub struct Dispatcher {
    registry: ToolRegistry,
    read_only: bool,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry, read_only: bool) -> Self {
        Self {
            registry,
            read_only,
        }
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Tool metadata to advertise to clients.
    pub fn advertised_tools(&self) -> Vec<Tool> {
        self.registry.tools(self.read_only)
    }

    /// Execute a tool call and render the outcome as response text.
    ///
    /// Success renders the handler's value as pretty-printed JSON; any
    /// failure renders as a one-field `{"error": ...}` object so clients
    /// always receive well-formed JSON.
    pub async fn handle(&self, name: &str, args: Value) -> String {
        match self.dispatch(name, args).await {
            Ok(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|e| {
                    json!({ "error": format!("Serialization error: {e}") }).to_string()
                })
            }
            Err(e) => {
                warn!(tool = name, error = %e, "tool call failed");
                json!({ "error": e.to_string() }).to_string()
            }
        }
    }

    async fn dispatch(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let entry = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))?;

        if self.read_only && entry.access() != Access::ReadOnly {
            return Err(ToolError::read_only(name));
        }

        debug!(tool = name, "dispatching tool call");
        entry.call(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MilkeeApi;
    use crate::core::config::CredentialsConfig;
    use std::sync::Arc;

    fn test_dispatcher(read_only: bool) -> Dispatcher {
        let credentials = CredentialsConfig {
            api_token: "test-token".to_string(),
            company_id: "1".to_string(),
        };
        let registry = ToolRegistry::new(Arc::new(MilkeeApi::new(&credentials)));
        Dispatcher::new(registry, read_only)
    }

    #[tokio::test]
    async fn test_unknown_tool_yields_error_json() {
        let dispatcher = test_dispatcher(false);
        let text = dispatcher.handle("milkee_explode", json!({})).await;
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["error"], "Unknown tool: milkee_explode");
    }

    #[tokio::test]
    async fn test_read_only_gate_refuses_mutations() {
        let dispatcher = test_dispatcher(true);
        let text = dispatcher
            .handle("milkee_delete_customer", json!({ "id": 1 }))
            .await;
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed["error"],
            "Tool 'milkee_delete_customer' is not available in read-only mode"
        );
    }

    #[tokio::test]
    async fn test_invalid_arguments_render_as_error_json() {
        let dispatcher = test_dispatcher(false);
        let text = dispatcher
            .handle("milkee_get_invoice", json!({ "id": [] }))
            .await;
        let parsed: Value = serde_json::from_str(&text).unwrap();
        let message = parsed["error"].as_str().unwrap();
        assert!(message.starts_with("Invalid arguments:"), "{message}");
    }

    #[test]
    fn test_read_write_mode_advertises_everything() {
        let dispatcher = test_dispatcher(false);
        assert_eq!(dispatcher.advertised_tools().len(), 74);
    }
}
