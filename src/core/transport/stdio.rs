//! Stdio transport.
//!
//! The server speaks MCP over stdin/stdout; all logging goes to stderr so
//! the protocol stream stays clean. This is the only transport MILKEE
//! clients connect through.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Runs an [`McpServer`] over the process's stdin/stdout pair.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve until the client disconnects or the stream closes.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            read_only = server.dispatcher().read_only(),
            "MILKEE MCP server listening on stdio"
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("stdio session closed");
        Ok(())
    }
}
