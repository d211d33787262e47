//! MILKEE MCP Server Library
//!
//! This crate exposes the MILKEE Swiss accounting platform's REST API as a
//! Model Context Protocol (MCP) server: ~74 tools covering customers,
//! projects, tasks, time tracking, bookkeeping entries, products, accounts,
//! tags, tax rates, contacts, invoices, and proposals, plus an aggregated
//! company summary.
//!
//! # Architecture
//!
//! - **api**: the MILKEE REST client - transport, DTOs, and one facade
//!   method per remote operation
//! - **core**: configuration, error handling, the MCP server handler, and
//!   the stdio transport
//! - **domains::tools**: the tool registry, dispatcher (with the read-only
//!   gate), list projections, and per-resource tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use milkee_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
