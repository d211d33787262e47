//! Transport layer for the MCP server.
//!
//! Only STDIO is supported: the server is launched by an MCP host process
//! and exchanges protocol frames over stdin/stdout. Logs go to stderr so
//! the protocol stream stays clean.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
