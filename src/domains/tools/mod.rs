//! Tools domain module.
//!
//! Everything needed to expose the MILKEE API as MCP tools:
//!
//! - `definitions/` - per-resource tool registrations (one file per resource)
//! - `registry.rs` - tool catalog: metadata, access class, typed handlers
//! - `dispatcher.rs` - name resolution, read-only gating, result rendering
//! - `projections.rs` - slim DTOs for high-volume list results
//! - `error.rs` - tool-specific error types
//!
//! Adding a tool means one `registry.register(...)` call in the matching
//! definitions file; listing and dispatch pick it up from there.

pub mod definitions;
mod dispatcher;
mod error;
pub mod projections;
mod registry;

pub use dispatcher::Dispatcher;
pub use error::ToolError;
pub use registry::{Access, NoParams, ToolEntry, ToolRegistry};
