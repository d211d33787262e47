//! Domains module containing business logic organized by bounded contexts.
//!
//! The tools domain is the server's entire surface: every MILKEE operation
//! is exposed as a callable tool.

pub mod tools;
