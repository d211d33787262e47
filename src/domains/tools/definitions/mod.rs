//! Tool definitions.
//!
//! One module per MILKEE resource; each exposes a `register` function that
//! adds its tools to the [`ToolRegistry`](super::registry::ToolRegistry).

pub mod accounts;
pub mod contacts;
pub mod customers;
pub mod entries;
pub mod invoices;
pub mod products;
pub mod projects;
pub mod proposals;
pub mod summary;
pub mod tags;
pub mod tasks;
pub mod tax_rates;
pub mod timer;
pub mod times;
