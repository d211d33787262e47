//! MILKEE REST API client.
//!
//! This module owns all communication with the MILKEE accounting platform.
//! `client.rs` holds the transport (auth, query encoding, response decoding);
//! the per-resource modules hold the DTOs, input shapes, and one facade
//! method per remote operation.

mod client;
mod error;

pub mod accounts;
pub mod contacts;
pub mod customers;
pub mod entries;
pub mod invoices;
pub mod products;
pub mod projects;
pub mod proposals;
pub mod tags;
pub mod tasks;
pub mod tax_rates;
pub mod timer;
pub mod times;

pub use client::{ApiResponse, Meta, MilkeeApi, Query, BASE_URL};
pub use error::{ApiError, ApiResult};
