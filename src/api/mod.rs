//! API Client
//!
//! Typed HTTP access to the FundingSense REST API.

pub mod client;
pub mod types;

pub use client::*;
pub use types::*;
