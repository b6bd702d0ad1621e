//! Core domain types and logic.

pub mod aggregate;
pub mod dateparse;
pub mod engine;
pub mod error;
pub mod filter;
pub mod order;
