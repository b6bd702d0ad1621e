//! orderdesk — trade order filtering and aggregation engine.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`]. The host-facing
//! request/response envelopes live in [`protocol`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
pub mod protocol;
