//! Port traits for the hexagonal boundary.

pub mod order_source;
