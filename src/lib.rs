//! `poly-ladder` library crate.
//!
//! The binary is a thin wrapper around this library: the aggregation
//! pipeline (extraction, deduplication, marginal conversion, expected
//! value) is pure and testable without touching the network, while the
//! `gamma`/`spot` clients and the report writer carry the I/O.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod ev;
pub mod extract;
pub mod gamma;
pub mod ladder;
pub mod model;
pub mod report;
pub mod spot;
