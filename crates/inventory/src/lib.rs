//! Inventory domain module (stock snapshots and physical counts).
//!
//! This crate contains business rules for inventory, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod count;
pub mod snapshot;

pub use count::{
    CountRow, CountSheet, DEFAULT_JUSTIFICATION_THRESHOLD_KG, difference_kg, divergence_percent,
    requires_justification, validate_count_rows,
};
pub use snapshot::StockSnapshot;
