//! Transfers domain module (route legality and line validation).
//!
//! This crate contains business rules for stock transfers between locations,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod routes;
pub mod transfer;

pub use routes::{CD, FABRICA, FLOW_ROUTES, PCP, PMP, is_valid_route};
pub use transfer::{TransferLineInput, TransferRequest, validate_transfer_items};
