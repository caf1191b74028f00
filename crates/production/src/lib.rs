//! Production domain module (formulation expansion and stock sufficiency).
//!
//! This crate contains the production calculation engine, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod engine;
pub mod formulation;

pub use engine::{
    CalculatedItem, PackagingAdjustment, ProductionSummary, adjust_for_packaging,
    calculate_production, ideal_quantity_kg,
};
pub use formulation::{Formulation, FormulationItem};
