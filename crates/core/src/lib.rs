//! `plantflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod value_object;
pub mod verdict;

pub use error::{DomainError, DomainResult};
pub use id::{FormulationId, ProductId};
pub use value_object::ValueObject;
pub use verdict::{Verdict, VerdictBuilder};
