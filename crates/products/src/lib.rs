//! Products domain module (reference data).
//!
//! This crate contains the immutable product catalog records the calculation
//! engines consume: identity, packaging rules, and fallback resolution of
//! missing references. No IO, no storage.

pub mod product;

pub use product::{PackageType, Product, ProductIndex};
