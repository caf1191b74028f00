use serde::{Deserialize, Serialize};

use plantflow_core::{DomainError, DomainResult, FormulationId, ProductId, ValueObject};

/// A compound recipe: which components one batch consumes and how much
/// compound it produces.
///
/// Reference data supplied externally; the engine never creates or mutates
/// formulations. Items are ordered, and a formulation with zero items is
/// legal (it yields an empty summary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formulation {
    pub id: FormulationId,
    pub name: String,
    /// The compound this recipe produces.
    pub final_product_id: ProductId,
    /// Machine the recipe is registered for.
    pub machine: String,
    /// Kilograms of compound produced by one batch.
    pub weight_per_batch_kg: f64,
    pub active: bool,
}

impl Formulation {
    pub fn new(
        id: FormulationId,
        name: impl Into<String>,
        final_product_id: ProductId,
        machine: impl Into<String>,
        weight_per_batch_kg: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("formulation name cannot be empty"));
        }
        if !(weight_per_batch_kg.is_finite() && weight_per_batch_kg > 0.0) {
            return Err(DomainError::validation(
                "weight per batch must be a positive number",
            ));
        }
        Ok(Self {
            id,
            name,
            final_product_id,
            machine: machine.into(),
            weight_per_batch_kg,
            active: true,
        })
    }
}

/// One component line of a formulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulationItem {
    pub product_id: ProductId,
    /// Kilograms of this component consumed per single batch.
    pub quantity_per_batch_kg: f64,
}

impl FormulationItem {
    pub fn new(product_id: ProductId, quantity_per_batch_kg: f64) -> DomainResult<Self> {
        if !(quantity_per_batch_kg.is_finite() && quantity_per_batch_kg >= 0.0) {
            return Err(DomainError::invariant(
                "quantity per batch cannot be negative",
            ));
        }
        Ok(Self {
            product_id,
            quantity_per_batch_kg,
        })
    }
}

impl ValueObject for FormulationItem {}
