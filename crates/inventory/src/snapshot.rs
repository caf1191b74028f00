use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use plantflow_core::{ProductId, ValueObject};

/// Available stock at one location, captured at the moment of a calculation.
///
/// The authoritative balance lives in the external storage system; a snapshot
/// is supplied fresh for every engine call and never cached here. A product
/// absent from the snapshot has zero available stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub location: String,
    balances_kg: HashMap<ProductId, f64>,
}

impl StockSnapshot {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            balances_kg: HashMap::new(),
        }
    }

    pub fn set_balance(&mut self, product_id: ProductId, kg: f64) {
        self.balances_kg.insert(product_id, kg);
    }

    /// Builder-style convenience for tests and callers assembling snapshots.
    pub fn with_balance(mut self, product_id: ProductId, kg: f64) -> Self {
        self.set_balance(product_id, kg);
        self
    }

    /// Available kilograms for a product; absent entries read as 0.
    pub fn available_kg(&self, product_id: ProductId) -> f64 {
        self.balances_kg.get(&product_id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.balances_kg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances_kg.is_empty()
    }
}

impl ValueObject for StockSnapshot {}
