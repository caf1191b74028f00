//! Transfer line validation.
//!
//! Proposed transfer lines are checked before a transfer request is created.
//! The scan covers the whole set, never the first violation only, so the
//! requesting screen can show everything that is wrong at once. Messages are
//! the Portuguese strings rendered by the consuming UI; kg amounts are
//! formatted to one decimal place.

use serde::{Deserialize, Serialize};

use plantflow_core::{ProductId, ValueObject, Verdict, VerdictBuilder};

use crate::routes::is_valid_route;

/// One proposed transfer line, as entered by the caller.
///
/// `quantity` is in the unit the user typed (`unit_label`); `equivalent_kg`
/// is that same request already converted to kilograms upstream, which is
/// what gets checked against the available balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferLineInput {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: f64,
    pub unit_label: String,
    pub available_kg: f64,
    pub equivalent_kg: f64,
}

impl ValueObject for TransferLineInput {}

/// Validate a proposed set of transfer lines.
///
/// An empty set is always invalid (exactly one generic error). Per line:
/// the quantity must be strictly positive, and the kg equivalent must not
/// exceed the available balance at the source.
pub fn validate_transfer_items(items: &[TransferLineInput]) -> Verdict {
    let mut verdict = VerdictBuilder::new();

    if items.is_empty() {
        verdict.push("Nenhum item para transferir");
    }

    for item in items {
        if item.quantity <= 0.0 {
            verdict.push(format!(
                "{}: quantidade deve ser positiva",
                item.product_name
            ));
        }
        if item.equivalent_kg > item.available_kg {
            verdict.push(format!(
                "{}: estoque insuficiente ({:.1}kg disponível, {:.1}kg necessário)",
                item.product_name, item.available_kg, item.equivalent_kg
            ));
        }
    }

    verdict.finish()
}

/// A proposed transfer: route plus line items, validated as one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    pub items: Vec<TransferLineInput>,
}

impl TransferRequest {
    /// Route legality first, then every line; all violations accumulate into
    /// one ordered verdict.
    pub fn validate(&self) -> Verdict {
        let mut verdict = VerdictBuilder::new();

        if !is_valid_route(&self.from, &self.to) {
            verdict.push(format!(
                "Rota de transferência inválida: {} → {}",
                self.from, self.to
            ));
        }

        let items = validate_transfer_items(&self.items);
        for error in items.errors() {
            verdict.push(error.clone());
        }

        verdict.finish()
    }
}
