//! Physical inventory count engine.
//!
//! Compares counted stock against system-recorded stock, flags divergences
//! that need a justification, and validates a full count submission. All
//! functions are pure; verdict messages are the Portuguese strings rendered
//! by the consuming UI, with 1-indexed "Item N:" numbering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use plantflow_core::{ProductId, ValueObject, Verdict, VerdictBuilder};

/// Differences at or below this magnitude are treated as floating-point
/// noise from upstream unit conversions, not real divergences.
pub const DEFAULT_JUSTIFICATION_THRESHOLD_KG: f64 = 0.001;

/// Signed counted-vs-system difference: positive = surplus, negative = shortage.
pub fn difference_kg(counted_kg: f64, system_kg: f64) -> f64 {
    counted_kg - system_kg
}

/// Whether a difference is large enough to require a written justification.
pub fn requires_justification(difference_kg: f64, threshold_kg: f64) -> bool {
    difference_kg.abs() > threshold_kg
}

/// Relative divergence of the counted value, in percent.
///
/// When the system balance is exactly zero there is no meaningful ratio.
/// Compatibility policy (not a derived fact): return 0 when the difference is
/// also exactly zero, otherwise the sentinel 100 ("fully divergent"). This
/// caps the magnitude instead of producing infinity or NaN.
pub fn divergence_percent(difference_kg: f64, system_kg: f64) -> f64 {
    if system_kg == 0.0 {
        if difference_kg == 0.0 { 0.0 } else { 100.0 }
    } else {
        (difference_kg / system_kg) * 100.0
    }
}

/// One row of a physical count, as submitted for validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub system_kg: f64,
    pub counted_kg: f64,
    pub difference_kg: f64,
    pub needs_justification: bool,
    /// Captured by the caller's workflow; the engine only checks presence.
    pub justification: Option<String>,
}

impl CountRow {
    /// Build a row from the raw counted value, deriving the difference and
    /// the justification flag with the default threshold.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        system_kg: f64,
        counted_kg: f64,
    ) -> Self {
        let difference = difference_kg(counted_kg, system_kg);
        Self {
            product_id,
            product_name: product_name.into(),
            system_kg,
            counted_kg,
            difference_kg: difference,
            needs_justification: requires_justification(
                difference,
                DEFAULT_JUSTIFICATION_THRESHOLD_KG,
            ),
            justification: None,
        }
    }

    pub fn with_justification(mut self, text: impl Into<String>) -> Self {
        self.justification = Some(text.into());
        self
    }

    /// Relative divergence of this row, in percent.
    pub fn divergence_percent(&self) -> f64 {
        divergence_percent(self.difference_kg, self.system_kg)
    }

    fn justification_missing(&self) -> bool {
        self.needs_justification
            && self
                .justification
                .as_deref()
                .is_none_or(|text| text.trim().is_empty())
    }
}

impl ValueObject for CountRow {}

/// A full physical count submitted together for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountSheet {
    pub location: String,
    /// Supplied by the caller; the engine never reads the wall clock.
    pub counted_at: DateTime<Utc>,
    pub rows: Vec<CountRow>,
}

impl CountSheet {
    pub fn validate(&self) -> Verdict {
        validate_count_rows(&self.rows)
    }
}

/// Validate every row of a count submission.
///
/// No short-circuit: every row is scanned and every violation is reported,
/// so a row with several problems contributes several messages. Rows are
/// numbered from 1 in the order they were submitted.
pub fn validate_count_rows(rows: &[CountRow]) -> Verdict {
    let mut verdict = VerdictBuilder::new();

    for (index, row) in rows.iter().enumerate() {
        let position = index + 1;

        if row.counted_kg.is_nan() {
            verdict.push(format!("Item {position}: valor contado inválido"));
        }
        if row.counted_kg < 0.0 {
            verdict.push(format!(
                "Item {position}: valor contado não pode ser negativo"
            ));
        }
        if row.justification_missing() {
            verdict.push(format!(
                "Item {position}: justificativa obrigatória para a divergência"
            ));
        }
    }

    verdict.finish()
}
