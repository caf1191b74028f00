//! Accumulated validation verdicts.
//!
//! The calculation engines never fail fast: the consuming UI must show every
//! violation at once, with stable "Item N:" numbering. Validation therefore
//! returns a [`Verdict`] (a valid flag plus the ordered list of messages),
//! built through an appending [`VerdictBuilder`].

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Immutable outcome of a validation pass.
///
/// Valid iff no messages were collected. Message order matches the order in
/// which rules were evaluated, which matches input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    valid: bool,
    errors: Vec<String>,
}

impl Verdict {
    /// A verdict with no violations.
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl ValueObject for Verdict {}

/// Growable, ordered error collector.
///
/// `push` appends; `finish` seals the list into a [`Verdict`].
#[derive(Debug, Default)]
pub struct VerdictBuilder {
    errors: Vec<String>,
}

impl VerdictBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rule violation. Order of calls is preserved in the verdict.
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn finish(self) -> Verdict {
        Verdict {
            valid: self.errors.is_empty(),
            errors: self.errors,
        }
    }
}
