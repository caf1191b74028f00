//! Value object trait: equality by value, not identity.
//!
//! Every type the engines hand back (verdicts, summaries, calculated items)
//! is a value object: immutable once constructed, compared entirely by its
//! attribute values, and safe to share across threads.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy (they're values, not references)
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
