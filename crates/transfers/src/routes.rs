//! Sanctioned movements in the industrial flow.
//!
//! The flow topology is a domain invariant, not configuration: material moves
//! CD → PCP → PMP → FABRICA and nothing else. The edge set below is the
//! single source of truth and must be consulted before any transfer request
//! is created.

/// Central distribution warehouse.
pub const CD: &str = "CD";
/// Production planning buffer.
pub const PCP: &str = "PCP";
/// Pre-mix preparation area.
pub const PMP: &str = "PMP";
/// Factory floor (storage-system code; "Factory" is a UI display name).
pub const FABRICA: &str = "FABRICA";

/// The only legal `(from, to)` edges, in flow order.
pub const FLOW_ROUTES: [(&str, &str); 3] = [(CD, PCP), (PCP, PMP), (PMP, FABRICA)];

/// Whether `from → to` is a sanctioned edge.
///
/// Exact, case-sensitive match against [`FLOW_ROUTES`]. There is no
/// transitive inference: CD → PMP is illegal even though CD → PCP → PMP is a
/// valid composed path.
pub fn is_valid_route(from: &str, to: &str) -> bool {
    FLOW_ROUTES
        .iter()
        .any(|&(edge_from, edge_to)| edge_from == from && edge_to == to)
}
