//! Production calculation engine.
//!
//! Expands a formulation over a batch count into per-component required
//! quantities, applies the packaging rule, and evaluates stock sufficiency.
//! Pure map-then-reduce with no early exit: every item is always evaluated so
//! the confirmation screen gets a complete picture even when some components
//! are short.

use serde::{Deserialize, Serialize};

use plantflow_core::{FormulationId, ProductId, ValueObject};
use plantflow_inventory::StockSnapshot;
use plantflow_products::{PackageType, ProductIndex};

use crate::formulation::{Formulation, FormulationItem};

/// Exact component need for a batch count, before packaging.
///
/// Plain float multiplication; nothing rounds until the packaging rule.
pub fn ideal_quantity_kg(quantity_per_batch_kg: f64, batches: u32) -> f64 {
    quantity_per_batch_kg * f64::from(batches)
}

/// Result of applying the packaging rule to an ideal quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackagingAdjustment {
    pub adjusted_kg: f64,
    /// Whole sealed bags to dispense; `None` when the product does not round.
    pub sacks_required: Option<u64>,
}

impl ValueObject for PackagingAdjustment {}

/// Convert an ideal continuous quantity into a dispensable one.
///
/// Bulk and unit products dispense any quantity, as does a sealed-bag record
/// whose weight is out of contract (≤ 0). A real sealed-bag product rounds
/// **up** to whole bags (partial bags cannot be dispensed), so the adjusted
/// quantity is always ≥ the ideal one.
pub fn adjust_for_packaging(
    ideal_kg: f64,
    package_type: PackageType,
    package_weight_kg: f64,
) -> PackagingAdjustment {
    match package_type {
        PackageType::SealedBag if package_weight_kg > 0.0 => {
            let sacks = (ideal_kg / package_weight_kg).ceil() as u64;
            PackagingAdjustment {
                adjusted_kg: sacks as f64 * package_weight_kg,
                sacks_required: Some(sacks),
            }
        }
        _ => PackagingAdjustment {
            adjusted_kg: ideal_kg,
            sacks_required: None,
        },
    }
}

/// Per-component line of a production summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub category: String,
    pub package_type: PackageType,
    pub package_weight_kg: f64,
    /// Exact need (`quantity_per_batch × batches`).
    pub ideal_kg: f64,
    /// Need after the packaging rule.
    pub adjusted_kg: f64,
    /// `adjusted − ideal`.
    pub difference_kg: f64,
    pub sacks_required: Option<u64>,
    /// Non-negative excess created by rounding up to whole bags.
    pub rounding_loss_kg: f64,
    pub available_kg: f64,
    /// `available ≥ adjusted`.
    pub sufficient: bool,
}

impl ValueObject for CalculatedItem {}

/// Complete output of one production calculation.
///
/// Derived and transient: the engine never persists it. Item order matches
/// the input item order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub formulation_id: FormulationId,
    pub batches: u32,
    /// `batches × weight_per_batch`.
    pub total_compound_kg: f64,
    pub items: Vec<CalculatedItem>,
    /// AND across all items; vacuously true for an empty formulation.
    pub all_stock_sufficient: bool,
    pub total_rounding_loss_kg: f64,
}

impl ValueObject for ProductionSummary {}

/// Expand `formulation` over `batches` and evaluate every item against the
/// supplied reference data and stock snapshot.
///
/// Missing product references resolve to the fallback record and missing
/// stock entries read as zero; neither is fatal. The caller decides what to
/// do with an insufficient or "Unknown" line.
pub fn calculate_production(
    formulation: &Formulation,
    items: &[FormulationItem],
    batches: u32,
    products: &ProductIndex,
    stock: &StockSnapshot,
) -> ProductionSummary {
    let mut calculated = Vec::with_capacity(items.len());
    let mut total_rounding_loss_kg = 0.0;
    let mut all_stock_sufficient = true;

    for item in items {
        let product = products.resolve(item.product_id);
        let ideal_kg = ideal_quantity_kg(item.quantity_per_batch_kg, batches);
        let adjustment =
            adjust_for_packaging(ideal_kg, product.package_type, product.package_weight_kg);

        let rounding_loss_kg = if product.rounds_to_whole_bags() {
            adjustment.adjusted_kg - ideal_kg
        } else {
            0.0
        };

        let available_kg = stock.available_kg(item.product_id);
        let sufficient = available_kg >= adjustment.adjusted_kg;

        total_rounding_loss_kg += rounding_loss_kg;
        all_stock_sufficient = all_stock_sufficient && sufficient;

        calculated.push(CalculatedItem {
            product_id: item.product_id,
            product_name: product.name,
            category: product.category,
            package_type: product.package_type,
            package_weight_kg: product.package_weight_kg,
            ideal_kg,
            adjusted_kg: adjustment.adjusted_kg,
            difference_kg: adjustment.adjusted_kg - ideal_kg,
            sacks_required: adjustment.sacks_required,
            rounding_loss_kg,
            available_kg,
            sufficient,
        });
    }

    ProductionSummary {
        formulation_id: formulation.id,
        batches,
        total_compound_kg: f64::from(batches) * formulation.weight_per_batch_kg,
        items: calculated,
        all_stock_sufficient,
        total_rounding_loss_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantflow_core::ProductId;
    use plantflow_products::Product;

    fn test_formulation(weight_per_batch_kg: f64) -> Formulation {
        Formulation::new(
            FormulationId::new(),
            "Composto SBR-70",
            ProductId::new(),
            "BANBURY-01",
            weight_per_batch_kg,
        )
        .unwrap()
    }

    fn sealed_bag_product(id: ProductId, bag_kg: f64) -> Product {
        Product::new(id, "Zinc Oxide", "activator", PackageType::SealedBag, bag_kg).unwrap()
    }

    fn bulk_product(id: ProductId) -> Product {
        Product::new(id, "Natural Rubber", "polymer", PackageType::Bulk, 0.0).unwrap()
    }

    #[test]
    fn ideal_quantity_is_exact_multiplication() {
        assert_eq!(ideal_quantity_kg(30.0, 3), 90.0);
        assert_eq!(ideal_quantity_kg(0.5, 7), 3.5);
        assert_eq!(ideal_quantity_kg(12.25, 0), 0.0);
    }

    #[test]
    fn bulk_and_unit_packaging_leave_quantity_unchanged() {
        for package_type in [PackageType::Bulk, PackageType::Unit] {
            let adjustment = adjust_for_packaging(93.7, package_type, 25.0);
            assert_eq!(adjustment.adjusted_kg, 93.7);
            assert_eq!(adjustment.sacks_required, None);
        }
    }

    #[test]
    fn sealed_bag_with_non_positive_weight_behaves_as_bulk() {
        let adjustment = adjust_for_packaging(93.7, PackageType::SealedBag, 0.0);
        assert_eq!(adjustment.adjusted_kg, 93.7);
        assert_eq!(adjustment.sacks_required, None);
    }

    #[test]
    fn sealed_bag_rounds_up_to_whole_bags() {
        let adjustment = adjust_for_packaging(90.0, PackageType::SealedBag, 25.0);
        assert_eq!(adjustment.sacks_required, Some(4));
        assert_eq!(adjustment.adjusted_kg, 100.0);

        // An exact multiple does not round.
        let exact = adjust_for_packaging(100.0, PackageType::SealedBag, 25.0);
        assert_eq!(exact.sacks_required, Some(4));
        assert_eq!(exact.adjusted_kg, 100.0);

        // Zero need, zero bags.
        let zero = adjust_for_packaging(0.0, PackageType::SealedBag, 25.0);
        assert_eq!(zero.sacks_required, Some(0));
        assert_eq!(zero.adjusted_kg, 0.0);
    }

    #[test]
    fn three_batch_sealed_bag_scenario() {
        // 100 kg/batch formulation; one item needs 30 kg/batch of a product
        // packed in 25 kg sealed bags; 3 batches.
        let formulation = test_formulation(100.0);
        let component_id = ProductId::new();
        let items = vec![FormulationItem::new(component_id, 30.0).unwrap()];
        let products: ProductIndex = [sealed_bag_product(component_id, 25.0)]
            .into_iter()
            .collect();
        let stock = StockSnapshot::new("PCP").with_balance(component_id, 150.0);

        let summary = calculate_production(&formulation, &items, 3, &products, &stock);

        assert_eq!(summary.total_compound_kg, 300.0);
        assert_eq!(summary.total_rounding_loss_kg, 10.0);
        assert!(summary.all_stock_sufficient);

        let line = &summary.items[0];
        assert_eq!(line.ideal_kg, 90.0);
        assert_eq!(line.sacks_required, Some(4));
        assert_eq!(line.adjusted_kg, 100.0);
        assert_eq!(line.difference_kg, 10.0);
        assert_eq!(line.rounding_loss_kg, 10.0);
        assert_eq!(line.available_kg, 150.0);
        assert!(line.sufficient);
    }

    #[test]
    fn empty_formulation_is_vacuously_sufficient() {
        let formulation = test_formulation(100.0);
        let summary = calculate_production(
            &formulation,
            &[],
            5,
            &ProductIndex::new(),
            &StockSnapshot::new("PCP"),
        );

        assert!(summary.items.is_empty());
        assert!(summary.all_stock_sufficient);
        assert_eq!(summary.total_rounding_loss_kg, 0.0);
        assert_eq!(summary.total_compound_kg, 500.0);
    }

    #[test]
    fn missing_product_resolves_to_unknown_and_still_computes() {
        let formulation = test_formulation(100.0);
        let orphan_id = ProductId::new();
        let items = vec![FormulationItem::new(orphan_id, 10.0).unwrap()];

        let summary = calculate_production(
            &formulation,
            &items,
            2,
            &ProductIndex::new(),
            &StockSnapshot::new("PCP"),
        );

        let line = &summary.items[0];
        assert_eq!(line.product_name, "Unknown");
        assert_eq!(line.category, "");
        assert_eq!(line.package_type, PackageType::Bulk);
        assert_eq!(line.ideal_kg, 20.0);
        assert_eq!(line.adjusted_kg, 20.0);
        // No stock entry either: available defaults to zero, insufficient.
        assert_eq!(line.available_kg, 0.0);
        assert!(!line.sufficient);
        assert!(!summary.all_stock_sufficient);
    }

    #[test]
    fn every_item_is_evaluated_even_after_a_shortage() {
        let formulation = test_formulation(100.0);
        let short_id = ProductId::new();
        let fine_id = ProductId::new();
        let items = vec![
            FormulationItem::new(short_id, 50.0).unwrap(),
            FormulationItem::new(fine_id, 10.0).unwrap(),
        ];
        let products: ProductIndex = [bulk_product(short_id), bulk_product(fine_id)]
            .into_iter()
            .collect();
        let stock = StockSnapshot::new("PCP")
            .with_balance(short_id, 10.0)
            .with_balance(fine_id, 100.0);

        let summary = calculate_production(&formulation, &items, 2, &products, &stock);

        assert_eq!(summary.items.len(), 2);
        assert!(!summary.items[0].sufficient);
        assert!(summary.items[1].sufficient);
        assert!(!summary.all_stock_sufficient);
    }

    #[test]
    fn summary_item_order_matches_input_order() {
        let formulation = test_formulation(100.0);
        let ids: Vec<ProductId> = (0..4).map(|_| ProductId::new()).collect();
        let items: Vec<FormulationItem> = ids
            .iter()
            .map(|&id| FormulationItem::new(id, 5.0).unwrap())
            .collect();

        let summary = calculate_production(
            &formulation,
            &items,
            1,
            &ProductIndex::new(),
            &StockSnapshot::new("CD"),
        );

        let output_ids: Vec<ProductId> = summary.items.iter().map(|i| i.product_id).collect();
        assert_eq!(output_ids, ids);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: sealed-bag adjustment never rounds down and always
            /// lands on a whole number of bags.
            #[test]
            fn sealed_bag_adjustment_covers_the_need(
                ideal_kg in 0.0f64..1.0e6,
                bag_kg in 0.001f64..1.0e3,
            ) {
                let adjustment =
                    adjust_for_packaging(ideal_kg, PackageType::SealedBag, bag_kg);
                let sacks = adjustment.sacks_required.unwrap();

                prop_assert!(adjustment.adjusted_kg >= ideal_kg);
                prop_assert_eq!(adjustment.adjusted_kg, sacks as f64 * bag_kg);
            }

            /// Property: bulk and unit packaging are the identity.
            #[test]
            fn non_bag_packaging_is_identity(
                ideal_kg in 0.0f64..1.0e6,
                weight in -1.0e3f64..1.0e3,
            ) {
                for package_type in [PackageType::Bulk, PackageType::Unit] {
                    let adjustment = adjust_for_packaging(ideal_kg, package_type, weight);
                    prop_assert_eq!(adjustment.adjusted_kg, ideal_kg);
                    prop_assert_eq!(adjustment.sacks_required, None);
                }
            }

            /// Property: recomputation with identical inputs is bit-identical,
            /// including item ordering.
            #[test]
            fn calculation_is_idempotent(
                quantity_per_batch in 0.0f64..1.0e3,
                batches in 0u32..1000,
                available in 0.0f64..1.0e6,
                bag_kg in 0.5f64..100.0,
            ) {
                let formulation = test_formulation(100.0);
                let component_id = ProductId::new();
                let items = vec![
                    FormulationItem::new(component_id, quantity_per_batch).unwrap(),
                ];
                let products: ProductIndex =
                    [sealed_bag_product(component_id, bag_kg)].into_iter().collect();
                let stock =
                    StockSnapshot::new("PCP").with_balance(component_id, available);

                let first =
                    calculate_production(&formulation, &items, batches, &products, &stock);
                let second =
                    calculate_production(&formulation, &items, batches, &products, &stock);
                prop_assert_eq!(first, second);
            }
        }
    }
}
