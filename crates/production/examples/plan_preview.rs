//! Render a production summary for a small sample scenario.
//!
//! ```sh
//! cargo run -p plantflow-production --example plan_preview
//! ```

use anyhow::Result;

use plantflow_core::{FormulationId, ProductId};
use plantflow_inventory::StockSnapshot;
use plantflow_production::{FormulationItem, calculate_production};
use plantflow_products::{PackageType, Product, ProductIndex};

fn main() -> Result<()> {
    plantflow_observability::init();

    let compound_id = ProductId::new();
    let rubber_id = ProductId::new();
    let zinc_id = ProductId::new();

    let products: ProductIndex = [
        Product::new(rubber_id, "Borracha Natural", "polymer", PackageType::Bulk, 0.0)?,
        Product::new(zinc_id, "Óxido de Zinco", "activator", PackageType::SealedBag, 25.0)?,
    ]
    .into_iter()
    .collect();

    let formulation = plantflow_production::Formulation::new(
        FormulationId::new(),
        "Composto SBR-70",
        compound_id,
        "BANBURY-01",
        100.0,
    )?;
    let items = vec![
        FormulationItem::new(rubber_id, 60.0)?,
        FormulationItem::new(zinc_id, 30.0)?,
    ];

    let stock = StockSnapshot::new("PCP")
        .with_balance(rubber_id, 500.0)
        .with_balance(zinc_id, 150.0);

    let summary = calculate_production(&formulation, &items, 3, &products, &stock);
    tracing::info!(
        batches = summary.batches,
        total_compound_kg = summary.total_compound_kg,
        rounding_loss_kg = summary.total_rounding_loss_kg,
        sufficient = summary.all_stock_sufficient,
        "production summary calculated"
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
