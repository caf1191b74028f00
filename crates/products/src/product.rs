use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use plantflow_core::{DomainError, DomainResult, ProductId, ValueObject};

/// How a product is physically dispensed.
///
/// Sealed bags cannot be opened on the plant floor, so any quantity of a
/// sealed-bag product must be rounded up to whole bags. Bulk and unit
/// products dispense any continuous quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    Bulk,
    Unit,
    SealedBag,
}

/// Immutable product reference data.
///
/// Supplied externally per calculation call; the engines never create,
/// mutate, or delete products. `package_weight_kg` is meaningful only for
/// [`PackageType::SealedBag`], where it must be positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub package_type: PackageType,
    pub package_weight_kg: f64,
}

impl Product {
    /// Validated constructor for reference data.
    ///
    /// Records arriving through deserialization bypass this; downstream
    /// packaging math still tolerates a sealed bag with a non-positive
    /// weight by treating it as bulk.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        package_type: PackageType,
        package_weight_kg: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if package_type == PackageType::SealedBag
            && !(package_weight_kg.is_finite() && package_weight_kg > 0.0)
        {
            return Err(DomainError::validation(
                "sealed-bag products require a positive package weight",
            ));
        }
        Ok(Self {
            id,
            name,
            category: category.into(),
            package_type,
            package_weight_kg,
        })
    }

    /// Well-defined default for a reference that could not be resolved.
    ///
    /// A formulation item pointing at an unknown product is not fatal: the
    /// engines must still produce a complete, renderable summary. The caller
    /// decides whether an "Unknown" row is acceptable.
    pub fn fallback(id: ProductId) -> Self {
        Self {
            id,
            name: "Unknown".to_string(),
            category: String::new(),
            package_type: PackageType::Bulk,
            package_weight_kg: 0.0,
        }
    }

    /// Whether the packaging rule actually rounds for this product.
    pub fn rounds_to_whole_bags(&self) -> bool {
        self.package_type == PackageType::SealedBag && self.package_weight_kg > 0.0
    }
}

impl ValueObject for Product {}

/// Lookup over the product records supplied for one calculation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductIndex {
    by_id: HashMap<ProductId, Product>,
}

impl ProductIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: Product) {
        self.by_id.insert(product.id, product);
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id)
    }

    /// Resolve a reference, falling back to [`Product::fallback`] when the
    /// record is missing.
    pub fn resolve(&self, id: ProductId) -> Product {
        self.by_id
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Product::fallback(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl FromIterator<Product> for ProductIndex {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut index = Self::new();
        for product in iter {
            index.insert(product);
        }
        index
    }
}
