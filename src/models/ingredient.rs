//! Ingredient catalog and product cost lines
//!
//! The catalog lists ingredients with a unit price. A product (one bag of
//! cookies, one cake) is costed by picking catalog entries and the quantity
//! of each that goes into it.

use serde::{Deserialize, Serialize};

use super::ids::IngredientId;
use super::owner::OwnerId;

/// An ingredient with its price per unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCatalogEntry {
    pub id: IngredientId,
    pub owner_id: OwnerId,
    pub name: String,
    /// Unit label, e.g. "kg" or "box"
    pub unit: String,
    pub price_per_unit: f64,
}

impl IngredientCatalogEntry {
    pub fn new(
        owner_id: OwnerId,
        name: impl Into<String>,
        unit: impl Into<String>,
        price_per_unit: f64,
    ) -> Self {
        Self {
            id: IngredientId::new(),
            owner_id,
            name: name.into(),
            unit: unit.into(),
            price_per_unit,
        }
    }
}

/// One ingredient used in a product, with the amount used
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCostLine {
    pub ingredient: IngredientCatalogEntry,
    pub quantity_used: f64,
}

impl ProductCostLine {
    /// Cost contributed by this line
    pub fn cost(&self) -> f64 {
        self.quantity_used * self.ingredient.price_per_unit
    }
}

/// Total cost of a product made from the given lines
pub fn product_cost(lines: &[ProductCostLine]) -> f64 {
    lines.iter().map(ProductCostLine::cost).sum()
}
