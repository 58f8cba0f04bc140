//! Ingredient catalog service
//!
//! Manages the owner's ingredient price list and costs a product from the
//! ingredients that go into it.

use crate::audit::{generate_diff, AuditEntry, EntityType};
use crate::error::{ShopbooksError, ShopbooksResult};
use crate::models::{product_cost, IngredientCatalogEntry, OwnerContext, ProductCostLine};
use crate::storage::RecordStore;

use super::input::{require_amount, require_text, single_match, AmountRule};

/// Parse a unit price typed by the user
pub fn parse_unit_price(raw: &str) -> ShopbooksResult<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        ShopbooksError::Validation(format!("Price per unit '{}' is not a number", raw))
    })?;
    require_amount("Price per unit", value, AmountRule::NonNegative)
}

/// Changes to a catalog entry; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientUpdate {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub price_per_unit: Option<f64>,
}

/// A costed product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCosting {
    pub lines: Vec<ProductCostLine>,
    pub total: f64,
}

/// Service for the ingredient catalog
pub struct IngredientService<'a> {
    store: &'a dyn RecordStore,
    owner: &'a OwnerContext,
}

impl<'a> IngredientService<'a> {
    pub fn new(store: &'a dyn RecordStore, owner: &'a OwnerContext) -> Self {
        Self { store, owner }
    }

    pub fn create(
        &self,
        name: &str,
        unit: &str,
        price_per_unit: f64,
    ) -> ShopbooksResult<IngredientCatalogEntry> {
        let entry = IngredientCatalogEntry::new(
            self.owner.owner_id().clone(),
            require_text("Ingredient name", name)?,
            require_text("Unit", unit)?,
            require_amount("Price per unit", price_per_unit, AmountRule::NonNegative)?,
        );

        self.store.ingredients().upsert(entry.clone())?;
        self.store.ingredients().save()?;

        self.store.audit(&AuditEntry::create(
            EntityType::Ingredient,
            entry.id.to_string(),
            self.owner.owner_id().as_str(),
            Some(entry.name.clone()),
            &entry,
        ))?;

        log::info!("added ingredient {} ({})", entry.id, entry.name);
        Ok(entry)
    }

    /// The catalog, sorted by name
    pub fn list(&self) -> ShopbooksResult<Vec<IngredientCatalogEntry>> {
        self.store.fetch_ingredients(self.owner.owner_id())
    }

    /// Find an entry by exact name (case-insensitive), or failing that by ID
    pub fn find(&self, reference: &str) -> ShopbooksResult<IngredientCatalogEntry> {
        let wanted = reference.trim().to_lowercase();
        let by_name: Vec<_> = self
            .list()?
            .into_iter()
            .filter(|e| e.name.to_lowercase() == wanted)
            .collect();
        if !by_name.is_empty() {
            return single_match(by_name, reference, ShopbooksError::ingredient_not_found);
        }

        let by_id = self
            .store
            .ingredients()
            .find_by_ref(self.owner.owner_id(), reference)?;
        single_match(by_id, reference, ShopbooksError::ingredient_not_found)
    }

    pub fn update(
        &self,
        reference: &str,
        changes: &IngredientUpdate,
    ) -> ShopbooksResult<IngredientCatalogEntry> {
        let before = self.find(reference)?;

        let mut after = before.clone();
        if let Some(name) = &changes.name {
            after.name = require_text("Ingredient name", name)?;
        }
        if let Some(unit) = &changes.unit {
            after.unit = require_text("Unit", unit)?;
        }
        if let Some(price) = changes.price_per_unit {
            after.price_per_unit = require_amount("Price per unit", price, AmountRule::NonNegative)?;
        }

        let before_json = serde_json::to_value(&before)?;
        let after_json = serde_json::to_value(&after)?;
        let Some(diff) = generate_diff(&before_json, &after_json) else {
            return Ok(before);
        };

        self.store.ingredients().upsert(after.clone())?;
        self.store.ingredients().save()?;

        self.store.audit(&AuditEntry::update(
            EntityType::Ingredient,
            after.id.to_string(),
            self.owner.owner_id().as_str(),
            Some(after.name.clone()),
            &before,
            &after,
            Some(diff),
        ))?;

        log::info!("updated ingredient {}", after.id);
        Ok(after)
    }

    pub fn delete(&self, reference: &str) -> ShopbooksResult<IngredientCatalogEntry> {
        let entry = self.find(reference)?;

        self.store.ingredients().delete(entry.id)?;
        self.store.ingredients().save()?;

        self.store.audit(&AuditEntry::delete(
            EntityType::Ingredient,
            entry.id.to_string(),
            self.owner.owner_id().as_str(),
            Some(entry.name.clone()),
            &entry,
        ))?;

        log::info!("deleted ingredient {}", entry.id);
        Ok(entry)
    }

    /// Cost a product from `(ingredient reference, quantity used)` pairs
    pub fn cost_product(&self, usage: &[(String, f64)]) -> ShopbooksResult<ProductCosting> {
        if usage.is_empty() {
            return Err(ShopbooksError::Validation(
                "A product needs at least one ingredient".into(),
            ));
        }

        let lines = usage
            .iter()
            .map(|(reference, quantity)| -> ShopbooksResult<ProductCostLine> {
                Ok(ProductCostLine {
                    ingredient: self.find(reference)?,
                    quantity_used: require_amount("Quantity used", *quantity, AmountRule::NonNegative)?,
                })
            })
            .collect::<ShopbooksResult<Vec<_>>>()?;

        let total = product_cost(&lines);
        Ok(ProductCosting { lines, total })
    }
}
