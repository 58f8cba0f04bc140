//! Revenue service

use crate::audit::{generate_diff, AuditEntry, EntityType};
use crate::error::{ShopbooksError, ShopbooksResult};
use crate::models::{LedgerRecord, OwnerContext, RevenueRecord};
use crate::storage::RecordStore;

use super::input::{single_match, validate_input, AmountRule, RecordInput, RecordUpdate};
use super::period::MonthFilter;

const LABEL_FIELD: &str = "Item name";

/// Service for sales records
///
/// Sales must carry a positive quantity and price; a zero-priced sale is
/// rejected where a zero-priced cost is not.
pub struct RevenueService<'a> {
    store: &'a dyn RecordStore,
    owner: &'a OwnerContext,
}

impl<'a> RevenueService<'a> {
    pub fn new(store: &'a dyn RecordStore, owner: &'a OwnerContext) -> Self {
        Self { store, owner }
    }

    pub fn create(&self, input: &RecordInput) -> ShopbooksResult<RevenueRecord> {
        let input = validate_input(input, LABEL_FIELD, AmountRule::Positive)?;

        let revenue = RevenueRecord::new(
            self.owner.owner_id().clone(),
            input.label,
            input.quantity,
            input.price,
            input.date,
        );

        self.store.revenues().upsert(revenue.clone())?;
        self.store.revenues().save()?;

        self.store.audit(&AuditEntry::create(
            EntityType::Revenue,
            revenue.id.to_string(),
            self.owner.owner_id().as_str(),
            Some(revenue.item_name.clone()),
            &revenue,
        ))?;

        log::info!("created revenue {} ({})", revenue.id, revenue.item_name);
        Ok(revenue)
    }

    pub fn list(&self) -> ShopbooksResult<Vec<RevenueRecord>> {
        self.store.fetch_revenues(self.owner.owner_id())
    }

    pub fn list_for(&self, filter: &MonthFilter) -> ShopbooksResult<Vec<RevenueRecord>> {
        let revenues = self.list()?;
        Ok(filter.apply(&revenues).into_iter().cloned().collect())
    }

    pub fn find(&self, reference: &str) -> ShopbooksResult<RevenueRecord> {
        let matches = self
            .store
            .revenues()
            .find_by_ref(self.owner.owner_id(), reference)?;
        single_match(matches, reference, ShopbooksError::revenue_not_found)
    }

    pub fn update(
        &self,
        reference: &str,
        changes: &RecordUpdate,
    ) -> ShopbooksResult<RevenueRecord> {
        let before = self.find(reference)?;
        if changes.is_empty() {
            return Ok(before);
        }

        let merged = validate_input(
            &RecordInput {
                label: changes
                    .label
                    .clone()
                    .unwrap_or_else(|| before.item_name.clone()),
                quantity: changes.quantity.unwrap_or(before.quantity_or_zero()),
                price: changes.price.unwrap_or(before.price_or_zero()),
                date: changes
                    .date
                    .clone()
                    .or_else(|| before.date.clone())
                    .unwrap_or_default(),
            },
            LABEL_FIELD,
            AmountRule::Positive,
        )?;

        let after = RevenueRecord {
            item_name: merged.label,
            quantity: Some(merged.quantity),
            price: Some(merged.price),
            date: Some(merged.date),
            ..before.clone()
        };

        self.store.revenues().upsert(after.clone())?;
        self.store.revenues().save()?;

        let diff = generate_diff(&serde_json::to_value(&before)?, &serde_json::to_value(&after)?);
        self.store.audit(&AuditEntry::update(
            EntityType::Revenue,
            after.id.to_string(),
            self.owner.owner_id().as_str(),
            Some(after.item_name.clone()),
            &before,
            &after,
            diff,
        ))?;

        log::info!("updated revenue {}", after.id);
        Ok(after)
    }

    pub fn delete(&self, reference: &str) -> ShopbooksResult<RevenueRecord> {
        let revenue = self.find(reference)?;

        self.store.revenues().delete(revenue.id)?;
        self.store.revenues().save()?;

        self.store.audit(&AuditEntry::delete(
            EntityType::Revenue,
            revenue.id.to_string(),
            self.owner.owner_id().as_str(),
            Some(revenue.item_name.clone()),
            &revenue,
        ))?;

        log::info!("deleted revenue {}", revenue.id);
        Ok(revenue)
    }
}
