//! Cost service
//!
//! Owner-scoped create, edit, delete and listing of ingredient purchases.

use crate::audit::{generate_diff, AuditEntry, EntityType};
use crate::error::{ShopbooksError, ShopbooksResult};
use crate::models::{CostRecord, LedgerRecord, OwnerContext};
use crate::storage::RecordStore;

use super::input::{single_match, validate_input, AmountRule, RecordInput, RecordUpdate};
use super::period::MonthFilter;

const LABEL_FIELD: &str = "Ingredient name";

/// Service for cost records
pub struct CostService<'a> {
    store: &'a dyn RecordStore,
    owner: &'a OwnerContext,
}

impl<'a> CostService<'a> {
    pub fn new(store: &'a dyn RecordStore, owner: &'a OwnerContext) -> Self {
        Self { store, owner }
    }

    /// Record a new purchase
    pub fn create(&self, input: &RecordInput) -> ShopbooksResult<CostRecord> {
        let input = validate_input(input, LABEL_FIELD, AmountRule::NonNegative)?;

        let cost = CostRecord::new(
            self.owner.owner_id().clone(),
            input.label,
            input.quantity,
            input.price,
            input.date,
        );

        self.store.costs().upsert(cost.clone())?;
        self.store.costs().save()?;

        self.store.audit(&AuditEntry::create(
            EntityType::Cost,
            cost.id.to_string(),
            self.owner.owner_id().as_str(),
            Some(cost.name.clone()),
            &cost,
        ))?;

        log::info!("created cost {} ({})", cost.id, cost.name);
        Ok(cost)
    }

    /// All of the owner's costs, newest first
    pub fn list(&self) -> ShopbooksResult<Vec<CostRecord>> {
        self.store.fetch_costs(self.owner.owner_id())
    }

    /// The owner's costs in the selected month, newest first
    pub fn list_for(&self, filter: &MonthFilter) -> ShopbooksResult<Vec<CostRecord>> {
        let costs = self.list()?;
        Ok(filter.apply(&costs).into_iter().cloned().collect())
    }

    /// Find one of the owner's costs by (short) ID
    pub fn find(&self, reference: &str) -> ShopbooksResult<CostRecord> {
        let matches = self
            .store
            .costs()
            .find_by_ref(self.owner.owner_id(), reference)?;
        single_match(matches, reference, ShopbooksError::cost_not_found)
    }

    /// Apply changes to a cost and re-validate the result
    pub fn update(&self, reference: &str, changes: &RecordUpdate) -> ShopbooksResult<CostRecord> {
        let before = self.find(reference)?;
        if changes.is_empty() {
            return Ok(before);
        }

        let merged = RecordInput {
            label: changes.label.clone().unwrap_or_else(|| before.name.clone()),
            quantity: changes.quantity.unwrap_or(before.quantity_or_zero()),
            price: changes.price.unwrap_or(before.price_or_zero()),
            date: changes
                .date
                .clone()
                .or_else(|| before.date.clone())
                .unwrap_or_default(),
        };
        let merged = validate_input(&merged, LABEL_FIELD, AmountRule::NonNegative)?;

        let mut after = before.clone();
        after.name = merged.label;
        after.quantity = Some(merged.quantity);
        after.price = Some(merged.price);
        after.date = Some(merged.date);

        self.store.costs().upsert(after.clone())?;
        self.store.costs().save()?;

        let diff = generate_diff(&serde_json::to_value(&before)?, &serde_json::to_value(&after)?);
        self.store.audit(&AuditEntry::update(
            EntityType::Cost,
            after.id.to_string(),
            self.owner.owner_id().as_str(),
            Some(after.name.clone()),
            &before,
            &after,
            diff,
        ))?;

        log::info!("updated cost {}", after.id);
        Ok(after)
    }

    /// Delete one of the owner's costs, returning the removed record
    pub fn delete(&self, reference: &str) -> ShopbooksResult<CostRecord> {
        let cost = self.find(reference)?;

        self.store.costs().delete(cost.id)?;
        self.store.costs().save()?;

        self.store.audit(&AuditEntry::delete(
            EntityType::Cost,
            cost.id.to_string(),
            self.owner.owner_id().as_str(),
            Some(cost.name.clone()),
            &cost,
        ))?;

        log::info!("deleted cost {}", cost.id);
        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ShopbooksPaths;
    use crate::models::OwnerId;
    use crate::storage::{MemoryStore, Storage};
    use tempfile::TempDir;

    fn ctx(owner: &str) -> OwnerContext {
        OwnerContext::new(OwnerId::parse(owner).unwrap())
    }

    fn flour() -> RecordInput {
        RecordInput {
            label: "Flour".to_string(),
            quantity: 2.0,
            price: 50000.0,
            date: "2025-05-01".to_string(),
        }
    }

    #[test]
    fn test_create_and_list() {
        let store = MemoryStore::new();
        let owner = ctx("alice");
        let service = CostService::new(&store, &owner);

        let cost = service.create(&flour()).unwrap();
        assert_eq!(cost.owner_id.as_str(), "alice");

        let costs = service.list().unwrap();
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[0].name, "Flour");

        let audit = store.audit_entries().unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].operation, Operation::Create);
    }

    #[test]
    fn test_zero_price_allowed_negative_rejected() {
        let store = MemoryStore::new();
        let owner = ctx("alice");
        let service = CostService::new(&store, &owner);

        let free = RecordInput {
            price: 0.0,
            ..flour()
        };
        assert!(service.create(&free).is_ok());

        let negative = RecordInput {
            quantity: -1.0,
            ..flour()
        };
        assert!(service.create(&negative).unwrap_err().is_validation());
    }

    #[test]
    fn test_invalid_date_rejected() {
        let store = MemoryStore::new();
        let owner = ctx("alice");
        let service = CostService::new(&store, &owner);

        let input = RecordInput {
            date: "01/05/2025".to_string(),
            ..flour()
        };
        assert!(service.create(&input).unwrap_err().is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_merges_and_audits_diff() {
        let store = MemoryStore::new();
        let owner = ctx("alice");
        let service = CostService::new(&store, &owner);
        let cost = service.create(&flour()).unwrap();

        let changes = RecordUpdate {
            price: Some(55000.0),
            ..Default::default()
        };
        let updated = service.update(&cost.id.to_string(), &changes).unwrap();
        assert_eq!(updated.price, Some(55000.0));
        assert_eq!(updated.name, "Flour");
        assert_eq!(updated.created_at, cost.created_at);

        let audit = store.audit_entries().unwrap();
        let diff = audit[1].diff_summary.as_deref().unwrap();
        assert!(diff.contains("price"));
    }

    #[test]
    fn test_list_for_month() {
        let store = MemoryStore::new();
        let owner = ctx("alice");
        let service = CostService::new(&store, &owner);
        service.create(&flour()).unwrap();
        service
            .create(&RecordInput {
                date: "2025-06-01".to_string(),
                ..flour()
            })
            .unwrap();

        let may = service.list_for(&MonthFilter::parse("2025-05").unwrap()).unwrap();
        assert_eq!(may.len(), 1);
        assert_eq!(may[0].month(), Some("2025-05"));
        assert_eq!(service.list_for(&MonthFilter::all()).unwrap().len(), 2);
    }

    #[test]
    fn test_other_owner_cannot_touch_record() {
        let store = MemoryStore::new();
        let alice = ctx("alice");
        let bob = ctx("bob");
        let cost = CostService::new(&store, &alice).create(&flour()).unwrap();

        let as_bob = CostService::new(&store, &bob);
        assert!(as_bob.list().unwrap().is_empty());
        assert!(as_bob.delete(&cost.id.to_string()).unwrap_err().is_not_found());
        assert!(as_bob
            .update(&cost.id.to_string(), &RecordUpdate { price: Some(1.0), ..Default::default() })
            .unwrap_err()
            .is_not_found());

        assert_eq!(CostService::new(&store, &alice).list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_persists_to_disk() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopbooksPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        let owner = ctx("alice");
        let service = CostService::new(&storage, &owner);

        let cost = service.create(&flour()).unwrap();
        service.delete(&cost.id.to_string()).unwrap();

        let reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert!(reopened.fetch_costs(owner.owner_id()).unwrap().is_empty());
        assert_eq!(reopened.audit_logger().read_all().unwrap().len(), 2);
    }
}
