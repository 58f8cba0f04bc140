//! Owner-indexed JSON repository
//!
//! One repository per collection (`costs.json`, `revenues.json`,
//! `ingredients.json`). Records are held in memory behind `RwLock`s with a
//! secondary index from owner to record IDs, and written back atomically on
//! `save`.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ShopbooksError;
use crate::models::{
    CostId, CostRecord, IngredientCatalogEntry, IngredientId, OwnerId, RevenueId, RevenueRecord,
};

use super::file_io::{read_json, write_json_atomic};

/// A record type that can live in a [`Repository`]
pub trait Stored: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + Hash + fmt::Display;

    /// Entity name used in logs and audit entries
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;

    fn owner_id(&self) -> &OwnerId;

    /// True if `reference` is this record's display ID or a prefix of its UUID
    fn matches_ref(&self, reference: &str) -> bool;

    /// Order used by listings
    fn listing_order(a: &Self, b: &Self) -> Ordering;
}

impl Stored for CostRecord {
    type Id = CostId;
    const ENTITY: &'static str = "Cost";

    fn id(&self) -> CostId {
        self.id
    }

    fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    fn matches_ref(&self, reference: &str) -> bool {
        self.id.matches_short(reference)
    }

    // Newest first
    fn listing_order(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

impl Stored for RevenueRecord {
    type Id = RevenueId;
    const ENTITY: &'static str = "Revenue";

    fn id(&self) -> RevenueId {
        self.id
    }

    fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    fn matches_ref(&self, reference: &str) -> bool {
        self.id.matches_short(reference)
    }

    // Newest first
    fn listing_order(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

impl Stored for IngredientCatalogEntry {
    type Id = IngredientId;
    const ENTITY: &'static str = "Ingredient";

    fn id(&self) -> IngredientId {
        self.id
    }

    fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    fn matches_ref(&self, reference: &str) -> bool {
        self.id.matches_short(reference)
    }

    fn listing_order(a: &Self, b: &Self) -> Ordering {
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    }
}

/// Serializable file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct RecordData<T> {
    records: Vec<T>,
}

impl<T> Default for RecordData<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

fn lock_error(e: impl fmt::Display) -> ShopbooksError {
    ShopbooksError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Repository for one record collection
pub struct Repository<T: Stored> {
    /// Backing file; `None` keeps the repository purely in memory
    path: Option<PathBuf>,
    data: RwLock<HashMap<T::Id, T>>,
    /// Index: owner -> record ids
    by_owner: RwLock<HashMap<OwnerId, Vec<T::Id>>>,
}

impl<T: Stored> Repository<T> {
    /// Create a repository backed by a JSON file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Create a repository that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk and rebuild the owner index
    pub fn load(&self) -> Result<(), ShopbooksError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let file_data: RecordData<T> = read_json(path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_owner = self.by_owner.write().map_err(lock_error)?;

        data.clear();
        by_owner.clear();

        for record in file_data.records {
            let id = record.id();
            by_owner
                .entry(record.owner_id().clone())
                .or_default()
                .push(id);
            data.insert(id, record);
        }

        log::debug!("loaded {} {} records from {}", data.len(), T::ENTITY, path.display());
        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), ShopbooksError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = self.data.read().map_err(lock_error)?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(T::listing_order);

        write_json_atomic(path, &RecordData { records })
    }

    /// Get a record by ID regardless of owner
    pub fn get(&self, id: T::Id) -> Result<Option<T>, ShopbooksError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Get a record by ID only if it belongs to `owner`
    pub fn get_owned(&self, owner: &OwnerId, id: T::Id) -> Result<Option<T>, ShopbooksError> {
        Ok(self.get(id)?.filter(|r| r.owner_id() == owner))
    }

    /// All records belonging to `owner`, in listing order
    pub fn get_by_owner(&self, owner: &OwnerId) -> Result<Vec<T>, ShopbooksError> {
        let data = self.data.read().map_err(lock_error)?;
        let by_owner = self.by_owner.read().map_err(lock_error)?;

        let ids = by_owner.get(owner).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut records: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        records.sort_by(T::listing_order);
        Ok(records)
    }

    /// Records of `owner` whose ID matches a short reference
    pub fn find_by_ref(&self, owner: &OwnerId, reference: &str) -> Result<Vec<T>, ShopbooksError> {
        let reference = reference.trim();
        Ok(self
            .get_by_owner(owner)?
            .into_iter()
            .filter(|r| r.matches_ref(reference))
            .collect())
    }

    /// Insert or update a record
    pub fn upsert(&self, record: T) -> Result<(), ShopbooksError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_owner = self.by_owner.write().map_err(lock_error)?;

        let id = record.id();
        if let Some(old) = data.get(&id) {
            if let Some(ids) = by_owner.get_mut(old.owner_id()) {
                ids.retain(|&existing| existing != id);
            }
        }

        by_owner
            .entry(record.owner_id().clone())
            .or_default()
            .push(id);
        data.insert(id, record);
        Ok(())
    }

    /// Delete a record, returning whether it existed
    pub fn delete(&self, id: T::Id) -> Result<bool, ShopbooksError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_owner = self.by_owner.write().map_err(lock_error)?;

        if let Some(record) = data.remove(&id) {
            if let Some(ids) = by_owner.get_mut(record.owner_id()) {
                ids.retain(|&existing| existing != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count all records
    pub fn count(&self) -> Result<usize, ShopbooksError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}

/// Repository for cost records
pub type CostRepository = Repository<CostRecord>;
/// Repository for revenue records
pub type RevenueRepository = Repository<RevenueRecord>;
/// Repository for the ingredient catalog
pub type IngredientRepository = Repository<IngredientCatalogEntry>;
