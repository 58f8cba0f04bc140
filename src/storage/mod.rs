//! Storage layer for shopbooks
//!
//! JSON file storage with atomic writes. The [`RecordStore`] trait is the
//! seam the services and reports go through; [`Storage`] backs it with files
//! under the data directory and [`MemoryStore`] keeps everything in memory.

pub mod file_io;
pub mod repository;

pub use file_io::{read_json, write_json_atomic};
pub use repository::{CostRepository, IngredientRepository, Repository, RevenueRepository, Stored};

use std::sync::RwLock;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ShopbooksPaths;
use crate::error::{ShopbooksError, ShopbooksResult};
use crate::models::{CostRecord, IngredientCatalogEntry, OwnerId, RevenueRecord};

/// Owner-scoped access to cost, revenue and ingredient records
pub trait RecordStore {
    fn costs(&self) -> &CostRepository;

    fn revenues(&self) -> &RevenueRepository;

    fn ingredients(&self) -> &IngredientRepository;

    /// Record an audit entry for a mutation
    fn audit(&self, entry: &AuditEntry) -> ShopbooksResult<()>;

    /// All cost records belonging to `owner`, newest first
    fn fetch_costs(&self, owner: &OwnerId) -> ShopbooksResult<Vec<CostRecord>> {
        self.costs().get_by_owner(owner)
    }

    /// All revenue records belonging to `owner`, newest first
    fn fetch_revenues(&self, owner: &OwnerId) -> ShopbooksResult<Vec<RevenueRecord>> {
        self.revenues().get_by_owner(owner)
    }

    /// The owner's ingredient catalog, sorted by name
    fn fetch_ingredients(&self, owner: &OwnerId) -> ShopbooksResult<Vec<IngredientCatalogEntry>> {
        self.ingredients().get_by_owner(owner)
    }
}

/// File-backed store rooted at a [`ShopbooksPaths`] base directory
pub struct Storage {
    paths: ShopbooksPaths,
    audit_logger: AuditLogger,
    pub costs: CostRepository,
    pub revenues: RevenueRepository,
    pub ingredients: IngredientRepository,
}

impl Storage {
    /// Create a Storage instance, creating directories as needed
    pub fn new(paths: ShopbooksPaths) -> ShopbooksResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            audit_logger: AuditLogger::new(paths.audit_log()),
            costs: CostRepository::new(paths.costs_file()),
            revenues: RevenueRepository::new(paths.revenues_file()),
            ingredients: IngredientRepository::new(paths.ingredients_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &ShopbooksPaths {
        &self.paths
    }

    pub fn audit_logger(&self) -> &AuditLogger {
        &self.audit_logger
    }

    /// Load all data from disk
    pub fn load_all(&self) -> ShopbooksResult<()> {
        self.costs.load()?;
        self.revenues.load()?;
        self.ingredients.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> ShopbooksResult<()> {
        self.costs.save()?;
        self.revenues.save()?;
        self.ingredients.save()?;
        Ok(())
    }
}

impl RecordStore for Storage {
    fn costs(&self) -> &CostRepository {
        &self.costs
    }

    fn revenues(&self) -> &RevenueRepository {
        &self.revenues
    }

    fn ingredients(&self) -> &IngredientRepository {
        &self.ingredients
    }

    fn audit(&self, entry: &AuditEntry) -> ShopbooksResult<()> {
        self.audit_logger.log(entry)
    }
}

/// Store that never touches the filesystem
///
/// Audit entries are kept in memory and can be inspected with
/// [`MemoryStore::audit_entries`].
pub struct MemoryStore {
    costs: CostRepository,
    revenues: RevenueRepository,
    ingredients: IngredientRepository,
    audit_entries: RwLock<Vec<AuditEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            costs: CostRepository::in_memory(),
            revenues: RevenueRepository::in_memory(),
            ingredients: IngredientRepository::in_memory(),
            audit_entries: RwLock::new(Vec::new()),
        }
    }

    /// Audit entries recorded so far, oldest first
    pub fn audit_entries(&self) -> ShopbooksResult<Vec<AuditEntry>> {
        let entries = self
            .audit_entries
            .read()
            .map_err(|e| ShopbooksError::Storage(format!("Failed to acquire lock: {}", e)))?;
        Ok(entries.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn costs(&self) -> &CostRepository {
        &self.costs
    }

    fn revenues(&self) -> &RevenueRepository {
        &self.revenues
    }

    fn ingredients(&self) -> &IngredientRepository {
        &self.ingredients
    }

    fn audit(&self, entry: &AuditEntry) -> ShopbooksResult<()> {
        let mut entries = self
            .audit_entries
            .write()
            .map_err(|e| ShopbooksError::Storage(format!("Failed to acquire lock: {}", e)))?;
        entries.push(entry.clone());
        Ok(())
    }
}
