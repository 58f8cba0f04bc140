//! Audit trail for record mutations
//!
//! Every create, update and delete of a cost, revenue or ingredient entry is
//! appended to `audit.log` as one JSON line, with the record's state before
//! and after the change and a short field-level diff for updates.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
