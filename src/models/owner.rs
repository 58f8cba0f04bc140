//! Record ownership
//!
//! The auth provider hands out opaque user identifiers. Every stored record
//! carries one, and every query is scoped by an explicit [`OwnerContext`]
//! rather than by ambient "current user" state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of the user who owns a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Wrap an identifier, rejecting blank input
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The signed-in principal on whose behalf an operation runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerContext {
    owner: OwnerId,
}

impl OwnerContext {
    pub fn new(owner: OwnerId) -> Self {
        Self { owner }
    }

    /// Resolve the owner from the first non-blank candidate
    ///
    /// The CLI passes `--owner`/`SHOPBOOKS_OWNER` first, then the configured
    /// default owner.
    pub fn resolve<'a, I>(candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        candidates
            .into_iter()
            .flatten()
            .find_map(OwnerId::parse)
            .map(Self::new)
    }

    pub fn owner_id(&self) -> &OwnerId {
        &self.owner
    }

    /// Check whether a record's owner is this context's owner
    pub fn owns(&self, owner_id: &OwnerId) -> bool {
        &self.owner == owner_id
    }
}
